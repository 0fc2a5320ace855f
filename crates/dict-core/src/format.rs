//! Reading and writing [`Value`] trees as JSON or YAML text.
//!
//! The textual work is delegated to `serde_json` and `serde_yaml`. The lenient
//! [`parse`], [`parse_file`] and [`write`] entry points log their diagnostic and
//! return `None` or a `"???"` placeholder; the `try_*` functions and the
//! [`Format`] methods return the [`DictError`] instead.
//!
//! Only integers are representable, so a single float anywhere in the input
//! fails the whole document. In YAML that includes plain scalars such as
//! `version: 1.0`; quote them (`version: "1.0"`) to keep them as strings.

use std::fmt;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::error::{DictError, Result};
use crate::value::Value;

/// Written by [`write`] in place of a document it could not produce.
pub const WRITE_PLACEHOLDER: &str = "???";

/// A supported document syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from a file extension (`.json`, `.yml`, `.yaml`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| DictError::UnsupportedFormat(path.display().to_string()))?;
        ext.parse()
    }

    /// Parse `text` into a [`Value`].
    pub fn read(self, text: &str) -> Result<Value> {
        match self {
            Format::Json => Ok(serde_json::from_str(text)?),
            Format::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    /// Parse everything `reader` yields into a [`Value`].
    pub fn read_from(self, reader: impl Read) -> Result<Value> {
        match self {
            Format::Json => Ok(serde_json::from_reader(reader)?),
            Format::Yaml => Ok(serde_yaml::from_reader(reader)?),
        }
    }

    /// Render `value` as text. YAML output is always block style, so
    /// `pretty` only affects JSON.
    pub fn write(self, value: &Value, pretty: bool) -> Result<String> {
        match self {
            Format::Json if pretty => Ok(serde_json::to_string_pretty(value)?),
            Format::Json => Ok(serde_json::to_string(value)?),
            Format::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }
}

impl FromStr for Format {
    type Err = DictError;

    /// Accepts `json`, `yaml`, `yml`, with or without a leading dot, in any case.
    fn from_str(s: &str) -> Result<Self> {
        let name = s.strip_prefix('.').unwrap_or(s);
        match name.to_ascii_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(DictError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("json"),
            Format::Yaml => f.write_str("yaml"),
        }
    }
}

/// Parse `text` in the named format. `None` if the format is unknown or the
/// text is malformed.
///
/// ```
/// use dict_core::format::parse;
///
/// let doc = parse(r#"{"hello":"world"}"#, "json").unwrap();
/// assert_eq!(doc.get_str("hello"), Some("world"));
/// assert!(parse("hello: [", "yaml").is_none());
/// assert!(parse("{}", "toml").is_none());
/// ```
pub fn parse(text: &str, format: &str) -> Option<Value> {
    try_parse(text, format)
        .map_err(|err| log::error!("could not parse {format}: {err}"))
        .ok()
}

pub fn try_parse(text: &str, format: &str) -> Result<Value> {
    format.parse::<Format>()?.read(text)
}

/// Parse a stream in the given format. `None` on failure.
pub fn parse_reader(reader: impl Read, format: Format) -> Option<Value> {
    format
        .read_from(reader)
        .map_err(|err| log::error!("could not parse stream to {format}: {err}"))
        .ok()
}

/// Load a document, choosing the format from the file extension. `None` on
/// failure.
pub fn parse_file(path: impl AsRef<Path>) -> Option<Value> {
    let path = path.as_ref();
    try_parse_file(path)
        .map_err(|err| log::error!("could not load {}: {err}", path.display()))
        .ok()
}

/// Load a document, choosing the format from the file extension.
pub fn try_parse_file(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let text = std::fs::read_to_string(path).map_err(|source| DictError::Io {
        path: path.display().to_string(),
        source,
    })?;
    format.read(&text)
}

/// Render `value` in the named format, or [`WRITE_PLACEHOLDER`] if the format
/// is unknown.
pub fn write(value: &Value, format: &str, pretty: bool) -> String {
    match try_write(value, format, pretty) {
        Ok(text) => text,
        Err(err) => {
            log::error!("could not write {format}: {err}");
            WRITE_PLACEHOLDER.to_string()
        }
    }
}

pub fn try_write(value: &Value, format: &str, pretty: bool) -> Result<String> {
    format.parse::<Format>()?.write(value, pretty)
}
