//! `dict` CLI: read, update and convert JSON/YAML documents by pointer path.
//!
//! ## Usage
//!
//! ```sh
//! # Print the value at a pointer (stdin → stdout)
//! echo '{"hello":"world"}' | dict get /hello
//!
//! # Read from a file; the format follows the extension
//! dict get -i accesses.yml /accesses/2/users
//!
//! # Replace a value and write the new document
//! dict set -i accesses.json -o out.json /accesses/0/name '"viewer"'
//!
//! # Convert between formats
//! dict convert -i accesses.json --to yaml
//! ```
//!
//! Set `RUST_LOG=debug` (or pass `-v`) to see navigation diagnostics.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dict_core::{Format, Value};
use std::io::{self, Read};

#[derive(Parser)]
#[command(name = "dict", version, about = "JSON/YAML pointer navigation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log navigation diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the value found at a pointer path
    Get {
        /// Pointer path such as /accesses/2/users ("" for the whole document)
        path: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Input format: json or yaml (defaults to the file extension, else json)
        #[arg(long)]
        format: Option<String>,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// Replace the value at a pointer path and print the new document
    Set {
        /// Pointer path of the location to replace
        path: String,
        /// Replacement value as JSON text (e.g. '"text"', 42, '[1,2]')
        value: String,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Document format: json or yaml (defaults to the file extension, else json)
        #[arg(long)]
        format: Option<String>,
    },
    /// Re-encode a document in another format
    Convert {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Input format (defaults to the file extension, else json)
        #[arg(long)]
        from: Option<String>,
        /// Output format: json or yaml
        #[arg(long)]
        to: String,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Get {
            path,
            input,
            format,
            compact,
        } => {
            let doc_format = resolve_format(input.as_deref(), format.as_deref())?;
            let doc = read_document(input.as_deref(), doc_format)?;
            let found = dict_core::try_find_pointer(&doc, &path)
                .with_context(|| format!("Failed to find {}", path))?;
            let text = Format::Json
                .write(found, !compact)
                .context("Failed to write JSON")?;
            println!("{}", text);
        }
        Commands::Set {
            path,
            value,
            input,
            output,
            format,
        } => {
            let doc_format = resolve_format(input.as_deref(), format.as_deref())?;
            let doc = read_document(input.as_deref(), doc_format)?;
            let replacement = Format::Json
                .read(&value)
                .with_context(|| format!("Failed to parse replacement value: {}", value))?;
            let updated = dict_core::try_set_at_pointer(&doc, &path, replacement)
                .with_context(|| format!("Failed to set {}", path))?;
            let text = doc_format
                .write(&updated, true)
                .with_context(|| format!("Failed to write {}", doc_format))?;
            write_output(output.as_deref(), &text)?;
        }
        Commands::Convert {
            input,
            output,
            from,
            to,
            compact,
        } => {
            let doc_format = resolve_format(input.as_deref(), from.as_deref())?;
            let doc = read_document(input.as_deref(), doc_format)?;
            let target: Format = to.parse()?;
            let text = target
                .write(&doc, !compact)
                .with_context(|| format!("Failed to write {}", target))?;
            write_output(output.as_deref(), &text)?;
        }
    }

    Ok(())
}

/// `-v` forces debug output; otherwise `RUST_LOG` decides, defaulting to warn.
fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

/// Explicit `--format` wins, then the input file's extension, then JSON.
fn resolve_format(input: Option<&str>, format: Option<&str>) -> Result<Format> {
    match (format, input) {
        (Some(name), _) => Ok(name.parse()?),
        (None, Some(path)) => Format::from_path(path)
            .with_context(|| format!("Cannot tell the format of {}; pass --format", path)),
        (None, None) => Ok(Format::Json),
    }
}

fn read_document(input: Option<&str>, format: Format) -> Result<Value> {
    let text = read_input(input)?;
    log::debug!("parsing {} bytes as {}", text.len(), format);
    format
        .read(&text)
        .with_context(|| format!("Failed to parse {} input", format))
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
