//! Chainable, path-tracking access into a [`Value`] tree.
//!
//! An [`Accessor`] is either *found* (a borrowed value plus the pointer path
//! that reached it) or *failed* (a message plus the path reached before the
//! failing step). Navigation on a failed accessor returns it unchanged, so a
//! long chain can be written without intermediate checks and still report
//! exactly where it went wrong:
//!
//! ```
//! use dict_core::{array, object, Accessor, Value};
//!
//! let doc = Value::from(object! {
//!     "accesses" => array![object! { "name" => "view" }],
//! });
//!
//! let name = Accessor::from(&doc).object("accesses").vector(0).object("name");
//! assert_eq!(name.string(), "view");
//!
//! let missing = Accessor::from(&doc).object("accesses").object("name").vector(4);
//! assert_eq!(missing.string(), "Path: /accesses Err: Dict is not an object");
//! ```

use crate::value::{Object, Value};

/// Returned by [`Accessor::size`] when the accessor is failed or does not
/// hold an array. Any `index < size` check against it passes, and the
/// following [`Accessor::vector`] call then reports the real problem.
pub const INVALID_SIZE: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
enum State<'a> {
    Found(&'a Value),
    Failed(String),
}

/// A sticky-error cursor over a borrowed [`Value`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor<'a> {
    state: State<'a>,
    path: String,
}

impl<'a> Accessor<'a> {
    /// Start a chain at `value`. `None` yields a failed accessor whose
    /// message is `nullopt`.
    pub fn new(value: Option<&'a Value>) -> Self {
        Self::with_path(value, "")
    }

    /// Start a chain at `value`, reporting paths relative to `path`.
    pub fn with_path(value: Option<&'a Value>, path: impl Into<String>) -> Self {
        let state = match value {
            Some(v) => State::Found(v),
            None => State::Failed("nullopt".to_string()),
        };
        Self {
            state,
            path: path.into(),
        }
    }

    fn fail(&self, message: String) -> Self {
        log::trace!("accessor failed at '{}': {}", self.path, message);
        Self {
            state: State::Failed(message),
            path: self.path.clone(),
        }
    }

    /// Step into the member `key` of the current object.
    pub fn object(&self, key: &str) -> Self {
        let value = match self.state {
            State::Found(v) => v,
            State::Failed(_) => return self.clone(),
        };
        let Some(object) = value.as_object() else {
            return self.fail("Err: Dict is not an object".to_string());
        };
        let Some(child) = object.get(key) else {
            return self.fail(format!("Err: {key} not found"));
        };

        let path = format!("{}/{}", self.path, key);
        log::trace!("accessor path now {path}");
        Self {
            state: State::Found(child),
            path,
        }
    }

    /// Step into element `index` of the current array.
    pub fn vector(&self, index: usize) -> Self {
        let value = match self.state {
            State::Found(v) => v,
            State::Failed(_) => return self.clone(),
        };
        let Some(items) = value.as_array() else {
            return self.fail("Err: Dict is not a vector".to_string());
        };
        let Some(child) = items.get(index) else {
            return self.fail(format!("Err: index {index} is invalid"));
        };

        let path = format!("{}/{}", self.path, index);
        log::trace!("accessor path now {path}");
        Self {
            state: State::Found(child),
            path,
        }
    }

    /// The current string, or a diagnostic in its place.
    ///
    /// A failed accessor yields its [`error`](Self::error) text; a found
    /// non-string yields `"Err: not a string"`.
    pub fn string(&self) -> String {
        match self.state {
            State::Found(v) => v
                .as_str()
                .map_or_else(|| "Err: not a string".to_string(), str::to_string),
            State::Failed(_) => self.error().unwrap_or_default(),
        }
    }

    /// The current integer. `None` (with the reason logged) otherwise.
    pub fn num(&self) -> Option<i64> {
        self.leaf("a number", Value::as_integer)
    }

    /// The current boolean. `None` (with the reason logged) otherwise.
    pub fn boolean(&self) -> Option<bool> {
        self.leaf("a boolean", Value::as_bool)
    }

    fn leaf<T>(&self, expected: &str, extract: impl Fn(&Value) -> Option<T>) -> Option<T> {
        match self.state {
            State::Found(v) => {
                let found = extract(v);
                if found.is_none() {
                    log::debug!("Path: {} Err: not {expected}", self.path);
                }
                found
            }
            State::Failed(_) => {
                log::debug!("{}", self.error().unwrap_or_default());
                None
            }
        }
    }

    /// The current object, or an empty one (with the reason logged) so the
    /// caller can keep iterating.
    pub fn object_or_empty(&self) -> Object {
        match self.state {
            State::Found(Value::Object(object)) => object.clone(),
            State::Found(_) => {
                log::error!("error: Dict is not an object returning empty object");
                Object::new()
            }
            State::Failed(_) => {
                log::error!(
                    "error: {} returning empty object",
                    self.error().unwrap_or_default()
                );
                Object::new()
            }
        }
    }

    /// The current array, or an empty one (with the reason logged).
    pub fn vector_or_empty(&self) -> Vec<Value> {
        match self.state {
            State::Found(Value::Array(items)) => items.clone(),
            State::Found(_) => {
                log::error!("error: Dict is not a vector returning empty vector");
                Vec::new()
            }
            State::Failed(_) => {
                log::error!(
                    "error: {} returning empty vector",
                    self.error().unwrap_or_default()
                );
                Vec::new()
            }
        }
    }

    /// Number of elements of the current array, or [`INVALID_SIZE`] when the
    /// accessor is failed or holds something else.
    ///
    /// An empty array and a failed chain are told apart with
    /// [`error`](Self::error), not with this value.
    pub fn size(&self) -> usize {
        match self.state {
            State::Found(Value::Array(items)) => items.len(),
            State::Found(_) => {
                log::trace!("underlying error is Err: not a vector");
                INVALID_SIZE
            }
            State::Failed(_) => {
                log::trace!("{}", self.error().unwrap_or_default());
                INVALID_SIZE
            }
        }
    }

    /// The rendered failure: `Path: <path> <message>`, without the prefix
    /// when nothing was navigated. `None` while the chain is found.
    pub fn error(&self) -> Option<String> {
        match &self.state {
            State::Found(_) => None,
            State::Failed(message) if self.path.is_empty() => Some(message.clone()),
            State::Failed(message) => Some(format!("Path: {} {}", self.path, message)),
        }
    }

    pub fn is_err(&self) -> bool {
        matches!(self.state, State::Failed(_))
    }

    /// Path navigated so far; on failure, the path before the failing step.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The value reached, if the chain is still found.
    pub fn value(&self) -> Option<&'a Value> {
        match self.state {
            State::Found(v) => Some(v),
            State::Failed(_) => None,
        }
    }
}

impl<'a> From<&'a Value> for Accessor<'a> {
    fn from(value: &'a Value) -> Self {
        Accessor::new(Some(value))
    }
}

impl<'a> From<Option<&'a Value>> for Accessor<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        Accessor::new(value)
    }
}

impl Value {
    /// Start an [`Accessor`] chain at this value.
    pub fn access(&self) -> Accessor<'_> {
        Accessor::from(self)
    }
}
