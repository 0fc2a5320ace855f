//! # dict-core
//!
//! A generic JSON/YAML document tree with two ways in: pointer paths for
//! one-shot reads and copy-on-write updates, and a chainable accessor that
//! carries the path it walked so a failed lookup says where it failed.
//!
//! ## Quick start
//!
//! ```rust
//! use dict_core::{array, find_pointer, object, set_at_pointer, Accessor, Value};
//!
//! let doc = Value::from(object! {
//!     "accesses" => array![
//!         object! { "name" => "view", "users" => array!["667d0baedfb1ed18430d8ed3"] },
//!         object! { "name" => "edit", "users" => array![] },
//!     ],
//! });
//!
//! // Pointer paths
//! let name = find_pointer(&doc, "/accesses/1/name").and_then(Value::as_str);
//! assert_eq!(name, Some("edit"));
//!
//! let renamed = set_at_pointer(&doc, "/accesses/1/name", Value::from("exec")).unwrap();
//! assert_eq!(renamed.pointer("/accesses/1/name"), Some(&Value::from("exec")));
//!
//! // Accessor chains
//! let users = Accessor::from(&doc).object("accesses").vector(0).object("users");
//! assert_eq!(users.size(), 1);
//! assert_eq!(
//!     Accessor::from(&doc).object("accesses").vector(2).string(),
//!     "Path: /accesses Err: index 2 is invalid"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`value`]: `Value` / `Object` model and type-checked extraction
//! - [`pointer`]: `find_pointer` and copy-on-write `set_at_pointer`
//! - [`accessor`]: sticky-error `Accessor` chains
//! - [`format`]: JSON/YAML parsing and writing
//! - [`error`]: Error types

mod codec;

pub mod accessor;
pub mod error;
pub mod format;
pub mod pointer;
pub mod value;

pub use accessor::{Accessor, INVALID_SIZE};
pub use error::DictError;
pub use format::{parse, parse_file, write, Format};
pub use pointer::{find_pointer, set_at_pointer, try_find_pointer, try_set_at_pointer};
pub use value::{Object, Value};
