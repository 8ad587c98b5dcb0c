//! # attr_errors
//!
//! Structured, chainable errors built from typed attributes and reusable
//! templates.
//!
//! ## Design Philosophy
//!
//! 1. **Errors are built from attributes**: module, function, operation,
//!    object, kind, code, free-form details and an optional cause
//! 2. **Templates carry what call sites share**, so each failure site only
//!    names what is specific to it
//! 3. **Classification never fails**: every value lands somewhere, unknown
//!    values become details
//! 4. **Reports are deterministic**: the rendered chain is reproducible
//!    byte for byte
//!
//! ## Attribute Rules
//!
//! - The last value of a single-valued category wins
//! - Details accumulate in order, joined by `"; "`
//! - Only the last cause is kept
//! - `None` is ignored entirely
//!
//! ## Quick Start
//!
//! ```rust
//! use attr_errors::{Code, Function, Kind, Module, Object, Operation, Result, attrs, t};
//!
//! fn check(expected: &str, actual: &str) -> Result<()> {
//!     let etpl = t!(Module::new("example"), Function::new("handler"), Object::new(expected.to_owned()));
//!     if actual.is_empty() {
//!         return Err(etpl.e(attrs![
//!             Operation::new("argument check"),
//!             Kind::new("b is empty string"),
//!             Code::new("E123"),
//!         ]));
//!     }
//!     if expected != actual {
//!         return Err(etpl.e(attrs![
//!             Operation::new("compare"),
//!             Kind::new("not equal"),
//!             Code::new("E456"),
//!             expected,
//!             actual,
//!         ]));
//!     }
//!     Ok(())
//! }
//!
//! let err = check("check", "test").unwrap_err();
//! assert_eq!(err.to_string(), "example/handler [check]\n   compare: not equal (E456): check; test");
//! assert!(check("test", "test").is_ok());
//! ```
//!
//! ## Wrapping
//!
//! Any error can be a cause. Errors built by this crate are rendered block by
//! block; any other error ends the report with its own message:
//!
//! ```rust
//! use attr_errors::{Kind, e};
//!
//! let io = std::io::Error::other("other error");
//! let err = e!(io, Kind::new("wrapper"));
//! assert_eq!(err.to_string(), "wrapper\n - other error");
//! ```
//!
//! ## Features
//!
//! - `tracing`: enables [`LogEntry::emit`], recording errors as structured
//!   `tracing` events

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod attributes;
pub mod classify;
pub mod convenience;
pub mod definitions;
pub mod formatter;
pub mod logging;
pub mod models;
pub mod render;
pub mod template;

pub use attributes::*;
pub use classify::*;
pub use definitions::*;
pub use formatter::*;
pub use logging::*;
pub use models::*;
pub use render::{Chain, Link};
pub use template::*;

/// Type alias for Results using our error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Build an [`Error`] from a list of attributes.
///
/// Equivalent to `Template::new().e(attrs)`. For mixed attribute types use
/// [`attrs!`] or the [`e!`] macro.
///
/// ```rust
/// let err = attr_errors::e(["file does not exist"]);
/// assert_eq!(err.to_string(), "file does not exist");
/// ```
pub fn e<I>(attrs: I) -> Error
where
    I: IntoIterator,
    I::Item: IntoAttr,
{
    Classifier::new().error(attrs)
}

/// Build a [`Template`] from a list of attributes.
///
/// For mixed attribute types use [`attrs!`] or the [`t!`] macro.
pub fn t<I>(attrs: I) -> Template
where
    I: IntoIterator,
    I::Item: IntoAttr,
{
    Classifier::new().template(attrs)
}

// ============================================================================
// Tests
// ============================================================================
