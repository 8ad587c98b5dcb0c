//! Error templates - reusable seeds for errors sharing common attributes.
//!
//! A template holds the attributes that every error raised from one place
//! shares (typically module and function, sometimes the object) so that each
//! failure site only names what is specific to it.
//!
//! ```rust
//! use attr_errors::{Code, Function, Kind, Module, Object, Operation, attrs, t};
//!
//! let etpl = t!(Module::new("example"), Function::new("handler"), Object::new("test"));
//!
//! let err = etpl.e(attrs![Operation::new("argument check"), Kind::new("b is empty string"), Code::new("E123")]);
//! assert_eq!(err.to_string(), "example/handler [test]\n   argument check: b is empty string (E123)");
//!
//! let err = etpl.e(attrs![Operation::new("compare"), Kind::new("not equal"), Code::new("E456"), "test", "not test"]);
//! assert_eq!(err.to_string(), "example/handler [test]\n   compare: not equal (E456): test; not test");
//! ```
//!
//! Deriving never mutates the template. The same template can seed any
//! number of errors and further templates, from any number of threads.

use crate::models::{Record, record_accessors};
use crate::{Classifier, Error, IntoAttr};

/// A durable seed of error attributes.
///
/// Build with [`t`](crate::t) or [`t!`](crate::t!). A template is never
/// reported itself; use [`e`](Template::e) to derive an [`Error`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Template {
    record: Record,
}

impl Template {
    /// The empty template.
    ///
    /// Usable in `const` and `static` items.
    #[inline]
    pub const fn new() -> Self {
        Self {
            record: Record::EMPTY,
        }
    }

    record_accessors!();

    /// Derive a new template: this template's fields plus `attrs`.
    pub fn t<I>(&self, attrs: I) -> Template
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        Classifier::new().template_from(self, attrs)
    }

    /// Derive an error: this template's fields plus `attrs`.
    pub fn e<I>(&self, attrs: I) -> Error
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        Classifier::new().error_from(self, attrs)
    }

    /// Turn the template itself into an error with exactly its fields.
    #[inline]
    pub fn into_error(self) -> Error {
        Error::from_record(self.record)
    }
}

impl From<Error> for Template {
    fn from(err: Error) -> Self {
        err.into_template()
    }
}
