//! Structured log view of an error.
//!
//! # Properties
//!
//! - Borrows from [`Error`] with an explicit lifetime
//! - Cannot outlive the error that created it
//! - No heap allocations in accessors
//!
//! `Display` on an error renders the human report. Log pipelines usually
//! want the attributes as separate fields instead; [`LogEntry`] exposes
//! exactly that, either as `key='value'` text through [`LogEntry::write_to`]
//! or, with the `tracing` feature, as one structured event through
//! [`LogEntry::emit`].

use crate::formatter::truncate_with_indicator;
use crate::{Code, Error, Function, Kind, Module, Object, Operation};
use std::fmt;

/// Maximum length for any individual field in formatted output.
pub const MAX_FIELD_OUTPUT_LEN: usize = 1024;

/// Structured log entry with borrowed data from an [`Error`].
///
/// # Example
///
/// ```rust
/// use attr_errors::{Kind, Module, e};
///
/// let err = e!(Module::new("storage"), Kind::new("not found"), "key 42");
/// let line = err.with_log_entry(|log| log.to_string());
/// assert_eq!(line, "module='storage' kind='not found' details='key 42' depth=1");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LogEntry<'a> {
    error: &'a Error,
}

impl<'a> LogEntry<'a> {
    #[inline]
    pub(crate) const fn new(error: &'a Error) -> Self {
        Self { error }
    }

    /// The error this entry describes.
    #[inline]
    pub const fn error(&self) -> &'a Error {
        self.error
    }

    /// Module, if set.
    #[inline]
    pub fn module(&self) -> Option<&'a str> {
        non_empty(self.error.module())
    }

    /// Function, if set.
    #[inline]
    pub fn function(&self) -> Option<&'a str> {
        non_empty(self.error.function())
    }

    /// Operation, if set.
    #[inline]
    pub fn operation(&self) -> Option<&'a str> {
        non_empty(self.error.operation())
    }

    /// Object, if set.
    #[inline]
    pub fn object(&self) -> Option<&'a str> {
        non_empty(self.error.object())
    }

    /// Kind, if set.
    #[inline]
    pub fn kind(&self) -> Option<&'a str> {
        non_empty(self.error.kind())
    }

    /// Code, if set.
    #[inline]
    pub fn code(&self) -> Option<&'a str> {
        non_empty(self.error.code())
    }

    /// Details, if any.
    #[inline]
    pub fn details(&self) -> Option<&'a str> {
        non_empty(self.error.details())
    }

    /// Number of links in the cause chain, including this error.
    #[inline]
    pub fn depth(&self) -> usize {
        self.error.depth()
    }

    /// The set attributes as `(label, value)` pairs, in a fixed order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &'a str)> + use<'a> {
        let error = self.error;
        [
            (Module::LABEL, error.module()),
            (Function::LABEL, error.function()),
            (Operation::LABEL, error.operation()),
            (Object::LABEL, error.object()),
            (Kind::LABEL, error.kind()),
            (Code::LABEL, error.code()),
            ("details", error.details()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
    }

    /// Write the entry as `key='value'` pairs followed by the chain depth.
    ///
    /// Each value is truncated to [`MAX_FIELD_OUTPUT_LEN`] bytes.
    pub fn write_to(&self, f: &mut impl fmt::Write) -> fmt::Result {
        for (label, value) in self.fields() {
            write!(f, "{}='{}' ", label, truncate_with_indicator(value, MAX_FIELD_OUTPUT_LEN))?;
        }
        write!(f, "depth={}", self.depth())
    }

    /// Record the error as one `ERROR` level `tracing` event.
    ///
    /// Set attributes become fields of the event; the rendered report is the
    /// message.
    #[cfg(feature = "tracing")]
    pub fn emit(&self) {
        tracing::event!(
            tracing::Level::ERROR,
            module = self.module(),
            function = self.function(),
            operation = self.operation(),
            object = self.object(),
            kind = self.kind(),
            code = self.code(),
            details = self.details(),
            depth = self.depth(),
            "{}",
            self.error
        );
    }
}

impl fmt::Display for LogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

#[inline]
fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}
