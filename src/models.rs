//! The error record and the reportable [`Error`] type.
//!
//! # Architecture
//!
//! Errors and templates carry the same eight fields. Both wrap one internal
//! `Record`; the types differ only in what they are allowed to do:
//!
//! - [`Error`]: reportable. Implements `Display` (the rendered report) and
//!   `std::error::Error` (the cause is exposed through `source()`)
//! - [`Template`](crate::Template): a durable seed. Never reported itself,
//!   only used to derive errors and further templates
//!
//! Both are immutable after construction. Deriving always produces a new value.
//!
//! # Sharing
//!
//! The cause is held in an `Arc` (see [`Cause`]), so cloning an error or a
//! template is a copy of six short strings plus a reference count bump. The
//! chain behind it is never deep-copied.

use crate::logging::LogEntry;
use crate::render::{self, Chain, Link};
use crate::{Cause, Code, Function, Kind, Module, Object, Operation, Template};
use std::error::Error as StdError;
use std::fmt;

// ============================================================================
// Shared Record
// ============================================================================

/// Field storage shared by [`Error`] and [`Template`].
///
/// Empty text means "unset". Equality is field-wise; causes compare by
/// identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Record {
    pub(crate) module: Module,
    pub(crate) function: Function,
    pub(crate) kind: Kind,
    pub(crate) operation: Operation,
    pub(crate) object: Object,
    pub(crate) code: Code,
    pub(crate) details: String,
    pub(crate) cause: Option<Cause>,
}

impl Record {
    /// The all-empty seed used for fresh construction.
    pub(crate) const EMPTY: Record = Record {
        module: Module::from_static(""),
        function: Function::from_static(""),
        kind: Kind::from_static(""),
        operation: Operation::from_static(""),
        object: Object::from_static(""),
        code: Code::from_static(""),
        details: String::new(),
        cause: None,
    };
}

/// Read accessors shared by the two record wrappers.
macro_rules! record_accessors {
    () => {
        /// Module in which the error occurred; empty when unset.
        #[inline]
        pub fn module(&self) -> &str {
            self.record.module.as_str()
        }

        /// Function that composed the error; empty when unset.
        #[inline]
        pub fn function(&self) -> &str {
            self.record.function.as_str()
        }

        /// Failing operation; empty when unset.
        #[inline]
        pub fn operation(&self) -> &str {
            self.record.operation.as_str()
        }

        /// Object the operation was performed on; empty when unset.
        #[inline]
        pub fn object(&self) -> &str {
            self.record.object.as_str()
        }

        /// Error kind; empty when unset.
        #[inline]
        pub fn kind(&self) -> &str {
            self.record.kind.as_str()
        }

        /// Error code; empty when unset.
        #[inline]
        pub fn code(&self) -> &str {
            self.record.code.as_str()
        }

        /// Accumulated details, `"; "`-joined.
        #[inline]
        pub fn details(&self) -> &str {
            &self.record.details
        }

        /// The wrapped cause, if any.
        #[inline]
        pub fn cause(&self) -> Option<&$crate::Cause> {
            self.record.cause.as_ref()
        }

        #[inline]
        pub(crate) fn from_record(record: $crate::models::Record) -> Self {
            Self { record }
        }

        #[inline]
        pub(crate) fn record(&self) -> &$crate::models::Record {
            &self.record
        }
    };
}

pub(crate) use record_accessors;

// ============================================================================
// Error
// ============================================================================

/// A structured error built from typed attributes.
///
/// Construct with [`e`](crate::e), [`e!`](crate::e!) or
/// [`Template::e`](crate::Template::e). `Display` renders the whole cause
/// chain as one report:
///
/// ```rust
/// use attr_errors::{Function, Kind, Module, Operation, e};
///
/// let missing = e!("file does not exist");
/// let unreadable = e!("can't read config", missing);
/// let err = e!(
///     Module::new("example"),
///     Function::new("startup"),
///     Operation::new("configure"),
///     Kind::new("configure failed"),
///     unreadable,
/// );
///
/// assert_eq!(
///     err.to_string(),
///     "example/startup\n   configure: configure failed\n - can't read config\n - file does not exist"
/// );
/// ```
#[must_use = "errors should be handled or reported"]
#[derive(Clone, Default, PartialEq)]
pub struct Error {
    record: Record,
}

impl Error {
    record_accessors!();

    /// Reuse this error's fields as a template.
    #[inline]
    pub fn into_template(self) -> Template {
        Template::from_record(self.record)
    }

    /// Iterate the cause chain, starting with `self`.
    ///
    /// Every link but the last is an [`Error`]; the last may be a foreign
    /// error, which ends the chain.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        Chain::new(self)
    }

    /// The innermost link of the cause chain.
    ///
    /// Returns `self` when nothing is wrapped.
    pub fn root_cause(&self) -> Link<'_> {
        self.chain().fold(Link::Record(self), |_, link| link)
    }

    /// Number of links in the cause chain, including `self`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    /// Structured view of this error for logging.
    ///
    /// The returned entry borrows the error and cannot outlive it.
    #[inline]
    pub fn log_entry(&self) -> LogEntry<'_> {
        LogEntry::new(self)
    }

    /// Run `f` with the structured log view of this error.
    #[inline]
    pub fn with_log_entry<R>(&self, f: impl FnOnce(&LogEntry<'_>) -> R) -> R {
        f(&self.log_entry())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render::render(self))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Error")
            .field("module", &self.module())
            .field("function", &self.function())
            .field("kind", &self.kind())
            .field("operation", &self.operation())
            .field("object", &self.object())
            .field("code", &self.code())
            .field("details", &self.details())
            .field("cause", &self.record().cause)
            .finish()
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.record
            .cause
            .as_ref()
            .map(|cause| cause.as_error() as &(dyn StdError + 'static))
    }
}

impl From<Template> for Error {
    fn from(template: Template) -> Self {
        template.into_error()
    }
}

// ============================================================================
// Tests
// ============================================================================
