//! Typed error attributes - the vocabulary an error is built from.
//!
//! Every piece of context attached to an [`Error`](crate::Error) is one of
//! eight attribute categories:
//!
//! - **Module**: the module/package in which the error occurred
//! - **Function**: the function that composed the error
//! - **Operation**: the call inside that function that failed
//! - **Object**: the object the operation was performed on
//! - **Kind**: a caller-chosen category label (see [`definitions`](crate::definitions))
//! - **Code**: an identifier callers can match on
//! - **Detail**: free-form text or any displayable value
//! - **Cause**: a wrapped error
//!
//! The six single-valued categories are thin newtypes over text. They are
//! distinct types so that the classifier can route them by type alone:
//! passing `Kind::new("x")` can never be confused with passing the detail `"x"`.
//!
//! # Closed Attribute Set
//!
//! All attributes funnel into the [`Attr`] sum type. Values enter through
//! [`IntoAttr`], which is implemented for the newtypes, [`Detail`], [`Cause`],
//! [`Error`](crate::Error), text, numeric primitives and `Option<T>`.
//! `None` converts to "no attribute" and is skipped by the classifier.
//!
//! # Zero-Allocation Literals
//!
//! Attribute text is stored as `Cow<'static, str>`. Literals and
//! [`from_static`](Kind::from_static) constants never allocate, which is what
//! allows the predefined kinds to be `const`.
//!
//! # Example
//!
//! ```rust
//! use attr_errors::{Attr, IntoAttr, Kind, Module, kindf};
//!
//! let module = Module::new("storage");
//! assert_eq!(module.as_str(), "storage");
//!
//! let kind = kindf!("{} retries exhausted", 3);
//! assert_eq!(kind, "3 retries exhausted");
//!
//! let absent: Option<Kind> = None;
//! assert!(absent.into_attr().is_none());
//! assert!(matches!(module.into_attr(), Some(Attr::Module(_))));
//! ```

use crate::Error;
use std::any::Any;
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::io;
use std::sync::Arc;

// ============================================================================
// Single-Valued Attribute Newtypes
// ============================================================================

macro_rules! define_attribute {
    ($(#[$meta:meta])* $name:ident => $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            /// Field name used for this category in structured log output.
            pub const LABEL: &'static str = $label;

            /// Create the attribute from a literal or an owned string.
            #[inline]
            pub fn new(value: impl Into<Cow<'static, str>>) -> Self {
                Self(value.into())
            }

            /// Create the attribute in const context (no allocation).
            #[inline]
            pub const fn from_static(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }

            /// Create the attribute from pre-built format arguments.
            ///
            /// Patterns without runtime arguments are stored borrowed.
            /// This backs the formatted-construction macros.
            #[inline]
            pub fn from_args(args: fmt::Arguments<'_>) -> Self {
                match args.as_str() {
                    Some(literal) => Self(Cow::Borrowed(literal)),
                    None => Self(Cow::Owned(fmt::format(args))),
                }
            }

            /// Borrow the attribute text.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// An empty attribute counts as unset.
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&'static str> for $name {
            fn from(value: &'static str) -> Self {
                Self(Cow::Borrowed(value))
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(Cow::Owned(value))
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == **other
            }
        }

        impl From<$name> for Attr {
            fn from(value: $name) -> Self {
                Attr::$name(value)
            }
        }

        impl IntoAttr for $name {
            #[inline]
            fn into_attr(self) -> Option<Attr> {
                Some(Attr::$name(self))
            }
        }
    };
}

define_attribute! {
    /// The program module in which an error happened.
    Module => "module"
}

define_attribute! {
    /// The function in which an error occurred.
    ///
    /// This is the function that checked a failing call and composed the
    /// error. The failing call itself belongs in [`Operation`].
    Function => "function"
}

define_attribute! {
    /// The operation during which an error occurred: the call that failed
    /// inside the current [`Function`].
    Operation => "operation"
}

define_attribute! {
    /// The object on which the failing operation was performed.
    Object => "object"
}

define_attribute! {
    /// The kind of error, e.g. "can't write" or "not found".
    ///
    /// Common kinds are predefined in [`definitions`](crate::definitions).
    Kind => "kind"
}

define_attribute! {
    /// An error code. Codes identify errors so that callers can react to
    /// specific failures.
    Code => "code"
}

// ============================================================================
// Detail Values
// ============================================================================

/// Opaque values that can be attached as error details.
///
/// Blanket-implemented for everything that is `Display + Debug + Send + Sync`.
/// Which of the two representations ends up in the error is decided by the
/// [`DetailFormatter`](crate::DetailFormatter) the classifier runs with.
pub trait DetailValue: fmt::Display + fmt::Debug + Send + Sync {}

impl<T: fmt::Display + fmt::Debug + Send + Sync + ?Sized> DetailValue for T {}

/// Adapter giving Debug-only values a `Display` implementation.
#[derive(Debug)]
struct DebugDetail<T>(T);

impl<T: fmt::Debug> fmt::Display for DebugDetail<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// A free-form detail: verbatim text or an opaque value.
///
/// Text is appended to the error's details unchanged. Values are turned into
/// text by the classifier's formatter.
#[derive(Debug)]
pub enum Detail {
    /// Text used verbatim.
    Text(Cow<'static, str>),
    /// A value stringified during classification.
    Value(Box<dyn DetailValue>),
}

impl Detail {
    /// Verbatim text detail.
    #[inline]
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        Self::Text(text.into())
    }

    /// Opaque value detail, rendered by the classifier's formatter.
    #[inline]
    pub fn value<T: DetailValue + 'static>(value: T) -> Self {
        Self::Value(Box::new(value))
    }

    /// Opaque value detail for types that only implement `Debug`.
    #[inline]
    pub fn debug<T: fmt::Debug + Send + Sync + 'static>(value: T) -> Self {
        Self::Value(Box::new(DebugDetail(value)))
    }

    /// Detail text for a payload caught by `std::panic::catch_unwind`.
    ///
    /// Pair with [`RECOVERED_PANIC`](crate::RECOVERED_PANIC):
    ///
    /// ```rust
    /// use attr_errors::{Detail, RECOVERED_PANIC, attrs, t};
    ///
    /// let etpl = t!(attr_errors::Module::new("worker"));
    /// let outcome: std::thread::Result<()> = std::panic::catch_unwind(|| panic!("boom"));
    /// let payload = outcome.unwrap_err();
    /// let err = etpl.e(attrs![RECOVERED_PANIC, Detail::from_panic(payload.as_ref())]);
    /// assert_eq!(err.details(), "boom");
    /// ```
    pub fn from_panic(payload: &(dyn Any + Send)) -> Self {
        if let Some(message) = payload.downcast_ref::<&'static str>() {
            Self::Text(Cow::Borrowed(message))
        } else if let Some(message) = payload.downcast_ref::<String>() {
            Self::Text(Cow::Owned(message.clone()))
        } else {
            Self::Text(Cow::Borrowed("unknown panic payload"))
        }
    }
}

impl From<Detail> for Attr {
    fn from(value: Detail) -> Self {
        Attr::Detail(value)
    }
}

// ============================================================================
// Cause (Wrapped Error)
// ============================================================================

/// A wrapped error: the cause of the error that carries it.
///
/// The wrapped value is shared behind an `Arc`, so templates holding a cause
/// and errors cloned from each other reference one allocation. Equality is
/// identity: two causes are equal when they share that allocation.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Wrap any error. Wrapping an [`Error`] keeps it traversable by the
    /// renderer; anything else is a foreign leaf.
    #[inline]
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Wrap an already boxed error without re-boxing its contents.
    #[inline]
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self(Arc::from(error))
    }

    /// Borrow the wrapped error.
    #[inline]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// The wrapped error if it is an [`Error`] built by this crate.
    #[inline]
    pub fn as_record(&self) -> Option<&Error> {
        self.0.downcast_ref::<Error>()
    }

    /// Whether both causes share the same wrapped allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cause").field(&self.0).finish()
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}

impl From<Cause> for Attr {
    fn from(value: Cause) -> Self {
        Attr::Cause(value)
    }
}

impl From<Error> for Attr {
    fn from(value: Error) -> Self {
        Attr::Cause(Cause::new(value))
    }
}

// ============================================================================
// Attribute Sum Type
// ============================================================================

/// One classified attribute.
///
/// The classifier matches exhaustively on this type, so the attribute
/// vocabulary is fixed at compile time.
#[derive(Debug)]
pub enum Attr {
    /// See [`Module`].
    Module(Module),
    /// See [`Function`].
    Function(Function),
    /// See [`Operation`].
    Operation(Operation),
    /// See [`Object`].
    Object(Object),
    /// See [`Kind`].
    Kind(Kind),
    /// See [`Code`].
    Code(Code),
    /// See [`Detail`].
    Detail(Detail),
    /// See [`Cause`].
    Cause(Cause),
}

/// Conversion of call-site values into attributes.
///
/// Returning `None` means "absent": the classifier skips it without touching
/// any field.
///
/// Only [`Error`], [`io::Error`] and boxed errors convert to a cause
/// directly. Wrap any other error type with [`Cause::new`]:
///
/// ```rust
/// use attr_errors::{Cause, Kind, e};
///
/// let parsed = "42x".parse::<u32>().map_err(|err| e!(Kind::new("bad number"), Cause::new(err)));
/// assert_eq!(parsed.unwrap_err().to_string(), "bad number\n - invalid digit found in string");
/// ```
pub trait IntoAttr {
    /// Convert into an attribute, or `None` for an absent value.
    fn into_attr(self) -> Option<Attr>;
}

impl IntoAttr for Attr {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(self)
    }
}

impl<T: IntoAttr> IntoAttr for Option<T> {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        self.and_then(IntoAttr::into_attr)
    }
}

impl IntoAttr for Detail {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Detail(self))
    }
}

impl IntoAttr for Cause {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Cause(self))
    }
}

impl IntoAttr for Error {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Cause(Cause::new(self)))
    }
}

impl IntoAttr for Box<dyn StdError + Send + Sync + 'static> {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Cause(Cause::from_boxed(self)))
    }
}

impl IntoAttr for io::Error {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Cause(Cause::new(self)))
    }
}

impl IntoAttr for &str {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Detail(Detail::Text(Cow::Owned(self.to_owned()))))
    }
}

impl IntoAttr for String {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Detail(Detail::Text(Cow::Owned(self))))
    }
}

impl IntoAttr for Cow<'static, str> {
    #[inline]
    fn into_attr(self) -> Option<Attr> {
        Some(Attr::Detail(Detail::Text(self)))
    }
}

macro_rules! value_into_attr {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl IntoAttr for $ty {
                #[inline]
                fn into_attr(self) -> Option<Attr> {
                    Some(Attr::Detail(Detail::value(self)))
                }
            }
        )+
    };
}

value_into_attr!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
);
