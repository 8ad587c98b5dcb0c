//! Convenience macros for building errors and attributes.
//!
//! # Variadic Construction
//!
//! [`e`](crate::e) and [`t`](crate::t) take any iterator of [`IntoAttr`]
//! values, which covers homogeneous lists such as `["a", "b"]`. Mixed lists
//! go through [`attrs!`], which converts each argument to `Option<Attr>`
//! before collecting them into an array. [`e!`] and [`t!`] wrap both steps:
//!
//! ```rust
//! use attr_errors::{Kind, Module, e, t};
//!
//! let etpl = t!(Module::new("db"));
//! let err = e!(Kind::new("not found"), "user", 42, None::<&str>);
//! assert_eq!(err.to_string(), "not found: user; 42");
//! assert_eq!(etpl.module(), "db");
//! ```
//!
//! # Formatted Attributes
//!
//! `modulef!`, `functionf!`, `operationf!`, `objectf!`, `kindf!` and `codef!`
//! build an attribute from a `format!`-style pattern. Patterns without
//! arguments are stored without allocating.
//!
//! ```rust
//! use attr_errors::{objectf, operationf};
//!
//! let id = 17;
//! assert_eq!(objectf!("user #{id}"), "user #17");
//! assert_eq!(operationf!("flush"), "flush");
//! ```
//!
//! [`IntoAttr`]: crate::IntoAttr

// ============================================================================
// Attribute Lists
// ============================================================================

/// Collect heterogeneous values into an attribute list.
///
/// Each argument must implement [`IntoAttr`](crate::IntoAttr). The result
/// is accepted by every constructor taking `impl IntoIterator<Item: IntoAttr>`.
///
/// ```rust
/// use attr_errors::{Code, Template, attrs};
///
/// let etpl = Template::new();
/// let err = etpl.e(attrs![Code::new("E1"), "detail", 3.5]);
/// assert_eq!(err.code(), "E1");
/// assert_eq!(err.details(), "detail; 3.5");
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        ::core::iter::empty::<$crate::Attr>()
    };
    ($($attr:expr),+ $(,)?) => {
        [$($crate::IntoAttr::into_attr($attr)),+]
    };
}

/// Build an [`Error`](crate::Error) from heterogeneous attributes.
///
/// Shorthand for `e(attrs![..])`.
#[macro_export]
macro_rules! e {
    ($($attr:expr),* $(,)?) => {
        $crate::e($crate::attrs![$($attr),*])
    };
}

/// Build a [`Template`](crate::Template) from heterogeneous attributes.
///
/// Shorthand for `t(attrs![..])`.
#[macro_export]
macro_rules! t {
    ($($attr:expr),* $(,)?) => {
        $crate::t($crate::attrs![$($attr),*])
    };
}

// ============================================================================
// Formatted Attribute Constructors
// ============================================================================

/// Build a [`Module`](crate::Module) from a format pattern.
#[macro_export]
macro_rules! modulef {
    ($($arg:tt)*) => {
        $crate::Module::from_args(::core::format_args!($($arg)*))
    };
}

/// Build a [`Function`](crate::Function) from a format pattern.
#[macro_export]
macro_rules! functionf {
    ($($arg:tt)*) => {
        $crate::Function::from_args(::core::format_args!($($arg)*))
    };
}

/// Build an [`Operation`](crate::Operation) from a format pattern.
#[macro_export]
macro_rules! operationf {
    ($($arg:tt)*) => {
        $crate::Operation::from_args(::core::format_args!($($arg)*))
    };
}

/// Build an [`Object`](crate::Object) from a format pattern.
#[macro_export]
macro_rules! objectf {
    ($($arg:tt)*) => {
        $crate::Object::from_args(::core::format_args!($($arg)*))
    };
}

/// Build a [`Kind`](crate::Kind) from a format pattern.
#[macro_export]
macro_rules! kindf {
    ($($arg:tt)*) => {
        $crate::Kind::from_args(::core::format_args!($($arg)*))
    };
}

/// Build a [`Code`](crate::Code) from a format pattern.
#[macro_export]
macro_rules! codef {
    ($($arg:tt)*) => {
        $crate::Code::from_args(::core::format_args!($($arg)*))
    };
}

// ============================================================================
// Kind Definitions
// ============================================================================

/// Define one `Kind` constant.
///
/// # Example
///
/// ```rust
/// # use attr_errors::define_kind;
/// define_kind!(
///     /// The quota for the caller is used up.
///     QUOTA_EXCEEDED = "quota exceeded"
/// );
/// assert_eq!(QUOTA_EXCEEDED, "quota exceeded");
/// ```
#[macro_export]
macro_rules! define_kind {
    ($(#[$meta:meta])* $name:ident = $text:literal) => {
        $(#[$meta])*
        pub const $name: $crate::Kind = $crate::Kind::from_static($text);
    };
}

/// Define several `Kind` constants at once.
///
/// # Example
///
/// ```rust
/// # use attr_errors::define_kinds;
/// define_kinds! {
///     /// Upstream did not answer in time.
///     UPSTREAM_TIMEOUT = "upstream timed out",
///     /// Upstream answered with garbage.
///     UPSTREAM_INVALID = "invalid upstream response",
/// }
/// assert_eq!(UPSTREAM_INVALID.as_str(), "invalid upstream response");
/// ```
#[macro_export]
macro_rules! define_kinds {
    ($( $(#[$meta:meta])* $name:ident = $text:literal ),+ $(,)?) => {
        $(
            $crate::define_kind!($(#[$meta])* $name = $text);
        )+
    };
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::{Code, Function, Kind, Module, Object, Operation, Template};
    use std::fmt;

    const CHECK: &str = "abc 123 123.456 {789 xyz}";

    struct Pair {
        a: i32,
        b: &'static str,
    }

    impl fmt::Display for Pair {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{{{} {}}}", self.a, self.b)
        }
    }

    fn pair() -> Pair {
        Pair { a: 789, b: "xyz" }
    }

    #[test]
    fn formatted_constructors_match_plain_ones() {
        let (s, i, f) = ("abc", 123, 123.456);

        assert_eq!(modulef!("{} {} {:7.3} {}", s, i, f, pair()), Module::new(CHECK));
        assert_eq!(functionf!("{} {} {:7.3} {}", s, i, f, pair()), Function::new(CHECK));
        assert_eq!(operationf!("{} {} {:7.3} {}", s, i, f, pair()), Operation::new(CHECK));
        assert_eq!(objectf!("{} {} {:7.3} {}", s, i, f, pair()), Object::new(CHECK));
        assert_eq!(kindf!("{} {} {:7.3} {}", s, i, f, pair()), Kind::new(CHECK));
        assert_eq!(codef!("{} {} {:7.3} {}", s, i, f, pair()), Code::new(CHECK));
    }

    #[test]
    fn formatted_constructors_accept_inline_args() {
        let table = "users";
        assert_eq!(objectf!("{table}.id"), "users.id");
        assert_eq!(codef!("E{:03}", 7), "E007");
    }

    #[test]
    fn attrs_accepts_mixed_values() {
        let err = Template::new().e(attrs![Kind::new("k"), "text", 1u8, 'c', None::<Code>]);
        assert_eq!(err.kind(), "k");
        assert_eq!(err.details(), "text; 1; c");
        assert!(err.code().is_empty());
    }

    #[test]
    fn attrs_allows_trailing_comma_and_empty() {
        let err = e!("a", "b",);
        assert_eq!(err.details(), "a; b");
        assert_eq!(e!(), crate::Error::default());
        assert_eq!(t!(), Template::new());
    }

    #[test]
    fn null_values_disappear() {
        let err = e!("hallo", None::<&str>, None::<crate::Cause>, None::<crate::Error>, "test");
        assert_eq!(err.to_string(), "hallo; test");
    }

    mod custom {
        define_kinds! {
            /// Test kind.
            FIRST = "first kind",
            SECOND = "second kind",
        }
    }

    #[test]
    fn define_kinds_creates_constants() {
        assert_eq!(custom::FIRST, "first kind");
        assert_eq!(custom::SECOND.as_str(), "second kind");
    }
}
