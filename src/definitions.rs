//! Predefined error kinds.
//!
//! # Taxonomy
//!
//! Kinds are advisory categories. Nothing in the crate interprets them beyond
//! rendering; callers are free to define their own with [`Kind::new`],
//! [`kindf!`](crate::kindf) or [`define_kinds!`](crate::define_kinds).
//! The constants here cover the failures common to most programs.
//!
//! All kinds are `const` and render as short lower-case phrases, so they read
//! naturally in a report:
//!
//! ```rust
//! use attr_errors::{Object, READ_FAILED, e};
//!
//! let err = e!(READ_FAILED, Object::new("settings.toml"), "permission denied");
//! assert_eq!(err.to_string(), "[settings.toml]\n   can't read: permission denied");
//! ```

use crate::{Kind, define_kinds};

define_kinds! {
    /// The requested item does not exist.
    NOT_FOUND = "not found",
    /// The caller is not permitted to perform the operation.
    NOT_ALLOWED = "not allowed",
    /// An argument passed by the caller is invalid.
    ILLEGAL_ARGUMENT = "illegal argument",
    /// A value encountered while processing is invalid.
    ILLEGAL_VALUE = "illegal value",
    /// Creating a resource failed.
    CREATE_FAILED = "can't create",
    /// Reading a resource failed.
    READ_FAILED = "can't read",
    /// Writing a resource failed.
    WRITE_FAILED = "can't write",
    /// Deleting a resource failed.
    DELETE_FAILED = "can't delete",
    /// The resource to create exists already.
    ALREADY_EXISTS = "already exists",
    /// Input could not be parsed.
    PARSE_FAILED = "parsing failed",
    /// Generic failure.
    FAILED = "operation failed",
    /// A panic was caught and turned into an error.
    ///
    /// Pair with [`Detail::from_panic`](crate::Detail::from_panic).
    RECOVERED_PANIC = "panic recovered",
}

/// Every predefined kind, in declaration order.
pub static ALL_KINDS: [Kind; 12] = [
    NOT_FOUND,
    NOT_ALLOWED,
    ILLEGAL_ARGUMENT,
    ILLEGAL_VALUE,
    CREATE_FAILED,
    READ_FAILED,
    WRITE_FAILED,
    DELETE_FAILED,
    ALREADY_EXISTS,
    PARSE_FAILED,
    FAILED,
    RECOVERED_PANIC,
];
