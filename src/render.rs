//! Cause-chain traversal and report rendering.
//!
//! # Report Format
//!
//! Every link of the chain becomes one block, prefixed with `" - "`. Blocks
//! are separated by a newline. A record block reads:
//!
//! ```text
//! module/function [object]
//!    operation: kind: (code): details
//! ```
//!
//! Unset parts are omitted together with their punctuation, and each block
//! is trimmed of surrounding `' '`, `'/'`, `'\n'`, `':'` and `';'`. A foreign
//! cause contributes its own `Display` text as the last block. The finished
//! report is trimmed of surrounding `'\n'`, `'-'`, `' '`, `';'` and `'/'`,
//! which drops the prefix of the first block.
//!
//! # Kind Gate
//!
//! Kinds are only rendered when the outermost error has a kind. When it does,
//! every record block gets its own kind followed by `':'` (unless that record
//! has a code) and a space, which is trimmed away again for records without a
//! kind.

use crate::{Cause, Error};
use std::error::Error as StdError;
use std::iter::FusedIterator;

const BLOCK_PREFIX: &str = " - ";
const BLOCK_SEPARATOR: char = '\n';
const HEADER_BREAK: &str = "\n   ";
const BLOCK_TRIM: &[char] = &[' ', '/', '\n', ':', ';'];
const REPORT_TRIM: &[char] = &['\n', '-', ' ', ';', '/'];

// ============================================================================
// Chain Traversal
// ============================================================================

/// One link of a cause chain.
#[derive(Debug, Clone, Copy)]
pub enum Link<'a> {
    /// An error built by this crate; traversal continues with its cause.
    Record(&'a Error),
    /// Any other error. Always the last link.
    Foreign(&'a (dyn StdError + Send + Sync + 'static)),
}

impl<'a> Link<'a> {
    /// The link as a plain error.
    #[inline]
    pub fn as_error(&self) -> &'a (dyn StdError + Send + Sync + 'static) {
        match *self {
            Link::Record(err) => err,
            Link::Foreign(err) => err,
        }
    }

    /// The link if it is a native record.
    #[inline]
    pub fn as_record(&self) -> Option<&'a Error> {
        match *self {
            Link::Record(err) => Some(err),
            Link::Foreign(_) => None,
        }
    }

    fn from_cause(cause: &'a Cause) -> Self {
        match cause.as_record() {
            Some(err) => Link::Record(err),
            None => Link::Foreign(cause.as_error()),
        }
    }
}

/// Iterator over a cause chain, outermost first.
///
/// Returned by [`Error::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<Link<'a>>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(err: &'a Error) -> Self {
        Self {
            next: Some(Link::Record(err)),
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = Link<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        if let Link::Record(err) = current {
            self.next = err.cause().map(Link::from_cause);
        }
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

// ============================================================================
// Rendering
// ============================================================================

/// Render `err` and its cause chain into one report.
pub(crate) fn render(err: &Error) -> String {
    let show_kinds = !err.kind().is_empty();
    let mut report = String::new();

    for (index, link) in err.chain().enumerate() {
        if index > 0 {
            report.push(BLOCK_SEPARATOR);
        }
        report.push_str(BLOCK_PREFIX);
        match link {
            Link::Record(record) => write_block(&mut report, record, show_kinds),
            Link::Foreign(foreign) => report.push_str(&foreign.to_string()),
        }
    }

    report.trim_matches(REPORT_TRIM).to_owned()
}

fn write_block(report: &mut String, err: &Error, show_kind: bool) {
    let mut block = String::with_capacity(64);

    block.push_str(err.module());
    if !err.function().is_empty() {
        block.push('/');
        block.push_str(err.function());
    }
    if !err.object().is_empty() {
        block.push_str(" [");
        block.push_str(err.object());
        block.push(']');
    }
    block.push_str(HEADER_BREAK);

    if !err.operation().is_empty() {
        block.push_str(err.operation());
        block.push_str(": ");
    }
    if show_kind {
        block.push_str(err.kind());
        if err.code().is_empty() {
            block.push(':');
        }
        block.push(' ');
    }
    if !err.code().is_empty() {
        block.push('(');
        block.push_str(err.code());
        block.push_str("): ");
    }
    block.push_str(err.details());

    report.push_str(block.trim_matches(BLOCK_TRIM));
}
