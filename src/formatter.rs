//! Detail formatting - how opaque detail values become text.
//!
//! Text details are used verbatim. Every other detail value is handed to a
//! [`DetailFormatter`] during classification. The formatter is a plain value
//! carried by the [`Classifier`](crate::Classifier), so the rendering of
//! arbitrary values is explicit and reproducible rather than a hidden global
//! default.
//!
//! # Provided Formatters
//!
//! - [`DisplayFormatter`]: the default; uses the value's `Display` output
//! - [`DebugFormatter`]: uses the value's `Debug` output
//! - [`TruncatingFormatter`]: bounds the output of another formatter
//! - any `Fn(&dyn DetailValue) -> String` closure
//!
//! # Example
//!
//! ```rust
//! use attr_errors::{Classifier, DebugFormatter, Detail, attrs};
//!
//! let classifier = Classifier::with_formatter(DebugFormatter);
//! let err = classifier.error(attrs![Detail::value("quoted")]);
//! assert_eq!(err.details(), "\"quoted\"");
//! ```

use crate::DetailValue;
use std::borrow::Cow;

/// Truncation indicator appended to shortened output.
pub const TRUNCATION_INDICATOR: &str = "...[TRUNCATED]";

/// Capability turning an opaque detail value into detail text.
pub trait DetailFormatter {
    /// Produce the text stored in the error's details for `value`.
    fn format_detail(&self, value: &dyn DetailValue) -> String;
}

impl<F> DetailFormatter for F
where
    F: Fn(&dyn DetailValue) -> String,
{
    #[inline]
    fn format_detail(&self, value: &dyn DetailValue) -> String {
        self(value)
    }
}

/// Default formatter: the value's `Display` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayFormatter;

impl DetailFormatter for DisplayFormatter {
    #[inline]
    fn format_detail(&self, value: &dyn DetailValue) -> String {
        value.to_string()
    }
}

/// Formatter using the value's `Debug` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DebugFormatter;

impl DetailFormatter for DebugFormatter {
    #[inline]
    fn format_detail(&self, value: &dyn DetailValue) -> String {
        format!("{value:?}")
    }
}

/// Formatter bounding the length of another formatter's output.
///
/// Output longer than `max_len` bytes is cut at a UTF-8 boundary and marked
/// with [`TRUNCATION_INDICATOR`]; the result never exceeds `max_len` bytes.
/// Useful when detail values come from untrusted or unbounded sources.
///
/// ```rust
/// use attr_errors::{Classifier, Detail, TruncatingFormatter, attrs};
///
/// let classifier = Classifier::with_formatter(TruncatingFormatter::new(20));
/// let err = classifier.error(attrs![Detail::value("x".repeat(100))]);
/// assert_eq!(err.details(), "xxxxxx...[TRUNCATED]");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruncatingFormatter<F = DisplayFormatter> {
    inner: F,
    max_len: usize,
}

impl TruncatingFormatter {
    /// Bound the default `Display` output to `max_len` bytes.
    #[inline]
    pub const fn new(max_len: usize) -> Self {
        Self {
            inner: DisplayFormatter,
            max_len,
        }
    }
}

impl<F> TruncatingFormatter<F> {
    /// Bound the output of `inner` to `max_len` bytes.
    #[inline]
    pub const fn wrap(inner: F, max_len: usize) -> Self {
        Self { inner, max_len }
    }

    /// The configured byte limit.
    #[inline]
    pub const fn max_len(&self) -> usize {
        self.max_len
    }
}

impl<F: DetailFormatter> DetailFormatter for TruncatingFormatter<F> {
    fn format_detail(&self, value: &dyn DetailValue) -> String {
        let text = self.inner.format_detail(value);
        match truncate_with_indicator(&text, self.max_len) {
            Cow::Borrowed(_) => text,
            Cow::Owned(shortened) => shortened,
        }
    }
}

/// Shorten `s` to at most `max_len` bytes, marking the cut.
///
/// Returns the input borrowed when it already fits.
pub(crate) fn truncate_with_indicator(s: &str, max_len: usize) -> Cow<'_, str> {
    if s.len() <= max_len {
        return Cow::Borrowed(s);
    }

    let max_content_len = max_len.saturating_sub(TRUNCATION_INDICATOR.len());

    let mut idx = max_content_len;
    while idx > 0 && !s.is_char_boundary(idx) {
        idx -= 1;
    }

    // Limit too small for any content; keep as much of the indicator as fits.
    if idx == 0 {
        let mut end = TRUNCATION_INDICATOR.len().min(max_len);
        while end > 0 && !TRUNCATION_INDICATOR.is_char_boundary(end) {
            end -= 1;
        }
        return Cow::Borrowed(&TRUNCATION_INDICATOR[..end]);
    }

    let mut result = String::with_capacity(idx + TRUNCATION_INDICATOR.len());
    result.push_str(&s[..idx]);
    result.push_str(TRUNCATION_INDICATOR);
    Cow::Owned(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: usize = 64;

    #[test]
    fn display_and_debug_differ_for_text() {
        let value = "abc";
        assert_eq!(DisplayFormatter.format_detail(&value), "abc");
        assert_eq!(DebugFormatter.format_detail(&value), "\"abc\"");
    }

    #[test]
    fn closures_are_formatters() {
        let upper = |value: &dyn DetailValue| value.to_string().to_uppercase();
        assert_eq!(upper.format_detail(&"shout"), "SHOUT");
    }

    #[test]
    fn truncate_ascii() {
        let s = "a".repeat(LIMIT + 10);
        let truncated = truncate_with_indicator(&s, LIMIT);

        assert!(truncated.len() <= LIMIT);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn no_truncate_when_under_limit() {
        let s = "short string";
        let truncated = truncate_with_indicator(s, LIMIT);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated, s);
    }

    #[test]
    fn exactly_at_limit() {
        let s = "a".repeat(LIMIT);
        let truncated = truncate_with_indicator(&s, LIMIT);

        assert!(matches!(truncated, Cow::Borrowed(_)));
        assert_eq!(truncated.len(), LIMIT);
    }

    #[test]
    fn truncate_utf8_boundary() {
        // Each 'й' is 2 bytes
        let s = "й".repeat(LIMIT);
        let truncated = truncate_with_indicator(&s, LIMIT + 1);

        assert!(truncated.len() <= LIMIT + 1);
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
        assert!(truncated.trim_end_matches(TRUNCATION_INDICATOR).chars().all(|c| c == 'й'));
    }

    #[test]
    fn truncate_emoji() {
        let s = "🔥".repeat(LIMIT);
        let truncated = truncate_with_indicator(&s, LIMIT);

        assert!(std::str::from_utf8(truncated.as_bytes()).is_ok());
        assert!(truncated.ends_with(TRUNCATION_INDICATOR));
    }

    #[test]
    fn tiny_limits_never_exceed_the_bound() {
        let s = "abcdefghijklmnopqrstuvwxyz";
        for limit in 0..TRUNCATION_INDICATOR.len() + 2 {
            assert!(truncate_with_indicator(s, limit).len() <= limit);
        }
    }

    #[test]
    fn truncating_formatter_wraps_inner() {
        let formatter = TruncatingFormatter::wrap(DebugFormatter, 20);
        assert_eq!(formatter.max_len(), 20);

        let long = "y".repeat(50);
        let out = formatter.format_detail(&long);
        assert_eq!(out, "\"yyyyy...[TRUNCATED]");

        assert_eq!(formatter.format_detail(&7), "7");
    }
}
