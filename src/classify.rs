//! Attribute classification - routing an attribute list into record fields.
//!
//! # Rules
//!
//! 1. Absent attributes (`None`) are skipped entirely.
//! 2. Module, Function, Operation, Object, Kind and Code overwrite their field.
//!    The last value of a category wins, including over values inherited from
//!    a template.
//! 3. A cause overwrites the cause field; only the last one is kept.
//! 4. Everything else is a detail fragment. Inherited details come first,
//!    fragments are joined with `"; "` and the result is trimmed of leading
//!    and trailing `;` and whitespace once, after the whole list is processed.
//!
//! Classification cannot fail. Unknown values degrade to detail text.

use crate::models::Record;
use crate::{Attr, Detail, DetailFormatter, DisplayFormatter, Error, IntoAttr, Template};
use smallvec::SmallVec;
use std::borrow::Cow;
use std::mem;

/// Separator placed between detail fragments.
pub const DETAIL_SEPARATOR: &str = "; ";

/// Runs classification with a chosen [`DetailFormatter`].
///
/// The free functions [`e`](crate::e) and [`t`](crate::t) and the
/// [`Template`] methods use a `Classifier` with the default
/// [`DisplayFormatter`]. Build one explicitly to render opaque detail values
/// differently.
///
/// ```rust
/// use attr_errors::{Classifier, Detail, Kind, attrs};
///
/// let classifier = Classifier::with_formatter(|v: &dyn attr_errors::DetailValue| format!("<{v}>"));
/// let etpl = classifier.template(attrs![Kind::new("bad input")]);
/// let err = classifier.error_from(&etpl, attrs![Detail::value(42)]);
/// assert_eq!(err.details(), "<42>");
/// assert_eq!(err.kind(), "bad input");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier<F = DisplayFormatter> {
    formatter: F,
}

impl Classifier {
    /// Classifier using [`DisplayFormatter`].
    #[inline]
    pub const fn new() -> Self {
        Self {
            formatter: DisplayFormatter,
        }
    }
}

impl<F> Classifier<F> {
    /// Classifier using `formatter` for opaque detail values.
    #[inline]
    pub const fn with_formatter(formatter: F) -> Self {
        Self { formatter }
    }

    /// The configured formatter.
    #[inline]
    pub const fn formatter(&self) -> &F {
        &self.formatter
    }
}

impl<F: DetailFormatter> Classifier<F> {
    /// Build an [`Error`] from an empty record plus `attrs`.
    pub fn error<I>(&self, attrs: I) -> Error
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        Error::from_record(self.classify(Record::EMPTY, attrs))
    }

    /// Build a [`Template`] from an empty record plus `attrs`.
    pub fn template<I>(&self, attrs: I) -> Template
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        Template::from_record(self.classify(Record::EMPTY, attrs))
    }

    /// Build an [`Error`] seeded with the fields of `template`.
    pub fn error_from<I>(&self, template: &Template, attrs: I) -> Error
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        Error::from_record(self.classify(template.record().clone(), attrs))
    }

    /// Derive a new [`Template`] seeded with the fields of `template`.
    pub fn template_from<I>(&self, template: &Template, attrs: I) -> Template
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        Template::from_record(self.classify(template.record().clone(), attrs))
    }

    pub(crate) fn classify<I>(&self, mut record: Record, attrs: I) -> Record
    where
        I: IntoIterator,
        I::Item: IntoAttr,
    {
        let mut fragments: SmallVec<[Cow<'static, str>; 4]> = SmallVec::new();
        if !record.details.is_empty() {
            fragments.push(Cow::Owned(mem::take(&mut record.details)));
        }

        for attr in attrs.into_iter().filter_map(IntoAttr::into_attr) {
            match attr {
                Attr::Module(module) => record.module = module,
                Attr::Function(function) => record.function = function,
                Attr::Operation(operation) => record.operation = operation,
                Attr::Object(object) => record.object = object,
                Attr::Kind(kind) => record.kind = kind,
                Attr::Code(code) => record.code = code,
                Attr::Cause(cause) => record.cause = Some(cause),
                Attr::Detail(Detail::Text(text)) => fragments.push(text),
                Attr::Detail(Detail::Value(value)) => {
                    fragments.push(Cow::Owned(self.formatter.format_detail(&*value)));
                }
            }
        }

        record.details = join_details(&fragments);
        record
    }
}

fn join_details(fragments: &[Cow<'static, str>]) -> String {
    match fragments {
        [] => String::new(),
        [single] => trim_details(single).to_owned(),
        _ => {
            let joined = fragments.join(DETAIL_SEPARATOR);
            let trimmed = trim_details(&joined);
            if trimmed.len() == joined.len() {
                joined
            } else {
                trimmed.to_owned()
            }
        }
    }
}

#[inline]
fn trim_details(details: &str) -> &str {
    details.trim_matches(|c: char| c == ';' || c.is_whitespace())
}
