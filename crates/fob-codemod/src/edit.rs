//! Span-based source edits
//!
//! Transforms never re-print a whole module. Each rewrite is recorded as a
//! replacement of one byte range of the original source, and the edits are
//! spliced in a single pass so every untouched region is emitted verbatim.

use crate::error::{CodemodError, Result};
use oxc_span::Span;

/// Replacement of one byte range of the original source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub span: Span,
    pub text: String,
}

impl Edit {
    /// Replace the text covered by `span`
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Insert text at byte offset `at`
    pub fn insert(at: u32, text: impl Into<String>) -> Self {
        Self::replace(Span::new(at, at), text)
    }

    /// Remove the text covered by `span`
    pub fn delete(span: Span) -> Self {
        Self::replace(span, String::new())
    }

    fn is_insert(&self) -> bool {
        self.span.start == self.span.end
    }
}

/// An ordered collection of non-overlapping edits
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEdits {
    edits: Vec<Edit>,
}

impl SourceEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, edit: Edit) {
        self.edits.push(edit);
    }

    pub fn extend(&mut self, other: SourceEdits) {
        self.edits.extend(other.edits);
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Edit> {
        self.edits.iter()
    }

    /// Splice all edits into `source`
    ///
    /// Inserts at the same offset keep the order they were pushed in and
    /// land before a replacement starting at that offset.
    ///
    /// # Errors
    ///
    /// [`CodemodError::EditConflict`] if two edits overlap and
    /// [`CodemodError::EditOutOfBounds`] if a range does not fit the source.
    pub fn apply(&self, source: &str) -> Result<String> {
        let mut ordered: Vec<&Edit> = self.edits.iter().collect();
        // Stable sort keeps push order for inserts at the same offset.
        ordered.sort_by_key(|edit| (edit.span.start, !edit.is_insert()));

        let mut out = String::with_capacity(source.len() + 64);
        let mut cursor = 0usize;
        let mut previous: Option<&Edit> = None;

        for edit in ordered {
            let start = edit.span.start as usize;
            let end = edit.span.end as usize;

            if let Some(prev) = previous {
                if edit.span.start < prev.span.end
                    || (!edit.is_insert() && !prev.is_insert() && edit.span.start == prev.span.start)
                {
                    return Err(CodemodError::EditConflict {
                        first: (prev.span.start, prev.span.end),
                        second: (edit.span.start, edit.span.end),
                    });
                }
            }

            let untouched = source.get(cursor..start).ok_or(CodemodError::EditOutOfBounds {
                start: edit.span.start,
                end: edit.span.end,
                len: source.len(),
            })?;
            if end < start || source.get(start..end).is_none() {
                return Err(CodemodError::EditOutOfBounds {
                    start: edit.span.start,
                    end: edit.span.end,
                    len: source.len(),
                });
            }

            out.push_str(untouched);
            out.push_str(&edit.text);
            cursor = end;
            previous = Some(edit);
        }

        out.push_str(&source[cursor..]);
        Ok(out)
    }
}

impl FromIterator<Edit> for SourceEdits {
    fn from_iter<I: IntoIterator<Item = Edit>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}

/// Slice the original source covered by `span`
pub fn slice_source(source: &str, span: Span) -> &str {
    let start = span.start as usize;
    let end = span.end as usize;
    &source[start..end]
}

/// Whitespace between the start of the line containing `offset` and `offset`
pub fn line_indent(source: &str, offset: u32) -> &str {
    let offset = offset as usize;
    let line_start = source[..offset].rfind('\n').map_or(0, |idx| idx + 1);
    let prefix = &source[line_start..offset];
    let indent_len = prefix.len() - prefix.trim_start().len();
    &prefix[..indent_len]
}
