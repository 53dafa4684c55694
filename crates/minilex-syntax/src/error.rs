//! Parse errors with byte offsets into the offending pattern.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

/// A malformed pattern. Fatal to that pattern's compilation; parsing never
/// produces partial results.
///
/// Offsets are byte offsets into the pattern string. For errors at end of
/// input the offset equals the pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("missing closing parenthesis for group opened at offset {0}")]
    UnclosedGroup(usize),

    #[error("unclosed character class opened at offset {0}")]
    UnclosedClass(usize),

    #[error("dangling escape at offset {0}")]
    DanglingEscape(usize),

    #[error("unexpected end of pattern")]
    UnexpectedEnd(usize),

    #[error("unmatched `)` at offset {0}")]
    UnmatchedParen(usize),
}

impl ParseError {
    /// Byte offset of the offending position.
    pub fn offset(&self) -> usize {
        match *self {
            ParseError::UnclosedGroup(offset)
            | ParseError::UnclosedClass(offset)
            | ParseError::DanglingEscape(offset)
            | ParseError::UnexpectedEnd(offset)
            | ParseError::UnmatchedParen(offset) => offset,
        }
    }

    /// Render the error as an annotated snippet of the pattern.
    pub fn render(&self, pattern: &str) -> String {
        let message = self.to_string();
        let range = annotation_range(self.offset(), pattern.len());

        let snippet = Snippet::source(pattern)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&message));
        let report: Vec<Group> = vec![Level::ERROR.primary_title(&message).element(snippet)];

        format!("{}", Renderer::plain().render(&report))
    }
}

fn annotation_range(offset: usize, limit: usize) -> std::ops::Range<usize> {
    let start = offset.min(limit);
    start..(start + 1).min(limit).max(start)
}
