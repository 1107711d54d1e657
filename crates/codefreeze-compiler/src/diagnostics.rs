//! Compilation errors and their rendering.

use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// The front-end could not produce a compiled unit.
///
/// Carries the byte span plus the 1-based line/column it starts at, so callers
/// that don't have the source at hand can still point at the problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{label}:{line}:{column}: {message}")]
pub struct CompileError {
    pub message: String,
    pub label: String,
    pub span: Range<usize>,
    pub line: usize,
    pub column: usize,
}

impl CompileError {
    pub fn new(
        message: impl Into<String>,
        source: &str,
        label: &str,
        span: Range<usize>,
    ) -> Self {
        let (line, column) = line_col(source, span.start);
        Self {
            message: message.into(),
            label: label.to_string(),
            span,
            line,
            column,
        }
    }

    /// Renders the error with a source excerpt.
    pub fn render(&self, source: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let snippet = Snippet::source(source)
            .line_start(1)
            .path(self.label.as_str())
            .annotation(
                AnnotationKind::Primary
                    .span(adjust_range(&self.span, source.len()))
                    .label(self.message.as_str()),
            );
        let report = vec![
            Level::ERROR
                .primary_title(self.message.as_str())
                .element(snippet),
        ];

        renderer.render(&report).to_string()
    }
}

/// 1-based line and column (in characters) of a byte offset.
///
/// `\r\n`, `\r` and `\n` each end a line, as in the lexer.
pub fn line_col(source: &str, offset: usize) -> (usize, usize) {
    let offset = offset.min(source.len());
    let before = &source.as_bytes()[..offset];

    let mut line = 1;
    let mut line_start = 0;
    for (i, &b) in before.iter().enumerate() {
        let breaks = match b {
            b'\n' => true,
            b'\r' => source.as_bytes().get(i + 1) != Some(&b'\n'),
            _ => false,
        };
        if breaks {
            line += 1;
            line_start = i + 1;
        }
    }

    let column = source
        .get(line_start..offset)
        .map_or(0, |text| text.chars().count())
        + 1;
    (line, column)
}

/// Widens empty spans to one character so the annotation stays visible.
fn adjust_range(range: &Range<usize>, limit: usize) -> Range<usize> {
    if range.start == range.end {
        return range.start..(range.start + 1).min(limit);
    }
    range.clone()
}
