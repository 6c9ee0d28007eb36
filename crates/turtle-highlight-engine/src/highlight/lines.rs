use super::span::Span;

/// A single line of a source block with its byte span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    /// Byte span of the line, excluding the `\n` terminator.
    pub span: Span,
    pub text: &'a str,
    /// Whether a `\n` follows this line.
    pub terminated: bool,
}

/// Splits `source` on `\n`, keeping every line including a trailing empty one.
///
/// Empty input yields no lines. `\r` is not a terminator and stays in the
/// line text.
pub fn lines_with_spans(source: &str) -> impl Iterator<Item = LineRef<'_>> + '_ {
    let count = if source.is_empty() {
        0
    } else {
        source.matches('\n').count() + 1
    };
    let mut offset = 0usize;
    source.split('\n').take(count).enumerate().map(move |(i, text)| {
        let start = offset;
        offset += text.len() + 1;
        LineRef {
            span: Span::new(start, start + text.len()),
            text,
            terminated: i + 1 < count,
        }
    })
}
