use super::span::Span;

/// Lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A whole line whose trimmed form starts with `#`.
    Comment,
    /// `<...>` including both brackets.
    Uri,
    /// `"..."` including both quotes.
    String,
    /// The part of a prefixed name before the colon.
    PrefixNamespace,
    /// The part of a prefixed name after the colon.
    PrefixLocalName,
    /// `@tag` including the `@`.
    LanguageTag,
    /// `a`, `true` or `false`.
    Keyword,
    /// Anything no pass claimed, including the colon of a prefixed name.
    Plain,
}

impl TokenKind {
    /// Label agreed with stylesheets. Plain text carries no label.
    pub fn label(self) -> Option<&'static str> {
        match self {
            TokenKind::Comment => Some("comment"),
            TokenKind::Uri => Some("uri"),
            TokenKind::String => Some("string"),
            TokenKind::PrefixNamespace => Some("prefix-namespace"),
            TokenKind::PrefixLocalName => Some("prefix-localname"),
            TokenKind::LanguageTag => Some("language-tag"),
            TokenKind::Keyword => Some("keyword"),
            TokenKind::Plain => None,
        }
    }

    /// Class names used by older stylesheets written for the first version of
    /// the page script (`turtle-prefix-name`, `turtle-lang`, ...), minus prefix.
    pub fn legacy_class(self) -> Option<&'static str> {
        match self {
            TokenKind::PrefixNamespace => Some("prefix-name"),
            TokenKind::PrefixLocalName => Some("local-name"),
            TokenKind::LanguageTag => Some("lang"),
            other => other.label(),
        }
    }
}

/// A classified span of the source block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// One source line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    /// Byte span of the line in the block, without its terminator.
    pub span: Span,
    /// Tokens in source order; contiguous and covering `span` exactly.
    pub tokens: Vec<Token>,
    /// Whether a `\n` followed this line in the source.
    pub terminated: bool,
}

impl RenderedLine {
    /// True when the line was classified as a single comment.
    pub fn is_comment(&self) -> bool {
        matches!(self.tokens.as_slice(), [t] if t.kind == TokenKind::Comment)
    }
}

/// A highlighted source block: the borrowed source and its lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedBlock<'a> {
    pub source: &'a str,
    pub lines: Vec<RenderedLine>,
}

impl<'a> HighlightedBlock<'a> {
    /// Literal text covered by `span`.
    pub fn text(&self, span: Span) -> &'a str {
        span.slice(self.source)
    }

    /// All tokens of all lines, in order.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> + '_ {
        self.lines.iter().flat_map(|l| l.tokens.iter())
    }

    /// `(kind, text)` pairs for one line. Mostly useful in assertions.
    pub fn line_parts(&self, index: usize) -> Vec<(TokenKind, &'a str)> {
        self.lines
            .get(index)
            .map(|l| {
                l.tokens
                    .iter()
                    .map(|t| (t.kind, self.text(t.span)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Rebuilds the source from token texts and line terminators.
    pub fn reconstruct(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        for line in &self.lines {
            for t in &line.tokens {
                out.push_str(self.text(t.span));
            }
            if line.terminated {
                out.push('\n');
            }
        }
        out
    }
}
