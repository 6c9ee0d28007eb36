use regex::{Captures, Regex};

use super::{
    kinds::{Keyword, LanguageTag, PrefixedName, StringLiteral, Uri},
    span::Span,
    types::{Token, TokenKind},
};

/// One stage of the line pipeline, each recognizing a single category.
///
/// Passes run in declaration order. Text a pass claims is final; the gaps
/// between its matches are handed to the next pass, and whatever the last
/// pass leaves over becomes plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    Uri,
    StringLiteral,
    PrefixedName,
    LanguageTag,
    Keyword,
}

impl Pass {
    pub const ORDER: [Pass; 5] = [
        Pass::Uri,
        Pass::StringLiteral,
        Pass::PrefixedName,
        Pass::LanguageTag,
        Pass::Keyword,
    ];

    /// The pass that receives this pass's gaps.
    pub fn next(self) -> Option<Pass> {
        match self {
            Pass::Uri => Some(Pass::StringLiteral),
            Pass::StringLiteral => Some(Pass::PrefixedName),
            Pass::PrefixedName => Some(Pass::LanguageTag),
            Pass::LanguageTag => Some(Pass::Keyword),
            Pass::Keyword => None,
        }
    }

    fn regex(self) -> &'static Regex {
        match self {
            Pass::Uri => Uri::regex(),
            Pass::StringLiteral => StringLiteral::regex(),
            Pass::PrefixedName => PrefixedName::regex(),
            Pass::LanguageTag => LanguageTag::regex(),
            Pass::Keyword => Keyword::regex(),
        }
    }

    /// Emits the tokens for one match. `base` is the absolute offset of the
    /// text the captures were taken from.
    fn emit(self, caps: &Captures<'_>, base: usize, out: &mut Vec<Token>) {
        let Some(whole) = caps.get(0) else {
            return;
        };
        let whole_span = Span::from(whole.range()).offset(base);
        match self {
            Pass::Uri => out.push(Token::new(TokenKind::Uri, whole_span)),
            Pass::StringLiteral => out.push(Token::new(TokenKind::String, whole_span)),
            Pass::LanguageTag => out.push(Token::new(TokenKind::LanguageTag, whole_span)),
            Pass::Keyword => out.push(Token::new(TokenKind::Keyword, whole_span)),
            Pass::PrefixedName => {
                let (Some(ns), Some(local)) = (caps.get(1), caps.get(2)) else {
                    out.push(Token::new(TokenKind::Plain, whole_span));
                    return;
                };
                let ns = Span::from(ns.range()).offset(base);
                let local = Span::from(local.range()).offset(base);
                out.push(Token::new(TokenKind::PrefixNamespace, ns));
                out.push(Token::new(TokenKind::Plain, Span::new(ns.end, local.start)));
                out.push(Token::new(TokenKind::PrefixLocalName, local));
            }
        }
    }

    /// Splits `text` into this pass's matches and classified gaps.
    ///
    /// Matches are found left to right without overlap. Tokens are appended
    /// to `out` with spans shifted by `base`, covering `text` exactly.
    pub fn classify(self, base: usize, text: &str, out: &mut Vec<Token>) {
        if text.is_empty() {
            return;
        }

        let mut last = 0;
        for caps in self.regex().captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                self.forward(base + last, &text[last..whole.start()], out);
            }
            self.emit(&caps, base, out);
            last = whole.end();
        }

        if last < text.len() {
            self.forward(base + last, &text[last..], out);
        }
    }

    /// Hands an unmatched gap to the next pass, or emits it as plain text.
    fn forward(self, base: usize, gap: &str, out: &mut Vec<Token>) {
        match self.next() {
            Some(next) => next.classify(base, gap, out),
            None => out.push(Token::new(
                TokenKind::Plain,
                Span::new(base, base + gap.len()),
            )),
        }
    }
}
