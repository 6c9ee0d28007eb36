use std::sync::OnceLock;

use regex::Regex;

pub struct StringLiteral;

impl StringLiteral {
    /// The next quote always closes; `\"` is not treated as an escape.
    pub const PATTERN: &'static str = r#""([^"]*)""#;

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid string literal regex"))
    }
}
