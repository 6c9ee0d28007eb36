use std::sync::OnceLock;

use regex::Regex;

pub struct LanguageTag;

impl LanguageTag {
    pub const PATTERN: &'static str = r"@([a-zA-Z][a-zA-Z0-9-]*)(?-u:\b)";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid language tag regex"))
    }
}
