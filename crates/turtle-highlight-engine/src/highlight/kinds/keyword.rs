use std::sync::OnceLock;

use regex::Regex;

pub struct Keyword;

impl Keyword {
    pub const WORDS: [&'static str; 3] = ["a", "true", "false"];
    pub const PATTERN: &'static str = r"(?-u:\b)(a|true|false)(?-u:\b)";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid keyword regex"))
    }
}
