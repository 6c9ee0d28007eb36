use std::sync::OnceLock;

use regex::Regex;

pub struct Uri;

impl Uri {
    /// At least one character between the brackets; `<>` is not a URI.
    pub const PATTERN: &'static str = r"<([^>]+)>";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid URI regex"))
    }
}
