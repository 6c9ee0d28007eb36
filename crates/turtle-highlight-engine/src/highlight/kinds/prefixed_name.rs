use std::sync::OnceLock;

use regex::Regex;

pub struct PrefixedName;

impl PrefixedName {
    /// Capture 1 is the namespace, capture 2 the local name. Word boundaries
    /// are ASCII so a neighbouring non-ASCII letter still delimits a name.
    pub const PATTERN: &'static str =
        r"(?-u:\b)([a-zA-Z][a-zA-Z0-9]*):([a-zA-Z][a-zA-Z0-9_-]*)(?-u:\b)";

    pub fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(Self::PATTERN).expect("Invalid prefixed name regex"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(s: &str) -> Option<(String, String)> {
        PrefixedName::regex()
            .captures(s)
            .map(|c| (c[1].to_string(), c[2].to_string()))
    }

    #[test]
    fn splits_namespace_and_local_name() {
        assert_eq!(
            parts("dcat:Dataset"),
            Some(("dcat".to_string(), "Dataset".to_string()))
        );
    }

    #[test]
    fn local_name_allows_hyphen_and_underscore() {
        assert_eq!(
            parts("ex:has_part-of"),
            Some(("ex".to_string(), "has_part-of".to_string()))
        );
    }

    #[test]
    fn empty_prefix_is_not_matched() {
        assert_eq!(parts(":local"), None);
    }

    #[test]
    fn digit_first_namespace_is_not_matched() {
        assert_eq!(parts("9ex:thing"), None);
    }

    #[test]
    fn trailing_hyphen_is_left_out() {
        // no word boundary between '-' and ' ', so the match backs off
        assert_eq!(
            parts("ex:foo- ."),
            Some(("ex".to_string(), "foo".to_string()))
        );
    }
}
