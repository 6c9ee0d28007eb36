pub struct Comment;

impl Comment {
    pub const MARKER: char = '#';

    /// True when the line, ignoring surrounding whitespace, starts with `#`.
    ///
    /// A `#` later in the line (e.g. inside a URI fragment) does not count.
    pub fn is_comment_line(line: &str) -> bool {
        line.trim().starts_with(Self::MARKER)
    }
}
