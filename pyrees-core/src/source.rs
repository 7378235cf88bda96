//! Line view over source text.

/// Characters that end a line, besides `\r\n` which counts as one break.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines the way Python's `str.splitlines` does.
///
/// Terminators are dropped and a trailing terminator does not produce an
/// extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                end = j + 1;
            }
        }
        start = end;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Immutable source text with its line structure.
#[derive(Debug, Clone)]
pub struct SourceText<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: split_lines(text),
        }
    }

    /// The full, unsplit text
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines with at least one non-whitespace character
    pub fn non_blank(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied().filter(|l| !is_blank(l))
    }

    pub fn non_blank_count(&self) -> usize {
        self.non_blank().count()
    }
}

/// Whitespace as Python's `str.strip` sees it: Unicode whitespace plus the
/// `\x1c`..`\x1f` separators
fn is_strip_space(c: char) -> bool {
    c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Strip leading and trailing whitespace like Python's `str.strip`
pub(crate) fn strip(line: &str) -> &str {
    line.trim_matches(is_strip_space)
}

pub(crate) fn is_blank(line: &str) -> bool {
    strip(line).is_empty()
}

/// Length in characters, matching how the measures count
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_newlines() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_empty_and_lone_newline() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("\n\n"), vec!["", ""]);
    }

    #[test]
    fn test_split_crlf_is_one_break() {
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\rb"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_split_other_python_breaks() {
        assert_eq!(split_lines("a\x0cb\u{2028}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("x\u{85}"), vec!["x"]);
    }

    #[test]
    fn test_non_blank_view() {
        let src = SourceText::new("x = 1\n   \n\t\ny = 2\n");
        assert_eq!(src.line_count(), 4);
        assert_eq!(src.non_blank_count(), 2);
        assert_eq!(src.non_blank().collect::<Vec<_>>(), vec!["x = 1", "y = 2"]);
    }

    #[test]
    fn test_strip_matches_python_whitespace() {
        assert_eq!(strip("\x1f a = 1\x1f\u{a0}"), "a = 1");
        assert!(is_blank("\x1f"));
        assert!(is_blank("\u{3000}\t"));
        assert!(!is_blank("\u{200b}"));
    }

    #[test]
    fn test_char_len_counts_code_points() {
        assert_eq!(char_len("héllo"), 5);
    }
}
