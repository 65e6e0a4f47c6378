//! Splitting of a raw input line into command tokens.
//!
//! The language has no quoting and no escaping: a space always ends a token,
//! and so does the end of the line. Tabs are ordinary characters.

/// Characters that end a token.
const SEPARATORS: [char; 3] = [' ', '\n', '\r'];

/// Splits `line` into its tokens, in order.
///
/// Runs of separators never produce empty tokens, so an empty or all-blank
/// line yields an empty vector. The returned tokens borrow from `line`.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split(SEPARATORS)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_command() {
        assert_eq!(tokenize("echo hi"), vec!["echo", "hi"]);
    }

    #[test]
    fn test_empty_line() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_only_spaces() {
        for n in 1..16 {
            let line = " ".repeat(n);
            assert!(tokenize(&line).is_empty(), "{n} spaces gave tokens");
        }
    }

    #[test]
    fn test_repeated_and_trailing_spaces_collapse() {
        assert_eq!(tokenize("  ls   -l  /tmp   "), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn test_line_terminators_end_tokens() {
        assert_eq!(tokenize("ls -a\n"), vec!["ls", "-a"]);
        assert_eq!(tokenize("ls -a\r\n"), vec!["ls", "-a"]);
    }

    #[test]
    fn test_tabs_are_not_separators() {
        assert_eq!(tokenize("a\tb c"), vec!["a\tb", "c"]);
    }

    #[test]
    fn test_quotes_have_no_meaning() {
        assert_eq!(
            tokenize("echo \"hello world\""),
            vec!["echo", "\"hello", "world\""]
        );
        assert_eq!(tokenize("a\\ b"), vec!["a\\", "b"]);
    }
}
