//! Token-sequence equality.
//!
//! Two outputs are equal when, line by line, they contain the same
//! whitespace-delimited tokens. Lines are read in lockstep for as long as
//! either side has lines left; a missing line counts as an empty one. Within
//! a pair of lines tokens are read in lockstep for as long as either side has
//! tokens left. As a consequence:
//!
//! - runs of spaces, leading and trailing whitespace, and `\r` are ignored;
//! - trailing blank lines and the final newline are ignored;
//! - line structure matters: `"1 2\n3"` does not match `"1 2 3"`.

use std::fmt;

/// First point at which two outputs diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMismatch {
    /// 1-based line number.
    pub line: usize,
    /// 1-based token position within the line.
    pub token: usize,
    /// Expected token, or `None` if the expected line ran out of tokens.
    pub expected: Option<String>,
    /// Actual token, or `None` if the actual line ran out of tokens.
    pub actual: Option<String>,
}

impl fmt::Display for TokenMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, token {}: ", self.line, self.token)?;
        match (&self.expected, &self.actual) {
            (Some(e), Some(a)) => write!(f, "expected {e:?}, got {a:?}"),
            (Some(e), None) => write!(f, "expected {e:?}, got end of line"),
            (None, Some(a)) => write!(f, "expected end of line, got {a:?}"),
            (None, None) => write!(f, "no difference"),
        }
    }
}

/// Whitespace as understood by formatted stream extraction in the C locale.
const fn is_stream_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

fn tokens(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_stream_space).filter(|t| !t.is_empty())
}

/// Compares two outputs token by token.
///
/// # Errors
///
/// Returns the first [`TokenMismatch`] found.
pub fn compare_token_sequence(actual: &str, expected: &str) -> Result<(), TokenMismatch> {
    let mut actual_lines = actual.split('\n');
    let mut expected_lines = expected.split('\n');
    let mut line = 0;

    loop {
        let (actual_line, expected_line) = (actual_lines.next(), expected_lines.next());
        if actual_line.is_none() && expected_line.is_none() {
            return Ok(());
        }
        line += 1;

        let mut actual_tokens = tokens(actual_line.unwrap_or(""));
        let mut expected_tokens = tokens(expected_line.unwrap_or(""));
        let mut token = 0;

        loop {
            token += 1;
            match (actual_tokens.next(), expected_tokens.next()) {
                (None, None) => break,
                (a, e) if a == e => {}
                (a, e) => {
                    return Err(TokenMismatch {
                        line,
                        token,
                        expected: e.map(str::to_owned),
                        actual: a.map(str::to_owned),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn same(actual: &str, expected: &str) -> bool {
        compare_token_sequence(actual, expected).is_ok()
    }

    #[test]
    fn identical_outputs_match() {
        assert!(same("1 2 3\n4 5\n", "1 2 3\n4 5\n"));
    }

    #[test]
    fn extra_spaces_and_trailing_blank_are_ignored() {
        assert!(same("1  2\n  3  \n", "1 2\n3"));
    }

    #[test]
    fn trailing_blank_lines_are_ignored() {
        assert!(same("42\n\n\n", "42"));
        assert!(same("42", "42\n\n"));
    }

    #[test]
    fn crlf_is_tolerated() {
        assert!(same("1 2\r\n3\r\n", "1 2\n3\n"));
    }

    #[test]
    fn tabs_and_vertical_whitespace_split_tokens() {
        assert!(same("a\tb\x0bc\x0cd", "a b c d"));
    }

    #[test]
    fn empty_outputs_match() {
        assert!(same("", ""));
        assert!(same("\n\n", ""));
    }

    #[test]
    fn token_divergence_is_reported() {
        let err = compare_token_sequence("1 2 4", "1 2 3").unwrap_err();
        assert_eq!(
            err,
            TokenMismatch {
                line: 1,
                token: 3,
                expected: Some("3".into()),
                actual: Some("4".into()),
            }
        );
    }

    #[test]
    fn missing_actual_token_is_reported() {
        let err = compare_token_sequence("1 2", "1 2 3").unwrap_err();
        assert_eq!(err.token, 3);
        assert_eq!(err.expected.as_deref(), Some("3"));
        assert_eq!(err.actual, None);
    }

    #[test]
    fn extra_actual_line_is_reported() {
        let err = compare_token_sequence("1\n2", "1").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.expected, None);
        assert_eq!(err.actual.as_deref(), Some("2"));
    }

    #[test]
    fn line_structure_matters() {
        assert!(!same("1 2 3", "1 2\n3"));
        assert!(!same("1\n\n2", "1\n2"));
    }

    #[test]
    fn empty_actual_against_nonempty_expected_fails() {
        let err = compare_token_sequence("", "ok").unwrap_err();
        assert_eq!(err.line, 1);
        assert_eq!(err.actual, None);
    }

    #[test]
    fn tokens_are_case_sensitive() {
        assert!(!same("YES", "yes"));
    }

    #[test]
    fn display_describes_position() {
        let err = compare_token_sequence("a b", "a c").unwrap_err();
        assert_eq!(err.to_string(), r#"line 1, token 2: expected "c", got "b""#);

        let err = compare_token_sequence("a", "a c").unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"line 1, token 2: expected "c", got end of line"#
        );
    }
}
