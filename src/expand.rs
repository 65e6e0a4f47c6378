//! `$NAME` and `$?` substitution.

use crate::command::ExitCode;
use crate::env::Environment;
use std::borrow::Cow;
use tracing::debug;

/// Name that expands to the status of the last finished program.
const LAST_STATUS: &str = "?";

/// Expands every token that starts with `$`.
///
/// `$?` becomes the decimal `last_status`. `$NAME` becomes the value of
/// `NAME` in `env`. Anything else, including unknown variables and a bare
/// `$`, is passed through untouched. Only the first character of a token is
/// looked at, and each token is substituted at most once.
pub fn expand<'a>(
    tokens: &[&'a str],
    last_status: ExitCode,
    env: &Environment,
) -> Vec<Cow<'a, str>> {
    tokens
        .iter()
        .map(|token| expand_token(token, last_status, env))
        .collect()
}

fn expand_token<'a>(token: &'a str, last_status: ExitCode, env: &Environment) -> Cow<'a, str> {
    let Some(name) = token.strip_prefix('$') else {
        return Cow::Borrowed(token);
    };
    if name == LAST_STATUS {
        return Cow::Owned(last_status.to_string());
    }
    match env.get_var(name) {
        Some(value) => Cow::Owned(value),
        None => {
            if !name.is_empty() {
                debug!(variable = name, "unknown variable left unexpanded");
            }
            Cow::Borrowed(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> Environment {
        Environment::isolated([("HOME", "/home/dsh"), ("EMPTY", "")])
    }

    #[test]
    fn test_plain_tokens_unchanged() {
        let tokens = ["ls", "-l", "a$b", "?", "x$"];
        let out = expand(&tokens, 3, &env());
        assert_eq!(out, tokens);
        assert!(out.iter().all(|t| matches!(t, Cow::Borrowed(_))));
    }

    #[test]
    fn test_variable_is_substituted() {
        assert_eq!(expand(&["cd", "$HOME"], 0, &env()), ["cd", "/home/dsh"]);
    }

    #[test]
    fn test_set_but_empty_variable_becomes_empty() {
        assert_eq!(expand(&["$EMPTY"], 0, &env()), [""]);
    }

    #[test]
    fn test_last_status() {
        for n in [0, 1, 42, 127, 255, -1] {
            assert_eq!(expand(&["$?"], n, &env()), [n.to_string()]);
        }
    }

    #[test]
    fn test_last_status_wins_over_question_mark_variable() {
        let env = Environment::isolated([("?", "from-env")]);
        assert_eq!(expand(&["$?"], 7, &env), ["7"]);
    }

    #[test]
    fn test_unknown_variable_left_alone() {
        assert_eq!(expand(&["$NOPE_NOT_SET"], 0, &env()), ["$NOPE_NOT_SET"]);
    }

    #[test]
    fn test_bare_dollar_left_alone() {
        assert_eq!(expand(&["$"], 0, &env()), ["$"]);
    }

    #[test]
    fn test_embedded_variable_not_expanded() {
        assert_eq!(expand(&["x$HOME"], 0, &env()), ["x$HOME"]);
    }

    #[test]
    fn test_no_recursive_expansion() {
        let env = Environment::isolated([("A", "$B"), ("B", "deep")]);
        assert_eq!(expand(&["$A"], 0, &env), ["$B"]);
    }

    #[test]
    fn test_empty_token_is_safe() {
        assert_eq!(expand(&[""], 0, &env()), [""]);
    }

    #[test]
    fn test_every_dollar_token_expanded() {
        assert_eq!(
            expand(&["echo", "$HOME", "$?", "$HOME"], 2, &env()),
            ["echo", "/home/dsh", "2", "/home/dsh"]
        );
    }
}
