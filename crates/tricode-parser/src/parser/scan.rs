//! Span scanning over a token slice
//!
//! Both scans return `None` when the span never closes; the caller turns
//! that into the matching "incomplete" syntax error.

use crate::token::{Keyword, Token};

/// Index of the `]` matching the `[` at `open`
pub(crate) fn matching_close(tokens: &[Token], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (offset, token) in tokens.get(open..)?.iter().enumerate() {
        match token {
            Token::Keyword(Keyword::Open) => depth += 1,
            Token::Keyword(Keyword::Close) => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Index and kind of the token closing a conditional branch that starts at
/// `start`: the first `?` (or `else`, when `stop_at_else`) outside nested
/// conditionals and brackets
pub(crate) fn block_end(
    tokens: &[Token],
    start: usize,
    stop_at_else: bool,
) -> Option<(usize, Keyword)> {
    let mut nested = 0usize;
    let mut brackets = 0usize;

    for (offset, token) in tokens.get(start..)?.iter().enumerate() {
        let Token::Keyword(keyword) = token else {
            continue;
        };
        match keyword {
            Keyword::Open => brackets += 1,
            Keyword::Close => brackets = brackets.saturating_sub(1),
            _ if brackets > 0 => {}
            Keyword::Then => nested += 1,
            Keyword::Else if nested == 0 && stop_at_else => {
                return Some((start + offset, Keyword::Else));
            }
            Keyword::Terminator if nested == 0 => {
                return Some((start + offset, Keyword::Terminator));
            }
            Keyword::Terminator => nested -= 1,
            _ => {}
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    #[test]
    fn test_matching_close_nested() {
        let tokens = tokenize("f[g[1] 2] 3").unwrap();
        assert_eq!(matching_close(&tokens, 1), Some(7));
        assert_eq!(matching_close(&tokens, 3), Some(5));
    }

    #[test]
    fn test_matching_close_unbalanced() {
        let tokens = tokenize("f[g[1] 2").unwrap();
        assert_eq!(matching_close(&tokens, 1), None);
    }

    #[test]
    fn test_block_end_stops_at_else() {
        let tokens = tokenize("then 1 else 2 ?").unwrap();
        assert_eq!(block_end(&tokens, 1, true), Some((2, Keyword::Else)));
        assert_eq!(block_end(&tokens, 3, false), Some((4, Keyword::Terminator)));
    }

    #[test]
    fn test_block_end_skips_nested_conditionals() {
        let tokens = tokenize("then then 1 else 2 ? ?").unwrap();
        assert_eq!(block_end(&tokens, 1, true), Some((6, Keyword::Terminator)));
    }

    #[test]
    fn test_block_end_missing() {
        let tokens = tokenize("then 1 else 2").unwrap();
        assert_eq!(block_end(&tokens, 3, false), None);
    }
}
