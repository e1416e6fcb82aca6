//! Tokenizer
//!
//! A line is split on whitespace and on the punctuation characters
//! `= [ ] ?`, which always form single-character tokens. A run made only of
//! ASCII digits is an integer; every other run is a word, classified once
//! here as a register, a keyword or a plain name.

use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::register::Register;
use std::fmt;

/// Reserved words and punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `=`: assignment marker, also the name of the equality builtin
    Assign,
    /// `[`
    Open,
    /// `]`
    Close,
    /// `?`
    Terminator,
    Then,
    Else,
    /// `F`, only meaningful at the start of a line
    Define,
}

impl Keyword {
    pub fn symbol(self) -> &'static str {
        match self {
            Keyword::Assign => "=",
            Keyword::Open => "[",
            Keyword::Close => "]",
            Keyword::Terminator => "?",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Define => "F",
        }
    }

    fn from_punctuation(c: char) -> Option<Keyword> {
        match c {
            '=' => Some(Keyword::Assign),
            '[' => Some(Keyword::Open),
            ']' => Some(Keyword::Close),
            '?' => Some(Keyword::Terminator),
            _ => None,
        }
    }

    fn from_word(word: &str) -> Option<Keyword> {
        match word {
            "then" => Some(Keyword::Then),
            "else" => Some(Keyword::Else),
            "F" => Some(Keyword::Define),
            _ => None,
        }
    }
}

/// A single token of a source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Int(i64),
    Register(Register),
    Keyword(Keyword),
    /// Function name (builtin operators such as `+` included)
    Name(String),
}

impl Token {
    /// Integer literal or register read
    pub fn is_operand(&self) -> bool {
        matches!(self, Token::Int(_) | Token::Register(_))
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, Token::Keyword(k) if *k == keyword)
    }

    /// Name this token has when it stands in front of `[`
    pub fn callee_name(&self) -> Option<&str> {
        match self {
            Token::Name(name) => Some(name),
            Token::Keyword(Keyword::Assign) => Some(Keyword::Assign.symbol()),
            _ => None,
        }
    }

    fn from_word(word: &str) -> Result<Token, SyntaxError> {
        if word.bytes().all(|b| b.is_ascii_digit()) {
            return word
                .parse::<i64>()
                .map(Token::Int)
                .map_err(|_| SyntaxError::new(SyntaxErrorKind::IntegerOutOfRange));
        }
        if let Some(reg) = Register::from_name(word) {
            return Ok(Token::Register(reg));
        }
        if let Some(keyword) = Keyword::from_word(word) {
            return Ok(Token::Keyword(keyword));
        }
        Ok(Token::Name(word.to_string()))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Int(n) => write!(f, "{}", n),
            Token::Register(reg) => write!(f, "{}", reg),
            Token::Keyword(keyword) => f.write_str(keyword.symbol()),
            Token::Name(name) => f.write_str(name),
        }
    }
}

/// Split one source line into tokens
pub fn tokenize(line: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (pos, c) in line.char_indices() {
        let punctuation = Keyword::from_punctuation(c);
        if c.is_whitespace() || punctuation.is_some() {
            if let Some(start) = word_start.take() {
                tokens.push(Token::from_word(&line[start..pos])?);
            }
            if let Some(keyword) = punctuation {
                tokens.push(Token::Keyword(keyword));
            }
        } else if word_start.is_none() {
            word_start = Some(pos);
        }
    }

    if let Some(start) = word_start {
        tokens.push(Token::from_word(&line[start..])?);
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> Token {
        Token::Name(s.to_string())
    }

    #[test]
    fn test_punctuation_splits_words() {
        let tokens = tokenize("println[+[2 3]]").unwrap();
        assert_eq!(
            tokens,
            vec![
                name("println"),
                Token::Keyword(Keyword::Open),
                name("+"),
                Token::Keyword(Keyword::Open),
                Token::Int(2),
                Token::Int(3),
                Token::Keyword(Keyword::Close),
                Token::Keyword(Keyword::Close),
            ]
        );
    }

    #[test]
    fn test_assignment_tokens() {
        let tokens = tokenize("5=x").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Int(5),
                Token::Keyword(Keyword::Assign),
                Token::Register(Register::X),
            ]
        );
    }

    #[test]
    fn test_comparison_operators_split_on_equals() {
        // `>=` is not special: `=` always stands alone
        let tokens = tokenize(">=[1 2]").unwrap();
        assert_eq!(tokens[0], name(">"));
        assert_eq!(tokens[1], Token::Keyword(Keyword::Assign));
        assert_eq!(tokens[2], Token::Keyword(Keyword::Open));
    }

    #[test]
    fn test_keywords_and_mixed_words() {
        let tokens = tokenize("then else F 12ab ab12 x1").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Keyword(Keyword::Then),
                Token::Keyword(Keyword::Else),
                Token::Keyword(Keyword::Define),
                name("12ab"),
                name("ab12"),
                name("x1"),
            ]
        );
    }

    #[test]
    fn test_blank_line() {
        assert!(tokenize("   \t ").unwrap().is_empty());
        assert!(tokenize("").unwrap().is_empty());
    }

    #[test]
    fn test_integer_out_of_range() {
        let err = tokenize("99999999999999999999").unwrap_err();
        assert_eq!(err.kind, SyntaxErrorKind::IntegerOutOfRange);
        assert_eq!(err.line, None);
    }

    #[test]
    fn test_non_ascii_words() {
        let tokens = tokenize("größe[1]").unwrap();
        assert_eq!(tokens[0], name("größe"));
        assert_eq!(tokens.len(), 4);
    }
}
