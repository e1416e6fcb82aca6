//! `F name arity body...` lines

use super::{parse_block, MAX_ARITY};
use crate::ast::Statement;
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::Token;

pub(super) fn parse_definition(tokens: &[Token]) -> Result<Statement, SyntaxError> {
    // `=` names the equality builtin and is accepted like any other name
    let (name, arity) = match (tokens.get(1).and_then(Token::callee_name), tokens.get(2)) {
        (Some(name), Some(Token::Int(arity))) => (name.to_string(), *arity),
        _ => return Err(SyntaxError::new(SyntaxErrorKind::InvalidFunctionDefinition)),
    };

    let arity = u8::try_from(arity)
        .ok()
        .filter(|a| usize::from(*a) <= MAX_ARITY)
        .ok_or_else(|| SyntaxError::new(SyntaxErrorKind::ArityOutOfRange))?;

    let body = parse_block(&tokens[3..])?;

    Ok(Statement::FunctionDefinition { name, arity, body })
}
