//! Recursive-descent parser
//!
//! Works on one line of tokens at a time, left to right, remembering the
//! previous atom ("pending") so that a name can be joined with the `[` that
//! follows it and `=` with the register after it.

use crate::ast::{Block, Statement};
use crate::error::{SyntaxError, SyntaxErrorKind};
use crate::token::{tokenize, Keyword, Token};

mod definition;
mod scan;

/// Highest arity a user function may declare
pub const MAX_ARITY: usize = 3;

/// Parse a whole program, one line at a time
///
/// Lines without tokens are skipped. Errors carry the 1-based line number.
pub fn parse(source: &str) -> Result<Block, SyntaxError> {
    let mut program = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let lineno = index + 1;
        let tokens = tokenize(line).map_err(|e| e.at_line(lineno))?;
        if tokens.is_empty() {
            continue;
        }
        let statements = parse_line(&tokens).map_err(|e| e.at_line(lineno))?;
        program.extend(statements);
    }

    Ok(program)
}

/// Parse the tokens of one line; a leading `F` makes it a function definition
pub fn parse_line(tokens: &[Token]) -> Result<Block, SyntaxError> {
    match tokens.first() {
        Some(token) if token.is_keyword(Keyword::Define) => {
            Ok(vec![definition::parse_definition(tokens)?])
        }
        _ => parse_block(tokens),
    }
}

/// Previous atom awaiting its follow-up token
#[derive(Clone, Copy)]
enum Pending<'t> {
    /// Start of span, or the last construct was fully consumed
    Empty,
    /// Integer or register, already emitted
    Operand,
    /// `=`: the next token names the assigned register
    Assign,
    /// A word that is only valid in front of `[`
    Word(&'t Token),
}

fn error(kind: SyntaxErrorKind) -> SyntaxError {
    SyntaxError::new(kind)
}

/// Parse a span of tokens into a statement sequence
pub(crate) fn parse_block(tokens: &[Token]) -> Result<Block, SyntaxError> {
    let mut result = Vec::new();
    let mut pending = Pending::Empty;
    let mut pos = 0;

    while pos < tokens.len() {
        let token = &tokens[pos];

        if token.is_keyword(Keyword::Open) {
            let close = scan::matching_close(tokens, pos)
                .ok_or_else(|| error(SyntaxErrorKind::IncompleteFunctionCall))?;
            let inner = &tokens[pos + 1..close];

            match pending {
                // A bare bracket span groups statements
                Pending::Empty => result.extend(parse_block(inner)?),
                Pending::Assign => {
                    result.push(Statement::call(Keyword::Assign.symbol(), parse_arguments(inner)?))
                }
                Pending::Word(word) => {
                    let name = word
                        .callee_name()
                        .ok_or_else(|| error(SyntaxErrorKind::MissingFunctionName))?;
                    result.push(Statement::call(name, parse_arguments(inner)?));
                }
                Pending::Operand => return Err(error(SyntaxErrorKind::MissingFunctionName)),
            }

            pending = Pending::Empty;
            pos = close + 1;
            continue;
        }

        if let Pending::Assign = pending {
            match token {
                Token::Register(reg) => result.push(Statement::Assignment(*reg)),
                _ => return Err(error(SyntaxErrorKind::IncompleteAssignment)),
            }
            pending = Pending::Empty;
            pos += 1;
            continue;
        }

        if let Pending::Word(_) = pending {
            return Err(error(SyntaxErrorKind::DanglingFunctionName));
        }

        if token.is_keyword(Keyword::Then) {
            let (statement, end) = parse_conditional(tokens, pos)?;
            result.push(statement);
            pending = Pending::Empty;
            pos = end + 1;
            continue;
        }

        pending = match token {
            Token::Int(value) => {
                result.push(Statement::IntLiteral(*value));
                Pending::Operand
            }
            Token::Register(reg) => {
                result.push(Statement::RegisterRead(*reg));
                Pending::Operand
            }
            Token::Keyword(Keyword::Assign) => Pending::Assign,
            other => Pending::Word(other),
        };
        pos += 1;
    }

    match pending {
        Pending::Empty | Pending::Operand => Ok(result),
        Pending::Assign | Pending::Word(_) => Err(error(SyntaxErrorKind::IncompleteStatement)),
    }
}

/// Parse the conditional whose `then` sits at `start`; returns the node and
/// the index of its closing `?`
fn parse_conditional(tokens: &[Token], start: usize) -> Result<(Statement, usize), SyntaxError> {
    let incomplete = || error(SyntaxErrorKind::IncompleteConditional);

    let (then_end, terminator) = scan::block_end(tokens, start + 1, true).ok_or_else(incomplete)?;
    let then_block = parse_block(&tokens[start + 1..then_end])?;

    let (else_block, end) = if terminator == Keyword::Else {
        let (else_end, _) = scan::block_end(tokens, then_end + 1, false).ok_or_else(incomplete)?;
        (parse_block(&tokens[then_end + 1..else_end])?, else_end)
    } else {
        (Vec::new(), then_end)
    };

    Ok((
        Statement::Conditional {
            then_block,
            else_block,
        },
        end,
    ))
}

/// Parse a call's argument span; only values and nested calls may appear
fn parse_arguments(tokens: &[Token]) -> Result<Block, SyntaxError> {
    let args = parse_block(tokens)?;
    if args.iter().all(Statement::is_argument) {
        Ok(args)
    } else {
        Err(error(SyntaxErrorKind::InvalidArgument))
    }
}
