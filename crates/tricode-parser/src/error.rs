//! Syntax errors

use thiserror::Error;

/// What went wrong while tokenizing or parsing a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
    /// `[` whose matching `]` never arrives
    #[error("incomplete function call")]
    IncompleteFunctionCall,

    /// `=` not followed by a register name
    #[error("incomplete assignment")]
    IncompleteAssignment,

    /// `then` (or `else`) without its terminating `?`
    #[error("incomplete conditional block")]
    IncompleteConditional,

    /// A function name not followed by `[`
    #[error("function should be followed by arguments")]
    DanglingFunctionName,

    /// A line or block ending on something other than a value
    #[error("incomplete statement")]
    IncompleteStatement,

    /// `F` line without a name and an integer arity
    #[error("invalid function definition")]
    InvalidFunctionDefinition,

    /// Function arity outside 0..=3
    #[error("a number of arguments should be 0..3")]
    ArityOutOfRange,

    /// `[` after an integer or register
    #[error("function call without a function name")]
    MissingFunctionName,

    /// Assignment, conditional or definition inside an argument list
    #[error("only values and function calls can be passed as arguments")]
    InvalidArgument,

    /// Digit run that does not fit in 64 bits
    #[error("integer literal out of range")]
    IntegerOutOfRange,
}

/// Compile-time error, optionally tagged with its 1-based source line
///
/// Errors raised while parsing a sub-span carry no line; the top-level
/// driver attaches it once the line is known.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} ({})", describe_line(.line))]
pub struct SyntaxError {
    pub line: Option<usize>,
    pub kind: SyntaxErrorKind,
}

impl SyntaxError {
    pub fn new(kind: SyntaxErrorKind) -> Self {
        Self { line: None, kind }
    }

    /// Attach a line number
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// The message without line information
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

impl From<SyntaxErrorKind> for SyntaxError {
    fn from(kind: SyntaxErrorKind) -> Self {
        Self::new(kind)
    }
}

fn describe_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!("line {}", n),
        None => "line unknown".to_string(),
    }
}
