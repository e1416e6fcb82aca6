//! Runtime errors
//!
//! Compile-time errors are [`tricode_parser::SyntaxError`]; everything raised
//! while executing bytecode is a [`RuntimeError`]. A runtime error aborts the
//! current execution immediately.

use thiserror::Error;

/// VM runtime errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    /// CALL of a name missing from the arity table
    #[error("function '{0}' is not defined.")]
    UndefinedFunction(String),

    /// CALL whose argument count differs from the registered arity
    #[error("function '{name}' expected {expected} argument(s), got {got}.")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// POP or CALL with too few values on the argument stack
    #[error("argument stack underflow")]
    ArgumentStackUnderflow,

    #[error("division by zero")]
    DivisionByZero,

    /// `write` of a value that is not a Unicode scalar value
    #[error("invalid character number")]
    InvalidCharacterCode(i64),

    /// DEFINE with more parameters than frame-local registers
    #[error("function '{name}' declares {argc} parameters, at most 3 are allowed.")]
    InvalidArity { name: String, argc: usize },

    /// DEFINE of a name already in the arity table
    #[error("function '{0}' is already defined.")]
    AlreadyDefinedFunction(String),

    /// Opcode byte outside the instruction set
    #[error("invalid opcode")]
    InvalidOpcode(u8),

    /// Builtin arithmetic left the 64-bit range
    #[error("integer overflow in '{0}'")]
    IntegerOverflow(&'static str),

    /// Too many nested user function calls
    #[error("call depth limit of {limit} exceeded")]
    CallDepthExceeded { limit: usize },

    /// Execution cancelled between two steps
    #[error("aborted.")]
    Aborted,

    /// The output sink failed
    #[error("output error: {0}")]
    Output(String),
}

impl From<std::io::Error> for RuntimeError {
    fn from(err: std::io::Error) -> Self {
        RuntimeError::Output(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RuntimeError::UndefinedFunction("foo".to_string()).to_string(),
            "function 'foo' is not defined."
        );
        assert_eq!(
            RuntimeError::ArityMismatch {
                name: "inc".to_string(),
                expected: 1,
                got: 2,
            }
            .to_string(),
            "function 'inc' expected 1 argument(s), got 2."
        );
        assert_eq!(RuntimeError::InvalidCharacterCode(-1).to_string(), "invalid character number");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert_eq!(RuntimeError::from(io), RuntimeError::Output("pipe closed".to_string()));
    }
}
