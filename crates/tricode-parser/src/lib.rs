//! Tricode parser
//!
//! Turns line-oriented tricode source into statement nodes:
//!
//! - `token`: splits one source line into [`Token`]s
//! - `ast`: statement nodes produced by the parser
//! - `register`: the six integer registers
//! - `parser`: recursive-descent parser over one line of tokens
//! - `error`: [`SyntaxError`] and its kinds

pub mod ast;
pub mod error;
pub mod parser;
pub mod register;
pub mod token;

// Re-export commonly used items
pub use ast::{Block, Statement};
pub use error::{SyntaxError, SyntaxErrorKind};
pub use parser::{parse, parse_line, MAX_ARITY};
pub use register::Register;
pub use token::{tokenize, Keyword, Token};
