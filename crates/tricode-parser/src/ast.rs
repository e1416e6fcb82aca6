//! Statement nodes

use crate::register::Register;

/// An ordered sequence of statements: a program, an argument list or a
/// conditional branch
pub type Block = Vec<Statement>;

/// A parsed statement
///
/// Every statement leaves its result in the accumulator, except
/// [`Statement::Assignment`] which only copies the accumulator into a register.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `42`
    IntLiteral(i64),

    /// `x`
    RegisterRead(Register),

    /// `=x`
    Assignment(Register),

    /// `name[args...]`
    FunctionCall { name: String, args: Block },

    /// `then block1 ?` or `then block1 else block2 ?`
    Conditional { then_block: Block, else_block: Block },

    /// `F name arity body...`
    FunctionDefinition { name: String, arity: u8, body: Block },
}

impl Statement {
    /// Convenience constructor for calls
    pub fn call(name: impl Into<String>, args: Block) -> Self {
        Statement::FunctionCall {
            name: name.into(),
            args,
        }
    }

    /// Whether this node may appear inside an argument list
    pub fn is_argument(&self) -> bool {
        matches!(
            self,
            Statement::IntLiteral(_) | Statement::RegisterRead(_) | Statement::FunctionCall { .. }
        )
    }
}
