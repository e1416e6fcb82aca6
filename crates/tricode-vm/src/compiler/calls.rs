//! Function call compilation
//!
//! Arguments never pass through the accumulator: literals and registers are
//! pushed directly, and a nested call leaves its single result on the
//! argument stack where the outer call picks it up.

use crate::compiler::Compiler;
use crate::opcode::Instruction;
use tricode_parser::{Statement, SyntaxError, SyntaxErrorKind};

impl Compiler {
    /// Compile argument pushes followed by `CALL name,argc`
    pub(crate) fn compile_call(
        &mut self,
        name: &str,
        args: &[Statement],
    ) -> Result<(), SyntaxError> {
        for arg in args {
            match arg {
                Statement::IntLiteral(value) => {
                    self.emit(Instruction::PushN(*value));
                }
                Statement::RegisterRead(reg) => {
                    self.emit(Instruction::Push(*reg));
                }
                Statement::FunctionCall { name, args } => self.compile_call(name, args)?,
                _ => return Err(SyntaxError::new(SyntaxErrorKind::InvalidArgument)),
            }
        }

        self.emit(Instruction::Call {
            name: name.to_string(),
            argc: args.len(),
        });
        Ok(())
    }
}
