//! Statement compilation

use crate::compiler::Compiler;
use crate::opcode::Instruction;
use tricode_parser::{Block, Statement, SyntaxError};

impl Compiler {
    /// Compile a statement; afterwards its result is in the accumulator
    pub fn compile_statement(&mut self, statement: &Statement) -> Result<(), SyntaxError> {
        match statement {
            Statement::IntLiteral(value) => {
                self.emit(Instruction::Store(*value));
            }

            Statement::RegisterRead(reg) => {
                self.emit(Instruction::Get(*reg));
            }

            Statement::Assignment(reg) => {
                self.emit(Instruction::Set(*reg));
            }

            Statement::FunctionCall { name, args } => {
                self.compile_call(name, args)?;
                // Move the call result from the argument stack into the accumulator
                self.emit(Instruction::Pop);
            }

            Statement::Conditional {
                then_block,
                else_block,
            } => self.compile_conditional(then_block, else_block)?,

            Statement::FunctionDefinition { name, arity, body } => {
                let body = Compiler::compile_block(body)?;
                self.emit(Instruction::Define {
                    name: name.clone(),
                    argc: usize::from(*arity),
                    body,
                });
            }
        }
        Ok(())
    }

    /// `JZ` over the then-branch; with an else-branch, the then-branch ends
    /// with a `JMP` over it so both paths meet after the else-branch
    fn compile_conditional(
        &mut self,
        then_block: &Block,
        else_block: &Block,
    ) -> Result<(), SyntaxError> {
        let then_code = Compiler::compile_block(then_block)?;

        if else_block.is_empty() {
            self.emit(Instruction::Jz(then_code.len()));
            self.emit_block(then_code);
        } else {
            let else_code = Compiler::compile_block(else_block)?;
            self.emit(Instruction::Jz(then_code.len() + 1));
            self.emit_block(then_code);
            self.emit(Instruction::Jmp(else_code.len()));
            self.emit_block(else_code);
        }

        Ok(())
    }
}
