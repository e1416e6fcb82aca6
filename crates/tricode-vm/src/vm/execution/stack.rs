//! Accumulator, register and argument stack instructions

use crate::error::RuntimeError;
use crate::opcode::Instruction;
use crate::vm::result::ExecutionResult;
use crate::vm::VM;
use std::io::Write;

impl<W: Write> VM<W> {
    /// Execute STORE, GET, SET, PUSHN, PUSH and POP
    pub(crate) fn execute_stack(
        &mut self,
        instruction: &Instruction,
    ) -> Result<ExecutionResult, RuntimeError> {
        match instruction {
            Instruction::Store(n) => self.value = *n,
            Instruction::Get(reg) => self.value = self.registers.get(*reg),
            Instruction::Set(reg) => self.registers.set(*reg, self.value),
            Instruction::PushN(n) => self.arguments.push(*n),
            Instruction::Push(reg) => self.arguments.push(self.registers.get(*reg)),
            Instruction::Pop => {
                self.value = self
                    .arguments
                    .pop()
                    .ok_or(RuntimeError::ArgumentStackUnderflow)?;
            }
            _ => return Err(RuntimeError::InvalidOpcode(instruction.opcode().as_u8())),
        }
        Ok(ExecutionResult::Continue)
    }
}
