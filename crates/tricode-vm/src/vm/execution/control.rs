//! Control flow instruction execution

use crate::error::RuntimeError;
use crate::opcode::Instruction;
use crate::vm::result::ExecutionResult;
use crate::vm::VM;
use std::io::Write;

impl<W: Write> VM<W> {
    /// Execute JMP and JZ
    pub(crate) fn execute_control(
        &mut self,
        instruction: &Instruction,
    ) -> Result<ExecutionResult, RuntimeError> {
        match instruction {
            Instruction::Jmp(offset) => Ok(ExecutionResult::Skip(*offset)),

            Instruction::Jz(offset) => {
                if self.value == 0 {
                    Ok(ExecutionResult::Skip(*offset))
                } else {
                    Ok(ExecutionResult::Continue)
                }
            }

            _ => Err(RuntimeError::InvalidOpcode(instruction.opcode().as_u8())),
        }
    }
}
