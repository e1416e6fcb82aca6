//! Function call and definition execution

use crate::error::RuntimeError;
use crate::opcode::Instruction;
use crate::vm::frame::ReturnFrame;
use crate::vm::result::ExecutionResult;
use crate::vm::VM;
use crate::Bytecode;
use std::io::Write;
use std::mem;
use std::rc::Rc;
use tricode_parser::MAX_ARITY;

impl<W: Write> VM<W> {
    /// Execute CALL and DEFINE
    pub(crate) fn execute_functions(
        &mut self,
        instruction: &Instruction,
    ) -> Result<ExecutionResult, RuntimeError> {
        match instruction {
            Instruction::Call { name, argc } => self.call_function(name, *argc),
            Instruction::Define { name, argc, body } => {
                self.define_function(name, *argc, body)?;
                Ok(ExecutionResult::Continue)
            }
            _ => Err(RuntimeError::InvalidOpcode(instruction.opcode().as_u8())),
        }
    }

    fn call_function(&mut self, name: &str, argc: usize) -> Result<ExecutionResult, RuntimeError> {
        let expected = self
            .arities
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.to_string()))?;
        if expected != argc {
            return Err(RuntimeError::ArityMismatch {
                name: name.to_string(),
                expected,
                got: argc,
            });
        }
        if self.arguments.len() < argc {
            return Err(RuntimeError::ArgumentStackUnderflow);
        }

        if let Some(builtin) = self.builtins.lookup(name) {
            let func = builtin.func;
            let args = self.pop_arguments(argc)?;
            // Output builtins leave the accumulator alone and push it as
            // their result.
            if let Some(result) = func(&mut self.output, &args)? {
                self.value = result;
            }
            self.arguments.push(self.value);
            return Ok(ExecutionResult::Continue);
        }

        let limit = self.config.max_call_depth;
        if self.frames.len() >= limit {
            return Err(RuntimeError::CallDepthExceeded { limit });
        }
        let callee = self
            .segments
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.to_string()))?;
        let args = self.pop_arguments(argc)?;

        self.frames.push(ReturnFrame {
            segment: mem::replace(&mut self.segment, name.to_string()),
            code: mem::replace(&mut self.code, callee),
            return_ip: self.ip + 1,
            locals: self.registers.locals(),
        });
        self.registers.load_arguments(&args);
        self.ip = 0;

        log::trace!(
            "call '{}' with {:?} at depth {}",
            name,
            args,
            self.frames.len()
        );
        Ok(ExecutionResult::Enter)
    }

    fn define_function(
        &mut self,
        name: &str,
        argc: usize,
        body: &Bytecode,
    ) -> Result<(), RuntimeError> {
        if argc > MAX_ARITY {
            return Err(RuntimeError::InvalidArity {
                name: name.to_string(),
                argc,
            });
        }
        if self.arities.contains_key(name) {
            return Err(RuntimeError::AlreadyDefinedFunction(name.to_string()));
        }

        self.segments.insert(name.to_string(), Rc::new(body.clone()));
        self.arities.insert(name.to_string(), argc);
        log::debug!(
            "defined '{}' with {} parameter(s), {} instruction(s)",
            name,
            argc,
            body.len()
        );
        Ok(())
    }
}
