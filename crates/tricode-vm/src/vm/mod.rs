//! Virtual Machine implementation
//!
//! A single-stepping interpreter. [`VM::step`] executes one instruction;
//! reaching the end of a code segment returns to the caller's frame (or ends
//! the program when the call stack is empty) and pushes the finished scope's
//! accumulator onto the argument stack. That push is the only way results
//! travel back from calls.

use crate::builtins::create_builtin_registry;
use crate::builtins::registry::BuiltinRegistry;
use crate::bytecode::Bytecode;
use crate::error::RuntimeError;
use crate::opcode::{Instruction, OpCode};
use std::collections::HashMap;
use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use tricode_parser::Register;

// Module structure
mod config;
mod execution;
mod frame;
mod result;

// Re-export public types
pub use config::{VmConfig, MAX_CALL_DEPTH};
pub use frame::{Locals, Registers, ReturnFrame, LOCAL_COUNT, REGISTER_COUNT};

// Internal imports
use result::ExecutionResult;

/// Name of the top-level code segment
pub const MAIN_SEGMENT: &str = "";

/// Virtual Machine
///
/// Owns all of its state; independent instances never share anything. The
/// output sink receives everything the output builtins write.
pub struct VM<W: Write = Stdout> {
    /// Accumulator
    value: i64,

    /// `x y z i j k`
    registers: Registers,

    /// Argument stack
    arguments: Vec<i64>,

    /// Call stack
    frames: Vec<ReturnFrame>,

    /// Code table: segment name to instructions
    segments: HashMap<String, Rc<Bytecode>>,

    /// Arity table, seeded with the builtins
    arities: HashMap<String, usize>,

    /// Built-in function registry
    builtins: Rc<BuiltinRegistry>,

    /// Name of the segment being executed
    segment: String,

    /// Code of the segment being executed
    code: Rc<Bytecode>,

    /// Instruction pointer into `code`
    ip: usize,

    config: VmConfig,

    output: W,
}

impl VM<Stdout> {
    /// Create a new VM writing to stdout
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl Default for VM<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> VM<W> {
    /// Create a new VM writing to `output`
    pub fn with_output(output: W) -> Self {
        let builtins = Rc::new(create_builtin_registry());
        let mut vm = Self {
            value: 0,
            registers: Registers::default(),
            arguments: Vec::new(),
            frames: Vec::new(),
            segments: HashMap::new(),
            arities: HashMap::new(),
            builtins,
            segment: String::new(),
            code: Rc::new(Bytecode::new()),
            ip: 0,
            config: VmConfig::default(),
            output,
        };
        vm.reset();
        vm
    }

    /// Replace the limits of this VM
    pub fn with_config(mut self, config: VmConfig) -> Self {
        self.config = config;
        self
    }

    /// Reinitialize everything: builtins-only arity table, no user code,
    /// zeroed accumulator, registers and stacks
    pub fn reset(&mut self) {
        self.arities = self
            .builtins
            .iter()
            .map(|builtin| (builtin.name.clone(), builtin.arity))
            .collect();
        self.segments.clear();
        self.value = 0;
        self.registers = Registers::default();
        self.clear_program();
        log::debug!("vm reset");
    }

    /// Run `code` as the new top-level program
    ///
    /// Registers, the accumulator and all definitions survive from earlier
    /// executions; the top-level segment and both stacks start empty.
    pub fn execute(&mut self, code: Bytecode) -> Result<(), RuntimeError> {
        self.clear_program();
        self.add(code);
        self.run()
    }

    /// Like [`VM::execute`], but stops with [`RuntimeError::Aborted`] once
    /// `cancel` is set
    pub fn execute_cancellable(
        &mut self,
        code: Bytecode,
        cancel: &AtomicBool,
    ) -> Result<(), RuntimeError> {
        self.clear_program();
        self.add(code);
        self.run_cancellable(cancel)
    }

    /// Append `code` to the top-level segment without touching any state
    pub fn add(&mut self, code: Bytecode) -> &mut Self {
        let main = self.segments.entry(MAIN_SEGMENT.to_string()).or_default();
        Rc::make_mut(main).extend(code);

        // Suspended callers of the top-level program resume in the new code
        for frame in &mut self.frames {
            if frame.segment == MAIN_SEGMENT {
                frame.code = Rc::clone(main);
            }
        }
        if self.segment == MAIN_SEGMENT {
            self.code = Rc::clone(main);
        }
        self
    }

    /// Step until the program and the call stack are exhausted
    pub fn run(&mut self) -> Result<(), RuntimeError> {
        self.run_cancellable(&AtomicBool::new(false))
    }

    /// Like [`VM::run`], but checks `cancel` between steps
    ///
    /// A cancelled run fails with [`RuntimeError::Aborted`] and leaves the VM
    /// exactly as it was after the last completed step. Output is flushed
    /// whether or not the run succeeds.
    pub fn run_cancellable(&mut self, cancel: &AtomicBool) -> Result<(), RuntimeError> {
        let outcome = self.step_until_cancelled(cancel);
        let flushed = self.flush();
        outcome.and(flushed)
    }

    /// Execute one instruction; `Ok(false)` once the program has finished
    pub fn step(&mut self) -> Result<bool, RuntimeError> {
        loop {
            let code = Rc::clone(&self.code);
            let Some(instruction) = code.get(self.ip) else {
                if !self.do_return() {
                    return Ok(false);
                }
                continue;
            };

            match self.execute_instruction(instruction)? {
                ExecutionResult::Continue => self.ip += 1,
                ExecutionResult::Skip(offset) => self.ip += 1 + offset,
                ExecutionResult::Enter => {}
            }
            return Ok(true);
        }
    }

    /// Execute a single instruction
    fn execute_instruction(
        &mut self,
        instruction: &Instruction,
    ) -> Result<ExecutionResult, RuntimeError> {
        match instruction.opcode() {
            OpCode::Nop => Ok(ExecutionResult::Continue),

            // Accumulator, registers and argument stack
            OpCode::Store
            | OpCode::Get
            | OpCode::Set
            | OpCode::PushN
            | OpCode::Push
            | OpCode::Pop => self.execute_stack(instruction),

            // Control flow
            OpCode::Jmp | OpCode::Jz => self.execute_control(instruction),

            // Functions
            OpCode::Call | OpCode::Define => self.execute_functions(instruction),
        }
    }

    // ===== Accessors =====

    /// Accumulator
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn register(&self, reg: Register) -> i64 {
        self.registers.get(reg)
    }

    pub fn set_register(&mut self, reg: Register, value: i64) {
        self.registers.set(reg, value);
    }

    /// Number of values on the argument stack
    pub fn argument_depth(&self) -> usize {
        self.arguments.len()
    }

    /// Number of return frames on the call stack
    pub fn call_depth(&self) -> usize {
        self.frames.len()
    }

    /// Registered arity of a builtin or user function
    pub fn arity(&self, name: &str) -> Option<usize> {
        self.arities.get(name).copied()
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.arities.contains_key(name)
    }

    pub fn is_builtin(&self, name: &str) -> bool {
        self.builtins.lookup(name).is_some()
    }

    /// Code of a user function, or of the top-level program for `""`
    pub fn segment(&self, name: &str) -> Option<&Bytecode> {
        self.segments.get(name).map(|code| &**code)
    }

    /// Name of the segment being executed
    pub fn current_segment(&self) -> &str {
        &self.segment
    }

    /// Instruction the next [`VM::step`] executes, if the segment has one left
    pub fn current_instruction(&self) -> Option<&Instruction> {
        self.code.get(self.ip)
    }

    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Flush the output sink
    pub fn flush(&mut self) -> Result<(), RuntimeError> {
        self.output.flush()?;
        Ok(())
    }

    // ===== Helper methods =====

    fn step_until_cancelled(&mut self, cancel: &AtomicBool) -> Result<(), RuntimeError> {
        loop {
            if cancel.load(Ordering::Relaxed) {
                return Err(RuntimeError::Aborted);
            }
            if !self.step()? {
                return Ok(());
            }
        }
    }

    /// Empty the top-level segment and both stacks; go back to its start
    fn clear_program(&mut self) {
        let main = Rc::new(Bytecode::new());
        self.segments.insert(MAIN_SEGMENT.to_string(), Rc::clone(&main));
        self.code = main;
        self.segment = MAIN_SEGMENT.to_string();
        self.ip = 0;
        self.frames.clear();
        self.arguments.clear();
    }

    /// Pop a return frame and resume the caller; `false` if there is none
    fn do_return(&mut self) -> bool {
        let Some(frame) = self.frames.pop() else {
            return false;
        };

        log::trace!(
            "return from '{}' to '{}' with {}",
            self.segment,
            frame.segment,
            self.value
        );

        self.segment = frame.segment;
        self.code = frame.code;
        self.ip = frame.return_ip;
        self.registers.restore_locals(frame.locals);
        self.arguments.push(self.value);
        true
    }

    /// Pop the top `count` arguments, first argument first
    pub(crate) fn pop_arguments(&mut self, count: usize) -> Result<Vec<i64>, RuntimeError> {
        let split = self
            .arguments
            .len()
            .checked_sub(count)
            .ok_or(RuntimeError::ArgumentStackUnderflow)?;
        Ok(self.arguments.split_off(split))
    }
}
