//! Registers and return frames

use crate::bytecode::Bytecode;
use std::rc::Rc;
use tricode_parser::Register;

/// Number of registers
pub const REGISTER_COUNT: usize = 6;

/// Number of frame-local registers (`i`, `j`, `k`)
pub const LOCAL_COUNT: usize = Register::LOCAL_COUNT;

/// Snapshot of the frame-local registers
pub type Locals = [i64; LOCAL_COUNT];

/// The six integer registers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Registers {
    slots: [i64; REGISTER_COUNT],
}

impl Registers {
    #[inline]
    pub fn get(&self, reg: Register) -> i64 {
        self.slots[reg.index()]
    }

    #[inline]
    pub fn set(&mut self, reg: Register, value: i64) {
        self.slots[reg.index()] = value;
    }

    /// Copy of `i, j, k`
    pub fn locals(&self) -> Locals {
        let mut locals = [0; LOCAL_COUNT];
        locals.copy_from_slice(&self.slots[LOCAL_COUNT..]);
        locals
    }

    /// Put back a snapshot taken with [`Registers::locals`]
    pub fn restore_locals(&mut self, locals: Locals) {
        self.slots[LOCAL_COUNT..].copy_from_slice(&locals);
    }

    /// Load call arguments into `i, j, k`, zero-padding unused slots
    pub fn load_arguments(&mut self, args: &[i64]) {
        let mut locals = [0; LOCAL_COUNT];
        for (slot, arg) in locals.iter_mut().zip(args) {
            *slot = *arg;
        }
        self.restore_locals(locals);
    }
}

/// Saved caller context, pushed on CALL and popped on return
#[derive(Debug, Clone)]
pub struct ReturnFrame {
    /// Caller's code segment name (empty for the top-level program)
    pub segment: String,
    /// Caller's code
    pub code: Rc<Bytecode>,
    /// Instruction to resume at
    pub return_ip: usize,
    /// Caller's frame-local registers
    pub locals: Locals,
}
