//! Instruction set of the tricode VM
//!
//! Eleven instructions over one accumulator, six registers and an argument
//! stack. Jump offsets are relative and always forward: they count the
//! instructions skipped after the jump itself.
//!
//! | Opcode | Operands        | Effect                                        |
//! |--------|-----------------|-----------------------------------------------|
//! | NOP    |                 | none                                          |
//! | STORE  | n               | value := n                                    |
//! | GET    | r               | value := r                                    |
//! | SET    | r               | r := value                                    |
//! | JMP    | +d              | skip d instructions                           |
//! | JZ     | +d              | skip d instructions if value == 0             |
//! | PUSHN  | n               | push n                                        |
//! | PUSH   | r               | push r                                        |
//! | POP    |                 | value := pop                                  |
//! | CALL   | name,argc       | call, leaving one result on the stack         |
//! | DEFINE | name,argc,body  | register a user function                      |

use crate::bytecode::Bytecode;
use serde::{Deserialize, Serialize};
use std::fmt;
use tricode_parser::Register;

/// Numeric opcode of an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OpCode {
    Nop = 0,
    Store = 1,
    Get = 2,
    Set = 3,
    Jmp = 4,
    Jz = 5,
    PushN = 6,
    Push = 7,
    Pop = 8,
    Call = 9,
    Define = 10,
}

impl OpCode {
    /// Convert to u8
    #[inline]
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn mnemonic(self) -> &'static str {
        match self {
            OpCode::Nop => "NOP",
            OpCode::Store => "STORE",
            OpCode::Get => "GET",
            OpCode::Set => "SET",
            OpCode::Jmp => "JMP",
            OpCode::Jz => "JZ",
            OpCode::PushN => "PUSHN",
            OpCode::Push => "PUSH",
            OpCode::Pop => "POP",
            OpCode::Call => "CALL",
            OpCode::Define => "DEFINE",
        }
    }
}

impl fmt::Display for OpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mnemonic())
    }
}

/// A decoded instruction with its operands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Instruction {
    Nop,
    Store(i64),
    Get(Register),
    Set(Register),
    Jmp(usize),
    Jz(usize),
    PushN(i64),
    Push(Register),
    Pop,
    Call { name: String, argc: usize },
    Define { name: String, argc: usize, body: Bytecode },
}

impl Instruction {
    pub fn opcode(&self) -> OpCode {
        match self {
            Instruction::Nop => OpCode::Nop,
            Instruction::Store(_) => OpCode::Store,
            Instruction::Get(_) => OpCode::Get,
            Instruction::Set(_) => OpCode::Set,
            Instruction::Jmp(_) => OpCode::Jmp,
            Instruction::Jz(_) => OpCode::Jz,
            Instruction::PushN(_) => OpCode::PushN,
            Instruction::Push(_) => OpCode::Push,
            Instruction::Pop => OpCode::Pop,
            Instruction::Call { .. } => OpCode::Call,
            Instruction::Define { .. } => OpCode::Define,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = self.opcode();
        match self {
            Instruction::Nop | Instruction::Pop => write!(f, "{}", op),
            Instruction::Store(n) | Instruction::PushN(n) => write!(f, "{} {}", op, n),
            Instruction::Get(reg) | Instruction::Set(reg) | Instruction::Push(reg) => {
                write!(f, "{} {}", op, reg)
            }
            Instruction::Jmp(offset) | Instruction::Jz(offset) => write!(f, "{} +{}", op, offset),
            Instruction::Call { name, argc } => write!(f, "{} {},{}", op, name, argc),
            Instruction::Define { name, argc, body } => {
                write!(f, "{} {},{},<{} instructions>", op, name, argc, body.len())
            }
        }
    }
}
