//! Tricode Virtual Machine
//!
//! This crate lowers parsed tricode statements to a flat bytecode and runs it
//! on a small accumulator machine.
//!
//! # Architecture
//!
//! - one accumulator ("value") that every statement reads and writes
//! - six integer registers: `x,y,z` global, `i,j,k` saved per call frame
//! - an argument stack carrying call arguments and call results
//! - a call stack of return frames
//! - a code table of named segments (the empty name is the top-level program)
//!
//! # Modules
//!
//! - `opcode`: the 11-instruction set
//! - `bytecode`: instruction sequences
//! - `compiler`: statements to bytecode
//! - `vm`: the interpreter
//! - `builtins`: the fixed builtin functions
//! - `error`: runtime errors
//! - `bytecode_debug`: disassembler

pub mod builtins;
pub mod bytecode;
pub mod bytecode_debug;
pub mod compiler;
pub mod error;
pub mod opcode;
pub mod vm;

// Re-export main types
pub use bytecode::Bytecode;
pub use bytecode_debug::disassemble;
pub use compiler::{compile, Compiler};
pub use error::RuntimeError;
pub use opcode::{Instruction, OpCode};
pub use tricode_parser::{Register, SyntaxError, SyntaxErrorKind};
pub use vm::{VmConfig, VM};
