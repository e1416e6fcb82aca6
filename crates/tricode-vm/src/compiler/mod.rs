//! Bytecode compiler (statements to bytecode)
//!
//! Each scope (program, conditional branch, function body) is compiled by its
//! own [`Compiler`] into an independent [`Bytecode`]. A parent only needs the
//! finished length of a child sequence to compute its jump offset, so no
//! label table or back-patching is involved.

use crate::bytecode::Bytecode;
use crate::opcode::Instruction;
use tricode_parser::{Statement, SyntaxError};

mod calls;
mod statements;

/// Parse and compile a whole source text
pub fn compile(source: &str) -> Result<Bytecode, SyntaxError> {
    let program = tricode_parser::parse(source)?;
    let code = Compiler::compile_block(&program)?;
    log::debug!(
        "compiled {} statement(s) into {} instruction(s)",
        program.len(),
        code.len()
    );
    Ok(code)
}

/// Bytecode compiler for one scope
#[derive(Debug, Default)]
pub struct Compiler {
    /// Sequence being built
    code: Bytecode,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compile a statement sequence into a fresh scope
    pub fn compile_block(statements: &[Statement]) -> Result<Bytecode, SyntaxError> {
        let mut compiler = Compiler::new();
        for statement in statements {
            compiler.compile_statement(statement)?;
        }
        Ok(compiler.finish())
    }

    /// Take the compiled sequence
    pub fn finish(self) -> Bytecode {
        self.code
    }

    // ===== Helper methods =====

    /// Emit instruction
    pub(crate) fn emit(&mut self, instruction: Instruction) -> usize {
        self.code.push(instruction)
    }

    /// Append an already compiled nested scope
    pub(crate) fn emit_block(&mut self, block: Bytecode) {
        self.code.extend(block);
    }
}
