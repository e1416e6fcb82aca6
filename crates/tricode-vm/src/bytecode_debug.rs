//! Bytecode debugging utilities

use crate::bytecode::Bytecode;
use crate::opcode::Instruction;
use std::fmt::Write;

/// Render a listing of `code`, followed by the listings of the functions it
/// defines
pub fn disassemble(code: &Bytecode, name: &str) -> String {
    let mut out = String::new();
    disassemble_into(&mut out, code, name);
    out
}

fn disassemble_into(out: &mut String, code: &Bytecode, name: &str) {
    // Writing into a String cannot fail
    let _ = writeln!(out, "== {} ==", display_name(name));
    for (pos, instruction) in code.iter().enumerate() {
        let _ = writeln!(out, "{:04}  {}", pos, instruction);
    }

    for instruction in code {
        if let Instruction::Define { name, body, .. } = instruction {
            out.push('\n');
            disassemble_into(out, body, name);
        }
    }
}

fn display_name(name: &str) -> &str {
    if name.is_empty() {
        "<main>"
    } else {
        name
    }
}
