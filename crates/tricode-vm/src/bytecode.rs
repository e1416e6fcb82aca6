//! Bytecode container
//!
//! A [`Bytecode`] is the flat instruction sequence of one scope: the
//! top-level program, a conditional branch or a function body. Nested scopes
//! are compiled into their own sequences and never share instructions.

use crate::opcode::Instruction;
use serde::{Deserialize, Serialize};

/// Instruction sequence of one scope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bytecode {
    instructions: Vec<Instruction>,
}

impl Bytecode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an instruction and return its position
    pub fn push(&mut self, instruction: Instruction) -> usize {
        self.instructions.push(instruction);
        self.instructions.len() - 1
    }

    /// Append another sequence
    pub fn extend(&mut self, other: Bytecode) {
        self.instructions.extend(other.instructions);
    }

    /// Get instruction at position
    #[inline]
    pub fn get(&self, pos: usize) -> Option<&Instruction> {
        self.instructions.get(pos)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instruction> {
        self.instructions.iter()
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load bytecode previously written by [`Bytecode::to_json`]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Vec<Instruction>> for Bytecode {
    fn from(instructions: Vec<Instruction>) -> Self {
        Self { instructions }
    }
}

impl<'a> IntoIterator for &'a Bytecode {
    type Item = &'a Instruction;
    type IntoIter = std::slice::Iter<'a, Instruction>;

    fn into_iter(self) -> Self::IntoIter {
        self.instructions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tricode_parser::Register;

    #[test]
    fn test_push_and_get() {
        let mut code = Bytecode::new();
        assert!(code.is_empty());

        let pos = code.push(Instruction::Store(42));
        assert_eq!(pos, 0);
        let pos = code.push(Instruction::Set(Register::X));
        assert_eq!(pos, 1);

        assert_eq!(code.len(), 2);
        assert_eq!(code.get(0), Some(&Instruction::Store(42)));
        assert_eq!(code.get(2), None);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut code = Bytecode::from(vec![Instruction::Nop]);
        code.extend(Bytecode::from(vec![Instruction::Pop, Instruction::Store(1)]));
        assert_eq!(
            code.instructions(),
            &[Instruction::Nop, Instruction::Pop, Instruction::Store(1)]
        );
    }

    #[test]
    fn test_json_is_a_plain_list() {
        let body = Bytecode::from(vec![Instruction::Get(Register::I)]);
        let code = Bytecode::from(vec![Instruction::Define {
            name: "id".to_string(),
            argc: 1,
            body,
        }]);
        let json = code.to_json().unwrap();
        assert!(json.trim_start().starts_with('['));
        assert_eq!(Bytecode::from_json(&json).unwrap(), code);
    }
}
