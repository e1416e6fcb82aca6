//! Register names
//!
//! Tricode has exactly six integer registers. `x`, `y` and `z` are global and
//! survive every call; `i`, `j` and `k` belong to the current call frame and
//! double as the parameter slots of a user function.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six VM registers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Register {
    X,
    Y,
    Z,
    I,
    J,
    K,
}

impl Register {
    /// All registers in slot order
    pub const ALL: [Register; 6] = [
        Register::X,
        Register::Y,
        Register::Z,
        Register::I,
        Register::J,
        Register::K,
    ];

    /// Number of frame-local registers (and maximum parameter count)
    pub const LOCAL_COUNT: usize = 3;

    /// Look up a register by its source name
    pub fn from_name(name: &str) -> Option<Register> {
        match name {
            "x" => Some(Register::X),
            "y" => Some(Register::Y),
            "z" => Some(Register::Z),
            "i" => Some(Register::I),
            "j" => Some(Register::J),
            "k" => Some(Register::K),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Register::X => "x",
            Register::Y => "y",
            Register::Z => "z",
            Register::I => "i",
            Register::J => "j",
            Register::K => "k",
        }
    }

    /// Slot index: globals occupy 0..3, frame-locals 3..6
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Whether the register keeps its value across calls
    #[inline]
    pub fn is_global(self) -> bool {
        self.index() < Self::LOCAL_COUNT
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
