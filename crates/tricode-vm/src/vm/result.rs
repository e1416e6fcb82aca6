//! Execution result types

/// How the instruction pointer moves after an instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ExecutionResult {
    /// Continue to next instruction
    Continue,
    /// Skip this many instructions after the current one
    Skip(usize),
    /// A call switched segments; the pointer is already set
    Enter,
}
