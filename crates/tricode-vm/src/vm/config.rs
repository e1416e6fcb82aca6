//! VM configuration

/// Default bound on nested user function calls
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Limits a host imposes on one VM instance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmConfig {
    /// Maximum number of return frames on the call stack
    pub max_call_depth: usize,
}

impl Default for VmConfig {
    fn default() -> Self {
        Self {
            max_call_depth: MAX_CALL_DEPTH,
        }
    }
}
