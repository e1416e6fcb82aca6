//! Instruction execution handlers

mod control;
mod functions;
mod stack;
