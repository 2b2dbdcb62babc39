//! Value Objects

mod system_instruction;

pub use system_instruction::*;
