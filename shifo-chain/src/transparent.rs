//! Transparent-related (Bitcoin-inherited) functionality.

mod address;
mod opcodes;
mod script;

pub use address::Address;
pub use opcodes::OpCode;
pub use script::Script;
