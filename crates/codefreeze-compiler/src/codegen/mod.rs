//! Bytecode generation.

mod generator;
mod opcode;

#[cfg(test)]
mod generator_tests;

pub use generator::CodeGen;
pub use opcode::Opcode;
