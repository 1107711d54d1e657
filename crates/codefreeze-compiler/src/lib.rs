//! codefreeze front-end: turns source text into a [`CompiledUnit`].
//!
//! Pipeline:
//! - `parser` - lexer and recursive-descent parser producing a statement AST
//! - `codegen` - wordcode generation with constant/name interning
//! - `diagnostics` - [`CompileError`] with source-excerpt rendering
//! - `dump` - disassembly of a compiled unit

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod codegen;
pub mod diagnostics;
pub mod dump;
pub mod parser;

#[cfg(test)]
mod lib_tests;

pub use codefreeze_core::CompiledUnit;
pub use diagnostics::CompileError;
pub use dump::dump;

/// Compiles a whole source file into one module unit.
///
/// `label` names the source in diagnostics and becomes the unit's filename.
pub fn compile(source: &str, label: &str) -> Result<CompiledUnit, CompileError> {
    let module = parser::parse(source, label)?;
    let unit = codegen::CodeGen::new().generate(&module, label);

    tracing::debug!(
        label,
        statements = module.body.len(),
        code_bytes = unit.code.len(),
        stacksize = unit.stacksize,
        "compiled unit"
    );
    Ok(unit)
}
