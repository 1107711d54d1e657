//! Lexing and parsing into a statement AST.

pub mod ast;
mod core;
mod grammar;
pub mod lexer;


pub(crate) use self::core::Parser;

use crate::diagnostics::CompileError;
use ast::Module;

/// Parses a whole source file. Stops at the first error.
pub fn parse(source: &str, label: &str) -> Result<Module, CompileError> {
    let tokens = lexer::lex(source, label)?;
    Parser::new(source, label, tokens).parse_module()
}
