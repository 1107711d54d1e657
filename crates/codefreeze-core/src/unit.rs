use std::fmt;

use crate::CodeFlags;

/// Name the front-end gives to a top-level (module) unit.
pub const MODULE_UNIT_NAME: &str = "<module>";

/// A literal value referenced from bytecode via `LOAD_CONST`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Constant {
    None,
    Bool(bool),
    Int(i64),
    Str(String),
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constant::None => f.write_str("None"),
            Constant::Bool(true) => f.write_str("True"),
            Constant::Bool(false) => f.write_str("False"),
            Constant::Int(v) => write!(f, "{v}"),
            Constant::Str(s) => write!(f, "{s:?}"),
        }
    }
}

/// One compiled block of bytecode plus its metadata.
///
/// Immutable once the front-end returns it. `consts` and `names` keep the
/// bytecode self-consistent but are not part of the frozen layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledUnit {
    pub name: String,
    pub filename: String,
    pub code: Vec<u8>,
    pub flags: CodeFlags,
    pub argcount: u32,
    pub posonlyargcount: u32,
    pub kwonlyargcount: u32,
    pub stacksize: u32,
    pub firstlineno: u32,
    pub consts: Vec<Constant>,
    pub names: Vec<String>,
}

impl CompiledUnit {
    /// Creates a module-level unit with no arguments and no constants.
    pub fn module(filename: impl Into<String>, code: Vec<u8>) -> Self {
        Self {
            name: MODULE_UNIT_NAME.to_string(),
            filename: filename.into(),
            code,
            flags: CodeFlags::NOFREE,
            argcount: 0,
            posonlyargcount: 0,
            kwonlyargcount: 0,
            stacksize: 1,
            firstlineno: 1,
            consts: Vec::new(),
            names: Vec::new(),
        }
    }

    /// Overrides the unit's name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
