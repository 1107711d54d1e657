//! Host runtime layout: type tags, sentinels, and field tables.

use codefreeze_core::CompiledUnit;

pub const INCLUDE: &str = "#include <Python.h>";

/// Symbol of the outermost frozen unit.
pub const ROOT_SYMBOL: &str = "toplevel";

/// Reference count that keeps a static object from ever being freed.
pub const IMMORTAL_REFCNT: u64 = 999_999_999;

/// Hash field value meaning "not computed yet".
pub const HASH_UNCOMPUTED: i64 = -1;

/// `kind` value of one-byte-per-character text.
pub const TEXT_KIND_1BYTE: u8 = 1;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Bytes,
    Text,
    Code,
}

impl ObjectKind {
    /// Host type object the header's type field points at.
    pub fn type_tag(self) -> &'static str {
        match self {
            Self::Bytes => "PyBytes_Type",
            Self::Text => "PyUnicode_Type",
            Self::Code => "PyCode_Type",
        }
    }
}

/// A value to freeze, borrowed from the unit that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Object<'a> {
    Bytes(&'a [u8]),
    Text(&'a str),
    Code(&'a CompiledUnit),
}

impl Object<'_> {
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Bytes(_) => ObjectKind::Bytes,
            Self::Text(_) => ObjectKind::Text,
            Self::Code(_) => ObjectKind::Code,
        }
    }
}

/// Integer field of the code layout, read straight from the unit.
pub struct ScalarField {
    pub name: &'static str,
    pub read: fn(&CompiledUnit) -> u32,
}

/// Field of the code layout that points at a separately emitted object.
///
/// The target is declared as `{symbol}_{suffix}`.
pub struct RefField {
    pub name: &'static str,
    pub suffix: &'static str,
    pub read: fn(&CompiledUnit) -> Object<'_>,
}

pub const CODE_SCALAR_FIELDS: [ScalarField; 6] = [
    ScalarField {
        name: "co_flags",
        read: flags,
    },
    ScalarField {
        name: "co_argcount",
        read: argcount,
    },
    ScalarField {
        name: "co_posonlyargcount",
        read: posonlyargcount,
    },
    ScalarField {
        name: "co_kwonlyargcount",
        read: kwonlyargcount,
    },
    ScalarField {
        name: "co_stacksize",
        read: stacksize,
    },
    ScalarField {
        name: "co_firstlineno",
        read: firstlineno,
    },
];

/// Emission order of these is also declaration order.
pub const CODE_REF_FIELDS: [RefField; 2] = [
    RefField {
        name: "co_code",
        suffix: "code",
        read: code,
    },
    RefField {
        name: "co_name",
        suffix: "name",
        read: name,
    },
];

fn flags(unit: &CompiledUnit) -> u32 {
    unit.flags.bits()
}

fn argcount(unit: &CompiledUnit) -> u32 {
    unit.argcount
}

fn posonlyargcount(unit: &CompiledUnit) -> u32 {
    unit.posonlyargcount
}

fn kwonlyargcount(unit: &CompiledUnit) -> u32 {
    unit.kwonlyargcount
}

fn stacksize(unit: &CompiledUnit) -> u32 {
    unit.stacksize
}

fn firstlineno(unit: &CompiledUnit) -> u32 {
    unit.firstlineno
}

fn code(unit: &CompiledUnit) -> Object<'_> {
    Object::Bytes(&unit.code)
}

fn name(unit: &CompiledUnit) -> Object<'_> {
    Object::Text(&unit.name)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub fn is_c_identifier(symbol: &str) -> bool {
    let mut bytes = symbol.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphabetic() || b == b'_' => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_')
}
