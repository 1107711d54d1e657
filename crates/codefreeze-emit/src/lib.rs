#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! C static-initializer emission for compiled units.
//!
//! The serializer turns a [`CompiledUnit`](codefreeze_core::CompiledUnit) into
//! text that a C compiler accepts as a set of statically allocated, immortal
//! runtime objects. Leaves (the bytecode and the unit name) are declared first,
//! the code object last, so every reference points backwards.
//!
//! ```text
//! #include <Python.h>
//!
//! static struct toplevel_code_type toplevel_code = { ... };
//! static PyCompactUnicodeObject toplevel_name = { ... };
//! struct PyCodeObject toplevel = { ... };
//! ```

mod error;
pub mod layout;
mod literal;
mod printer;
mod serializer;

#[cfg(test)]
mod literal_tests;

pub use error::{EmitError, EmitResult};
pub use layout::{Object, ObjectKind, ROOT_SYMBOL};
pub use literal::{TextClass, classify_text, encode_bytes_literal};
pub use printer::Printer;
pub use serializer::{Serializer, freeze_unit};
