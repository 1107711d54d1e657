#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for codefreeze.
//!
//! A [`CompiledUnit`] is what the front-end hands to the serializer: bytecode
//! plus the scalar metadata a host runtime needs to run it. Everything here is
//! plain owned data, read once during a single emission pass.

mod flags;
mod unit;


pub use flags::CodeFlags;
pub use unit::{CompiledUnit, Constant, MODULE_UNIT_NAME};
