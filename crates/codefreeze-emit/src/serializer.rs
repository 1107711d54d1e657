//! Walks objects and writes one C declaration per object.

use codefreeze_core::CompiledUnit;
use indexmap::IndexMap;

use crate::error::{EmitError, EmitResult};
use crate::layout::{
    CODE_REF_FIELDS, CODE_SCALAR_FIELDS, HASH_UNCOMPUTED, IMMORTAL_REFCNT, INCLUDE, Object,
    ObjectKind, TEXT_KIND_1BYTE, is_c_identifier,
};
use crate::literal::{TextClass, classify_text, encode_bytes_literal};
use crate::printer::Printer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Linkage {
    /// Visible to the embedding program.
    External,
    /// Only referenced from within the artifact.
    Internal,
}

impl Linkage {
    fn prefix(self) -> &'static str {
        match self {
            Self::External => "",
            Self::Internal => "static ",
        }
    }
}

/// Emits objects into a single artifact.
///
/// Sub-objects are always written before the object that points at them, and
/// a symbol becomes referenceable only after its declaration is complete.
#[derive(Debug)]
pub struct Serializer {
    printer: Printer,
    symbols: IndexMap<String, ObjectKind>,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    /// Starts an artifact with the host include line.
    pub fn new() -> Self {
        let mut printer = Printer::new();
        printer.line(INCLUDE);
        printer.blank();
        Self {
            printer,
            symbols: IndexMap::new(),
        }
    }

    /// Emits `object` and everything it references, with `symbol` externally visible.
    ///
    /// On error nothing from this call remains: partial text and any
    /// sub-objects it declared are discarded.
    pub fn emit(&mut self, symbol: &str, object: Object<'_>) -> EmitResult<()> {
        let text_mark = self.printer.len();
        let symbol_mark = self.symbols.len();

        let result = self.emit_object(symbol, object, Linkage::External);
        if result.is_err() {
            self.printer.truncate(text_mark);
            self.symbols.truncate(symbol_mark);
        }
        result
    }

    /// Declared symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = (&str, ObjectKind)> {
        self.symbols.iter().map(|(name, kind)| (name.as_str(), *kind))
    }

    pub fn finish(self) -> String {
        self.printer.finish()
    }

    fn emit_object(&mut self, symbol: &str, object: Object<'_>, linkage: Linkage) -> EmitResult<()> {
        if !is_c_identifier(symbol) {
            return Err(EmitError::InvalidSymbol(symbol.to_string()));
        }
        if self.symbols.contains_key(symbol) {
            return Err(EmitError::DuplicateSymbol(symbol.to_string()));
        }

        match object {
            Object::Bytes(bytes) => self.emit_bytes(symbol, bytes, linkage)?,
            Object::Text(text) => self.emit_text(symbol, text, linkage)?,
            Object::Code(unit) => self.emit_code(symbol, unit, linkage)?,
        }

        tracing::debug!(symbol, kind = ?object.kind(), "declared object");
        self.symbols.insert(symbol.to_string(), object.kind());
        Ok(())
    }

    /// Pointer expression for an already declared symbol.
    fn reference(&self, symbol: &str) -> EmitResult<String> {
        if !self.symbols.contains_key(symbol) {
            return Err(EmitError::UndeclaredSymbol(symbol.to_string()));
        }
        Ok(format!("(PyObject *) &{symbol}"))
    }

    fn emit_bytes(&mut self, symbol: &str, bytes: &[u8], linkage: Linkage) -> EmitResult<()> {
        // Room for the trailing NUL.
        let size = bytes.len() + 1;
        let p = &mut self.printer;

        p.block(&format!("struct {symbol}_type"), ";", |p| {
            p.line("PyObject_VAR_HEAD");
            p.line("Py_hash_t ob_shash;");
            p.line(&format!("char ob_sval[{size}];"));
            Ok(())
        })?;
        p.block(
            &format!("{}struct {symbol}_type {symbol} =", linkage.prefix()),
            ";",
            |p| {
                object_var_head(p, ObjectKind::Bytes, size)?;
                p.line(&format!(".ob_shash = {HASH_UNCOMPUTED},"));
                p.line(&format!(".ob_sval = {},", encode_bytes_literal(bytes)));
                Ok(())
            },
        )?;
        p.blank();
        Ok(())
    }

    fn emit_text(&mut self, symbol: &str, text: &str, linkage: Linkage) -> EmitResult<()> {
        let TextClass::AsciiCompact { length } = classify_text(text)?;
        let p = &mut self.printer;

        p.block(
            &format!("{}PyCompactUnicodeObject {symbol} =", linkage.prefix()),
            ";",
            |p| {
                p.block("._base =", ",", |p| {
                    object_head(p, ObjectKind::Text)?;
                    p.line(&format!(".length = {length},"));
                    p.line(&format!(".hash = {HASH_UNCOMPUTED},"));
                    p.block(".state =", ",", |p| {
                        p.line(&format!(".kind = {TEXT_KIND_1BYTE},"));
                        p.line(".compact = 1,");
                        p.line(".ascii = 1,");
                        p.line(".ready = 1,");
                        Ok(())
                    })
                })?;
                p.line(&format!(".utf8_length = {length},"));
                p.line(&format!(".utf8 = {},", encode_bytes_literal(text.as_bytes())));
                p.line(&format!(".wstr_length = {length},"));
                Ok(())
            },
        )?;
        p.blank();
        Ok(())
    }

    fn emit_code(&mut self, symbol: &str, unit: &CompiledUnit, linkage: Linkage) -> EmitResult<()> {
        let mut refs = Vec::with_capacity(CODE_REF_FIELDS.len());
        for field in &CODE_REF_FIELDS {
            let child = format!("{symbol}_{}", field.suffix);
            self.emit_object(&child, (field.read)(unit), Linkage::Internal)?;
            refs.push((field.name, self.reference(&child)?));
        }

        let p = &mut self.printer;
        p.block(
            &format!("{}struct PyCodeObject {symbol} =", linkage.prefix()),
            ";",
            |p| {
                object_head(p, ObjectKind::Code)?;
                for field in &CODE_SCALAR_FIELDS {
                    p.line(&format!(".{} = {},", field.name, (field.read)(unit)));
                }
                for (name, target) in &refs {
                    p.line(&format!(".{name} = {target},"));
                }
                Ok(())
            },
        )?;
        p.blank();
        Ok(())
    }
}

fn object_head(p: &mut Printer, kind: ObjectKind) -> EmitResult<()> {
    p.block(".ob_base =", ",", |p| {
        p.line(&format!(".ob_refcnt = {IMMORTAL_REFCNT},"));
        p.line(&format!(".ob_type = &{},", kind.type_tag()));
        Ok(())
    })
}

fn object_var_head(p: &mut Printer, kind: ObjectKind, size: usize) -> EmitResult<()> {
    p.block(".ob_base =", ",", |p| {
        object_head(p, kind)?;
        p.line(&format!(".ob_size = {size},"));
        Ok(())
    })
}

/// Freezes `unit` into a complete artifact whose outermost object is `root`.
pub fn freeze_unit(unit: &CompiledUnit, root: &str) -> EmitResult<String> {
    let mut serializer = Serializer::new();
    serializer.emit(root, Object::Code(unit))?;
    Ok(serializer.finish())
}
