//! Human-readable dump of a compiled unit for debugging.

use std::fmt::Write as _;

use codefreeze_core::CompiledUnit;

use crate::codegen::Opcode;

/// ANSI escapes by role. All empty when color is off.
#[derive(Clone, Copy)]
struct Palette {
    section: &'static str,
    opcode: &'static str,
    operand: &'static str,
    muted: &'static str,
    reset: &'static str,
}

impl Palette {
    fn new(color: bool) -> Self {
        if color {
            Self {
                section: "\x1b[1;34m",
                opcode: "\x1b[34m",
                operand: "\x1b[32m",
                muted: "\x1b[2m",
                reset: "\x1b[0m",
            }
        } else {
            Self {
                section: "",
                opcode: "",
                operand: "",
                muted: "",
                reset: "",
            }
        }
    }
}

/// Renders metadata, constant/name tables and a disassembly.
pub fn dump(unit: &CompiledUnit, color: bool) -> String {
    let mut out = String::new();
    let c = Palette::new(color);

    let _ = writeln!(out, "{}[unit]{}", c.section, c.reset);
    let metadata: [(&str, String); 8] = [
        ("name", unit.name.clone()),
        ("filename", unit.filename.clone()),
        ("flags", format!("{} ({})", unit.flags.bits(), unit.flags)),
        ("argcount", unit.argcount.to_string()),
        ("posonlyargcount", unit.posonlyargcount.to_string()),
        ("kwonlyargcount", unit.kwonlyargcount.to_string()),
        ("stacksize", unit.stacksize.to_string()),
        ("firstlineno", unit.firstlineno.to_string()),
    ];
    for (key, value) in metadata {
        let _ = writeln!(out, "{key:<16}{}={} {value}", c.muted, c.reset);
    }

    let _ = writeln!(out, "\n{}[consts]{}", c.section, c.reset);
    for (i, value) in unit.consts.iter().enumerate() {
        let _ = writeln!(out, "{}{i:>4}{} {}{value}{}", c.muted, c.reset, c.operand, c.reset);
    }

    let _ = writeln!(out, "\n{}[names]{}", c.section, c.reset);
    for (i, name) in unit.names.iter().enumerate() {
        let _ = writeln!(out, "{}{i:>4}{} {}{name}{}", c.muted, c.reset, c.operand, c.reset);
    }

    let _ = writeln!(out, "\n{}[code]{} {} bytes", c.section, c.reset, unit.code.len());
    disassemble(&mut out, unit, c);
    out
}

fn disassemble(out: &mut String, unit: &CompiledUnit, c: Palette) {
    let mut extended: u32 = 0;

    for (i, word) in unit.code.chunks(2).enumerate() {
        let offset = i * 2;
        let byte = word[0];
        let raw_arg = word.get(1).copied().unwrap_or(0);

        let Some(op) = Opcode::from_byte(byte) else {
            let _ = writeln!(out, "{}{offset:>6}{} <unknown {byte}>", c.muted, c.reset);
            extended = 0;
            continue;
        };

        let arg = (extended << 8) | u32::from(raw_arg);
        if op == Opcode::ExtendedArg {
            extended = arg;
            let _ = writeln!(
                out,
                "{}{offset:>6}{} {}{:<20}{} {}{raw_arg}{}",
                c.muted,
                c.reset,
                c.opcode,
                op.mnemonic(),
                c.reset,
                c.muted,
                c.reset
            );
            continue;
        }
        extended = 0;

        let _ = write!(out, "{}{offset:>6}{} {}", c.muted, c.reset, c.opcode);
        if op.has_arg() {
            let _ = write!(out, "{:<20}{} {arg}", op.mnemonic(), c.reset);
            if let Some(note) = operand_note(unit, op, arg) {
                let _ = write!(out, " {}({}{note}{}){}", c.muted, c.operand, c.muted, c.reset);
            }
        } else {
            let _ = write!(out, "{}{}", op.mnemonic(), c.reset);
        }
        out.push('\n');
    }
}

fn operand_note(unit: &CompiledUnit, op: Opcode, arg: u32) -> Option<String> {
    let idx = arg as usize;
    match op {
        Opcode::LoadConst => unit.consts.get(idx).map(ToString::to_string),
        Opcode::LoadName | Opcode::StoreName | Opcode::DeleteName => unit.names.get(idx).cloned(),
        _ => None,
    }
}
