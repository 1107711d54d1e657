//! AST to wordcode lowering.

use indexmap::IndexSet;

use codefreeze_core::{CompiledUnit, Constant};

use super::opcode::Opcode;
use crate::parser::ast::{BinOp, Expr, ExprKind, Module, Stmt, StmtKind};

/// Single-pass code generator for one module unit.
pub struct CodeGen {
    code: Vec<u8>,
    consts: IndexSet<Constant>,
    names: IndexSet<String>,
    depth: i32,
    max_depth: i32,
}

impl Default for CodeGen {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeGen {
    pub fn new() -> Self {
        Self {
            code: Vec::new(),
            consts: IndexSet::new(),
            names: IndexSet::new(),
            depth: 0,
            max_depth: 0,
        }
    }

    /// Lowers a module and seals it with `return None`.
    pub fn generate(mut self, module: &Module, filename: &str) -> CompiledUnit {
        for stmt in &module.body {
            self.stmt(stmt);
        }
        let none = self.intern_const(Constant::None);
        self.emit(Opcode::LoadConst, none);
        self.emit(Opcode::ReturnValue, 0);

        debug_assert_eq!(self.depth, 0, "unbalanced stack at end of unit");

        let mut unit = CompiledUnit::module(filename, self.code);
        unit.stacksize = self.max_depth.max(1) as u32;
        unit.consts = self.consts.into_iter().collect();
        unit.names = self.names.into_iter().collect();
        unit
    }

    fn stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Pass => {}
            StmtKind::Assign { target, value } => {
                self.expr(value);
                let idx = self.intern_name(&target.name);
                self.emit(Opcode::StoreName, idx);
            }
            StmtKind::Delete(target) => {
                let idx = self.intern_name(&target.name);
                self.emit(Opcode::DeleteName, idx);
            }
            StmtKind::Expr(expr) => {
                self.expr(expr);
                self.emit(Opcode::PopTop, 0);
            }
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Name(name) => {
                let idx = self.intern_name(name);
                self.emit(Opcode::LoadName, idx);
            }
            ExprKind::Const(value) => {
                let idx = self.intern_const(value.clone());
                self.emit(Opcode::LoadConst, idx);
            }
            ExprKind::Neg(operand) => {
                self.expr(operand);
                self.emit(Opcode::UnaryNegative, 0);
            }
            ExprKind::Binary { op, left, right } => {
                self.expr(left);
                self.expr(right);
                self.emit(binary_opcode(*op), 0);
            }
        }
    }

    fn intern_const(&mut self, value: Constant) -> u32 {
        self.consts.insert_full(value).0 as u32
    }

    fn intern_name(&mut self, name: &str) -> u32 {
        if let Some(idx) = self.names.get_index_of(name) {
            return idx as u32;
        }
        self.names.insert_full(name.to_string()).0 as u32
    }

    /// Appends one instruction, with `EXTENDED_ARG` prefixes for wide args.
    fn emit(&mut self, op: Opcode, arg: u32) {
        for shift in [24u32, 16, 8] {
            if arg >> shift != 0 {
                self.code.push(Opcode::ExtendedArg.byte());
                self.code.push((arg >> shift) as u8);
            }
        }
        self.code.push(op.byte());
        self.code.push(arg as u8);

        self.depth += op.stack_effect();
        self.max_depth = self.max_depth.max(self.depth);
    }
}

fn binary_opcode(op: BinOp) -> Opcode {
    match op {
        BinOp::Add => Opcode::BinaryAdd,
        BinOp::Sub => Opcode::BinarySubtract,
        BinOp::Mul => Opcode::BinaryMultiply,
        BinOp::FloorDiv => Opcode::BinaryFloorDivide,
        BinOp::Mod => Opcode::BinaryModulo,
    }
}
