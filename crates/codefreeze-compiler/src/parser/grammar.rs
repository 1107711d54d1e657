//! Recursive-descent grammar.
//!
//! ```text
//! module := (stmt? NEWLINE)* EOF
//! stmt   := "pass" | NAME "=" expr | "del" NAME | expr
//! expr   := term (("+" | "-") term)*
//! term   := unary (("*" | "//" | "%") unary)*
//! unary  := "-" unary | atom
//! atom   := NAME | INT | STRING | "None" | "True" | "False" | "(" expr ")"
//! ```

use codefreeze_core::Constant;

use super::Parser;
use super::ast::{BinOp, Expr, ExprKind, Ident, Module, Stmt, StmtKind};
use super::core::MAX_NESTING;
use super::lexer::TokenKind;
use crate::diagnostics::CompileError;

type ParseResult<T> = Result<T, CompileError>;

impl Parser<'_> {
    pub(crate) fn parse_module(&mut self) -> ParseResult<Module> {
        let mut body = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::Newline => {
                    self.bump();
                }
                _ => {
                    body.push(self.parse_stmt()?);
                    if !self.currently_is(TokenKind::Eof) {
                        self.expect(TokenKind::Newline, "end of line")?;
                    }
                }
            }
        }
        Ok(Module { body })
    }

    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        let start = self.current().span.start;

        let kind = match self.current_kind() {
            TokenKind::KwPass => {
                self.bump();
                StmtKind::Pass
            }
            TokenKind::KwDel => {
                self.bump();
                StmtKind::Delete(self.parse_ident("name after 'del'")?)
            }
            _ => {
                let expr = self.parse_expr()?;
                if self.currently_is(TokenKind::Equals) {
                    let ExprKind::Name(name) = &expr.kind else {
                        return Err(self.error_at("cannot assign to expression", expr.span.clone()));
                    };
                    let target = Ident {
                        name: name.clone(),
                        span: expr.span.clone(),
                    };
                    self.bump();
                    let value = self.parse_expr()?;
                    StmtKind::Assign { target, value }
                } else {
                    StmtKind::Expr(expr)
                }
            }
        };

        let end = self.prev_end(start);
        Ok(Stmt {
            kind,
            span: start..end,
        })
    }

    fn parse_ident(&mut self, what: &str) -> ParseResult<Ident> {
        let token = self.expect(TokenKind::Name, what)?;
        Ok(Ident {
            name: token.text(self.source).to_string(),
            span: token.span,
        })
    }

    fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_term()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Plus => BinOp::Add,
                TokenKind::Minus => BinOp::Sub,
                _ => return Ok(left),
            };
            self.bump();
            let right = self.parse_term()?;
            left = binary(op, left, right);
        }
    }

    fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        loop {
            let op = match self.current_kind() {
                TokenKind::Star => BinOp::Mul,
                TokenKind::DoubleSlash => BinOp::FloorDiv,
                TokenKind::Percent => BinOp::Mod,
                _ => return Ok(left),
            };
            self.bump();
            let right = self.parse_unary()?;
            left = binary(op, left, right);
        }
    }

    fn parse_unary(&mut self) -> ParseResult<Expr> {
        let Some(minus) = self.eat(TokenKind::Minus) else {
            return self.parse_atom();
        };

        self.enter(minus.span.clone())?;
        let operand = self.parse_unary();
        self.depth -= 1;
        let operand = operand?;

        let span = minus.span.start..operand.span.end;
        // Negative integer literals fold into a single constant.
        if let ExprKind::Const(Constant::Int(v)) = operand.kind {
            return Ok(Expr {
                kind: ExprKind::Const(Constant::Int(-v)),
                span,
            });
        }
        Ok(Expr {
            kind: ExprKind::Neg(Box::new(operand)),
            span,
        })
    }

    fn parse_atom(&mut self) -> ParseResult<Expr> {
        let span = self.current().span.clone();
        let kind = match self.current_kind() {
            TokenKind::Name => ExprKind::Name(self.current_text().to_string()),
            TokenKind::KwNone => ExprKind::Const(Constant::None),
            TokenKind::KwTrue => ExprKind::Const(Constant::Bool(true)),
            TokenKind::KwFalse => ExprKind::Const(Constant::Bool(false)),
            TokenKind::Int => {
                let value = self
                    .current_text()
                    .parse::<i64>()
                    .map_err(|_| self.error_at("integer literal too large", span.clone()))?;
                ExprKind::Const(Constant::Int(value))
            }
            TokenKind::Str => ExprKind::Const(Constant::Str(self.unquote()?)),
            TokenKind::LParen => {
                let open = self.bump();
                self.enter(open.span.clone())?;
                let inner = self.parse_expr();
                self.depth -= 1;
                let inner = inner?;
                let close = self.expect(TokenKind::RParen, "')'")?;
                return Ok(Expr {
                    kind: inner.kind,
                    span: open.span.start..close.span.end,
                });
            }
            _ => return Err(self.unexpected("expression")),
        };
        self.bump();
        Ok(Expr { kind, span })
    }

    /// Decodes the current string token's escapes.
    fn unquote(&self) -> ParseResult<String> {
        let token = self.current();
        let text = self.current_text();
        let body = &text[1..text.len() - 1];

        let mut out = String::with_capacity(body.len());
        let mut chars = body.char_indices();
        while let Some((_, c)) = chars.next() {
            if c != '\\' {
                out.push(c);
                continue;
            }
            let Some((offset, escaped)) = chars.next() else {
                break;
            };
            out.push(match escaped {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                '0' => '\0',
                '\\' | '\'' | '"' => escaped,
                other => {
                    // The backslash is at `offset - 1` in body, and body starts one byte in.
                    let at = token.span.start + offset;
                    return Err(self.error_at(
                        format!("unknown escape sequence '\\{other}'"),
                        at..at + 1 + other.len_utf8(),
                    ));
                }
            });
        }
        Ok(out)
    }

    fn enter(&mut self, span: std::ops::Range<usize>) -> ParseResult<()> {
        if self.depth >= MAX_NESTING {
            return Err(self.error_at("expression nested too deeply", span));
        }
        self.depth += 1;
        Ok(())
    }

    /// End offset of the last consumed token, or `start` if none was consumed.
    fn prev_end(&self, start: usize) -> usize {
        self.consumed_end().unwrap_or(start).max(start)
    }
}

fn binary(op: BinOp, left: Expr, right: Expr) -> Expr {
    let span = left.span.start..right.span.end;
    Expr {
        kind: ExprKind::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        },
        span,
    }
}
