//! Parser state and token cursor.

use std::ops::Range;

use super::lexer::{Token, TokenKind};
use crate::diagnostics::CompileError;

/// Deepest parenthesis/unary nesting accepted before bailing out.
pub(super) const MAX_NESTING: u32 = 200;

pub(crate) struct Parser<'s> {
    pub(super) source: &'s str,
    pub(super) label: &'s str,
    tokens: Vec<Token>,
    pos: usize,
    pub(super) depth: u32,
}

impl<'s> Parser<'s> {
    /// `tokens` must end with `Eof`.
    pub(crate) fn new(source: &'s str, label: &'s str, tokens: Vec<Token>) -> Self {
        debug_assert!(tokens.last().is_some_and(|t| t.kind == TokenKind::Eof));
        Self {
            source,
            label,
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    pub(super) fn current(&self) -> &Token {
        // Eof is never bumped past, so pos stays in bounds.
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    pub(super) fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    pub(super) fn currently_is(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub(super) fn current_text(&self) -> &'s str {
        let span = self.current().span.clone();
        &self.source[span]
    }

    /// Advances and returns the consumed token.
    pub(super) fn bump(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    /// End offset of the most recently consumed token.
    pub(super) fn consumed_end(&self) -> Option<usize> {
        self.pos.checked_sub(1).map(|i| self.tokens[i].span.end)
    }

    pub(super) fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.currently_is(kind).then(|| self.bump())
    }

    pub(super) fn expect(&mut self, kind: TokenKind, what: &str) -> Result<Token, CompileError> {
        match self.eat(kind) {
            Some(token) => Ok(token),
            None => Err(self.unexpected(what)),
        }
    }

    /// "expected X, found Y" at the current token.
    pub(super) fn unexpected(&self, what: &str) -> CompileError {
        let token = self.current();
        let message = match token.kind {
            TokenKind::UnterminatedStr => "unterminated string literal".to_string(),
            TokenKind::Garbage => format!("invalid character {:?}", self.current_text()),
            found => format!("expected {}, found {}", what, found.describe()),
        };
        self.error_at(message, token.span.clone())
    }

    pub(super) fn error_at(&self, message: impl Into<String>, span: Range<usize>) -> CompileError {
        CompileError::new(message, self.source, self.label, span)
    }
}
