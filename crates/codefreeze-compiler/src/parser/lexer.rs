//! Lexer for the statement language.
//!
//! Produces span-based tokens; text is sliced from source only when needed.
//!
//! ## Post-processing
//!
//! Logos output is cleaned up before the parser sees it:
//! - Consecutive lexer errors coalesce into one `Garbage` token
//! - Whitespace opening a non-blank line is rejected (no indented blocks)
//! - Whitespace and comments are dropped

use std::ops::Range;

use logos::Logos;

use crate::diagnostics::CompileError;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    #[token("pass")]
    KwPass,
    #[token("del")]
    KwDel,
    #[token("None")]
    KwNone,
    #[token("True")]
    KwTrue,
    #[token("False")]
    KwFalse,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,
    #[regex(r"[0-9]+")]
    Int,
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    #[regex(r"'([^'\\\r\n]|\\.)*'")]
    Str,
    #[regex(r#""([^"\\\r\n]|\\.)*"#)]
    #[regex(r"'([^'\\\r\n]|\\.)*")]
    UnterminatedStr,

    #[token("=")]
    Equals,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("//")]
    DoubleSlash,
    #[token("%")]
    Percent,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"\r\n|\r|\n")]
    Newline,
    #[regex(r"[ \t\x0c]+")]
    Whitespace,
    #[regex(r"#[^\r\n]*", allow_greedy = true)]
    Comment,

    /// Coalesced run of characters no rule accepts.
    Garbage,
    /// Synthetic end-of-input marker, never produced by Logos.
    Eof,
}

impl TokenKind {
    pub fn describe(self) -> &'static str {
        match self {
            TokenKind::KwPass => "'pass'",
            TokenKind::KwDel => "'del'",
            TokenKind::KwNone => "'None'",
            TokenKind::KwTrue => "'True'",
            TokenKind::KwFalse => "'False'",
            TokenKind::Name => "name",
            TokenKind::Int => "integer literal",
            TokenKind::Str => "string literal",
            TokenKind::UnterminatedStr => "unterminated string literal",
            TokenKind::Equals => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::DoubleSlash => "'//'",
            TokenKind::Percent => "'%'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::Newline => "end of line",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Garbage => "invalid character",
            TokenKind::Eof => "end of input",
        }
    }

    fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Range<usize>,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Range<usize>) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.clone()]
    }
}

/// Tokenizes the whole source, including trivia.
///
/// Always ends with an `Eof` token spanning the end of input.
pub fn lex_raw(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(source);
    let mut error_start: Option<usize> = None;

    while let Some(result) = lexer.next() {
        match result {
            Ok(kind) => {
                if let Some(start) = error_start.take() {
                    tokens.push(Token::new(TokenKind::Garbage, start..lexer.span().start));
                }
                tokens.push(Token::new(kind, lexer.span()));
            }
            Err(()) => {
                if error_start.is_none() {
                    error_start = Some(lexer.span().start);
                }
            }
        }
    }

    if let Some(start) = error_start.take() {
        tokens.push(Token::new(TokenKind::Garbage, start..source.len()));
    }
    tokens.push(Token::new(TokenKind::Eof, source.len()..source.len()));
    tokens
}

/// Tokenizes source for the parser: trivia removed, indentation rejected.
pub fn lex(source: &str, label: &str) -> Result<Vec<Token>, CompileError> {
    let raw = lex_raw(source);
    let mut tokens = Vec::with_capacity(raw.len());
    let mut at_line_start = true;

    for (i, token) in raw.iter().enumerate() {
        if at_line_start && token.kind == TokenKind::Whitespace {
            let next = raw[i + 1..].iter().find(|t| t.kind != TokenKind::Whitespace);
            let blank = next.is_none_or(|t| {
                matches!(
                    t.kind,
                    TokenKind::Newline | TokenKind::Comment | TokenKind::Eof
                )
            });
            if !blank {
                return Err(CompileError::new(
                    "unexpected indent",
                    source,
                    label,
                    token.span.clone(),
                ));
            }
        }

        at_line_start = token.kind == TokenKind::Newline;
        if !token.kind.is_trivia() {
            tokens.push(token.clone());
        }
    }

    Ok(tokens)
}
