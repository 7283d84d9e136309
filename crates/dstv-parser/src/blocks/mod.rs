//! Component B: per-block-keyword parsers (spec §4.B).
//!
//! Every parser in this module is total: malformed or short lines never
//! abort parsing, they become a `ParseWarning` and the field is left at
//! its default. Only the orchestrator (component C) can raise a hard
//! `ParseError`, and only for structural failures (no `ST` block at all).

pub mod bo;
pub mod br;
pub mod contour;
pub mod sc;
pub mod si;
pub mod st;

use dstv_types::{SourcePos, Token};

/// A non-fatal issue surfaced while parsing a single block.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseWarning {
    pub message: String,
    pub pos: Option<SourcePos>,
}

impl ParseWarning {
    pub fn new(message: impl Into<String>, pos: Option<SourcePos>) -> Self {
        Self { message: message.into(), pos }
    }
}

/// One source line's worth of tokens, with comments already excluded.
pub(crate) struct LineTokens<'a> {
    pub line: u32,
    pub tokens: Vec<&'a Token>,
}

/// Group a block's body tokens (everything between `BlockStart` and
/// `BlockEnd`, exclusive) by source line, dropping comments.
pub(crate) fn group_lines(tokens: &[Token]) -> Vec<LineTokens<'_>> {
    let mut lines: Vec<LineTokens> = Vec::new();
    for tok in tokens {
        if matches!(tok.kind, dstv_types::TokenKind::Comment) {
            continue;
        }
        match lines.last_mut() {
            Some(l) if l.line == tok.pos.line => l.tokens.push(tok),
            _ => lines.push(LineTokens { line: tok.pos.line, tokens: vec![tok] }),
        }
    }
    lines
}

/// Pull every `Number` token out of a line, in order.
pub(crate) fn numbers<'a>(line: &LineTokens<'a>) -> Vec<(&'a Token, f64)> {
    line.tokens
        .iter()
        .filter_map(|t| t.as_f64().map(|n| (*t, n)))
        .collect()
}

fn text_of(tok: &Token) -> String {
    match &tok.kind {
        dstv_types::TokenKind::QuotedText(s) => s.clone(),
        _ => tok.lexeme.clone(),
    }
}

pub(crate) fn first_text(line: &LineTokens<'_>) -> Option<String> {
    line.tokens.first().map(|t| text_of(t))
}
