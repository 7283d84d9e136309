//! Component A: the DSTV lexer (spec §4.A).
//!
//! Turns raw DSTV text into a flat, deterministic `Vec<Token>`. The lexer
//! never hard-fails: anything it can't classify becomes `TokenKind::Unknown`
//! and parsing continues (spec §7 `LexerError` is always recoverable).

use dstv_types::{BlockKeyword, FaceConvention, HoleTypeTag, SourcePos, Token, TokenKind};

use tracing::trace;

const HOLE_TYPE_LETTERS: &[char] = &['l', 's', 'r', 'c', 't'];
const FACE_LETTERS: &[char] = &['v', 'u', 'o', 'h'];

/// Tokenize `text` under the given face convention. Pure and total: the
/// same input always yields the same token sequence (spec §8 invariant 1).
#[tracing::instrument(skip(text), fields(len = text.len()))]
pub fn lex(text: &str, convention: FaceConvention) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut current_block: Option<BlockKeyword> = None;

    for (line_idx, raw_line) in text.lines().enumerate() {
        let line_no = (line_idx + 1) as u32;
        let trimmed_start = raw_line.trim_start();
        if trimmed_start.starts_with("**") || trimmed_start.starts_with('*') {
            let col = (raw_line.len() - trimmed_start.len() + 1) as u32;
            tokens.push(Token::new(TokenKind::Comment, trimmed_start, SourcePos::new(line_no, col)));
            continue;
        }

        let mut word_index = 0usize;
        for (col0, word) in split_words(raw_line) {
            let col = (col0 + 1) as u32;
            let pos = SourcePos::new(line_no, col);
            let tok = classify_word(word, pos, word_index, current_block, convention);

            if word_index == 0 {
                if let TokenKind::BlockStart(kw) = tok.kind {
                    current_block = Some(kw);
                } else if let TokenKind::BlockEnd = tok.kind {
                    current_block = None;
                }
            }

            trace!(line = line_no, word, ?tok.kind, "lexed_token");
            tokens.push(tok);
            word_index += 1;
        }
    }

    tokens
}

/// Tokenize under the dominant face convention (spec §9 default).
pub fn lex_default(text: &str) -> Vec<Token> {
    lex(text, FaceConvention::Dominant)
}

fn split_words(line: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut iter = line.char_indices().peekable();
    while let Some(&(start, ch)) = iter.peek() {
        if ch.is_whitespace() {
            iter.next();
            continue;
        }
        if ch == '"' {
            // Quoted text: consume through the closing quote (or EOL).
            iter.next();
            let mut end = start + ch.len_utf8();
            while let Some(&(i, c)) = iter.peek() {
                iter.next();
                end = i + c.len_utf8();
                if c == '"' {
                    break;
                }
            }
            out.push((start, &line[start..end]));
            continue;
        }
        let mut end = start;
        while let Some(&(i, c)) = iter.peek() {
            if c.is_whitespace() {
                break;
            }
            end = i + c.len_utf8();
            iter.next();
        }
        out.push((start, &line[start..end]));
    }
    out
}

fn classify_word(
    word: &str,
    pos: SourcePos,
    word_index: usize,
    current_block: Option<BlockKeyword>,
    convention: FaceConvention,
) -> Token {
    if word_index == 0 {
        if let Some(kw) = BlockKeyword::parse(word) {
            return if kw == BlockKeyword::En {
                Token::new(TokenKind::BlockEnd, word, pos)
            } else {
                Token::new(TokenKind::BlockStart(kw), word, pos)
            };
        }
    }

    // A bare face letter emits a face-indicator at payload position 0 of any
    // block (the `AK` contour-face convention), and at *any* payload position
    // inside `BO`, whose grammar is `x y d [face] [type-modifier ...]` (spec
    // §6) — the face letter there trails the numerics, not leads them.
    if (word_index == 0 || current_block == Some(BlockKeyword::Bo)) && word.len() == 1 {
        if let Some(face) = FACE_LETTERS
            .iter()
            .find(|&&l| l == word.chars().next().unwrap().to_ascii_lowercase())
            .and_then(|&l| convention.map_letter(l))
        {
            let mut tok = Token::new(TokenKind::FaceIndicator, word, pos).with_face(face);
            if let Some(ctx) = current_block {
                tok = tok.with_block_context(ctx);
            }
            return tok;
        }
    }

    if word.starts_with('"') {
        let inner = word.trim_matches('"');
        return Token::new(TokenKind::QuotedText(inner.to_string()), word, pos);
    }

    if let Some((value, consumed)) = parse_number_prefix(word) {
        let mut tok = Token::new(TokenKind::Number(value), word, pos);
        if let Some(ctx) = current_block {
            tok = tok.with_block_context(ctx);
        }
        if consumed < word.len() {
            let rest = &word[consumed..];
            if rest.chars().count() == 1 {
                let letter = rest.chars().next().unwrap().to_ascii_lowercase();
                if let Some(face) = convention.map_letter(letter) {
                    tok = tok.with_face(face);
                }
            }
        }
        return tok;
    }

    if current_block == Some(BlockKeyword::Bo) && word.len() == 1 {
        let letter = word.chars().next().unwrap().to_ascii_lowercase();
        if HOLE_TYPE_LETTERS.contains(&letter) {
            let mut tok = Token::new(TokenKind::HoleTypeModifier, word, pos)
                .with_block_context(BlockKeyword::Bo);
            if let Some(tag) = definite_hole_tag(letter) {
                tok = tok.with_hole_type(tag);
            }
            return tok;
        }
    }

    let mut tok = if word.chars().next().map(|c| c.is_alphabetic()).unwrap_or(false) {
        Token::new(TokenKind::Identifier, word, pos)
    } else {
        Token::new(TokenKind::Unknown, word, pos)
    };
    if let Some(ctx) = current_block {
        tok = tok.with_block_context(ctx);
    }
    tok
}

/// Letters with an unambiguous hole-type mapping. `s` is deliberately
/// excluded: it means `square` when followed by an edge numeric and
/// `countersunk` alone (spec §6) — that lookahead belongs to the BO parser.
fn definite_hole_tag(letter: char) -> Option<HoleTypeTag> {
    match letter {
        'l' => Some(HoleTypeTag::Slotted),
        'r' => Some(HoleTypeTag::Rectangular),
        'c' => Some(HoleTypeTag::Counterbore),
        't' => Some(HoleTypeTag::Tapped),
        _ => None,
    }
}

/// Parse the longest numeric prefix of `word`: optional sign, digits,
/// optional fractional part, optional exponent. Returns the parsed value
/// and the byte length consumed, so callers can inspect any trailing
/// glued face letter (spec §4.A "trailing face letter glued to a number").
fn parse_number_prefix(word: &str) -> Option<(f64, usize)> {
    let bytes = word.as_bytes();
    let mut i = 0usize;
    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }
    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > digits_start;
    if i < bytes.len() && bytes[i] == b'.' {
        let dot = i;
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if i == frac_start && !has_digits {
            i = dot; // bare '.' with no digits at all: not numeric
        } else {
            has_digits = has_digits || i > frac_start;
        }
    }
    if !has_digits {
        return None;
    }
    let mantissa_end = i;
    // Optional exponent.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_digits_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_digits_start {
            i = j;
        }
    }
    let consumed = i;
    let slice = &word[..consumed];
    // If the exponent parse above was abandoned, fall back to the mantissa.
    let value = slice.parse::<f64>().ok().or_else(|| word[..mantissa_end].parse::<f64>().ok())?;
    let consumed = if slice.parse::<f64>().is_ok() { consumed } else { mantissa_end };
    Some((value, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexer_is_deterministic() {
        let text = "ST\nHEA400\n6000\nEN\n";
        assert_eq!(lex_default(text), lex_default(text));
    }

    #[test]
    fn recognizes_block_keywords() {
        let tokens = lex_default("ST\nEN\n");
        assert!(matches!(tokens[0].kind, TokenKind::BlockStart(BlockKeyword::St)));
        assert!(matches!(tokens[1].kind, TokenKind::BlockEnd));
    }

    #[test]
    fn glued_face_letter_on_numeric() {
        let tokens = lex_default("BO\n4703.00u 75 22\nEN\n");
        let num = tokens.iter().find(|t| matches!(t.kind, TokenKind::Number(_))).unwrap();
        assert_eq!(num.as_f64(), Some(4703.00));
        assert!(num.face.is_some());
    }

    #[test]
    fn bare_face_indicator() {
        let tokens = lex_default("AK\nv\n0 0\nEN\n");
        let face_tok = tokens
            .iter()
            .find(|t| matches!(t.kind, TokenKind::FaceIndicator))
            .unwrap();
        assert!(face_tok.face.is_some());
    }

    #[test]
    fn hole_modifier_only_inside_bo() {
        let tokens = lex_default("BO\n100 200 22 l 50 45\nEN\n");
        assert!(tokens
            .iter()
            .any(|t| matches!(t.kind, TokenKind::HoleTypeModifier) && t.lexeme == "l"));
    }

    #[test]
    fn comment_lines_are_preserved() {
        let tokens = lex_default("* a note\nST\nEN\n");
        assert!(matches!(tokens[0].kind, TokenKind::Comment));
    }
}
