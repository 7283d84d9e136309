//! `SI` block parser: text markings (spec §4.B).
//!
//! Each line is `x y [size] [angle] "text" [depth] [font_style] [align]`,
//! where `x` may carry a glued face letter and `align` is a single letter
//! (`l`/`c`/`r`). `size` and `angle` both default when absent: a line with
//! only `text x y` still produces a marking (spec §4.B's default-size rule),
//! rather than being skipped for lack of optional fields.

use dstv_types::{Face, Marking, TextAlign, TokenKind};

use super::{group_lines, ParseWarning};

pub fn parse_si(tokens: &[dstv_types::Token], default_face: Face) -> (Vec<Marking>, Vec<ParseWarning>) {
    let mut markings = Vec::new();
    let mut warnings = Vec::new();

    for line in group_lines(tokens) {
        let nums: Vec<(&dstv_types::Token, f64)> =
            line.tokens.iter().filter_map(|t| t.as_f64().map(|n| (*t, n))).collect();
        let text = line.tokens.iter().find_map(|t| match &t.kind {
            TokenKind::QuotedText(s) => Some(s.clone()),
            _ => None,
        });

        let (Some(text), true) = (text, nums.len() >= 2) else {
            warnings.push(ParseWarning::new(
                "SI line is missing required numeric fields or quoted text, skipped",
                line.tokens.first().map(|t| t.pos),
            ));
            continue;
        };

        let face = nums[0].0.face.unwrap_or(default_face);
        let size = nums.get(2).map(|(_, n)| *n).unwrap_or_else(|| default_size(&text));
        let angle = nums.get(3).map(|(_, n)| *n).unwrap_or(0.0);
        let depth = nums.get(4).map(|(_, n)| *n);
        let font_style = nums.get(5).map(|(_, n)| *n as u32);
        let align = line
            .tokens
            .iter()
            .filter_map(|t| match t.kind {
                TokenKind::Identifier if t.lexeme.len() == 1 => align_of(&t.lexeme),
                _ => None,
            })
            .next();

        markings.push(Marking {
            text,
            x: nums[0].1,
            y: nums[1].1,
            size,
            angle,
            depth,
            font_style,
            align,
            face,
        });
    }

    (markings, warnings)
}

/// Default marking size when the line omits it (spec §4.B): short text
/// renders bigger, long text renders smaller, so labels stay legible at a
/// glance without the author having to size every marking by hand.
fn default_size(text: &str) -> f64 {
    match text.chars().count() {
        0..=3 => 15.0,
        4..=10 => 12.0,
        _ => 10.0,
    }
}

fn align_of(letter: &str) -> Option<TextAlign> {
    match letter.to_ascii_lowercase().as_str() {
        "l" => Some(TextAlign::Left),
        "c" => Some(TextAlign::Center),
        "r" => Some(TextAlign::Right),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex_default;
    use dstv_types::TokenKind;

    /// Lexes `text` and returns the token span strictly between the first
    /// `BlockStart`/`BlockEnd` pair, mirroring how the orchestrator slices a
    /// block's body before handing it to its parser.
    fn si_span(text: &str) -> Vec<dstv_types::Token> {
        let tokens = lex_default(text);
        let start = tokens.iter().position(|t| matches!(t.kind, TokenKind::BlockStart(_))).unwrap() + 1;
        let end = tokens.iter().position(|t| matches!(t.kind, TokenKind::BlockEnd)).unwrap();
        tokens[start..end].to_vec()
    }

    #[test]
    fn full_line_reads_depth_and_font_style_from_their_correct_slots() {
        let tokens = si_span("SI\n100 200 15 30 \"A1\" 5 2 c\nEN\n");
        let (markings, warnings) = parse_si(&tokens, Face::Web);
        assert!(warnings.is_empty());
        assert_eq!(markings.len(), 1);
        let m = &markings[0];
        assert_eq!(m.depth, Some(5.0));
        assert_eq!(m.font_style, Some(2));
        assert_eq!(m.align, Some(TextAlign::Center));
    }

    #[test]
    fn text_x_y_alone_gets_a_default_size_and_zero_angle() {
        let tokens = si_span("SI\n100 200 \"AB\"\nEN\n");
        let (markings, warnings) = parse_si(&tokens, Face::Web);
        assert!(warnings.is_empty());
        assert_eq!(markings.len(), 1);
        let m = &markings[0];
        assert_eq!(m.size, 15.0);
        assert_eq!(m.angle, 0.0);
    }

    #[test]
    fn default_size_steps_down_as_text_grows() {
        assert_eq!(default_size("AB"), 15.0);
        assert_eq!(default_size("ABCDEFGHIJ"), 12.0);
        assert_eq!(default_size("ABCDEFGHIJK"), 10.0);
    }
}
