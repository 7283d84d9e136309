//! `BO` block parser: hole records (spec §4.B, §6).
//!
//! Each line is `x y diameter [depth] [face] [type-letter [extras]]`. The
//! face may arrive two ways: glued onto `x` (lexer already resolved that),
//! or as its own bare trailing letter token anywhere on the line. A bare
//! type letter with nothing numeric after it on the line means countersunk,
//! with a numeric edge after it it means square (spec §6's overloaded `s`).

use dstv_types::{Face, Hole, HoleExtra, HoleTypeTag, TokenKind};

use super::{group_lines, ParseWarning};

pub fn parse_bo(tokens: &[dstv_types::Token], default_face: Face) -> (Vec<Hole>, Vec<ParseWarning>) {
    let mut holes = Vec::new();
    let mut warnings = Vec::new();

    for line in group_lines(tokens) {
        let modifier_idx = line.tokens.iter().position(|t| matches!(t.kind, TokenKind::HoleTypeModifier));
        let (before, after) = match modifier_idx {
            Some(i) => (&line.tokens[..i], &line.tokens[i + 1..]),
            None => (&line.tokens[..], &line.tokens[0..0]),
        };

        let before_nums: Vec<(&dstv_types::Token, f64)> =
            before.iter().filter_map(|t| t.as_f64().map(|n| (*t, n))).collect();
        if before_nums.len() < 3 {
            warnings.push(ParseWarning::new(
                format!("BO line has {} numeric fields before any modifier, need at least 3 (x y diameter)", before_nums.len()),
                line.tokens.first().map(|t| t.pos),
            ));
            continue;
        }

        let face = resolve_face(before, &before_nums, default_face);
        let x = before_nums[0].1;
        let y = before_nums[1].1;
        let diameter = before_nums[2].1;
        let depth = before_nums.get(3).map(|(_, n)| *n).unwrap_or(Hole::THROUGH);

        let extras: Vec<f64> = after.iter().filter_map(|t| t.as_f64()).collect();
        let modifier_tok = modifier_idx.map(|i| line.tokens[i]);
        let (kind, extra) = match modifier_tok {
            None => (HoleTypeTag::Round, HoleExtra::None),
            Some(tok) => classify_modifier(tok.lexeme.as_str(), tok.hole_type, &extras),
        };

        holes.push(Hole { x, y, diameter, face, kind, depth, extra });
    }

    (holes, warnings)
}

/// Resolves a hole's face from the richest signal present on the line,
/// regardless of which numeric field (x, y or diameter) happens to carry
/// it. A glued `u` suffix always wins and forces `web` (spec §9's v…u
/// convention: "a web hole, expressed in the visible-side coordinate
/// system"); failing that, a bare trailing face-indicator token anywhere on
/// the line (spec §6 grammar `x y d [face] ...`); failing that, any other
/// glued face letter on a numeric; otherwise the block's default face.
fn resolve_face(
    before: &[&dstv_types::Token],
    before_nums: &[(&dstv_types::Token, f64)],
    default_face: Face,
) -> Face {
    if before_nums.iter().any(|(t, _)| t.face == Some(Face::BottomFlange)) {
        return Face::Web;
    }
    if let Some(face) = before
        .iter()
        .find(|t| matches!(t.kind, TokenKind::FaceIndicator))
        .and_then(|t| t.face)
    {
        return face;
    }
    before_nums.iter().find_map(|(t, _)| t.face).unwrap_or(default_face)
}

fn classify_modifier(lexeme: &str, tag: Option<HoleTypeTag>, extras: &[f64]) -> (HoleTypeTag, HoleExtra) {
    match tag {
        Some(HoleTypeTag::Slotted) => {
            let length = extras.first().copied().unwrap_or(0.0);
            let angle_deg = extras.get(1).copied().unwrap_or(0.0);
            (HoleTypeTag::Slotted, HoleExtra::Slotted { length, angle_deg })
        }
        Some(HoleTypeTag::Rectangular) => {
            let width = extras.first().copied().unwrap_or(0.0);
            let height = extras.get(1).copied().unwrap_or(0.0);
            (HoleTypeTag::Rectangular, HoleExtra::Rect { width, height })
        }
        Some(HoleTypeTag::Counterbore) => (HoleTypeTag::Counterbore, HoleExtra::None),
        Some(HoleTypeTag::Tapped) => (HoleTypeTag::Tapped, HoleExtra::None),
        _ if lexeme.eq_ignore_ascii_case("s") => {
            if let Some(&edge) = extras.first() {
                (HoleTypeTag::Square, HoleExtra::Rect { width: edge, height: edge })
            } else {
                (HoleTypeTag::Countersunk, HoleExtra::None)
            }
        }
        _ => (HoleTypeTag::Round, HoleExtra::None),
    }
}
