//! `BR` block parser: edge chamfers (spec §4.B).
//!
//! Each line is `x y angle depth length [edge]`, where `edge` is an
//! optional identifier naming which edge of the profile is chamfered.

use dstv_types::{Chamfer, Face, TokenKind};

use super::{group_lines, ParseWarning};

pub fn parse_br(tokens: &[dstv_types::Token], default_face: Face) -> (Vec<Chamfer>, Vec<ParseWarning>) {
    let mut chamfers = Vec::new();
    let mut warnings = Vec::new();

    for line in group_lines(tokens) {
        let nums: Vec<(&dstv_types::Token, f64)> =
            line.tokens.iter().filter_map(|t| t.as_f64().map(|n| (*t, n))).collect();

        if nums.len() < 5 {
            warnings.push(ParseWarning::new(
                format!("BR line has {} numeric fields, need 5 (x y angle depth length)", nums.len()),
                line.tokens.first().map(|t| t.pos),
            ));
            continue;
        }

        let face = nums[0].0.face.unwrap_or(default_face);
        let edge = line.tokens.iter().find_map(|t| match t.kind {
            TokenKind::Identifier => Some(t.lexeme.clone()),
            _ => None,
        });

        chamfers.push(Chamfer {
            x: nums[0].1,
            y: nums[1].1,
            angle: nums[2].1,
            depth: nums[3].1,
            length: nums[4].1,
            edge,
            face,
        });
    }

    (chamfers, warnings)
}
