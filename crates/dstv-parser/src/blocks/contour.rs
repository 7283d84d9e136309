//! Shared contour-block parsing for `AK` (outer), `IK` (inner) and `KO`
//! (coping) blocks (spec §4.B). All three share one grammar: an optional
//! leading bare face-indicator line, then one `x y [depth]` line per
//! contour point.

use dstv_types::{Contour, CutRecord, Face, Point2, TokenKind};

use super::{group_lines, ParseWarning};

pub fn parse_contour_block(
    tokens: &[dstv_types::Token],
    default_face: Face,
    internal: bool,
) -> (CutRecord, Vec<ParseWarning>) {
    let mut warnings = Vec::new();
    let mut face = default_face;
    let mut points = Vec::new();
    let mut depth: Option<f64> = None;

    for line in group_lines(tokens) {
        if line.tokens.len() == 1 {
            if let TokenKind::FaceIndicator = line.tokens[0].kind {
                if let Some(f) = line.tokens[0].face {
                    face = f;
                }
                continue;
            }
        }

        let nums: Vec<(&dstv_types::Token, f64)> =
            line.tokens.iter().filter_map(|t| t.as_f64().map(|n| (*t, n))).collect();

        match nums.len() {
            0 => warnings.push(ParseWarning::new(
                "contour line has no numeric fields, skipped",
                line.tokens.first().map(|t| t.pos),
            )),
            1 => depth = Some(nums[0].1),
            _ => {
                if let Some(f) = nums[0].0.face {
                    face = f;
                }
                points.push(Point2::new(nums[0].1, nums[1].1));
                if nums.len() > 2 {
                    warnings.push(ParseWarning::new(
                        "contour point line carries extra numeric fields (e.g. arc radius); ignored",
                        Some(nums[0].0.pos),
                    ));
                }
            }
        }
    }

    if points.len() < 3 {
        warnings.push(ParseWarning::new(
            format!("contour has only {} point(s), need at least 3 to close", points.len()),
            None,
        ));
    }

    let contour = Contour { points, face };
    let through = depth.is_none();
    let record = CutRecord {
        face,
        contour,
        depth: depth.unwrap_or(0.0),
        through,
        internal,
        angle: None,
        subtype: None,
        is_transverse: false,
    };

    (record, warnings)
}
