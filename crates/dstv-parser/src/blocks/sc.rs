//! `SC` block parser: straight/oblique end-cut lines (spec §4.B).
//!
//! Each line gives two points (`x1 y1 x2 y2`) describing a cut line across
//! the face, plus an optional fifth numeric (`width`) giving the cut's
//! across-line thickness. The line's angle relative to the face's long edge
//! decides `CutSubtype::Straight` vs `CutSubtype::Oblique`; the parser then
//! sweeps the line into the rectangular contour the cut actually removes
//! (spec §4.B "generate the rectangular swept contour analytically" and the
//! cut-record invariant that every contour carries at least 3 points).

use dstv_types::{Contour, CutRecord, CutSubtype, Face, Point2};

use super::{group_lines, ParseWarning};

const OBLIQUE_TOLERANCE_DEG: f64 = 0.5;

/// Sweep thickness assumed when a line omits the optional fifth (`width`)
/// field.
const DEFAULT_SWEEP_WIDTH_MM: f64 = 10.0;

pub fn parse_sc(tokens: &[dstv_types::Token], default_face: Face) -> (Vec<CutRecord>, Vec<ParseWarning>) {
    let mut cuts = Vec::new();
    let mut warnings = Vec::new();

    for line in group_lines(tokens) {
        let nums: Vec<(&dstv_types::Token, f64)> =
            line.tokens.iter().filter_map(|t| t.as_f64().map(|n| (*t, n))).collect();

        if nums.len() < 4 {
            warnings.push(ParseWarning::new(
                format!("SC line has {} numeric fields, need 4 (x1 y1 x2 y2)", nums.len()),
                line.tokens.first().map(|t| t.pos),
            ));
            continue;
        }

        let face = nums[0].0.face.unwrap_or(default_face);
        let p1 = Point2::new(nums[0].1, nums[1].1);
        let p2 = Point2::new(nums[2].1, nums[3].1);
        let width = nums.get(4).map(|(_, n)| *n).unwrap_or(DEFAULT_SWEEP_WIDTH_MM);
        let angle = (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees();
        let subtype = if angle.abs() <= OBLIQUE_TOLERANCE_DEG
            || (angle.abs() - 90.0).abs() <= OBLIQUE_TOLERANCE_DEG
        {
            CutSubtype::Straight
        } else {
            CutSubtype::Oblique
        };

        let points = sweep_rectangle(p1, p2, width);

        cuts.push(CutRecord {
            face,
            contour: Contour { points, face },
            depth: 0.0,
            through: true,
            internal: false,
            angle: Some(angle),
            subtype: Some(subtype),
            is_transverse: true,
        });
    }

    (cuts, warnings)
}

/// Sweeps the line `p1 -> p2` into a rectangle of thickness `width`,
/// centered on the line and extending perpendicular to it on both sides.
/// Degenerates to a `width`-sided square around `p1` when the two points
/// coincide, since there is no direction left to sweep along.
fn sweep_rectangle(p1: Point2, p2: Point2, width: f64) -> Vec<Point2> {
    let half = width / 2.0;
    let (dx, dy) = (p2.x - p1.x, p2.y - p1.y);
    let len = (dx * dx + dy * dy).sqrt();
    let (nx, ny) = if len > 1e-9 { (-dy / len * half, dx / len * half) } else { (half, 0.0) };

    vec![
        Point2::new(p1.x + nx, p1.y + ny),
        Point2::new(p2.x + nx, p2.y + ny),
        Point2::new(p2.x - nx, p2.y - ny),
        Point2::new(p1.x - nx, p1.y - ny),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::lex_default;
    use dstv_types::TokenKind;

    fn sc_span(text: &str) -> Vec<dstv_types::Token> {
        let tokens = lex_default(text);
        let start = tokens.iter().position(|t| matches!(t.kind, TokenKind::BlockStart(_))).unwrap() + 1;
        let end = tokens.iter().position(|t| matches!(t.kind, TokenKind::BlockEnd)).unwrap();
        tokens[start..end].to_vec()
    }

    #[test]
    fn a_straight_cut_line_sweeps_into_a_four_point_rectangle() {
        let tokens = sc_span("SC\n0 100 0 200\nEN\n");
        let (cuts, warnings) = parse_sc(&tokens, Face::Web);
        assert!(warnings.is_empty());
        assert_eq!(cuts.len(), 1);
        let points = &cuts[0].contour.points;
        assert_eq!(points.len(), 4);
        assert_eq!(cuts[0].subtype, Some(CutSubtype::Straight));
    }

    #[test]
    fn an_oblique_cut_is_tagged_and_still_rectangular() {
        let tokens = sc_span("SC\n0 0 100 50\nEN\n");
        let (cuts, warnings) = parse_sc(&tokens, Face::Web);
        assert!(warnings.is_empty());
        assert_eq!(cuts[0].subtype, Some(CutSubtype::Oblique));
        let points = &cuts[0].contour.points;
        assert_eq!(points.len(), 4);
        let d1 = points[0].dist(points[2]);
        let d2 = points[1].dist(points[3]);
        assert!((d1 - d2).abs() < 1e-9);
    }

    #[test]
    fn an_explicit_width_overrides_the_default_sweep() {
        let tokens = sc_span("SC\n0 0 0 100 40\nEN\n");
        let (cuts, _) = parse_sc(&tokens, Face::Web);
        let points = &cuts[0].contour.points;
        assert!((points[0].x - 20.0).abs() < 1e-9 || (points[0].x + 20.0).abs() < 1e-9);
    }
}
