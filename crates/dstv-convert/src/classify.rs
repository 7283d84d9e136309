//! Base-shape-vs-cut classification and the 9-point partial-notch rule
//! (spec §4.E).

use dstv_types::{CutRecord, Face, Point2, ProfileHeader};

const BASE_SHAPE_TOLERANCE_MM: f64 = 2.0;
const NOTCH_EXTENSION_THRESHOLD_MM: f64 = 20.0;

/// An external contour is the part's own outline, not a feature, when its
/// bounding box spans the full header length. Internal contours (`IK`,
/// `KO`) are never the base shape.
pub fn is_base_shape(cut: &CutRecord, header: &ProfileHeader) -> bool {
    if cut.internal {
        return false;
    }
    match cut.contour.bounds() {
        Some(b) => (b.width() - header.length).abs() <= BASE_SHAPE_TOLERANCE_MM,
        None => false,
    }
}

/// Contours encoding a corner notch inline with the outer boundary trace
/// nine points: the approach leg, the three notch corners, and the
/// departure leg closing back to the boundary (spec §4.E).
pub fn is_partial_notch_shape(cut: &CutRecord) -> bool {
    cut.contour.points.len() == 9
}

/// Extracts the rectangular notch a 9-point contour encodes: groups points
/// by X (within 1e-6 mm), takes the group with the fewest members as the
/// extension, pairs it with its nearest neighboring X as the main-rectangle
/// edge, and derives corners from that X pair and the extension's Y range
/// (spec §4.E "extract the extension as a rectangular notch").
pub fn extract_partial_notch_rectangle(cut: &CutRecord) -> Option<[Point2; 4]> {
    if cut.contour.points.len() != 9 {
        return None;
    }

    let mut groups: Vec<(f64, Vec<f64>)> = Vec::new();
    for p in &cut.contour.points {
        match groups.iter_mut().find(|(x, _)| (*x - p.x).abs() < 1e-6) {
            Some(g) => g.1.push(p.y),
            None => groups.push((p.x, vec![p.y])),
        }
    }
    if groups.len() < 2 {
        return None;
    }

    groups.sort_by_key(|(_, ys)| ys.len());
    let (ext_x, ext_ys) = &groups[0];
    let main_x = groups[1..]
        .iter()
        .min_by(|(a, _), (b, _)| (a - ext_x).abs().partial_cmp(&(b - ext_x).abs()).unwrap())
        .map(|(x, _)| *x)?;

    if (ext_x - main_x).abs() <= NOTCH_EXTENSION_THRESHOLD_MM {
        return None;
    }

    let y_min = ext_ys.iter().cloned().fold(f64::INFINITY, f64::min);
    let y_max = ext_ys.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    Some([
        Point2::new(main_x, y_min),
        Point2::new(*ext_x, y_min),
        Point2::new(*ext_x, y_max),
        Point2::new(main_x, y_max),
    ])
}

/// Faces a transverse (end) cut is expected on. Exposed for callers that
/// want to sanity-check an `SC` record before trusting its face.
pub fn plausible_end_cut_face(face: Face) -> bool {
    matches!(face, Face::Front | Face::Back | Face::Web)
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::Contour;

    fn nine_point_cut() -> CutRecord {
        CutRecord {
            face: Face::Web,
            contour: Contour {
                points: vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(4703.0, 0.0),
                    Point2::new(4703.0, 100.0),
                    Point2::new(5000.0, 100.0),
                    Point2::new(5000.0, 150.0),
                    Point2::new(4703.0, 150.0),
                    Point2::new(4703.0, 300.0),
                    Point2::new(0.0, 300.0),
                    Point2::new(0.0, 0.0),
                ],
                face: Face::Web,
            },
            depth: 0.0,
            through: true,
            internal: false,
            angle: None,
            subtype: None,
            is_transverse: false,
        }
    }

    #[test]
    fn extracts_the_notch_rectangle_from_the_nine_point_contour() {
        let rect = extract_partial_notch_rectangle(&nine_point_cut()).unwrap();
        assert_eq!(rect, [
            Point2::new(4703.0, 100.0),
            Point2::new(5000.0, 100.0),
            Point2::new(5000.0, 150.0),
            Point2::new(4703.0, 150.0),
        ]);
    }

    #[test]
    fn non_nine_point_contours_have_no_notch_rectangle() {
        let mut cut = nine_point_cut();
        cut.contour.points.pop();
        assert!(extract_partial_notch_rectangle(&cut).is_none());
    }
}
