//! Transverse cut synthesis (spec §4.E, last bullet).
//!
//! A DSTV file only ever encodes the material a machine needs to remove;
//! when every external contour stops short of the profile's declared
//! length, the remainder is an implicit end cut that the source file never
//! states explicitly. This module makes it explicit.

use dstv_types::{Contour, CutRecord, Face, Point2, Profile};

/// Minimum gap between the furthest contour and the declared length before
/// a transverse cut is synthesized (spec §4.E).
const TRANSVERSE_GAP_THRESHOLD_MM: f64 = 10.0;

/// If the profile's declared length exceeds the maximal X of every
/// external contour by more than [`TRANSVERSE_GAP_THRESHOLD_MM`], returns a
/// cut record spanning `[max_x, length] x [0, height]` on the web face,
/// `is_transverse = true`, depth `1.5 * width` (spec §4.E).
pub fn synthesize(profile: &Profile) -> Option<CutRecord> {
    let max_x = profile
        .external_cuts
        .iter()
        .filter_map(|c| c.contour.bounds())
        .map(|b| b.max_x)
        .fold(f64::NEG_INFINITY, f64::max);

    if !max_x.is_finite() {
        return None;
    }

    let length = profile.header.length;
    if length - max_x <= TRANSVERSE_GAP_THRESHOLD_MM {
        return None;
    }

    let height = profile.header.height.unwrap_or(0.0);
    let width = profile.header.width.unwrap_or(0.0);

    Some(CutRecord {
        face: Face::Web,
        contour: Contour {
            points: vec![
                Point2::new(max_x, 0.0),
                Point2::new(length, 0.0),
                Point2::new(length, height),
                Point2::new(max_x, height),
            ],
            face: Face::Web,
        },
        depth: 1.5 * width,
        through: false,
        internal: false,
        angle: None,
        subtype: None,
        is_transverse: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::ProfileHeader;

    fn profile_with_partial_contour() -> Profile {
        let header = ProfileHeader {
            designation: "HEA400".into(),
            length: 6000.0,
            height: Some(300.0),
            width: Some(200.0),
            ..Default::default()
        };
        let mut profile = Profile::new(header);
        profile.external_cuts.push(CutRecord {
            face: Face::Web,
            contour: Contour {
                points: vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(4500.0, 0.0),
                    Point2::new(4500.0, 300.0),
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
        });
        profile
    }

    #[test]
    fn synthesizes_the_remainder_of_a_short_contour() {
        let profile = profile_with_partial_contour();
        let cut = synthesize(&profile).expect("should synthesize a transverse cut");
        assert!(cut.is_transverse);
        assert_eq!(cut.face, Face::Web);
        let b = cut.contour.bounds().unwrap();
        assert_eq!(b.min_x, 4500.0);
        assert_eq!(b.max_x, 6000.0);
        assert_eq!(b.max_y, 300.0);
        assert!((cut.depth - 300.0).abs() < 1e-9);
    }

    #[test]
    fn no_synthesis_when_contour_already_reaches_the_end() {
        let mut profile = profile_with_partial_contour();
        profile.external_cuts[0].contour.points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(6000.0, 0.0),
            Point2::new(6000.0, 300.0),
            Point2::new(0.0, 300.0),
            Point2::new(0.0, 0.0),
        ];
        assert!(synthesize(&profile).is_none());
    }

    #[test]
    fn no_synthesis_with_no_external_cuts() {
        let header = ProfileHeader { designation: "HEA400".into(), length: 6000.0, ..Default::default() };
        let profile = Profile::new(header);
        assert!(synthesize(&profile).is_none());
    }
}
