//! Component E: the converter (spec §4.E).
//!
//! Assembles validated [`Profile`](dstv_types::Profile) records into a
//! normalized [`Scene`](dstv_types::Scene), classifying each external
//! contour as either the part's own outline or a real cut feature, and
//! computing geometric descriptors for every cut that survives.

pub mod assemble;
pub mod classify;
pub mod descriptor;
pub mod transverse;

pub use assemble::{assemble_element, assemble_scene};

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::{Contour, CutRecord, Face, Point2, Profile, ProfileHeader};

    fn square_profile() -> Profile {
        let header = ProfileHeader {
            designation: "HEA400".into(),
            length: 400.0,
            part_id: Some("P1".into()),
            ..Default::default()
        };
        let mut profile = Profile::new(header);
        // base shape: matches header.length exactly
        profile.external_cuts.push(CutRecord {
            face: Face::Web,
            contour: Contour {
                points: vec![
                    Point2::new(0.0, 0.0),
                    Point2::new(400.0, 0.0),
                    Point2::new(400.0, 300.0),
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
        // a real cut: a small rectangular notch, not spanning the full length
        profile.external_cuts.push(CutRecord {
            face: Face::Web,
            contour: Contour {
                points: vec![
                    Point2::new(10.0, 10.0),
                    Point2::new(30.0, 10.0),
                    Point2::new(30.0, 20.0),
                    Point2::new(10.0, 20.0),
                    Point2::new(10.0, 10.0),
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
    fn base_shape_contour_is_not_a_feature() {
        let element = assemble_element(&square_profile(), "P1");
        assert_eq!(element.cuts.len(), 1);
        let desc = element.cuts[0].descriptor.unwrap();
        assert!((desc.area - 200.0).abs() < 1.0);
    }

    #[test]
    fn rectangular_cut_is_classified_rectangular() {
        let element = assemble_element(&square_profile(), "P1");
        use dstv_types::ContourShape;
        assert_eq!(element.cuts[0].descriptor.unwrap().shape, ContourShape::Rectangular);
    }

    #[test]
    fn assemble_scene_computes_bounds() {
        let scene = assemble_scene(&[square_profile()]);
        assert_eq!(scene.elements.len(), 1);
        assert_eq!(scene.bounds.max[0], 400.0);
    }
}
