//! Component F: the cut-type detector (spec §4.F).
//!
//! A total, pure function from a feature (plus its optional geometric
//! descriptor) to exactly one [`CutKind`] (invariant 5). The decision
//! chain has four steps, each a fallback for the one before it:
//!
//! 1. No contour points at all -> [`CutKind::UnrestrictedContour`].
//! 2. An explicit [`ExplicitCutType`] hint on the feature wins outright.
//! 3. The `is_transverse` flag routes to the end-cut family.
//! 4. Otherwise the feature's [`FeatureType`] picks a family, refined by
//!    the contour's geometric shape when a descriptor is available.

use dstv_types::{ContourDescriptor, ContourShape, CutKind, CutParams, ExplicitCutType, Feature, FeatureType};

const END_STRAIGHT_TOLERANCE_DEG: f64 = 1.0;

pub fn detect(feature: &Feature, descriptor: Option<&ContourDescriptor>) -> CutKind {
    let p = &feature.params;

    if p.points.as_ref().map(|pts| pts.is_empty()).unwrap_or(true) {
        return CutKind::UnrestrictedContour;
    }

    if let Some(explicit) = p.cut_type {
        return from_explicit(explicit, p);
    }

    if p.is_transverse {
        return classify_end_cut(p);
    }

    match feature.feature_type {
        FeatureType::Notch => classify_notch(p, descriptor),
        FeatureType::Cut | FeatureType::EndCut => classify_generic_cut(p, descriptor),
        FeatureType::Hole | FeatureType::Marking => CutKind::UnrestrictedContour,
    }
}

fn from_explicit(explicit: ExplicitCutType, p: &CutParams) -> CutKind {
    match explicit {
        ExplicitCutType::EndCut => classify_end_cut(p),
        ExplicitCutType::Bevel => CutKind::BevelCut,
        ExplicitCutType::Chamfer if p.is_transverse => CutKind::EndChamfer,
        ExplicitCutType::Chamfer => CutKind::ChamferCut,
        ExplicitCutType::Slot => CutKind::SlotCut,
        ExplicitCutType::Coping => CutKind::CopingCut,
        ExplicitCutType::Notch => classify_notch(p, None),
        ExplicitCutType::PartialNotches => CutKind::NotchPartial,
    }
}

fn classify_end_cut(p: &CutParams) -> CutKind {
    let n = p.point_count();
    match (p.angle, n) {
        (Some(a), 0..=2) if a.abs() <= END_STRAIGHT_TOLERANCE_DEG => CutKind::EndStraight,
        (Some(_), 0..=2) => CutKind::EndAngle,
        (_, n) if n > 2 && n < 9 => CutKind::EndCompound,
        _ => CutKind::TransverseCut,
    }
}

fn classify_notch(p: &CutParams, descriptor: Option<&ContourDescriptor>) -> CutKind {
    if p.point_count() == 9 {
        return CutKind::NotchPartial;
    }
    match descriptor.map(|d| d.shape) {
        None => CutKind::InteriorCut,
        Some(ContourShape::Rectangular) => CutKind::NotchRectangular,
        Some(ContourShape::Circular) => CutKind::NotchCurved,
        Some(ContourShape::Polygonal) | Some(ContourShape::Complex) => CutKind::NotchCompound,
    }
}

fn classify_generic_cut(p: &CutParams, descriptor: Option<&ContourDescriptor>) -> CutKind {
    match descriptor.map(|d| d.shape) {
        None => CutKind::ExteriorCut,
        Some(ContourShape::Complex) => CutKind::CutWithNotches,
        Some(ContourShape::Circular) => CutKind::ContourCut,
        Some(ContourShape::Rectangular) if p.point_count() <= 4 => CutKind::StraightCut,
        Some(_) => {
            if p.point_count() > 8 {
                CutKind::ContourCut
            } else if p.depth.map(|d| d <= 0.0).unwrap_or(true) {
                CutKind::ThroughCut
            } else {
                CutKind::PartialCut
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dstv_types::{Face, Point2};

    fn feature_with(points: Vec<Point2>, feature_type: FeatureType) -> Feature {
        let mut f = Feature::new("P1", feature_type, Face::Web);
        f.params.points = Some(points);
        f
    }

    #[test]
    fn empty_points_is_unrestricted() {
        let f = feature_with(vec![], FeatureType::Cut);
        assert_eq!(detect(&f, None), CutKind::UnrestrictedContour);
    }

    #[test]
    fn nine_point_notch_is_partial() {
        let pts = (0..9).map(|i| Point2::new(i as f64, 0.0)).collect();
        let f = feature_with(pts, FeatureType::Notch);
        assert_eq!(detect(&f, None), CutKind::NotchPartial);
    }

    #[test]
    fn transverse_with_small_angle_is_end_straight() {
        let mut f = feature_with(vec![Point2::new(0.0, 0.0), Point2::new(0.0, 100.0)], FeatureType::EndCut);
        f.params.is_transverse = true;
        f.params.angle = Some(0.2);
        assert_eq!(detect(&f, None), CutKind::EndStraight);
    }

    #[test]
    fn transverse_with_large_angle_is_end_angle() {
        let mut f = feature_with(vec![Point2::new(0.0, 0.0), Point2::new(10.0, 100.0)], FeatureType::EndCut);
        f.params.is_transverse = true;
        f.params.angle = Some(12.0);
        assert_eq!(detect(&f, None), CutKind::EndAngle);
    }

    #[test]
    fn detection_is_total_across_all_feature_types() {
        for ft in [FeatureType::Cut, FeatureType::EndCut, FeatureType::Notch, FeatureType::Hole, FeatureType::Marking] {
            let f = feature_with(vec![Point2::new(0.0, 0.0)], ft);
            let _ = detect(&f, None); // must not panic
        }
    }
}

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;
    use dstv_types::{ContourShape, Face, Point2};

    fn feature_type_strategy() -> impl Strategy<Value = FeatureType> {
        prop_oneof![
            Just(FeatureType::Cut),
            Just(FeatureType::EndCut),
            Just(FeatureType::Notch),
            Just(FeatureType::Hole),
            Just(FeatureType::Marking),
        ]
    }

    fn shape_strategy() -> impl Strategy<Value = ContourShape> {
        prop_oneof![
            Just(ContourShape::Rectangular),
            Just(ContourShape::Circular),
            Just(ContourShape::Polygonal),
            Just(ContourShape::Complex),
        ]
    }

    proptest! {
        /// `detect` must return some `CutKind` for any arity of points,
        /// feature type, angle, depth and transverse flag (invariant 5):
        /// no input combination is rejected, only later `CutHandler::validate`
        /// calls are allowed to fail.
        #[test]
        fn detection_is_total(
            n_points in 0usize..12,
            feature_type in feature_type_strategy(),
            is_transverse in any::<bool>(),
            angle in proptest::option::of(-180.0f64..180.0),
            depth in proptest::option::of(-10.0f64..100.0),
            shape in proptest::option::of(shape_strategy()),
        ) {
            let points = (0..n_points).map(|i| Point2::new(i as f64, 0.0)).collect::<Vec<_>>();
            let mut f = Feature::new("P1", feature_type, Face::Web);
            f.params.points = if n_points == 0 { None } else { Some(points) };
            f.params.is_transverse = is_transverse;
            f.params.angle = angle;
            f.params.depth = depth;

            let descriptor = shape.map(|s| ContourDescriptor {
                shape: s,
                area: 0.0,
                perimeter: 0.0,
            });

            let _ = detect(&f, descriptor.as_ref()); // must not panic for any combination
        }
    }
}
