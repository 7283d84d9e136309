//! Components F-H: cut-type detection, handler strategies and dispatch
//! (spec §4.F-H).

pub mod detector;
pub mod dispatch;
pub mod error;
pub mod geometry;
pub mod handlers;
pub mod traits;

pub use detector::detect;
pub use dispatch::{default_registry, HandlerRegistry};
pub use error::CutOpError;
pub use traits::CutHandler;

#[cfg(test)]
mod tests {
    use csg_kernel::{primitives, MockBackend};
    use dstv_types::{Feature, FeatureType, Face, Point2};

    use super::*;

    #[test]
    fn dispatch_subtracts_an_end_straight_cut_from_the_base() {
        let registry = default_registry();
        let backend = MockBackend::new();
        let base = primitives::box_mesh(1000.0, 200.0, 100.0);

        let mut feature = Feature::new("P1", FeatureType::EndCut, Face::Web);
        feature.params.is_transverse = true;
        feature.params.angle = Some(0.0);
        feature.params.points = Some(vec![Point2::new(0.0, 0.0), Point2::new(0.0, 200.0)]);
        feature.params.depth = Some(30.0);

        let (result, metadata) = registry
            .dispatch(&base, &feature, None, &backend, 0)
            .expect("end-straight cut should dispatch");

        assert_eq!(metadata.kind, dstv_types::CutKind::EndStraight);
        assert!(result.vertex_count() >= base.vertex_count());
    }

    #[test]
    fn dispatch_reports_invalid_feature_without_points() {
        let registry = default_registry();
        let backend = MockBackend::new();
        let base = primitives::box_mesh(100.0, 100.0, 10.0);
        let feature = Feature::new("P1", FeatureType::Cut, Face::Web);

        let result = registry.dispatch(&base, &feature, None, &backend, 0);
        // No points -> detector returns UnrestrictedContour -> ContourHandler
        // -> validate fails because require_points needs >= 2 points.
        assert!(result.is_err());
    }
}
