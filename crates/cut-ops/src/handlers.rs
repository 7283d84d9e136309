//! The concrete handler roster (spec §4.G). Each handler owns one or a
//! few closely related [`CutKind`]s; the shared extrude-then-subtract
//! pipeline lives in [`crate::geometry`] and [`CutHandler::process`].

use csg_kernel::Mesh;
use dstv_types::{CutKind, Feature};

use crate::error::CutOpError;
use crate::geometry::{cut_depth, extrude_feature, require_points};
use crate::traits::CutHandler;

macro_rules! simple_handler {
    ($name:ident, $priority:expr, [$($kind:expr),+ $(,)?]) => {
        pub struct $name;

        impl CutHandler for $name {
            fn priority(&self) -> u32 {
                $priority
            }

            fn supported_kinds(&self) -> &'static [CutKind] {
                &[$($kind),+]
            }

            fn validate(&self, feature: &Feature) -> Result<(), CutOpError> {
                require_points(feature).map(|_| ())
            }

            fn create_cut_geometry(&self, feature: &Feature) -> Result<Mesh, CutOpError> {
                extrude_feature(feature)
            }
        }
    };
}

simple_handler!(EndStraightHandler, 100, [CutKind::EndStraight]);
simple_handler!(EndAngleHandler, 100, [CutKind::EndAngle]);
simple_handler!(EndCompoundHandler, 90, [CutKind::EndCompound]);
simple_handler!(SlotHandler, 80, [CutKind::SlotCut]);
simple_handler!(CopingHandler, 80, [CutKind::CopingCut]);
simple_handler!(NotchRectangularHandler, 80, [CutKind::NotchRectangular]);
simple_handler!(NotchCurvedHandler, 80, [CutKind::NotchCurved]);
simple_handler!(
    NotchCompoundHandler,
    70,
    [CutKind::NotchCompound, CutKind::CutWithNotches]
);
simple_handler!(NotchPartialHandler, 75, [CutKind::NotchPartial]);
simple_handler!(ContourHandler, 50, [CutKind::ContourCut, CutKind::UnrestrictedContour]);
simple_handler!(
    StraightThroughPartialHandler,
    60,
    [CutKind::StraightCut, CutKind::ThroughCut, CutKind::PartialCut]
);
simple_handler!(
    TransverseFallbackHandler,
    10,
    [CutKind::TransverseCut, CutKind::ExteriorCut, CutKind::InteriorCut]
);

/// Chamfers and bevels don't remove a slab, they round an edge — their
/// cut geometry is a wedge prism built from the feature's chamfer size
/// rather than an extruded contour.
pub struct EndChamferHandler;

impl CutHandler for EndChamferHandler {
    fn priority(&self) -> u32 {
        100
    }

    fn supported_kinds(&self) -> &'static [CutKind] {
        &[CutKind::EndChamfer]
    }

    fn validate(&self, feature: &Feature) -> Result<(), CutOpError> {
        if feature.params.chamfer_size.unwrap_or(0.0) <= 0.0 && feature.params.depth.unwrap_or(0.0) <= 0.0 {
            return Err(CutOpError::InvalidFeature {
                reason: "chamfer requires a positive chamfer_size or depth".into(),
            });
        }
        Ok(())
    }

    fn create_cut_geometry(&self, feature: &Feature) -> Result<Mesh, CutOpError> {
        let size = feature.params.chamfer_size.unwrap_or_else(|| cut_depth(feature).min(20.0));
        let edge_length = feature
            .params
            .points
            .as_ref()
            .and_then(|pts| pts.first().zip(pts.last()))
            .map(|(a, b)| a.dist(*b))
            .filter(|l| *l > 0.0)
            .unwrap_or(100.0);
        Ok(csg_kernel::primitives::edge_chamfer_prism(size, edge_length))
    }
}

pub struct ChamferHandler;

impl CutHandler for ChamferHandler {
    fn priority(&self) -> u32 {
        90
    }

    fn supported_kinds(&self) -> &'static [CutKind] {
        &[CutKind::ChamferCut]
    }

    fn validate(&self, feature: &Feature) -> Result<(), CutOpError> {
        if feature.params.chamfer_size.unwrap_or(0.0) <= 0.0 {
            return Err(CutOpError::InvalidFeature { reason: "chamfer_size must be positive".into() });
        }
        Ok(())
    }

    fn create_cut_geometry(&self, feature: &Feature) -> Result<Mesh, CutOpError> {
        let size = feature.params.chamfer_size.unwrap_or(5.0);
        let edge_length = feature
            .params
            .points
            .as_ref()
            .and_then(|pts| pts.first().zip(pts.last()))
            .map(|(a, b)| a.dist(*b))
            .filter(|l| *l > 0.0)
            .unwrap_or(100.0);
        Ok(csg_kernel::primitives::edge_chamfer_prism(size, edge_length))
    }
}

/// Bevel cuts are an angled straight cut across a face, built the same
/// way as a triangular chamfer wedge but sized from the bevel angle.
pub struct BevelHandler;

impl CutHandler for BevelHandler {
    fn priority(&self) -> u32 {
        90
    }

    fn supported_kinds(&self) -> &'static [CutKind] {
        &[CutKind::BevelCut]
    }

    fn validate(&self, feature: &Feature) -> Result<(), CutOpError> {
        require_points(feature).map(|_| ())
    }

    fn create_cut_geometry(&self, feature: &Feature) -> Result<Mesh, CutOpError> {
        extrude_feature(feature)
    }
}
