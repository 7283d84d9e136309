//! Shared geometry helpers used by several cut handlers (spec §4.G).

use csg_kernel::{primitives, Mesh};
use dstv_types::{Feature, Point2};

use crate::error::CutOpError;

/// Sweep depth to use when a feature leaves `depth` unset: treat it as a
/// full through-cut over a generous default plate thickness. Handlers
/// that know a better bound (e.g. from the base mesh) should prefer it.
pub const DEFAULT_CUT_DEPTH_MM: f64 = 50.0;

pub fn require_points(feature: &Feature) -> Result<&[Point2], CutOpError> {
    feature
        .params
        .points
        .as_deref()
        .filter(|pts| pts.len() >= 2)
        .ok_or_else(|| CutOpError::InvalidFeature {
            reason: "feature needs at least 2 contour points".into(),
        })
}

pub fn cut_depth(feature: &Feature) -> f64 {
    feature.params.depth.filter(|d| *d > 0.0).unwrap_or(DEFAULT_CUT_DEPTH_MM)
}

/// Extrude the feature's contour into solid cut geometry. Two-point
/// features (a cut line, not a closed polygon) are widened into a thin
/// rectangular slab along the line so `extrude_polygon` always receives
/// a simple polygon.
pub fn extrude_feature(feature: &Feature) -> Result<Mesh, CutOpError> {
    let points = require_points(feature)?;
    let depth = cut_depth(feature);

    if points.len() == 2 {
        let polygon = line_to_slab(points[0], points[1], depth.max(1.0));
        return Ok(primitives::extrude_polygon(&polygon, depth));
    }

    Ok(primitives::extrude_polygon(points, depth))
}

fn line_to_slab(a: Point2, b: Point2, half_width: f64) -> Vec<Point2> {
    let (dx, dy) = (b.x - a.x, b.y - a.y);
    let len = (dx * dx + dy * dy).sqrt().max(1e-6);
    let (nx, ny) = (-dy / len * half_width, dx / len * half_width);
    vec![
        Point2::new(a.x + nx, a.y + ny),
        Point2::new(b.x + nx, b.y + ny),
        Point2::new(b.x - nx, b.y - ny),
        Point2::new(a.x - nx, a.y - ny),
    ]
}
