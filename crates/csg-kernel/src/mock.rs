//! Deterministic test double for the CSG evaluator contract.
//!
//! `MockBackend` never performs real boolean geometry (spec §1 non-goal:
//! "no geometric kernel implementation") — it produces synthetic but
//! deterministic results that satisfy the testable properties in spec §8:
//! disjoint subtraction is a no-op on the base mesh, and an actual cut
//! never shrinks the vertex count below the base's.

use dstv_types::Point2;
use tracing::trace;

use crate::error::KernelError;
use crate::mesh::Mesh;
use crate::primitives;
use crate::traits::{validate_operands, CsgBackend, CsgOp};

#[derive(Debug, Default)]
pub struct MockBackend;

impl MockBackend {
    pub fn new() -> Self {
        Self
    }
}

fn bounds_overlap(a: &Mesh, b: &Mesh) -> bool {
    match (a.bounding_box(), b.bounding_box()) {
        (Some((amin, amax)), Some((bmin, bmax))) => {
            (0..3).all(|i| amin[i] <= bmax[i] && bmin[i] <= amax[i])
        }
        _ => false,
    }
}

/// Concatenate two meshes' positions/indices into one, offsetting `b`'s
/// indices past `a`'s vertex count.
fn concat(a: &Mesh, b: &Mesh) -> Mesh {
    let offset = a.positions.len() as u32;
    let mut positions = a.positions.clone();
    positions.extend_from_slice(&b.positions);
    let mut indices = a.indices.clone();
    indices.extend(b.indices.iter().map(|i| i + offset));
    let mut mesh = Mesh::new(positions, indices);
    mesh.user_data = a.user_data.clone();
    mesh.recompute_normals();
    mesh
}

fn bbox_volume(m: &Mesh) -> f64 {
    match m.bounding_box() {
        Some((min, max)) => {
            let d = [
                (max[0] - min[0]) as f64,
                (max[1] - min[1]) as f64,
                (max[2] - min[2]) as f64,
            ];
            (d[0] * d[1] * d[2]).abs()
        }
        None => 0.0,
    }
}

impl CsgBackend for MockBackend {
    fn boolean(&self, a: &Mesh, b: &Mesh, op: CsgOp) -> Result<Mesh, KernelError> {
        validate_operands(a, b, usize::MAX)?;

        let overlap = bounds_overlap(a, b);
        trace!(?op, overlap, "mock_boolean");

        match op {
            CsgOp::Subtract => {
                if overlap {
                    Ok(concat(a, b))
                } else {
                    // Disjoint: the cut mesh removes nothing (invariant 7).
                    let mut result = a.clone();
                    result.recompute_normals();
                    Ok(result)
                }
            }
            CsgOp::Add => Ok(concat(a, b)),
            CsgOp::Difference => Ok(concat(a, b)),
            CsgOp::Intersect => {
                if !overlap {
                    Ok(Mesh::new(Vec::new(), Vec::new()))
                } else if bbox_volume(a) <= bbox_volume(b) {
                    Ok(a.clone())
                } else {
                    Ok(b.clone())
                }
            }
        }
    }

    fn extrude_polygon(&self, polygon: &[Point2], depth: f64) -> Result<Mesh, KernelError> {
        if polygon.len() < 3 {
            return Err(KernelError::ExtrusionFailed {
                reason: format!("polygon has {} points, need >= 3", polygon.len()),
            });
        }
        Ok(primitives::extrude_polygon(polygon, depth))
    }
}
