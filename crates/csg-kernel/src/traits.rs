use dstv_types::Point2;
use serde::{Deserialize, Serialize};

use crate::error::KernelError;
use crate::mesh::Mesh;

/// The boolean operation family the spec's CSG service exposes (spec §4.I:
/// `subtract`, `add`, `intersect`, `difference`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CsgOp {
    Add,
    Subtract,
    Intersect,
    Difference,
}

/// The pluggable CSG evaluator contract (spec §1: "the specific CSG kernel
/// ... treated as a pluggable evaluator with a defined contract"). A real
/// backend (a BSP/Nef-polyhedron boolean engine) would implement this
/// trait; the only implementation this workspace ships is [`MockBackend`],
/// which is deterministic and fully tested, standing in for "the boolean
/// algebra we do not specify" per spec §1's non-goals.
pub trait CsgBackend: Send + Sync {
    /// Evaluate a boolean operation between two meshes.
    fn boolean(&self, a: &Mesh, b: &Mesh, op: CsgOp) -> Result<Mesh, KernelError>;

    /// Build a solid by extruding a closed 2-D polygon along +Z by `depth`.
    /// This is the "create cut geometry" primitive cut handlers call.
    fn extrude_polygon(&self, polygon: &[Point2], depth: f64) -> Result<Mesh, KernelError>;
}

/// Shared pre-op validation every [`CsgBackend::boolean`] call must apply
/// before touching backend-specific logic (spec §4.I "Pre-op validation").
pub fn validate_operands(a: &Mesh, b: &Mesh, max_vertices: usize) -> Result<(), KernelError> {
    for m in [a, b] {
        if !m.has_position_attribute() {
            return Err(KernelError::MissingPositions);
        }
        if m.vertex_count() < 3 {
            return Err(KernelError::TooFewVertices {
                count: m.vertex_count(),
            });
        }
        if !m.all_finite() {
            return Err(KernelError::NonFinite);
        }
    }
    let combined = a.vertex_count() + b.vertex_count();
    if combined > max_vertices {
        return Err(KernelError::VertexBudgetExceeded {
            combined,
            max: max_vertices,
        });
    }
    Ok(())
}
