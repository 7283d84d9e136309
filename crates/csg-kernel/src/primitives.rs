//! Mesh builders used by cut handlers to construct cut volumes before
//! subtraction (spec §4.G "Geometry-of-cut").

use dstv_types::Point2;

use crate::mesh::Mesh;

/// Extrude a simple (non-self-intersecting) polygon along +Z by `depth`,
/// producing a closed solid: a top cap, a bottom cap, and one quad per
/// polygon edge. This is the building block for rectangular-extrusion
/// and sheared-extrusion cut geometry (spec §4.G).
pub fn extrude_polygon(polygon: &[Point2], depth: f64) -> Mesh {
    let n = polygon.len();
    assert!(n >= 3, "polygon needs at least 3 vertices");

    let mut positions = Vec::with_capacity(n * 2);
    for p in polygon {
        positions.push([p.x as f32, p.y as f32, 0.0]);
    }
    for p in polygon {
        positions.push([p.x as f32, p.y as f32, depth as f32]);
    }

    let mut indices = Vec::new();

    // Bottom cap (fan triangulation, reversed winding so the normal faces -Z).
    for i in 1..n - 1 {
        indices.extend_from_slice(&[0, (i + 1) as u32, i as u32]);
    }
    // Top cap.
    let top0 = n as u32;
    for i in 1..n - 1 {
        indices.extend_from_slice(&[top0, top0 + i as u32, top0 + (i + 1) as u32]);
    }
    // Side walls, one quad (two triangles) per edge.
    for i in 0..n {
        let j = (i + 1) % n;
        let (bi, bj) = (i as u32, j as u32);
        let (ti, tj) = (top0 + i as u32, top0 + j as u32);
        indices.extend_from_slice(&[bi, bj, tj]);
        indices.extend_from_slice(&[bi, tj, ti]);
    }

    let mut mesh = Mesh::new(positions, indices);
    mesh.recompute_normals();
    mesh
}

/// A right box from the origin to `(w, h, d)`. Used for simple rectangular
/// notches and as the base shape in tests.
pub fn box_mesh(w: f64, h: f64, d: f64) -> Mesh {
    let polygon = [
        Point2::new(0.0, 0.0),
        Point2::new(w, 0.0),
        Point2::new(w, h),
        Point2::new(0.0, h),
    ];
    extrude_polygon(&polygon, d)
}

/// A right-triangle prism for corner chamfers: the triangle spans
/// `(0,0) → (leg, 0) → (0, leg)` in the cut plane, extruded by `depth`.
pub fn triangular_prism(leg: f64, depth: f64) -> Mesh {
    let polygon = [
        Point2::new(0.0, 0.0),
        Point2::new(leg, 0.0),
        Point2::new(0.0, leg),
    ];
    extrude_polygon(&polygon, depth)
}

/// A thin prism swept along an edge of length `edge_length`, used for edge
/// chamfers: a triangular cross-section of leg `chamfer_size` extruded
/// along X by `edge_length`, then reoriented by the caller as needed.
pub fn edge_chamfer_prism(chamfer_size: f64, edge_length: f64) -> Mesh {
    triangular_prism(chamfer_size, edge_length)
}

/// Apply a uniform shear (`z * tan(angle)` along X) with a step count that
/// scales with the angle magnitude, per spec §4.G ("step count scales with
/// angle magnitude: `max(1, floor(|angle|/10))`"). The step count only
/// matters for backends that tessellate incrementally; the mock backend
/// applies the shear directly but still reports the step count so callers
/// can log it consistently with a real backend.
pub fn shear_step_count(angle_deg: f64) -> usize {
    (angle_deg.abs() / 10.0).floor().max(1.0) as usize
}
