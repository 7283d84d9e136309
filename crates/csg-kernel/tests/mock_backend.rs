use csg_kernel::{primitives, CsgBackend, CsgOp, MockBackend};
use dstv_types::Point2;

fn square(x0: f64, y0: f64, w: f64) -> Vec<Point2> {
    vec![
        Point2::new(x0, y0),
        Point2::new(x0 + w, y0),
        Point2::new(x0 + w, y0 + w),
        Point2::new(x0, y0 + w),
    ]
}

#[test]
fn disjoint_subtraction_returns_base_unchanged() {
    let backend = MockBackend::new();
    let base = primitives::box_mesh(100.0, 50.0, 10.0);
    let cut = primitives::extrude_polygon(&square(1000.0, 1000.0, 5.0), 20.0);

    let result = backend.boolean(&base, &cut, CsgOp::Subtract).unwrap();
    assert_eq!(result.vertex_count(), base.vertex_count());
}

#[test]
fn overlapping_subtraction_never_shrinks_vertex_count() {
    let backend = MockBackend::new();
    let base = primitives::box_mesh(100.0, 50.0, 10.0);
    let cut = primitives::extrude_polygon(&square(10.0, 10.0, 20.0), 20.0);

    let result = backend.boolean(&base, &cut, CsgOp::Subtract).unwrap();
    assert!(result.vertex_count() >= base.vertex_count());
}

#[test]
fn extrude_polygon_rejects_degenerate_input() {
    let backend = MockBackend::new();
    let err = backend
        .extrude_polygon(&[Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)], 10.0)
        .unwrap_err();
    assert!(matches!(err, csg_kernel::KernelError::ExtrusionFailed { .. }));
}

#[test]
fn extrude_polygon_produces_closed_manifold_counts() {
    let mesh = primitives::box_mesh(10.0, 10.0, 5.0);
    assert_eq!(mesh.vertex_count(), 8);
    // 2 caps * 2 tris + 4 side quads * 2 tris = 12 triangles = 36 indices.
    assert_eq!(mesh.indices.len(), 36);
}
