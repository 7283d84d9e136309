//! Contour geometric descriptors: area, perimeter, shape (spec §4.E).

use dstv_types::{Contour, ContourDescriptor, ContourShape, Point2};

const RECT_TOLERANCE_MM: f64 = 0.5;
const CIRCLE_RADIUS_VARIATION: f64 = 0.05;

pub fn describe(contour: &Contour) -> ContourDescriptor {
    let pts = effective_points(&contour.points);
    ContourDescriptor {
        area: shoelace_area(&pts),
        perimeter: perimeter(&pts),
        shape: classify_shape(&pts),
    }
}

/// Drop the duplicate closing point a closed contour carries (first ==
/// last within tolerance), so corner-counting logic below sees each
/// vertex exactly once.
fn effective_points(points: &[Point2]) -> Vec<Point2> {
    if points.len() >= 2 {
        let (first, last) = (points[0], points[points.len() - 1]);
        if points.len() > 2 && first.dist(last) <= 0.01 {
            return points[..points.len() - 1].to_vec();
        }
    }
    points.to_vec()
}

fn shoelace_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    (sum / 2.0).abs()
}

fn perimeter(points: &[Point2]) -> f64 {
    match points.len() {
        0 | 1 => 0.0,
        2 => points[0].dist(points[1]),
        n => (0..n).map(|i| points[i].dist(points[(i + 1) % n])).sum(),
    }
}

fn classify_shape(points: &[Point2]) -> ContourShape {
    if points.len() == 2 {
        return ContourShape::Polygonal;
    }
    if is_rectangular(points) {
        return ContourShape::Rectangular;
    }
    if is_circular(points) {
        return ContourShape::Circular;
    }
    ContourShape::Polygonal
}

fn is_rectangular(points: &[Point2]) -> bool {
    if points.len() != 4 {
        return false;
    }
    let d1 = points[0].dist(points[2]);
    let d2 = points[1].dist(points[3]);
    (d1 - d2).abs() <= RECT_TOLERANCE_MM
}

fn is_circular(points: &[Point2]) -> bool {
    if points.len() < 8 {
        return false;
    }
    let centroid_x = points.iter().map(|p| p.x).sum::<f64>() / points.len() as f64;
    let centroid_y = points.iter().map(|p| p.y).sum::<f64>() / points.len() as f64;
    let centroid = Point2::new(centroid_x, centroid_y);
    let radii: Vec<f64> = points.iter().map(|p| p.dist(centroid)).collect();
    let mean = radii.iter().sum::<f64>() / radii.len() as f64;
    if mean <= 0.0 {
        return false;
    }
    let variance = radii.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / radii.len() as f64;
    (variance.sqrt() / mean) <= CIRCLE_RADIUS_VARIATION
}
