//! Shape generation for 2D primitives
//!
//! Every generator returns a flat triangle list (three vertices per triangle).

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::rotate_local;
use crate::sim::{Car, Rect};

/// Two triangles covering a convex quad given in winding order
pub fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    vec![
        Vertex::at(a, color),
        Vertex::at(b, color),
        Vertex::at(c, color),
        Vertex::at(c, color),
        Vertex::at(d, color),
        Vertex::at(a, color),
    ]
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        [
            Vec2::new(r.left(), r.top()),
            Vec2::new(r.right(), r.top()),
            Vec2::new(r.right(), r.bottom()),
            Vec2::new(r.left(), r.bottom()),
        ],
        color,
    )
}

/// Generate vertices for a line segment of the given thickness
pub fn thick_line(a: Vec2, b: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (thickness / 2.0);
    quad([a + perp, b + perp, b - perp, a - perp], color)
}

/// Generate vertices for a closed polygon outline
pub fn polygon_outline(points: &[Vec2], thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity(points.len() * 6);
    for (i, &a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        vertices.extend(thick_line(a, b, thickness, color));
    }
    vertices
}

/// A car-local rectangle (top-left origin on the body) rotated into place
fn body_part(car: &Car, x: f32, y: f32, w: f32, h: f32, color: [f32; 4]) -> Vec<Vertex> {
    // Shift so the body centre sits at the local origin
    let ox = x - car.tuning.width / 2.0;
    let oy = y - car.tuning.height / 2.0;
    let corners = [
        Vec2::new(ox, oy),
        Vec2::new(ox + w, oy),
        Vec2::new(ox + w, oy + h),
        Vec2::new(ox, oy + h),
    ]
    .map(|local| car.pos + rotate_local(local, car.heading));
    quad(corners, color)
}

/// Generate vertices for the car sprite: body, window, wheels
pub fn car_sprite(car: &Car) -> Vec<Vertex> {
    let w = car.tuning.width;
    let h = car.tuning.height;

    let mut vertices = Vec::with_capacity(24);
    vertices.extend(body_part(car, 0.0, 0.0, w, h, colors::CAR_BODY));
    vertices.extend(body_part(car, 5.0, 2.0, 15.0, 8.0, colors::CAR_WINDOW));
    vertices.extend(body_part(car, 0.0, 0.0, 5.0, h, colors::CAR_WHEEL));
    vertices.extend(body_part(car, w - 5.0, 0.0, 5.0, h, colors::CAR_WHEEL));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::CarTuning;

    #[test]
    fn test_rect_covers_corners() {
        let v = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::OBSTACLE);
        assert_eq!(v.len(), 6);
        assert!(v.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(v.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_polygon_outline_one_quad_per_edge() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
        ];
        assert_eq!(polygon_outline(&pts, 2.0, colors::TRACK_EDGE).len(), 18);
        assert!(polygon_outline(&pts[..1], 2.0, colors::TRACK_EDGE).is_empty());
    }

    #[test]
    fn test_thick_line_width() {
        let v = thick_line(Vec2::ZERO, Vec2::new(10.0, 0.0), 2.0, colors::TRACK_EDGE);
        let ys: Vec<f32> = v.iter().map(|v| v.position[1]).collect();
        assert!(ys.iter().all(|y| (y.abs() - 1.0).abs() < 1e-6));
        assert!(thick_line(Vec2::ONE, Vec2::ONE, 2.0, colors::TRACK_EDGE).is_empty());
    }

    #[test]
    fn test_car_sprite_follows_pose() {
        let mut car = Car::new(Vec2::new(100.0, 100.0), CarTuning::default());
        car.heading = 90.0;
        let v = car_sprite(&car);
        assert_eq!(v.len(), 24);

        // Body corners match the car's own corner computation
        for corner in car.corners() {
            assert!(v[..6].iter().any(|v| (v.pos() - corner).length() < 1e-4));
        }
    }
}
