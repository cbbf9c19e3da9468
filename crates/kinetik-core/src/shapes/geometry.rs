//! Small geometry helpers shared by the shape hit tests.

use kurbo::Point;

/// Cross product of (b - a) x (p - a); sign tells which side of a->b p is on.
fn edge_sign(p: Point, a: Point, b: Point) -> f64 {
    (p.x - a.x) * (b.y - a.y) - (p.y - a.y) * (b.x - a.x)
}

/// Test whether a point lies inside (or on the edge of) the triangle a-b-c.
///
/// Uses the same-side-of-every-edge test, so vertex winding does not matter.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let d1 = edge_sign(p, a, b);
    let d2 = edge_sign(p, b, c);
    let d3 = edge_sign(p, c, a);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_inside() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 10.0);
        let c = Point::new(10.0, 10.0);

        assert!(point_in_triangle(Point::new(2.0, 8.0), a, b, c));
    }

    #[test]
    fn test_point_outside() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 10.0);
        let c = Point::new(10.0, 10.0);

        // Inside the bounding box but on the empty side of the hypotenuse.
        assert!(!point_in_triangle(Point::new(8.0, 2.0), a, b, c));
        assert!(!point_in_triangle(Point::new(-1.0, 5.0), a, b, c));
    }

    #[test]
    fn test_point_on_edge() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 10.0);
        let c = Point::new(10.0, 10.0);

        assert!(point_in_triangle(Point::new(0.0, 5.0), a, b, c));
        assert!(point_in_triangle(a, a, b, c));
    }

    #[test]
    fn test_winding_independent() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(0.0, 10.0);
        let c = Point::new(10.0, 10.0);
        let p = Point::new(3.0, 7.0);

        assert!(point_in_triangle(p, a, b, c));
        assert!(point_in_triangle(p, c, b, a));
    }
}
