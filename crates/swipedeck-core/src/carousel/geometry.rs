//! Plain 2D geometry in pointer pixels.

/// A position in pointer pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Axis-aligned rectangle (origin top-left)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x < self.x + self.width
            && point.y >= self.y
            && point.y < self.y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = Point::new(100.0, 100.0).distance_to(Point::new(500.0, 500.0));
        assert!((d - 565.685).abs() < 0.001);
    }

    #[test]
    fn test_bounds_center_and_contains() {
        let bounds = Bounds::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.center(), Point::new(60.0, 45.0));
        assert!(bounds.contains(Point::new(10.0, 20.0)));
        assert!(!bounds.contains(Point::new(110.0, 20.0)));
    }
}
