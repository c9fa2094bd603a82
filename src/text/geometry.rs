use bevy::math::Vec2;

/// Axis-aligned interaction rectangle for a wrapped sentence
/// Invariant: y axis is inverted, `y1` is the lower edge and `y2 = y1 - height` the upper one
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Boundary {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Boundary {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Boundary { x1, y1, x2, y2 }
    }

    /// Strict containment: a pointer sitting exactly on an edge is outside
    pub fn contains(&self, point: Vec2) -> bool {
        let inside_x = point.x > self.x1 && point.x < self.x2;
        let inside_y = point.y < self.y1 && point.y > self.y2;
        inside_x && inside_y
    }
}

/// Size of the drawing surface in surface pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        CanvasSize { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_strict() {
        let boundary = Boundary::new(0.0, 20.0, 20.0, 10.0);

        assert!(boundary.contains(Vec2::new(10.0, 15.0)));
        assert!(!boundary.contains(Vec2::new(0.0, 15.0)), "left edge is outside");
        assert!(!boundary.contains(Vec2::new(20.0, 15.0)), "right edge is outside");
        assert!(!boundary.contains(Vec2::new(10.0, 20.0)), "bottom edge is outside");
        assert!(!boundary.contains(Vec2::new(10.0, 10.0)), "top edge is outside");
    }

    #[test]
    fn test_contains_uses_inverted_y() {
        let boundary = Boundary::new(0.0, 20.0, 20.0, 10.0);

        // y2 above y1 on screen, so a point below y1 (larger y) is outside
        assert!(!boundary.contains(Vec2::new(10.0, 25.0)));
        assert!(!boundary.contains(Vec2::new(10.0, 5.0)));
    }
}
