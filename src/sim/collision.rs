//! Axis-aligned collision detection
//!
//! Runner and obstacle are both boxes in screen space (y grows downward).
//! Overlap is strict: boxes that only share an edge do not collide.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer axis-aligned rectangle (top-left + size)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub min: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub fn new(min: IVec2, size: IVec2) -> Self {
        Self { min, size }
    }

    /// Exclusive bottom-right corner
    pub fn max(&self) -> IVec2 {
        self.min + self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size.x <= 0 || self.size.y <= 0
    }

    /// True when the two rectangles share a region of nonzero area
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x && other.min.x < a_max.x && self.min.y < b_max.y && other.min.y < a_max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn test_overlap() {
        assert!(rect(0, 0, 10, 10).intersects(&rect(5, 5, 10, 10)));
        assert!(rect(5, 5, 10, 10).intersects(&rect(0, 0, 10, 10)));
    }

    #[test]
    fn test_containment() {
        assert!(rect(0, 0, 100, 100).intersects(&rect(10, 10, 5, 5)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        // Shared vertical edge
        assert!(!rect(0, 0, 10, 10).intersects(&rect(10, 0, 10, 10)));
        // Shared horizontal edge
        assert!(!rect(0, 0, 10, 10).intersects(&rect(0, 10, 10, 10)));
        // Shared corner
        assert!(!rect(0, 0, 10, 10).intersects(&rect(10, 10, 10, 10)));
    }

    #[test]
    fn test_disjoint() {
        assert!(!rect(0, 0, 10, 10).intersects(&rect(50, 50, 10, 10)));
    }

    #[test]
    fn test_empty_never_collides() {
        assert!(!rect(0, 0, 0, 10).intersects(&rect(0, 0, 10, 10)));
        assert!(!rect(0, 0, 10, 10).intersects(&rect(2, 2, -3, 4)));
    }
}
