use crate::Coordinate;

/// A single joint or fingertip position, normalized to the image size.
/// Origin is the top-left corner, so smaller `y` is higher in the frame.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Landmark {
    pub x: Coordinate,
    pub y: Coordinate,
}

impl Landmark {
    pub const fn new(x: Coordinate, y: Coordinate) -> Self {
        Self { x, y }
    }
    /// Strictly left of `other` in image space.
    pub fn left_of(&self, other: &Self) -> bool {
        self.x < other.x
    }
    /// Strictly right of `other` in image space.
    pub fn right_of(&self, other: &Self) -> bool {
        self.x > other.x
    }
    /// Strictly higher than `other` in image space.
    pub fn above(&self, other: &Self) -> bool {
        self.y < other.y
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.3},{:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_coordinates_are_neither_side() {
        let a = Landmark::new(0.5, 0.5);
        let b = Landmark::new(0.5, 0.5);
        assert!(!a.left_of(&b));
        assert!(!a.right_of(&b));
        assert!(!a.above(&b));
    }

    #[test]
    fn smaller_y_is_above() {
        let tip = Landmark::new(0.4, 0.2);
        let pip = Landmark::new(0.4, 0.6);
        assert!(tip.above(&pip));
        assert!(!pip.above(&tip));
    }
}
