use std::fmt::{Debug, Formatter};

/// A pixel coordinate on the matrix, x grows to the right, y grows down
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Add, AddAssign, Sub, SubAssign)]
pub struct Point {
    pub x: isize,
    pub y: isize,
}

impl Debug for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.x, self.y)
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl Point {
    pub const fn new(x: isize, y: isize) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        ((self.x.pow(2) + self.y.pow(2)) as f32).sqrt()
    }

    /// Number of unit steps between two points on the same row or column,
    /// None if they don't share an axis
    pub fn axis_distance(self, other: Self) -> Option<usize> {
        if self.x == other.x {
            Some(self.y.abs_diff(other.y))
        } else if self.y == other.y {
            Some(self.x.abs_diff(other.x))
        } else {
            None
        }
    }
}

#[test]
fn test_axis_distance() {
    for (a, b, expect) in [
        ((0, 0), (0, 0), Some(0)),
        ((3, 1), (3, 7), Some(6)),
        ((10, 4), (2, 4), Some(8)),
        ((1, 1), (2, 2), None),
    ] {
        assert_eq!(Point::from(a).axis_distance(Point::from(b)), expect, "{:?} -> {:?}", a, b);
    }
}
