use std::ops::Neg;

use crate::basic::Point;
use Dir::*;

// defined in clockwise order starting at U
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U,
    R,
    D,
    L,
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            U => D,
            R => L,
            D => U,
            L => R,
        }
    }
}

impl From<Dir> for Point {
    fn from(dir: Dir) -> Self {
        dir.unit()
    }
}

impl Dir {
    // clockwise order starting from U
    pub fn iter() -> impl Iterator<Item = Self> {
        [U, R, D, L].iter().copied()
    }

    /// The vector added to the head every tick
    pub fn unit(self) -> Point {
        match self {
            U => Point { x: 0, y: -1 },
            R => Point { x: 1, y: 0 },
            D => Point { x: 0, y: 1 },
            L => Point { x: -1, y: 0 },
        }
    }
}

#[test]
fn test_dir_neg() {
    for dir in Dir::iter() {
        assert_eq!(-(-dir), dir);
        assert_ne!(-dir, dir);
        assert_eq!(dir.unit() + (-dir).unit(), Point::default());
    }
}

#[test]
fn test_dir_unit() {
    for (dir, expect) in [(U, (0, -1)), (D, (0, 1)), (L, (-1, 0)), (R, (1, 0))] {
        assert_eq!(dir.unit(), Point::from(expect), "{:?}", dir);
        assert_eq!(dir.unit().magnitude(), 1.);
    }
}
