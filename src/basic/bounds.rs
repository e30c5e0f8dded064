use itertools::iproduct;
use rand::Rng;

use crate::basic::Point;

/// An inclusive rectangle of cells, used for the playable interior
/// of the matrix (everything inside the border ring)
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    /// The interior of a square board of `board_size` pixels
    /// surrounded by a border `border` pixels thick
    pub fn interior(board_size: isize, border: isize) -> Self {
        Self {
            min: Point { x: border, y: border },
            max: Point {
                x: board_size - border - 1,
                y: board_size - border - 1,
            },
        }
    }

    pub fn contains(self, point: Point) -> bool {
        (self.min.x..=self.max.x).contains(&point.x) && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Uniformly random cell inside the bounds
    pub fn random_point(self, rng: &mut impl Rng) -> Point {
        Point {
            x: rng.gen_range(self.min.x..=self.max.x),
            y: rng.gen_range(self.min.y..=self.max.y),
        }
    }

    // row by row
    pub fn points(self) -> impl Iterator<Item = Point> {
        iproduct!(self.min.y..=self.max.y, self.min.x..=self.max.x).map(|(y, x)| Point { x, y })
    }
}

#[test]
fn test_interior() {
    let bounds = Bounds::interior(32, 1);
    assert_eq!(bounds.min, Point::new(1, 1));
    assert_eq!(bounds.max, Point::new(30, 30));
    assert_eq!(bounds.points().count(), 900);

    for (point, inside) in [
        ((1, 1), true),
        ((30, 30), true),
        ((15, 0), false),
        ((0, 15), false),
        ((31, 5), false),
        ((5, 31), false),
    ] {
        assert_eq!(bounds.contains(Point::from(point)), inside, "{:?}", point);
    }
}

#[test]
fn test_random_point_inside() {
    use rand::{rngs::StdRng, SeedableRng};

    let bounds = Bounds::interior(8, 1);
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        assert!(bounds.contains(bounds.random_point(&mut rng)));
    }
}
