use std::fmt::{Display, Formatter};

use itertools::Itertools;
use log::warn;

use crate::basic::{Dir, Point};
use crate::snake::motion::{move_towards, Step};

#[derive(Debug, Error)]
#[must_use]
pub struct BodyError(pub Vec<Point>, pub &'static str);

impl Display for BodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "invalid snake body: {}", self.1)?;
        write!(f, "points: {:?}", self.0)
    }
}

/// Whether `point` lies on the axis-aligned segment from `a` to `b`
/// (inclusive), zero-length segments contain nothing
pub fn segment_contains(a: Point, b: Point, point: Point) -> bool {
    if a == b {
        false
    } else if a.x == b.x {
        point.x == a.x && (a.y.min(b.y)..=a.y.max(b.y)).contains(&point.y)
    } else if a.y == b.y {
        point.y == a.y && (a.x.min(b.x)..=a.x.max(b.x)).contains(&point.x)
    } else {
        false
    }
}

/// The snake as a polyline of turning points
///
/// INVARIANT: at least two points, consecutive points share an axis,
/// the first point is the end of the tail and the last one is the head
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Body {
    points: Vec<Point>,
}

impl Body {
    pub fn new(points: Vec<Point>) -> Result<Self, BodyError> {
        if points.len() < 2 {
            return Err(BodyError(points, "a body needs at least two points"));
        }
        if points.iter().tuple_windows().any(|(a, b)| a.axis_distance(*b).is_none()) {
            return Err(BodyError(points, "diagonal segment"));
        }

        let body = Self { points };
        if body.path_len() == 0 {
            return Err(BodyError(body.points, "zero-length body"));
        }
        Ok(body)
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn head(&self) -> Point {
        self.points[self.points.len() - 1]
    }

    pub fn tail(&self) -> Point {
        self.points[0]
    }

    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Consecutive pairs of points, tail to head
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.iter().copied().tuple_windows()
    }

    /// Total length of the path in cells travelled
    pub fn path_len(&self) -> usize {
        self.segments()
            .map(|(a, b)| a.axis_distance(b).unwrap_or(0))
            .sum()
    }

    /// Direction of the segment ending at the head, None while
    /// that segment has zero length (right after a turn)
    pub fn forming_dir(&self) -> Option<Dir> {
        let last = self.points.len() - 1;
        let difference = self.points[last] - self.points[last - 1];
        Dir::iter().find(|dir| {
            let unit = dir.unit();
            difference.x.signum() == unit.x && difference.y.signum() == unit.y
        })
    }

    /// Whether `point` is anywhere on the snake, including the head
    /// and the segment it is currently forming
    pub fn covers(&self, point: Point) -> bool {
        self.points.contains(&point) || self.segments().any(|(a, b)| segment_contains(a, b, point))
    }

    pub fn advance_head(&mut self, dir: Dir) {
        let last = self.points.len() - 1;
        self.points[last] += dir.unit();
    }

    /// Retract the tail by one unit or, while `grow` is positive,
    /// use up one unit of growth instead
    pub fn advance_tail(&mut self, grow: &mut usize) {
        if *grow > 0 {
            *grow -= 1;
            return;
        }

        loop {
            let can_consume = self.points.len() > 2;
            match move_towards(self.points[0], self.points[1], 1.) {
                // leftover zero-length segment at the tail
                Step::Reached if can_consume => {
                    self.points.remove(0);
                }
                Step::Reached => {
                    warn!("tail and head have merged: {:?}", self.points);
                    return;
                }
                Step::Moved(new_tail) if new_tail == self.points[1] && can_consume => {
                    self.points.remove(0);
                    return;
                }
                Step::Moved(new_tail) if new_tail == self.points[1] => {
                    warn!("tail would reach the head, not moving it: {:?}", self.points);
                    return;
                }
                Step::Moved(new_tail) => {
                    self.points[0] = new_tail;
                    return;
                }
            }
        }
    }

    /// Duplicate the head, the copy stays behind as a corner
    /// when the head starts moving in a new direction
    pub fn add_corner(&mut self) {
        self.points.push(self.head());
    }
}

#[cfg(test)]
pub(crate) fn body_of(points: &[(isize, isize)]) -> Body {
    Body::new(points.iter().copied().map(Point::from).collect()).expect("invalid test body")
}

#[test]
fn test_validation() {
    let to_points = |points: &[(isize, isize)]| points.iter().copied().map(Point::from).collect_vec();

    assert!(Body::new(to_points(&[(1, 1)])).is_err());
    assert!(Body::new(to_points(&[(1, 1), (2, 2)])).is_err());
    assert!(Body::new(to_points(&[(3, 3), (3, 3)])).is_err());
    assert!(Body::new(to_points(&[(1, 1), (1, 5), (4, 6)])).is_err());
    assert!(Body::new(to_points(&[(1, 1), (1, 5)])).is_ok());
    assert!(Body::new(to_points(&[(15, 5), (18, 5), (18, 10), (15, 10), (15, 20), (19, 20), (19, 19)])).is_ok());
}

#[test]
fn test_segment_contains() {
    let (a, b) = (Point::new(5, 2), Point::new(5, 8));
    assert!(segment_contains(a, b, Point::new(5, 2)));
    assert!(segment_contains(b, a, Point::new(5, 5)));
    assert!(segment_contains(a, b, Point::new(5, 8)));
    assert!(!segment_contains(a, b, Point::new(5, 9)));
    assert!(!segment_contains(a, b, Point::new(6, 5)));

    let (a, b) = (Point::new(9, 4), Point::new(2, 4));
    assert!(segment_contains(a, b, Point::new(2, 4)));
    assert!(!segment_contains(a, b, Point::new(1, 4)));

    // degenerate
    assert!(!segment_contains(a, a, a));
}

#[test]
fn test_path_len_and_forming_dir() {
    let b = body_of(&[(15, 5), (18, 5), (18, 10), (15, 10), (15, 20), (19, 20), (19, 19)]);
    assert_eq!(b.path_len(), 3 + 5 + 3 + 10 + 4 + 1);
    assert_eq!(b.forming_dir(), Some(Dir::U));
    assert_eq!(body_of(&[(1, 1), (7, 1)]).forming_dir(), Some(Dir::R));
}

#[test]
fn test_advance_without_growth() {
    let mut b = body_of(&[(15, 5), (18, 5), (18, 10)]);
    let mut grow = 0;
    b.advance_head(Dir::D);
    b.advance_tail(&mut grow);
    assert_eq!(b.points(), body_of(&[(16, 5), (18, 5), (18, 11)]).points());
    assert_eq!(b.path_len(), 8);
}

#[test]
fn test_tail_consumes_vertex() {
    let mut b = body_of(&[(17, 5), (18, 5), (18, 10)]);
    let mut grow = 0;
    b.advance_head(Dir::D);
    b.advance_tail(&mut grow);
    assert_eq!(b.points(), &[Point::new(18, 5), Point::new(18, 11)]);
}

#[test]
fn test_tail_skips_zero_length_segment() {
    let mut b = Body {
        points: vec![Point::new(3, 3), Point::new(3, 3), Point::new(3, 6)],
    };
    let mut grow = 0;
    b.advance_tail(&mut grow);
    assert_eq!(b.points(), &[Point::new(3, 4), Point::new(3, 6)]);
}

#[test]
fn test_two_point_body_keeps_its_length() {
    let mut b = body_of(&[(3, 3), (3, 4)]);
    let mut grow = 0;
    b.advance_tail(&mut grow);
    assert_eq!(b.points(), &[Point::new(3, 3), Point::new(3, 4)]);
    assert_eq!(b.path_len(), 1);
    assert!(Body::new(b.points().to_vec()).is_ok());

    // already merged, nothing to consume
    let mut b = Body {
        points: vec![Point::new(5, 5), Point::new(5, 5)],
    };
    b.advance_tail(&mut grow);
    assert_eq!(b.vertex_count(), 2);
}

#[test]
fn test_growth_suspends_tail() {
    let mut b = body_of(&[(10, 20), (10, 10)]);
    let start_len = b.path_len();
    let mut grow = 3;
    for _ in 0..3 {
        b.advance_head(Dir::U);
        b.advance_tail(&mut grow);
    }
    assert_eq!(grow, 0);
    assert_eq!(b.tail(), Point::new(10, 20));
    assert_eq!(b.path_len(), start_len + 3);

    b.advance_head(Dir::U);
    b.advance_tail(&mut grow);
    assert_eq!(b.tail(), Point::new(10, 19));
    assert_eq!(b.path_len(), start_len + 3);
}

#[test]
fn test_add_corner() {
    let mut b = body_of(&[(10, 15), (10, 10)]);
    b.add_corner();
    assert_eq!(b.points(), &[Point::new(10, 15), Point::new(10, 10), Point::new(10, 10)]);
    assert_eq!(b.forming_dir(), None);
    assert!(b.covers(Point::new(10, 10)));

    b.advance_head(Dir::R);
    assert_eq!(b.head(), Point::new(11, 10));
    assert_eq!(b.forming_dir(), Some(Dir::R));
}
