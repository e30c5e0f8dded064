use log::{debug, warn};

pub use body::{segment_contains, Body, BodyError};
pub use motion::{move_towards, Step};

use crate::basic::{Dir, Point};

mod body;
mod motion;

#[cfg(test)]
pub(crate) use body::body_of;

/// Result of asking the snake to change direction
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Turn {
    Turned,
    /// Already going that way, nothing recorded
    Unchanged,
    /// A 180° turn, ignored instead of steering the head straight
    /// back into the segment behind it, which would be an instant
    /// self collision on the next tick
    Reversal,
}

#[derive(Clone, Debug)]
pub struct Snake {
    pub body: Body,
    /// Direction the head is currently going
    pub dir: Dir,
    /// Units of length still to be added before the tail moves again
    pub grow: usize,
}

impl Snake {
    /// Fails if `dir` would send the head straight back along the
    /// segment it's on, if it simply differs from that segment a
    /// corner is added at the head
    pub fn new(mut body: Body, dir: Dir) -> Result<Self, BodyError> {
        match body.forming_dir() {
            Some(forming) if forming == -dir => {
                return Err(BodyError(
                    body.points().to_vec(),
                    "initial direction points back into the body",
                ));
            }
            Some(forming) if forming != dir => body.add_corner(),
            _ => {}
        }

        Ok(Self { body, dir, grow: 0 })
    }

    pub fn head(&self) -> Point {
        self.body.head()
    }

    /// Records a corner only if the heading really changes
    pub fn turn(&mut self, dir: Dir) -> Turn {
        if dir == self.dir {
            Turn::Unchanged
        } else if dir == -self.dir {
            warn!("ignoring 180° turn {:?} -> {:?}", self.dir, dir);
            Turn::Reversal
        } else {
            debug!("turn {:?} -> {:?} at {:?}", self.dir, dir, self.head());
            self.body.add_corner();
            self.dir = dir;
            Turn::Turned
        }
    }

    pub fn advance_head(&mut self) {
        self.body.advance_head(self.dir);
    }

    pub fn advance_tail(&mut self) {
        self.body.advance_tail(&mut self.grow);
    }

    pub fn advance(&mut self) {
        self.advance_head();
        self.advance_tail();
    }
}

#[cfg(test)]
fn snake(points: &[(isize, isize)], dir: Dir) -> Snake {
    Snake::new(body_of(points), dir).expect("invalid test snake")
}

#[test]
fn test_turn_adds_corner() {
    let mut s = snake(&[(10, 15), (10, 10)], Dir::U);
    assert_eq!(s.turn(Dir::R), Turn::Turned);
    assert_eq!(
        s.body.points(),
        &[Point::new(10, 15), Point::new(10, 10), Point::new(10, 10)]
    );

    s.advance();
    assert_eq!(s.head(), Point::new(11, 10));
    assert_eq!(s.body.tail(), Point::new(10, 14));
    assert_eq!(s.body.path_len(), 5);
}

#[test]
fn test_repeated_direction_adds_nothing() {
    let mut s = snake(&[(10, 15), (10, 10)], Dir::U);
    for _ in 0..5 {
        assert_eq!(s.turn(Dir::U), Turn::Unchanged);
    }
    assert_eq!(s.body.vertex_count(), 2);

    assert_eq!(s.turn(Dir::L), Turn::Turned);
    assert_eq!(s.turn(Dir::L), Turn::Unchanged);
    assert_eq!(s.body.vertex_count(), 3);
}

#[test]
fn test_reversal_ignored() {
    let mut s = snake(&[(10, 15), (10, 10)], Dir::U);
    assert_eq!(s.turn(Dir::D), Turn::Reversal);
    assert_eq!(s.dir, Dir::U);
    assert_eq!(s.body.vertex_count(), 2);
}

#[test]
fn test_new_reconciles_direction() {
    // heading doesn't match the last segment, a corner is inserted
    let s = snake(&[(10, 15), (10, 10)], Dir::L);
    assert_eq!(s.body.vertex_count(), 3);

    assert!(Snake::new(body_of(&[(10, 15), (10, 10)]), Dir::D).is_err());
}

#[test]
fn test_corner_walks_out_of_the_tail() {
    // the snake turns and keeps going until the old corner is consumed
    let mut s = snake(&[(5, 8), (5, 5)], Dir::U);
    s.turn(Dir::R);
    for _ in 0..3 {
        s.advance();
    }
    assert_eq!(s.body.points(), &[Point::new(5, 5), Point::new(8, 5)]);
    assert_eq!(s.body.path_len(), 3);
}
