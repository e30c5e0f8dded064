use crate::basic::{Bounds, Point};
use crate::snake::{segment_contains, Body};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Collision {
    /// The head left the interior
    Wall,
    /// The head reached the food
    Food,
    /// The head landed on the snake's own path
    Itself,
}

impl Collision {
    /// Wall and self collisions end the round
    pub fn is_fatal(self) -> bool {
        matches!(self, Collision::Wall | Collision::Itself)
    }
}

/// Whether `point` lies on the path of the body, ignoring the segment
/// the head is currently forming (the head is always on that one)
pub fn point_on_path(body: &Body, point: Point) -> bool {
    let points = body.points();
    points[..points.len() - 1]
        .windows(2)
        .any(|pair| segment_contains(pair[0], pair[1], point))
}

/// Checked in order: wall, food, self
pub fn classify(body: &Body, food: Point, bounds: Bounds) -> Option<Collision> {
    let head = body.head();
    if !bounds.contains(head) {
        Some(Collision::Wall)
    } else if head == food {
        Some(Collision::Food)
    } else if point_on_path(body, head) {
        Some(Collision::Itself)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::Dir;
    use crate::snake::body_of;

    const BOUNDS: Bounds = Bounds {
        min: Point { x: 1, y: 1 },
        max: Point { x: 30, y: 30 },
    };

    #[test]
    fn forming_segment_is_excluded() {
        let mut b = body_of(&[(15, 5), (18, 5), (18, 10), (15, 10), (15, 20), (19, 20), (19, 19)]);
        assert!(!point_on_path(&b, b.head()));
        b.advance_head(Dir::U);
        assert!(!point_on_path(&b, b.head()));
        // the previous vertex is shared with the segment before it
        assert!(point_on_path(&b, Point::new(19, 20)));
        assert!(!point_on_path(&b, Point::new(19, 19)));
    }

    #[test]
    fn on_earlier_segments() {
        let b = body_of(&[(15, 5), (18, 5), (18, 10), (15, 10)]);
        assert!(point_on_path(&b, Point::new(16, 5)));
        assert!(point_on_path(&b, Point::new(18, 7)));
        assert!(!point_on_path(&b, Point::new(17, 10)));
        assert!(!point_on_path(&b, Point::new(17, 7)));
    }

    #[test]
    fn wall() {
        let mut b = body_of(&[(1, 5), (1, 1)]);
        b.advance_head(Dir::U);
        assert_eq!(b.head(), Point::new(1, 0));
        assert_eq!(classify(&b, Point::new(20, 20), BOUNDS), Some(Collision::Wall));

        let b = body_of(&[(20, 30), (31, 30)]);
        assert_eq!(classify(&b, Point::new(20, 20), BOUNDS), Some(Collision::Wall));
    }

    #[test]
    fn food() {
        let b = body_of(&[(5, 9), (5, 5)]);
        assert_eq!(classify(&b, Point::new(5, 5), BOUNDS), Some(Collision::Food));
        assert_eq!(classify(&b, Point::new(5, 4), BOUNDS), None);
    }

    #[test]
    fn wall_takes_priority_over_food() {
        let b = body_of(&[(5, 9), (5, 0)]);
        assert_eq!(classify(&b, Point::new(5, 0), BOUNDS), Some(Collision::Wall));
    }

    #[test]
    fn itself() {
        // head moved up into the first segment
        let b = body_of(&[(10, 10), (14, 10), (14, 12), (12, 12), (12, 10)]);
        assert_eq!(classify(&b, Point::new(1, 1), BOUNDS), Some(Collision::Itself));
        assert!(Collision::Itself.is_fatal());
        assert!(!Collision::Food.is_fatal());
    }
}
