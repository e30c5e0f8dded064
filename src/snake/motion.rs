use crate::basic::Point;

/// Outcome of moving one point towards another
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Step {
    /// The point moved to this new location
    Moved(Point),
    /// The two points were already equal, the moving point
    /// has merged into the target and should be dropped
    Reached,
}

/// Move `from` by `step_size` units along the straight line to `to`,
/// rounding the result back onto the grid
pub fn move_towards(from: Point, to: Point, step_size: f32) -> Step {
    let difference = to - from;
    let magnitude = difference.magnitude();
    if magnitude == 0. {
        return Step::Reached;
    }

    let scale = step_size / magnitude;
    Step::Moved(Point {
        x: from.x + (difference.x as f32 * scale).round() as isize,
        y: from.y + (difference.y as f32 * scale).round() as isize,
    })
}

#[test]
fn test_reached_only_when_equal() {
    let p = Point::new(4, 9);
    assert_eq!(move_towards(p, p, 1.), Step::Reached);
    assert_eq!(move_towards(p, Point::new(4, 10), 1.), Step::Moved(Point::new(4, 10)));
}

#[test]
fn test_axis_aligned_walk() {
    for (from, to) in [
        ((1, 1), (1, 5)),
        ((18, 10), (18, 5)),
        ((15, 10), (3, 10)),
        ((2, 7), (29, 7)),
    ] {
        let (from, to) = (Point::from(from), Point::from(to));
        let distance = from.axis_distance(to).unwrap();

        let mut current = from;
        let mut steps = 0;
        loop {
            match move_towards(current, to, 1.) {
                Step::Reached => break,
                Step::Moved(next) => {
                    assert_eq!(current.axis_distance(next), Some(1), "{:?} -> {:?}", current, next);
                    current = next;
                    steps += 1;
                }
            }
            assert!(steps <= distance, "overshot {:?} -> {:?}", from, to);
        }
        assert_eq!(current, to);
        assert_eq!(steps, distance);
    }
}

#[test]
fn test_diagonal_rounds_onto_grid() {
    // a 45° direction rounds both coordinates up to a full unit
    assert_eq!(
        move_towards(Point::new(0, 0), Point::new(5, 5), 1.),
        Step::Moved(Point::new(1, 1))
    );
    // shallow angles round the minor axis away
    assert_eq!(
        move_towards(Point::new(0, 0), Point::new(10, 1), 1.),
        Step::Moved(Point::new(1, 0))
    );
}
