use log::debug;
use rand::seq::IteratorRandom;
use rand::Rng;

use crate::basic::{Bounds, Point};
use crate::snake::Body;

/// Pick a random interior cell that isn't on the snake
///
/// Guesses up to `attempts` times, then falls back to sampling
/// over all free cells so a crowded board can't stall the game,
/// None means there are no free cells left
pub fn spawn_food(body: &Body, bounds: Bounds, attempts: usize, rng: &mut impl Rng) -> Option<Point> {
    for _ in 0..attempts {
        let point = bounds.random_point(rng);
        if !body.covers(point) {
            debug!("new food location: {:?}", point);
            return Some(point);
        }
    }

    let point = bounds.points().filter(|point| !body.covers(*point)).choose(rng);
    debug!("new food location after {} failed attempts: {:?}", attempts, point);
    point
}
