use crate::basic::Frames;

/// Collected over a single round, reset on restart
#[derive(Default, Copy, Clone, Debug, Eq, PartialEq)]
pub struct Stats {
    pub food_eaten: usize,
    /// Ticks the snake was alive for
    pub ticks: Frames,
    /// Length of the snake's path when the round ended
    pub final_len: usize,
}
