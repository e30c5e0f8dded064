use static_assertions::{assert_impl_all, const_assert};

use crate::basic::{Bounds, Dir, Frames, Point};

pub const DEFAULT_BOARD_SIZE: isize = 32;
pub const DEFAULT_BORDER: isize = 1;

#[rustfmt::skip]
pub const DEFAULT_BODY: [Point; 7] = [
    Point::new(15, 5), Point::new(18, 5), Point::new(18, 10), Point::new(15, 10),
    Point::new(15, 20), Point::new(19, 20), Point::new(19, 19),
];

const_assert!(DEFAULT_BOARD_SIZE > 2 * DEFAULT_BORDER);
const_assert!(DEFAULT_BODY[6].y > DEFAULT_BORDER);

#[derive(Clone, Debug)]
pub struct Prefs {
    /// Side length of the square matrix in pixels
    pub board_size: isize,
    /// Thickness of the wall ring around the interior
    pub border: isize,

    pub ticks_per_second: u32,
    /// Units of length gained per food eaten
    pub growth_bonus: usize,
    /// Random guesses before food placement scans the free cells
    pub spawn_attempts: usize,

    /// Tail first, head last
    pub initial_body: Vec<Point>,
    pub initial_dir: Dir,

    /// How many times the failure screen blinks before staying on
    pub failure_blinks: Frames,
    /// Length of each on/off phase of a blink
    pub blink_frames: Frames,

    /// Window pixels per matrix pixel
    pub pixel_scale: f32,
}

assert_impl_all!(Prefs: Clone, Send, Sync);

impl Default for Prefs {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            border: DEFAULT_BORDER,

            ticks_per_second: 5,
            growth_bonus: 5,
            spawn_attempts: 1000,

            initial_body: DEFAULT_BODY.to_vec(),
            initial_dir: Dir::U,

            failure_blinks: 3,
            blink_frames: 2,

            pixel_scale: 20.,
        }
    }
}

// builder
impl Prefs {
    pub fn board(mut self, board_size: isize, border: isize) -> Self {
        self.board_size = board_size;
        self.border = border;
        self
    }

    pub fn initial_snake(mut self, body: Vec<Point>, dir: Dir) -> Self {
        self.initial_body = body;
        self.initial_dir = dir;
        self
    }

    pub fn growth_bonus(mut self, growth_bonus: usize) -> Self {
        self.growth_bonus = growth_bonus;
        self
    }

    pub fn blinks(mut self, failure_blinks: Frames, blink_frames: Frames) -> Self {
        self.failure_blinks = failure_blinks;
        self.blink_frames = blink_frames;
        self
    }

    pub fn interior(&self) -> Bounds {
        Bounds::interior(self.board_size, self.border)
    }

    /// Total ticks spent blinking after a crash
    pub fn blink_duration(&self) -> Frames {
        self.failure_blinks * self.blink_frames * 2
    }
}

#[test]
fn test_default_snake_inside() {
    let prefs = Prefs::default();
    let interior = prefs.interior();
    assert!(prefs.initial_body.iter().all(|point| interior.contains(*point)));
    assert_eq!(prefs.blink_duration(), 12);
}
