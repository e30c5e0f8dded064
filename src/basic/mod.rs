pub use bounds::Bounds;
pub use dir::Dir;
pub use point::Point;

mod bounds;
mod dir;
mod point;

/// Number of simulation ticks
pub type Frames = u64;
