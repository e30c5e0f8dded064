use crate::basic::{Dir, Point};

/// Directional input, on the real board this is the encoder wheel
pub trait Input {
    /// Direction pressed since the last poll, polled once per tick
    fn direction_pressed(&mut self) -> Option<Dir>;
    /// Only consulted while waiting to restart after a crash
    fn confirm_pressed(&mut self) -> bool;
}

/// Drawing primitives of the display, the game draws a full frame
/// every tick and calls `present` at the end
pub trait Render {
    fn clear(&mut self);
    fn draw_border(&mut self);
    fn draw_food(&mut self, food: Point);
    /// Vertices from tail to head
    fn draw_body(&mut self, points: &[Point]);
    /// Marks the interior to show the round was lost
    fn draw_failure(&mut self);
    fn present(&mut self);
}
