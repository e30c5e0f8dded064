pub use palette::{Palette, Pen};

use crate::basic::{Bounds, Point};
use crate::hardware::Render;

mod palette;

/// Frame buffer for a square LED matrix
///
/// Drawing goes to a back buffer, `present` makes it visible
/// the same way the board only updates the panel on demand
pub struct PixelMatrix {
    size: isize,
    border: isize,
    palette: Palette,
    back: Vec<Pen>,
    front: Vec<Pen>,
}

impl PixelMatrix {
    pub fn new(size: isize, border: isize, palette: Palette) -> Self {
        let len = (size * size) as usize;
        Self {
            size,
            border,
            palette,
            back: vec![palette.background; len],
            front: vec![palette.background; len],
        }
    }

    pub fn size(&self) -> isize {
        self.size
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    fn index(&self, point: Point) -> Option<usize> {
        let range = 0..self.size;
        (range.contains(&point.x) && range.contains(&point.y))
            .then(|| (point.y * self.size + point.x) as usize)
    }

    /// Points off the matrix are ignored
    pub fn pixel(&mut self, point: Point, pen: Pen) {
        if let Some(idx) = self.index(point) {
            self.back[idx] = pen;
        }
    }

    /// Straight line including both ends
    pub fn line(&mut self, from: Point, to: Point, pen: Pen) {
        let difference = to - from;
        let steps = difference.x.abs().max(difference.y.abs());
        if steps == 0 {
            self.pixel(from, pen);
            return;
        }
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let point = Point {
                x: from.x + (difference.x as f32 * t).round() as isize,
                y: from.y + (difference.y as f32 * t).round() as isize,
            };
            self.pixel(point, pen);
        }
    }

    /// Filled, corners included
    pub fn rectangle(&mut self, rect: Bounds, pen: Pen) {
        for point in rect.points() {
            self.pixel(point, pen);
        }
    }

    /// Colour of a visible pixel
    pub fn get(&self, point: Point) -> Option<Pen> {
        self.index(point).map(|idx| self.front[idx])
    }

    /// All visible pixels that are switched on
    pub fn lit(&self) -> impl Iterator<Item = (Point, Pen)> + '_ {
        let size = self.size;
        self.front
            .iter()
            .enumerate()
            .filter(|(_, pen)| !pen.is_off())
            .map(move |(idx, pen)| {
                let idx = idx as isize;
                (Point { x: idx % size, y: idx / size }, *pen)
            })
    }

    fn interior(&self) -> Bounds {
        Bounds::interior(self.size, self.border)
    }
}

impl Render for PixelMatrix {
    fn clear(&mut self) {
        let background = self.palette.background;
        self.back.iter_mut().for_each(|pen| *pen = background);
    }

    fn draw_border(&mut self) {
        let whole = Bounds::interior(self.size, 0);
        self.rectangle(whole, self.palette.border);
        self.rectangle(self.interior(), self.palette.background);
    }

    fn draw_food(&mut self, food: Point) {
        self.pixel(food, self.palette.food);
    }

    fn draw_body(&mut self, points: &[Point]) {
        let pen = self.palette.snake;
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], pen);
        }
        for point in points {
            self.pixel(*point, pen);
        }
    }

    fn draw_failure(&mut self) {
        self.rectangle(self.interior(), self.palette.failure);
    }

    fn present(&mut self) {
        self.front.copy_from_slice(&self.back);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matrix() -> PixelMatrix {
        PixelMatrix::new(32, 1, Palette::default())
    }

    #[test]
    fn nothing_visible_before_present() {
        let mut m = matrix();
        m.draw_border();
        m.draw_food(Point::new(4, 4));
        assert_eq!(m.lit().count(), 0);

        m.present();
        assert_eq!(m.get(Point::new(4, 4)), Some(m.palette().food));
    }

    #[test]
    fn border_ring() {
        let mut m = matrix();
        m.draw_border();
        m.present();

        let border = m.palette().border;
        assert_eq!(m.lit().count(), 32 * 4 - 4);
        assert!(m.lit().all(|(_, pen)| pen == border));
        assert_eq!(m.get(Point::new(0, 0)), Some(border));
        assert_eq!(m.get(Point::new(31, 17)), Some(border));
        assert_eq!(m.get(Point::new(1, 1)), Some(Pen::BLACK));
        assert_eq!(m.get(Point::new(32, 0)), None);
    }

    #[test]
    fn body_lines() {
        let mut m = matrix();
        let body = [Point::new(3, 3), Point::new(6, 3), Point::new(6, 5)];
        m.draw_body(&body);
        m.present();

        let snake = m.palette().snake;
        let lit: Vec<_> = m.lit().map(|(point, _)| point).collect();
        assert_eq!(
            lit,
            vec![
                Point::new(3, 3),
                Point::new(4, 3),
                Point::new(5, 3),
                Point::new(6, 3),
                Point::new(6, 4),
                Point::new(6, 5),
            ]
        );
        assert!(m.lit().all(|(_, pen)| pen == snake));
    }

    #[test]
    fn off_matrix_is_clipped() {
        let mut m = matrix();
        m.draw_body(&[Point::new(2, 1), Point::new(2, -3)]);
        m.present();
        assert_eq!(m.lit().count(), 2);
    }

    #[test]
    fn failure_keeps_border() {
        let mut m = matrix();
        m.draw_border();
        m.draw_failure();
        m.present();
        assert_eq!(m.get(Point::new(0, 5)), Some(m.palette().border));
        assert_eq!(m.get(Point::new(5, 5)), Some(m.palette().failure));
        assert_eq!(m.get(Point::new(30, 30)), Some(m.palette().failure));

        m.clear();
        m.present();
        assert_eq!(m.lit().count(), 0);
    }
}
