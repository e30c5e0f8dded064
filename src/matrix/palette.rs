use ggez::graphics::Color;
use hsl::HSL;

/// A single LED colour
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Pen {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pen {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    pub fn is_off(self) -> bool {
        self == Self::BLACK
    }
}

impl From<(u8, u8, u8)> for Pen {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

impl From<HSL> for Pen {
    fn from(hsl: HSL) -> Self {
        Self::from(hsl.to_rgb())
    }
}

impl From<Pen> for Color {
    fn from(Pen { r, g, b }: Pen) -> Self {
        Color::from_rgb(r, g, b)
    }
}

#[derive(Copy, Clone, Debug)]
pub struct Palette {
    pub background: Pen,
    pub border: Pen,
    pub food: Pen,
    pub snake: Pen,
    /// Fills the interior after a crash
    pub failure: Pen,
}

lazy_static! {
    static ref CLASSIC: Palette = Palette {
        background: Pen::BLACK,
        border: HSL { h: 240., s: 1., l: 0.5 }.into(),
        food: HSL { h: 0., s: 1., l: 0.5 }.into(),
        snake: HSL { h: 60., s: 1., l: 0.5 }.into(),
        failure: HSL { h: 0., s: 1., l: 0.25 }.into(),
    };
}

impl Default for Palette {
    fn default() -> Self {
        *CLASSIC
    }
}

#[test]
fn test_classic_colors() {
    let palette = Palette::default();
    assert_eq!(palette.border, Pen { r: 0, g: 0, b: 255 });
    assert_eq!(palette.food, Pen { r: 255, g: 0, b: 0 });
    assert_eq!(palette.snake, Pen { r: 255, g: 255, b: 0 });
    assert!(palette.failure.g == 0 && palette.failure.b == 0);
    assert!(palette.failure.r > 100 && palette.failure.r < palette.food.r);
}
