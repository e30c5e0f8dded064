use ggez::graphics::{Color, DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::error::{Error, ErrorConversion, Result};
use crate::matrix::PixelMatrix;

/// Fraction of a cell left dark between neighbouring LEDs
const LED_GAP: f32 = 0.12;

/// One square per lit LED, None when the whole matrix is dark
pub fn pixel_mesh(matrix: &PixelMatrix, scale: f32, ctx: &Context) -> Result<Option<Mesh>> {
    let mut builder = MeshBuilder::new();
    let inset = scale * LED_GAP / 2.;
    let side = scale - 2. * inset;

    let mut lit = 0;
    for (point, pen) in matrix.lit() {
        let rect = Rect::new(
            point.x as f32 * scale + inset,
            point.y as f32 * scale + inset,
            side,
            side,
        );
        builder
            .rectangle(DrawMode::fill(), rect, Color::from(pen))
            .map_err(Error::from)
            .with_trace_step("pixel_mesh")?;
        lit += 1;
    }

    if lit == 0 {
        return Ok(None);
    }
    Ok(Some(Mesh::from_data(ctx, builder.build())))
}
