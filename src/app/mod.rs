use ggez::conf::{WindowMode, WindowSetup};
use ggez::event::EventHandler;
use ggez::graphics::{Canvas, Color, DrawParam, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{Context, GameError, GameResult};
use log::{debug, info};
use rand::rngs::ThreadRng;
use rand::thread_rng;

use crate::error::{ErrorConversion, Result};
use crate::game::Game;
use crate::matrix::{Palette, PixelMatrix};
use crate::prefs::Prefs;
use pixel_mesh::pixel_mesh;
use wheel::Wheel;

mod pixel_mesh;
mod wheel;

/// Desktop stand-in for the microcontroller board: a window
/// shows the LED matrix and the keyboard acts as the wheel
pub struct App {
    game: Game<ThreadRng>,
    matrix: PixelMatrix,
    wheel: Wheel,

    /// Rebuilt only after a tick changed the matrix
    mesh: Option<Mesh>,
    mesh_invalid: bool,
}

impl App {
    pub fn new(prefs: Prefs) -> Result<Self> {
        let matrix = PixelMatrix::new(prefs.board_size, prefs.border, Palette::default());
        let game = Game::new(prefs, thread_rng()).with_trace_step("App::new")?;
        Ok(Self {
            game,
            matrix,
            wheel: Wheel::default(),

            mesh: None,
            mesh_invalid: true,
        })
    }

    pub fn window_mode(&self) -> WindowMode {
        let side = self.matrix.size() as f32 * self.game.prefs().pixel_scale;
        WindowMode::default().dimensions(side, side)
    }

    pub fn window_setup(&self) -> WindowSetup {
        WindowSetup::default().title("Pixel Snake")
    }
}

impl EventHandler<GameError> for App {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let ticks_per_second = self.game.prefs().ticks_per_second;
        while ctx.time.check_update_time(ticks_per_second) {
            if let Some(collision) = self.game.tick(&mut self.wheel, &mut self.matrix) {
                debug!("collision: {:?}", collision);
            }
            self.mesh_invalid = true;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, Color::BLACK);

        if self.mesh_invalid {
            self.mesh = pixel_mesh(&self.matrix, self.game.prefs().pixel_scale, ctx)?;
            self.mesh_invalid = false;
        }
        if let Some(mesh) = &self.mesh {
            canvas.draw(mesh, DrawParam::default());
        }

        canvas.finish(ctx)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        if repeated {
            return Ok(());
        }
        match input.keycode {
            Some(KeyCode::Escape) => {
                info!("quit");
                ctx.request_quit();
            }
            Some(key) => {
                if !self.wheel.key_pressed(key) {
                    debug!("unbound key {:?}", key);
                }
            }
            None => {}
        }
        Ok(())
    }
}
