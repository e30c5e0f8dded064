use ggez::event::run;
use ggez::ContextBuilder;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger};

use pixel_snake::app::App;
use pixel_snake::error::{Error, ErrorConversion, Result};
use pixel_snake::prefs::Prefs;

fn main() -> Result {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(e) = SimpleLogger::init(level, Config::default()) {
        eprintln!("failed to initialize logger: {}", e);
    }

    info!("=== Pixel Snake ===");

    let app = App::new(Prefs::default()).with_trace_step("main")?;

    let (ctx, event_loop) = ContextBuilder::new("pixel_snake", "gorilskij")
        .window_setup(app.window_setup())
        .window_mode(app.window_mode())
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    info!("beginning game loop");
    run(ctx, event_loop, app)
}
