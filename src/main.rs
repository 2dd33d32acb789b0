/// Entry point and tick loop.

mod config;
mod domain;
mod sim;
mod ui;

use std::time::{Duration, Instant};

use config::AppConfig;
use domain::frame::Frame;
use domain::rng::Rng;
use sim::assets;
use sim::scene;
use sim::scheduler::Scheduler;
use sim::unit::TickCtx;
use ui::canvas::Canvas;
use ui::input::InputReader;
use ui::renderer::Renderer;
use ui::sound::SoundEngine;

fn main() {
    let config = AppConfig::load();

    // Assets are validated before the terminal enters raw mode: a missing
    // or empty frame aborts with a readable message.
    let frames = match assets::load_rocket_frames(&config.frames_dir) {
        Ok(frames) => frames,
        Err(e) => {
            eprintln!("Frame asset error: {e}");
            std::process::exit(1);
        }
    };

    let (height, width) = Renderer::screen_size();
    let mut renderer = Renderer::new(height, width);

    if let Err(e) = renderer.init() {
        eprintln!("Terminal init failed: {e}");
        std::process::exit(1);
    }

    let sound = SoundEngine::new();

    let result = animation_loop(&config, frames, &mut renderer, sound.as_ref(), height, width);

    if let Err(e) = renderer.cleanup() {
        eprintln!("Terminal cleanup failed: {e}");
    }

    if let Err(e) = result {
        eprintln!("Animation error: {e}");
        std::process::exit(1);
    }
}

fn animation_loop(
    config: &AppConfig,
    frames: Vec<Frame>,
    renderer: &mut Renderer,
    sound: Option<&SoundEngine>,
    height: usize,
    width: usize,
) -> std::io::Result<()> {
    let mut canvas = Canvas::new(height, width);
    canvas.draw_border();

    let mut rng = if config.seed == 0 {
        Rng::from_clock()
    } else {
        Rng::new(config.seed)
    };

    let mut scheduler = Scheduler::new();
    scene::populate(&mut scheduler, config, height, width, frames, &mut rng);

    let mut input = InputReader::new();
    let tick_rate = Duration::from_millis(config.tick_rate_ms);

    loop {
        let tick_start = Instant::now();

        let controls = input.sample();
        if input.quit_requested() {
            break;
        }

        let mut ctx = TickCtx { canvas: &mut canvas, controls, sound };
        scheduler.tick(&mut ctx);

        renderer.present(&canvas)?;

        // Pace to the fixed tick interval; an overrunning tick just makes
        // the next one start late, there is no catch-up.
        if let Some(rest) = tick_rate.checked_sub(tick_start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    Ok(())
}
