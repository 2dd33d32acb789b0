/// Start-of-session population.
///
/// One projectile fired from the start cell, a field of randomly placed
/// blinking stars, and the steerable rocket sprite, registered in that
/// order so the rocket paints on top of the stars within a tick. The RNG
/// is injected so a fixed seed reproduces the exact population in tests.

use crate::config::AppConfig;
use crate::domain::frame::Frame;
use crate::domain::rng::Rng;
use crate::sim::blinker::Blinker;
use crate::sim::projectile::Projectile;
use crate::sim::scheduler::Scheduler;
use crate::sim::sprite::Sprite;

pub const STAR_GLYPHS: [char; 4] = ['*', '+', '.', ':'];

/// Initial blink delays are spread over [1, 10] ticks.
const MAX_STAR_DELAY: u32 = 10;

pub fn populate(
    scheduler: &mut Scheduler,
    config: &AppConfig,
    height: usize,
    width: usize,
    frames: Vec<Frame>,
    rng: &mut Rng,
) {
    let (start_row, start_col) = start_cell(config, height, width);

    scheduler.spawn(Box::new(Projectile::new(
        start_row,
        start_col,
        config.shot_row_speed,
        config.shot_col_speed,
    )));

    for star in star_field(rng, config.particles, height, width) {
        scheduler.spawn(Box::new(star));
    }

    scheduler.spawn(Box::new(Sprite::centered(start_row, start_col, frames)));
}

/// Start cell for the sprite and the shot: configured, or the grid center
/// when the config leaves it at (0, 0).
fn start_cell(config: &AppConfig, height: usize, width: usize) -> (f64, f64) {
    if config.start_row == 0 && config.start_col == 0 {
        ((height / 2) as f64, (width / 2) as f64)
    } else {
        (config.start_row as f64, config.start_col as f64)
    }
}

/// Random star population: interior positions only (the one-cell border
/// stays clear), glyphs from STAR_GLYPHS, delays in [1, MAX_STAR_DELAY].
pub fn star_field(rng: &mut Rng, count: u32, height: usize, width: usize) -> Vec<Blinker> {
    let row_hi = height.saturating_sub(2).max(1) as u32;
    let col_hi = width.saturating_sub(2).max(1) as u32;

    (0..count)
        .map(|_| {
            let row = rng.pick_in(1, row_hi) as i32;
            let col = rng.pick_in(1, col_hi) as i32;
            let glyph = *rng.choose(&STAR_GLYPHS);
            let delay = rng.pick_in(1, MAX_STAR_DELAY);
            Blinker::new(row, col, glyph, delay)
        })
        .collect()
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
