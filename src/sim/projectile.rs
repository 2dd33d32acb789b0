/// Projectile shot.
///
/// Launch sequence: muzzle flash `*`, yield; shell `O`, yield; erase,
/// advance, fire the one-shot audio cue; then straight-line flight with
/// the trajectory glyph (`-` horizontal, `|` otherwise), one paint and one
/// erase-and-advance per pair of ticks, until the position leaves the
/// field interior. Done lands on the step that completes the final erase.

use crate::sim::unit::{Status, TickCtx, Unit};
use crate::ui::canvas::Brightness;

enum State {
    Flash,
    Shell,
    /// Erase the shell, advance, beep, then enter flight.
    Launch,
    /// A trajectory glyph is on the canvas awaiting its erase.
    FlyErase,
    /// Position advanced; paint the next trajectory glyph (or finish).
    FlyPaint,
    Finished,
}

pub struct Projectile {
    row: f64,
    col: f64,
    row_speed: f64,
    col_speed: f64,
    glyph: char,
    state: State,
    drawn_at: (i32, i32),
}

impl Projectile {
    pub fn new(start_row: f64, start_col: f64, row_speed: f64, col_speed: f64) -> Self {
        Projectile {
            row: start_row,
            col: start_col,
            row_speed,
            col_speed,
            glyph: if col_speed != 0.0 { '-' } else { '|' },
            state: State::Flash,
            drawn_at: (0, 0),
        }
    }

    fn rounded(&self) -> (i32, i32) {
        (self.row.round() as i32, self.col.round() as i32)
    }

    fn advance(&mut self) {
        self.row += self.row_speed;
        self.col += self.col_speed;
    }

    /// Strictly inside the field, border excluded on every side.
    /// A degenerate zero-dimension field has no interior.
    fn in_interior(&self, height: usize, width: usize) -> bool {
        let (max_row, max_col) = (height.saturating_sub(1) as f64, width.saturating_sub(1) as f64);
        0.0 < self.row && self.row < max_row && 0.0 < self.col && self.col < max_col
    }
}

impl Unit for Projectile {
    fn step(&mut self, ctx: &mut TickCtx) -> Status {
        match self.state {
            State::Flash => {
                let at = self.rounded();
                ctx.canvas.draw_glyph(at.0, at.1, '*', Brightness::Normal, false);
                self.drawn_at = at;
                self.state = State::Shell;
                Status::Continue
            }
            State::Shell => {
                let at = self.rounded();
                ctx.canvas.draw_glyph(at.0, at.1, 'O', Brightness::Normal, false);
                self.drawn_at = at;
                self.state = State::Launch;
                Status::Continue
            }
            State::Launch => {
                ctx.canvas.draw_glyph(self.drawn_at.0, self.drawn_at.1, ' ', Brightness::Normal, true);
                self.advance();
                if let Some(sound) = ctx.sound {
                    sound.play_fire();
                }
                self.state = State::FlyPaint;
                self.fly_paint(ctx)
            }
            State::FlyErase => {
                ctx.canvas.draw_glyph(self.drawn_at.0, self.drawn_at.1, ' ', Brightness::Normal, true);
                self.advance();
                self.state = State::FlyPaint;
                self.fly_paint(ctx)
            }
            State::FlyPaint => self.fly_paint(ctx),
            State::Finished => Status::Done,
        }
    }
}

impl Projectile {
    fn fly_paint(&mut self, ctx: &mut TickCtx) -> Status {
        let (height, width) = ctx.canvas.dimensions();
        if !self.in_interior(height, width) {
            self.state = State::Finished;
            return Status::Done;
        }
        let at = self.rounded();
        ctx.canvas.draw_glyph(at.0, at.1, self.glyph, Brightness::Normal, false);
        self.drawn_at = at;
        self.state = State::FlyErase;
        Status::Continue
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
