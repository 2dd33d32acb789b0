/// Blinking star.
///
/// Waits out an initial delay (randomized per star to break synchrony),
/// then repeats a fixed brightness cycle forever: dim 8 ticks, normal 1,
/// bold 6, normal 4. The glyph is repainted at the phase brightness on the
/// first tick of each phase and left in place for the rest of it.

use crate::sim::unit::{Status, TickCtx, Unit};
use crate::ui::canvas::Brightness;

const CYCLE: [(Brightness, u32); 4] = [
    (Brightness::Dim, 8),
    (Brightness::Normal, 1),
    (Brightness::Bold, 6),
    (Brightness::Normal, 4),
];

pub struct Blinker {
    row: i32,
    col: i32,
    glyph: char,
    delay: u32,
    phase: usize,
    ticks_in_phase: u32,
}

impl Blinker {
    pub fn new(row: i32, col: i32, glyph: char, delay: u32) -> Self {
        Blinker { row, col, glyph, delay, phase: 0, ticks_in_phase: 0 }
    }

    #[cfg(test)]
    pub fn position(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

impl Unit for Blinker {
    fn step(&mut self, ctx: &mut TickCtx) -> Status {
        if self.delay > 0 {
            self.delay -= 1;
            return Status::Continue;
        }

        let (bright, len) = CYCLE[self.phase];
        if self.ticks_in_phase == 0 {
            ctx.canvas.draw_glyph(self.row, self.col, self.glyph, bright, false);
        }

        self.ticks_in_phase += 1;
        if self.ticks_in_phase == len {
            self.ticks_in_phase = 0;
            self.phase = (self.phase + 1) % CYCLE.len();
        }

        Status::Continue
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════
