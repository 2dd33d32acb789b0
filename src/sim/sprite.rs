/// Steerable rocket sprite.
///
/// Runs for the session lifetime (never Done), cycling through its frames.
/// Each frame lasts two paint/erase sub-phases; the paint half of a phase
/// samples this tick's controls, moves, clamps the bounding box inside the
/// field interior, and paints; the erase half blanks the same spot.

use crate::domain::frame::Frame;
use crate::sim::unit::{Status, TickCtx, Unit};

/// One-cell border reserved on all sides of the field.
const BORDER: f64 = 1.0;

/// Sub-phases per frame before the cycle advances.
const SUBPHASES_PER_FRAME: u32 = 2;

enum Phase {
    Paint,
    Erase,
}

pub struct Sprite {
    row: f64,
    col: f64,
    frames: Vec<Frame>,
    frame_idx: usize,
    phase: Phase,
    subphase: u32,
    /// Rounded position of the last paint; the matching erase must land
    /// exactly there even if the position has since moved.
    drawn_at: (i32, i32),
}

impl Sprite {
    /// Place the sprite so its first frame is centered on the given cell.
    /// `frames` must be non-empty (asset loading guarantees it).
    pub fn centered(center_row: f64, center_col: f64, frames: Vec<Frame>) -> Self {
        let (rows, cols) = frames[0].size();
        Sprite {
            row: center_row.round() - (rows as f64 / 2.0).round(),
            col: center_col.round() - (cols as f64 / 2.0).round(),
            frames,
            frame_idx: 0,
            phase: Phase::Paint,
            subphase: 0,
            drawn_at: (0, 0),
        }
    }

    /// Top-left of the bounding box, for inspection.
    #[cfg(test)]
    pub fn position(&self) -> (f64, f64) {
        (self.row, self.col)
    }
}

impl Unit for Sprite {
    fn step(&mut self, ctx: &mut TickCtx) -> Status {
        match self.phase {
            Phase::Paint => {
                let frame = &self.frames[self.frame_idx];

                self.row += ctx.controls.row_delta as f64;
                self.col += ctx.controls.col_delta as f64;

                let (h, w) = ctx.canvas.dimensions();
                let (row, col) = clamp_box(self.row, self.col, frame.size(), h, w);
                self.row = row;
                self.col = col;

                let at = (self.row.round() as i32, self.col.round() as i32);
                ctx.canvas.draw_frame(at.0, at.1, frame, false);
                self.drawn_at = at;
                self.phase = Phase::Erase;
            }
            Phase::Erase => {
                let frame = &self.frames[self.frame_idx];
                ctx.canvas.draw_frame(self.drawn_at.0, self.drawn_at.1, frame, true);

                self.subphase += 1;
                if self.subphase == SUBPHASES_PER_FRAME {
                    self.subphase = 0;
                    self.frame_idx = (self.frame_idx + 1) % self.frames.len();
                }
                self.phase = Phase::Paint;
            }
        }
        Status::Continue
    }
}

/// Clamp a bounding box of the given size to the field interior.
///
/// The far edge is capped first (against field extent minus border), then
/// the near edge is raised to the border. In that order: a box larger than
/// the field ends up flush at the border instead of at a negative origin.
pub fn clamp_box(row: f64, col: f64, size: (usize, usize), height: usize, width: usize) -> (f64, f64) {
    let (box_rows, box_cols) = (size.0 as f64, size.1 as f64);
    let field_row_max = height as f64 - BORDER;
    let field_col_max = width as f64 - BORDER;

    let row = (row + box_rows).min(field_row_max) - box_rows;
    let col = (col + box_cols).min(field_col_max) - box_cols;

    (row.max(BORDER), col.max(BORDER))
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::Canvas;
    use crate::ui::input::ControlSample;

    fn frames_3x3() -> Vec<Frame> {
        vec![
            Frame::parse("a", "aaa\naaa\naaa").unwrap(),
            Frame::parse("b", "bbb\nbbb\nbbb").unwrap(),
        ]
    }

    fn step_with(sprite: &mut Sprite, canvas: &mut Canvas, controls: ControlSample) -> Status {
        let mut ctx = TickCtx { canvas, controls, sound: None };
        sprite.step(&mut ctx)
    }

    fn no_input(sprite: &mut Sprite, canvas: &mut Canvas) -> Status {
        step_with(sprite, canvas, ControlSample::default())
    }

    // ── clamp_box ──

    #[test]
    fn clamp_in_bounds_is_a_noop() {
        assert_eq!(clamp_box(8.0, 8.0, (3, 3), 20, 20), (8.0, 8.0));
    }

    #[test]
    fn clamp_is_idempotent() {
        let once = clamp_box(-4.0, 25.0, (3, 3), 20, 20);
        let twice = clamp_box(once.0, once.1, (3, 3), 20, 20);
        assert_eq!(once, twice);
    }

    #[test]
    fn clamp_caps_far_edge_at_field_boundary() {
        let (row, col) = clamp_box(30.0, 30.0, (3, 3), 20, 20);
        assert_eq!((row, col), (16.0, 16.0)); // box ends at 19 = 20 - border
    }

    #[test]
    fn clamp_raises_near_edge_to_border() {
        assert_eq!(clamp_box(-5.0, 0.0, (3, 3), 20, 20), (1.0, 1.0));
    }

    #[test]
    fn oversized_box_aligns_flush_not_negative() {
        // Box taller than the field: far-edge cap would push the origin
        // negative; the near-edge clamp applied second wins.
        let (row, col) = clamp_box(5.0, 5.0, (30, 30), 20, 20);
        assert_eq!((row, col), (1.0, 1.0));
    }

    #[test]
    fn clamp_preserves_box_validity() {
        for &(r, c) in &[(-10.0, -10.0), (50.0, 50.0), (0.0, 19.0), (19.0, 0.0)] {
            let (row, col) = clamp_box(r, c, (4, 6), 20, 20);
            assert!(row + 4.0 > row && col + 6.0 > col);
            assert!(row >= 1.0 && col >= 1.0);
        }
    }

    // ── sprite behavior ──

    #[test]
    fn centered_start_is_stable_without_input() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        let start = sprite.position();
        assert_eq!(start, (8.0, 8.0));

        for _ in 0..5 {
            assert_eq!(no_input(&mut sprite, &mut canvas), Status::Continue);
        }
        assert_eq!(sprite.position(), start);
    }

    #[test]
    fn paint_then_erase_leaves_canvas_blank() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        no_input(&mut sprite, &mut canvas);
        assert_eq!(canvas.glyph_at(8, 8), 'a');
        no_input(&mut sprite, &mut canvas);
        assert_eq!(canvas.glyph_at(8, 8), ' ');
    }

    #[test]
    fn frame_advances_after_two_subphases() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        // Two full paint/erase sub-phases of frame 'a'
        for _ in 0..4 {
            no_input(&mut sprite, &mut canvas);
        }
        no_input(&mut sprite, &mut canvas);
        assert_eq!(canvas.glyph_at(8, 8), 'b');
    }

    #[test]
    fn frame_cycle_wraps_around() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        // Two sub-phases of 'a', two of 'b', back to 'a'
        for _ in 0..8 {
            no_input(&mut sprite, &mut canvas);
        }
        no_input(&mut sprite, &mut canvas);
        assert_eq!(canvas.glyph_at(8, 8), 'a');
    }

    #[test]
    fn steering_moves_one_cell_per_paint_phase() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        let up_left = ControlSample { row_delta: -1, col_delta: -1, action: false };
        step_with(&mut sprite, &mut canvas, up_left);
        assert_eq!(sprite.position(), (7.0, 7.0));
        // Erase phase ignores controls
        step_with(&mut sprite, &mut canvas, up_left);
        assert_eq!(sprite.position(), (7.0, 7.0));
    }

    #[test]
    fn steering_cannot_leave_the_border() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        let up = ControlSample { row_delta: -1, col_delta: 0, action: false };
        for _ in 0..40 {
            step_with(&mut sprite, &mut canvas, up);
        }
        assert_eq!(sprite.position().0, 1.0);
    }

    #[test]
    fn erase_lands_where_the_paint_landed() {
        let mut canvas = Canvas::new(20, 20);
        let mut sprite = Sprite::centered(10.0, 10.0, frames_3x3());
        no_input(&mut sprite, &mut canvas); // paint at (8, 8)
        // Move during the erase phase: the erase must still blank (8, 8)
        let down = ControlSample { row_delta: 1, col_delta: 0, action: false };
        step_with(&mut sprite, &mut canvas, down);
        for r in 8..11 {
            for c in 8..11 {
                assert_eq!(canvas.glyph_at(r, c), ' ');
            }
        }
    }
}
