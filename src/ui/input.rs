/// Keyboard sampling.
///
/// Once per tick, all pending terminal events are drained without blocking
/// (`poll(Duration::ZERO)`) and reduced to a ControlSample: one delta per
/// axis (last key on an axis wins) plus the action flag. The reduction over
/// key codes is a pure function so tests can feed synthetic sequences.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, poll};

/// Per-tick control state. Not retained across ticks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSample {
    pub row_delta: i32,
    pub col_delta: i32,
    /// Space. Recorded but consumed by no behavior (reserved).
    #[allow(dead_code)]
    pub action: bool,
}

pub struct InputReader {
    quit: bool,
}

impl InputReader {
    pub fn new() -> Self {
        InputReader { quit: false }
    }

    /// Drain every pending key event and reduce to this tick's sample.
    /// Never blocks: returns the zero sample when no events are pending.
    pub fn sample(&mut self) -> ControlSample {
        let mut sample = ControlSample::default();

        while poll(Duration::ZERO).unwrap_or(false) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if key.modifiers.contains(KeyModifiers::CONTROL)
                        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
                    {
                        self.quit = true;
                        continue;
                    }
                    apply_key(&mut sample, key.code);
                    if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q')) {
                        self.quit = true;
                    }
                }
                _ => {}
            }
        }

        sample
    }

    /// Set once Esc, `q`, or Ctrl-C has been seen; the loop exits cleanly.
    pub fn quit_requested(&self) -> bool {
        self.quit
    }
}

/// Fold one key code into the sample. Later keys on the same axis replace
/// earlier ones; opposite arrows in one tick do not cancel, the last wins.
pub fn apply_key(sample: &mut ControlSample, code: KeyCode) {
    match code {
        KeyCode::Up => sample.row_delta = -1,
        KeyCode::Down => sample.row_delta = 1,
        KeyCode::Left => sample.col_delta = -1,
        KeyCode::Right => sample.col_delta = 1,
        KeyCode::Char(' ') => sample.action = true,
        _ => {}
    }
}

#[cfg(test)]
pub fn reduce_keys(codes: &[KeyCode]) -> ControlSample {
    let mut sample = ControlSample::default();
    for &code in codes {
        apply_key(&mut sample, code);
    }
    sample
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_keys_is_zero_sample() {
        assert_eq!(reduce_keys(&[]), ControlSample::default());
    }

    #[test]
    fn arrows_map_to_axis_deltas() {
        let s = reduce_keys(&[KeyCode::Up, KeyCode::Left]);
        assert_eq!((s.row_delta, s.col_delta), (-1, -1));
        let s = reduce_keys(&[KeyCode::Down, KeyCode::Right]);
        assert_eq!((s.row_delta, s.col_delta), (1, 1));
    }

    #[test]
    fn last_key_on_an_axis_wins() {
        let s = reduce_keys(&[KeyCode::Up, KeyCode::Down]);
        assert_eq!(s.row_delta, 1);
        let s = reduce_keys(&[KeyCode::Right, KeyCode::Left, KeyCode::Right]);
        assert_eq!(s.col_delta, 1);
    }

    #[test]
    fn axes_accumulate_independently() {
        let s = reduce_keys(&[KeyCode::Up, KeyCode::Right, KeyCode::Down]);
        assert_eq!((s.row_delta, s.col_delta), (1, 1));
    }

    #[test]
    fn space_sets_action_and_sticks() {
        let s = reduce_keys(&[KeyCode::Char(' '), KeyCode::Up]);
        assert!(s.action);
        assert_eq!(s.row_delta, -1);
    }

    #[test]
    fn unmapped_keys_are_ignored() {
        let s = reduce_keys(&[KeyCode::Char('x'), KeyCode::Enter, KeyCode::F(1)]);
        assert_eq!(s, ControlSample::default());
    }
}
