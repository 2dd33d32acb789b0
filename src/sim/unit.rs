/// The suspendable-work contract shared by every animation.
///
/// A unit is a state machine advanced exactly one atomic sub-step per call;
/// "yielding" in the coroutine sense is simply returning from `step`. All
/// coroutine locals (position, phase, counters) live as fields on the unit.
/// The canonical rhythm is draw, yield, erase, yield: between any two
/// scheduler ticks a unit has at most one visible paint on the canvas.

use crate::ui::canvas::Canvas;
use crate::ui::input::ControlSample;
use crate::ui::sound::SoundEngine;

/// Result of one step. A unit returning Done (on the step that completes
/// its final erase) is retired and never stepped again.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Continue,
    Done,
}

/// Everything a unit may touch during its step. The canvas is the only
/// shared mutable resource; exactly one unit borrows it at a time by
/// construction (single-threaded cooperative scheduling).
pub struct TickCtx<'a> {
    pub canvas: &'a mut Canvas,
    pub controls: ControlSample,
    pub sound: Option<&'a SoundEngine>,
}

pub trait Unit {
    fn step(&mut self, ctx: &mut TickCtx) -> Status;
}
