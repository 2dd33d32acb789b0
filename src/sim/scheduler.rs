/// Cooperative scheduler: owns the live set of animation units and drives
/// each one exactly one step per tick, in the stable order they occupy the
/// set. Units that report Done are retired during the pass; units spawned
/// from inside a step are parked and join the live set only at the tick
/// boundary, so the current pass is never iterating a mutating list.

use crate::sim::unit::{Status, TickCtx, Unit};

pub struct Scheduler {
    live: Vec<Box<dyn Unit>>,
    pending: Vec<Box<dyn Unit>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Scheduler { live: Vec::new(), pending: Vec::new() }
    }

    /// Register a unit. Before the first tick this is immediate; during a
    /// tick the unit is parked until the tick boundary.
    pub fn spawn(&mut self, unit: Box<dyn Unit>) {
        self.pending.push(unit);
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.live.len() + self.pending.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Advance every live unit one step; retire the finished ones; then
    /// admit pending spawns. Pacing and rendering belong to the caller.
    pub fn tick(&mut self, ctx: &mut TickCtx) {
        // Admit anything spawned before this tick
        self.live.append(&mut self.pending);

        self.live.retain_mut(|unit| unit.step(ctx) == Status::Continue);
    }
}

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::{Brightness, Canvas};
    use crate::ui::input::ControlSample;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Paints its tag each step so tests can observe order, then finishes
    /// after a fixed number of steps.
    struct Countdown {
        tag: char,
        steps_left: u32,
        log: Rc<RefCell<Vec<char>>>,
    }

    impl Unit for Countdown {
        fn step(&mut self, ctx: &mut TickCtx) -> Status {
            self.log.borrow_mut().push(self.tag);
            ctx.canvas.draw_glyph(0, 0, self.tag, Brightness::Normal, false);
            self.steps_left -= 1;
            if self.steps_left == 0 { Status::Done } else { Status::Continue }
        }
    }

    fn run_tick(sched: &mut Scheduler, canvas: &mut Canvas) {
        let mut ctx = TickCtx {
            canvas,
            controls: ControlSample::default(),
            sound: None,
        };
        sched.tick(&mut ctx);
    }

    fn countdown(tag: char, steps: u32, log: &Rc<RefCell<Vec<char>>>) -> Box<Countdown> {
        Box::new(Countdown { tag, steps_left: steps, log: Rc::clone(log) })
    }

    #[test]
    fn units_advance_in_spawn_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = Scheduler::new();
        sched.spawn(countdown('a', 2, &log));
        sched.spawn(countdown('b', 2, &log));
        sched.spawn(countdown('c', 2, &log));

        let mut canvas = Canvas::new(5, 5);
        run_tick(&mut sched, &mut canvas);
        run_tick(&mut sched, &mut canvas);
        assert_eq!(*log.borrow(), vec!['a', 'b', 'c', 'a', 'b', 'c']);
    }

    #[test]
    fn finished_units_are_retired_and_never_stepped_again() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = Scheduler::new();
        sched.spawn(countdown('a', 1, &log));
        sched.spawn(countdown('b', 3, &log));

        let mut canvas = Canvas::new(5, 5);
        run_tick(&mut sched, &mut canvas);
        assert_eq!(sched.len(), 1);
        run_tick(&mut sched, &mut canvas);
        run_tick(&mut sched, &mut canvas);
        assert!(sched.is_empty());
        assert_eq!(*log.borrow(), vec!['a', 'b', 'b', 'b']);
    }

    #[test]
    fn survivors_keep_their_relative_order_after_retirement() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = Scheduler::new();
        sched.spawn(countdown('a', 1, &log));
        sched.spawn(countdown('b', 2, &log));
        sched.spawn(countdown('c', 1, &log));
        sched.spawn(countdown('d', 2, &log));

        let mut canvas = Canvas::new(5, 5);
        run_tick(&mut sched, &mut canvas);
        run_tick(&mut sched, &mut canvas);
        assert_eq!(*log.borrow(), vec!['a', 'b', 'c', 'd', 'b', 'd']);
    }

    #[test]
    fn pending_spawns_join_at_the_tick_boundary() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut sched = Scheduler::new();
        sched.spawn(countdown('a', 2, &log));

        let mut canvas = Canvas::new(5, 5);
        run_tick(&mut sched, &mut canvas);
        // Spawned mid-session: not stepped until the next tick
        sched.spawn(countdown('x', 1, &log));
        assert_eq!(*log.borrow(), vec!['a']);
        run_tick(&mut sched, &mut canvas);
        assert_eq!(*log.borrow(), vec!['a', 'a', 'x']);
    }
}
