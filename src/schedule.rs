use std::time::Duration;

use log::debug;


pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

// Identifies one run of the periodic re-evaluation. A driver obtains a token when the schedule
// starts and passes it with every tick; ticks with a token that is no longer current are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TickToken {
    generation: u64,
}

// Periodic re-evaluation owned by a single clock. The schedule does not run any timers itself:
// the driver (terminal event loop, browser interval) does. This lets the clock cancel a timer
// deterministically by invalidating its token, whatever the timer implementation.
#[derive(Debug)]
pub struct TickSchedule {
    next_generation: u64,
    current: Option<TickToken>,
}

impl TickSchedule {
    pub fn new() -> Self { TickSchedule { next_generation: 0, current: None } }

    pub fn current(&self) -> Option<TickToken> { self.current }
    pub fn is_running(&self) -> bool { self.current.is_some() }
    pub fn accepts(&self, token: TickToken) -> bool { self.current == Some(token) }

    // Starts a new run, superseding the previous one if any.
    pub fn restart(&mut self) -> TickToken {
        let token = TickToken { generation: self.next_generation };
        self.next_generation += 1;
        if let Some(old) = self.current.replace(token) {
            debug!("Tick schedule {} superseded by {}", old.generation, token.generation);
        }
        token
    }

    // No-op if the schedule is not running.
    pub fn cancel(&mut self) {
        if let Some(old) = self.current.take() {
            debug!("Tick schedule {} cancelled", old.generation);
        }
    }
}
