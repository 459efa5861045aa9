use std::time::Duration;

use instant::Instant;
use log::{debug, trace};

use crate::clock_state::{ClockState, NodeId, OvertimeRules};
use crate::display::{is_sudden_death, ClockShowing};
use crate::overtime::{resolve_overtime, DisplayTriple};
use crate::schedule::{TickSchedule, TickToken};
use crate::sound::{CueTrigger, SoundCue};


// Snapshots reach the screen somewhat late due to network and rendering. Pretend that each
// snapshot was taken this much earlier than it was received.
pub const LAG_COMPENSATION: Duration = Duration::from_millis(300);

// Local time at which the current snapshot became valid.
//
// We would like to store `received_at - LAG_COMPENSATION`, but this could panic because Rust
// doesn't allow for negative durations and `Instant` may be close to its epoch. So the
// compensation is applied when measuring elapsed time instead.
#[derive(Clone, Copy, Debug)]
pub struct Anchor {
    received_at: Instant,
}

impl Anchor {
    pub fn new(received_at: Instant) -> Self { Anchor { received_at } }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.received_at) + LAG_COMPENSATION
    }
}

// The part of a snapshot that defines the countdown. Running/paused flags are not included:
// toggling them does not restart the countdown.
#[derive(Clone, Copy, PartialEq, Debug)]
struct SnapshotKey {
    node_id: Option<NodeId>,
    time: Option<f64>,
    periods_left: Option<u32>,
    stones_left: Option<u32>,
}

impl SnapshotKey {
    fn new(node_id: Option<NodeId>, clock: &ClockState) -> Self {
        SnapshotKey {
            node_id,
            time: clock.time,
            periods_left: clock.periods_left,
            stones_left: clock.stones_left,
        }
    }
}

// Countdown for one player's clock. Projects the latest server snapshot forward using local time.
//
// Each instance owns its state and is driven by ticks from a single driver, so no
// synchronization is needed.
#[derive(Debug)]
pub struct Countdown {
    overtime: Option<OvertimeRules>,
    clock: ClockState,
    key: SnapshotKey,
    anchor: Anchor,
    display: DisplayTriple,
    cue_trigger: CueTrigger,
    schedule: TickSchedule,
}

impl Countdown {
    pub fn new(
        overtime: Option<OvertimeRules>, node_id: Option<NodeId>, clock: ClockState, now: Instant,
    ) -> Self {
        let mut countdown = Countdown {
            overtime,
            clock,
            key: SnapshotKey::new(node_id, &clock),
            anchor: Anchor::new(now),
            display: DisplayTriple::from_snapshot(&clock),
            cue_trigger: CueTrigger::new(),
            schedule: TickSchedule::new(),
        };
        countdown.schedule.restart();
        countdown
    }

    pub fn clock(&self) -> &ClockState { &self.clock }
    pub fn anchor(&self) -> Anchor { self.anchor }
    pub fn display(&self) -> DisplayTriple { self.display }
    pub fn tick_token(&self) -> Option<TickToken> { self.schedule.current() }
    pub fn previous_seconds(&self) -> Option<i64> { self.cue_trigger.previous_seconds() }

    fn is_counting(&self) -> bool {
        self.clock.running && !self.clock.paused && self.clock.time.is_some()
    }

    // What the clock face should show: the projected values while the clock is counting, the
    // snapshot as is otherwise.
    pub fn showing_triple(&self) -> DisplayTriple {
        if self.is_counting() { self.display } else { DisplayTriple::frozen(&self.clock) }
    }

    pub fn showing(&self) -> ClockShowing { ClockShowing::new(&self.showing_triple()) }

    // Accepts a new snapshot. Returns true if the countdown was restarted, in which case the
    // driver must switch to the new tick token: ticks with the old one are ignored from now on.
    //
    // Snapshots that differ only in running/paused flags keep the anchor.
    pub fn update(&mut self, node_id: Option<NodeId>, clock: ClockState, now: Instant) -> bool {
        let key = SnapshotKey::new(node_id, &clock);
        self.clock = clock;
        if key == self.key {
            return false;
        }
        self.key = key;
        self.anchor = Anchor::new(now);
        self.display = DisplayTriple::from_snapshot(&clock);
        self.cue_trigger.reset();
        let token = self.schedule.restart();
        debug!("Clock re-anchored to {clock:?} at node {node_id:?}, tick token {token:?}");
        true
    }

    // Stops the countdown for good, e.g. when the clock is no longer displayed.
    pub fn cancel(&mut self) { self.schedule.cancel(); }

    // Periodic re-evaluation. Returns a low time warning to play, if any.
    pub fn tick(&mut self, token: TickToken, now: Instant) -> Option<SoundCue> {
        if !self.schedule.accepts(token) {
            trace!("Dropping stale tick {token:?}");
            return None;
        }
        self.display = self.evaluate(now);
        if !self.is_counting() {
            return None;
        }
        let seconds = self.display.seconds?;
        self.cue_trigger.observe(seconds, is_sudden_death(&self.display))
    }

    fn evaluate(&self, now: Instant) -> DisplayTriple {
        let elapsed = self.anchor.elapsed(now).as_secs_f64();
        let main_time = self.clock.time.unwrap_or(0.0) - elapsed;
        if main_time > 0.0 {
            DisplayTriple {
                seconds: Some(main_time),
                periods: self.clock.periods_left,
                stones: self.clock.stones_left,
            }
        } else {
            resolve_overtime(main_time, &self.clock, self.overtime.as_ref())
        }
    }
}
