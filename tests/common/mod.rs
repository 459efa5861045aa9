// Rust-upgrade (https://github.com/rust-lang/rust/issues/46379):
//   remove `#[allow(dead_code)]` before public functions.

use std::time::Duration;

use go_clock::{ClockState, Countdown, GameRules, NodeId, SoundCue};
use instant::Instant;


#[allow(dead_code)]
pub fn running_clock(time: f64, periods_left: Option<u32>, stones_left: Option<u32>) -> ClockState {
    ClockState {
        time: Some(time),
        periods_left,
        stones_left,
        running: true,
        paused: false,
    }
}

// Feeds a countdown with ticks at a fixed cadence, the way a real driver would, but using
// synthetic time.
pub struct TickDriver {
    pub countdown: Countdown,
    pub start: Instant,
    pub now: Instant,
    pub cues: Vec<SoundCue>,
}

impl TickDriver {
    #[allow(dead_code)]
    pub fn new(rules: GameRules, node_id: NodeId, clock: ClockState) -> Self {
        let start = Instant::now();
        let overtime = rules.overtime().unwrap();
        TickDriver {
            countdown: Countdown::new(overtime, Some(node_id), clock, start),
            start,
            now: start,
            cues: vec![],
        }
    }

    #[allow(dead_code)]
    pub fn advance(&mut self, d: Duration) {
        self.now += d;
        let token = self.countdown.tick_token().unwrap();
        if let Some(cue) = self.countdown.tick(token, self.now) {
            self.cues.push(cue);
        }
    }

    #[allow(dead_code)]
    pub fn advance_ticks(&mut self, num_ticks: u32) -> Vec<f64> {
        (0..num_ticks)
            .map(|_| {
                self.advance(go_clock::TICK_INTERVAL);
                self.countdown.display().seconds.unwrap()
            })
            .collect()
    }

    #[allow(dead_code)]
    pub fn num_cues(&self, cue: SoundCue) -> usize {
        self.cues.iter().filter(|c| **c == cue).count()
    }
}
