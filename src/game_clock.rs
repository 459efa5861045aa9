use instant::Instant;

use crate::clock_state::{ClockState, NodeId, OvertimeRules};
use crate::countdown::Countdown;
use crate::display::{format_seconds, ClockShowing};
use crate::schedule::TickToken;
use crate::sound::SoundPlayer;


// Clock widget for one player. Only the active clock counts down; the inactive one shows the time
// left as of the end of the player's last turn.
#[derive(Debug)]
pub struct GameClock {
    overtime: Option<OvertimeRules>,
    node_id: Option<NodeId>,
    clock: ClockState,
    time_left: f64,
    // Present iff the clock is active.
    countdown: Option<Countdown>,
}

impl GameClock {
    pub fn new(overtime: Option<OvertimeRules>, clock: ClockState, time_left: f64) -> Self {
        GameClock {
            overtime,
            node_id: None,
            clock,
            time_left,
            countdown: None,
        }
    }

    pub fn is_active(&self) -> bool { self.countdown.is_some() }
    pub fn node_id(&self) -> Option<NodeId> { self.node_id }
    pub fn countdown(&self) -> Option<&Countdown> { self.countdown.as_ref() }
    pub fn tick_token(&self) -> Option<TickToken> { self.countdown.as_ref()?.tick_token() }

    // Returns the tick token the driver should use from now on, or `None` if the clock does not
    // need ticks. The driver should drop its timer whenever the token changes.
    pub fn update(
        &mut self, active: bool, node_id: Option<NodeId>, clock: ClockState, time_left: f64,
        now: Instant,
    ) -> Option<TickToken> {
        self.node_id = node_id;
        self.clock = clock;
        self.time_left = time_left;
        if !active {
            if let Some(mut countdown) = self.countdown.take() {
                countdown.cancel();
            }
        } else if let Some(countdown) = &mut self.countdown {
            countdown.update(node_id, clock, now);
        } else {
            self.countdown = Some(Countdown::new(self.overtime, node_id, clock, now));
        }
        self.tick_token()
    }

    pub fn tick(&mut self, token: TickToken, now: Instant, player: &mut impl SoundPlayer) {
        if let Some(countdown) = &mut self.countdown {
            if let Some(cue) = countdown.tick(token, now) {
                player.play(cue);
            }
        }
    }

    pub fn showing(&self) -> ClockShowing {
        match &self.countdown {
            Some(countdown) => countdown.showing(),
            None => ClockShowing {
                time: format_seconds(Some(self.time_left)),
                qualifier: String::new(),
                urgent: false,
            },
        }
    }

    pub fn class_name(&self) -> String {
        let mut class_name = "GameClock".to_owned();
        if self.is_active() {
            class_name += " GameClock-active";
            if self.clock.running && !self.clock.paused {
                class_name += " GameClock-running";
            }
        } else {
            class_name += " GameClock-inactive";
        }
        if self.clock.paused {
            class_name += " GameClock-paused";
        }
        class_name
    }

    pub fn countdown_class_name(&self) -> &'static str {
        if self.showing().urgent { "TimeCountdown TimeCountdown-urgent" } else { "TimeCountdown" }
    }
}


#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::sound::SoundCue;

    fn running(time: f64) -> ClockState {
        ClockState { time: Some(time), running: true, ..ClockState::default() }
    }

    #[test]
    fn inactive_clock_is_frozen() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(None, running(100.0), 100.0);
        assert_eq!(clock.update(false, Some(1), running(100.0), 95.4, t0), None);
        assert_eq!(clock.showing().ui_string(), "1:36 ");
        assert_eq!(clock.class_name(), "GameClock GameClock-inactive");
        assert_eq!(clock.countdown_class_name(), "TimeCountdown");
    }

    #[test]
    fn activation_lifecycle() {
        let t0 = Instant::now();
        let mut clock = GameClock::new(None, running(100.0), 100.0);
        let token = clock.update(true, Some(1), running(100.0), 100.0, t0).unwrap();
        assert_eq!(clock.class_name(), "GameClock GameClock-active GameClock-running");

        let mut cues = vec![];
        clock.tick(token, t0 + Duration::from_millis(700), &mut |cue: SoundCue| {
            cues.push(cue)
        });
        assert_eq!(clock.showing().time, "1:39");

        assert_eq!(clock.update(false, Some(2), running(99.0), 99.0, t0), None);
        clock.tick(token, t0 + Duration::from_secs(200), &mut |cue: SoundCue| {
            cues.push(cue)
        });
        assert_eq!(clock.showing().time, "1:39");
        assert_eq!(cues, Vec::<SoundCue>::new());
    }

    #[test]
    fn paused_class_name() {
        let t0 = Instant::now();
        let paused = ClockState { paused: true, ..running(10.0) };
        let mut clock = GameClock::new(None, paused, 10.0);
        clock.update(true, Some(1), paused, 10.0, t0);
        assert_eq!(clock.class_name(), "GameClock GameClock-active GameClock-paused");
    }
}
