use crate::clock_state::{ClockState, OvertimeRules};


// Values actually shown on the clock face.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct DisplayTriple {
    pub seconds: Option<f64>,
    pub periods: Option<u32>,
    pub stones: Option<u32>,
}

impl DisplayTriple {
    // What the clock shows right after a snapshot arrives, before any local time has passed.
    pub fn from_snapshot(clock: &ClockState) -> Self {
        DisplayTriple {
            seconds: Some(clock.time.unwrap_or(0.0)),
            periods: clock.periods_left,
            stones: clock.stones_left,
        }
    }

    // Raw snapshot values, shown while the clock is stopped.
    pub fn frozen(clock: &ClockState) -> Self {
        DisplayTriple {
            seconds: clock.time,
            periods: clock.periods_left,
            stones: clock.stones_left,
        }
    }
}

// Computes the clock face once main time is exhausted. `main_time` is the main time left
// according to local projection, so here it is zero or negative and `-main_time` is the time
// spent in overtime since the snapshot.
//
// Modes are tried in order: no overtime, byo-yomi periods, Canadian stones. Anything that does
// not fit settles at zero.
pub fn resolve_overtime(
    main_time: f64, clock: &ClockState, rules: Option<&OvertimeRules>,
) -> DisplayTriple {
    debug_assert!(main_time <= 0.0 || main_time.is_nan(), "{main_time}");
    let mut display = DisplayTriple {
        seconds: Some(0.0),
        periods: clock.periods_left,
        stones: clock.stones_left,
    };
    let Some(rules) = rules else {
        return display;
    };

    if let (Some(snapshot_periods), Some(total_periods)) = (clock.periods_left, rules.periods) {
        // Zero periods in a snapshot means the player has just run out of main time and is
        // entering the first period, which gives them the full grant.
        let periods_left = if snapshot_periods == 0 { total_periods } else { snapshot_periods };
        let overrun = -main_time;
        let periods_consumed = (overrun / rules.time).floor();
        let periods = (periods_left as f64 - periods_consumed).max(0.0) as u32;
        display.periods = Some(periods);
        if periods > 0 {
            let fully_consumed = periods_left.saturating_sub(periods) as f64;
            let seconds = rules.time + main_time + rules.time * fully_consumed;
            display.seconds = Some(clamp_seconds(seconds));
        }
    } else if clock.stones_left == Some(0) && rules.stones.is_some() {
        // The previous block lapsed with no stones played: a fresh block starts and the overrun
        // is taken out of its allotment.
        display.stones = rules.stones;
        display.seconds = Some(clamp_seconds(rules.time + main_time));
    }
    display
}

fn clamp_seconds(seconds: f64) -> f64 { seconds.max(0.0) }
