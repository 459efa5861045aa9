use crate::overtime::DisplayTriple;


const URGENT_THRESHOLD_SECS: f64 = 3.0;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClockShowing {
    pub time: String,
    pub qualifier: String,
    pub urgent: bool,
}

impl ClockShowing {
    pub fn new(display: &DisplayTriple) -> Self {
        ClockShowing {
            time: format_seconds(display.seconds),
            qualifier: time_qualifier(display),
            urgent: is_urgent(display),
        }
    }

    pub fn ui_string(&self) -> String { format!("{} {}", self.time, self.qualifier) }
}

// Formats time as "m:ss". Time is rounded up, so that the clock reaches "0:00" only when the time
// is really over. Negative values are shown as zero, missing ones as "--".
pub fn format_seconds(seconds: Option<f64>) -> String {
    let Some(seconds) = seconds.filter(|s| s.is_finite()) else {
        return "--".to_owned();
    };
    let seconds = seconds.max(0.0);
    let mut minutes = (seconds / 60.0).floor();
    let mut secs = (seconds - minutes * 60.0).ceil();
    if secs == 60.0 {
        minutes += 1.0;
        secs = 0.0;
    }
    format!("{}:{:02}", minutes as u64, secs as u64)
}

// Describes the overtime mode next to the time: "SD" for the last byo-yomi period, "(n)" for
// remaining periods, "/ n" for stones left in the block, " SD" for plain time without overtime.
//
// A period count of zero is still a period count: the player is in main time with the full byo-yomi
// grant ahead, so there is nothing to qualify. Same for zero stones.
pub fn time_qualifier(display: &DisplayTriple) -> String {
    match (display.periods, display.stones) {
        (Some(1), _) => "SD".to_owned(),
        (Some(0), _) => String::new(),
        (Some(periods), _) => format!(" ({periods})"),
        (None, Some(0)) => String::new(),
        (None, Some(stones)) => format!(" / {stones}"),
        (None, None) if is_truthy(display.seconds) => " SD".to_owned(),
        (None, None) => String::new(),
    }
}

// Sudden death: running out of the time currently shown loses the game.
pub fn is_sudden_death(display: &DisplayTriple) -> bool {
    match (display.periods, display.stones) {
        (Some(periods), _) => periods == 1,
        (None, Some(stones)) => stones > 0,
        (None, None) => is_truthy(display.seconds),
    }
}

pub fn is_urgent(display: &DisplayTriple) -> bool {
    is_sudden_death(display)
        && display.seconds.is_some_and(|seconds| seconds < URGENT_THRESHOLD_SECS)
}

fn is_truthy(seconds: Option<f64>) -> bool {
    seconds.is_some_and(|s| s != 0.0 && !s.is_nan())
}
