use std::fmt;

use serde::{Deserialize, Serialize};


// Identifies the game tree node a clock snapshot belongs to. A new node means a new turn even if
// the clock values happen to coincide with the previous ones.
pub type NodeId = u64;

// Authoritative clock snapshot as reported by the server. All times are in seconds.
//
// The snapshot may carry stale fields from a previous overtime mode: e.g. `periods_left` can
// still be present after the player has switched to stone overtime. It is up to the overtime
// resolver to decide which fields matter.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClockState {
    // Main time remaining. `None` for untimed games.
    pub time: Option<f64>,
    // Remaining byo-yomi periods. `Some(0)` means "about to enter the first period".
    pub periods_left: Option<u32>,
    // Stones left to play in the current Canadian overtime block.
    pub stones_left: Option<u32>,
    pub running: bool,
    pub paused: bool,
}

// Overtime configuration as it comes from the game settings. Not validated: use
// `GameRules::overtime` before handing it to the clock.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameRules {
    // Length of one byo-yomi period or of one Canadian overtime block, in seconds.
    pub byo_yomi_time: Option<f64>,
    pub byo_yomi_periods: Option<u32>,
    pub byo_yomi_stones: Option<u32>,
}

// Validated overtime configuration: `time` is always positive and finite, and zero counts are
// normalized to `None`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct OvertimeRules {
    pub time: f64,
    pub periods: Option<u32>,
    pub stones: Option<u32>,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RulesError {
    NonPositiveByoYomiTime { time: f64 },
    NonFiniteByoYomiTime { time: f64 },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulesError::NonPositiveByoYomiTime { time } => {
                write!(f, "Byo-yomi time must be positive when overtime is configured, got {time}")
            }
            RulesError::NonFiniteByoYomiTime { time } => {
                write!(f, "Byo-yomi time must be a finite number, got {time}")
            }
        }
    }
}

impl std::error::Error for RulesError {}

impl GameRules {
    pub fn no_overtime() -> Self { GameRules::default() }

    pub fn byo_yomi(time: f64, periods: u32) -> Self {
        GameRules {
            byo_yomi_time: Some(time),
            byo_yomi_periods: Some(periods),
            byo_yomi_stones: None,
        }
    }

    pub fn canadian(time: f64, stones: u32) -> Self {
        GameRules {
            byo_yomi_time: Some(time),
            byo_yomi_periods: None,
            byo_yomi_stones: Some(stones),
        }
    }

    // Returns `None` if the rules grant no overtime at all. A zero or negative byo-yomi time is
    // accepted only when there are no periods and no stones to go with it.
    pub fn overtime(&self) -> Result<Option<OvertimeRules>, RulesError> {
        let Some(time) = self.byo_yomi_time else {
            return Ok(None);
        };
        if !time.is_finite() {
            return Err(RulesError::NonFiniteByoYomiTime { time });
        }
        let periods = self.byo_yomi_periods.filter(|&p| p > 0);
        let stones = self.byo_yomi_stones.filter(|&s| s > 0);
        if time > 0.0 {
            Ok(Some(OvertimeRules { time, periods, stones }))
        } else if periods.is_none() && stones.is_none() {
            Ok(None)
        } else {
            Err(RulesError::NonPositiveByoYomiTime { time })
        }
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn deserialize_server_snapshot() {
        let clock: ClockState = serde_json::from_str(
            r#"{"time": 12.5, "periodsLeft": 3, "running": true, "paused": false}"#,
        )
        .unwrap();
        assert_eq!(clock, ClockState {
            time: Some(12.5),
            periods_left: Some(3),
            stones_left: None,
            running: true,
            paused: false,
        });

        let clock: ClockState = serde_json::from_str(r#"{"time": null}"#).unwrap();
        assert_eq!(clock, ClockState::default());
    }

    #[test]
    fn overtime_validation() {
        assert_eq!(GameRules::no_overtime().overtime(), Ok(None));
        assert_eq!(
            GameRules::byo_yomi(30.0, 5).overtime(),
            Ok(Some(OvertimeRules { time: 30.0, periods: Some(5), stones: None }))
        );
        assert_eq!(
            GameRules { byo_yomi_stones: Some(0), ..GameRules::byo_yomi(30.0, 0) }.overtime(),
            Ok(Some(OvertimeRules { time: 30.0, periods: None, stones: None }))
        );
        assert_eq!(
            GameRules { byo_yomi_time: Some(0.0), ..GameRules::no_overtime() }.overtime(),
            Ok(None)
        );
        assert_eq!(
            GameRules { byo_yomi_time: Some(-5.0), ..GameRules::no_overtime() }.overtime(),
            Ok(None)
        );
        assert_eq!(GameRules::byo_yomi(-5.0, 0).overtime(), Ok(None));
    }

    #[test]
    fn reject_bad_byo_yomi_time() {
        assert_eq!(
            GameRules::byo_yomi(0.0, 5).overtime(),
            Err(RulesError::NonPositiveByoYomiTime { time: 0.0 })
        );
        assert_eq!(
            GameRules::canadian(-10.0, 25).overtime(),
            Err(RulesError::NonPositiveByoYomiTime { time: -10.0 })
        );
        assert!(matches!(
            GameRules::byo_yomi(f64::INFINITY, 5).overtime(),
            Err(RulesError::NonFiniteByoYomiTime { .. })
        ));
    }
}
