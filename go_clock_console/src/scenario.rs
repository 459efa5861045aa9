use std::time::Duration;

use anyhow::{Context, ensure};
use enum_map::Enum;
use go_clock::{ClockState, GameRules, NodeId, OvertimeRules};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};


#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, EnumIter, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Player {
    Black,
    White,
}

// A scripted game: clock snapshots as the server would send them, each delivered at a given
// offset from the start.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub rules: GameRules,
    #[serde(with = "humantime_serde")]
    pub duration: Duration,
    #[serde(default = "default_tick_interval", with = "humantime_serde")]
    pub tick_interval: Duration,
    pub events: Vec<SnapshotEvent>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SnapshotEvent {
    #[serde(with = "humantime_serde")]
    pub at: Duration,
    pub player: Player,
    pub active: bool,
    pub node_id: NodeId,
    // Whether the node is a stone placement (as opposed to e.g. a pass or a clock toggle).
    #[serde(default)]
    pub is_move: bool,
    pub clock: ClockState,
    // Shown while the clock is inactive. Defaults to the snapshot time.
    pub time_left: Option<f64>,
}

fn default_tick_interval() -> Duration { go_clock::TICK_INTERVAL }

impl SnapshotEvent {
    pub fn time_left(&self) -> f64 { self.time_left.or(self.clock.time).unwrap_or(0.0) }
}

impl Scenario {
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let mut scenario: Scenario =
            serde_yaml::from_str(contents).context("Failed to parse scenario")?;
        ensure!(!scenario.tick_interval.is_zero(), "Tick interval must be positive");
        scenario.events.sort_by_key(|ev| ev.at);
        Ok(scenario)
    }

    pub fn read(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario file '{path}'"))?;
        Scenario::parse(&contents)
    }

    pub fn overtime(&self) -> anyhow::Result<Option<OvertimeRules>> {
        self.rules.overtime().context("Invalid game rules")
    }
}


#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_scenario() {
        let scenario = Scenario::parse(indoc! {"
            rules:
              byoYomiTime: 30
              byoYomiPeriods: 5
            duration: 1m
            events:
              - at: 2s
                player: white
                active: true
                node_id: 2
                is_move: true
                clock: { time: 10, periodsLeft: 5, running: true }
              - at: 0s
                player: black
                active: true
                node_id: 1
                clock: { time: 12.5, periodsLeft: 5, running: true }
                time_left: 12
        "})
        .unwrap();
        assert_eq!(scenario.duration, Duration::from_secs(60));
        assert_eq!(scenario.tick_interval, Duration::from_millis(100));
        assert_eq!(scenario.events[0].player, Player::Black);
        assert_eq!(scenario.events[0].time_left(), 12.0);
        assert!(!scenario.events[0].is_move);
        assert_eq!(scenario.events[1].time_left(), 10.0);
        assert_eq!(scenario.events[1].clock.periods_left, Some(5));
        assert!(scenario.overtime().unwrap().is_some());
    }

    #[test]
    fn reject_bad_rules() {
        let scenario = Scenario::parse(indoc! {"
            rules: { byoYomiTime: 0, byoYomiStones: 25 }
            duration: 10s
            events: []
        "})
        .unwrap();
        assert!(scenario.overtime().is_err());
    }

    #[test]
    fn reject_zero_tick_interval() {
        let result = Scenario::parse(indoc! {"
            duration: 10s
            tick_interval: 0s
            events: []
        "});
        assert!(result.is_err());
    }
}
