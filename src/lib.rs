#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod clock_state;
pub mod countdown;
pub mod display;
pub mod game_clock;
pub mod overtime;
pub mod schedule;
pub mod sound;

pub use clock_state::{ClockState, GameRules, NodeId, OvertimeRules, RulesError};
pub use countdown::{Anchor, Countdown, LAG_COMPENSATION};
pub use display::{ClockShowing, format_seconds, is_sudden_death, time_qualifier};
pub use game_clock::GameClock;
pub use overtime::{DisplayTriple, resolve_overtime};
pub use schedule::{TICK_INTERVAL, TickSchedule, TickToken};
pub use sound::{CueTrigger, SoundCue, SoundPlayer, StonePlacementCue};
