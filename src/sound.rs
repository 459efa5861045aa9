use enum_map::Enum;
use log::info;
use strum::IntoStaticStr;

use crate::clock_state::NodeId;


const SHORT_WARNING_FROM_SECS: i64 = 10;
const URGENT_WARNING_FROM_SECS: i64 = 3;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Enum, IntoStaticStr)]
pub enum SoundCue {
    // Sudden death, ten seconds or less.
    #[strum(serialize = "beep")]
    Beep,
    // Sudden death, three seconds or less.
    #[strum(serialize = "beepbeep")]
    BeepBeep,
    #[strum(serialize = "click")]
    StonePlaced,
}

impl SoundCue {
    pub fn name(self) -> &'static str { self.into() }
}

// Playback is fire-and-forget: the clock never learns whether the sound was actually played
// (e.g. browsers may refuse audio before the first user interaction).
pub trait SoundPlayer {
    fn play(&mut self, cue: SoundCue);
}

impl<F: FnMut(SoundCue)> SoundPlayer for F {
    fn play(&mut self, cue: SoundCue) { self(cue) }
}

// Edge-triggered low time warnings. Fires when the displayed time crosses into a new whole second,
// counting down. Upward jumps (new byo-yomi period, new snapshot) never fire, and neither does
// staying within the same second.
#[derive(Clone, Debug, Default)]
pub struct CueTrigger {
    previous_seconds: Option<i64>,
}

impl CueTrigger {
    pub fn new() -> Self { CueTrigger::default() }

    pub fn previous_seconds(&self) -> Option<i64> { self.previous_seconds }

    pub fn reset(&mut self) { self.previous_seconds = None; }

    // Must be called on every evaluation while the clock is running, even outside of sudden death,
    // so that entering sudden death later compares against fresh values.
    pub fn observe(&mut self, seconds: f64, sudden_death: bool) -> Option<SoundCue> {
        let current = seconds.ceil() as i64;
        let previous = self.previous_seconds.replace(current);
        let crossed_down = previous.is_some_and(|previous| previous > current);
        if !sudden_death || !crossed_down {
            return None;
        }
        let cue = if current <= URGENT_WARNING_FROM_SECS {
            Some(SoundCue::BeepBeep)
        } else if current <= SHORT_WARNING_FROM_SECS {
            Some(SoundCue::Beep)
        } else {
            None
        };
        if let Some(cue) = cue {
            info!("Low time warning at {current}s: {}", cue.name());
        }
        cue
    }
}

// Click on every new move. The first node observed is what was on the board when the page opened,
// so it never makes a sound.
#[derive(Clone, Debug, Default)]
pub struct StonePlacementCue {
    last_node: Option<NodeId>,
}

impl StonePlacementCue {
    pub fn new() -> Self { StonePlacementCue::default() }

    pub fn observe(&mut self, last_node: NodeId, is_move: bool) -> Option<SoundCue> {
        let previous = self.last_node.replace(last_node);
        match previous {
            Some(previous) if previous != last_node && is_move => Some(SoundCue::StonePlaced),
            _ => None,
        }
    }
}
