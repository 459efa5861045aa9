// Browser bindings for the game clock. The page owns the DOM, the interval timer and the audio
// elements; this crate decides what the clock shows and when a sound should be played.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

pub mod web_error_handling;

use std::collections::VecDeque;

use go_clock::{ClockState, GameClock, GameRules, SoundCue, StonePlacementCue, TickToken};
use instant::Instant;
use wasm_bindgen::prelude::*;

use crate::web_error_handling::JsResult;


// Opaque to JS. The page keeps the token it got from the last `update` and passes it on every
// interval callback; when `update` returns a different token, the old interval must be cleared.
#[wasm_bindgen]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct JsTickToken {
    token: TickToken,
}

#[wasm_bindgen]
impl JsTickToken {
    pub fn same_as(&self, other: &JsTickToken) -> bool { self.token == other.token }
}

#[wasm_bindgen]
pub struct WebClock {
    clock: GameClock,
    stone_cue: StonePlacementCue,
    pending_sounds: VecDeque<SoundCue>,
}

#[wasm_bindgen]
impl WebClock {
    // `game_rules_json` may be empty or "null" for games without overtime.
    pub fn new_clock(game_rules_json: &str) -> JsResult<WebClock> {
        let rules: GameRules = match game_rules_json.trim() {
            "" | "null" => GameRules::no_overtime(),
            json => serde_json::from_str(json)
                .map_err(|err| rust_error!("Cannot parse game rules: {err}"))?,
        };
        let overtime = rules.overtime().map_err(|err| rust_error!("{err}"))?;
        Ok(WebClock {
            clock: GameClock::new(overtime, ClockState::default(), 0.0),
            stone_cue: StonePlacementCue::new(),
            pending_sounds: VecDeque::new(),
        })
    }

    pub fn update(
        &mut self, active: bool, node_id: Option<u32>, clock_json: &str, time_left: f64,
    ) -> JsResult<Option<JsTickToken>> {
        let clock: ClockState = serde_json::from_str(clock_json)
            .map_err(|err| rust_error!("Cannot parse clock state: {err}"))?;
        let token =
            self.clock.update(active, node_id.map(u64::from), clock, time_left, Instant::now());
        Ok(token.map(|token| JsTickToken { token }))
    }

    pub fn tick(&mut self, token: &JsTickToken) {
        let pending_sounds = &mut self.pending_sounds;
        self.clock.tick(token.token, Instant::now(), &mut |cue: SoundCue| {
            pending_sounds.push_back(cue)
        });
    }

    // Call whenever the last node of the game tree changes.
    pub fn on_last_node(&mut self, node_id: u32, is_move: bool) {
        if let Some(cue) = self.stone_cue.observe(node_id.into(), is_move) {
            self.pending_sounds.push_back(cue);
        }
    }

    // Sound to play, if any: "beep", "beepbeep" or "click". Call until it returns `None`.
    pub fn next_sound(&mut self) -> Option<String> {
        self.pending_sounds.pop_front().map(|cue| cue.name().to_owned())
    }

    pub fn ui_string(&self) -> String { self.clock.showing().ui_string() }
    pub fn class_name(&self) -> String { self.clock.class_name() }
    pub fn countdown_class_name(&self) -> String { self.clock.countdown_class_name().to_owned() }
}

#[wasm_bindgen]
pub fn format_seconds(seconds: Option<f64>) -> String { go_clock::format_seconds(seconds) }

#[wasm_bindgen]
pub fn tick_interval_ms() -> u32 { go_clock::TICK_INTERVAL.as_millis() as u32 }
