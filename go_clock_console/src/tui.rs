use console::Style;
use enum_map::EnumMap;
use go_clock::GameClock;
use strum::IntoEnumIterator;

use crate::scenario::Player;


const NAME_WIDTH: usize = 8;

fn render_clock(clock: &GameClock) -> String {
    let showing = clock.showing();
    let clock_str = showing.ui_string();
    if showing.urgent {
        Style::new().on_red().apply_to(clock_str).to_string()
    } else if clock.is_active() {
        Style::new().reverse().apply_to(clock_str).to_string()
    } else {
        clock_str
    }
}

pub fn render_clocks(clocks: &EnumMap<Player, GameClock>) -> String {
    Player::iter()
        .map(|player| {
            let name = format!("{:NAME_WIDTH$}", player.to_string());
            format!("{name}{}\n", render_clock(&clocks[player]))
        })
        .collect()
}

// One line per player, without styling, for logs and plain output.
pub fn render_clocks_plain(clocks: &EnumMap<Player, GameClock>) -> String {
    Player::iter()
        .map(|player| format!("{player}: {}", clocks[player].showing().ui_string().trim_end()))
        .collect::<Vec<_>>()
        .join(" | ")
}
