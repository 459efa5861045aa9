use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

use crossterm::{cursor, execute, style, terminal};
use enum_map::{EnumMap, enum_map};
use go_clock::{ClockState, GameClock, SoundCue, StonePlacementCue, TickToken};
use instant::Instant;
use log::info;
use scopeguard::defer;

use crate::scenario::{Player, Scenario, SnapshotEvent};
use crate::tui;


pub struct RunScenarioConfig {
    pub scenario_file: String,
    // Print a line per change instead of drawing on an alternate screen.
    pub plain: bool,
}

enum IncomingEvent {
    Snapshot(SnapshotEvent),
    Tick,
}

// Sound playback collaborator: rings the terminal bell.
struct TerminalSound {
    bell: bool,
    played: EnumMap<SoundCue, u32>,
}

impl TerminalSound {
    fn play(&mut self, cue: SoundCue) {
        self.played[cue] += 1;
        info!("Playing sound \"{}\"", cue.name());
        if self.bell {
            print!("\x07");
            let _ = io::stdout().flush();
        }
    }
}

pub fn run(config: RunScenarioConfig) -> anyhow::Result<()> {
    let scenario = Scenario::read(&config.scenario_file)?;
    let overtime = scenario.overtime()?;
    let plain = config.plain;

    let start = Instant::now();
    let end = start + scenario.duration;
    let (tx, rx) = mpsc::channel();
    let tx_tick = tx.clone();
    let tx_snapshot = tx;
    let tick_interval = scenario.tick_interval;
    thread::spawn(move || {
        loop {
            thread::sleep(tick_interval);
            if tx_tick.send(IncomingEvent::Tick).is_err() {
                break;
            }
        }
    });
    let events = scenario.events.clone();
    thread::spawn(move || {
        for event in events {
            thread::sleep((start + event.at).saturating_duration_since(Instant::now()));
            if tx_snapshot.send(IncomingEvent::Snapshot(event)).is_err() {
                break;
            }
        }
    });

    let mut clocks: EnumMap<Player, GameClock> =
        enum_map! { _ => GameClock::new(overtime, ClockState::default(), 0.0) };
    let mut tokens: EnumMap<Player, Option<TickToken>> = enum_map! { _ => None };
    let mut stone_cue = StonePlacementCue::new();
    let mut sound = TerminalSound { bell: !plain, played: enum_map! { _ => 0 } };

    let mut stdout = io::stdout();
    if !plain {
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    }
    defer! {
        if !plain {
            let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
        }
    };

    let mut last_line = String::new();
    loop {
        let timeout = end.saturating_duration_since(Instant::now());
        let Ok(event) = rx.recv_timeout(timeout) else {
            break;
        };
        let now = Instant::now();
        match event {
            IncomingEvent::Snapshot(event) => {
                if let Some(cue) = stone_cue.observe(event.node_id, event.is_move) {
                    sound.play(cue);
                }
                let time_left = event.time_left();
                tokens[event.player] = clocks[event.player].update(
                    event.active,
                    Some(event.node_id),
                    event.clock,
                    time_left,
                    now,
                );
            }
            IncomingEvent::Tick => {
                for (player, clock) in clocks.iter_mut() {
                    if let Some(token) = tokens[player] {
                        clock.tick(token, now, &mut |cue: SoundCue| sound.play(cue));
                    }
                }
            }
        }

        if plain {
            let line = tui::render_clocks_plain(&clocks);
            if line != last_line {
                println!("{:>7.1}s  {line}", (now - start).as_secs_f64());
                last_line = line;
            }
        } else {
            execute!(
                stdout,
                cursor::MoveTo(0, 0),
                terminal::Clear(terminal::ClearType::FromCursorDown),
                style::Print(tui::render_clocks(&clocks))
            )?;
        }
    }

    for (cue, count) in sound.played {
        info!("Sound \"{}\" played {count} times", cue.name());
    }
    Ok(())
}
