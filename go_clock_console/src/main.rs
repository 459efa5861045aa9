// Legend for various fix-this comments:
//   * "TODO" - bug or missing crucial feature.
//   * "Improvement potential" - missing nice-to-have feature or an opportunity
//       to make code better or faster.

#![forbid(unsafe_code)]
#![cfg_attr(feature = "strict", deny(warnings))]

mod check_scenario;
mod run_scenario;
mod scenario;
mod tui;

use clap::{Command, arg};


fn main() -> anyhow::Result<()> {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = Command::new("Go clock")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about("Byo-yomi and Canadian overtime game clock console app")
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Replay a clock scenario in the terminal")
                .arg(arg!(<scenario_file> "Path to the scenario file: yaml-serialized Scenario."))
                .arg(arg!(--"plain" "Print a line per clock change instead of a live display.")),
        )
        .subcommand(
            Command::new("check")
                .about("Verifies that a scenario file is valid.")
                .arg(arg!(<scenario_file> "Path to the scenario file: yaml-serialized Scenario.")),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("run", sub_matches)) => run_scenario::run(run_scenario::RunScenarioConfig {
            scenario_file: sub_matches.get_one::<String>("scenario_file").unwrap().clone(),
            plain: sub_matches.get_flag("plain"),
        }),
        Some(("check", sub_matches)) => {
            check_scenario::run(sub_matches.get_one::<String>("scenario_file").unwrap())
        }
        _ => unreachable!("Exhausted list of subcommands and subcommand_required prevents `None`"),
    }
}
