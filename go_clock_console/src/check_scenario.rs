use itertools::Itertools;

use crate::scenario::Scenario;


pub fn run(scenario_file: &str) -> anyhow::Result<()> {
    let scenario = Scenario::read(scenario_file)?;
    let overtime = scenario.overtime()?;
    println!("OK");
    match overtime {
        None => println!("Overtime: none"),
        Some(overtime) => println!(
            "Overtime: {}s, periods: {}, stones: {}",
            overtime.time,
            overtime.periods.map_or("-".to_owned(), |p| p.to_string()),
            overtime.stones.map_or("-".to_owned(), |s| s.to_string()),
        ),
    }
    println!(
        "{} events over {}: {}",
        scenario.events.len(),
        humantime::format_duration(scenario.duration),
        scenario.events.iter().map(|ev| format!("{}@{:?}", ev.player, ev.at)).join(", ")
    );
    Ok(())
}
