use serde::Serialize;

use lifepulse_core::milestone::next_milestone;
use lifepulse_core::StreakSummary;

use super::{open_journal, today};

#[derive(Serialize)]
struct StatusOutput {
    #[serde(flatten)]
    summary: StreakSummary,
    next_milestone: Option<u32>,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal()?;
    let summary = journal.tracker().summary(today());
    let next = next_milestone(summary.current_streak).map(|m| m.days);

    if json {
        let output = StatusOutput {
            summary,
            next_milestone: next,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("Current streak:    {}", summary.current_streak);
    println!("Highest streak:    {}", summary.highest_streak);
    println!("Total check-ins:   {}", summary.total_check_ins);
    match summary.last_check_in {
        Some(date) => println!("Last check-in:     {date}"),
        None => println!("Last check-in:     never"),
    }

    if summary.checked_in_today {
        println!("\nYou have checked in today.");
    } else if summary.streak_alive {
        println!("\nCheck in today to keep your streak going.");
    } else if summary.total_check_ins > 0 {
        println!("\nYour next check-in starts a new streak.");
    }

    if let Some(days) = next {
        println!(
            "Next milestone:    {days} days ({} to go)",
            days - summary.current_streak
        );
    }
    Ok(())
}
