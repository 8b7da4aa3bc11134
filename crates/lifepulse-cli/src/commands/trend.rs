use lifepulse_core::{TrendError, TrendReport};

use super::open_journal;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal()?;

    let report = match TrendReport::build(journal.tracker().state()) {
        Ok(report) => report,
        Err(TrendError::InsufficientData { required, available }) => {
            if json {
                println!(
                    "{}",
                    serde_json::json!({
                        "insufficient_data": true,
                        "required": required,
                        "available": available,
                    })
                );
            } else {
                println!(
                    "Insufficient data: you need at least {required} check-ins to see trends \
                     (you have {available}). Come back after a few more days!"
                );
            }
            return Ok(());
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Your pulse over time ({} check-ins)\n", report.total_check_ins);

    println!("Feelings:");
    for tally in &report.feeling_distribution {
        println!(
            "  {:<10} {:>3}  {}",
            tally.value.to_string(),
            tally.count,
            "#".repeat(tally.count)
        );
    }

    println!("\nEnergy phases:");
    for tally in &report.phase_distribution {
        println!(
            "  {:<10} {:>3}  {}",
            tally.value.to_string(),
            tally.count,
            "#".repeat(tally.count)
        );
    }

    println!("\nMost common feeling + phase combinations:");
    for (i, combo) in report.top_combinations.iter().enumerate() {
        println!(
            "  {}. {} + {}: {} day(s)",
            i + 1,
            combo.feeling,
            combo.phase,
            combo.count
        );
    }

    println!("\nInsights:");
    println!("  Your most common feeling is {}", report.top_feeling);
    println!("  Your most common energy phase is {}", report.top_phase);
    for insight in &report.insights {
        println!("  {insight}");
    }
    Ok(())
}
