//! Check-in and preview commands.

use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;

use lifepulse_core::{
    CheckInEntry, DailyContent, EnergyPhase, Feeling, Milestone, PendingCheckIn,
};

use super::{open_journal, today};

#[derive(Args)]
pub struct CheckInArgs {
    /// How you feel (energetic, tired, stressed, inspired, calm)
    #[arg(long)]
    feeling: Feeling,
    /// Energy phase for the day (build, create, deepen, rest)
    #[arg(long)]
    phase: EnergyPhase,
    /// Check-in date (YYYY-MM-DD), defaults to today. Must not precede the
    /// last check-in.
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Your answer to the reflection question
    #[arg(long, conflicts_with = "no_log")]
    reflection: Option<String>,
    /// Record the streak but skip the session log
    #[arg(long)]
    no_log: bool,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
pub struct PreviewArgs {
    /// How you feel (energetic, tired, stressed, inspired, calm)
    #[arg(long)]
    feeling: Feeling,
    /// Energy phase for the day (build, create, deepen, rest)
    #[arg(long)]
    phase: EnergyPhase,
    /// Print as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct CheckInOutput<'a> {
    check_in: &'a PendingCheckIn,
    logged: Option<&'a CheckInEntry>,
}

pub fn run(args: CheckInArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut journal = open_journal()?;
    let pending = match args.date {
        Some(date) => journal.begin_on(args.feeling, args.phase, date)?,
        None => journal.begin(args.feeling, args.phase, today())?,
    };
    let entry = if args.no_log {
        None
    } else {
        Some(journal.confirm(pending.clone(), args.reflection)?)
    };

    if args.json {
        let output = CheckInOutput {
            check_in: &pending,
            logged: entry.as_ref(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "You feel {} and are in a {} phase today.\n",
        pending.feeling, pending.phase
    );
    print_content(&pending.content);

    let streak = &pending.streak;
    println!(
        "\nStreak: {} day(s)  |  Highest: {}  |  Total check-ins: {}",
        streak.current_streak, streak.highest_streak, streak.total_check_ins
    );
    if streak.same_day_repeat {
        println!("  (already checked in on {}, streak unchanged)", streak.date);
    }

    if let Some(milestone) = &pending.celebration {
        print_celebration(milestone);
    }

    match &entry {
        Some(_) => println!("\nSaved to {}", journal.log().path().display()),
        None => println!("\nNot written to the session log."),
    }
    Ok(())
}

pub fn preview(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = DailyContent::select(args.feeling, args.phase);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&content)?);
    } else {
        print_content(&content);
    }
    Ok(())
}

fn print_content(content: &DailyContent) {
    println!("Micro-action for today:\n  {}", content.micro_action);
    println!("A little reflection for you:\n  {}", content.pep_talk);
    println!("Reflection question:\n  {}", content.reflection_question);
}

fn print_celebration(milestone: &Milestone) {
    println!("\n{}", "*".repeat(50));
    println!("{}", milestone.message);
    println!("\nToday's affirmation:\n  {}", milestone.affirmation);
    println!("\n{}", milestone.challenge);
    println!("{}", "*".repeat(50));
}
