use super::open_journal;

pub fn run(limit: Option<usize>) -> Result<(), Box<dyn std::error::Error>> {
    let journal = open_journal()?;
    let entries = journal.log().read_entries()?;

    if entries.is_empty() {
        println!("No entries in the session log yet.");
        return Ok(());
    }

    let skip = limit.map_or(0, |n| entries.len().saturating_sub(n));
    for entry in &entries[skip..] {
        println!("{}  {} / {}", entry.date, entry.feeling, entry.phase);
        println!("  Micro-action: {}", entry.micro_action);
        if let Some(reflection) = &entry.reflection {
            println!("  Reflection:   {}", reflection.replace('\n', "\n                "));
        }
    }
    Ok(())
}
