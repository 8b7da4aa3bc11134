pub mod check_in;
pub mod config;
pub mod history;
pub mod milestones;
pub mod status;
pub mod trend;

use chrono::{Local, NaiveDate};
use lifepulse_core::storage::data_dir;
use lifepulse_core::{Config, Journal};

/// Open the journal configured in the data directory.
pub fn open_journal() -> Result<Journal, Box<dyn std::error::Error>> {
    let dir = data_dir()?;
    let config = Config::load()?;
    Ok(Journal::open(&config, &dir)?)
}

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
