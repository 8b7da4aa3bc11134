//! `lifepulse config`: inspect and edit `config.toml` in the data directory.

use clap::Subcommand;
use lifepulse_core::{Config, ConfigError};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print one setting
    Get {
        /// Dotted key such as `milestones.celebrate` or `storage.log_file`
        key: String,
    },
    /// Change one setting and write config.toml
    Set {
        /// Dotted key such as `check_in.allow_same_day_repeat`
        key: String,
        /// New value; booleans are `true`/`false`, policies use snake_case
        value: String,
    },
    /// Print the whole config.toml
    List,
    /// Overwrite config.toml with the built-in defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let value = Config::load()?
                .get(&key)
                .ok_or(ConfigError::UnknownKey(key))?;
            println!("{value}");
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} = {value}");
        }
        ConfigAction::List => print!("{}", toml::to_string_pretty(&Config::load()?)?),
        ConfigAction::Reset => {
            Config::default().save()?;
            println!("Restored default settings in {}", Config::path()?.display());
        }
    }
    Ok(())
}
