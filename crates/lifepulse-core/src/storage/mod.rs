mod config;
pub mod session_log;
pub mod state_store;

pub use config::{CheckInConfig, Config, MilestoneConfig, StorageConfig};
pub use session_log::{LoggedEntry, SessionLog};
pub use state_store::StateStore;

use std::path::PathBuf;

use crate::error::ConfigError;

/// Returns the directory holding config, state and log files.
///
/// `LIFEPULSE_DATA_DIR` overrides the location entirely. Otherwise this is
/// `~/.config/lifepulse[-dev]/` based on `LIFEPULSE_ENV` (set it to `dev` to
/// use a development data directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = match std::env::var_os("LIFEPULSE_DATA_DIR") {
        Some(custom) if !custom.is_empty() => PathBuf::from(custom),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env =
                std::env::var("LIFEPULSE_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("lifepulse-dev")
            } else {
                base_dir.join("lifepulse")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
