use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "lifepulse", version, about = "Lifepulse daily check-in journal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record today's check-in
    CheckIn(commands::check_in::CheckInArgs),
    /// Show the content for a feeling and phase without recording anything
    Preview(commands::check_in::PreviewArgs),
    /// Current streak and totals
    Status {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Trends over the check-in history
    Trend {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Entries from the session log
    History {
        /// Show only the most recent N entries
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List streak milestones
    Milestones,
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::CheckIn(_) => "check-in",
            Commands::Preview(_) => "preview",
            Commands::Status { .. } => "status",
            Commands::Trend { .. } => "trend",
            Commands::History { .. } => "history",
            Commands::Milestones => "milestones",
            Commands::Config { .. } => "config",
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LIFEPULSE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let command = cli.command.name();
    debug!(command, "dispatching");

    let result = match cli.command {
        Commands::CheckIn(args) => commands::check_in::run(args),
        Commands::Preview(args) => commands::check_in::preview(args),
        Commands::Status { json } => commands::status::run(json),
        Commands::Trend { json } => commands::trend::run(json),
        Commands::History { limit } => commands::history::run(limit),
        Commands::Milestones => commands::milestones::run(),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        debug!(command, error = %e, "command failed");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
