use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod commands;

#[derive(Parser, Debug)]
#[command(
    name = "scrimforge",
    about = "ScrimForge - fair team balancing for League of Legends scrims",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Split a roster into balanced teams.
    ///
    /// The roster is either a JSON array of players (`name`, `tier`, `rank`,
    /// `mmr`, `mainLane`, ...) or a KakaoTalk sign-up paste with one
    /// `name tier lane` entry per line.
    Balance {
        /// Roster file
        path: PathBuf,
        /// Roster format
        #[arg(short, long, value_enum, default_value_t = InputFormat::Json)]
        input: InputFormat,
        /// Players per team; overrides the config file
        #[arg(short = 'n', long)]
        team_size: Option<usize>,
        /// Balancing config (TOML, or YAML with a .yaml/.yml extension)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Suppress progress output on stderr
        #[arg(short, long)]
        quiet: bool,
    },
    /// Extract Riot IDs (`GameName#TAG`) from pasted text
    RiotIds {
        /// Text file to scan
        path: PathBuf,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Kakao,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Balance {
            path,
            input,
            team_size,
            config,
            format,
            quiet,
        } => {
            if !quiet {
                scrimforge_console::init();
            }
            commands::balance::balance(&path, input, team_size, config.as_deref(), format)
        }
        Commands::RiotIds { path, format } => commands::riot_ids::riot_ids(&path, format),
    }
}
