use std::fmt::Write as _;
use std::path::Path;

use anyhow::Context;
use scrimforge_config::BalanceConfig;
use scrimforge_core::{BalanceResult, Player, RawPlayer};
use scrimforge_roster::parse_kakao_roster;
use scrimforge_solver::Balancer;

use crate::{InputFormat, OutputFormat};

pub fn balance(
    path: &Path,
    input: InputFormat,
    team_size: Option<usize>,
    config: Option<&Path>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let players = load_players(path, input)?;
    let config = load_config(config, team_size)?;
    let balancer = Balancer::from_config(&config)?;
    let result = balancer.balance(&players);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => print!("{}", format_result(&result, config.team_size)),
    }

    Ok(())
}

/// Reads a roster file. Kakao lines that fail to parse are reported on
/// stderr and skipped.
pub fn load_players(path: &Path, input: InputFormat) -> anyhow::Result<Vec<Player>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading roster {}", path.display()))?;

    match input {
        InputFormat::Json => {
            let raw: Vec<RawPlayer> = serde_json::from_str(&text)
                .with_context(|| format!("parsing roster {}", path.display()))?;
            Ok(raw.into_iter().map(Player::from).collect())
        }
        InputFormat::Kakao => {
            let roster = parse_kakao_roster(&text);
            for line in &roster.errors {
                eprintln!("Skipped unparsable line: {line}");
            }
            Ok(roster.players)
        }
    }
}

/// Loads the config file, if any, and applies the `--team-size` override.
pub fn load_config(path: Option<&Path>, team_size: Option<usize>) -> anyhow::Result<BalanceConfig> {
    let config = match path {
        None => BalanceConfig::default(),
        Some(path) => {
            let is_yaml = matches!(
                path.extension().and_then(|e| e.to_str()),
                Some("yaml" | "yml")
            );
            let loaded = if is_yaml {
                BalanceConfig::from_yaml_file(path)
            } else {
                BalanceConfig::from_toml_file(path)
            };
            loaded.with_context(|| format!("loading config {}", path.display()))?
        }
    };

    Ok(match team_size {
        Some(size) => config.with_team_size(size),
        None => config,
    })
}

pub fn format_result(result: &BalanceResult, team_size: usize) -> String {
    let mut out = String::new();

    if !result.is_applicable() {
        let _ = writeln!(
            out,
            "Not enough players for two teams of {team_size} ({} players)",
            result.bench.len()
        );
        return out;
    }

    for (idx, team) in result.teams.iter().enumerate() {
        let _ = writeln!(out, "Team {} (total {:.2})", idx + 1, team.total_score());
        for player in team.players() {
            let _ = writeln!(out, "  {:<20} {:>8.2}", player.name(), player.score);
        }
        out.push('\n');
    }

    if !result.bench.is_empty() {
        let _ = writeln!(out, "Bench");
        for player in &result.bench {
            let _ = writeln!(out, "  {:<20} {:>8.2}", player.name(), player.score);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Quality: {:.3}", result.quality_score);
    out
}
