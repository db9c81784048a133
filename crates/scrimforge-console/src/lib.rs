//! Colorful console output for balancing runs.
//!
//! Provides a custom `tracing` layer that formats balancer events with
//! colors. Output goes to stderr so that stdout stays free for results.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (solve/phase start and end, not applicable)
//! - **WARN**: Strategy fallbacks
//! - **TRACE**: Individual player placements

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filter directive, used when `RUST_LOG` is unset.
pub const DEFAULT_DIRECTIVE: &str = "scrimforge_solver=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the ScrimForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();
        EPOCH.get_or_init(Instant::now);

        let filter = EnvFilter::builder()
            .with_default_directive(
                DEFAULT_DIRECTIVE
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::INFO.into()),
            )
            .from_env_lossy();

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(BalanceConsoleLayer)
            .try_init();
    });
}

fn elapsed_secs() -> f64 {
    EPOCH.get().map(|e| e.elapsed().as_secs_f64()).unwrap_or(0.0)
}

fn print_banner() {
    let title = format!("ScrimForge v{} - Scrim Team Balancer", VERSION);
    let rule = "═".repeat(title.chars().count() + 4);

    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr, "{}", rule.bright_cyan());
    let _ = writeln!(stderr, "  {}", title.bright_white().bold());
    let _ = writeln!(stderr, "{}", rule.bright_cyan());
    let _ = stderr.flush();
}

/// A tracing layer that formats balancer events with colors.
pub struct BalanceConsoleLayer;

impl<S: Subscriber> Layer<S> for BalanceConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("scrimforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stderr(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    message: Option<String>,
    event: Option<String>,
    phase: Option<String>,
    scorer: Option<String>,
    player: Option<String>,
    players: Option<u64>,
    team_size: Option<u64>,
    team_count: Option<u64>,
    team: Option<u64>,
    queued: Option<u64>,
    bench: Option<u64>,
    steps: Option<u64>,
    step: Option<u64>,
    speed: Option<u64>,
    nodes: Option<u64>,
    duration_ms: Option<u64>,
    quality: Option<f64>,
    score: Option<f64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "message" => self.message = Some(s),
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "phase" => self.phase = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "players" => self.players = Some(value),
            "team_size" => self.team_size = Some(value),
            "team_count" => self.team_count = Some(value),
            "team" => self.team = Some(value),
            "queued" => self.queued = Some(value),
            "bench" => self.bench = Some(value),
            "steps" => self.steps = Some(value),
            "step" => self.step = Some(value),
            "speed" => self.speed = Some(value),
            "nodes" => self.nodes = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "quality" => self.quality = Some(value),
            "score" => self.score = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_string()),
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "scorer" => self.scorer = Some(value.to_string()),
            "player" => self.player = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    if level == Level::WARN {
        return format_warning(v);
    }

    match v.event.as_deref().unwrap_or("") {
        "solve_start" => format_solve_start(v),
        "solve_end" => format_solve_end(v),
        "not_applicable" => format_not_applicable(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "step" => format_step(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_solve_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Balancing │ {} players │ {} teams of {} │ {} scoring",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(v.players.unwrap_or(0)).bright_yellow(),
        format_count(v.team_count.unwrap_or(0)).bright_yellow(),
        format_count(v.team_size.unwrap_or(0)).bright_yellow(),
        v.scorer.as_deref().unwrap_or("unknown").bright_magenta(),
    )
}

fn format_not_applicable(v: &EventVisitor) -> String {
    format!(
        "{} {} Not enough players │ {} players │ {} needed for two teams",
        format_elapsed(),
        "■".bright_red().bold(),
        format_count(v.players.unwrap_or(0)).bright_yellow(),
        format_count(v.team_size.unwrap_or(0) * 2).bright_yellow(),
    )
}

fn format_solve_end(v: &EventVisitor) -> String {
    let quality = v.quality.unwrap_or(0.0);
    let bench = v.bench.unwrap_or(0);

    let mut output = format!(
        "{} {} Balancing complete │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_quality(quality),
    );

    if bench > 0 {
        output.push_str(&format!(
            " │ {} benched",
            format_count(bench).bright_yellow()
        ));
    }

    output
}

fn format_phase_start(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");

    let mut output = format!(
        "{} {} {} started",
        format_elapsed(),
        "▶".bright_blue(),
        phase.white().bold()
    );

    if let Some(queued) = v.queued {
        output.push_str(&format!(" │ {} queued", format_count(queued).white()));
    }

    output
}

fn format_phase_end(v: &EventVisitor) -> String {
    let phase = v.phase.as_deref().unwrap_or("Unknown");
    let steps = v.steps.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    let mut output = format!(
        "{} {} {} ended │ {} │ {} placements",
        format_elapsed(),
        "◀".bright_blue(),
        phase.white().bold(),
        format_duration_ms(duration).yellow(),
        format_count(steps).white(),
    );

    if let Some(nodes) = v.nodes {
        output.push_str(&format!(
            " │ {} splits",
            format_count(nodes).bright_magenta().bold()
        ));
    } else if let Some(speed) = v.speed {
        output.push_str(&format!(
            " │ {} placements/s",
            format_count(speed).bright_magenta().bold()
        ));
    }

    if let Some(quality) = v.quality {
        output.push_str(&format!(" │ {}", format_quality(quality)));
    }

    output
}

fn format_step(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} Step {:>6} │ {:<16} │ {:>8.2} → team {}",
        format_elapsed(),
        "✓".bright_green(),
        format_count(v.step.unwrap_or(0)).bright_black(),
        v.player.as_deref().unwrap_or("?"),
        v.score.unwrap_or(0.0),
        v.team.unwrap_or(0).bright_black(),
    )
}

fn format_warning(v: &EventVisitor) -> String {
    let message = v.message.as_deref().unwrap_or("").trim_matches('"');
    format!(
        "{} {} {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        message.yellow()
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_quality(quality: f64) -> String {
    let text = format!("quality {:.3}", quality);
    if quality >= 0.9 {
        text.bright_green().to_string()
    } else if quality >= 0.7 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(15), "15ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_format_quality_contains_value() {
        assert!(format_quality(0.739).contains("quality 0.739"));
        assert!(format_quality(1.0).contains("quality 1.000"));
    }

    #[test]
    fn test_unknown_event_is_silent() {
        let v = EventVisitor {
            event: Some("progress".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
    }

    #[test]
    fn test_step_only_at_trace() {
        let v = EventVisitor {
            event: Some("step".to_string()),
            step: Some(3),
            player: Some("Faker".to_string()),
            score: Some(10.0),
            team: Some(1),
            ..Default::default()
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("Faker"));
    }

    #[test]
    fn test_solve_start() {
        let v = EventVisitor {
            event: Some("solve_start".to_string()),
            players: Some(12_000),
            team_count: Some(2_400),
            team_size: Some(5),
            scorer: Some("tier".to_string()),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("12,000"));
        assert!(out.contains("2,400"));
        assert!(out.contains("tier"));
    }

    #[test]
    fn test_solve_end_reports_bench() {
        let v = EventVisitor {
            event: Some("solve_end".to_string()),
            quality: Some(0.5),
            bench: Some(1),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("quality 0.500"));
        assert!(out.contains("benched"));
    }

    #[test]
    fn test_phase_end_exhaustive() {
        let v = EventVisitor {
            event: Some("phase_end".to_string()),
            phase: Some("Exhaustive Split".to_string()),
            steps: Some(10),
            nodes: Some(126),
            quality: Some(1.0),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("Exhaustive Split"));
        assert!(out.contains("126"));
        assert!(out.contains("splits"));
    }

    #[test]
    fn test_not_applicable() {
        let v = EventVisitor {
            event: Some("not_applicable".to_string()),
            players: Some(7),
            team_size: Some(5),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).contains("10"));
    }

    #[test]
    fn test_warning_uses_message() {
        let v = EventVisitor {
            message: Some("Exhaustive split not applicable".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::WARN).contains("Exhaustive split not applicable"));
    }
}
