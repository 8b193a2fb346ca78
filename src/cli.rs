use clap::{Parser, ValueEnum};
use keycalc::{SessionConfig, DEFAULT_HISTORY_LIMIT};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Full-screen keypad with history panel
    #[default]
    Tui,
    /// Single status line in raw terminal mode
    Line,
}

/// Keypad-style terminal calculator with memory and history
#[derive(Debug, Parser)]
#[command(name = "keycalc", version, about, long_about = None)]
pub struct Cli {
    /// Front-end to run
    #[arg(short, long, value_enum, default_value_t = Mode::Tui)]
    pub mode: Mode,

    /// Number of finished calculations kept in the history
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT, value_parser = parse_history_limit)]
    pub history_limit: usize,

    /// Write logs to this file (filter with RUST_LOG)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            history_limit: self.history_limit,
        }
    }
}

fn parse_history_limit(s: &str) -> Result<usize, String> {
    let limit: usize = s
        .parse()
        .map_err(|_| format!("'{}' is not a whole number", s))?;
    if limit == 0 {
        return Err("history limit must be at least 1".to_string());
    }
    Ok(limit)
}
