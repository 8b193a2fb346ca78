mod cli;
mod logging;

#[cfg(feature = "line")]
mod line_mode;
#[cfg(feature = "tui")]
mod render_help;
#[cfg(feature = "tui")]
mod tui_mode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Mode};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_file.as_deref())?;

    let config = cli.session_config();
    tracing::debug!(mode = ?cli.mode, ?config, "starting");

    match cli.mode {
        Mode::Tui => run_tui(config),
        Mode::Line => run_line(config),
    }
}

#[cfg(feature = "tui")]
fn run_tui(config: keycalc::SessionConfig) -> Result<()> {
    tui_mode::run_tui(config)
}

#[cfg(not(feature = "tui"))]
fn run_tui(_config: keycalc::SessionConfig) -> Result<()> {
    anyhow::bail!("keycalc was built without the `tui` feature; try --mode line")
}

#[cfg(feature = "line")]
fn run_line(config: keycalc::SessionConfig) -> Result<()> {
    line_mode::run_line(config)
}

#[cfg(not(feature = "line"))]
fn run_line(_config: keycalc::SessionConfig) -> Result<()> {
    anyhow::bail!("keycalc was built without the `line` feature; rebuild with --features line")
}
