//! roller CLI - Binary entry point and terminal session management.
//!
//! # Architecture
//!
//! The CLI bridges [`roller_types::Presenter`] (hero state) and [`roller_tui`]
//! (rendering), providing RAII-based terminal management with guaranteed cleanup.
//!
//! ```text
//! main() -> load config -> Presenter::start() -> TerminalSession::new() -> run_app()
//! ```
//!
//! # Event Loop
//!
//! A fixed 8ms render cadence stands in for the browser's animation frames:
//!
//! 1. Wait for frame tick
//! 2. Drain input queue (non-blocking via [`roller_tui::InputPump`])
//! 3. Advance the presenter by the measured wall-clock delta
//! 4. Render if anything changed

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableFocusChange, EnableFocusChange},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use std::{
    env,
    fs::{self, OpenOptions},
    io::{Stdout, stdout},
    path::PathBuf,
    sync::Mutex,
    time::{Duration, Instant},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use roller_config::{RollerConfig, SiteConfig};
use roller_tui::{InputPump, LandingView, UiOptions, draw, handle_events};
use roller_types::Presenter;

const REDUCED_MOTION_ENV: &str = "ROLLER_REDUCED_MOTION";

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::try_new("warn").expect("warn filter is valid"));

    let (log_file, init_warnings) = open_roller_log_file();

    if let Some((log_path, file)) = log_file {
        tracing_subscriber::registry()
            .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
            .with(env_filter)
            .init();

        tracing::info!(path = %log_path.display(), "Logging initialized");
        for warning in init_warnings {
            tracing::warn!("{warning}");
        }
        return;
    }

    // If we can't open a log file, prefer "no logs" over corrupting the TUI
    // by writing to stdout/stderr.
    tracing_subscriber::registry().with(env_filter).init();
}

fn open_roller_log_file() -> (Option<(PathBuf, std::fs::File)>, Vec<String>) {
    let mut warnings = Vec::new();

    for candidate in roller_log_file_candidates() {
        if let Some(parent) = candidate.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warnings.push(format!(
                "Failed to create log dir {}: {e}",
                parent.display()
            ));
            continue;
        }

        match OpenOptions::new()
            .create(true)
            .append(true)
            .open(&candidate)
        {
            Ok(file) => return (Some((candidate, file)), warnings),
            Err(e) => {
                warnings.push(format!(
                    "Failed to open log file {}: {e}",
                    candidate.display()
                ));
            }
        }
    }

    (None, warnings)
}

fn roller_log_file_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    // Primary: ~/.roller/logs/roller.log
    if let Some(config_path) = RollerConfig::path()
        && let Some(config_dir) = config_path.parent()
    {
        candidates.push(config_dir.join("logs").join("roller.log"));
    }

    // Fallback: ./.roller/logs/roller.log (useful in constrained environments)
    candidates.push(PathBuf::from(".roller").join("logs").join("roller.log"));

    candidates
}

fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes"
    )
}

fn load_config() -> Result<RollerConfig> {
    let mut config = match RollerConfig::load() {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::info!("No config file found, using defaults");
            RollerConfig::default()
        }
        Err(err) => {
            tracing::warn!(path = ?err.path(), "Falling back to default config: {err:#}");
            RollerConfig::default()
        }
    };

    if let Ok(raw) = env::var(REDUCED_MOTION_ENV)
        && is_truthy(&raw)
    {
        config.app.reduced_motion = true;
    }

    config
        .validate()
        .context("invalid roller configuration")?;
    Ok(config)
}

/// RAII wrapper for terminal state with guaranteed cleanup on drop.
///
/// Manages raw mode, the alternate screen, and focus-change reporting. Focus
/// events drive the presenter's visibility.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self> {
        enable_raw_mode()?;

        let mut out = stdout();
        if let Err(err) = execute!(out, EnterAlternateScreen, EnableFocusChange) {
            let _ = disable_raw_mode();
            let _ = execute!(out, DisableFocusChange, LeaveAlternateScreen);
            return Err(err.into());
        }

        let terminal = match Terminal::new(CrosstermBackend::new(out)) {
            Ok(t) => t,
            Err(err) => {
                let _ = disable_raw_mode();
                let _ = execute!(stdout(), DisableFocusChange, LeaveAlternateScreen);
                return Err(err.into());
            }
        };

        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableFocusChange,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = load_config()?;
    let options = UiOptions::from(config.app);
    let settings = config.hero.reveal_settings(config.app.reduced_motion)?;
    let mut presenter =
        Presenter::new(config.hero.phrases.clone(), settings, config.hero.charset()?)?;
    tracing::info!(
        phrases = presenter.phrases().len(),
        rotation_ms = presenter.settings().rotation_period.as_millis() as u64,
        reduced_motion = presenter.settings().reduced_motion,
        "Starting hero rotation"
    );
    presenter.start();

    let result = {
        let mut session = TerminalSession::new()?;
        run_app(&mut session.terminal, &mut presenter, &config.site, options).await
    };

    if let Err(err) = &result {
        tracing::error!("roller exited with error: {err:#}");
    }
    result
}

const FRAME_DURATION: Duration = Duration::from_millis(8);

async fn run_app<B>(
    terminal: &mut Terminal<B>,
    presenter: &mut Presenter,
    site: &SiteConfig,
    options: UiOptions,
) -> Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
{
    let mut input = InputPump::new();
    let mut frames = tokio::time::interval(FRAME_DURATION);
    frames.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let mut last = Instant::now();
    let mut stale = true;

    let result: Result<()> = loop {
        frames.tick().await;

        // Non-blocking input (drain queue only)
        let outcome = match handle_events(presenter, &mut input) {
            Ok(outcome) => outcome,
            Err(e) => break Err(e),
        };
        if outcome.quit {
            break Ok(());
        }

        let now = Instant::now();
        let report = presenter.tick(now.duration_since(last));
        last = now;
        if report.rotations > 0 {
            tracing::debug!(
                index = presenter.index(),
                rotations = report.rotations,
                "Rotated hero phrase"
            );
        }

        if stale || outcome.redraw || report.changed() {
            let view = LandingView::new(presenter, site, options);
            if let Err(e) = terminal.draw(|frame| draw(frame, &view)) {
                break Err(e.into());
            }
            stale = false;
        }
    };

    input.shutdown().await;
    result
}
