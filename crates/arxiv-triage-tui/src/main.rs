use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use ratatui::Terminal;
use ratatui::crossterm::event;
use ratatui::crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::CrosstermBackend;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use arxiv_triage_core::config_file::{self, ConfigFile, Settings};
use arxiv_triage_core::{HttpApi, PapersApi};

mod action;
mod app;
mod backend;
mod input;
mod logging;
mod model;
mod theme;
mod tui_event;
mod view;

use app::App;

const BASE_URL_ENV: &str = "ARXIV_TRIAGE_BASE_URL";
const TIMEOUT_ENV: &str = "ARXIV_TRIAGE_TIMEOUT";

/// arxiv-triage: review recent arXiv papers and send the keepers to Notion.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the papers backend
    #[arg(long)]
    base_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Color theme: hacker (default) or modern
    #[arg(long)]
    theme: Option<String>,
}

/// Resolve settings from CLI flags > env vars > config file > defaults.
fn resolve_settings(
    args: &Args,
    file_cfg: &ConfigFile,
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();
    config_file::apply_to_settings(file_cfg, &mut settings);

    if let Some(url) = env(BASE_URL_ENV).filter(|v| !v.is_empty()) {
        settings.base_url = url;
    }
    if let Some(raw) = env(TIMEOUT_ENV).filter(|v| !v.is_empty()) {
        let secs: u64 = raw
            .parse()
            .with_context(|| format!("{TIMEOUT_ENV} must be a whole number of seconds, got {raw:?}"))?;
        settings.timeout = Duration::from_secs(secs.max(1));
    }

    if let Some(url) = &args.base_url {
        settings.base_url = url.clone();
    }
    if let Some(secs) = args.timeout {
        settings.timeout = Duration::from_secs(secs.max(1));
    }
    if let Some(theme) = &args.theme {
        settings.theme = theme.clone();
    }
    Ok(settings)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let _log_guard = match logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: logging disabled: {e:#}");
            None
        }
    };

    let settings = resolve_settings(&args, &config_file::load_config(), |key| {
        std::env::var(key).ok()
    })?;
    tracing::info!(
        base_url = %settings.base_url,
        timeout_secs = settings.timeout.as_secs(),
        theme = %settings.theme,
        "starting"
    );

    let api: Arc<dyn PapersApi> = Arc::new(
        HttpApi::new(&settings.base_url, settings.timeout)
            .with_context(|| format!("cannot use backend {}", settings.base_url))?,
    );
    let theme = theme::Theme::from_name(&settings.theme);

    // Initialize terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Install panic hook that restores terminal before printing panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));

    let backend_terminal = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend_terminal)?;

    // Drain any stray input events (e.g. Enter keypress from launching the command)
    while event::poll(Duration::from_millis(50)).unwrap_or(false) {
        let _ = event::read();
    }

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
    let cancel = CancellationToken::new();
    tokio::spawn(backend::run(api, cmd_rx, event_tx, cancel.clone()));

    let mut app = App::new(theme, settings.base_url.clone());
    app.backend_cmd_tx = Some(cmd_tx);
    app.mount();

    // Main event loop
    let tick_rate = Duration::from_millis(100);
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        terminal.draw(|f| app.view(f))?;

        tokio::select! {
            maybe_event = event_rx.recv() => {
                if let Some(backend_event) = maybe_event {
                    app.handle_backend_event(backend_event);
                    // Drain any additional queued backend events
                    while let Ok(evt) = event_rx.try_recv() {
                        app.handle_backend_event(evt);
                    }
                }
            }
            // Terminal input events
            _ = async {
                if event::poll(tick_rate).unwrap_or(false) {
                    if let Ok(evt) = event::read() {
                        app.update(input::map_event(&evt));
                    }
                }
            } => {}
            // Wall-clock tick for the spinner and toast expiry
            _ = ticker.tick() => {
                app.update(action::Action::Tick);
            }
        }

        if app.should_quit {
            break;
        }
    }

    cancel.cancel();
    app.dispose();
    tracing::info!(
        added = app.papers.stats().added,
        ignored = app.papers.stats().ignored,
        pending = app.papers.pending_count(),
        "session finished"
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;

    Ok(())
}
