//! `huddle`: terminal client for Huddle workspaces.
//!
//! # Usage
//!
//! ```
//! huddle --email ada@example.com --password secret
//! huddle --config ~/.config/huddle/config.toml --log-file /tmp/huddle.log
//! ```

mod app;
mod ui;

use std::{
  fs::OpenOptions,
  io,
  path::{Path, PathBuf},
  sync::Mutex,
  time::Duration,
};

use anyhow::{Context, Result, bail};
use app::{App, Flow, Msg};
use chrono::Local;
use clap::Parser;
use crossterm::{
  event::{self, Event, KeyEventKind},
  execute,
  terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use huddle_client::{ClientConfig, Dispatcher, Session, settings::load_layered};
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::Deserialize;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "huddle", about = "Terminal client for Huddle workspaces")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// API origin, overriding the built-in local and production origins.
  #[arg(long, env = "HUDDLE_API_URL")]
  url: Option<String>,

  /// The URL this client considers itself served from.
  #[arg(long, env = "HUDDLE_LOCATION")]
  location: Option<String>,

  /// Account email.
  #[arg(long, env = "HUDDLE_EMAIL")]
  email: Option<String>,

  /// Account password.
  #[arg(long, env = "HUDDLE_PASSWORD")]
  password: Option<String>,

  /// Where log output goes while the terminal is in use.
  #[arg(long, value_name = "FILE", default_value = "huddle.log")]
  log_file: PathBuf,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Credentials may also come from the config file or `HUDDLE_*` variables.
#[derive(Deserialize, Default)]
#[serde(default)]
struct Credentials {
  email:    Option<String>,
  password: Option<String>,
}

fn init_logging(path: &Path) -> Result<()> {
  let file = OpenOptions::new()
    .create(true)
    .append(true)
    .open(path)
    .with_context(|| format!("opening log file {}", path.display()))?;

  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .with_writer(Mutex::new(file))
    .with_ansi(false)
    .init();
  Ok(())
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();
  init_logging(&args.log_file)?;

  // Flags override the config file, which overrides defaults.
  let config_path = args.config.as_deref();
  let mut config = ClientConfig::load(config_path).context("loading configuration")?;
  if args.url.is_some() {
    config.api_url = args.url;
  }
  if args.location.is_some() {
    config.location = args.location;
  }
  let file_credentials: Credentials =
    load_layered(config_path).context("loading credentials")?;

  let Some(email) = args.email.or(file_credentials.email) else {
    bail!("no email given (use --email or HUDDLE_EMAIL)");
  };
  let Some(password) = args.password.or(file_credentials.password) else {
    bail!("no password given (use --password or HUDDLE_PASSWORD)");
  };

  let mut session = Session::connect(&config).context("building API client")?;
  tracing::info!(origin = %session.resolver().resolve_base_origin(), "connecting");
  session
    .login(&email, &password)
    .await
    .context("signing in")?;

  let (dispatcher, rx) = Dispatcher::channel();
  let mut app = App::new(session, dispatcher, Local::now().date_naive());
  app.load_workspaces();

  // Set up the terminal.
  enable_raw_mode().context("enabling raw mode")?;
  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
  let backend = CrosstermBackend::new(stdout);
  let mut terminal = Terminal::new(backend).context("creating terminal")?;

  let run_result = run_event_loop(&mut terminal, &mut app, rx).await;

  // Restore terminal regardless of result.
  disable_raw_mode().ok();
  execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
  terminal.show_cursor().ok();

  if run_result? == Flow::Logout {
    if let Err(e) = app.session.logout().await {
      tracing::warn!(error = %e, "server rejected logout; local session cleared");
    }
  }
  Ok(())
}

// ─── Event loop ───────────────────────────────────────────────────────────────

/// Runs until the user quits; returns how they left.
async fn run_event_loop(
  terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
  app: &mut App,
  mut rx: UnboundedReceiver<Msg>,
) -> Result<Flow> {
  loop {
    while let Ok(msg) = rx.try_recv() {
      app.apply(msg);
    }

    terminal.draw(|f| ui::draw(f, app)).context("drawing frame")?;

    // Poll for an event, yielding control to tokio while waiting.
    let maybe_event = tokio::task::block_in_place(|| {
      if event::poll(Duration::from_millis(50))? {
        Ok::<_, io::Error>(Some(event::read()?))
      } else {
        Ok(None)
      }
    })?;

    if let Some(Event::Key(key)) = maybe_event {
      if key.kind != KeyEventKind::Press {
        continue;
      }
      match app.handle_key(key) {
        Flow::Continue => {}
        flow => return Ok(flow),
      }
    }
  }
}
