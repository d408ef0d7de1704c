mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::Result;
use item_list_tui::config::{init_app_config, AppConfig};
use tracing::{info, warn};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    let headless = args.headless || !is_terminal();
    init_logging(&config, headless)?;
    info!(version = env!("CARGO_PKG_VERSION"), headless, "starting item list");

    if headless {
        return event::run_headless(&event::HeadlessOptions {
            title: config.title,
            items: args.items,
            clear: args.clear,
            json: args.json,
        });
    }

    let ignored = args.headless_only_flags();
    if !ignored.is_empty() {
        let ignored = ignored.join(", ");
        warn!(flags = %ignored, "headless-only options ignored by the terminal UI");
        eprintln!("Warning: {ignored} only apply with --headless; ignoring");
    }

    // One list per mounted view, dropped with the app
    let mut app = App::new(config.title);

    let mut terminal = terminal::setup()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup(true, true);

    result
}

/// Logs go to the configured file. Without one, the TUI stays silent and
/// headless runs log to stderr.
fn init_logging(config: &AppConfig, headless: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_file {
        if let Some(parent) = log_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_target(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "logging initialized");
    } else if headless {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
