use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use item_list_tui::{ListController, Snapshot};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tracing::{debug, info};

use crate::app::{handle_key_event, App};
use crate::ui;

/// What to replay when running without a terminal
#[derive(Debug, Clone, Default)]
pub struct HeadlessOptions {
    pub title: String,
    pub items: Vec<String>,
    pub clear: bool,
    pub json: bool,
}

/// Feeds each item through the controller the same way the input field does:
/// a text change followed by a submit.
fn replay(items: &[String], clear: bool) -> ListController {
    let mut controller = ListController::new();
    for item in items {
        controller.set_draft(item.as_str());
        controller.submit();
    }
    if clear {
        controller.clear_all();
    }
    controller
}

/// Run the application in headless mode (no UI)
pub fn run_headless(options: &HeadlessOptions) -> Result<()> {
    let controller = replay(&options.items, options.clear);
    info!(
        given = options.items.len(),
        added = controller.entries().len(),
        "headless replay finished"
    );

    let output = if options.json {
        render_headless_json(&options.title, controller.snapshot())?
    } else {
        render_headless_text(&options.title, controller.snapshot())
    };
    println!("{output}");

    Ok(())
}

fn render_headless_text(title: &str, snapshot: Snapshot<'_>) -> String {
    let mut lines = vec![
        title.to_string(),
        "=".repeat(title.chars().count()),
        format!("Items: {}", snapshot.entries.len()),
    ];
    lines.extend(snapshot.entries.iter().map(|entry| format!("- {entry}")));
    lines.join("\n")
}

fn render_headless_json(title: &str, snapshot: Snapshot<'_>) -> Result<String> {
    let output = HeadlessOutput { title, snapshot };
    Ok(serde_json::to_string_pretty(&output)?)
}

#[derive(serde::Serialize)]
struct HeadlessOutput<'a> {
    title: &'a str,
    #[serde(flatten)]
    snapshot: Snapshot<'a>,
}

/// Applies one terminal event to the app. Returns whether a redraw is needed.
fn handle_event(app: &mut App, event: &Event) -> bool {
    match event {
        // Release and repeat events would double every keystroke on some platforms
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(app, *key);
            true
        }
        // Redraw picks up the new size
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            true
        }
        _ => false,
    }
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    let mut events = EventStream::new();

    draw(terminal, app)?;

    while app.running {
        let Some(event) = events.next().await else {
            break;
        };
        let event = event.map_err(|e| eyre!("Terminal event error: {e}"))?;

        if handle_event(app, &event) && app.running {
            draw(terminal, app)?;
        }
    }

    Ok(())
}

fn draw(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &App) -> Result<()> {
    terminal
        .draw(|f| ui::ui(app, f))
        .map(|_| ())
        .map_err(|e| eyre!("Terminal draw error: {e}"))
}
