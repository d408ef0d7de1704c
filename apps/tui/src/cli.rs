use clap::Parser;
use item_list_tui::config::{DEBUG_VAR, LOG_FILE_VAR, TITLE_VAR};

#[derive(Debug, Parser)]
#[command(name = "item_list_tui", version, about = "Item List TUI")]
pub struct CliArgs {
    /// Replay items without the UI and print the resulting list
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON (headless only)
    #[arg(long)]
    pub json: bool,

    /// Item to add, repeatable (headless only)
    #[arg(long = "item", value_name = "TEXT")]
    pub items: Vec<String>,

    /// Remove all items after replaying them (headless only)
    #[arg(long)]
    pub clear: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Override the list title
    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(path) = &self.log_file {
            std::env::set_var(LOG_FILE_VAR, path);
        }
        if let Some(title) = &self.title {
            std::env::set_var(TITLE_VAR, title);
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }

    /// Headless-only options that were given, for warning when the UI starts.
    pub fn headless_only_flags(&self) -> Vec<&'static str> {
        let mut flags = Vec::new();
        if self.json {
            flags.push("--json");
        }
        if !self.items.is_empty() {
            flags.push("--item");
        }
        if self.clear {
            flags.push("--clear");
        }
        flags
    }
}
