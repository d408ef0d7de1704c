// App module for item_list_tui
// Holds the view state and turns key presses into list intents

pub mod input;
pub mod state;

pub use input::{handle_input, handle_key_event};
pub use state::{App, Focus};
