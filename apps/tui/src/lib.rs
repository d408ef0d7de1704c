// Export our modules for use in binaries and tests
pub mod config;
pub mod controller;

pub use controller::{ListController, Snapshot};
