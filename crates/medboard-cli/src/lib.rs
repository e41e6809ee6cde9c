// NOTE: medboard Architecture Rationale
//
// Why Msg/Effect (not callbacks mutating state)?
// - Every transition lives in AppController::update and is testable without a terminal or network
// - The TUI only translates keys into Msg values and draws AppState snapshots
// - Background work (requests, debounce timers) reports back through the same Msg channel
//
// Why keep stale responses by default?
// - The dashboard has always let a late response replace the table
// - StalePolicy::Discard fences it when that is not wanted (--discard-stale)

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{CallCommand, Cli, Commands, FieldArgs, LogLevel, OutputFormat};
pub use commands::run;
