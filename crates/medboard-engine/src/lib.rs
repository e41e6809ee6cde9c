// Engine module - Controller logic and result rendering
// This layer sits between the request types and the runtime/CLI that perform I/O

pub mod app;
pub mod form;
pub mod table;

pub use app::{
    AppController, AppState, ControllerSettings, DebouncePolicy, Dialog, Effect, Msg, Phase,
    RequestId, StalePolicy,
};
pub use form::FormState;
pub use table::{EMPTY_NOTICE, Rendered, Table, display_cell};

use serde_json::Value;

// Façade API - Stable public interface for the runtime and CLI layers

/// Render an arbitrary JSON result as a table, or the empty notice
pub fn render(value: &Value) -> Rendered {
    table::render(value)
}

/// Render the current result, treating "no result yet" as empty
pub fn render_optional(value: Option<&Value>) -> Rendered {
    value.map(table::render).unwrap_or(Rendered::Empty)
}
