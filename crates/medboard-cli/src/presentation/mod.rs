pub mod renderers;
pub mod tui;
