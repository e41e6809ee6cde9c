//! Ratatui widgets for the dashboard
//!
//! Each view borrows the piece of state it draws and implements `Widget`.
//! Views decide layout and colors only; what to show comes from the caller.

pub mod form_dialog;
pub mod input_bar;
pub mod prompt;
pub mod result_table;
pub mod sidebar;
pub mod status_bar;

pub use form_dialog::FormDialogView;
pub use input_bar::InputBarView;
pub use prompt::PromptView;
pub use result_table::ResultTableView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Style};

pub(crate) fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Centered rectangle for modal dialogs, clamped to `area`
pub(crate) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
