use medboard_engine::{AppState, Dialog};
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::input::{Focus, UiState, has_input, input_text};
use super::views::{
    FormDialogView, InputBarView, PromptView, ResultTableView, SidebarView, StatusBarView,
};

/// Layout: [Sidebar | Input? + Table + Status], dialogs on top
pub fn draw(f: &mut Frame, state: &AppState, ui: &UiState) {
    let size = f.area();
    let dialog_open = state.dialog.is_some();

    let [sidebar_area, main_area] =
        Layout::horizontal([Constraint::Length(34), Constraint::Min(20)]).areas(size);

    f.render_widget(
        SidebarView::new(
            state.operation,
            ui.cursor,
            !dialog_open && ui.focus == Focus::Sidebar,
        ),
        sidebar_area,
    );

    let op = state.operation;
    let input_height = if has_input(op) { 3 } else { 0 };
    let [input_area, table_area, status_area] = Layout::vertical([
        Constraint::Length(input_height),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .areas(main_area);

    if has_input(op) {
        let placeholder = if op.needs_query() {
            "Enter search query"
        } else {
            "Enter ID"
        };
        f.render_widget(
            InputBarView::new(
                placeholder,
                input_text(state),
                !dialog_open && ui.focus == Focus::Input,
            ),
            input_area,
        );
    }

    f.render_widget(
        ResultTableView::new(op.title(), state.result.as_ref()),
        table_area,
    );
    f.render_widget(StatusBarView::new(state), status_area);

    match &state.dialog {
        Some(Dialog::Form(form)) => f.render_widget(FormDialogView::new(form), FormDialogView::area(size)),
        Some(Dialog::Identifier { .. }) => {
            f.render_widget(PromptView::new(&ui.prompt), PromptView::area(size))
        }
        None => {}
    }
}
