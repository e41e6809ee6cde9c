//! Keyboard handling
//!
//! Keys are translated into controller messages here. The only state kept
//! on this side is what the controller has no opinion about: which pane has
//! focus, the sidebar cursor, and the text of the update identifier prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use medboard_engine::{AppState, Dialog, FormState, Msg};
use medboard_types::{FormMode, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    /// Identifier or query input of the active operation
    Input,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Highlighted sidebar row, index into `Operation::ALL`
    pub cursor: usize,
    /// Text typed into the update identifier prompt
    pub prompt: String,
    pub should_quit: bool,
}

impl UiState {
    pub fn highlighted(&self) -> Operation {
        Operation::ALL[self.cursor]
    }
}

pub fn map_key(ui: &mut UiState, state: &AppState, key: KeyEvent) -> Vec<Msg> {
    if key.kind != KeyEventKind::Press {
        return Vec::new();
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        ui.should_quit = true;
        return Vec::new();
    }

    match &state.dialog {
        Some(Dialog::Form(form)) => form_key(ui, form, key),
        Some(Dialog::Identifier { .. }) => prompt_key(ui, key),
        None => match ui.focus {
            Focus::Sidebar => sidebar_key(ui, state, key),
            Focus::Input => input_key(ui, state, key),
        },
    }
}

fn form_key(ui: &mut UiState, form: &FormState, key: KeyEvent) -> Vec<Msg> {
    let focused = form.focused();
    match key.code {
        KeyCode::Esc => {
            back_to_list(ui);
            vec![Msg::CloseForm]
        }
        KeyCode::Tab | KeyCode::Down => vec![Msg::FocusField(form.next_field())],
        KeyCode::BackTab | KeyCode::Up => vec![Msg::FocusField(form.prev_field())],
        KeyCode::Enter => {
            // Update stays on its row until the identifier prompt is answered
            if form.mode() == FormMode::Create {
                back_to_list(ui);
            } else {
                ui.focus = Focus::Sidebar;
            }
            vec![Msg::SubmitForm]
        }
        KeyCode::Backspace => {
            let mut value = form.value(focused).to_string();
            value.pop();
            vec![Msg::EditField(focused, value)]
        }
        KeyCode::Char(c) => {
            let mut value = form.value(focused).to_string();
            value.push(c);
            vec![Msg::EditField(focused, value)]
        }
        _ => Vec::new(),
    }
}

/// The controller falls back to the patient list when a dialog closes
fn back_to_list(ui: &mut UiState) {
    ui.focus = Focus::Sidebar;
    ui.cursor = 0;
}

fn prompt_key(ui: &mut UiState, key: KeyEvent) -> Vec<Msg> {
    match key.code {
        // Cancelling the prompt is the same as submitting nothing
        KeyCode::Esc => {
            ui.prompt.clear();
            back_to_list(ui);
            vec![Msg::SubmitIdentifier(String::new())]
        }
        KeyCode::Enter => {
            back_to_list(ui);
            vec![Msg::SubmitIdentifier(std::mem::take(&mut ui.prompt))]
        }
        KeyCode::Backspace => {
            ui.prompt.pop();
            Vec::new()
        }
        KeyCode::Char(c) => {
            ui.prompt.push(c);
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn sidebar_key(ui: &mut UiState, state: &AppState, key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            ui.should_quit = true;
            Vec::new()
        }
        KeyCode::Up | KeyCode::Char('k') => {
            ui.cursor = ui.cursor.saturating_sub(1);
            Vec::new()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            ui.cursor = (ui.cursor + 1).min(Operation::ALL.len() - 1);
            Vec::new()
        }
        KeyCode::Char(c @ '1'..='6') => {
            ui.cursor = c as usize - '1' as usize;
            select(ui)
        }
        KeyCode::Enter => select(ui),
        KeyCode::Tab => {
            if has_input(state.operation) {
                ui.focus = Focus::Input;
            }
            Vec::new()
        }
        _ => Vec::new(),
    }
}

fn select(ui: &mut UiState) -> Vec<Msg> {
    let op = ui.highlighted();
    if has_input(op) {
        ui.focus = Focus::Input;
    }
    vec![Msg::SelectOperation(op)]
}

fn input_key(ui: &mut UiState, state: &AppState, key: KeyEvent) -> Vec<Msg> {
    let op = state.operation;
    let current = input_text(state);
    match key.code {
        KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
            ui.focus = Focus::Sidebar;
            Vec::new()
        }
        KeyCode::Enter if op.needs_query() => vec![Msg::SubmitSearch],
        KeyCode::Backspace => {
            let mut text = current.to_string();
            text.pop();
            vec![Msg::ChangeParameter(text)]
        }
        KeyCode::Char(c) => {
            let mut text = current.to_string();
            text.push(c);
            vec![Msg::ChangeParameter(text)]
        }
        _ => Vec::new(),
    }
}

pub fn has_input(op: Operation) -> bool {
    op.needs_identifier() || op.needs_query()
}

/// Text of the input bar for the active operation
pub fn input_text(state: &AppState) -> &str {
    if state.operation.needs_query() {
        &state.params.query
    } else {
        &state.params.identifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medboard_engine::{AppController, ControllerSettings};
    use medboard_types::Field;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn state_with(op: Operation) -> AppState {
        AppState {
            operation: op,
            ..AppState::default()
        }
    }

    #[test]
    fn test_digit_selects_and_focuses_input() {
        let mut ui = UiState::default();
        let msgs = map_key(&mut ui, &AppState::default(), press(KeyCode::Char('2')));

        assert_eq!(msgs, vec![Msg::SelectOperation(Operation::GetById)]);
        assert_eq!(ui.focus, Focus::Input);
        assert_eq!(ui.cursor, 1);
    }

    #[test]
    fn test_list_selection_keeps_sidebar_focus() {
        let mut ui = UiState::default();
        let msgs = map_key(&mut ui, &AppState::default(), press(KeyCode::Enter));

        assert_eq!(msgs, vec![Msg::SelectOperation(Operation::ListAll)]);
        assert_eq!(ui.focus, Focus::Sidebar);
    }

    #[test]
    fn test_typing_appends_to_identifier() {
        let mut ui = UiState {
            focus: Focus::Input,
            ..UiState::default()
        };
        let mut state = state_with(Operation::GetById);
        state.params.identifier = "1".to_string();

        let msgs = map_key(&mut ui, &state, press(KeyCode::Char('2')));

        assert_eq!(msgs, vec![Msg::ChangeParameter("12".to_string())]);
    }

    #[test]
    fn test_enter_submits_search_only() {
        let mut ui = UiState {
            focus: Focus::Input,
            ..UiState::default()
        };

        let search = map_key(&mut ui, &state_with(Operation::SemanticSearch), press(KeyCode::Enter));
        let by_id = map_key(&mut ui, &state_with(Operation::GetById), press(KeyCode::Enter));

        assert_eq!(search, vec![Msg::SubmitSearch]);
        assert!(by_id.is_empty());
    }

    #[test]
    fn test_form_keys_edit_focused_field() {
        let mut app = AppController::new(ControllerSettings::default());
        app.update(Msg::SelectOperation(Operation::Create));
        app.update(Msg::EditField(Field::Name, "Ad".to_string()));
        let mut ui = UiState::default();

        let typed = map_key(&mut ui, app.state(), press(KeyCode::Char('a')));
        let tabbed = map_key(&mut ui, app.state(), press(KeyCode::Tab));
        let back = map_key(&mut ui, app.state(), press(KeyCode::BackTab));

        assert_eq!(typed, vec![Msg::EditField(Field::Name, "Ada".to_string())]);
        assert_eq!(tabbed, vec![Msg::FocusField(Field::Gender)]);
        assert_eq!(back, vec![Msg::FocusField(Field::MedicalHistory)]);
    }

    #[test]
    fn test_escape_closes_form() {
        let mut app = AppController::new(ControllerSettings::default());
        app.update(Msg::SelectOperation(Operation::Update));
        assert!(matches!(
            app.state().form().map(FormState::mode),
            Some(FormMode::Update)
        ));
        let mut ui = UiState::default();

        let msgs = map_key(&mut ui, app.state(), press(KeyCode::Esc));

        assert_eq!(msgs, vec![Msg::CloseForm]);
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_prompt_collects_identifier_until_enter() {
        let mut app = AppController::new(ControllerSettings::default());
        app.update(Msg::SelectOperation(Operation::Update));
        app.update(Msg::SubmitForm);
        let mut ui = UiState::default();

        assert!(map_key(&mut ui, app.state(), press(KeyCode::Char('4'))).is_empty());
        assert!(map_key(&mut ui, app.state(), press(KeyCode::Char('2'))).is_empty());
        let msgs = map_key(&mut ui, app.state(), press(KeyCode::Enter));

        assert_eq!(msgs, vec![Msg::SubmitIdentifier("42".to_string())]);
        assert!(ui.prompt.is_empty());
    }

    #[test]
    fn test_prompt_escape_abandons() {
        let mut app = AppController::new(ControllerSettings::default());
        app.update(Msg::SelectOperation(Operation::Update));
        app.update(Msg::SubmitForm);
        let mut ui = UiState {
            prompt: "9".to_string(),
            ..UiState::default()
        };

        let msgs = map_key(&mut ui, app.state(), press(KeyCode::Esc));

        assert_eq!(msgs, vec![Msg::SubmitIdentifier(String::new())]);
    }

    #[test]
    fn test_quit_keys() {
        let mut ui = UiState::default();
        map_key(&mut ui, &AppState::default(), press(KeyCode::Char('q')));
        assert!(ui.should_quit);

        let mut ui = UiState {
            focus: Focus::Input,
            ..UiState::default()
        };
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        map_key(&mut ui, &state_with(Operation::GetById), ctrl_c);
        assert!(ui.should_quit);
    }

    #[test]
    fn test_q_in_input_is_text() {
        let mut ui = UiState {
            focus: Focus::Input,
            ..UiState::default()
        };

        let msgs = map_key(&mut ui, &state_with(Operation::SemanticSearch), press(KeyCode::Char('q')));

        assert_eq!(msgs, vec![Msg::ChangeParameter("q".to_string())]);
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_closing_form_moves_cursor_back_to_list() {
        let mut app = AppController::new(ControllerSettings::default());
        let mut ui = UiState::default();
        map_key(&mut ui, app.state(), press(KeyCode::Char('5')));
        app.update(Msg::SelectOperation(Operation::Create));
        assert_eq!(ui.highlighted(), Operation::Create);

        for msg in map_key(&mut ui, app.state(), press(KeyCode::Esc)) {
            app.update(msg);
        }

        assert_eq!(ui.highlighted(), app.state().operation);
        assert_eq!(ui.highlighted(), Operation::ListAll);
    }

    #[test]
    fn test_cursor_follows_update_through_prompt() {
        let mut app = AppController::new(ControllerSettings::default());
        let mut ui = UiState::default();
        map_key(&mut ui, app.state(), press(KeyCode::Char('6')));
        app.update(Msg::SelectOperation(Operation::Update));

        for msg in map_key(&mut ui, app.state(), press(KeyCode::Enter)) {
            app.update(msg);
        }
        assert_eq!(ui.highlighted(), Operation::Update);

        map_key(&mut ui, app.state(), press(KeyCode::Char('3')));
        for msg in map_key(&mut ui, app.state(), press(KeyCode::Enter)) {
            app.update(msg);
        }

        assert_eq!(ui.highlighted(), app.state().operation);
        assert_eq!(ui.highlighted(), Operation::ListAll);
    }
}
