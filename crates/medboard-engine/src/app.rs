//! Dashboard controller
//!
//! All user actions and network completions arrive as [`Msg`] values.
//! [`AppController::update`] applies one message to the state and returns
//! the side effects the runtime must perform. The controller itself never
//! touches the network or the clock, so every transition is testable by
//! feeding messages and inspecting the returned effects.
//!
//! ## Request identity
//! Each request effect carries a fresh [`RequestId`]. Responses are not
//! cancelled when the user moves on; whether a late fetch response may still
//! replace the displayed result is decided by [`StalePolicy`].

use std::time::Duration;

use medboard_types::{Field, FieldPayload, FormMode, Operation, Parameters, RequestSpec};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::form::FormState;
use crate::table::{self, Rendered};

/// Monotonic identity of an issued request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// What to do with a fetch response that is no longer the latest one issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Show it anyway, overwriting the current result
    #[default]
    Apply,
    /// Drop it; only the latest fetch may replace the result
    Discard,
}

/// Delay between an identifier keystroke and the fetch it triggers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DebouncePolicy {
    pub delay: Duration,
}

impl DebouncePolicy {
    /// Fetch on every keystroke
    pub fn immediate() -> Self {
        Self::default()
    }

    pub fn after(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn is_immediate(&self) -> bool {
        self.delay.is_zero()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControllerSettings {
    pub debounce: DebouncePolicy,
    pub stale: StalePolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    SelectOperation(Operation),
    /// New text for the identifier or query input of the active operation
    ChangeParameter(String),
    SubmitSearch,
    EditField(Field, String),
    FocusField(Field),
    SubmitForm,
    /// Identifier typed into the update prompt; empty abandons the update
    SubmitIdentifier(String),
    CloseForm,
    DebounceElapsed(u64),
    Completed {
        id: RequestId,
        operation: Operation,
        outcome: Result<Value, String>,
    },
}

/// Side effect requested by the controller
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Request { id: RequestId, spec: RequestSpec },
    /// Deliver `Msg::DebounceElapsed(generation)` after `delay`
    ScheduleDebounce { generation: u64, delay: Duration },
}

/// Modal dialog currently on screen
#[derive(Debug, Clone, PartialEq)]
pub enum Dialog {
    Form(FormState),
    /// Update form submitted; waiting for the identifier to address it
    Identifier { payload: FieldPayload },
}

/// Coarse view of the controller state, derived from [`AppState`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase<'a> {
    Idle,
    AwaitingFetch,
    Displaying(&'a Value),
    FormOpen(FormMode, &'a FormState),
    PromptingIdentifier(&'a FieldPayload),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub operation: Operation,
    /// Identifier and query text; kept across operation switches
    pub params: Parameters,
    /// Latest applied fetch result, replaced wholesale
    pub result: Option<Value>,
    pub dialog: Option<Dialog>,
    pub in_flight: usize,
    /// Last request failure, for the status line
    pub last_error: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            operation: Operation::ListAll,
            params: Parameters::default(),
            result: None,
            dialog: None,
            in_flight: 0,
            last_error: None,
        }
    }
}

impl AppState {
    pub fn phase(&self) -> Phase<'_> {
        match &self.dialog {
            Some(Dialog::Form(form)) => Phase::FormOpen(form.mode(), form),
            Some(Dialog::Identifier { payload }) => Phase::PromptingIdentifier(payload),
            None if self.in_flight > 0 => Phase::AwaitingFetch,
            None => match &self.result {
                Some(value) => Phase::Displaying(value),
                None => Phase::Idle,
            },
        }
    }

    pub fn form(&self) -> Option<&FormState> {
        match &self.dialog {
            Some(Dialog::Form(form)) => Some(form),
            _ => None,
        }
    }

    /// Current result as a table
    pub fn rendered(&self) -> Rendered {
        self.result
            .as_ref()
            .map(table::render)
            .unwrap_or(Rendered::Empty)
    }
}

pub struct AppController {
    state: AppState,
    settings: ControllerSettings,
    next_request: u64,
    latest_fetch: Option<RequestId>,
    debounce_generation: u64,
}

impl AppController {
    pub fn new(settings: ControllerSettings) -> Self {
        Self {
            state: AppState::default(),
            settings,
            next_request: 0,
            latest_fetch: None,
            debounce_generation: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Initial transition: fetch the default list view
    pub fn start(&mut self) -> Vec<Effect> {
        self.update(Msg::SelectOperation(Operation::ListAll))
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Effect> {
        match msg {
            Msg::SelectOperation(op) => self.select(op),
            Msg::ChangeParameter(text) => self.change_parameter(text),
            Msg::SubmitSearch => {
                if self.state.dialog.is_some() {
                    return Vec::new();
                }
                self.fetch(Operation::SemanticSearch)
            }
            Msg::EditField(field, value) => {
                if let Some(Dialog::Form(form)) = &mut self.state.dialog {
                    form.set(field, value);
                }
                Vec::new()
            }
            Msg::FocusField(field) => {
                if let Some(Dialog::Form(form)) = &mut self.state.dialog {
                    form.focus(field);
                }
                Vec::new()
            }
            Msg::SubmitForm => self.submit_form(),
            Msg::SubmitIdentifier(id) => self.submit_identifier(id),
            Msg::CloseForm => {
                self.state.dialog = None;
                self.state.operation = Operation::ListAll;
                Vec::new()
            }
            Msg::DebounceElapsed(generation) => {
                let op = self.state.operation;
                if generation != self.debounce_generation
                    || self.state.dialog.is_some()
                    || !op.needs_identifier()
                {
                    return Vec::new();
                }
                self.fetch(op)
            }
            Msg::Completed {
                id,
                operation,
                outcome,
            } => self.complete(id, operation, outcome),
        }
    }

    fn select(&mut self, op: Operation) -> Vec<Effect> {
        if self.state.dialog.is_some() {
            tracing::debug!(operation = %op, "ignoring selection while a dialog is open");
            return Vec::new();
        }

        // A pending keystroke timer belongs to the previous operation
        self.debounce_generation += 1;
        self.state.operation = op;
        match op.form_mode() {
            Some(mode) => {
                self.state.dialog = Some(Dialog::Form(FormState::empty(mode)));
                Vec::new()
            }
            // Search waits for an explicit submit
            None if op.needs_query() => Vec::new(),
            None => self.fetch(op),
        }
    }

    fn change_parameter(&mut self, text: String) -> Vec<Effect> {
        if self.state.dialog.is_some() {
            return Vec::new();
        }

        let op = self.state.operation;
        if op.needs_query() {
            self.state.params.query = text;
            return Vec::new();
        }
        if !op.needs_identifier() {
            return Vec::new();
        }

        self.state.params.identifier = text;
        if self.settings.debounce.is_immediate() {
            return self.fetch(op);
        }

        self.debounce_generation += 1;
        vec![Effect::ScheduleDebounce {
            generation: self.debounce_generation,
            delay: self.settings.debounce.delay,
        }]
    }

    fn submit_form(&mut self) -> Vec<Effect> {
        let form = match self.state.dialog.take() {
            Some(Dialog::Form(form)) => form,
            other => {
                self.state.dialog = other;
                return Vec::new();
            }
        };

        let payload = form.submit();
        match form.mode() {
            FormMode::Create => {
                self.state.operation = Operation::ListAll;
                self.write(Operation::Create, Parameters::with_payload(payload))
            }
            FormMode::Update => {
                self.state.dialog = Some(Dialog::Identifier { payload });
                Vec::new()
            }
        }
    }

    fn submit_identifier(&mut self, identifier: String) -> Vec<Effect> {
        let payload = match self.state.dialog.take() {
            Some(Dialog::Identifier { payload }) => payload,
            other => {
                self.state.dialog = other;
                return Vec::new();
            }
        };

        self.state.operation = Operation::ListAll;
        if identifier.is_empty() {
            tracing::info!("update abandoned: no identifier given");
            return Vec::new();
        }

        let params = Parameters {
            identifier,
            payload: Some(payload),
            ..Parameters::default()
        };
        self.write(Operation::Update, params)
    }

    fn fetch(&mut self, op: Operation) -> Vec<Effect> {
        match RequestSpec::build(op, &self.state.params) {
            Ok(spec) => {
                let id = self.issue();
                self.latest_fetch = Some(id);
                tracing::debug!(request = id.0, %spec, "issuing fetch");
                vec![Effect::Request { id, spec }]
            }
            Err(err) => {
                tracing::debug!(operation = %op, error = %err, "fetch skipped");
                Vec::new()
            }
        }
    }

    fn write(&mut self, op: Operation, params: Parameters) -> Vec<Effect> {
        match RequestSpec::build(op, &params) {
            Ok(spec) => {
                let id = self.issue();
                tracing::debug!(request = id.0, %spec, "issuing write");
                vec![Effect::Request { id, spec }]
            }
            Err(err) => {
                tracing::warn!(operation = %op, error = %err, "write not sent");
                self.state.last_error = Some(err.to_string());
                self.fetch(Operation::ListAll)
            }
        }
    }

    fn issue(&mut self) -> RequestId {
        self.next_request += 1;
        self.state.in_flight += 1;
        RequestId(self.next_request)
    }

    fn complete(
        &mut self,
        id: RequestId,
        operation: Operation,
        outcome: Result<Value, String>,
    ) -> Vec<Effect> {
        self.state.in_flight = self.state.in_flight.saturating_sub(1);

        if !operation.is_fetch() {
            match outcome {
                Ok(_) => tracing::debug!(request = id.0, operation = %operation, "write completed"),
                Err(err) => {
                    tracing::warn!(request = id.0, operation = %operation, error = %err, "write failed");
                    self.state.last_error = Some(err);
                }
            }
            // Refresh regardless of how the write went
            return self.fetch(Operation::ListAll);
        }

        let stale = self.latest_fetch != Some(id);
        if stale && self.settings.stale == StalePolicy::Discard {
            tracing::debug!(request = id.0, operation = %operation, "discarding stale response");
            return Vec::new();
        }

        match outcome {
            Ok(value) => {
                self.state.result = Some(value);
                self.state.last_error = None;
            }
            Err(err) => {
                tracing::warn!(request = id.0, operation = %operation, error = %err, "fetch failed");
                self.state.last_error = Some(err);
            }
        }
        Vec::new()
    }
}
