use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend operation a dashboard user can pick.
///
/// The set is closed: every screen of the dashboard corresponds to exactly
/// one variant, and selecting a variant is what drives state transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    ListAll,
    GetById,
    SemanticSearch,
    GetRelatedInfo,
    Create,
    Update,
}

impl Operation {
    /// All operations in sidebar order
    pub const ALL: [Operation; 6] = [
        Operation::ListAll,
        Operation::GetById,
        Operation::SemanticSearch,
        Operation::GetRelatedInfo,
        Operation::Create,
        Operation::Update,
    ];

    /// Stable key used in logs and serialized state
    pub fn key(self) -> &'static str {
        match self {
            Operation::ListAll => "patients",
            Operation::GetById => "patient_by_id",
            Operation::SemanticSearch => "semantic_search",
            Operation::GetRelatedInfo => "appointment_info",
            Operation::Create => "create_patient",
            Operation::Update => "update_patient",
        }
    }

    /// Endpoint label shown in the sidebar
    pub fn label(self) -> &'static str {
        match self {
            Operation::ListAll => "GET /patients",
            Operation::GetById => "GET /patient/{id}",
            Operation::SemanticSearch => "POST /search",
            Operation::GetRelatedInfo => "GET /appointment_info/{id}",
            Operation::Create => "POST /create_patient",
            Operation::Update => "PUT /update_patient/{id}",
        }
    }

    /// Screen heading: the key with underscores as spaces, upper-cased
    pub fn title(self) -> String {
        self.key().replace('_', " ").to_uppercase()
    }

    /// Whether selecting this operation fetches data for the table
    pub fn is_fetch(self) -> bool {
        self.form_mode().is_none()
    }

    /// Form mode for write operations, `None` for fetches
    pub fn form_mode(self) -> Option<FormMode> {
        match self {
            Operation::Create => Some(FormMode::Create),
            Operation::Update => Some(FormMode::Update),
            _ => None,
        }
    }

    /// Fetches addressed by the identifier input
    pub fn needs_identifier(self) -> bool {
        matches!(self, Operation::GetById | Operation::GetRelatedInfo)
    }

    pub fn needs_query(self) -> bool {
        matches!(self, Operation::SemanticSearch)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Mode of the create/update form dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Update,
}

impl FormMode {
    pub fn operation(self) -> Operation {
        match self {
            FormMode::Create => Operation::Create,
            FormMode::Update => Operation::Update,
        }
    }

    /// Dialog heading
    pub fn title(self) -> &'static str {
        match self {
            FormMode::Create => "Create Patient",
            FormMode::Update => "Update Patient",
        }
    }

    /// Label of the confirm button
    pub fn action(self) -> &'static str {
        match self {
            FormMode::Create => "Create",
            FormMode::Update => "Update",
        }
    }
}
