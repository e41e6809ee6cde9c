use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

use crate::{Error, FieldPayload, Operation, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs entered for the active operation.
///
/// Fields that do not apply to an operation are ignored by
/// [`RequestSpec::build`], never cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    /// Identifier for get-by-id, related-info and update
    pub identifier: String,
    /// Free-text query for semantic search
    pub query: String,
    /// Form payload for create and update
    pub payload: Option<FieldPayload>,
}

impl Parameters {
    pub fn with_identifier(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            ..Self::default()
        }
    }

    pub fn with_query(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    pub fn with_payload(payload: FieldPayload) -> Self {
        Self {
            payload: Some(payload),
            ..Self::default()
        }
    }
}

/// Outbound request descriptor: exactly one per executed operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestSpec {
    pub operation: Operation,
    pub method: Method,
    /// Path relative to the API base, always starting with `/`
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Map an operation and its parameters to the request it issues.
    ///
    /// Identifiers are spliced into the path as typed, without escaping.
    pub fn build(operation: Operation, params: &Parameters) -> Result<Self> {
        let (method, path, body) = match operation {
            Operation::ListAll => (Method::Get, "/patients".to_string(), None),
            Operation::GetById => {
                let id = require_identifier(operation, params)?;
                (Method::Get, format!("/patient/{}", id), None)
            }
            Operation::GetRelatedInfo => {
                let id = require_identifier(operation, params)?;
                (Method::Get, format!("/appointment_info/{}", id), None)
            }
            Operation::SemanticSearch => {
                if params.query.is_empty() {
                    return Err(Error::MissingQuery);
                }
                (
                    Method::Post,
                    "/search".to_string(),
                    Some(json!({ "query": params.query })),
                )
            }
            Operation::Create => {
                let payload = require_payload(operation, params)?;
                (
                    Method::Post,
                    "/create_patient".to_string(),
                    Some(payload.to_json()),
                )
            }
            Operation::Update => {
                let id = require_identifier(operation, params)?;
                let payload = require_payload(operation, params)?;
                (
                    Method::Put,
                    format!("/update_patient/{}", id),
                    Some(payload.to_json()),
                )
            }
        };

        Ok(Self {
            operation,
            method,
            path,
            body,
        })
    }

    /// Absolute URL against `base_url`, tolerating a trailing slash on the base
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

impl fmt::Display for RequestSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

fn require_identifier(operation: Operation, params: &Parameters) -> Result<&str> {
    if params.identifier.is_empty() {
        return Err(Error::MissingIdentifier(operation));
    }
    Ok(&params.identifier)
}

fn require_payload(operation: Operation, params: &Parameters) -> Result<&FieldPayload> {
    params
        .payload
        .as_ref()
        .ok_or(Error::MissingPayload(operation))
}
