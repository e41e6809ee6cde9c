use anyhow::Result;
use medboard_runtime::{Config, HttpBackend};
use medboard_types::{Operation, Parameters};

use crate::args::{CallCommand, OutputFormat};
use crate::presentation::renderers::ConsoleRenderer;

pub fn handle(config: &Config, format: OutputFormat, command: CallCommand) -> Result<()> {
    let (operation, params) = to_request(command);
    let backend = HttpBackend::from_config(config)?;

    tracing::debug!(operation = %operation, base_url = backend.base_url(), "running one-shot call");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let value = runtime.block_on(medboard_runtime::execute(&backend, operation, &params))?;

    ConsoleRenderer::new(format).render(operation, &value)
}

fn to_request(command: CallCommand) -> (Operation, Parameters) {
    match command {
        CallCommand::List => (Operation::ListAll, Parameters::default()),
        CallCommand::Get { id } => (Operation::GetById, Parameters::with_identifier(id)),
        CallCommand::Search { query } => (Operation::SemanticSearch, Parameters::with_query(query)),
        CallCommand::Related { id } => (Operation::GetRelatedInfo, Parameters::with_identifier(id)),
        CallCommand::Create { fields } => (
            Operation::Create,
            Parameters::with_payload(fields.into_payload()),
        ),
        CallCommand::Update { id, fields } => (
            Operation::Update,
            Parameters {
                identifier: id,
                payload: Some(fields.into_payload()),
                ..Parameters::default()
            },
        ),
    }
}
