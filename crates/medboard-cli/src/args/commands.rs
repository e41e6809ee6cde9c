use super::enums::OutputFormat;
use clap::{Args, Subcommand};
use medboard_types::{Field, FieldPayload};

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive dashboard (default)")]
    Tui {
        #[arg(long, help = "Delay before identifier typing triggers a fetch")]
        debounce_ms: Option<u64>,

        #[arg(long, help = "Drop responses to requests that have been superseded")]
        discard_stale: bool,
    },

    #[command(about = "Run a single operation and print the result")]
    Call {
        #[arg(long, default_value = "plain")]
        format: OutputFormat,

        #[command(subcommand)]
        command: CallCommand,
    },

    #[command(about = "Print the effective configuration")]
    Config,
}

#[derive(Subcommand)]
pub enum CallCommand {
    #[command(about = "GET /patients")]
    List,

    #[command(about = "GET /patient/{id}")]
    Get { id: String },

    #[command(about = "POST /search")]
    Search { query: String },

    #[command(about = "GET /appointment_info/{id}")]
    Related { id: String },

    #[command(about = "POST /create_patient")]
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },

    #[command(about = "PUT /update_patient/{id}")]
    Update {
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },
}

/// Form fields for create/update; omitted fields are sent as empty text
#[derive(Debug, Clone, Default, Args)]
pub struct FieldArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub gender: String,

    #[arg(long, default_value = "")]
    pub height_cm: String,

    #[arg(long, default_value = "")]
    pub weight_kg: String,

    #[arg(long, default_value = "")]
    pub medical_history: String,
}

impl FieldArgs {
    pub fn into_payload(self) -> FieldPayload {
        FieldPayload::new()
            .with(Field::Name, self.name)
            .with(Field::Gender, self.gender)
            .with(Field::HeightCm, self.height_cm)
            .with(Field::WeightKg, self.weight_kg)
            .with(Field::MedicalHistory, self.medical_history)
    }
}
