pub mod error;
pub mod field;
pub mod operation;
pub mod request;

pub use error::{Error, Result};
pub use field::{Field, FieldPayload};
pub use operation::{FormMode, Operation};
pub use request::{Method, Parameters, RequestSpec};
