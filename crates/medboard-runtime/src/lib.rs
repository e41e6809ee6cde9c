pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;

pub use client::{Backend, HttpBackend, execute};
pub use config::{Config, resolve_data_dir};
pub use dispatcher::Dispatcher;
pub use error::{Error, Result};
