use std::fmt;

/// Result type for medboard-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Operation could not be turned into a request
    Request(medboard_types::Error),

    /// Network failure: unreachable host, timeout, broken connection
    Transport(reqwest::Error),

    /// Response body was not valid JSON
    Decode {
        status: u16,
        source: serde_json::Error,
    },

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Request(err) => write!(f, "Invalid request: {}", err),
            Error::Transport(err) => write!(f, "Request failed: {}", err),
            Error::Decode { status, source } => {
                write!(f, "Invalid JSON in HTTP {} response: {}", status, source)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Request(err) => Some(err),
            Error::Transport(err) => Some(err),
            Error::Decode { source, .. } => Some(source),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<medboard_types::Error> for Error {
    fn from(err: medboard_types::Error) -> Self {
        Error::Request(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
