// SPDX-License-Identifier: MPL-2.0
//! Error type for the ambient parts of the crate.
//!
//! The indicator and the glass container never fail; only configuration
//! I/O and logger installation can.

use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Telemetry(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Config(e) => write!(f, "Config error: {e}"),
            Error::Telemetry(e) => write!(f, "Telemetry error: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_with_message() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing settings");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("missing settings")));
    }

    #[test]
    fn display_prefixes_category() {
        assert_eq!(
            Error::Config("bad shadow".into()).to_string(),
            "Config error: bad shadow"
        );
        assert!(Error::Telemetry("x".into())
            .to_string()
            .starts_with("Telemetry"));
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parsed: std::result::Result<toml::Value, _> = toml::from_str("a = = 1");
        let err: Error = parsed.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
