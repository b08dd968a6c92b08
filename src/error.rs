// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Errors raised at the edges of the application: configuration files,
/// the interior source and media fetches.
///
/// Gallery navigation itself never fails; invalid requests are no-ops.
#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    /// The interior list could not be decoded.
    Source(String),
    /// A remote request failed or returned a non-success status.
    Network(String),
}

impl Error {
    /// Returns the i18n message key used to report this error to the user.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Source(_) => "error-source",
            Error::Network(_) => "error-network",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Source(e) => write!(f, "Source Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
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

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Source(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn json_error_maps_to_source() {
        let json_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Source(_)));
        assert_eq!(err.i18n_key(), "error-source");
    }

    #[test]
    fn toml_error_maps_to_config() {
        let toml_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = toml_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn network_error_display() {
        let err = Error::Network("HTTP 503".into());
        assert_eq!(format!("{}", err), "Network Error: HTTP 503");
        assert_eq!(err.i18n_key(), "error-network");
    }
}
