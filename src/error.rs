// SPDX-License-Identifier: MPL-2.0
use crate::domain::error::PlaybackError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Catalog(String),
    Playback(PlaybackError),
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Catalog(e) => write!(f, "Catalog Error: {}", e),
            Error::Playback(e) => write!(f, "Playback Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<PlaybackError> for Error {
    fn from(err: PlaybackError) -> Self {
        Error::Playback(err)
    }
}

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

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
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
    fn catalog_error_formats_properly() {
        let err = Error::Catalog("missing title".into());
        assert_eq!(format!("{}", err), "Catalog Error: missing title");
    }

    #[test]
    fn playback_error_converts() {
        let err: Error = PlaybackError::invalid_argument("volume", 2.0).into();
        assert!(matches!(err, Error::Playback(_)));
        assert!(format!("{}", err).contains("volume = 2"));
    }

    #[test]
    fn toml_error_maps_to_config() {
        let parse_err = toml::from_str::<toml::Table>("not = valid = toml").unwrap_err();
        let err: Error = parse_err.into();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn pico_args_error_becomes_usage() {
        let err: Error = pico_args::Error::MissingArgument.into();
        assert!(matches!(err, Error::Usage(_)));
        assert!(err.to_string().starts_with("Usage Error: "));
    }
}
