// SPDX-License-Identifier: MPL-2.0
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Markup Error: {0}")]
    Markup(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A `data-*` attribute parsed but holds a value the slider cannot use.
    #[error("Invalid attribute data-{name}={value:?}: {reason}")]
    InvalidAttribute {
        name: &'static str,
        value: String,
        reason: &'static str,
    },
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

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Markup(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
