// SPDX-License-Identifier: MPL-2.0
use crate::application::port::FetchError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Fetch(FetchError),
    Validation(ValidationError),
}

/// Reasons a dropped file is refused by the drop zone.
/// A rejected file is excluded from ingestion; the others still go through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The extension is not on the allow-list (or the file has none).
    ExtensionNotAllowed {
        /// File name as dropped.
        file_name: String,
    },

    /// The file exceeds the byte ceiling.
    TooLarge {
        /// File name as dropped.
        file_name: String,
        /// Actual size in bytes.
        size: u64,
        /// Configured ceiling in bytes.
        max: u64,
    },

    /// The file is empty.
    Empty {
        /// File name as dropped.
        file_name: String,
    },
}

impl ValidationError {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::ExtensionNotAllowed { .. } => "error-drop-extension-not-allowed",
            ValidationError::TooLarge { .. } => "error-drop-file-too-large",
            ValidationError::Empty { .. } => "error-drop-file-empty",
        }
    }

    /// Name of the file the error refers to.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            ValidationError::ExtensionNotAllowed { file_name }
            | ValidationError::TooLarge { file_name, .. }
            | ValidationError::Empty { file_name } => file_name,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ExtensionNotAllowed { file_name } => {
                write!(f, "{file_name}: file type not allowed")
            }
            ValidationError::TooLarge {
                file_name, max, ..
            } => write!(f, "{file_name}: larger than {}", format_bytes(*max)),
            ValidationError::Empty { file_name } => write!(f, "{file_name}: file is empty"),
        }
    }
}

impl std::error::Error for ValidationError {}

impl Error {
    /// Returns the i18n message key for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Fetch(e) => e.i18n_key(),
            Error::Validation(e) => e.i18n_key(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Fetch(e) => write!(f, "Fetch Error: {}", e),
            Error::Validation(e) => write!(f, "Validation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<FetchError> for Error {
    fn from(err: FetchError) -> Self {
        Error::Fetch(err)
    }
}

impl From<ValidationError> for Error {
    fn from(err: ValidationError) -> Self {
        Error::Validation(err)
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

pub type Result<T> = std::result::Result<T, Error>;

/// Formats a byte count with a binary unit (e.g. `10 MiB`).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    #[allow(clippy::cast_precision_loss)]
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if value.fract() == 0.0 {
        format!("{value:.0} {}", UNITS[unit])
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}
