#[cfg(feature = "json_schema")]
use schemars::JsonSchema;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Represents all possible errors in the recursive-readdir crate.
///
/// Errors carry their causes as strings so that they can be stored in
/// serializable [`crate::Item`]s.
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
pub enum Error {
    /// Error indicating a failure to read data.
    #[error("Failed to read {what}: {how}")]
    Read {
        /// The item that failed to be read.
        what: String,
        /// The reason for the failure.
        how: String,
    },
    /// Error indicating an invalid argument was provided.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Error indicating a failure to parse data.
    #[error("Failed to parse {what}: {how}")]
    Parse {
        /// The item that failed to be parse.
        what: String,
        /// The reason for the failure.
        how: String,
    },
}

impl Error {
    pub(crate) fn read(what: impl Into<String>, err: std::io::Error) -> Self {
        Error::Read {
            what: what.into(),
            how: err.to_string(),
        }
    }
}

/// A whole directory could not be listed.
///
/// Returned in place of the directory's items, see [`crate::Listing`].
#[cfg_attr(feature = "json_schema", derive(JsonSchema))]
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Hash, Eq)]
#[error("Cannot list directory {path}: {error}")]
pub struct DirError {
    /// The underlying failure.
    pub error: Error,
    /// The directory path as it was requested.
    pub path: String,
}
