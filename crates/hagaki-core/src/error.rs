use thiserror::Error;

/// Record construction errors.
///
/// The encoder itself never fails; every rule that can reject input is
/// enforced when a record is built or deserialized.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("a formatted name or structured name is required")]
    MissingName,
    #[error("extension property `{0}` does not carry the x- prefix")]
    InvalidExtensionName(String),
    #[error("unsupported vCard major version: {0}")]
    UnsupportedVersion(u8),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
