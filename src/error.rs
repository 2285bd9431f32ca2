use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    #[error("unknown status label: {0:?}")]
    UnknownStatus(String),

    #[error("unknown diet label: {0:?}")]
    UnknownDiet(String),

    #[error("a dish with id {0} already exists")]
    DuplicateId(String),

    #[error("bad config value for {key}: {message}")]
    Config { key: &'static str, message: String },
}

// builders report a missing required field through this
impl From<derive_builder::UninitializedFieldError> for StoreError {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Self::InvalidRecord(format!("`{}` must be set", err.field_name()))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
