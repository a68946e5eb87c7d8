use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrailError {
    #[error("invalid config `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type TrailResult<T> = Result<T, TrailError>;

pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> TrailError {
    TrailError::InvalidConfig {
        field,
        reason: reason.into(),
    }
}
