use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },

    #[error("tree segment cannot be empty")]
    EmptySegment,

    #[error("source and mirror segments must differ (both are '{segment}')")]
    IdenticalSegments { segment: String },
}

pub type Result<T> = std::result::Result<T, CoreError>;
