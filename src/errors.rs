use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("missing snapshot file: {0}")]
    MissingSnapshot(String),
    #[error("column not found: {0}")]
    ColumnNotFound(String),
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(String),
    #[error("template error: {0}")]
    Template(String),
    #[error("io error: {0}")]
    Io(String),
}

impl CompareError {
    pub fn missing_snapshot<T: Into<String>>(msg: T) -> Self {
        CompareError::MissingSnapshot(msg.into())
    }

    pub fn column_not_found<T: Into<String>>(msg: T) -> Self {
        CompareError::ColumnNotFound(msg.into())
    }

    pub fn malformed<T: Into<String>>(msg: T) -> Self {
        CompareError::MalformedSnapshot(msg.into())
    }

    pub fn template<T: Into<String>>(msg: T) -> Self {
        CompareError::Template(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        CompareError::Io(msg.into())
    }
}
