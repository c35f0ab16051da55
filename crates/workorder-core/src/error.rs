use thiserror::Error;

#[derive(Error, Debug)]
pub enum WorkOrderError {
    /// Required document fields are missing; nothing was written.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The CSV input is malformed or too short to hold a work order.
    #[error("Format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl WorkOrderError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_format(&self) -> bool {
        matches!(self, Self::Format(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}
