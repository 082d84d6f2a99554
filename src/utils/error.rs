use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Database contains no student records")]
    EmptyDatabaseError,

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP server error: {0}")]
    ServerError(#[from] hyper::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
