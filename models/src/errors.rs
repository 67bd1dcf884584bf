// models/src/errors.rs

pub use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("patient key must be a 24-character hex string")]
    InvalidPatientKey,
}
