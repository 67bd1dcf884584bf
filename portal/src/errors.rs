// portal/src/errors.rs

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum PortalError {
    #[error("username and password are required")]
    MissingCredentials,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("patient not found")]
    PatientNotFound,
    #[error("unknown social history section: {0}")]
    UnknownSection(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}
