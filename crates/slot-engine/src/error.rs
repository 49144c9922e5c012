//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Vendor profile error: {0}")]
    VendorProfile(String),

    #[error("Booking submission error: {0}")]
    Submission(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
