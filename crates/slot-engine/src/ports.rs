//! Capability traits for the surrounding application's collaborators.
//!
//! The app around the engine talks to a remote vendor-profile service (where
//! policies come from) and a booking backend (where confirmed windows go).
//! Both are modeled as explicitly passed capabilities rather than global
//! clients, so the engine stays a pure function of its inputs and callers
//! can substitute in-memory fakes in tests.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::policy::OperatingHoursPolicy;
use crate::validate::{validate, ValidationResult};

/// A caller-confirmed booking window, ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub vendor_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_hours: i64,
}

/// Supplies the read-only operating-hours policy for a vendor.
pub trait VendorProfileProvider {
    /// Fetch the vendor's operating-hours policy.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::VendorProfile`] when the vendor record
    /// cannot be fetched.
    fn operating_hours(&self, vendor_id: &str) -> Result<OperatingHoursPolicy>;
}

/// Forwards a booking window to the booking backend.
pub trait BookingSubmitter {
    /// Submit a caller-confirmed booking window.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::Submission`] when the backend rejects
    /// or cannot receive the request.
    fn submit(&self, request: &BookingRequest) -> Result<()>;
}

/// Validate a booking request and forward it only on success.
///
/// The one place the engine's verdict meets a collaborator: the request
/// reaches the submitter iff [`validate`] accepts the window. The verdict is
/// returned either way so the caller can surface the failure message.
///
/// # Errors
///
/// Propagates contract violations from [`validate`] and submission failures
/// from the [`BookingSubmitter`].
pub fn submit_validated(
    submitter: &dyn BookingSubmitter,
    policy: &OperatingHoursPolicy,
    request: &BookingRequest,
) -> Result<ValidationResult> {
    let verdict = validate(
        request.date,
        request.start_time,
        request.duration_hours,
        policy,
    )?;
    if verdict.is_valid {
        submitter.submit(request)?;
    }
    Ok(verdict)
}

// ── Tests ───────────────────────────────────────────────────────────────────
