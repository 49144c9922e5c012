//! # slot-engine
//!
//! Deterministic booking availability for storage vendors.
//!
//! Given a vendor's operating-hours policy and a requested booking window
//! (date, start time, duration), the engine answers two questions without
//! touching a clock, the network, or any shared state:
//!
//! - which start-time slots exist on a given day, and
//! - whether a specific requested window is legal.
//!
//! Every operation is a pure function of its inputs: same arguments, same
//! answer, safe to call concurrently. Business outcomes (closed day, start
//! outside hours, duration past closing) come back as values the caller can
//! show to the user; only caller contract violations (non-positive duration,
//! a policy that closes before it opens) are `Err`.
//!
//! ## Modules
//!
//! - [`policy`] — Operating-hours policy data model and day-openness check
//! - [`slots`] — Hourly time-slot enumeration for a vendor's day
//! - [`validate`] — Booking-window validation with user-facing failure messages
//! - [`ports`] — Capability traits for the surrounding application's collaborators
//! - [`error`] — Error types

pub mod error;
pub mod policy;
pub mod ports;
pub mod slots;
pub mod validate;

pub use error::EngineError;
pub use policy::{is_open_on_day, DayToken, OperatingHoursPolicy};
pub use ports::{submit_validated, BookingRequest, BookingSubmitter, VendorProfileProvider};
pub use slots::{generate_slots, TimeSlot};
pub use validate::{validate, ValidationResult};
