//! Core types for the planner ecosystem.
//!
//! This crate provides the domain logic shared by planner clients:
//! - `CalendarDay` and `DateRange` for the interactive date selection
//! - `GuestList` for invitee management
//! - `TripDraft` and the trip-creation wizard state machine
//! - wire types and the `TripServer` boundary for the remote service
//!
//! Everything here is pure and synchronous except `TripDraft::submit`,
//! which delegates to a `TripServer` implementation.

pub mod calendar_day;
pub mod date_range;
pub mod error;
pub mod format;
pub mod forms;
pub mod guest_list;
pub mod server;
pub mod trip;
pub mod wizard;

pub use calendar_day::CalendarDay;
pub use date_range::{DateRange, DayMark};
pub use error::{GuestError, SubmitError, ValidationError};
pub use guest_list::GuestList;
pub use server::{ServerError, TripServer};
pub use trip::{CreateTripPayload, TripData};
pub use wizard::{ActiveModal, SubmissionStatus, TripDraft, WizardStep};
