//! Boundary to the remote trip service.
//!
//! The core only needs trip creation; clients implement this trait with
//! their HTTP stack and carry the rest of the service surface
//! themselves.

use thiserror::Error;

use crate::trip::CreateTripPayload;

/// Failure reported by the trip service collaborator.
#[derive(Error, Debug)]
pub enum ServerError {
    /// The service answered with a non-success status.
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// The request never completed (connection refused, timeout, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a body the client could not decode.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Trip creation collaborator invoked by `TripDraft::submit`.
#[allow(async_fn_in_trait)]
pub trait TripServer {
    /// Create a trip and return its identifier.
    async fn create_trip(&self, payload: &CreateTripPayload) -> Result<String, ServerError>;
}
