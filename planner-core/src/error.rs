//! Error types for the planner core.
//!
//! All errors here are recoverable values returned to the caller: they
//! block a transition or an add, never the process. Messages are the
//! user-facing prompts the client shows verbatim.

use thiserror::Error;

use crate::server::ServerError;

/// Blocks a wizard (or one-step form) transition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Preencha o destino da viagem para prosseguir!")]
    MissingDestination,

    #[error("O destino deve ter pelo menos 4 caracteres!")]
    DestinationTooShort,

    #[error("Preencha as datas da viagem para prosseguir!")]
    MissingDateRange,

    #[error("Preencha o título para prosseguir!")]
    MissingTitle,

    #[error("O título deve ter no mínimo 6 caracteres!")]
    TitleTooShort,

    #[error("URL inválida!")]
    InvalidUrl,

    #[error("Preencha a data para prosseguir!")]
    MissingDate,

    #[error("Preencha o horário para prosseguir!")]
    MissingHour,

    #[error("Horário inválido, use um valor entre 0 e 23!")]
    InvalidHour,

    #[error("Preencha o nome para prosseguir!")]
    MissingName,

    #[error("E-mail inválido!")]
    InvalidEmail,
}

/// Blocks adding a guest; the list is left unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GuestError {
    #[error("E-mail inválido!")]
    InvalidEmail,

    #[error("E-mail já adicionado!")]
    DuplicateGuest,
}

/// Submission failed; the draft is unchanged and may be retried.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("Não foi possível criar a viagem: {0}")]
    Server(#[from] ServerError),

    /// Submit was invoked before the details step was completed.
    #[error("a data range and destination are required before submitting")]
    DraftNotReady,
}
