//! Error kinds surfaced by the accounting core.
//!
//! Every variant is recoverable at the call site; the presentation layer is
//! expected to match on the kind and render an actionable message (for
//! example, `Overpayment` carries the current pending balance so the payment
//! form can show it).

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::models::status::JobStatus;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Bad input shape or range; the caller can correct and retry.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Operation attempted against an entity in the wrong lifecycle state.
    #[error("{entity} {id} is {actual:?}, operation requires {required:?}")]
    InvalidState {
        entity: &'static str,
        id: String,
        actual: JobStatus,
        required: JobStatus,
    },

    /// Illegal status change, e.g. cancelling a completed appointment.
    #[error("illegal status transition {from:?} -> {to:?}")]
    InvalidTransition { from: JobStatus, to: JobStatus },

    /// Payment exceeds what is currently owed to the worker.
    #[error("payment of {amount} exceeds pending balance {pending} for worker {worker_id}")]
    Overpayment {
        worker_id: String,
        amount: Decimal,
        pending: Decimal,
    },

    /// Referenced entity does not exist.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Failure in the persistence collaborator. Not retried here.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        DomainError::NotFound {
            entity,
            id: id.into(),
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
