//! Domain layer: models, commands, and the services that enforce the
//! accounting rules. Services are generic over a storage [`Connection`]
//! and hold no global state.
//!
//! [`Connection`]: crate::storage::traits::Connection

pub mod appointment_service;
pub mod commands;
pub mod commission;
pub mod error;
pub mod expense_service;
pub mod models;
pub mod payment_service;
pub mod period;
pub mod summary_service;
pub mod worker_service;

pub use appointment_service::AppointmentService;
pub use error::{DomainError, DomainResult};
pub use expense_service::ExpenseService;
pub use payment_service::PaymentService;
pub use period::Period;
pub use summary_service::SummaryService;
pub use worker_service::WorkerService;
