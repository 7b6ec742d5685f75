//! # CSV Storage Module
//!
//! File-based storage implementation for the scheduling/accounting core.
//! It demonstrates that the domain logic is completely storage-agnostic: a
//! SQL implementation only has to satisfy the same traits.
//!
//! ## Layout
//!
//! - `workers.csv`, `appointments.csv`, `retouches.csv`, `expenses.csv` —
//!   one file per ledger, whole-file rewrite on mutation.
//! - `payments/{worker}.csv` — one append-only ledger file per worker;
//!   payment records are never rewritten.

pub mod appointment_repository;
pub mod connection;
pub mod expense_repository;
mod fields;
pub mod payment_repository;
pub mod retouch_repository;
pub mod worker_repository;

#[cfg(test)]
pub mod test_utils;

pub use appointment_repository::AppointmentRepository;
pub use connection::CsvConnection;
pub use expense_repository::ExpenseRepository;
pub use payment_repository::PaymentRepository;
pub use retouch_repository::RetouchRepository;
pub use worker_repository::WorkerRepository;
