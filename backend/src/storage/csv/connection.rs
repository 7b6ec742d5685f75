use anyhow::Result;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use crate::storage::traits::Connection;

use super::appointment_repository::AppointmentRepository;
use super::expense_repository::ExpenseRepository;
use super::payment_repository::PaymentRepository;
use super::retouch_repository::RetouchRepository;
use super::worker_repository::WorkerRepository;

/// CsvConnection manages file paths and ensures the CSV files backing each
/// ledger exist before repositories touch them.
#[derive(Clone)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)?;
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Create a new CSV connection in the default data directory
    /// (~/Documents/Tapiz Tracker)
    pub fn new_default() -> Result<Self> {
        let home_dir = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .map_err(|_| anyhow::anyhow!("Could not determine home directory"))?;

        let data_dir = PathBuf::from(home_dir)
            .join("Documents")
            .join("Tapiz Tracker");

        info!("Using default data directory: {}", data_dir.display());
        Self::new(data_dir)
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    pub fn workers_file_path(&self) -> PathBuf {
        self.base_directory.join("workers.csv")
    }

    pub fn appointments_file_path(&self) -> PathBuf {
        self.base_directory.join("appointments.csv")
    }

    pub fn retouches_file_path(&self) -> PathBuf {
        self.base_directory.join("retouches.csv")
    }

    pub fn expenses_file_path(&self) -> PathBuf {
        self.base_directory.join("expenses.csv")
    }

    /// Directory holding one append-only payment ledger file per worker
    pub fn payments_directory(&self) -> PathBuf {
        self.base_directory.join("payments")
    }

    /// Path of a worker's payment ledger file. The worker ID is sanitized
    /// into a filesystem-safe name the same way for every lookup.
    pub fn payment_file_path(&self, worker_id: &str) -> PathBuf {
        self.payments_directory()
            .join(format!("{}.csv", Self::safe_file_stem(worker_id)))
    }

    /// Reduce an entity ID to a filesystem-safe file stem
    pub fn safe_file_stem(id: &str) -> String {
        id.chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect::<String>()
            .to_lowercase()
    }

    /// Create a CSV file with the given header if it does not exist yet
    pub fn ensure_file_exists(&self, path: &Path, header: &[&str]) -> Result<()> {
        if path.exists() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(header)?;
        writer.flush()?;

        info!("Created ledger file: {}", path.display());
        Ok(())
    }
}

impl Connection for CsvConnection {
    type WorkerRepository = WorkerRepository;
    type AppointmentRepository = AppointmentRepository;
    type RetouchRepository = RetouchRepository;
    type ExpenseRepository = ExpenseRepository;
    type PaymentRepository = PaymentRepository;

    fn create_worker_repository(&self) -> WorkerRepository {
        WorkerRepository::new(self.clone())
    }

    fn create_appointment_repository(&self) -> AppointmentRepository {
        AppointmentRepository::new(self.clone())
    }

    fn create_retouch_repository(&self) -> RetouchRepository {
        RetouchRepository::new(self.clone())
    }

    fn create_expense_repository(&self) -> ExpenseRepository {
        ExpenseRepository::new(self.clone())
    }

    fn create_payment_repository(&self) -> PaymentRepository {
        PaymentRepository::new(self.clone())
    }
}
