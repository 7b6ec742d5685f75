/// Test utilities module for automatic cleanup and consistent test infrastructure
///
/// Provides RAII-based cleanup that guarantees test data is removed even if
/// tests panic or fail.
use anyhow::Result;
use chrono::Utc;
use tempfile::TempDir;

use super::appointment_repository::AppointmentRepository;
use super::connection::CsvConnection;
use super::expense_repository::ExpenseRepository;
use super::payment_repository::PaymentRepository;
use super::retouch_repository::RetouchRepository;
use super::worker_repository::WorkerRepository;
use crate::domain::models::worker::Worker as DomainWorker;
use crate::storage::traits::WorkerStorage;

/// Test environment that provides a temporary directory and connection that
/// will be automatically cleaned up when the environment is dropped.
pub struct TestEnvironment {
    pub connection: CsvConnection,
    /// Base directory path for manual inspection if needed
    pub base_path: std::path::PathBuf,
    _temp_dir: TempDir, // Keep alive to prevent cleanup
}

impl TestEnvironment {
    /// Create a new test environment with a temporary directory
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let connection = CsvConnection::new(temp_dir.path())?;
        Ok(Self {
            connection,
            base_path: temp_dir.path().to_path_buf(),
            _temp_dir: temp_dir,
        })
    }
}

/// Test helper that provides repository instances for a test environment
pub struct TestHelper {
    pub env: TestEnvironment,
    pub worker_repo: WorkerRepository,
    pub appointment_repo: AppointmentRepository,
    pub retouch_repo: RetouchRepository,
    pub expense_repo: ExpenseRepository,
    pub payment_repo: PaymentRepository,
}

impl TestHelper {
    /// Create a new test helper with a fresh environment
    pub fn new() -> Result<Self> {
        let env = TestEnvironment::new()?;
        let worker_repo = WorkerRepository::new(env.connection.clone());
        let appointment_repo = AppointmentRepository::new(env.connection.clone());
        let retouch_repo = RetouchRepository::new(env.connection.clone());
        let expense_repo = ExpenseRepository::new(env.connection.clone());
        let payment_repo = PaymentRepository::new(env.connection.clone());

        Ok(Self {
            env,
            worker_repo,
            appointment_repo,
            retouch_repo,
            expense_repo,
            payment_repo,
        })
    }

    /// Store a worker with the given name and default rate, returning it
    pub fn seed_worker(&self, id: &str, name: &str, rate: &str) -> Result<DomainWorker> {
        let now = Utc::now();
        let worker = DomainWorker {
            id: id.to_string(),
            name: name.to_string(),
            phone: "555-0100".to_string(),
            default_commission_rate: rate.parse().map_err(|e| anyhow::anyhow!("{}", e))?,
            is_active: true,
            created_at: now,
            updated_at: now,
        };
        self.worker_repo.store_worker(&worker)?;
        Ok(worker)
    }
}
