//! Worker management for the scheduling/accounting core.

use chrono::Utc;
use log::info;
use rust_decimal::Decimal;
use std::sync::Arc;

use crate::domain::commands::workers::{
    CreateWorkerCommand, CreateWorkerResult, ListWorkersResult, UpdateWorkerCommand,
    UpdateWorkerResult,
};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::worker::Worker as DomainWorker;
use crate::domain::models::now_millis;
use crate::storage::traits::{Connection, WorkerStorage};

#[derive(Clone)]
pub struct WorkerService<C: Connection> {
    worker_repository: C::WorkerRepository,
}

impl<C: Connection> WorkerService<C> {
    pub fn new(connection: Arc<C>) -> Self {
        let worker_repository = connection.create_worker_repository();
        Self { worker_repository }
    }

    /// Create a new worker
    pub fn create_worker(&self, command: CreateWorkerCommand) -> DomainResult<CreateWorkerResult> {
        if command.name.trim().is_empty() {
            return Err(DomainError::validation("Worker name cannot be empty"));
        }
        validate_rate(command.default_commission_rate)?;

        let now = Utc::now();
        let worker = DomainWorker {
            id: DomainWorker::generate_id(now_millis()),
            name: command.name.trim().to_string(),
            phone: command.phone.trim().to_string(),
            default_commission_rate: command.default_commission_rate,
            is_active: true,
            created_at: now,
            updated_at: now,
        };

        self.worker_repository.store_worker(&worker)?;
        info!("Created worker: {} with ID: {}", worker.name, worker.id);

        Ok(CreateWorkerResult { worker })
    }

    /// Get a worker by ID
    pub fn get_worker(&self, worker_id: &str) -> DomainResult<DomainWorker> {
        self.worker_repository
            .get_worker(worker_id)?
            .ok_or_else(|| DomainError::not_found("worker", worker_id))
    }

    /// List all workers ordered by name
    pub fn list_workers(&self) -> DomainResult<ListWorkersResult> {
        let workers = self.worker_repository.list_workers()?;
        Ok(ListWorkersResult { workers })
    }

    /// Update a worker's profile. Changing the default commission rate only
    /// affects appointments created afterwards: past appointments keep the
    /// rate snapshotted at their creation.
    pub fn update_worker(&self, command: UpdateWorkerCommand) -> DomainResult<UpdateWorkerResult> {
        let mut worker = self.get_worker(&command.worker_id)?;

        if let Some(name) = command.name {
            if name.trim().is_empty() {
                return Err(DomainError::validation("Worker name cannot be empty"));
            }
            worker.name = name.trim().to_string();
        }
        if let Some(phone) = command.phone {
            worker.phone = phone.trim().to_string();
        }
        if let Some(rate) = command.default_commission_rate {
            validate_rate(rate)?;
            worker.default_commission_rate = rate;
        }
        if let Some(is_active) = command.is_active {
            worker.is_active = is_active;
        }
        worker.updated_at = Utc::now();

        self.worker_repository.update_worker(&worker)?;
        Ok(UpdateWorkerResult { worker })
    }
}

/// A commission rate is a percentage and must stay within [0, 100].
pub(crate) fn validate_rate(rate: Decimal) -> DomainResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::from(100) {
        return Err(DomainError::validation(format!(
            "Commission rate must be between 0 and 100, got {}",
            rate
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::csv::CsvConnection;
    use tempfile::TempDir;

    fn create_test_service() -> (WorkerService<CsvConnection>, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let connection = Arc::new(CsvConnection::new(temp_dir.path()).unwrap());
        (WorkerService::new(connection), temp_dir)
    }

    #[test]
    fn create_worker_snapshots_nothing_but_stores_defaults() {
        let (service, _temp_dir) = create_test_service();
        let result = service
            .create_worker(CreateWorkerCommand {
                name: "  Ana  ".to_string(),
                phone: "555-0100".to_string(),
                default_commission_rate: "60".parse().unwrap(),
            })
            .unwrap();

        assert_eq!(result.worker.name, "Ana");
        assert!(result.worker.is_active);
        assert!(result.worker.id.starts_with("worker::"));
    }

    #[test]
    fn out_of_range_rate_is_rejected() {
        let (service, _temp_dir) = create_test_service();
        let err = service
            .create_worker(CreateWorkerCommand {
                name: "Ana".to_string(),
                phone: "555-0100".to_string(),
                default_commission_rate: "101".parse().unwrap(),
            })
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn updating_rate_does_not_touch_history() {
        let (service, _temp_dir) = create_test_service();
        let created = service
            .create_worker(CreateWorkerCommand {
                name: "Ana".to_string(),
                phone: "555-0100".to_string(),
                default_commission_rate: "60".parse().unwrap(),
            })
            .unwrap();

        let updated = service
            .update_worker(UpdateWorkerCommand {
                worker_id: created.worker.id.clone(),
                name: None,
                phone: None,
                default_commission_rate: Some("55".parse().unwrap()),
                is_active: None,
            })
            .unwrap();

        assert_eq!(updated.worker.default_commission_rate, "55".parse().unwrap());
    }

    #[test]
    fn missing_worker_is_not_found() {
        let (service, _temp_dir) = create_test_service();
        let err = service.get_worker("worker::404").unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
