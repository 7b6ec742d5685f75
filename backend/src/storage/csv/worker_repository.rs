use anyhow::{anyhow, Result};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use crate::domain::models::worker::Worker as DomainWorker;
use crate::storage::traits::WorkerStorage;

use super::connection::CsvConnection;
use super::fields::{field, parse_bool, parse_datetime, parse_decimal};

const HEADER: [&str; 7] = [
    "id",
    "name",
    "phone",
    "default_commission_rate",
    "is_active",
    "created_at",
    "updated_at",
];

/// CSV-based worker repository
#[derive(Clone)]
pub struct WorkerRepository {
    connection: CsvConnection,
}

impl WorkerRepository {
    /// Create a new CSV worker repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all workers from the CSV file
    fn read_workers(&self) -> Result<Vec<DomainWorker>> {
        let file_path = self.connection.workers_file_path();
        self.connection.ensure_file_exists(&file_path, &HEADER)?;

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut workers = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            workers.push(DomainWorker {
                id: field(&record, 0).to_string(),
                name: field(&record, 1).to_string(),
                phone: field(&record, 2).to_string(),
                default_commission_rate: parse_decimal(field(&record, 3))?,
                is_active: parse_bool(field(&record, 4))?,
                created_at: parse_datetime(field(&record, 5))?,
                updated_at: parse_datetime(field(&record, 6))?,
            });
        }

        Ok(workers)
    }

    /// Write all workers to the CSV file
    fn write_workers(&self, workers: &[DomainWorker]) -> Result<()> {
        let file_path = self.connection.workers_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let mut csv_writer = Writer::from_writer(BufWriter::new(file));
        csv_writer.write_record(&HEADER)?;

        for worker in workers {
            csv_writer.write_record(&[
                &worker.id,
                &worker.name,
                &worker.phone,
                &worker.default_commission_rate.to_string(),
                &worker.is_active.to_string(),
                &worker.created_at.to_rfc3339(),
                &worker.updated_at.to_rfc3339(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl WorkerStorage for WorkerRepository {
    fn store_worker(&self, worker: &DomainWorker) -> Result<()> {
        let mut workers = self.read_workers()?;
        if workers.iter().any(|w| w.id == worker.id) {
            return Err(anyhow!("Worker already exists: {}", worker.id));
        }
        workers.push(worker.clone());
        self.write_workers(&workers)
    }

    fn get_worker(&self, worker_id: &str) -> Result<Option<DomainWorker>> {
        let workers = self.read_workers()?;
        Ok(workers.into_iter().find(|w| w.id == worker_id))
    }

    fn list_workers(&self) -> Result<Vec<DomainWorker>> {
        let mut workers = self.read_workers()?;
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }

    fn update_worker(&self, worker: &DomainWorker) -> Result<()> {
        let mut workers = self.read_workers()?;
        let position = workers
            .iter()
            .position(|w| w.id == worker.id)
            .ok_or_else(|| anyhow!("Worker not found: {}", worker.id))?;
        workers[position] = worker.clone();
        self.write_workers(&workers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tempfile::TempDir;

    fn test_worker(id: &str, name: &str) -> DomainWorker {
        let now = Utc::now();
        DomainWorker {
            id: id.to_string(),
            name: name.to_string(),
            phone: "555-0100".to_string(),
            default_commission_rate: "60".parse().unwrap(),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn store_and_get_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = WorkerRepository::new(connection);

        let worker = test_worker("worker::1", "Ana");
        repo.store_worker(&worker).unwrap();

        let loaded = repo.get_worker("worker::1").unwrap().unwrap();
        assert_eq!(loaded.name, "Ana");
        assert_eq!(loaded.default_commission_rate, worker.default_commission_rate);
        assert!(loaded.is_active);
    }

    #[test]
    fn list_is_ordered_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = WorkerRepository::new(connection);

        repo.store_worker(&test_worker("worker::2", "Marta")).unwrap();
        repo.store_worker(&test_worker("worker::1", "Ana")).unwrap();

        let names: Vec<String> = repo
            .list_workers()
            .unwrap()
            .into_iter()
            .map(|w| w.name)
            .collect();
        assert_eq!(names, vec!["Ana".to_string(), "Marta".to_string()]);
    }

    #[test]
    fn duplicate_store_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = WorkerRepository::new(connection);

        repo.store_worker(&test_worker("worker::1", "Ana")).unwrap();
        assert!(repo.store_worker(&test_worker("worker::1", "Ana")).is_err());
    }

    #[test]
    fn update_replaces_the_stored_record() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = WorkerRepository::new(connection);

        let mut worker = test_worker("worker::1", "Ana");
        repo.store_worker(&worker).unwrap();

        worker.default_commission_rate = "55".parse().unwrap();
        worker.is_active = false;
        repo.update_worker(&worker).unwrap();

        let loaded = repo.get_worker("worker::1").unwrap().unwrap();
        assert_eq!(loaded.default_commission_rate, "55".parse().unwrap());
        assert!(!loaded.is_active);
    }
}
