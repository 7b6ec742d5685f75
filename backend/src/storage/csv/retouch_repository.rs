use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use crate::domain::models::retouch::Retouch as DomainRetouch;
use crate::domain::models::status::JobStatus;
use crate::storage::traits::RetouchStorage;

use super::connection::CsvConnection;
use super::fields::{field, parse_datetime};

const HEADER: [&str; 6] = [
    "id",
    "appointment_id",
    "worker_id",
    "scheduled_at",
    "reason",
    "status",
];

/// CSV-based retouch repository
#[derive(Clone)]
pub struct RetouchRepository {
    connection: CsvConnection,
}

impl RetouchRepository {
    /// Create a new CSV retouch repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_retouches(&self) -> Result<Vec<DomainRetouch>> {
        let file_path = self.connection.retouches_file_path();
        self.connection.ensure_file_exists(&file_path, &HEADER)?;

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut retouches = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            retouches.push(DomainRetouch {
                id: field(&record, 0).to_string(),
                appointment_id: field(&record, 1).to_string(),
                worker_id: field(&record, 2).to_string(),
                scheduled_at: parse_datetime(field(&record, 3))?,
                reason: field(&record, 4).to_string(),
                status: JobStatus::from_storage_string(field(&record, 5))
                    .map_err(|e| anyhow!(e))?,
            });
        }

        Ok(retouches)
    }

    fn write_retouches(&self, retouches: &[DomainRetouch]) -> Result<()> {
        let file_path = self.connection.retouches_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let mut csv_writer = Writer::from_writer(BufWriter::new(file));
        csv_writer.write_record(&HEADER)?;

        for retouch in retouches {
            csv_writer.write_record(&[
                &retouch.id,
                &retouch.appointment_id,
                &retouch.worker_id,
                &retouch.scheduled_at.to_rfc3339(),
                &retouch.reason,
                &retouch.status.to_storage_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl RetouchStorage for RetouchRepository {
    fn store_retouch(&self, retouch: &DomainRetouch) -> Result<()> {
        let mut retouches = self.read_retouches()?;
        if retouches.iter().any(|r| r.id == retouch.id) {
            return Err(anyhow!("Retouch already exists: {}", retouch.id));
        }
        retouches.push(retouch.clone());
        self.write_retouches(&retouches)
    }

    fn get_retouch(&self, retouch_id: &str) -> Result<Option<DomainRetouch>> {
        let retouches = self.read_retouches()?;
        Ok(retouches.into_iter().find(|r| r.id == retouch_id))
    }

    fn update_retouch(&self, retouch: &DomainRetouch) -> Result<()> {
        let mut retouches = self.read_retouches()?;
        let position = retouches
            .iter()
            .position(|r| r.id == retouch.id)
            .ok_or_else(|| anyhow!("Retouch not found: {}", retouch.id))?;
        retouches[position] = retouch.clone();
        self.write_retouches(&retouches)
    }

    fn list_retouches_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DomainRetouch>> {
        let mut retouches: Vec<DomainRetouch> = self
            .read_retouches()?
            .into_iter()
            .filter(|r| start <= r.scheduled_at && r.scheduled_at < end)
            .collect();
        retouches.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Ok(retouches)
    }
}
