use anyhow::Result;
use chrono::NaiveDate;
use csv::{Reader, WriterBuilder};
use log::warn;
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::domain::models::worker_payment::WorkerPayment as DomainWorkerPayment;
use crate::storage::traits::PaymentStorage;

use super::connection::CsvConnection;
use super::fields::{field, parse_date, parse_decimal};

const HEADER: [&str; 4] = ["id", "worker_id", "amount", "date"];

/// CSV-based worker payment repository.
///
/// One ledger file per worker. Records are only ever appended, never
/// rewritten: the files are the financial audit trail.
#[derive(Clone)]
pub struct PaymentRepository {
    connection: CsvConnection,
}

impl PaymentRepository {
    /// Create a new CSV payment repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn read_payment_file(&self, path: &Path) -> Result<Vec<DomainWorkerPayment>> {
        let file = File::open(path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut payments = Vec::new();
        for result in csv_reader.records() {
            let record = result?;
            payments.push(DomainWorkerPayment {
                id: field(&record, 0).to_string(),
                worker_id: field(&record, 1).to_string(),
                amount: parse_decimal(field(&record, 2))?,
                date: parse_date(field(&record, 3))?,
            });
        }

        Ok(payments)
    }
}

impl PaymentStorage for PaymentRepository {
    fn append_payment(&self, payment: &DomainWorkerPayment) -> Result<()> {
        let file_path = self.connection.payment_file_path(&payment.worker_id);
        self.connection.ensure_file_exists(&file_path, &HEADER)?;

        let file = OpenOptions::new().append(true).open(&file_path)?;
        let mut csv_writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(BufWriter::new(file));

        csv_writer.write_record(&[
            &payment.id,
            &payment.worker_id,
            &payment.amount.to_string(),
            &payment.date.format("%Y-%m-%d").to_string(),
        ])?;

        csv_writer.flush()?;
        Ok(())
    }

    fn list_payments_for_worker(&self, worker_id: &str) -> Result<Vec<DomainWorkerPayment>> {
        let file_path = self.connection.payment_file_path(worker_id);
        if !file_path.exists() {
            return Ok(Vec::new());
        }

        let mut payments = self.read_payment_file(&file_path)?;
        payments.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(payments)
    }

    fn list_payments_in_range(
        &self,
        start: NaiveDate,
        end_exclusive: NaiveDate,
    ) -> Result<Vec<DomainWorkerPayment>> {
        let payments_dir = self.connection.payments_directory();
        if !payments_dir.exists() {
            return Ok(Vec::new());
        }

        let mut payments = Vec::new();
        for entry in std::fs::read_dir(&payments_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                warn!("Skipping non-ledger file in payments directory: {}", path.display());
                continue;
            }
            payments.extend(self.read_payment_file(&path)?);
        }

        payments.retain(|p| start <= p.date && p.date < end_exclusive);
        payments.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(payments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn test_payment(id: &str, worker_id: &str, amount: &str, day: u32) -> DomainWorkerPayment {
        DomainWorkerPayment {
            id: id.to_string(),
            worker_id: worker_id.to_string(),
            amount: amount.parse().unwrap(),
            date: NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
        }
    }

    #[test]
    fn appends_accumulate_per_worker() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = PaymentRepository::new(connection);

        repo.append_payment(&test_payment("pay-1-aaaa", "worker::1", "100.00", 5))
            .unwrap();
        repo.append_payment(&test_payment("pay-2-bbbb", "worker::1", "50.00", 10))
            .unwrap();
        repo.append_payment(&test_payment("pay-3-cccc", "worker::2", "75.00", 6))
            .unwrap();

        let first = repo.list_payments_for_worker("worker::1").unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].id, "pay-1-aaaa");

        let second = repo.list_payments_for_worker("worker::2").unwrap();
        assert_eq!(second.len(), 1);
    }

    #[test]
    fn unknown_worker_has_no_payments() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = PaymentRepository::new(connection);

        assert!(repo.list_payments_for_worker("worker::404").unwrap().is_empty());
    }

    #[test]
    fn range_query_spans_all_workers() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = PaymentRepository::new(connection);

        repo.append_payment(&test_payment("pay-1-aaaa", "worker::1", "100.00", 5))
            .unwrap();
        repo.append_payment(&test_payment("pay-2-bbbb", "worker::2", "75.00", 20))
            .unwrap();

        let march = repo
            .list_payments_in_range(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            )
            .unwrap();
        assert_eq!(march.len(), 2);

        let narrow = repo
            .list_payments_in_range(
                NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            )
            .unwrap();
        assert_eq!(narrow.len(), 1);
        assert_eq!(narrow[0].id, "pay-1-aaaa");
    }
}
