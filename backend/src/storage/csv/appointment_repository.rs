use anyhow::{anyhow, Result};
use chrono::{DateTime, Utc};
use csv::{Reader, Writer};
use std::fs::{File, OpenOptions};
use std::io::{BufReader, BufWriter};

use crate::domain::models::appointment::{Appointment as DomainAppointment, PaymentMethod};
use crate::domain::models::status::JobStatus;
use crate::storage::traits::AppointmentStorage;

use super::connection::CsvConnection;
use super::fields::{field, parse_bool, parse_datetime, parse_decimal, parse_u32};

const HEADER: [&str; 10] = [
    "id",
    "client_name",
    "worker_id",
    "scheduled_at",
    "duration_minutes",
    "cost",
    "commission_rate",
    "status",
    "payment_method",
    "paid_to_worker",
];

/// CSV-based appointment repository
#[derive(Clone)]
pub struct AppointmentRepository {
    connection: CsvConnection,
}

impl AppointmentRepository {
    /// Create a new CSV appointment repository
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    /// Read all appointments from the CSV file
    fn read_appointments(&self) -> Result<Vec<DomainAppointment>> {
        let file_path = self.connection.appointments_file_path();
        self.connection.ensure_file_exists(&file_path, &HEADER)?;

        let file = File::open(&file_path)?;
        let mut csv_reader = Reader::from_reader(BufReader::new(file));

        let mut appointments = Vec::new();
        for result in csv_reader.records() {
            let record = result?;

            let payment_method = match field(&record, 8) {
                "" => None,
                value => Some(
                    PaymentMethod::from_storage_string(value).map_err(|e| anyhow!(e))?,
                ),
            };

            appointments.push(DomainAppointment {
                id: field(&record, 0).to_string(),
                client_name: field(&record, 1).to_string(),
                worker_id: field(&record, 2).to_string(),
                scheduled_at: parse_datetime(field(&record, 3))?,
                duration_minutes: parse_u32(field(&record, 4))?,
                cost: parse_decimal(field(&record, 5))?,
                commission_rate: parse_decimal(field(&record, 6))?,
                status: JobStatus::from_storage_string(field(&record, 7))
                    .map_err(|e| anyhow!(e))?,
                payment_method,
                paid_to_worker: parse_bool(field(&record, 9))?,
            });
        }

        Ok(appointments)
    }

    /// Write all appointments to the CSV file
    fn write_appointments(&self, appointments: &[DomainAppointment]) -> Result<()> {
        let file_path = self.connection.appointments_file_path();
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&file_path)?;

        let mut csv_writer = Writer::from_writer(BufWriter::new(file));
        csv_writer.write_record(&HEADER)?;

        for appointment in appointments {
            let payment_method = appointment
                .payment_method
                .map(|m| m.to_storage_string())
                .unwrap_or_default();

            csv_writer.write_record(&[
                &appointment.id,
                &appointment.client_name,
                &appointment.worker_id,
                &appointment.scheduled_at.to_rfc3339(),
                &appointment.duration_minutes.to_string(),
                &appointment.cost.to_string(),
                &appointment.commission_rate.to_string(),
                &appointment.status.to_storage_string(),
                &payment_method,
                &appointment.paid_to_worker.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl AppointmentStorage for AppointmentRepository {
    fn store_appointment(&self, appointment: &DomainAppointment) -> Result<()> {
        let mut appointments = self.read_appointments()?;
        if appointments.iter().any(|a| a.id == appointment.id) {
            return Err(anyhow!("Appointment already exists: {}", appointment.id));
        }
        appointments.push(appointment.clone());
        self.write_appointments(&appointments)
    }

    fn get_appointment(&self, appointment_id: &str) -> Result<Option<DomainAppointment>> {
        let appointments = self.read_appointments()?;
        Ok(appointments.into_iter().find(|a| a.id == appointment_id))
    }

    fn update_appointment(&self, appointment: &DomainAppointment) -> Result<()> {
        let mut appointments = self.read_appointments()?;
        let position = appointments
            .iter()
            .position(|a| a.id == appointment.id)
            .ok_or_else(|| anyhow!("Appointment not found: {}", appointment.id))?;
        appointments[position] = appointment.clone();
        self.write_appointments(&appointments)
    }

    fn list_appointments_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DomainAppointment>> {
        let mut appointments: Vec<DomainAppointment> = self
            .read_appointments()?
            .into_iter()
            .filter(|a| start <= a.scheduled_at && a.scheduled_at < end)
            .collect();
        appointments.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Ok(appointments)
    }

    fn list_appointments_for_worker(&self, worker_id: &str) -> Result<Vec<DomainAppointment>> {
        let mut appointments: Vec<DomainAppointment> = self
            .read_appointments()?
            .into_iter()
            .filter(|a| a.worker_id == worker_id)
            .collect();
        appointments.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Ok(appointments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_appointment(id: &str, worker_id: &str, day: u32) -> DomainAppointment {
        DomainAppointment {
            id: id.to_string(),
            client_name: "Client".to_string(),
            worker_id: worker_id.to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 3, day, 10, 0, 0).unwrap(),
            duration_minutes: 120,
            cost: "150.00".parse().unwrap(),
            commission_rate: "60".parse().unwrap(),
            status: JobStatus::Pending,
            payment_method: Some(PaymentMethod::Cash),
            paid_to_worker: false,
        }
    }

    #[test]
    fn store_and_get_preserves_every_field() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = AppointmentRepository::new(connection);

        let appointment = test_appointment("apt-1-aaaa", "worker::1", 10);
        repo.store_appointment(&appointment).unwrap();

        let loaded = repo.get_appointment("apt-1-aaaa").unwrap().unwrap();
        assert_eq!(loaded, appointment);
    }

    #[test]
    fn range_query_is_half_open_and_chronological() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = AppointmentRepository::new(connection);

        repo.store_appointment(&test_appointment("apt-2-bbbb", "worker::1", 20))
            .unwrap();
        repo.store_appointment(&test_appointment("apt-1-aaaa", "worker::1", 5))
            .unwrap();
        repo.store_appointment(&test_appointment("apt-3-cccc", "worker::1", 31))
            .unwrap();

        let start = Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2025, 3, 31, 0, 0, 0).unwrap();
        let in_march: Vec<String> = repo
            .list_appointments_in_range(start, end)
            .unwrap()
            .into_iter()
            .map(|a| a.id)
            .collect();

        // The day-31 appointment sits at 10:00 after the exclusive bound.
        assert_eq!(in_march, vec!["apt-1-aaaa".to_string(), "apt-2-bbbb".to_string()]);
    }

    #[test]
    fn empty_payment_method_round_trips_as_none() {
        let temp_dir = TempDir::new().unwrap();
        let connection = CsvConnection::new(temp_dir.path()).unwrap();
        let repo = AppointmentRepository::new(connection);

        let mut appointment = test_appointment("apt-1-aaaa", "worker::1", 10);
        appointment.payment_method = None;
        repo.store_appointment(&appointment).unwrap();

        let loaded = repo.get_appointment("apt-1-aaaa").unwrap().unwrap();
        assert_eq!(loaded.payment_method, None);
    }
}
