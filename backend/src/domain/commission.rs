//! Commission calculation for completed appointments.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::models::appointment::Appointment;
use crate::domain::models::status::JobStatus;

/// Number of decimal places in the currency's minor unit.
const CURRENCY_SCALE: u32 = 2;

/// Commission a worker earned from a completed appointment:
/// `cost * commission_rate / 100`, rounded to the currency's minor unit.
///
/// Uses the rate snapshotted onto the appointment, never the worker's
/// current default, so a later rate change cannot retroactively rewrite
/// history. Rounding is half-even to avoid systematic bias across many
/// transactions.
pub fn commission_for(appointment: &Appointment) -> DomainResult<Decimal> {
    if appointment.status != JobStatus::Completed {
        return Err(DomainError::InvalidState {
            entity: "appointment",
            id: appointment.id.clone(),
            actual: appointment.status,
            required: JobStatus::Completed,
        });
    }

    Ok(round_to_minor_unit(
        appointment.cost * appointment.commission_rate / Decimal::from(100),
    ))
}

/// Round a money amount to the currency's minor unit, half-even.
pub fn round_to_minor_unit(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_SCALE, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn completed_appointment(cost: &str, rate: &str) -> Appointment {
        Appointment {
            id: "apt-1-test".to_string(),
            client_name: "Client".to_string(),
            worker_id: "worker::1".to_string(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 3, 10, 14, 0, 0).unwrap(),
            duration_minutes: 90,
            cost: dec(cost),
            commission_rate: dec(rate),
            status: JobStatus::Completed,
            payment_method: None,
            paid_to_worker: false,
        }
    }

    #[test]
    fn commission_is_cost_times_rate() {
        let appointment = completed_appointment("150.00", "60");
        assert_eq!(commission_for(&appointment).unwrap(), dec("90.00"));
    }

    #[test]
    fn commission_is_idempotent() {
        let appointment = completed_appointment("123.45", "37.5");
        let first = commission_for(&appointment).unwrap();
        let second = commission_for(&appointment).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rounding_is_half_even() {
        // 0.25 * 50% = 0.125: the midpoint rounds to the even neighbour 0.12
        let appointment = completed_appointment("0.25", "50");
        assert_eq!(commission_for(&appointment).unwrap(), dec("0.12"));

        // 0.35 * 50% = 0.175: midpoint rounds up to the even neighbour 0.18
        let appointment = completed_appointment("0.35", "50");
        assert_eq!(commission_for(&appointment).unwrap(), dec("0.18"));
    }

    #[test]
    fn non_completed_appointment_is_rejected() {
        for status in [JobStatus::Pending, JobStatus::InProgress, JobStatus::Cancelled] {
            let mut appointment = completed_appointment("150.00", "60");
            appointment.status = status;
            let err = commission_for(&appointment).unwrap_err();
            assert!(matches!(err, DomainError::InvalidState { .. }));
        }
    }

    #[test]
    fn zero_cost_yields_zero_commission() {
        let appointment = completed_appointment("0", "60");
        assert_eq!(commission_for(&appointment).unwrap(), Decimal::ZERO);
    }
}
