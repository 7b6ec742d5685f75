pub mod appointment;
pub mod expense;
pub mod retouch;
pub mod status;
pub mod summary;
pub mod worker;
pub mod worker_payment;

use std::time::{SystemTime, UNIX_EPOCH};

/// Generate a random hex suffix for entity IDs.
pub(crate) fn random_suffix(len: usize) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_nanos();
    format!("{:x}", now % (16_u128.pow(len as u32)))
        .chars()
        .take(len)
        .collect()
}

/// Current epoch time in milliseconds, used when minting entity IDs.
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
