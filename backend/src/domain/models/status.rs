//! Lifecycle status shared by appointments and retouches.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Completed and cancelled are terminal; nothing transitions out of them.
    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Cancelled)
    }

    /// Whether moving to `next` is a legal transition.
    ///
    /// Allowed moves: pending -> in_progress, pending -> completed,
    /// pending -> cancelled, in_progress -> completed,
    /// in_progress -> cancelled. Everything else is illegal, including
    /// re-asserting the current status.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        match (self, next) {
            (JobStatus::Pending, JobStatus::InProgress) => true,
            (JobStatus::Pending, JobStatus::Completed) => true,
            (JobStatus::Pending, JobStatus::Cancelled) => true,
            (JobStatus::InProgress, JobStatus::Completed) => true,
            (JobStatus::InProgress, JobStatus::Cancelled) => true,
            _ => false,
        }
    }

    /// Convert to string for CSV storage
    pub fn to_storage_string(&self) -> String {
        match self {
            JobStatus::Pending => "pending".to_string(),
            JobStatus::InProgress => "in_progress".to_string(),
            JobStatus::Completed => "completed".to_string(),
            JobStatus::Cancelled => "cancelled".to_string(),
        }
    }

    /// Parse from string for CSV loading
    pub fn from_storage_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(JobStatus::Pending),
            "in_progress" => Ok(JobStatus::InProgress),
            "completed" => Ok(JobStatus::Completed),
            "cancelled" => Ok(JobStatus::Cancelled),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_transitions_are_allowed() {
        assert!(JobStatus::Pending.can_transition_to(JobStatus::InProgress));
        assert!(JobStatus::Pending.can_transition_to(JobStatus::Completed));
        assert!(JobStatus::Pending.can_transition_to(JobStatus::Cancelled));
        assert!(JobStatus::InProgress.can_transition_to(JobStatus::Completed));
        assert!(JobStatus::InProgress.can_transition_to(JobStatus::Cancelled));
    }

    #[test]
    fn terminal_states_allow_no_transitions() {
        for next in [
            JobStatus::Pending,
            JobStatus::InProgress,
            JobStatus::Completed,
            JobStatus::Cancelled,
        ] {
            assert!(!JobStatus::Completed.can_transition_to(next));
            assert!(!JobStatus::Cancelled.can_transition_to(next));
        }
    }

    #[test]
    fn backward_and_self_transitions_are_rejected() {
        assert!(!JobStatus::InProgress.can_transition_to(JobStatus::Pending));
        assert!(!JobStatus::Pending.can_transition_to(JobStatus::Pending));
        assert!(!JobStatus::InProgress.can_transition_to(JobStatus::InProgress));
    }

    #[test]
    fn storage_strings_round_trip() {
        for status in [
            JobStatus::Pending,
            JobStatus::InProgress,
            JobStatus::Completed,
            JobStatus::Cancelled,
        ] {
            let s = status.to_storage_string();
            assert_eq!(JobStatus::from_storage_string(&s).unwrap(), status);
        }
        assert!(JobStatus::from_storage_string("done").is_err());
    }
}
