use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A server-generated event recorded against a tutor when a student
/// selects them. The timestamp serializes as an ISO-8601 string.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub student_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    /// Build the interest notification for a selecting student, stamped
    /// with the current server clock.
    pub fn interest(student_id: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            message: format!("Student {} is interested in your services.", student_id),
            timestamp: Utc::now(),
        }
    }
}
