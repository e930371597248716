//! Notification model - a one-time course completion notice.

use crate::course::Course;
use crate::id::StudentId;
use crate::student::Student;
use crate::Time;
use serde::{Deserialize, Serialize};

/// Notice sent the first time a student completes a course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    /// Recipient
    pub student_id: StudentId,

    /// Recipient address
    pub email: String,

    /// Recipient name used in the greeting
    pub full_name: String,

    /// The completed course
    pub course: Course,

    /// When the notice was produced
    pub sent_at: Time,
}

impl Notification {
    /// Subject line of every completion notice.
    pub const SUBJECT: &'static str = "Your Learning Progress";

    /// Create a notice for `student` completing `course`.
    pub fn new(student: &Student, course: Course) -> Self {
        Self {
            student_id: student.id(),
            email: student.email().to_string(),
            full_name: student.full_name(),
            course,
            sent_at: chrono::Utc::now(),
        }
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "To: {}", self.email)?;
        writeln!(f, "Re: {}", Self::SUBJECT)?;
        write!(
            f,
            "Hello, {}! You have accomplished our {} course!",
            self.full_name, self.course
        )
    }
}
