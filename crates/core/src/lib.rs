//! Learning progress tracker core data models.
//!
//! This crate defines the student, course and notification types shared by
//! the registry, the statistics engine and the console front end.

#![warn(missing_docs)]

// Core identities
mod id;

// Courses and points
mod course;

// Students and their notifications
mod student;
mod notification;

// Re-exports
pub use id::StudentId;
pub use course::{Course, CoursePoints, UnknownCourse};
pub use student::Student;
pub use notification::Notification;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
