//! Completion notifications.

use std::collections::BTreeSet;
use tracing::info;
use tracker_core::{Course, Notification, StudentId};
use tracker_registry::Registry;

/// Result of one notification pass.
#[derive(Debug, Clone, Default)]
pub struct NotificationReport {
    /// Notices produced in this pass, per student then canonical course order
    pub notifications: Vec<Notification>,

    /// Distinct students notified in this pass
    pub students_notified: usize,
}

/// Announces newly completed courses.
///
/// A (student, course) pair is announced at most once; the record of sent
/// notices lives on each student.
pub struct Notifier;

impl Notifier {
    /// Notify every student about courses completed since the last pass.
    pub fn notify_completions(&self, registry: &mut Registry) -> NotificationReport {
        let mut notifications = Vec::new();
        let mut notified: BTreeSet<StudentId> = BTreeSet::new();

        for student in registry.students_mut() {
            for course in Course::ALL {
                if student.is_notified(course) || !student.has_completed(course) {
                    continue;
                }
                notifications.push(Notification::new(student, course));
                student.mark_notified(course);
                notified.insert(student.id());
                info!("Notified {} about completing {}", student.id(), course);
            }
        }

        NotificationReport {
            notifications,
            students_notified: notified.len(),
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self
    }
}
