//! Student model - a learner with per-course points.

use crate::course::{Course, CoursePoints};
use crate::id::StudentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A student enrolled in the tracker.
///
/// Identity fields never change after creation. Points only grow and the
/// notified set only gains courses the student has already completed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    id: StudentId,
    first_name: String,
    last_name: String,
    email: String,
    points: CoursePoints,
    notified: BTreeSet<Course>,
}

impl Student {
    /// Create a student with zero points everywhere.
    pub fn new(
        id: StudentId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            points: CoursePoints::default(),
            notified: BTreeSet::new(),
        }
    }

    /// Unique identifier
    pub fn id(&self) -> StudentId {
        self.id
    }

    /// First name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name, possibly several words
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Email address
    pub fn email(&self) -> &str {
        &self.email
    }

    /// First and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Accumulated points.
    pub fn points(&self) -> &CoursePoints {
        &self.points
    }

    /// Points for one course.
    pub fn points_for(&self, course: Course) -> u32 {
        self.points[course]
    }

    /// Add a submission to the running totals.
    pub fn add_points(&mut self, points: &CoursePoints) {
        self.points.accumulate(points);
    }

    /// Whether the student has any points in `course`.
    pub fn is_enrolled(&self, course: Course) -> bool {
        self.points[course] > 0
    }

    /// Whether the student reached the completion threshold of `course`.
    pub fn has_completed(&self, course: Course) -> bool {
        self.points[course] >= course.threshold()
    }

    /// Whether a completion notice for `course` was already sent.
    pub fn is_notified(&self, course: Course) -> bool {
        self.notified.contains(&course)
    }

    /// Record that a completion notice for `course` was sent.
    ///
    /// Returns `false` if the course is not completed or was already
    /// recorded; the set is left untouched in both cases.
    pub fn mark_notified(&mut self, course: Course) -> bool {
        if !self.has_completed(course) {
            return false;
        }
        self.notified.insert(course)
    }

    /// Courses a completion notice was sent for.
    pub fn notified_courses(&self) -> impl Iterator<Item = Course> + '_ {
        self.notified.iter().copied()
    }
}

impl std::fmt::Display for Student {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} points: Java={}; DSA={}; Databases={}; Spring={}",
            self.id,
            self.points[Course::Java],
            self.points[Course::Dsa],
            self.points[Course::Databases],
            self.points[Course::Spring],
        )
    }
}
