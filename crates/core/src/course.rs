//! Course model - the four fixed tracks and their completion thresholds.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// A course a student can collect points in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Course {
    /// Java
    Java,
    /// Data structures and algorithms
    #[serde(rename = "DSA")]
    Dsa,
    /// Databases
    Databases,
    /// Spring
    Spring,
}

impl Course {
    /// All courses in canonical order.
    pub const ALL: [Course; 4] = [Course::Java, Course::Dsa, Course::Databases, Course::Spring];

    /// Canonical display name.
    pub const fn name(self) -> &'static str {
        match self {
            Course::Java => "Java",
            Course::Dsa => "DSA",
            Course::Databases => "Databases",
            Course::Spring => "Spring",
        }
    }

    /// Points needed to complete the course.
    pub const fn threshold(self) -> u32 {
        match self {
            Course::Java => 600,
            Course::Dsa => 400,
            Course::Databases => 480,
            Course::Spring => 550,
        }
    }

    /// Slot of this course in a [`CoursePoints`] array.
    pub const fn index(self) -> usize {
        match self {
            Course::Java => 0,
            Course::Dsa => 1,
            Course::Databases => 2,
            Course::Spring => 3,
        }
    }

    /// Look a course up by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Course> {
        Course::ALL.into_iter().find(|course| course.name() == name)
    }
}

impl std::fmt::Display for Course {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a name matches none of the courses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown course: {0}")]
pub struct UnknownCourse(pub String);

impl std::str::FromStr for Course {
    type Err = UnknownCourse;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Course::from_name(s).ok_or_else(|| UnknownCourse(s.to_string()))
    }
}

/// Points held per course, indexed by [`Course`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePoints([u32; 4]);

impl CoursePoints {
    /// Build from values in canonical course order.
    pub const fn new(points: [u32; 4]) -> Self {
        Self(points)
    }

    /// Points for one course.
    pub fn get(&self, course: Course) -> u32 {
        self.0[course.index()]
    }

    /// Add `other` element-wise. Values saturate instead of wrapping.
    pub fn accumulate(&mut self, other: &CoursePoints) {
        for course in Course::ALL {
            self[course] = self[course].saturating_add(other[course]);
        }
    }

    /// Iterate `(course, points)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Course, u32)> + '_ {
        Course::ALL.into_iter().map(move |course| (course, self.get(course)))
    }

    /// True when every course holds zero points.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&p| p == 0)
    }
}

impl Index<Course> for CoursePoints {
    type Output = u32;

    fn index(&self, course: Course) -> &u32 {
        &self.0[course.index()]
    }
}

impl IndexMut<Course> for CoursePoints {
    fn index_mut(&mut self, course: Course) -> &mut u32 {
        &mut self.0[course.index()]
    }
}
