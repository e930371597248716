//! Per-course leaderboards.

use serde::Serialize;
use tracker_core::{Course, Student, StudentId};

/// One row of a course leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// Student
    pub id: StudentId,

    /// Points in the course
    pub points: u32,

    /// Share of the completion threshold, in percent (one decimal, may exceed 100)
    pub completion: f64,
}

impl std::fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{}\t{:.1}%", self.id, self.points, self.completion)
    }
}

/// Percentage of `course`'s threshold covered by `points`, rounded half up
/// to one decimal place.
pub fn completion_percent(points: u32, course: Course) -> f64 {
    let percent = f64::from(points) / f64::from(course.threshold()) * 100.0;
    (percent * 10.0).round() / 10.0
}

/// Students enrolled in `course`, best first.
///
/// Sorted by points descending, ties broken by ascending id.
pub fn top_learners<'a>(
    students: impl IntoIterator<Item = &'a Student>,
    course: Course,
) -> Vec<LeaderboardEntry> {
    let mut entries: Vec<LeaderboardEntry> = students
        .into_iter()
        .filter(|student| student.is_enrolled(course))
        .map(|student| {
            let points = student.points_for(course);
            LeaderboardEntry {
                id: student.id(),
                points,
                completion: completion_percent(points, course),
            }
        })
        .collect();

    entries.sort_by(|a, b| b.points.cmp(&a.points).then(a.id.cmp(&b.id)));
    entries
}
