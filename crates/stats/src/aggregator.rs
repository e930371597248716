//! Course popularity, activity and difficulty rankings.

use crate::leaderboard::{top_learners, LeaderboardEntry};
use serde::Serialize;
use tracker_core::{Course, Student};

/// Outcome of a ranking query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Ranking {
    /// Nothing meaningful to report
    NotAvailable,
    /// The winning course(s)
    Courses(Vec<Course>),
}

impl Ranking {
    /// The ranked courses, empty when not available.
    pub fn courses(&self) -> &[Course] {
        match self {
            Ranking::NotAvailable => &[],
            Ranking::Courses(courses) => courses,
        }
    }

    /// Whether at least one course was ranked.
    pub fn is_available(&self) -> bool {
        matches!(self, Ranking::Courses(_))
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ranking::NotAvailable => f.write_str("n/a"),
            Ranking::Courses(courses) => {
                let names: Vec<&str> = courses.iter().map(|c| c.name()).collect();
                f.write_str(&names.join(", "))
            }
        }
    }
}

/// All six rankings shown in the statistics header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    /// Course(s) with the most enrolled students
    pub most_popular: Ranking,
    /// Course(s) with the fewest enrolled students
    pub least_popular: Ranking,
    /// Course(s) with the most activity
    pub highest_activity: Ranking,
    /// Course(s) with the least activity
    pub lowest_activity: Ranking,
    /// Course with the highest mean points
    pub easiest: Ranking,
    /// Course with the lowest mean points
    pub hardest: Ranking,
}

/// Read-only statistics over a snapshot of students.
pub struct Aggregator<'a> {
    students: Vec<&'a Student>,
}

impl<'a> Aggregator<'a> {
    /// Take a snapshot of `students`.
    pub fn new(students: impl IntoIterator<Item = &'a Student>) -> Self {
        Self {
            students: students.into_iter().collect(),
        }
    }

    /// Enrolled students per course in canonical order.
    ///
    /// `None` when no course has anyone enrolled.
    pub fn enrollment_by_course(&self) -> Option<Vec<(Course, usize)>> {
        let counts: Vec<(Course, usize)> = Course::ALL
            .into_iter()
            .map(|course| {
                let enrolled = self
                    .students
                    .iter()
                    .filter(|s| s.is_enrolled(course))
                    .count();
                (course, enrolled)
            })
            .collect();

        if counts.iter().all(|&(_, n)| n == 0) {
            return None;
        }
        Some(counts)
    }

    /// Activity per course.
    ///
    /// Individual submissions are not recorded, so a student with points in
    /// a course counts as one unit of activity and this equals enrollment.
    pub fn activity_by_course(&self) -> Option<Vec<(Course, usize)>> {
        self.enrollment_by_course()
    }

    /// Mean points per enrolled student, for courses with any enrollment.
    ///
    /// `None` when no course has anyone enrolled.
    pub fn difficulty_by_course(&self) -> Option<Vec<(Course, f64)>> {
        let means: Vec<(Course, f64)> = Course::ALL
            .into_iter()
            .filter_map(|course| {
                let (total, enrolled) = self
                    .students
                    .iter()
                    .filter(|s| s.is_enrolled(course))
                    .fold((0u64, 0u64), |(total, n), s| {
                        (total + u64::from(s.points_for(course)), n + 1)
                    });
                (enrolled > 0).then(|| (course, total as f64 / enrolled as f64))
            })
            .collect();

        if means.is_empty() {
            return None;
        }
        Some(means)
    }

    /// Course(s) with the most enrolled students.
    pub fn most_popular(&self) -> Ranking {
        self.enrollment_by_course()
            .map_or(Ranking::NotAvailable, |counts| rank_highest(&counts))
    }

    /// Course(s) with the fewest enrolled students.
    pub fn least_popular(&self) -> Ranking {
        self.enrollment_by_course()
            .map_or(Ranking::NotAvailable, |counts| rank_lowest(&counts))
    }

    /// Course(s) with the most activity.
    pub fn highest_activity(&self) -> Ranking {
        self.activity_by_course()
            .map_or(Ranking::NotAvailable, |counts| rank_highest(&counts))
    }

    /// Course(s) with the least activity.
    pub fn lowest_activity(&self) -> Ranking {
        self.activity_by_course()
            .map_or(Ranking::NotAvailable, |counts| rank_lowest(&counts))
    }

    /// Course with the highest mean points.
    ///
    /// Ties go to the earliest course in canonical order.
    pub fn easiest(&self) -> Ranking {
        self.difficulty_by_course()
            .and_then(|means| first_by(&means, |candidate, best| candidate > best))
            .map_or(Ranking::NotAvailable, |course| Ranking::Courses(vec![course]))
    }

    /// Course with the lowest mean points.
    ///
    /// Ties go to the earliest course in canonical order.
    pub fn hardest(&self) -> Ranking {
        self.difficulty_by_course()
            .and_then(|means| first_by(&means, |candidate, best| candidate < best))
            .map_or(Ranking::NotAvailable, |course| Ranking::Courses(vec![course]))
    }

    /// Leaderboard for one course.
    pub fn top_learners(&self, course: Course) -> Vec<LeaderboardEntry> {
        top_learners(self.students.iter().copied(), course)
    }

    /// Compute every header ranking at once.
    pub fn summary(&self) -> StatisticsSummary {
        StatisticsSummary {
            most_popular: self.most_popular(),
            least_popular: self.least_popular(),
            highest_activity: self.highest_activity(),
            lowest_activity: self.lowest_activity(),
            easiest: self.easiest(),
            hardest: self.hardest(),
        }
    }
}

/// All courses sharing the maximum count, sorted by name.
fn rank_highest(counts: &[(Course, usize)]) -> Ranking {
    let max = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
    tied_at(counts, max)
}

/// All courses sharing the minimum count, sorted by name.
///
/// A uniform distribution has no least course.
fn rank_lowest(counts: &[(Course, usize)]) -> Ranking {
    let min = counts.iter().map(|&(_, n)| n).min().unwrap_or(0);
    let max = counts.iter().map(|&(_, n)| n).max().unwrap_or(0);
    if min == max {
        return Ranking::NotAvailable;
    }
    tied_at(counts, min)
}

fn tied_at(counts: &[(Course, usize)], value: usize) -> Ranking {
    let mut courses: Vec<Course> = counts
        .iter()
        .filter(|&&(_, n)| n == value)
        .map(|&(course, _)| course)
        .collect();
    courses.sort_by_key(|course| course.name());
    Ranking::Courses(courses)
}

/// First course whose value beats every earlier one under `better`.
fn first_by(values: &[(Course, f64)], better: impl Fn(f64, f64) -> bool) -> Option<Course> {
    let (first, rest) = values.split_first()?;
    let (course, _) = rest.iter().fold(*first, |best, &candidate| {
        if better(candidate.1, best.1) {
            candidate
        } else {
            best
        }
    });
    Some(course)
}
