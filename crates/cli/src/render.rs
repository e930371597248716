//! Console rendering of registry and statistics results.

use std::io::{self, Write};
use tracker_core::{Course, StudentId};
use tracker_stats::{LeaderboardEntry, NotificationReport, StatisticsSummary};

pub fn student_ids(out: &mut impl Write, ids: Option<&[StudentId]>) -> io::Result<()> {
    let Some(ids) = ids else {
        return writeln!(out, "No students found.");
    };
    writeln!(out, "Students:")?;
    for id in ids {
        writeln!(out, "{}", id)?;
    }
    Ok(())
}

pub fn statistics(out: &mut impl Write, summary: &StatisticsSummary) -> io::Result<()> {
    writeln!(out, "Most popular: {}", summary.most_popular)?;
    writeln!(out, "Least popular: {}", summary.least_popular)?;
    writeln!(out, "Highest activity: {}", summary.highest_activity)?;
    writeln!(out, "Lowest activity: {}", summary.lowest_activity)?;
    writeln!(out, "Easiest course: {}", summary.easiest)?;
    writeln!(out, "Hardest course: {}", summary.hardest)
}

pub fn leaderboard(
    out: &mut impl Write,
    course: Course,
    entries: &[LeaderboardEntry],
) -> io::Result<()> {
    writeln!(out, "{}", course)?;
    writeln!(out, "id\tpoints\tcompleted")?;
    for entry in entries {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

pub fn notifications(out: &mut impl Write, report: &NotificationReport) -> io::Result<()> {
    for sent in &report.notifications {
        writeln!(out, "{}", sent)?;
    }
    writeln!(
        out,
        "Total {} students have been notified.",
        report.students_notified
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracker_stats::Ranking;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_student_ids() {
        assert_eq!(render(|out| student_ids(out, None)), "No students found.\n");

        let ids = [StudentId::new(1000), StudentId::new(1001)];
        assert_eq!(
            render(|out| student_ids(out, Some(&ids[..]))),
            "Students:\n1000\n1001\n"
        );
    }

    #[test]
    fn test_statistics_header() {
        let summary = StatisticsSummary {
            most_popular: Ranking::Courses(vec![Course::Dsa, Course::Java]),
            least_popular: Ranking::Courses(vec![Course::Spring]),
            highest_activity: Ranking::Courses(vec![Course::Dsa, Course::Java]),
            lowest_activity: Ranking::Courses(vec![Course::Spring]),
            easiest: Ranking::Courses(vec![Course::Java]),
            hardest: Ranking::NotAvailable,
        };
        assert_eq!(
            render(|out| statistics(out, &summary)),
            "Most popular: DSA, Java\n\
             Least popular: Spring\n\
             Highest activity: DSA, Java\n\
             Lowest activity: Spring\n\
             Easiest course: Java\n\
             Hardest course: n/a\n"
        );
    }

    #[test]
    fn test_leaderboard_table() {
        let entries = vec![LeaderboardEntry {
            id: StudentId::new(1000),
            points: 700,
            completion: 116.7,
        }];
        assert_eq!(
            render(|out| leaderboard(out, Course::Java, &entries)),
            "Java\nid\tpoints\tcompleted\n1000\t700\t116.7%\n"
        );
    }
}
