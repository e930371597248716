//! Course statistics and completion notifications.
//!
//! Read-only rankings over a registry snapshot, per-course leaderboards,
//! and the notifier that announces newly completed courses.

#![warn(missing_docs)]

pub mod aggregator;
pub mod leaderboard;
pub mod notifier;

pub use aggregator::{Aggregator, Ranking, StatisticsSummary};
pub use leaderboard::{completion_percent, top_learners, LeaderboardEntry};
pub use notifier::{NotificationReport, Notifier};
