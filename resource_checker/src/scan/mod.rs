//! Scan orchestration
//!
//! `ResourceChecker` owns the current report and runs single-flight scans
//! over a host. The traversal itself lives in `scanner`.

mod config;
mod guard;
mod report;
mod scanner;
mod checker;

pub use config::ScanConfig;
pub use guard::{ReentryFlag, ReentryGuard};
pub use report::{ScanReport, Notice, NoticeLevel};
pub use checker::{ResourceChecker, ScanOutcome, RefreshOutcome};
