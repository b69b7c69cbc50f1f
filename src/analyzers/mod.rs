//! Statistics over a loaded survey day.
//!
//! `aggregate` holds the independent per-dataset counts and percentages,
//! `hourly` buckets records by hour for peak detection and charting.

pub mod aggregate;
pub mod hourly;
pub mod types;
pub mod utility;
