//! Output formatting and persistence for survey statistics.
//!
//! Supports the plain-text report, JSON printing, and appending to the
//! results log.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::stats::SurveySummary;

/// Formats the report lines for a survey, one statistic per line.
pub fn summary_lines(file_name: &str, s: &SurveySummary) -> Vec<String> {
    let primary = &s.primary_junction;
    let secondary = &s.secondary_junction;

    let mut lines = vec![
        format!("Data file selected: {file_name}"),
        format!(
            "The total number of vehicles recorded for this date is: {}",
            s.total_vehicles
        ),
        format!(
            "The total number of trucks recorded for this date is: {}",
            s.trucks
        ),
        format!(
            "The total number of electric vehicles for this date is: {}",
            s.electric
        ),
        format!(
            "The total number of two-wheeled vehicles for this date is: {}",
            s.two_wheeled
        ),
        format!(
            "The total number of busses leaving {primary} heading North is: {}",
            s.primary_buses_north
        ),
        format!(
            "The total number of vehicles through both junctions not turning left or right is: {}",
            s.no_turns
        ),
        format!(
            "The percentage of total vehicles recorded that are trucks for this date is: {}%",
            s.truck_pct
        ),
        format!(
            "The average number of Bikes per hour for this date is: {}",
            s.bikes_per_hour
        ),
        format!(
            "The total number of Vehicles recorded as over the speed limit for this date is: {}",
            s.over_speed_limit
        ),
        format!(
            "The total number of Vehicles recorded through {primary} is: {}",
            s.primary_total
        ),
        format!(
            "The total number of Vehicles recorded through {secondary} Junction is: {}",
            s.secondary_total
        ),
        format!(
            "Percentage of scooters at {primary}: {}%",
            s.primary_scooter_pct
        ),
    ];

    match &s.secondary_peak {
        Some(peak) => {
            lines.push(format!(
                "The highest number of vehicles in an hour on {secondary} is {}",
                peak.count
            ));
            lines.push(format!(
                "The most vehicles through {secondary} were recorded {}",
                peak.hours.join(", ")
            ));
        }
        None => lines.push(format!("No vehicles were recorded through {secondary}")),
    }

    lines.push(format!(
        "The number of hours of rain for this date is: {}",
        s.rain_hours
    ));

    lines
}

/// Writes each line to `out`, then appends them to the results log.
///
/// The log is created if it does not already exist.
pub fn emit<W: Write>(out: &mut W, lines: &[String], results_path: &Path) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    append_lines(results_path, lines)
}

/// Appends `lines` to `path`, one per line.
pub fn append_lines(path: &Path, lines: &[String]) -> Result<()> {
    let file_exists = path.exists();
    debug!(path = %path.display(), file_exists, "Appending results");

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .with_context(|| format!("failed to open results log {}", path.display()))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()?;

    Ok(())
}

/// Logs survey statistics using Rust's debug pretty-print format.
pub fn print_pretty(summary: &SurveySummary) {
    debug!("{:#?}", summary);
}

/// Writes survey statistics to `out` as pretty-printed JSON.
pub fn print_json<W: Write>(out: &mut W, summary: &SurveySummary) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    info!(bytes = json.len(), "Summary serialized");
    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::types::PeakHour;
    use std::fs;

    fn summary() -> SurveySummary {
        SurveySummary {
            primary_junction: "Elm Avenue/Rabbit Road".into(),
            secondary_junction: "Hanley Highway/Westway".into(),
            total_vehicles: 3,
            trucks: 2,
            truck_pct: 67,
            secondary_peak: Some(PeakHour {
                count: 4,
                hours: vec![
                    "Between 08:00 and 9:00".into(),
                    "Between 17:00 and 18:00".into(),
                ],
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_print_pretty_does_not_panic() {
        print_pretty(&SurveySummary::default());
    }

    #[test]
    fn test_print_json_writes_summary() {
        let mut out = Vec::new();
        print_json(&mut out, &summary()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total_vehicles"], 3);
        assert_eq!(json["secondary_peak"]["count"], 4);
    }

    #[test]
    fn test_summary_lines_wording() {
        let lines = summary_lines("traffic_data15062024.csv", &summary());

        assert_eq!(lines[0], "Data file selected: traffic_data15062024.csv");
        assert!(lines.contains(
            &"The percentage of total vehicles recorded that are trucks for this date is: 67%"
                .to_string()
        ));
        assert!(lines.contains(
            &"The most vehicles through Hanley Highway/Westway were recorded Between 08:00 and 9:00, Between 17:00 and 18:00"
                .to_string()
        ));
        assert_eq!(lines.len(), 16);
    }

    #[test]
    fn test_summary_lines_without_peak() {
        let s = SurveySummary {
            secondary_peak: None,
            ..summary()
        };
        let lines = summary_lines("f.csv", &s);

        assert!(lines.contains(&"No vehicles were recorded through Hanley Highway/Westway".to_string()));
        assert_eq!(lines.len(), 15);
    }

    #[test]
    fn test_append_lines_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        append_lines(&path, &["first".to_string()]).unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\n");
    }

    #[test]
    fn test_append_lines_keeps_previous_runs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.txt");

        append_lines(&path, &["a".to_string(), "b".to_string()]).unwrap();
        let mut out = Vec::new();
        emit(&mut out, &["c".to_string()], &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines, vec!["a", "b", "c"]);
        assert_eq!(out, b"c\n");
    }

    #[test]
    fn test_append_lines_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("results.txt");

        assert!(append_lines(&path, &["x".to_string()]).is_err());
    }
}
