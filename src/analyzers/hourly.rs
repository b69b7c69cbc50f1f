use crate::analyzers::types::{HourlyCounts, PeakHour};
use crate::record::TrafficRecord;
use std::collections::BTreeMap;

/// Buckets every record into its hour for the two charted junctions.
///
/// A record belongs to a junction when its junction name *contains* that
/// junction's label, so "Elm Avenue" matches "Elm Avenue/Rabbit Road".
/// Records matching neither label, or with an unreadable hour, are ignored.
pub fn group_by_hour(
    data: &[TrafficRecord],
    primary_label: &str,
    secondary_label: &str,
) -> HourlyCounts {
    let mut counts = HourlyCounts::default();

    for record in data {
        let Some(hour) = record.hour() else {
            continue;
        };
        let slot = &mut counts.hours[hour as usize];

        if record.junction.contains(primary_label) {
            slot.primary += 1;
        } else if record.junction.contains(secondary_label) {
            slot.secondary += 1;
        }
    }

    counts
}

/// Finds the hour(s) with the most vehicles through `junction`.
///
/// Returns `None` when the junction has no records with a readable hour.
/// Tied hours are all returned, earliest first.
pub fn busiest_hour(data: &[TrafficRecord], junction: &str) -> Option<PeakHour> {
    let mut per_hour: BTreeMap<&str, (u32, usize)> = BTreeMap::new();

    for record in data.iter().filter(|r| r.junction == junction) {
        let Some(hour) = record.hour() else {
            continue;
        };
        per_hour.entry(record.hour_label()).or_insert((hour, 0)).1 += 1;
    }

    let peak = per_hour.values().map(|(_, count)| *count).max()?;
    let hours = per_hour
        .iter()
        .filter(|(_, (_, count))| *count == peak)
        .map(|(label, (hour, _))| format!("Between {}:00 and {}:00", label, hour + 1))
        .collect();

    Some(PeakHour { count: peak, hours })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELM: &str = "Elm Avenue/Rabbit Road";
    const HANLEY: &str = "Hanley Highway/Westway";

    fn at(junction: &str, time: &str) -> TrafficRecord {
        TrafficRecord::from_fields([
            junction, "15/06/2024", time, "N", "S", "30", "25", "Sunny", "Car", "FALSE",
        ])
    }

    #[test]
    fn test_group_by_hour_has_every_hour() {
        let counts = group_by_hour(&[], "Elm Avenue", "Hanley Highway");
        assert_eq!(counts.iter().count(), 24);
        assert_eq!(counts.max_count(), 0);
    }

    #[test]
    fn test_group_by_hour_matches_by_substring() {
        let data = vec![
            at(ELM, "08:15:00"),
            at("Elm Avenue North", "08:40:00"),
            at(HANLEY, "23:59:59"),
            at("Somewhere Else", "08:00:00"),
            at(ELM, "xx:00:00"),
        ];
        let counts = group_by_hour(&data, "Elm Avenue", "Hanley Highway");

        assert_eq!(counts.get(8).unwrap().primary, 2);
        assert_eq!(counts.get(8).unwrap().secondary, 0);
        assert_eq!(counts.get(23).unwrap().secondary, 1);
        assert_eq!(counts.total().primary + counts.total().secondary, 3);
    }

    #[test]
    fn test_busiest_hour_single_peak() {
        let data = vec![
            at(HANLEY, "08:00:00"),
            at(HANLEY, "09:00:00"),
            at(HANLEY, "09:30:00"),
            at(ELM, "10:00:00"),
            at(ELM, "10:05:00"),
            at(ELM, "10:10:00"),
        ];
        let peak = busiest_hour(&data, HANLEY).unwrap();

        assert_eq!(peak.count, 2);
        assert_eq!(peak.hours, vec!["Between 09:00 and 10:00".to_string()]);
    }

    #[test]
    fn test_busiest_hour_reports_ties() {
        let data = vec![
            at(HANLEY, "17:00:00"),
            at(HANLEY, "07:00:00"),
            at(HANLEY, "12:00:00"),
            at(HANLEY, "17:20:00"),
            at(HANLEY, "07:40:00"),
        ];
        let peak = busiest_hour(&data, HANLEY).unwrap();

        assert_eq!(peak.count, 2);
        assert_eq!(
            peak.hours,
            vec![
                "Between 07:00 and 8:00".to_string(),
                "Between 17:00 and 18:00".to_string(),
            ]
        );
    }

    #[test]
    fn test_busiest_hour_is_a_maximum() {
        let data: Vec<TrafficRecord> = ["01", "01", "02", "03", "03", "03", "04"]
            .iter()
            .map(|h| at(HANLEY, &format!("{h}:00:00")))
            .collect();
        let peak = busiest_hour(&data, HANLEY).unwrap();

        for hour in ["01", "02", "04"] {
            let n = data.iter().filter(|r| r.hour_label() == hour).count();
            assert!(peak.count >= n);
        }
        assert_eq!(peak.count, 3);
        assert_eq!(peak.hours.len(), 1);
    }

    #[test]
    fn test_busiest_hour_without_data() {
        assert_eq!(busiest_hour(&[at(ELM, "08:00")], HANLEY), None);
    }
}
