use serde::Serialize;

use crate::analyzers::aggregate::{
    avg_per_hour, directional_count, percentage_at_junction, percentage_of_type, rain_hours,
    total_at_junction, total_electric, total_no_turns, total_of_type, total_over_speed_limit,
    total_two_wheeled, total_vehicles,
};
use crate::analyzers::hourly::busiest_hour;
use crate::analyzers::types::PeakHour;
use crate::config::AnalyserConfig;
use crate::record::TrafficRecord;

/// Every statistic reported for one survey day.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SurveySummary {
    pub primary_junction: String,
    pub secondary_junction: String,

    // whole day
    pub total_vehicles: usize,
    pub trucks: usize,
    pub electric: usize,
    pub two_wheeled: usize,
    pub no_turns: usize,
    pub truck_pct: u32,
    pub bikes_per_hour: u32,
    pub over_speed_limit: usize,
    pub rain_hours: usize,

    // per junction
    pub primary_buses_north: usize,
    pub primary_total: usize,
    pub secondary_total: usize,
    pub primary_scooter_pct: u32,
    pub secondary_peak: Option<PeakHour>,
}

impl SurveySummary {
    pub fn from_dataset(data: &[TrafficRecord], config: &AnalyserConfig) -> Self {
        let primary = config.primary.name.as_str();
        let secondary = config.secondary.name.as_str();

        SurveySummary {
            primary_junction: primary.to_string(),
            secondary_junction: secondary.to_string(),
            total_vehicles: total_vehicles(data),
            trucks: total_of_type(data, "Truck"),
            electric: total_electric(data),
            two_wheeled: total_two_wheeled(data),
            no_turns: total_no_turns(data),
            truck_pct: percentage_of_type(data, "Truck"),
            bikes_per_hour: avg_per_hour(data, "Bike"),
            over_speed_limit: total_over_speed_limit(data),
            rain_hours: rain_hours(data),
            primary_buses_north: directional_count(data, primary, "N", "Bus"),
            primary_total: total_at_junction(data, primary),
            secondary_total: total_at_junction(data, secondary),
            primary_scooter_pct: percentage_at_junction(data, primary, "Scooter"),
            secondary_peak: busiest_hour(data, secondary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(junction: &str, time: &str, dir_in: &str, ty: &str) -> TrafficRecord {
        TrafficRecord::from_fields([
            junction, "15/06/2024", time, dir_in, "S", "30", "40", "Rain", ty, "TRUE",
        ])
    }

    #[test]
    fn test_from_dataset_empty() {
        let stats = SurveySummary::from_dataset(&[], &AnalyserConfig::default());

        assert_eq!(stats.total_vehicles, 0);
        assert_eq!(stats.truck_pct, 0);
        assert_eq!(stats.primary_scooter_pct, 0);
        assert_eq!(stats.secondary_peak, None);
    }

    #[test]
    fn test_from_dataset_uses_configured_junctions() {
        let data = vec![
            rec("Elm Avenue/Rabbit Road", "08:00", "N", "Bus"),
            rec("Elm Avenue/Rabbit Road", "08:10", "N", "Scooter"),
            rec("Hanley Highway/Westway", "11:00", "N", "Bus"),
        ];
        let stats = SurveySummary::from_dataset(&data, &AnalyserConfig::default());

        assert_eq!(stats.total_vehicles, 3);
        assert_eq!(stats.primary_buses_north, 1);
        assert_eq!(stats.primary_total, 2);
        assert_eq!(stats.secondary_total, 1);
        assert_eq!(stats.primary_scooter_pct, 50);
        assert_eq!(stats.electric, 3);
        assert_eq!(stats.over_speed_limit, 3);
        assert_eq!(stats.rain_hours, 2);
        let peak = stats.secondary_peak.unwrap();
        assert_eq!(peak.count, 1);
        assert_eq!(peak.hours, vec!["Between 11:00 and 12:00".to_string()]);
    }
}
