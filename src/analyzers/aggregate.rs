use crate::analyzers::utility::{pct, per_hour};
use crate::record::TrafficRecord;
use std::collections::HashSet;

/// Vehicle types that travel on two wheels.
static TWO_WHEELED: &[&str] = &["Bike", "Motorbike", "Scooter"];

pub fn total_vehicles(data: &[TrafficRecord]) -> usize {
    data.len()
}

/// Counts records whose vehicle type is exactly `vehicle_type`.
pub fn total_of_type(data: &[TrafficRecord], vehicle_type: &str) -> usize {
    data.iter().filter(|r| r.vehicle_type == vehicle_type).count()
}

pub fn total_electric(data: &[TrafficRecord]) -> usize {
    data.iter().filter(|r| r.is_electric()).count()
}

pub fn total_two_wheeled(data: &[TrafficRecord]) -> usize {
    data.iter()
        .filter(|r| TWO_WHEELED.contains(&r.vehicle_type.as_str()))
        .count()
}

/// Counts vehicles of `vehicle_type` entering `junction` from `direction`.
pub fn directional_count(
    data: &[TrafficRecord],
    junction: &str,
    direction: &str,
    vehicle_type: &str,
) -> usize {
    data.iter()
        .filter(|r| {
            r.junction == junction && r.direction_in == direction && r.vehicle_type == vehicle_type
        })
        .count()
}

/// Counts vehicles leaving in the same direction they entered.
pub fn total_no_turns(data: &[TrafficRecord]) -> usize {
    data.iter().filter(|r| r.is_no_turn()).count()
}

/// Share of all vehicles that are `vehicle_type`, 0 for an empty dataset.
pub fn percentage_of_type(data: &[TrafficRecord], vehicle_type: &str) -> u32 {
    pct(total_of_type(data, vehicle_type), total_vehicles(data))
}

pub fn avg_per_hour(data: &[TrafficRecord], vehicle_type: &str) -> u32 {
    per_hour(total_of_type(data, vehicle_type))
}

/// Rows whose speeds are missing or not integers are skipped.
pub fn total_over_speed_limit(data: &[TrafficRecord]) -> usize {
    data.iter()
        .filter(|r| r.is_over_speed_limit() == Some(true))
        .count()
}

pub fn total_at_junction(data: &[TrafficRecord], junction: &str) -> usize {
    data.iter().filter(|r| r.junction == junction).count()
}

/// Share of `junction` traffic that is `vehicle_type`, 0 when the junction saw nothing.
pub fn percentage_at_junction(data: &[TrafficRecord], junction: &str, vehicle_type: &str) -> u32 {
    let at_junction = data
        .iter()
        .filter(|r| r.junction == junction && r.vehicle_type == vehicle_type)
        .count();
    pct(at_junction, total_at_junction(data, junction))
}

/// Number of distinct hours in which rain was recorded.
pub fn rain_hours(data: &[TrafficRecord]) -> usize {
    data.iter()
        .filter(|r| r.weather == "Rain")
        .map(|r| r.hour_label())
        .collect::<HashSet<_>>()
        .len()
}
