//! A single junction observation, read positionally from one CSV row.

use csv::StringRecord;

const JUNCTION: usize = 0;
const DATE: usize = 1;
const TIME_OF_DAY: usize = 2;
const DIRECTION_IN: usize = 3;
const DIRECTION_OUT: usize = 4;
const SPEED_LIMIT: usize = 5;
const VEHICLE_SPEED: usize = 6;
const WEATHER: usize = 7;
const VEHICLE_TYPE: usize = 8;
const ELECTRIC_HYBRID: usize = 9;

/// Number of positional fields a complete row carries.
pub const FIELD_COUNT: usize = 10;

/// One vehicle passing through a junction.
///
/// Fields absent from a short row are stored as empty strings; `field_count`
/// keeps the original arity so numeric computations can skip such rows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficRecord {
    pub junction: String,
    pub date: String,
    pub time_of_day: String,
    pub direction_in: String,
    pub direction_out: String,
    pub speed_limit: String,
    pub vehicle_speed: String,
    pub weather: String,
    pub vehicle_type: String,
    pub electric_hybrid: String,
    pub field_count: usize,
}

impl TrafficRecord {
    /// Builds a record from raw fields in file order.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let fields: Vec<String> = fields.into_iter().map(|f| f.as_ref().to_string()).collect();
        let at = |i: usize| fields.get(i).cloned().unwrap_or_default();

        TrafficRecord {
            junction: at(JUNCTION),
            date: at(DATE),
            time_of_day: at(TIME_OF_DAY),
            direction_in: at(DIRECTION_IN),
            direction_out: at(DIRECTION_OUT),
            speed_limit: at(SPEED_LIMIT),
            vehicle_speed: at(VEHICLE_SPEED),
            weather: at(WEATHER),
            vehicle_type: at(VEHICLE_TYPE),
            electric_hybrid: at(ELECTRIC_HYBRID),
            field_count: fields.len(),
        }
    }

    pub fn from_csv(row: &StringRecord) -> Self {
        Self::from_fields(row.iter())
    }

    pub fn is_complete(&self) -> bool {
        self.field_count >= FIELD_COUNT
    }

    /// The first two characters of the time of day, e.g. `"08"` for `"08:15:00"`.
    pub fn hour_label(&self) -> &str {
        let end = self
            .time_of_day
            .char_indices()
            .nth(2)
            .map_or(self.time_of_day.len(), |(i, _)| i);
        &self.time_of_day[..end]
    }

    /// The hour bucket in `0..=23`, or `None` when the label is not an hour.
    pub fn hour(&self) -> Option<u32> {
        self.hour_label()
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|h| *h < 24)
    }

    pub fn speed_limit(&self) -> Option<i64> {
        self.speed_limit.trim().parse().ok()
    }

    pub fn vehicle_speed(&self) -> Option<i64> {
        self.vehicle_speed.trim().parse().ok()
    }

    /// `None` when the row is incomplete or either speed is not an integer.
    pub fn is_over_speed_limit(&self) -> Option<bool> {
        if !self.is_complete() {
            return None;
        }
        Some(self.vehicle_speed()? > self.speed_limit()?)
    }

    pub fn is_no_turn(&self) -> bool {
        self.field_count > DIRECTION_OUT && self.direction_in == self.direction_out
    }

    pub fn is_electric(&self) -> bool {
        self.electric_hybrid == "TRUE"
    }
}
