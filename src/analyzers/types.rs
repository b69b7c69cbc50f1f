//! Data types produced by the hourly grouping pipeline.

use serde::Serialize;

/// Vehicles counted in one hour at each of the two charted junctions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HourCounts {
    pub primary: usize,
    pub secondary: usize,
}

/// Per-hour counts for the whole day. Every hour `0..24` is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourlyCounts {
    pub(crate) hours: [HourCounts; 24],
}

impl Default for HourlyCounts {
    fn default() -> Self {
        HourlyCounts {
            hours: [HourCounts::default(); 24],
        }
    }
}

impl HourlyCounts {
    pub fn get(&self, hour: u32) -> Option<HourCounts> {
        self.hours.get(hour as usize).copied()
    }

    /// Iterates `(hour, counts)` pairs in hour order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, HourCounts)> + '_ {
        self.hours.iter().enumerate().map(|(h, c)| (h as u32, *c))
    }

    /// Largest single-junction count in any hour.
    pub fn max_count(&self) -> usize {
        self.hours
            .iter()
            .map(|c| c.primary.max(c.secondary))
            .max()
            .unwrap_or(0)
    }

    pub fn total(&self) -> HourCounts {
        self.hours.iter().fold(HourCounts::default(), |acc, c| HourCounts {
            primary: acc.primary + c.primary,
            secondary: acc.secondary + c.secondary,
        })
    }
}

/// The busiest hour (or tied hours) at a junction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeakHour {
    pub count: usize,
    /// One `"Between H:00 and H+1:00"` label per hour reaching `count`.
    pub hours: Vec<String>,
}
