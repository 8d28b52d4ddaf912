//! Status and fill-level distributions.

use crate::domain::Station;

/// Station counts by operational state.
///
/// Empty and full only count active stations, so a station in maintenance
/// is counted once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusDistribution {
    pub active: usize,
    pub maintenance: usize,
    pub empty_active: usize,
    pub full_active: usize,
}

impl StatusDistribution {
    pub fn compute(stations: &[Station]) -> Self {
        let mut dist = Self::default();
        for s in stations {
            if s.in_maintenance() {
                dist.maintenance += 1;
                continue;
            }
            dist.active += 1;
            if s.is_empty() {
                dist.empty_active += 1;
            }
            if s.is_full() {
                dist.full_active += 1;
            }
        }
        dist
    }
}

/// Fill-level bucket of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AvailabilityBucket {
    /// No bikes
    Empty,
    /// Above 0, up to 25%
    UpToQuarter,
    /// Above 25%, up to 50%
    UpToHalf,
    /// Above 50%, up to 75%
    UpToThreeQuarters,
    /// Above 75% but not full
    NearlyFull,
    /// Every dock occupied
    Full,
}

impl AvailabilityBucket {
    pub const ALL: [AvailabilityBucket; 6] = [
        AvailabilityBucket::Empty,
        AvailabilityBucket::UpToQuarter,
        AvailabilityBucket::UpToHalf,
        AvailabilityBucket::UpToThreeQuarters,
        AvailabilityBucket::NearlyFull,
        AvailabilityBucket::Full,
    ];

    /// Classify a station. A zero-dock station is empty.
    pub fn of(station: &Station) -> Self {
        if station.is_empty() {
            return AvailabilityBucket::Empty;
        }
        if station.is_full() {
            return AvailabilityBucket::Full;
        }
        let ratio = station.occupancy.fill_ratio();
        if ratio <= 0.25 {
            AvailabilityBucket::UpToQuarter
        } else if ratio <= 0.5 {
            AvailabilityBucket::UpToHalf
        } else if ratio <= 0.75 {
            AvailabilityBucket::UpToThreeQuarters
        } else {
            AvailabilityBucket::NearlyFull
        }
    }

    /// Chart label.
    pub fn label(&self) -> &'static str {
        match self {
            AvailabilityBucket::Empty => "0%",
            AvailabilityBucket::UpToQuarter => "1-25%",
            AvailabilityBucket::UpToHalf => "26-50%",
            AvailabilityBucket::UpToThreeQuarters => "51-75%",
            AvailabilityBucket::NearlyFull => "76-99%",
            AvailabilityBucket::Full => "100%",
        }
    }
}

/// Station count per availability bucket, in bucket order.
pub fn availability_histogram(stations: &[Station]) -> Vec<(AvailabilityBucket, usize)> {
    let mut counts = [0usize; AvailabilityBucket::ALL.len()];
    for s in stations {
        counts[AvailabilityBucket::of(s) as usize] += 1;
    }
    AvailabilityBucket::ALL.into_iter().zip(counts).collect()
}
