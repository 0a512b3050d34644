//! Built-in records for boards without a network connection.
//!
//! The Pico 2 driving the display pack has no radio, so the firmware shows a fixed
//! pair of reports. Anything implementing [`RecordSource`] can replace it.

use covid_level_common::record::RawRecord;

use crate::device::{FetchError, RecordSource};

/// Two consecutive weekly reports, newest first.
pub const DEMO_RECORDS: [RawRecord<'static>; 2] = [
    RawRecord {
        date_updated: "2026-10-15T00:00:00.000",
        county: "Erie County",
        county_population: Some("954236"),
        community_level: "Medium",
        cases_per_100k: "120.5",
        inpatient_bed_utilization: "4.2",
        hospital_admissions_per_100k: "9.8",
    },
    RawRecord {
        date_updated: "2026-10-08T00:00:00.000",
        county: "Erie County",
        county_population: Some("954236"),
        community_level: "Low",
        cases_per_100k: "100.0",
        inpatient_bed_utilization: "4.2",
        hospital_admissions_per_100k: "10.9",
    },
];

/// Record source serving [`DEMO_RECORDS`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DemoSource;

impl RecordSource for DemoSource {
    fn fetch(&mut self) -> Result<&[RawRecord<'_>], FetchError> { Ok(&DEMO_RECORDS) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use covid_level_common::derive;
    use covid_level_common::record::RecordPair;
    use covid_level_common::time::LocalTime;
    use covid_level_common::trend::Direction;

    use super::*;

    #[test]
    fn test_demo_records_derive_cleanly() {
        let mut source = DemoSource;
        let records = source.fetch().unwrap();
        let pair = RecordPair::from_latest(records).unwrap();
        let derivation = derive(pair, LocalTime::new(2026, 10, 19, 19, 0, 0).unwrap());

        assert!(derivation.faults.is_empty());
        let metrics = derivation.metrics;
        assert_eq!(metrics.date_updated, "2026-10-15");
        assert_eq!(metrics.community_level.direction, Some(Direction::Up));
        assert_eq!(metrics.cases.direction, Some(Direction::Up));
        assert_eq!(metrics.inpatient_bed_utilization.direction, None);
        assert_eq!(metrics.hospital_admissions.direction, Some(Direction::Down));
    }
}
