//! Raw public-health records as delivered by the upstream dataset.
//!
//! All fields are borrowed from the payload buffer; nothing is parsed until the
//! metric deriver runs. With the `serde` feature a record deserializes directly from
//! the dataset's JSON objects. Unknown fields are ignored. The upstream leaves out
//! null columns, so an absent level or rate decodes as an empty string and surfaces
//! later as a field fault.

use thiserror::Error;

/// One reporting-period snapshot for a county.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct RawRecord<'a> {
    /// Timestamp of the report, ISO formatted (`2026-10-15T00:00:00.000`).
    pub date_updated: &'a str,
    pub county: &'a str,
    /// Numeric string. Some rows omit it.
    #[cfg_attr(feature = "serde", serde(default, borrow))]
    pub county_population: Option<&'a str>,
    /// "Low", "Medium" or "High", any case.
    #[cfg_attr(feature = "serde", serde(rename = "covid_19_community_level", default))]
    pub community_level: &'a str,
    #[cfg_attr(feature = "serde", serde(rename = "covid_cases_per_100k", default))]
    pub cases_per_100k: &'a str,
    /// Percentage points, 0-100.
    #[cfg_attr(feature = "serde", serde(rename = "covid_inpatient_bed_utilization", default))]
    pub inpatient_bed_utilization: &'a str,
    #[cfg_attr(feature = "serde", serde(rename = "covid_hospital_admissions_per_100k", default))]
    pub hospital_admissions_per_100k: &'a str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Trend derivation needs a current and a previous record.
    #[error("expected at least 2 records, got {0}")]
    TooFew(usize),
}

/// The two most recent records of a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordPair<'r, 'a> {
    pub current: &'r RawRecord<'a>,
    pub previous: &'r RawRecord<'a>,
}

impl<'r, 'a> RecordPair<'r, 'a> {
    /// Take the first two records of a most-recent-first slice.
    ///
    /// The upstream query orders by `date_updated` descending; the order is trusted
    /// as delivered and never re-sorted. Extra records are ignored.
    pub fn from_latest(records: &'r [RawRecord<'a>]) -> Result<Self, RecordError> {
        match records {
            [current, previous, ..] => Ok(Self { current, previous }),
            _ => Err(RecordError::TooFew(records.len())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
