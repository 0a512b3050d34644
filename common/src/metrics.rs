//! Metric derivation: two raw records in, display-ready values out.
//!
//! # Scaling
//!
//! The dataset reports cases and hospital admissions per 100k residents. The display
//! shows absolute counts, so each rate is multiplied by `population / 100_000`.
//! Inpatient bed utilization is reported in percentage points and shown as a unit
//! fraction (0.0 - 1.0).
//!
//! # Trends
//!
//! Directions and percent changes always compare the *reported* values (per-100k rates,
//! percentage points), never the scaled ones. They are only present when both readings
//! parsed and differ; a zero previous reading never yields a percent change.
//!
//! # Faults
//!
//! Malformed input never fails the derivation. A field that cannot be parsed counts as
//! `0.0` and is listed in [`Derivation::faults`] for the caller to log.

use core::fmt;

use heapless::Vec;

use crate::level::{CommunityLevel, level_direction};
use crate::numeric::{ParseError, parse_numeric, parse_optional};
use crate::record::RecordPair;
use crate::time::LocalTime;
use crate::trend::{Direction, percent_change};

/// Number of characters of `date_updated` kept for display (`YYYY-MM-DD`).
pub const DATE_PREFIX_LEN: usize = 10;

/// Upper bound on faults from one derivation (every field of both records).
pub const FAULT_CAPACITY: usize = 16;

/// Per-capita rates are normalized to this many residents.
const RATE_POPULATION: f64 = 100_000.0;

// =============================================================================
// Output Types
// =============================================================================

/// A numeric quantity with its trend against the previous report.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trend {
    /// Current value, scaled for display.
    pub value: f64,
    pub direction: Option<Direction>,
    /// Signed relative change of the reported values (0.205 = +20.5%).
    pub pct_change: Option<f64>,
}

/// Community level with its trend. Categorical, so no percent change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelTrend<'a> {
    /// Level as reported by the current record (display casing is up to the renderer).
    pub level: &'a str,
    pub direction: Option<Direction>,
}

/// Everything the summary screen shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMetrics<'a> {
    pub date_updated: &'a str,
    pub api_last_called: LocalTime,
    pub county: &'a str,
    pub community_level: LevelTrend<'a>,
    /// Absolute case count.
    pub cases: Trend,
    /// Unit fraction of inpatient beds in use.
    pub inpatient_bed_utilization: Trend,
    /// Absolute hospital admission count.
    pub hospital_admissions: Trend,
}

/// Keys of [`DerivedMetrics`], one per displayable value or indicator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetricKey {
    DateUpdated,
    ApiLastCalled,
    County,
    CommunityLevel,
    CommunityLevelDirection,
    Cases,
    CasesDirection,
    CasesPctChange,
    InpatientBedUtilization,
    InpatientBedUtilizationDirection,
    InpatientBedUtilizationPctChange,
    HospitalAdmissions,
    HospitalAdmissionsDirection,
    HospitalAdmissionsPctChange,
}

impl MetricKey {
    pub const ALL: [Self; 14] = [
        Self::DateUpdated,
        Self::ApiLastCalled,
        Self::County,
        Self::CommunityLevel,
        Self::CommunityLevelDirection,
        Self::Cases,
        Self::CasesDirection,
        Self::CasesPctChange,
        Self::InpatientBedUtilization,
        Self::InpatientBedUtilizationDirection,
        Self::InpatientBedUtilizationPctChange,
        Self::HospitalAdmissions,
        Self::HospitalAdmissionsDirection,
        Self::HospitalAdmissionsPctChange,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateUpdated => "date_updated",
            Self::ApiLastCalled => "api_last_called",
            Self::County => "county",
            Self::CommunityLevel => "community_level",
            Self::CommunityLevelDirection => "community_level_direction",
            Self::Cases => "cases",
            Self::CasesDirection => "cases_direction",
            Self::CasesPctChange => "cases_pct_change",
            Self::InpatientBedUtilization => "inpatient_bed_utilization",
            Self::InpatientBedUtilizationDirection => "inpatient_bed_utilization_direction",
            Self::InpatientBedUtilizationPctChange => "inpatient_bed_utilization_pct_change",
            Self::HospitalAdmissions => "hospital_admissions",
            Self::HospitalAdmissionsDirection => "hospital_admissions_direction",
            Self::HospitalAdmissionsPctChange => "hospital_admissions_pct_change",
        }
    }
}

impl DerivedMetrics<'_> {
    /// Whether `key` carries a value. Absent indicators mean "no indicator", not zero.
    pub const fn is_present(
        &self,
        key: MetricKey,
    ) -> bool {
        match key {
            MetricKey::CommunityLevelDirection => self.community_level.direction.is_some(),
            MetricKey::CasesDirection => self.cases.direction.is_some(),
            MetricKey::CasesPctChange => self.cases.pct_change.is_some(),
            MetricKey::InpatientBedUtilizationDirection => self.inpatient_bed_utilization.direction.is_some(),
            MetricKey::InpatientBedUtilizationPctChange => self.inpatient_bed_utilization.pct_change.is_some(),
            MetricKey::HospitalAdmissionsDirection => self.hospital_admissions.direction.is_some(),
            MetricKey::HospitalAdmissionsPctChange => self.hospital_admissions.pct_change.is_some(),
            MetricKey::DateUpdated
            | MetricKey::ApiLastCalled
            | MetricKey::County
            | MetricKey::CommunityLevel
            | MetricKey::Cases
            | MetricKey::InpatientBedUtilization
            | MetricKey::HospitalAdmissions => true,
        }
    }
}

// =============================================================================
// Faults
// =============================================================================

/// Which record a fault came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordSlot {
    Current,
    Previous,
}

impl RecordSlot {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Current => "current",
            Self::Previous => "previous",
        }
    }
}

/// Raw field that failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RawField {
    DateUpdated,
    CountyPopulation,
    CommunityLevel,
    CasesPer100k,
    InpatientBedUtilization,
    HospitalAdmissionsPer100k,
}

impl RawField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateUpdated => "date_updated",
            Self::CountyPopulation => "county_population",
            Self::CommunityLevel => "community_level",
            Self::CasesPer100k => "cases_per_100k",
            Self::InpatientBedUtilization => "inpatient_bed_utilization",
            Self::HospitalAdmissionsPer100k => "hospital_admissions_per_100k",
        }
    }
}

/// A recovered parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldFault {
    pub slot: RecordSlot,
    pub field: RawField,
    pub error: ParseError,
}

impl fmt::Display for FieldFault {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} record, {}: {}", self.slot.as_str(), self.field.as_str(), self.error)
    }
}

/// Result of [`derive`]: the metrics plus any faults recovered along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Derivation<'a> {
    pub metrics: DerivedMetrics<'a>,
    pub faults: Vec<FieldFault, FAULT_CAPACITY>,
}

// =============================================================================
// Derivation
// =============================================================================

/// Derive display metrics from the two most recent records.
///
/// `now` is the local time of this run, shown as "last called".
pub fn derive<'a>(
    pair: RecordPair<'_, 'a>,
    now: LocalTime,
) -> Derivation<'a> {
    let RecordPair { current, previous } = pair;
    let mut faults = Faults::default();

    let date_updated = faults.date_prefix(current.date_updated);

    // Population only matters for the current record
    let population = faults.value_or_zero(
        RecordSlot::Current,
        RawField::CountyPopulation,
        parse_optional(current.county_population),
    );
    let multiplier = population / RATE_POPULATION;

    let level_direction = level_direction(
        faults.level(RecordSlot::Current, current.community_level),
        faults.level(RecordSlot::Previous, previous.community_level),
    );

    let cases = faults.trend(RawField::CasesPer100k, current.cases_per_100k, previous.cases_per_100k);
    let inpatient = faults.trend(
        RawField::InpatientBedUtilization,
        current.inpatient_bed_utilization,
        previous.inpatient_bed_utilization,
    );
    let admissions = faults.trend(
        RawField::HospitalAdmissionsPer100k,
        current.hospital_admissions_per_100k,
        previous.hospital_admissions_per_100k,
    );

    Derivation {
        metrics: DerivedMetrics {
            date_updated,
            api_last_called: now,
            county: current.county,
            community_level: LevelTrend {
                level: current.community_level,
                direction: level_direction,
            },
            cases: cases.scaled(multiplier),
            inpatient_bed_utilization: inpatient.scaled(0.01),
            hospital_admissions: admissions.scaled(multiplier),
        },
        faults: faults.0,
    }
}

/// Fault collector. Applies the fallback-to-zero policy.
#[derive(Default)]
struct Faults(Vec<FieldFault, FAULT_CAPACITY>);

impl Faults {
    fn push(
        &mut self,
        slot: RecordSlot,
        field: RawField,
        error: ParseError,
    ) {
        // Capacity covers every field of both records
        let _ = self.0.push(FieldFault { slot, field, error });
    }

    fn value_or_zero(
        &mut self,
        slot: RecordSlot,
        field: RawField,
        parsed: Result<f64, ParseError>,
    ) -> f64 {
        parsed.unwrap_or_else(|error| {
            self.push(slot, field, error);
            0.0
        })
    }

    fn date_prefix<'a>(
        &mut self,
        raw: &'a str,
    ) -> &'a str {
        match raw.get(..DATE_PREFIX_LEN) {
            Some(prefix) => prefix,
            None => {
                if raw.len() < DATE_PREFIX_LEN {
                    self.push(RecordSlot::Current, RawField::DateUpdated, ParseError::TooShort(raw.len()));
                }
                // Multi-byte character straddling the cut: keep the whole string
                raw
            }
        }
    }

    /// Unknown levels are recorded and yield no direction.
    fn level(
        &mut self,
        slot: RecordSlot,
        raw: &str,
    ) -> Option<CommunityLevel> {
        CommunityLevel::parse(raw)
            .map_err(|error| self.push(slot, RawField::CommunityLevel, error))
            .ok()
    }

    fn trend(
        &mut self,
        field: RawField,
        current: &str,
        previous: &str,
    ) -> RateTrend {
        let current = parse_numeric(current)
            .inspect_err(|&error| self.push(RecordSlot::Current, field, error))
            .ok();
        let previous = parse_numeric(previous)
            .inspect_err(|&error| self.push(RecordSlot::Previous, field, error))
            .ok();

        let (direction, pct_change) = match (current, previous) {
            (Some(current), Some(previous)) => (Direction::between(current, previous), percent_change(current, previous)),
            _ => (None, None),
        };

        RateTrend {
            current: current.unwrap_or(0.0),
            direction,
            pct_change,
        }
    }
}

/// Trend computed on the reported scale, before display scaling.
struct RateTrend {
    current: f64,
    direction: Option<Direction>,
    pct_change: Option<f64>,
}

impl RateTrend {
    fn scaled(
        self,
        factor: f64,
    ) -> Trend {
        Trend {
            value: self.current * factor,
            direction: self.direction,
            pct_change: self.pct_change,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
