//! One update cycle over an explicit device context.
//!
//! [`Device`] owns every collaborator the firmware talks to: where records come
//! from, the wall clock, the display and the status light. [`Device::run_cycle`]
//! performs one pass of fetch, derive, render and schedule. Deriving and scheduling
//! stay pure functions in `covid_level_common`; only this module touches hardware.
//!
//! # Failure Policy
//!
//! A failed fetch or draw skips the update. The cycle still ends with a
//! [`WakeSchedule`], so the device never retries early and never stops.

use covid_level_common::metrics::{Derivation, FAULT_CAPACITY, FieldFault, derive};
use covid_level_common::record::{RawRecord, RecordError, RecordPair};
use covid_level_common::schedule::{UpdateHour, WakeSchedule, next_wake};
use covid_level_common::time::LocalTime;
use covid_level_common::widgets::draw_summary;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::DrawTarget;
use heapless::Vec;
use thiserror::Error;

use crate::status::{Status, StatusLight};

// =============================================================================
// Collaborators
// =============================================================================

/// Why records could not be acquired. Sources apply their own timeouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request timed out")]
    Timeout,
    #[error("no connection to the dataset host")]
    Connectivity,
    #[error("payload could not be decoded")]
    Payload,
}

/// Supplies the latest records, most recent first.
pub trait RecordSource {
    /// Records stay borrowed from the source until the next fetch.
    fn fetch(&mut self) -> Result<&[RawRecord<'_>], FetchError>;
}

/// Local wall-clock time.
pub trait Clock {
    fn now(&self) -> LocalTime;
}

// =============================================================================
// Cycle Results
// =============================================================================

/// Why a cycle skipped its update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Records(#[from] RecordError),
    #[error("display rejected the summary")]
    Render,
}

/// What happened to the screen this cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The summary was redrawn. Fields that failed to parse were shown as zero.
    Updated { faults: Vec<FieldFault, FAULT_CAPACITY> },
    /// Nothing new was shown.
    Skipped(CycleError),
}

/// Result of [`Device::run_cycle`]. Always carries the next wake-up.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CycleReport {
    /// Local time the cycle started, shown as "last called".
    pub started: LocalTime,
    pub outcome: CycleOutcome,
    pub schedule: WakeSchedule,
}

// =============================================================================
// Device Context
// =============================================================================

/// The collaborators one cycle works with.
pub struct Device<S, C, D, L> {
    source: S,
    clock: C,
    display: D,
    light: L,
}

impl<S, C, D, L> Device<S, C, D, L>
where
    S: RecordSource,
    C: Clock,
    D: DrawTarget<Color = Rgb565>,
    L: StatusLight,
{
    pub const fn new(
        source: S,
        clock: C,
        display: D,
        light: L,
    ) -> Self {
        Self {
            source,
            clock,
            display,
            light,
        }
    }

    /// Fetch, derive, render, then compute how long to sleep until `at` o'clock.
    pub fn run_cycle(
        &mut self,
        at: UpdateHour,
    ) -> CycleReport {
        self.light.show(Status::Fetching);
        let started = self.clock.now();

        let outcome = match self.update(started) {
            Ok(faults) => {
                self.light.show(Status::Updated);
                CycleOutcome::Updated { faults }
            }
            Err(err) => CycleOutcome::Skipped(err),
        };

        // Measured after the work so the wake-up lands on the hour
        let schedule = next_wake(&self.clock.now(), at);

        CycleReport {
            started,
            outcome,
            schedule,
        }
    }

    /// Switch off the status light before suspending.
    pub fn rest(&mut self) { self.light.show(Status::Off); }

    pub const fn display_mut(&mut self) -> &mut D { &mut self.display }

    fn update(
        &mut self,
        now: LocalTime,
    ) -> Result<Vec<FieldFault, FAULT_CAPACITY>, CycleError> {
        let records = self.source.fetch()?;
        let pair = RecordPair::from_latest(records)?;
        let Derivation { metrics, faults } = derive(pair, now);
        draw_summary(&mut self.display, &metrics).map_err(|_| CycleError::Render)?;
        Ok(faults)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
