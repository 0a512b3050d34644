//! Core of the COVID community level display.
//!
//! This crate contains the platform-agnostic logic shared between the simulator and
//! the Pico 2 firmware:
//!
//! - [`record`]: Raw dataset records and the current/previous pair
//! - [`numeric`]: Parsing of numeric text fields
//! - [`level`]: Community level ordering
//! - [`trend`]: Direction of change and percent change
//! - [`metrics`]: Deriving the displayable metrics from a record pair
//! - [`time`]: Local wall-clock time on chrono's naive calendar
//! - [`schedule`]: Seconds until the next daily update
//! - [`query`]: Upstream dataset URL for a county
//! - [`format`]: Text formatting for summary values
//! - [`colors`], [`config`], [`styles`]: Screen constants
//! - [`widgets`]: Drawing the summary screen and the guidance QR code
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and never allocates. Nothing here logs;
//! recoverable problems are returned to the caller (see [`metrics::Derivation`]).

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod colors;
pub mod config;
pub mod format;
pub mod level;
pub mod metrics;
pub mod numeric;
pub mod query;
pub mod record;
pub mod schedule;
pub mod styles;
pub mod time;
pub mod trend;
pub mod widgets;

// Re-export commonly used items
pub use level::CommunityLevel;
pub use metrics::{Derivation, DerivedMetrics, FieldFault, derive};
pub use record::{RawRecord, RecordError, RecordPair};
pub use schedule::{UpdateHour, WakeSchedule, next_wake};
pub use time::LocalTime;
pub use trend::{Direction, Glyph};
