//! Dataset payload loading.
//!
//! The payload is the JSON array the dataset endpoint returns: record objects,
//! newest first, with every value encoded as a string. Records borrow from the
//! payload text, so the text must outlive them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use covid_level_common::record::RawRecord;
use covid_level_pico2::{FetchError, RecordSource};
use log::warn;

/// Read a payload file into memory.
pub fn read_payload(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading records from {}", path.display()))
}

/// Decode the records in `payload` without copying their strings.
///
/// Values containing JSON escape sequences cannot be borrowed and are rejected.
pub fn parse_records(payload: &str) -> Result<Vec<RawRecord<'_>>> {
    serde_json::from_str(payload).context("decoding dataset records")
}

/// Record source backed by a payload read from disk.
///
/// `None` stands for a payload that could not be read, reported to the device as a
/// lost connection. Records are decoded again on every fetch.
pub struct JsonSource<'p> {
    payload: Option<&'p str>,
    records: Vec<RawRecord<'p>>,
}

impl<'p> JsonSource<'p> {
    pub const fn new(payload: Option<&'p str>) -> Self {
        Self {
            payload,
            records: Vec::new(),
        }
    }
}

impl RecordSource for JsonSource<'_> {
    fn fetch(&mut self) -> Result<&[RawRecord<'_>], FetchError> {
        let payload = self.payload.ok_or(FetchError::Connectivity)?;
        self.records = parse_records(payload).map_err(|err| {
            warn!("{err:#}");
            FetchError::Payload
        })?;
        Ok(&self.records)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
