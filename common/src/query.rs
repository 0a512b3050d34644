//! Upstream dataset query.
//!
//! The records come from a Socrata (SODA) endpoint filtered to one county and ordered
//! newest first, so the first two rows are the current and previous reports.

use core::fmt::Write;

use heapless::String;
use thiserror::Error;

use crate::config::{DATASET_HOST, DATASET_ID, RECORD_COUNT};

/// HTTP header carrying the application token.
pub const APP_TOKEN_HEADER: &str = "X-App-Token";

/// Capacity of a built query URL.
pub const QUERY_URL_LEN: usize = 160;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FipsError {
    #[error("county FIPS code must be 5 digits")]
    Format,
}

/// Five-digit county FIPS code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountyFips([u8; 5]);

impl CountyFips {
    pub fn parse(raw: &str) -> Result<Self, FipsError> {
        let bytes: [u8; 5] = raw.trim().as_bytes().try_into().map_err(|_| FipsError::Format)?;
        if bytes.iter().all(u8::is_ascii_digit) {
            Ok(Self(bytes))
        } else {
            Err(FipsError::Format)
        }
    }

    pub fn as_str(&self) -> &str {
        // Validated as ASCII digits on construction
        core::str::from_utf8(&self.0).unwrap_or_default()
    }
}

/// URL returning the latest [`RECORD_COUNT`] records for `fips`, newest first.
pub fn query_url(fips: &CountyFips) -> String<QUERY_URL_LEN> {
    let mut url = String::new();
    // Capacity is sized for the fixed parts plus a 5-digit code
    let _ = write!(
        url,
        "https://{DATASET_HOST}/resource/{DATASET_ID}.json?county_fips={}&$order=date_updated%20DESC&$limit={RECORD_COUNT}",
        fips.as_str()
    );
    url
}

// =============================================================================
// Unit Tests
// =============================================================================
