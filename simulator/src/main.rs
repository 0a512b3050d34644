//! COVID Community Level Simulator for desktop.
//!
//! Runs one device cycle on the host: the firmware's [`Device`] fetches records from
//! a payload file, derives the metrics and draws the summary into an
//! embedded-graphics simulator display, which is saved as a PNG (or shown in a
//! window with the `window` feature).
//!
//! ```bash
//! RUST_LOG=debug cargo run -p covid-level-simulator -- --records simulator/fixtures/records.json
//! ```

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod payload;
mod wall_clock;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use covid_level_common::config::{DAILY_UPDATE_HOUR, SCREEN_HEIGHT, SCREEN_WIDTH};
use covid_level_common::query::{APP_TOKEN_HEADER, CountyFips, query_url};
use covid_level_common::schedule::UpdateHour;
use covid_level_common::time::LocalTime;
use covid_level_pico2::{CycleOutcome, CycleReport, Device, Status, StatusLight};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay};
use log::{debug, info, warn};

use crate::payload::{JsonSource, read_payload};
use crate::wall_clock::{FixedClock, local_now};

#[derive(Parser, Debug)]
#[command(name = "covid-level-simulator", about = "Render the community level summary on the desktop")]
struct Args {
    /// Dataset payload: JSON array of records, newest first
    #[arg(
        long,
        env = "COVID_LEVEL_RECORDS",
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/records.json")
    )]
    records: PathBuf,

    /// Where to write the rendered summary
    #[arg(long, env = "COVID_LEVEL_OUTPUT", default_value = "summary.png")]
    output: PathBuf,

    /// County FIPS code; logs the dataset query the device would send
    #[arg(long, env = "COVID_LEVEL_COUNTY_FIPS")]
    county_fips: Option<String>,

    /// Local hour (0-23) of the daily update
    #[arg(long, default_value_t = DAILY_UPDATE_HOUR)]
    update_hour: u8,

    /// Pretend the cycle runs at this local time (`2026-10-19T19:00:00`) instead of now
    #[arg(long)]
    now: Option<String>,

    /// Show the summary in a window instead of writing a PNG
    #[cfg(feature = "window")]
    #[arg(long)]
    window: bool,
}

/// Status light stand-in: reports changes in the log.
struct LogLight;

impl StatusLight for LogLight {
    fn show(
        &mut self,
        status: Status,
    ) {
        debug!("Status light: {status:?} {:?}", status.channels());
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("{args:?}");
    run(&args).map(|_| ())
}

/// Run one cycle. Only bad arguments and a failed PNG write are errors; a cycle
/// that skips its update still reports the next wake-up.
fn run(args: &Args) -> Result<CycleReport> {
    let update_hour = UpdateHour::new(args.update_hour)?;

    if let Some(raw) = &args.county_fips {
        let fips = CountyFips::parse(raw).with_context(|| format!("county FIPS {raw:?}"))?;
        info!("Dataset query: {} (token header {APP_TOKEN_HEADER})", query_url(&fips));
    }

    let now = match &args.now {
        Some(raw) => LocalTime::parse_iso(raw).with_context(|| format!("--now {raw:?}"))?,
        None => local_now().context("reading the host clock")?,
    };

    // An unreadable file reaches the device as a failed fetch
    let payload = read_payload(&args.records).inspect_err(|err| warn!("{err:#}")).ok();
    let display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let mut device = Device::new(JsonSource::new(payload.as_deref()), FixedClock(now), display, LogLight);

    let report = device.run_cycle(update_hour);
    info!("Cycle started at {}", report.started);
    match &report.outcome {
        CycleOutcome::Updated { faults } => {
            for fault in faults {
                warn!("Shown as zero: {fault}");
            }
            info!("Summary updated ({} fields unreadable)", faults.len());
        }
        CycleOutcome::Skipped(err) => warn!("Update skipped, trying again later: {err}"),
    }
    device.rest();
    info!("Sleeping for {}", report.schedule);

    if matches!(report.outcome, CycleOutcome::Updated { .. }) {
        present(device.display_mut(), args)?;
    }
    Ok(report)
}

fn present(
    display: &SimulatorDisplay<Rgb565>,
    args: &Args,
) -> Result<()> {
    #[cfg(feature = "window")]
    if args.window {
        let output_settings = OutputSettingsBuilder::new().scale(2).build();
        embedded_graphics_simulator::Window::new("Community Level", &output_settings).show_static(display);
        return Ok(());
    }

    let output_settings = OutputSettingsBuilder::new().build();
    display
        .to_rgb_output_image(&output_settings)
        .save_png(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    info!("Summary written to {}", args.output.display());
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use covid_level_common::record::RecordError;
    use covid_level_pico2::{CycleError, FetchError};

    use super::*;

    fn fixture(name: &str) -> String { format!("{}/fixtures/{name}", env!("CARGO_MANIFEST_DIR")) }

    fn args(
        records: &str,
        extra: &[&str],
    ) -> Args {
        let base = ["simulator", "--records", records];
        Args::try_parse_from(base.iter().chain(extra)).unwrap()
    }

    fn temp_png(name: &str) -> PathBuf { std::env::temp_dir().join(format!("covid-level-{}-{name}.png", std::process::id())) }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["simulator"]).unwrap();
        assert_eq!(args.update_hour, 19);
        assert_eq!(args.output, PathBuf::from("summary.png"));
        assert!(args.county_fips.is_none());
    }

    #[test]
    fn test_default_records_resolve_from_any_directory() {
        let args = Args::try_parse_from(["simulator"]).unwrap();
        assert!(args.records.is_absolute());
        assert!(args.records.ends_with("fixtures/records.json"));
        assert!(args.records.exists());
    }

    #[test]
    fn test_renders_fixture_to_png() {
        let output = temp_png("fixture");
        let output_arg = output.to_string_lossy().into_owned();
        let report = run(&args(
            &fixture("records.json"),
            &["--output", &output_arg, "--county-fips", "36029", "--now", "2026-10-19T18:00:00"],
        ))
        .unwrap();

        assert!(matches!(&report.outcome, CycleOutcome::Updated { faults } if faults.is_empty()));
        assert_eq!(report.schedule.seconds(), 3_600);
        let written = std::fs::metadata(&output).unwrap();
        assert!(written.len() > 0);
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_missing_rate_still_renders() {
        let output = temp_png("missing-rate");
        let output_arg = output.to_string_lossy().into_owned();
        let report = run(&args(&fixture("missing_rate.json"), &["--output", &output_arg, "--now", "2026-10-19T18:00:00"])).unwrap();

        assert!(matches!(&report.outcome, CycleOutcome::Updated { faults } if faults.len() == 1));
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn test_single_record_still_schedules() {
        let report = run(&args(&fixture("one_record.json"), &["--now", "2026-10-19T20:00:00"])).unwrap();
        assert_eq!(report.outcome, CycleOutcome::Skipped(CycleError::Records(RecordError::TooFew(1))));
        assert_eq!(report.schedule.seconds(), 23 * 3_600);
    }

    #[test]
    fn test_unreadable_payload_still_schedules() {
        let report = run(&args("does/not/exist.json", &["--now", "2026-10-19T18:30:00"])).unwrap();
        assert_eq!(report.outcome, CycleOutcome::Skipped(CycleError::Fetch(FetchError::Connectivity)));
        assert_eq!(report.schedule.seconds(), 30 * 60);
    }

    #[test]
    fn test_rejects_bad_inputs() {
        let records = fixture("records.json");
        assert!(run(&args(&records, &["--update-hour", "24"])).is_err());
        assert!(run(&args(&records, &["--county-fips", "3602"])).is_err());
        assert!(run(&args(&records, &["--now", "tonight"])).is_err());
    }
}
