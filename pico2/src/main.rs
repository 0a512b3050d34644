//! COVID Community Level Display Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Shows the county's community level and trends on the Pimoroni PIM715 Display
//! Pack 2.8".
//!
//! # Cycle
//!
//! Once a day at [`DAILY_UPDATE_HOUR`]:
//! - LED red, fetch the two latest records, derive metrics, redraw the summary
//! - LED green if the screen was updated
//! - After a short settle, LED off and sleep until the next update hour
//!
//! The summary stays on screen while the device sleeps. Nothing but the
//! collaborators themselves carries over from one cycle to the next.

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]
// Crate-level lints (match lib.rs for consistency)
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod display;
#[cfg(target_arch = "arm")]
mod led;

#[cfg(target_arch = "arm")]
use covid_level_common::config::DAILY_UPDATE_HOUR;
#[cfg(target_arch = "arm")]
use covid_level_common::schedule::UpdateHour;
#[cfg(target_arch = "arm")]
use covid_level_pico2::clock::{UptimeClock, boot_time, fallback_boot_time};
#[cfg(target_arch = "arm")]
use covid_level_pico2::{CycleOutcome, CycleReport, DemoSource, Device};
#[cfg(target_arch = "arm")]
use defmt::{Display2Format, info, warn};
#[cfg(target_arch = "arm")]
use embassy_executor::Spawner;
#[cfg(target_arch = "arm")]
use embassy_rp::gpio::{Level, Output};
#[cfg(target_arch = "arm")]
use embassy_rp::spi::Spi;
#[cfg(target_arch = "arm")]
use embassy_time::{Instant, Timer};
#[cfg(target_arch = "arm")]
use {defmt_rtt as _, panic_probe as _};

#[cfg(target_arch = "arm")]
use crate::display::{display_spi_config, init_display};
#[cfg(target_arch = "arm")]
use crate::led::RgbLed;

/// Seconds the status light stays on after a cycle before the device sleeps.
#[cfg(target_arch = "arm")]
const SETTLE_SECS: u32 = 2;

#[cfg(target_arch = "arm")]
const UPDATE_HOUR: UpdateHour = match UpdateHour::new(DAILY_UPDATE_HOUR) {
    Ok(hour) => hour,
    Err(_) => panic!("DAILY_UPDATE_HOUR out of range"),
};

// Program metadata for `picotool info`
#[cfg(target_arch = "arm")]
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"pico2-covid-level"),
    embassy_rp::binary_info::rp_program_description!(c"COVID community level display on PIM715"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

#[cfg(target_arch = "arm")]
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Community level display starting...");

    let p = embassy_rp::init(Default::default());

    // RGB LED (active-low), PIM715: Red=26, Green=27, Blue=28
    let light = RgbLed::new(
        Output::new(p.PIN_26, Level::High),
        Output::new(p.PIN_27, Level::High),
        Output::new(p.PIN_28, Level::High),
    );

    // PIM715 pinout: CS=17, DC=16, CLK=18, MOSI=19, Backlight=20
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_16, Level::Low);
    let _backlight = Output::new(p.PIN_20, Level::High);

    // TX-only, the display has no MISO
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, display_spi_config());

    let display = match init_display(spi, cs, dc) {
        Ok(display) => display,
        Err(err) => defmt::panic!("Display init failed: {}", Display2Format(&err)),
    };
    info!("Display initialized!");

    let boot = match boot_time(option_env!("COVID_LEVEL_BOOT_TIME")) {
        Ok(boot) => boot,
        Err(err) => {
            warn!("Ignoring COVID_LEVEL_BOOT_TIME: {}", Display2Format(&err));
            fallback_boot_time()
        }
    };
    info!("Boot time: {}", Display2Format(&boot));

    let clock = UptimeClock::new(boot, || Instant::now().as_secs());
    let mut device = Device::new(DemoSource, clock, display, light);

    loop {
        let report = device.run_cycle(UPDATE_HOUR);
        log_report(&report);

        Timer::after_secs(u64::from(SETTLE_SECS)).await;
        device.rest();

        info!("Sleeping for {}", Display2Format(&report.schedule));
        let remaining = report.schedule.seconds().saturating_sub(SETTLE_SECS);
        Timer::after_secs(u64::from(remaining)).await;
    }
}

#[cfg(target_arch = "arm")]
fn log_report(report: &CycleReport) {
    info!("Cycle started at {}", Display2Format(&report.started));
    match &report.outcome {
        CycleOutcome::Updated { faults } => {
            for fault in faults {
                warn!("Shown as zero: {}", Display2Format(fault));
            }
            info!("Summary updated ({} fields unreadable)", faults.len());
        }
        CycleOutcome::Skipped(err) => warn!("Update skipped, trying again later: {}", Display2Format(err)),
    }
}

/// Host builds (workspace tests) only need the library; the firmware requires the RP2350.
#[cfg(not(target_arch = "arm"))]
fn main() {}
