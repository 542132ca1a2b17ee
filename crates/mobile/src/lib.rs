pub mod error;
mod logging;
pub mod records;
pub mod state;

use titan_rush_core::campus::{ClockTime, Coordinate, TravelDuration, backsolve_leave_time_str};

pub use error::PlannerError;
pub use records::*;
pub use state::{PlannerState, TripScreen};

uniffi::setup_scaffolding!();

/// Initialize the library with proper panic handling
/// Call this once at startup from Kotlin/Swift
#[uniffi::export]
pub fn init_panic_handler() {
    std::panic::set_hook(Box::new(|panic_info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        tracing::error!("{panic_info}");
        eprintln!("=== RUST PANIC ===");
        eprintln!("{panic_info}");
        eprintln!("Backtrace:\n{backtrace}");
        eprintln!("=== END PANIC ===");
    }));
}

/// Route `tracing` output to logcat on Android and stderr elsewhere.
/// Safe to call more than once.
#[uniffi::export]
pub fn init_logging() {
    logging::setup_logging();
}

/// Leave-by time for an `H:MM AM|PM` arrival; empty when it does not parse
#[uniffi::export]
pub fn leave_by(arrival: String, total: DurationRecord) -> String {
    backsolve_leave_time_str(&arrival, &TravelDuration::from(total))
}

/// Initial value for the arrival picker
#[uniffi::export]
pub fn default_arrival() -> String {
    ClockTime::default_arrival().to_string()
}

/// Region covering `coordinates` with the default padding. Invalid
/// coordinates are skipped.
#[uniffi::export]
pub fn fit_region(coordinates: Vec<CoordinateRecord>) -> Option<RegionRecord> {
    let coordinates: Vec<Coordinate> = coordinates
        .into_iter()
        .filter_map(|c| Coordinate::try_from(c).ok())
        .collect();

    titan_rush_core::fit_region(&coordinates).map(RegionRecord::from)
}
