//! Physical constants shared by the calendar and time state.

/// Seconds in one simulated day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days in one calendar year (the mean tropical year).
///
/// Years are fixed-length cycles with no leap days, so this value is used for
/// every year of a simulation.
pub const DAYS_PER_YEAR: f64 = 365.2422;

/// Seconds in one calendar year.
pub const SECONDS_PER_YEAR: f64 = SECONDS_PER_DAY * DAYS_PER_YEAR;
