use std::time::{Duration, Instant};

use crate::error::ConfigError;


/** time budget given on the command line (strictly positive, finite, in seconds) */
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBudget {
    /// value given by the user
    seconds: f64,
    /// same value as a duration
    duration: Duration,
}

impl TimeBudget {

    /** reads a time budget. Non-numeric, zero, negative or non-finite values are rejected. */
    pub fn parse(s:&str) -> Result<Self, ConfigError> {
        let invalid = || ConfigError::InvalidTimeBudget(s.to_string());
        let seconds = s.trim().parse::<f64>().map_err(|_| invalid())?;
        if !seconds.is_finite() || seconds <= 0. { return Err(invalid()); }
        let duration = Duration::try_from_secs_f64(seconds).map_err(|_| invalid())?;
        Ok(Self { seconds, duration })
    }

    /// configured number of seconds
    pub fn seconds(&self) -> f64 { self.seconds }

    /// configured duration
    pub fn duration(&self) -> Duration { self.duration }
}


/** deadline of a search: starting instant + allowed duration.
Checked cooperatively by the branch & bound.
*/
#[derive(Debug, Clone, Copy)]
pub struct SearchBudget {
    /// beginning of the search phase
    start: Instant,
    /// allowed duration
    limit: Duration,
}

impl SearchBudget {

    /** starts the clock now */
    pub fn start(limit:Duration) -> Self { Self::started_at(Instant::now(), limit) }

    /** budget whose clock started at `start` */
    pub fn started_at(start:Instant, limit:Duration) -> Self { Self { start, limit } }

    /// allowed duration
    pub fn limit(&self) -> Duration { self.limit }

    /// time spent since the beginning of the search phase
    pub fn elapsed(&self) -> Duration { self.start.elapsed() }

    /** true iff the elapsed time strictly exceeds the limit */
    pub fn is_exhausted(&self) -> bool { self.elapsed() > self.limit }
}
