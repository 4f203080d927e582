//! Run timing.

use std::time::{Duration, Instant};

/// Measures wall-clock time from the start of a run.
#[derive(Debug, Clone, Copy)]
pub struct RunClock {
    start: Instant,
}

impl RunClock {
    /// Starts the clock now.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time as `H:MM:SS`.
    pub fn elapsed_hms(&self) -> String {
        format_hms(self.elapsed())
    }
}

/// Formats a duration as `H:MM:SS`, truncating sub-second precision.
pub fn format_hms(duration: Duration) -> String {
    let total = duration.as_secs();
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_hms() {
        assert_eq!(format_hms(Duration::from_secs(0)), "0:00:00");
        assert_eq!(format_hms(Duration::from_millis(1_999)), "0:00:01");
        assert_eq!(format_hms(Duration::from_secs(61)), "0:01:01");
        assert_eq!(format_hms(Duration::from_secs(3_600 * 27 + 59 * 60 + 7)), "27:59:07");
    }

    #[test]
    fn test_clock_starts_near_zero() {
        let clock = RunClock::start();
        assert!(clock.elapsed() < Duration::from_secs(5));
        assert!(clock.elapsed_hms().starts_with("0:00:0"));
    }
}
