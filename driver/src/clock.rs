use std::cell::Cell;

use kernel::interface::clock::Clock;
use time::{Date, Duration, OffsetDateTime};
use tracing::debug;

/// Local calendar date of the host, falling back to UTC when the offset is unknown.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_local()
            .unwrap_or_else(|error| {
                debug!("local offset unavailable, using UTC: {error}");
                OffsetDateTime::now_utc()
            })
            .date()
    }
}

/// Clock that only moves when told to.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: Cell<Date>,
}

impl ManualClock {
    pub fn new(today: Date) -> Self {
        Self {
            today: Cell::new(today),
        }
    }

    pub fn set(&self, today: Date) {
        self.today.set(today);
    }

    pub fn advance(&self, days: i64) {
        self.today
            .set(self.today.get().saturating_add(Duration::days(days)));
    }
}

impl Clock for ManualClock {
    fn today(&self) -> Date {
        self.today.get()
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::clock::Clock;
    use time::macros::date;

    use crate::clock::ManualClock;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(date!(2026 - 10 - 16));
        clock.advance(16);
        assert_eq!(clock.today(), date!(2026 - 11 - 01));
        clock.set(date!(2027 - 01 - 01));
        assert_eq!(clock.today(), date!(2027 - 01 - 01));
    }
}
