use time::Date;

/// Source of "today" for due dates and fines.
///
/// Dates are local calendar dates; time of day never takes part in loan arithmetic.
pub trait Clock: 'static {
    fn today(&self) -> Date;
}

pub trait DependOnClock: 'static {
    type Clock: Clock;
    fn clock(&self) -> &Self::Clock;
}
