//! # Clock: Injected Notion of "Now"
//!
//! Two identifier rules depend on the current date: the century of a
//! Swedish ten-digit personnummer and the age derived from any birth date.
//! Both read the date through the [`Clock`] trait so that results are
//! reproducible.
//!
//! - [`SystemClock`] reads the UTC wall clock, truncated to whole seconds.
//! - [`FixedClock`] always answers the same instant. Tests and the CLI's
//!   `--today` flag use it.
//!
//! All instants are UTC. The calendar date handed to identifier rules is the
//! UTC date of the instant; local offsets never enter the computation.

use chrono::{DateTime, NaiveDate, Timelike, Utc};

/// Source of the current instant.
pub trait Clock: Send + Sync + std::fmt::Debug {
    /// The current instant in UTC.
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC calendar date.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Reads the system wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        truncate_to_seconds(Utc::now())
    }
}

/// A clock pinned to a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    /// Pin the clock to `instant`, truncating sub-seconds.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(instant))
    }

    /// Pin the clock to midnight UTC at the start of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        Self(date.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// Pin the clock to the start of a `YYYY-MM-DD` date.
    pub fn parse_date(s: &str) -> Result<Self, chrono::ParseError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")?;
        Ok(Self::at_date(date))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}
