/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

//! Instant value for representing Smithy timestamps.
//!
//! An `Instant` is seconds plus sub-second nanos since the Unix epoch. Service Catalog
//! sends timestamps as epoch seconds, but every Smithy timestamp format can be read and written.

use chrono::{DateTime, Utc};
use std::error::Error as StdError;
use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

mod format;

pub use self::format::InstantParseError;

pub(crate) const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Instant in time.
///
/// Ordering follows the timeline: seconds first, then sub-second nanos.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub struct Instant {
    seconds: i64,
    subsecond_nanos: u32,
}

impl Instant {
    pub fn from_epoch_seconds(epoch_seconds: i64) -> Self {
        Instant {
            seconds: epoch_seconds,
            subsecond_nanos: 0,
        }
    }

    /// `fraction` must be in `[0, 1)`; it is truncated to nanosecond precision.
    pub fn from_fractional_seconds(epoch_seconds: i64, fraction: f64) -> Self {
        let nanos = (fraction * f64::from(NANOS_PER_SECOND)) as u32;
        Instant::from_secs_and_nanos(epoch_seconds, nanos.min(NANOS_PER_SECOND - 1))
    }

    /// Nanos of a second or more carry into `seconds`.
    pub fn from_secs_and_nanos(seconds: i64, subsecond_nanos: u32) -> Self {
        Instant {
            seconds: seconds.saturating_add(i64::from(subsecond_nanos / NANOS_PER_SECOND)),
            subsecond_nanos: subsecond_nanos % NANOS_PER_SECOND,
        }
    }

    /// Lossy: an `f64` cannot hold nanosecond precision for present-day timestamps.
    pub fn from_f64(epoch_seconds: f64) -> Self {
        let seconds = epoch_seconds.floor();
        Instant::from_fractional_seconds(seconds as i64, epoch_seconds - seconds)
    }

    pub fn from_system_time(system_time: SystemTime) -> Self {
        match system_time.duration_since(UNIX_EPOCH) {
            Ok(duration) => {
                Instant::from_secs_and_nanos(duration.as_secs() as i64, duration.subsec_nanos())
            }
            Err(before_epoch) => {
                let duration = before_epoch.duration();
                let seconds = -(duration.as_secs() as i64);
                match duration.subsec_nanos() {
                    0 => Instant::from_epoch_seconds(seconds),
                    nanos => Instant::from_secs_and_nanos(seconds - 1, NANOS_PER_SECOND - nanos),
                }
            }
        }
    }

    /// Parses an `Instant` from a string using the given `format`.
    pub fn from_str(s: &str, format: Format) -> Result<Self, InstantParseError> {
        match format {
            Format::DateTime => format::rfc3339::parse(s),
            Format::HttpDate => format::http_date::parse(s),
            Format::EpochSeconds => format::epoch_seconds::parse(s),
        }
    }

    fn to_chrono(self) -> Result<DateTime<Utc>, ConversionError> {
        DateTime::<Utc>::from_timestamp(self.seconds, self.subsecond_nanos)
            .ok_or(ConversionError("instant is outside the range of a calendar date"))
    }

    pub fn has_nanos(&self) -> bool {
        self.subsecond_nanos != 0
    }

    pub fn epoch_fractional_seconds(&self) -> f64 {
        self.seconds as f64 + f64::from(self.subsecond_nanos) / f64::from(NANOS_PER_SECOND)
    }

    pub fn epoch_seconds(&self) -> i64 {
        self.seconds
    }

    pub fn subsec_nanos(&self) -> u32 {
        self.subsecond_nanos
    }

    /// `None` when the instant does not fit in a `SystemTime` on this platform.
    pub fn to_system_time(&self) -> Option<SystemTime> {
        if self.seconds >= 0 {
            UNIX_EPOCH.checked_add(Duration::new(self.seconds as u64, self.subsecond_nanos))
        } else {
            UNIX_EPOCH
                .checked_sub(Duration::from_secs(self.seconds.unsigned_abs()))?
                .checked_add(Duration::from_nanos(u64::from(self.subsecond_nanos)))
        }
    }

    /// Formats the `Instant` using the given `format`.
    ///
    /// Only calendar formats can fail, for instants beyond the years chrono can represent.
    pub fn fmt(&self, format: Format) -> Result<String, ConversionError> {
        match format {
            Format::DateTime => format::rfc3339::format(self),
            Format::EpochSeconds => Ok(format::epoch_seconds::format(self)),
            Format::HttpDate => format::http_date::format(self),
        }
    }
}

impl From<SystemTime> for Instant {
    fn from(system_time: SystemTime) -> Self {
        Instant::from_system_time(system_time)
    }
}

/// Failure to convert an `Instant` to another representation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct ConversionError(&'static str);

impl StdError for ConversionError {}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Formats for representing an `Instant` in the Smithy protocols.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// RFC-3339 date time, e.g. `2019-12-16T23:48:18Z`.
    DateTime,
    /// RFC-7231 date used by the HTTP `Date` header.
    HttpDate,
    /// Seconds since the Unix epoch with an optional fraction.
    EpochSeconds,
}

#[cfg(test)]
mod test {
    use crate::instant::Format;
    use crate::Instant;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn nanos_carry_into_seconds() {
        let instant = Instant::from_secs_and_nanos(10, 1_500_000_000);
        assert_eq!(instant.epoch_seconds(), 11);
        assert_eq!(instant.subsec_nanos(), 500_000_000);
    }

    #[test]
    fn from_f64_splits_fraction() {
        let instant = Instant::from_f64(1.5);
        assert_eq!(instant, Instant::from_secs_and_nanos(1, 500_000_000));

        let instant = Instant::from_f64(-1.5);
        assert_eq!(instant, Instant::from_secs_and_nanos(-2, 500_000_000));
    }

    #[test]
    fn system_time_before_epoch() {
        let before = UNIX_EPOCH - Duration::from_millis(1500);
        assert_eq!(
            Instant::from(before),
            Instant::from_secs_and_nanos(-2, 500_000_000)
        );
        let after = UNIX_EPOCH + Duration::new(1576540098, 7);
        assert_eq!(
            Instant::from(after),
            Instant::from_secs_and_nanos(1576540098, 7)
        );
        assert_eq!(Instant::from(after).to_system_time(), Some(after));
        assert_eq!(Instant::from(before).to_system_time(), Some(before));
    }

    #[test]
    fn ordering_follows_the_timeline() {
        let earlier = Instant::from_secs_and_nanos(-2, 500_000_000);
        let later = Instant::from_epoch_seconds(-1);
        assert!(earlier < later);
        assert!(Instant::from_secs_and_nanos(5, 1) > Instant::from_epoch_seconds(5));
    }

    #[test]
    fn out_of_range_calendar_format_fails() {
        let instant = Instant::from_epoch_seconds(i64::MAX);
        assert!(instant.fmt(Format::DateTime).is_err());
        assert!(instant.fmt(Format::HttpDate).is_err());
        assert_eq!(
            instant.fmt(Format::EpochSeconds).unwrap(),
            i64::MAX.to_string()
        );
    }
}
