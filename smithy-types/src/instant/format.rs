/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use std::error::Error as StdError;
use std::fmt;

/// Failure to parse an `Instant` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InstantParseError {
    Invalid(String),
    IntParseError,
}

impl StdError for InstantParseError {}

impl fmt::Display for InstantParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstantParseError::Invalid(msg) => write!(f, "invalid timestamp: {}", msg),
            InstantParseError::IntParseError => write!(f, "failed to parse an integer"),
        }
    }
}

impl From<chrono::ParseError> for InstantParseError {
    fn from(err: chrono::ParseError) -> Self {
        InstantParseError::Invalid(err.to_string())
    }
}

pub(crate) mod epoch_seconds {
    use super::InstantParseError;
    use crate::instant::NANOS_PER_SECOND;
    use crate::Instant;

    /// Ok: "1576540098", "1576540098.52", "-1.5"
    pub(crate) fn format(instant: &Instant) -> String {
        if instant.subsecond_nanos == 0 {
            return instant.seconds.to_string();
        }
        // A negative instant with nanos sits between `seconds` and `seconds + 1`.
        let (sign, whole, nanos) = if instant.seconds < 0 {
            (
                "-",
                (instant.seconds + 1).unsigned_abs(),
                NANOS_PER_SECOND - instant.subsecond_nanos,
            )
        } else {
            ("", instant.seconds.unsigned_abs(), instant.subsecond_nanos)
        };
        let fraction = format!("{:0>9}", nanos);
        format!("{}{}.{}", sign, whole, fraction.trim_end_matches('0'))
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let s = s.trim();
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (unsigned, None),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstantParseError::Invalid(format!(
                "`{}` is not a number of seconds",
                s
            )));
        }
        let seconds: i64 = whole
            .parse()
            .map_err(|_| InstantParseError::IntParseError)?;
        let nanos = match fraction {
            None => 0,
            Some(digits) => parse_fraction(digits)?,
        };
        Ok(match (negative, nanos) {
            (false, _) => Instant::from_secs_and_nanos(seconds, nanos),
            (true, 0) => Instant::from_epoch_seconds(-seconds),
            (true, _) => Instant::from_secs_and_nanos(-seconds - 1, NANOS_PER_SECOND - nanos),
        })
    }

    fn parse_fraction(digits: &str) -> Result<u32, InstantParseError> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstantParseError::Invalid(format!(
                "`{}` is not a fraction of a second",
                digits
            )));
        }
        if digits.len() > 9 {
            return Err(InstantParseError::Invalid(
                "precision beyond nanoseconds".to_owned(),
            ));
        }
        let value: u32 = digits
            .parse()
            .map_err(|_| InstantParseError::IntParseError)?;
        Ok(value * 10_u32.pow(9 - digits.len() as u32))
    }
}

pub(crate) mod rfc3339 {
    use super::InstantParseError;
    use crate::instant::ConversionError;
    use crate::Instant;
    use chrono::{DateTime, SecondsFormat};

    /// Ok: "2019-12-16T23:48:18Z", "2019-12-16T23:48:18.52Z"
    pub(crate) fn format(instant: &Instant) -> Result<String, ConversionError> {
        let formatted = instant
            .to_chrono()?
            .to_rfc3339_opts(SecondsFormat::AutoSi, true);
        if let Some(body) = formatted.strip_suffix('Z') {
            if body.contains('.') {
                return Ok(format!("{}Z", body.trim_end_matches('0')));
            }
        }
        Ok(formatted)
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        let parsed = DateTime::parse_from_rfc3339(s.trim())?;
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

pub(crate) mod http_date {
    use super::InstantParseError;
    use crate::instant::ConversionError;
    use crate::Instant;
    use chrono::{DateTime, NaiveDateTime, Utc};

    const NANOS_PER_MILLI: u32 = 1_000_000;

    /// Ok: "Mon, 16 Dec 2019 23:48:18 GMT", "Mon, 16 Dec 2019 23:48:18.520 GMT"
    pub(crate) fn format(instant: &Instant) -> Result<String, ConversionError> {
        let mut out = instant
            .to_chrono()?
            .format("%a, %d %b %Y %H:%M:%S")
            .to_string();
        if instant.subsecond_nanos != 0 {
            out.push_str(&format!(".{:03}", instant.subsecond_nanos / NANOS_PER_MILLI));
        }
        out.push_str(" GMT");
        Ok(out)
    }

    pub(crate) fn parse(s: &str) -> Result<Instant, InstantParseError> {
        if !s.is_ascii() {
            return Err(InstantParseError::Invalid("not ascii".to_owned()));
        }
        let naive = NaiveDateTime::parse_from_str(s.trim(), "%a, %d %b %Y %H:%M:%S%.f GMT")?;
        let parsed = DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
        Ok(Instant::from_secs_and_nanos(
            parsed.timestamp(),
            parsed.timestamp_subsec_nanos(),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::{epoch_seconds, http_date, rfc3339, InstantParseError};
    use crate::Instant;
    use proptest::prelude::*;

    #[test]
    fn http_date_format() {
        let basic_http_date = "Mon, 16 Dec 2019 23:48:18 GMT";
        let instant = Instant::from_epoch_seconds(1576540098);
        assert_eq!(http_date::format(&instant).unwrap(), basic_http_date);
        assert_eq!(http_date::parse(basic_http_date), Ok(instant));
    }

    #[test]
    fn http_date_fractional_millis() {
        let fractional = "Mon, 16 Dec 2019 23:48:18.123 GMT";
        let instant = Instant::from_secs_and_nanos(1576540098, 123_000_000);
        assert_eq!(http_date::parse(fractional), Ok(instant));
        assert_eq!(http_date::format(&instant).unwrap(), fractional);
    }

    #[test]
    fn http_date_rejects_wrong_weekday() {
        assert!(http_date::parse("Tue, 16 Dec 2019 23:48:18 GMT").is_err());
    }

    #[test]
    fn rfc3339_parse_with_offset() {
        let instant = rfc3339::parse("2019-12-17T00:48:18.52+01:00").unwrap();
        assert_eq!(instant, Instant::from_secs_and_nanos(1576540098, 520_000_000));
        assert_eq!(rfc3339::format(&instant).unwrap(), "2019-12-16T23:48:18.52Z");
    }

    #[test]
    fn rfc3339_rejects_garbage() {
        assert!(matches!(
            rfc3339::parse("yesterday"),
            Err(InstantParseError::Invalid(_))
        ));
    }

    #[test]
    fn epoch_seconds_parse() {
        assert_eq!(
            epoch_seconds::parse("1576540098"),
            Ok(Instant::from_epoch_seconds(1576540098))
        );
        assert_eq!(
            epoch_seconds::parse("1576540098.52"),
            Ok(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            epoch_seconds::parse("-1.5"),
            Ok(Instant::from_secs_and_nanos(-2, 500_000_000))
        );
    }

    #[test]
    fn epoch_seconds_rejects_malformed() {
        for bad in &["", "-", "1.", ".5", "1.2.3", "abc", "1e9", "1.0000000001"] {
            assert!(epoch_seconds::parse(bad).is_err(), "{}", bad);
        }
    }

    #[test]
    fn epoch_seconds_negative_format() {
        let instant = Instant::from_secs_and_nanos(-2, 500_000_000);
        assert_eq!(epoch_seconds::format(&instant), "-1.5");
        let instant = Instant::from_secs_and_nanos(-1, 250_000_000);
        assert_eq!(epoch_seconds::format(&instant), "-0.75");
    }

    proptest! {
        #[test]
        fn epoch_seconds_roundtrip(seconds in -10_000_000_000_i64..10_000_000_000_i64, nanos in 0..1_000_000_000_u32) {
            let instant = Instant::from_secs_and_nanos(seconds, nanos);
            let formatted = epoch_seconds::format(&instant);
            prop_assert_eq!(epoch_seconds::parse(&formatted), Ok(instant));
        }

        #[test]
        fn http_date_roundtrip(seconds in 0_i64..253_402_300_799_i64) {
            let instant = Instant::from_epoch_seconds(seconds);
            let formatted = http_date::format(&instant).unwrap();
            prop_assert_eq!(http_date::parse(&formatted), Ok(instant));
        }
    }
}
