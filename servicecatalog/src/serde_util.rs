/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

use serde::Serialize;

/// Renders a shape as its compact wire JSON.
pub(crate) fn fmt_json<T: Serialize>(value: &T, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let json = serde_json::to_string(value).map_err(|_| std::fmt::Error)?;
    f.write_str(&json)
}

/// `awsJson1.1` timestamps: epoch seconds as a JSON number, fractional when
/// the instant has sub-second precision.
///
/// Fractional values travel as an `f64`, so sub-second precision is limited to
/// what a double holds at that magnitude. For present-day instants that is
/// roughly a few hundred nanoseconds: `1576540098.123456789` is written as
/// `1576540098.1234567`. Whole seconds and values such as `1576540098.52` round-trip exactly.
pub(crate) mod epoch_seconds {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use smithy_types::instant::Format;
    use smithy_types::Instant;
    use std::convert::TryFrom;
    use std::fmt;

    pub(crate) fn serialize<S>(value: &Option<Instant>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) if instant.has_nanos() => {
                serializer.serialize_f64(instant.epoch_fractional_seconds())
            }
            Some(instant) => serializer.serialize_i64(instant.epoch_seconds()),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D>(deserializer: D) -> Result<Option<Instant>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(OptionalInstantVisitor)
    }

    struct OptionalInstantVisitor;

    impl<'de> Visitor<'de> for OptionalInstantVisitor {
        type Value = Option<Instant>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("epoch seconds or null")
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(InstantVisitor).map(Some)
        }
    }

    struct InstantVisitor;

    impl<'de> Visitor<'de> for InstantVisitor {
        type Value = Instant;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("epoch seconds")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Instant::from_epoch_seconds(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v)
                .map(Instant::from_epoch_seconds)
                .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            if !v.is_finite() {
                return Err(E::invalid_value(de::Unexpected::Float(v), &self));
            }
            // The shortest decimal form keeps `1576540098.52` exact, where f64 math would not.
            Ok(Instant::from_str(&v.to_string(), Format::EpochSeconds)
                .unwrap_or_else(|_| Instant::from_f64(v)))
        }
    }
}

#[cfg(test)]
mod test {
    use serde::{Deserialize, Serialize};
    use smithy_types::Instant;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Stamped {
        #[serde(rename = "CreatedTime")]
        #[serde(with = "super::epoch_seconds")]
        #[serde(default)]
        #[serde(skip_serializing_if = "std::option::Option::is_none")]
        created_time: Option<Instant>,
    }

    #[test]
    fn whole_seconds_serialize_as_integers() {
        let stamped = Stamped {
            created_time: Some(Instant::from_epoch_seconds(1576540098)),
        };
        assert_eq!(
            serde_json::to_string(&stamped).unwrap(),
            r#"{"CreatedTime":1576540098}"#
        );
    }

    #[test]
    fn fractional_seconds_roundtrip_exactly() {
        let parsed: Stamped = serde_json::from_str(r#"{"CreatedTime":1576540098.52}"#).unwrap();
        assert_eq!(
            parsed.created_time,
            Some(Instant::from_secs_and_nanos(1576540098, 520_000_000))
        );
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            r#"{"CreatedTime":1576540098.52}"#
        );
    }

    #[test]
    fn nanosecond_precision_is_bounded_by_f64() {
        let stamped = Stamped {
            created_time: Some(Instant::from_secs_and_nanos(1576540098, 123_456_789)),
        };
        let json = serde_json::to_string(&stamped).unwrap();
        let parsed: Stamped = serde_json::from_str(&json).unwrap();
        let parsed = parsed.created_time.unwrap();
        assert_eq!(parsed.epoch_seconds(), 1576540098);
        let drift = (i64::from(parsed.subsec_nanos()) - 123_456_789).abs();
        assert!(drift < 1_000, "drifted {}ns through {}", drift, json);
    }

    #[test]
    fn null_and_missing_are_absent() {
        let parsed: Stamped = serde_json::from_str(r#"{"CreatedTime":null}"#).unwrap();
        assert_eq!(parsed.created_time, None);
        let parsed: Stamped = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.created_time, None);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "{}");
    }

    #[test]
    fn strings_are_rejected() {
        assert!(serde_json::from_str::<Stamped>(r#"{"CreatedTime":"2019-12-16T23:48:18Z"}"#).is_err());
    }
}
