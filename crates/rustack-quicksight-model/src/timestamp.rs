//! Epoch-seconds timestamp encoding.
//!
//! QuickSight's JSON protocol sends timestamps as fractional epoch seconds
//! (`1574812800.123`). Use with `#[serde(default, with = "crate::timestamp::epoch_seconds")]`
//! on `Option<DateTime<Utc>>` fields.
//!
//! Values are encoded at microsecond precision. Nanoseconds below that are
//! dropped on serialization.

pub(crate) mod epoch_seconds {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ref_option, clippy::cast_precision_loss)]
    pub(crate) fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(ts) => {
                if ts.timestamp_subsec_micros() == 0 {
                    serializer.serialize_i64(ts.timestamp())
                } else {
                    serializer.serialize_f64(ts.timestamp_micros() as f64 / 1_000_000.0)
                }
            }
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<f64>::deserialize(deserializer)?
            .map(from_secs::<D::Error>)
            .transpose()
    }

    pub(super) fn from_secs<E: serde::de::Error>(secs: f64) -> Result<DateTime<Utc>, E> {
        if !secs.is_finite() {
            return Err(E::custom(format!("timestamp is not a finite number: {secs}")));
        }
        #[allow(clippy::cast_possible_truncation)]
        let micros = (secs * 1_000_000.0).round() as i64;
        DateTime::from_timestamp_micros(micros)
            .ok_or_else(|| E::custom(format!("timestamp out of range: {secs}")))
    }

    /// Borrowed timestamp that serializes as epoch seconds.
    pub(super) struct Seconds<'a>(pub(super) &'a DateTime<Utc>);

    impl serde::Serialize for Seconds<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serialize(&Some(*self.0), serializer)
        }
    }
}

/// Same encoding as [`epoch_seconds`], for `Option<Vec<DateTime<Utc>>>` fields.
pub(crate) mod epoch_seconds_list {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    use super::epoch_seconds::{Seconds, from_secs};

    #[allow(clippy::ref_option)]
    pub(crate) fn serialize<S: Serializer>(
        value: &Option<Vec<DateTime<Utc>>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(values) => serializer.collect_seq(values.iter().map(Seconds)),
            None => serializer.serialize_none(),
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<DateTime<Utc>>>, D::Error> {
        Option::<Vec<f64>>::deserialize(deserializer)?
            .map(|values| {
                values
                    .into_iter()
                    .map(from_secs::<D::Error>)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct Stamped {
        #[serde(
            default,
            with = "super::epoch_seconds",
            skip_serializing_if = "Option::is_none"
        )]
        created_time: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_should_serialize_whole_seconds_as_integer() {
        let stamped = Stamped {
            created_time: Some(Utc.timestamp_opt(1_574_812_800, 0).unwrap()),
        };
        let json = serde_json::to_string(&stamped).expect("serialize timestamp");
        assert_eq!(json, r#"{"CreatedTime":1574812800}"#);
    }

    #[test]
    fn test_should_serialize_fractional_seconds() {
        let stamped = Stamped {
            created_time: Some(Utc.timestamp_millis_opt(1_574_812_800_250).unwrap()),
        };
        let json = serde_json::to_string(&stamped).expect("serialize timestamp");
        assert_eq!(json, r#"{"CreatedTime":1574812800.25}"#);
    }

    #[test]
    fn test_should_deserialize_fractional_and_integer_seconds() {
        let parsed: Stamped =
            serde_json::from_str(r#"{"CreatedTime":1574812800.25}"#).expect("deserialize");
        assert_eq!(
            parsed.created_time,
            Some(Utc.timestamp_millis_opt(1_574_812_800_250).unwrap())
        );

        let parsed: Stamped =
            serde_json::from_str(r#"{"CreatedTime":1574812800}"#).expect("deserialize");
        assert_eq!(
            parsed.created_time,
            Some(Utc.timestamp_opt(1_574_812_800, 0).unwrap())
        );
    }

    #[test]
    fn test_should_roundtrip_sub_millisecond_timestamp() {
        let stamped = Stamped {
            created_time: Some(Utc.timestamp_opt(1_574_812_800, 500_000).unwrap()),
        };
        let json = serde_json::to_string(&stamped).expect("serialize timestamp");
        assert_eq!(json, r#"{"CreatedTime":1574812800.0005}"#);
        let parsed: Stamped = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, stamped);
    }

    #[test]
    fn test_should_drop_sub_microsecond_nanos() {
        let stamped = Stamped {
            created_time: Some(Utc.timestamp_opt(1_574_812_800, 123_456_789).unwrap()),
        };
        let json = serde_json::to_string(&stamped).expect("serialize timestamp");
        let parsed: Stamped = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(
            parsed.created_time,
            Some(Utc.timestamp_opt(1_574_812_800, 123_456_000).unwrap())
        );
    }

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "PascalCase")]
    struct StampedList {
        #[serde(
            default,
            with = "super::epoch_seconds_list",
            skip_serializing_if = "Option::is_none"
        )]
        values: Option<Vec<DateTime<Utc>>>,
    }

    #[test]
    fn test_should_roundtrip_timestamp_list() {
        let list = StampedList {
            values: Some(vec![
                Utc.timestamp_opt(1_574_812_800, 0).unwrap(),
                Utc.timestamp_millis_opt(1_574_812_800_500).unwrap(),
                Utc.timestamp_opt(1_574_812_801, 250_000).unwrap(),
            ]),
        };
        let json = serde_json::to_string(&list).expect("serialize list");
        assert_eq!(json, r#"{"Values":[1574812800,1574812800.5,1574812801.00025]}"#);
        let parsed: StampedList = serde_json::from_str(&json).expect("deserialize list");
        assert_eq!(parsed, list);
    }

    #[test]
    fn test_should_keep_empty_timestamp_list_distinct_from_absent() {
        let parsed: StampedList = serde_json::from_str(r#"{"Values":[]}"#).expect("deserialize");
        assert_eq!(parsed.values, Some(Vec::new()));
        let parsed: StampedList = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(parsed.values, None);
    }

    #[test]
    fn test_should_treat_missing_and_null_as_absent() {
        let parsed: Stamped = serde_json::from_str("{}").expect("deserialize");
        assert!(parsed.created_time.is_none());
        let parsed: Stamped =
            serde_json::from_str(r#"{"CreatedTime":null}"#).expect("deserialize");
        assert!(parsed.created_time.is_none());
    }
}
