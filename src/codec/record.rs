//! Wire record for progress values.
//!
//! A progress serializes to a flat record tagged by `status`:
//!
//! ```text
//! { "status": "none" }
//! { "status": "pending" }
//! { "status": "resolved", "value": <T> }
//! { "status": "rejected", "error": <E> }
//! ```
//!
//! `value` appears only on resolved records and `error` only on rejected
//! ones. Decoding is the exact inverse and rebuilds values through the
//! regular constructors. An unknown `status` is a contract violation and
//! always fails.

use crate::error::DecodeError;
use crate::tracing_compat::debug;
use crate::types::{Progress, Status};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Owned wire form of a [`Progress`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Record<T, E> {
    /// `{ "status": "none" }`
    None,
    /// `{ "status": "pending" }`
    Pending,
    /// `{ "status": "resolved", "value": ... }`
    Resolved {
        /// The resolved value.
        value: T,
    },
    /// `{ "status": "rejected", "error": ... }`
    Rejected {
        /// The rejection error.
        error: E,
    },
}

impl<T, E> Record<T, E> {
    /// Returns the record's tag.
    #[must_use]
    pub const fn status(&self) -> Status {
        match self {
            Self::None => Status::None,
            Self::Pending => Status::Pending,
            Self::Resolved { .. } => Status::Resolved,
            Self::Rejected { .. } => Status::Rejected,
        }
    }
}

/// Borrowed wire form used when serializing without cloning payloads.
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum RecordRef<'a, T, E> {
    None,
    Pending,
    Resolved { value: &'a T },
    Rejected { error: &'a E },
}

impl<'a, T, E> From<&'a Progress<T, E>> for RecordRef<'a, T, E> {
    fn from(progress: &'a Progress<T, E>) -> Self {
        match progress {
            Progress::None => Self::None,
            Progress::Pending => Self::Pending,
            Progress::Resolved(v) => Self::Resolved { value: v },
            Progress::Rejected(e) => Self::Rejected { error: e },
        }
    }
}

impl<T, E> From<Record<T, E>> for Progress<T, E> {
    fn from(record: Record<T, E>) -> Self {
        match record {
            Record::None => Self::none(),
            Record::Pending => Self::pending(),
            Record::Resolved { value } => Self::resolve(value),
            Record::Rejected { error } => Self::reject(error),
        }
    }
}

impl<T: Serialize, E: Serialize> Serialize for Progress<T, E> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        RecordRef::from(self).serialize(serializer)
    }
}

impl<'de, T, E> Deserialize<'de> for Progress<T, E>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Record::deserialize(deserializer).map(Self::from)
    }
}

impl<T, E> Progress<T, E> {
    /// Rebuilds a progress from its wire record, or returns a live progress
    /// unchanged.
    ///
    /// ```
    /// use progress_state::{Progress, Record};
    ///
    /// let p: Progress<u8, ()> = Progress::restore(Record::Resolved { value: 3 });
    /// assert_eq!(p, Progress::resolve(3));
    ///
    /// let live: Progress<u8, ()> = Progress::pending();
    /// assert!(Progress::restore(live).is_pending());
    /// ```
    #[must_use]
    pub fn restore<S: Into<Self>>(serialized: S) -> Self {
        serialized.into()
    }

    /// Returns an owned wire record for this progress.
    #[must_use]
    pub fn to_record(&self) -> Record<T, E>
    where
        T: Clone,
        E: Clone,
    {
        match self {
            Self::None => Record::None,
            Self::Pending => Record::Pending,
            Self::Resolved(v) => Record::Resolved {
                value: T::clone(v),
            },
            Self::Rejected(e) => Record::Rejected {
                error: E::clone(e),
            },
        }
    }
}

/// Decodes a progress from a JSON value.
///
/// Fails with [`DecodeError::MissingStatus`] when there is no string
/// `status` field, [`DecodeError::UnknownVariant`] for an unrecognized tag,
/// and [`DecodeError::Malformed`] when the payload does not fit `T`/`E`.
pub fn from_json_value<T, E>(value: Value) -> Result<Progress<T, E>, DecodeError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let tag = value
        .get("status")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingStatus)?;
    let status = match tag.parse::<Status>() {
        Ok(status) => status,
        Err(err) => {
            debug!(error = %err, "rejecting progress record");
            return Err(err);
        }
    };

    serde_json::from_value::<Record<T, E>>(value).map(Progress::from).map_err(|source| {
        debug!(status = %status, error = %source, "malformed progress record");
        DecodeError::Malformed { status, source }
    })
}

/// Decodes a progress from JSON text.
pub fn from_json_str<T, E>(s: &str) -> Result<Progress<T, E>, DecodeError>
where
    T: DeserializeOwned,
    E: DeserializeOwned,
{
    let value: Value = serde_json::from_str(s)?;
    from_json_value(value)
}

/// Encodes a progress as a JSON value.
pub fn to_json_value<T, E>(progress: &Progress<T, E>) -> Result<Value, serde_json::Error>
where
    T: Serialize,
    E: Serialize,
{
    serde_json::to_value(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolved_wire_shape() {
        let p: Progress<Value, ()> = Progress::resolve(json!({ "x": 1 }));
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, r#"{"status":"resolved","value":{"x":1}}"#);
    }

    #[test]
    fn rejected_wire_shape() {
        let p: Progress<(), String> = Progress::reject("abc".into());
        let json = serde_json::to_string(&p).expect("serialize");
        assert_eq!(json, r#"{"status":"rejected","error":"abc"}"#);
    }

    #[test]
    fn unit_states_have_no_payload_keys() {
        let pending = serde_json::to_value(Progress::<i32, i32>::pending()).expect("serialize");
        assert_eq!(pending, json!({ "status": "pending" }));
        let none = serde_json::to_value(Progress::<i32, i32>::none()).expect("serialize");
        assert_eq!(none, json!({ "status": "none" }));
    }

    #[test]
    fn decodes_every_variant() {
        let cases: [(Value, Progress<Value, String>); 4] = [
            (json!({ "status": "none" }), Progress::none()),
            (json!({ "status": "pending" }), Progress::pending()),
            (
                json!({ "status": "resolved", "value": { "x": 1 } }),
                Progress::resolve(json!({ "x": 1 })),
            ),
            (
                json!({ "status": "rejected", "error": "abc" }),
                Progress::reject("abc".into()),
            ),
        ];
        for (wire, expected) in cases {
            let decoded: Progress<Value, String> = from_json_value(wire).expect("decode");
            assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn unknown_status_is_fatal() {
        let err = from_json_value::<i32, i32>(json!({ "status": "inProgress" })).unwrap_err();
        assert!(matches!(err, DecodeError::UnknownVariant(ref s) if s == "inProgress"));

        let err = serde_json::from_value::<Progress<i32, i32>>(json!({ "status": "success" }))
            .unwrap_err();
        assert!(err.to_string().contains("unknown variant"));
    }

    #[test]
    fn missing_status_is_reported() {
        let err = from_json_value::<i32, i32>(json!({ "type": "none" })).unwrap_err();
        assert!(matches!(err, DecodeError::MissingStatus));
        let err = from_json_value::<i32, i32>(json!({ "status": 3 })).unwrap_err();
        assert!(matches!(err, DecodeError::MissingStatus));
    }

    #[test]
    fn malformed_payload_is_reported() {
        let err =
            from_json_value::<i32, i32>(json!({ "status": "resolved", "value": "nope" })).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Malformed {
                status: Status::Resolved,
                ..
            }
        ));
    }

    #[test]
    fn from_str_reports_bad_json() {
        let err = from_json_str::<i32, i32>("{").unwrap_err();
        assert!(matches!(err, DecodeError::Json(_)));
        let p: Progress<i32, i32> = from_json_str(r#"{"status":"resolved","value":4}"#).expect("decode");
        assert_eq!(p, Progress::resolve(4));
    }

    #[test]
    fn record_round_trip() {
        let p: Progress<i32, String> = Progress::reject("x".into());
        let record = p.to_record();
        assert_eq!(record.status(), Status::Rejected);
        assert_eq!(Progress::restore(record), p);
    }

    #[test]
    fn restore_keeps_live_progress() {
        let p: Progress<i32, String> = Progress::resolve(1);
        assert!(Progress::ptr_eq(&Progress::restore(p.clone()), &p));
    }

    #[test]
    fn to_json_value_matches_serde() {
        let p: Progress<i32, ()> = Progress::resolve(5);
        assert_eq!(
            to_json_value(&p).expect("encode"),
            json!({ "status": "resolved", "value": 5 })
        );
    }
}
