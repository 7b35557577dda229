//! The action record delivered to a sink.

use crate::types::Progress;
use core::fmt;
use serde::ser::{Error as _, SerializeMap};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

const TYPE_KEY: &str = "type";
const PROGRESS_KEY: &str = "progress";

/// Default extras: an opaque JSON object merged into every action.
pub type Extras = Map<String, Value>;

/// One transition reported by the dispatch bridge.
///
/// On the wire this is `{ ...extras, "type": <label>, "progress": <record> }`.
/// Extras are merged shallowly and must serialize to a map (or to nothing).
/// Keys named `type` or `progress` in them are dropped, so the record always
/// carries exactly one of each, written by the bridge.
///
/// ```
/// use progress_state::{Action, Progress};
/// use serde_json::json;
///
/// let mut action = Action::<u32, String>::new("users/load", Progress::resolve(7));
/// action.extras.insert("page".into(), json!(2));
/// assert_eq!(
///     serde_json::to_value(&action).unwrap(),
///     json!({ "page": 2, "type": "users/load", "progress": { "status": "resolved", "value": 7 } })
/// );
/// ```
#[derive(Deserialize)]
pub struct Action<T, E, X = Extras> {
    /// Caller-supplied fields, passed through untouched.
    #[serde(flatten)]
    pub extras: X,
    /// The action type: the bridge label, possibly prefixed.
    #[serde(rename = "type")]
    pub kind: String,
    /// The progress value for this transition.
    pub progress: Progress<T, E>,
}

impl<T, E> Action<T, E> {
    /// Creates an action with empty extras.
    #[must_use]
    pub fn new(kind: impl Into<String>, progress: Progress<T, E>) -> Self {
        Self::with_extras(kind, progress, Extras::new())
    }
}

impl<T, E, X> Action<T, E, X> {
    /// Creates an action carrying `extras`.
    #[must_use]
    pub fn with_extras(kind: impl Into<String>, progress: Progress<T, E>, extras: X) -> Self {
        Self {
            extras,
            kind: kind.into(),
            progress,
        }
    }
}

impl<T, E, X> Serialize for Action<T, E, X>
where
    T: Serialize,
    E: Serialize,
    X: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extras = match serde_json::to_value(&self.extras).map_err(S::Error::custom)? {
            Value::Object(fields) => fields,
            Value::Null => Map::new(),
            other => {
                return Err(S::Error::custom(format!(
                    "action extras must serialize to a map, got {other}"
                )));
            }
        };

        let mut map = serializer.serialize_map(None)?;
        for (key, value) in extras
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), TYPE_KEY | PROGRESS_KEY))
        {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(TYPE_KEY, &self.kind)?;
        map.serialize_entry(PROGRESS_KEY, &self.progress)?;
        map.end()
    }
}

impl<T, E, X: Clone> Clone for Action<T, E, X> {
    fn clone(&self) -> Self {
        Self {
            extras: self.extras.clone(),
            kind: self.kind.clone(),
            progress: self.progress.clone(),
        }
    }
}

impl<T, E, X> PartialEq for Action<T, E, X>
where
    T: PartialEq,
    E: PartialEq,
    X: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.progress == other.progress && self.extras == other.extras
    }
}

impl<T, E, X> fmt::Debug for Action<T, E, X>
where
    T: fmt::Debug,
    E: fmt::Debug,
    X: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("type", &self.kind)
            .field("progress", &self.progress)
            .field("extras", &self.extras)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pending_action_shape() {
        let action = Action::<u8, u8>::new("load", Progress::pending());
        assert_eq!(
            serde_json::to_value(&action).unwrap(),
            json!({ "type": "load", "progress": { "status": "pending" } })
        );
    }

    #[test]
    fn extras_cannot_override_bridge_fields() {
        let mut extras = Extras::new();
        extras.insert("type".into(), json!("spoofed"));
        extras.insert("progress".into(), json!({ "status": "resolved", "value": 9 }));
        extras.insert("id".into(), json!(1));
        let action = Action::<u8, u8>::with_extras("load", Progress::pending(), extras);

        let text = serde_json::to_string(&action).unwrap();
        assert_eq!(text.matches("\"type\"").count(), 1, "{text}");
        assert_eq!(text.matches("\"progress\"").count(), 1, "{text}");

        let back: Action<u8, u8> = serde_json::from_str(&text).unwrap();
        assert_eq!(back.kind, "load");
        assert!(back.progress.is_pending());
        assert_eq!(back.extras, Map::from_iter([("id".to_string(), json!(1))]));
    }

    #[test]
    fn unit_extras_add_no_keys() {
        let action = Action::<u8, u8, ()>::with_extras("tick", Progress::none(), ());
        assert_eq!(
            serde_json::to_string(&action).unwrap(),
            r#"{"type":"tick","progress":{"status":"none"}}"#
        );
    }

    #[test]
    fn non_map_extras_are_rejected() {
        let action = Action::<u8, u8, u32>::with_extras("bad", Progress::none(), 7);
        let err = serde_json::to_string(&action).unwrap_err();
        assert!(err.to_string().contains("must serialize to a map"));
    }

    #[test]
    fn decodes_with_remaining_keys_as_extras() {
        let wire = json!({
            "type": "save",
            "requestId": "abc",
            "progress": { "status": "rejected", "error": "disk full" }
        });
        let action: Action<u8, String> = serde_json::from_value(wire).unwrap();
        assert_eq!(action.kind, "save");
        assert_eq!(action.progress, Progress::reject("disk full".into()));
        assert_eq!(action.extras.get("requestId"), Some(&json!("abc")));
        assert_eq!(action.extras.len(), 1);
    }

    #[test]
    fn typed_extras() {
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        struct Meta {
            page: u32,
        }

        let action = Action::<u8, u8, Meta>::with_extras("list", Progress::resolve(1), Meta { page: 3 });
        let wire = serde_json::to_value(&action).unwrap();
        assert_eq!(wire["page"], json!(3));
        let back: Action<u8, u8, Meta> = serde_json::from_value(wire).unwrap();
        assert_eq!(back, action);
    }
}
