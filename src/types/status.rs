//! The lifecycle tag of a [`Progress`](super::Progress) value.
//!
//! The tag strings are part of the wire contract: `"none"`, `"pending"`,
//! `"resolved"` and `"rejected"`.

use crate::error::DecodeError;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Which of the four lifecycle states a progress value is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// The operation has not started.
    None,
    /// The operation is in flight.
    Pending,
    /// The operation completed with a value.
    Resolved,
    /// The operation completed with a failure.
    Rejected,
}

impl Status {
    /// All tags in declaration order.
    pub const ALL: [Self; 4] = [Self::None, Self::Pending, Self::Resolved, Self::Rejected];

    /// Returns the wire tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Pending => "pending",
            Self::Resolved => "resolved",
            Self::Rejected => "rejected",
        }
    }

    /// Returns true for `Resolved` and `Rejected`.
    #[must_use]
    pub const fn is_fulfilled(self) -> bool {
        matches!(self, Self::Resolved | Self::Rejected)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "pending" => Ok(Self::Pending),
            "resolved" => Ok(Self::Resolved),
            "rejected" => Ok(Self::Rejected),
            other => Err(DecodeError::UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_strings_round_trip() {
        for status in Status::ALL {
            assert_eq!(status.as_str().parse::<Status>().unwrap(), status);
            assert_eq!(status.to_string(), status.as_str());
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "success".parse::<Status>().unwrap_err();
        assert!(matches!(err, DecodeError::UnknownVariant(ref s) if s == "success"));
        assert!(err.to_string().contains("success"));
    }

    #[test]
    fn fulfilled_means_settled() {
        assert!(!Status::None.is_fulfilled());
        assert!(!Status::Pending.is_fulfilled());
        assert!(Status::Resolved.is_fulfilled());
        assert!(Status::Rejected.is_fulfilled());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let json = serde_json::to_string(&Status::Pending).expect("serialize");
        assert_eq!(json, "\"pending\"");
        let back: Status = serde_json::from_str("\"rejected\"").expect("deserialize");
        assert_eq!(back, Status::Rejected);
    }
}
