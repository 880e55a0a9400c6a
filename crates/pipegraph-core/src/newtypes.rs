/// Validated newtype for pipeline node identifiers.
///
/// A node identifier is an opaque token: the analyzer never interprets its
/// contents beyond equality. The editor submits string ids, but some payloads
/// number their nodes, so the boundary also accepts an integer token and
/// normalizes it to its decimal string form. The only shape constraint is
/// non-emptiness. The serde `Deserialize` impl re-runs validation so an
/// invalid id cannot enter the type system from untrusted JSON.
use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors produced when constructing a validated newtype from invalid input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NewtypeError {
    /// The input did not satisfy the type's shape constraint.
    InvalidFormat {
        /// Name of the type that rejected the input.
        type_name: &'static str,
        /// A human-readable description of the expected format.
        expected: &'static str,
        /// The input that was rejected.
        got: String,
    },
}

impl fmt::Display for NewtypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFormat {
                type_name,
                expected,
                got,
            } => write!(f, "invalid {type_name}: expected {expected}, got {got:?}"),
        }
    }
}

impl std::error::Error for NewtypeError {}

// ---------------------------------------------------------------------------
// NodeId
// ---------------------------------------------------------------------------

/// Opaque node identifier, unique within one submitted pipeline.
///
/// Stored as a string regardless of the JSON representation it was parsed
/// from; integer tokens are normalized to their decimal form, so `5` and
/// `"5"` name the same node.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(String);

impl TryFrom<&str> for NodeId {
    type Error = NewtypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        if s.is_empty() {
            Err(NewtypeError::InvalidFormat {
                type_name: "NodeId",
                expected: "a non-empty identifier token",
                got: s.to_owned(),
            })
        } else {
            Ok(Self(s.to_owned()))
        }
    }
}

impl From<u64> for NodeId {
    fn from(n: u64) -> Self {
        Self(n.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        Self(n.to_string())
    }
}

impl Deref for NodeId {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(NodeIdVisitor)
    }
}

struct NodeIdVisitor;

impl de::Visitor<'_> for NodeIdVisitor {
    type Value = NodeId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-empty string or an integer identifier token")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        NodeId::try_from(v).map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(NodeId::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(NodeId::from(v))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn non_empty_string_is_accepted() {
        let id = NodeId::try_from("customInput-1").expect("valid id");
        assert_eq!(&*id, "customInput-1");
    }

    #[test]
    fn empty_string_is_rejected() {
        let err = NodeId::try_from("").expect_err("empty id must be rejected");
        assert!(err.to_string().contains("NodeId"), "message: {err}");
    }

    #[test]
    fn deserialize_from_json_string() {
        let id: NodeId = serde_json::from_str(r#""llm-3""#).expect("deserialize");
        assert_eq!(&*id, "llm-3");
    }

    #[test]
    fn deserialize_from_json_integer_normalizes() {
        let id: NodeId = serde_json::from_str("42").expect("deserialize");
        assert_eq!(&*id, "42");
        assert_eq!(id, NodeId::try_from("42").expect("valid id"));
    }

    #[test]
    fn deserialize_from_negative_integer() {
        let id: NodeId = serde_json::from_str("-7").expect("deserialize");
        assert_eq!(&*id, "-7");
    }

    #[test]
    fn deserialize_empty_string_fails() {
        let result: Result<NodeId, _> = serde_json::from_str(r#""""#);
        assert!(result.is_err(), "empty id must not deserialize");
    }

    #[test]
    fn deserialize_rejects_other_json_types() {
        for bad in ["null", "true", "[]", "{}", "1.5"] {
            let result: Result<NodeId, _> = serde_json::from_str(bad);
            assert!(result.is_err(), "{bad} should not deserialize as NodeId");
        }
    }

    #[test]
    fn serializes_as_string() {
        let id = NodeId::from(7_u64);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""7""#);
    }

    #[test]
    fn display_matches_inner() {
        let id = NodeId::try_from("node-a").expect("valid id");
        assert_eq!(format!("{id}"), "node-a");
    }
}
