//! Identifier types for network nodes and contacts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {kind} identifier: {reason}")]
pub struct InvalidId {
    kind: &'static str,
    reason: &'static str,
}

fn parse_u64(s: &str, kind: &'static str) -> Result<u64, InvalidId> {
    if s.is_empty() {
        return Err(InvalidId {
            kind,
            reason: "must not be empty",
        });
    }
    s.parse().map_err(|_| InvalidId {
        kind,
        reason: "must be a non-negative integer",
    })
}

/// A network node in the delay-tolerant network.
///
/// Node identifiers are opaque non-negative integers; they only need to be
/// compared for equality.
///
/// # Examples
///
/// ```
/// use cgr_server::domain::NodeId;
///
/// let node = NodeId::parse("12").unwrap();
/// assert_eq!(node, NodeId(12));
/// assert!(NodeId::parse("-1").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    /// Parse a node identifier from its decimal form.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_u64(s, "node").map(NodeId)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a contact, stable for one planning epoch.
///
/// Contact ids need not be contiguous or start at any particular value; the
/// plan maps them to storage positions explicitly.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(pub u64);

impl ContactId {
    /// Parse a contact identifier from its decimal form.
    pub fn parse(s: &str) -> Result<Self, InvalidId> {
        parse_u64(s, "contact").map(ContactId)
    }
}

impl fmt::Debug for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContactId({})", self.0)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_ids() {
        assert_eq!(NodeId::parse("0").unwrap(), NodeId(0));
        assert_eq!(NodeId::parse("42").unwrap(), NodeId(42));
        assert_eq!(ContactId::parse("7").unwrap(), ContactId(7));
    }

    #[test]
    fn reject_invalid_ids() {
        assert!(NodeId::parse("").is_err());
        assert!(NodeId::parse("-3").is_err());
        assert!(NodeId::parse("1.5").is_err());
        assert!(ContactId::parse("abc").is_err());
    }

    #[test]
    fn error_names_the_kind() {
        let err = ContactId::parse("x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid contact identifier: must be a non-negative integer"
        );
        let err = NodeId::parse("").unwrap_err();
        assert_eq!(err.to_string(), "invalid node identifier: must not be empty");
    }

    #[test]
    fn display_and_debug() {
        assert_eq!(NodeId(3).to_string(), "3");
        assert_eq!(format!("{:?}", NodeId(3)), "NodeId(3)");
        assert_eq!(ContactId(9).to_string(), "9");
        assert_eq!(format!("{:?}", ContactId(9)), "ContactId(9)");
    }

    #[test]
    fn serde_is_transparent() {
        assert_eq!(serde_json::to_string(&NodeId(5)).unwrap(), "5");
        let id: ContactId = serde_json::from_str("11").unwrap();
        assert_eq!(id, ContactId(11));
    }
}
