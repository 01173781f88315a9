//! Custom (de)serialization for compact configuration records

use std::fmt;

use serde::de::{SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A configured edge between two named endpoints, serialized as a
/// `[from, to]` or `[from, to, distance]` JSON array
///
/// Campus paths and intra-floor connections both use this shape. An omitted
/// distance means "derive it at graph build time" (haversine for outdoor
/// paths, the default hallway length for interior connections).
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    pub distance: Option<f64>,
}

impl EdgeSpec {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance: Option<f64>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            distance,
        }
    }

    /// Whether this edge joins the given pair of endpoints, in either order
    pub fn joins(&self, a: &str, b: &str) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Whether either endpoint is the given node
    pub fn touches(&self, node: &str) -> bool {
        self.from == node || self.to == node
    }
}

impl Serialize for EdgeSpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = if self.distance.is_some() { 3 } else { 2 };
        let mut seq = serializer.serialize_seq(Some(len))?;
        seq.serialize_element(&self.from)?;
        seq.serialize_element(&self.to)?;
        if let Some(distance) = self.distance {
            seq.serialize_element(&distance)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for EdgeSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(EdgeSpecVisitor)
    }
}

struct EdgeSpecVisitor;

impl<'de> Visitor<'de> for EdgeSpecVisitor {
    type Value = EdgeSpec;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array [from, to] or [from, to, distance]")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let from: String = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let to: String = seq
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        let distance: Option<f64> = seq.next_element()?;

        // Reject trailing garbage beyond the optional distance
        if seq.next_element::<serde_json::Value>()?.is_some() {
            return Err(serde::de::Error::invalid_length(4, &self));
        }

        Ok(EdgeSpec { from, to, distance })
    }
}
