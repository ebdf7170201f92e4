//! Structured document-head model shared across the hook boundary.
//!
//! # Module Structure
//!
//! - `attrs` - Insertion-ordered attribute mapping
//! - `tag` - Head tag descriptors
//! - `chunk` - Build-output chunk metadata
//!
//! The host pipeline parses and renders markup; these types only carry the
//! already-structured representation back and forth.

mod attrs;
mod chunk;
mod tag;

pub use attrs::Attrs;
pub use chunk::Chunk;
pub use tag::Tag;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Payload of the alter-asset-tags hook: the generated document head plus
/// the chunks the build produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlterAssetTags {
    /// Ordered head tag sequence. Order is meaningful and preserved
    /// except for explicit insertions.
    pub head: Vec<Tag>,
    /// Build-output chunks, in the order the build emitted them.
    pub chunks: Vec<Chunk>,
}

impl AlterAssetTags {
    /// Parse a payload from its JSON wire form.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to the JSON wire form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_round_trip() {
        let json = r#"{
            "head": [
                {"tagName": "meta", "attributes": {"charset": "utf-8"}},
                {"tagName": "link", "attributes": {"rel": "stylesheet", "href": "a.css"}}
            ],
            "chunks": [{"id": "main", "files": ["a.css", "a.js"]}]
        }"#;

        let data = AlterAssetTags::from_json(json).unwrap();
        assert_eq!(data.head.len(), 2);
        assert_eq!(data.head[1].attrs.get("href"), Some("a.css"));
        assert_eq!(data.chunks[0].id, "main");

        let back = data.to_json().unwrap();
        let again = AlterAssetTags::from_json(&back).unwrap();
        assert_eq!(data, again);
    }

    #[test]
    fn test_payload_defaults() {
        let data = AlterAssetTags::from_json("{}").unwrap();
        assert!(data.head.is_empty());
        assert!(data.chunks.is_empty());
    }
}
