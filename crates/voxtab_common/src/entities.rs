//! Entity-extraction service payloads
//!
//! Request: `{document: {type, content}, encodingType}`.
//! Response: `{entities: [{name, type}]}`.

use serde::{Deserialize, Serialize};

/// Categories used to template a page summary, in the fixed order the
/// summary concatenates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityCategory {
    Person,
    Organization,
    Location,
    Event,
    WorkOfArt,
    ConsumerGood,
    Other,
}

impl EntityCategory {
    /// All categories in summary order.
    pub const ORDERED: [EntityCategory; 7] = [
        EntityCategory::Person,
        EntityCategory::Organization,
        EntityCategory::Location,
        EntityCategory::Event,
        EntityCategory::WorkOfArt,
        EntityCategory::ConsumerGood,
        EntityCategory::Other,
    ];

    /// Map a wire-level entity type to a category. Unknown types land in
    /// `Other`.
    pub fn from_wire(wire_type: &str) -> Self {
        match wire_type {
            "PERSON" => EntityCategory::Person,
            "ORGANIZATION" => EntityCategory::Organization,
            "LOCATION" => EntityCategory::Location,
            "EVENT" => EntityCategory::Event,
            "WORK_OF_ART" => EntityCategory::WorkOfArt,
            "CONSUMER_GOOD" => EntityCategory::ConsumerGood,
            _ => EntityCategory::Other,
        }
    }
}

/// One entity from the extraction response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    #[serde(rename = "type")]
    pub entity_type: String,
}

impl Entity {
    pub fn category(&self) -> EntityCategory {
        EntityCategory::from_wire(&self.entity_type)
    }
}

/// Document wrapper in the extraction request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub content: String,
}

/// Full extraction request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityRequest {
    pub document: EntityDocument,
    #[serde(rename = "encodingType")]
    pub encoding_type: String,
}

impl EntityRequest {
    /// Plain-text document with UTF-8 encoding, the only form we send.
    pub fn plain_text(content: impl Into<String>) -> Self {
        Self {
            document: EntityDocument {
                doc_type: "PLAIN_TEXT".to_string(),
                content: content.into(),
            },
            encoding_type: "UTF8".to_string(),
        }
    }
}

/// Extraction response body. A missing `entities` field deserializes as
/// empty rather than failing the whole call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityResponse {
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_casing() {
        let req = EntityRequest::plain_text("hello");
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["document"]["type"], "PLAIN_TEXT");
        assert_eq!(json["document"]["content"], "hello");
        assert_eq!(json["encodingType"], "UTF8");
    }

    #[test]
    fn test_response_parses_entities() {
        let resp: EntityResponse = serde_json::from_str(
            r#"{"entities":[{"name":"Alice","type":"PERSON"},{"name":"Acme","type":"ORGANIZATION"}]}"#,
        )
        .unwrap();
        assert_eq!(resp.entities.len(), 2);
        assert_eq!(resp.entities[0].category(), EntityCategory::Person);
        assert_eq!(resp.entities[1].category(), EntityCategory::Organization);
    }

    #[test]
    fn test_response_without_entities_is_empty() {
        let resp: EntityResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.entities.is_empty());
    }

    #[test]
    fn test_unknown_type_maps_to_other() {
        assert_eq!(EntityCategory::from_wire("NUMBER"), EntityCategory::Other);
        assert_eq!(EntityCategory::from_wire(""), EntityCategory::Other);
    }
}
