//! Page summary composition
//!
//! Buckets extracted entities into seven categories and concatenates one
//! templated sentence fragment per non-empty category, in fixed order.

use voxtab_common::entities::{Entity, EntityCategory};

/// Compose the spoken summary for a set of extracted entities.
pub fn compose_summary(entities: &[Entity]) -> String {
    let mut summary = String::from("Here's a summary of the page: ");

    for category in EntityCategory::ORDERED {
        let names: Vec<&str> = entities
            .iter()
            .filter(|e| e.category() == category)
            .map(|e| e.name.as_str())
            .collect();
        if names.is_empty() {
            continue;
        }
        let joined = names.join(", ");
        let fragment = match category {
            EntityCategory::Person => {
                format!("This page mentions people like {}. ", joined)
            }
            EntityCategory::Organization => {
                format!("It talks about organizations such as {}. ", joined)
            }
            EntityCategory::Location => {
                format!("Important locations include {}. ", joined)
            }
            EntityCategory::Event => {
                format!("It references events like {}. ", joined)
            }
            EntityCategory::WorkOfArt => {
                format!("Works of art mentioned include {}. ", joined)
            }
            EntityCategory::ConsumerGood => {
                format!("Products or consumer goods mentioned include {}. ", joined)
            }
            EntityCategory::Other => {
                format!("Other relevant terms include {}. ", joined)
            }
        };
        summary.push_str(&fragment);
    }

    summary.trim_end().to_string()
}
