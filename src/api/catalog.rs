//! Static catalog of models offered through the relay.

use crate::api::models::ModelInfo;

/// `(id, name, description, provider)` in listing order.
const MODEL_CATALOG: [(&str, &str, &str, &str); 3] = [
    (
        "gemini-3-pro-high",
        "Gemini 3 Pro",
        "Modelo rápido para código general",
        "Google",
    ),
    (
        "claude-sonnet-4-5",
        "Claude Sonnet 4.5",
        "Razonamiento complejo y análisis",
        "Anthropic",
    ),
    (
        "claude-sonnet-4-5-thinking",
        "Claude Sonnet Thinking",
        "Tareas largas con thinking budget",
        "Anthropic",
    ),
];

/// Models listed by `GET /api/models`, always in the same order.
pub fn available_models() -> Vec<ModelInfo> {
    MODEL_CATALOG
        .iter()
        .map(|(id, name, description, provider)| ModelInfo {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            provider: provider.to_string(),
        })
        .collect()
}

/// Whether `id` names a catalog entry.
pub fn is_catalog_model(id: &str) -> bool {
    MODEL_CATALOG.iter().any(|(catalog_id, ..)| *catalog_id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_three_entries_in_order() {
        let ids: Vec<String> = available_models().into_iter().map(|m| m.id).collect();
        assert_eq!(
            ids,
            vec![
                "gemini-3-pro-high",
                "claude-sonnet-4-5",
                "claude-sonnet-4-5-thinking"
            ]
        );
    }

    #[test]
    fn test_catalog_providers() {
        let providers: HashSet<String> = available_models()
            .into_iter()
            .map(|m| m.provider)
            .collect();
        assert_eq!(providers.len(), 2);
        assert!(providers.contains("Google"));
        assert!(providers.contains("Anthropic"));
    }

    #[test]
    fn test_is_catalog_model() {
        assert!(is_catalog_model("claude-sonnet-4-5"));
        assert!(!is_catalog_model("claude-sonnet"));
        assert!(!is_catalog_model(""));
    }

    #[test]
    fn test_catalog_is_stable() {
        assert_eq!(available_models(), available_models());
    }
}
