//! Token matcher feeding the search box.
//!
//! The term is split on whitespace; a catalog name matches when it starts
//! with any token, case-insensitively. Makes are scoped to the region
//! directly, models through their owning make. The response is all make hits
//! followed by all model hits, each block name-ordered and capped
//! independently, never interleaved.

use crate::constants::AUTOCOMPLETE_LIMIT;
use crate::error::{AdmartError, Result};
use crate::types::{AutocompleteRequest, Make, MakeRef, Model, Suggestion};

use super::Admart;

impl Admart {
    pub fn autocomplete(&self, request: &AutocompleteRequest) -> Result<Vec<Suggestion>> {
        let region_id = request
            .region_id
            .ok_or(AdmartError::MissingAutocompleteInput)?;
        let tokens: Vec<String> = request
            .term
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        if tokens.is_empty() {
            return Err(AdmartError::MissingAutocompleteInput);
        }

        let mut makes: Vec<&Make> = self
            .store
            .makes
            .values()
            .filter(|make| make.region_id == region_id && starts_with_any(&make.name, &tokens))
            .collect();
        makes.sort_by(|a, b| a.name.cmp(&b.name));
        makes.truncate(AUTOCOMPLETE_LIMIT);

        // A model matches on its own name or its make's name, so "Toy" still
        // surfaces every Toyota model.
        let mut models: Vec<(&Model, &Make)> = self
            .store
            .models
            .values()
            .filter_map(|model| {
                self.store
                    .makes
                    .get(&model.make_id)
                    .map(|make| (model, make))
            })
            .filter(|(model, make)| {
                make.region_id == region_id
                    && (starts_with_any(&model.name, &tokens)
                        || starts_with_any(&make.name, &tokens))
            })
            .collect();
        models.sort_by(|a, b| a.0.name.cmp(&b.0.name));
        models.truncate(AUTOCOMPLETE_LIMIT);

        tracing::debug!(
            target: "admart::autocomplete",
            tokens = tokens.len(),
            makes = makes.len(),
            models = models.len(),
            "autocomplete matched"
        );

        let mut suggestions = Vec::with_capacity(makes.len() + models.len());
        for make in makes {
            suggestions.push(Suggestion::Make { id: make.id, text: make.name.clone() });
        }
        for (model, make) in models {
            suggestions.push(Suggestion::Model {
                id: model.id,
                text: format!("{} {}", make.name, model.name),
                make: MakeRef { id: make.id, name: make.name.clone() },
            });
        }
        Ok(suggestions)
    }
}

fn starts_with_any(name: &str, tokens: &[String]) -> bool {
    let name = name.to_lowercase();
    tokens.iter().any(|token| name.starts_with(token.as_str()))
}

#[cfg(test)]
mod tests {
    use super::starts_with_any;

    #[test]
    fn prefix_match_is_case_insensitive() {
        let tokens = vec!["toy".to_string(), "cor".to_string()];
        assert!(starts_with_any("Toyota", &tokens));
        assert!(starts_with_any("Corolla", &tokens));
        assert!(!starts_with_any("Civic", &tokens));
    }
}
