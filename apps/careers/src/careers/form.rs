use serde::{Deserialize, Serialize};
use serde_json::Map;
use thiserror::Error;

use crate::models::career::{CareerDocument, CareerRecord};

/// User-facing rejection of a submitted career. The messages are shown inline
/// on the form as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("Career already exists.")]
    AlreadyExists,

    #[error("Please fill in all fields.")]
    MissingFields,
}

/// Raw submission from the "Add a Career" form or the JSON API.
/// `opportunities` and `universities` are comma-separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NewCareer {
    pub name: String,
    pub description: String,
    pub salary: String,
    pub opportunities: String,
    pub future_prospects: String,
    pub universities: String,
}

impl NewCareer {
    /// Checks the submission against `document` and builds the record to store.
    ///
    /// Duplicate names are reported before blank fields.
    pub fn validate(&self, document: &CareerDocument) -> Result<(String, CareerRecord), FormError> {
        let name = self.name.trim();
        if document.contains(name) {
            return Err(FormError::AlreadyExists);
        }

        let opportunities = split_list(&self.opportunities);
        let universities = split_list(&self.universities);

        let scalars = [
            name,
            self.description.trim(),
            self.salary.trim(),
            self.future_prospects.trim(),
        ];
        if scalars.iter().any(|s| s.is_empty())
            || opportunities.is_empty()
            || universities.is_empty()
        {
            return Err(FormError::MissingFields);
        }

        Ok((
            name.to_string(),
            CareerRecord {
                description: self.description.trim().to_string(),
                salary: self.salary.trim().to_string(),
                opportunities,
                future_prospects: self.future_prospects.trim().to_string(),
                universities,
                extra: Map::new(),
            },
        ))
    }
}

/// Splits a comma-separated input into trimmed, non-empty items, keeping order.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
