// models/src/medical/name.rs

use serde::{Deserialize, Serialize};

/// The name sub-document of a patient or family member. Every part is
/// optional; store documents frequently carry only a first name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonName {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
}

impl PersonName {
    /// Display name: first, middle and last joined with single spaces,
    /// skipping the parts that are absent or empty.
    pub fn full(&self) -> String {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// First and last name joined with a single space; empty when both
    /// are absent.
    pub fn first_last(&self) -> String {
        [&self.first, &self.last]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
