// models/src/medical/social_history.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The social-history sub-document: 13 independent, optional sections.
/// Section contents are free-form store documents with no fixed field
/// set, so they stay opaque `Value`s; the formatter layer only moves
/// them around and defaults each one to null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialHistory {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tobacco_smoking: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tobacco_consumption: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alcohol_use: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_history_free_text: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_resources: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_activity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_isolation_connection: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exposure_to_violence: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_identity: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sexual_orientation: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrients_history: Option<Value>,
}
