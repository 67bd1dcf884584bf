// models/src/identifiers.rs

use core::ops::Deref;
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::{ValidationError, ValidationResult};

/// The store-native key of a patient record. Keys are fixed-length
/// 24-character lowercase hex strings, the format the seeded record
/// identifiers use. The fixed format lets callers reject malformed
/// identifiers before touching the store.
#[derive(Clone, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct PatientKey(String);

impl PatientKey {
    pub const LEN: usize = 24;

    /// Creates a new patient key.
    ///
    /// # Errors
    /// Returns a `ValidationError` if `value` is not exactly 24 hex
    /// characters. Uppercase hex digits are accepted and folded to
    /// lowercase so keys compare bytewise.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        if value.len() != Self::LEN || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ValidationError::InvalidPatientKey);
        }
        Ok(Self(value.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for PatientKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for PatientKey {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for PatientKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> ValidationResult<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for PatientKey {
    type Error = ValidationError;

    fn try_from(value: String) -> ValidationResult<Self> {
        Self::new(value)
    }
}

impl From<PatientKey> for String {
    fn from(value: PatientKey) -> Self {
        value.0
    }
}

impl fmt::Display for PatientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::PatientKey;
    use crate::errors::ValidationError;
    use core::str::FromStr;

    #[test]
    fn should_not_create_empty_key() {
        let key = PatientKey::new("");
        assert!(key.is_err());
        assert_eq!(key.unwrap_err(), ValidationError::InvalidPatientKey);
    }

    #[test]
    fn should_not_create_short_key() {
        let key = PatientKey::new("abc123");
        assert!(key.is_err());
    }

    #[test]
    fn should_not_create_non_hex_key() {
        let key = PatientKey::new("zzzzzzzzzzzzzzzzzzzzzzzz");
        assert!(key.is_err());
    }

    #[test]
    fn should_create_key() {
        let key = PatientKey::new("65f1c0ffee00000000000001");
        assert!(key.is_ok());
        assert_eq!(key.unwrap().as_str(), "65f1c0ffee00000000000001");
    }

    #[test]
    fn should_fold_uppercase_hex() {
        let key = PatientKey::from_str("65F1C0FFEE00000000000001").unwrap();
        assert_eq!(key.as_str(), "65f1c0ffee00000000000001");
    }

    #[test]
    fn should_round_trip_through_serde() {
        let key = PatientKey::new("65f1c0ffee00000000000001").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"65f1c0ffee00000000000001\"");
        let back: PatientKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn should_reject_invalid_key_in_serde() {
        let parsed: Result<PatientKey, _> = serde_json::from_str("\"not-a-key\"");
        assert!(parsed.is_err());
    }
}
