use std::path::Path;

use atn_core::errors::AtnError;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::layout::DESCRIPTOR_FILE;
use crate::serde::{read_json, stable_hash_string, write_json_atomic};

/// How an artifact was produced: generator name plus its arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Descriptor {
    pub generator: String,
    #[serde(default)]
    pub args: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub food_web: Option<String>,
    /// SHA-256 over `(generator, args)`; identical requests share it.
    pub fingerprint: String,
    pub created_at: String,
}

impl Descriptor {
    pub fn new(generator: impl Into<String>, args: Value) -> Result<Self, AtnError> {
        let generator = generator.into();
        let fingerprint = stable_hash_string(&(&generator, &args))?;
        Ok(Self {
            generator,
            args,
            food_web: None,
            fingerprint,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        })
    }

    pub fn with_food_web(mut self, food_web: impl Into<String>) -> Self {
        self.food_web = Some(food_web.into());
        self
    }

    /// Writes `descriptor.json` into an artifact directory.
    pub fn write_to(&self, dir: &Path) -> Result<(), AtnError> {
        write_json_atomic(&dir.join(DESCRIPTOR_FILE), self)
    }

    pub fn read_from(dir: &Path) -> Result<Self, AtnError> {
        read_json(&dir.join(DESCRIPTOR_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fingerprint_ignores_key_order_and_time() {
        let a = Descriptor::new("filter-sustaining", json!({"a": 1, "b": 2})).unwrap();
        let b = Descriptor::new("filter-sustaining", json!({"b": 2, "a": 1})).unwrap();
        let c = Descriptor::new("filter-sustaining", json!({"a": 2, "b": 2})).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_ne!(a.fingerprint, c.fingerprint);
        assert_eq!(a.fingerprint.len(), 64);
    }
}
