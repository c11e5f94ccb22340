//! Type key derivation.
//!
//! The Type Record for data key `K` lives under `K` followed by a reserved
//! suffix. Derivation is pure and deterministic.

/// Default reserved suffix for Type Record keys.
pub const TYPE_KEY_SUFFIX: &str = "-Type";

/// Derive the Type Record key for `key` using the default suffix.
pub fn type_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + TYPE_KEY_SUFFIX.len());
    out.push_str(key);
    out.push_str(TYPE_KEY_SUFFIX);
    out
}

/// Derives Type Record keys with a configurable suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeKeyDeriver {
    suffix: String,
}

impl TypeKeyDeriver {
    /// Create a deriver with a custom suffix.
    ///
    /// Returns `None` for an empty suffix, which would map every key onto
    /// itself.
    pub fn new(suffix: impl Into<String>) -> Option<Self> {
        let suffix = suffix.into();
        if suffix.is_empty() {
            return None;
        }
        Some(Self { suffix })
    }

    /// The suffix appended to data keys.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Derive the Type Record key for `key`.
    pub fn derive(&self, key: &str) -> String {
        let mut out = String::with_capacity(key.len() + self.suffix.len());
        out.push_str(key);
        out.push_str(&self.suffix);
        out
    }

    /// Whether `key` has the shape of a Type Record key.
    pub fn is_type_key(&self, key: &str) -> bool {
        key.ends_with(&self.suffix)
    }
}

impl Default for TypeKeyDeriver {
    fn default() -> Self {
        Self {
            suffix: TYPE_KEY_SUFFIX.to_string(),
        }
    }
}
