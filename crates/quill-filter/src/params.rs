//! Filter parameters.

use std::collections::BTreeMap;

use crate::filter::FilterError;

/// String parameters passed to a filter run (e.g. `language = "rust"`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    values: BTreeMap<String, String>,
}

impl FilterParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a parameter.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Parameter value, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parameter value for a parameter the filter cannot run without.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::MissingParam`] if `name` is not set.
    pub fn require(&self, name: &str) -> Result<&str, FilterError> {
        self.get(name).ok_or_else(|| FilterError::MissingParam {
            name: name.to_owned(),
        })
    }

    /// Whether no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for FilterParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_require() {
        let params = FilterParams::new().with("language", "rust");

        assert_eq!(params.get("language"), Some("rust"));
        assert_eq!(params.require("language").unwrap(), "rust");
        assert!(params.get("theme").is_none());
    }

    #[test]
    fn test_require_missing_param() {
        let params = FilterParams::new();

        let err = params.require("language").unwrap_err();

        assert!(matches!(err, FilterError::MissingParam { ref name } if name == "language"));
        assert_eq!(err.to_string(), "Missing required filter parameter `language`");
    }

    #[test]
    fn test_from_iter() {
        let params: FilterParams = [("language", "ruby"), ("line_numbers", "table")]
            .into_iter()
            .collect();

        assert_eq!(params.get("line_numbers"), Some("table"));
        assert!(!params.is_empty());
    }
}
