//! Rendering configuration.

use serde::Deserialize;

use crate::error::Result;

/// Default CSS class applied to inputs whose field has errors.
pub const DEFAULT_ERROR_CLASS: &str = "input-validation-error";

/// Default CSS class applied to inputs bound to required members.
pub const DEFAULT_REQUIRED_CLASS: &str = "required";

/// Default format for date/time property values.
pub const DEFAULT_DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Settings shared by behaviors, conventions and layouts.
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use oxide_inputs::InputConfig;
///
/// let config = InputConfig::from_json(r#"{ "error_class": "is-invalid" }"#).unwrap();
/// assert_eq!(config.error_class, "is-invalid");
/// assert_eq!(config.required_class, "required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Class merged into inputs whose field has errors.
    pub error_class: String,
    /// Class merged into inputs bound to required members.
    pub required_class: String,
    /// chrono format string for date/time values.
    pub datetime_format: String,
    /// Text appended to labels of required fields.
    pub required_marker: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            error_class: DEFAULT_ERROR_CLASS.to_string(),
            required_class: DEFAULT_REQUIRED_CLASS.to_string(),
            datetime_format: DEFAULT_DATETIME_FORMAT.to_string(),
            required_marker: " *".to_string(),
        }
    }
}

impl InputConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the error class.
    #[must_use]
    pub fn error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = class.into();
        self
    }

    /// Sets the date/time format.
    #[must_use]
    pub fn datetime_format(mut self, format: impl Into<String>) -> Self {
        self.datetime_format = format.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;

    #[test]
    fn test_defaults() {
        let config = InputConfig::new();
        assert_eq!(config.error_class, "input-validation-error");
        assert_eq!(config.required_class, "required");
        assert_eq!(config.datetime_format, "%Y-%m-%d %H:%M");
        assert_eq!(config.required_marker, " *");
    }

    #[test]
    fn test_partial_json() {
        let config = InputConfig::from_json(r#"{"required_marker": ""}"#).unwrap();
        assert_eq!(config.required_marker, "");
        assert_eq!(config.error_class, DEFAULT_ERROR_CLASS);
    }

    #[test]
    fn test_invalid_json() {
        let err = InputConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, InputError::Config(_)));
    }
}
