//! Date/time properties.

use std::fmt::Write;

use chrono::NaiveDateTime;
use tracing::warn;

use super::default::base_view_model;
use super::property::{PropertyInfo, PropertyType, PropertyValue};
use super::view_model::{PropertyViewModel, ViewValue};
use super::{PropertyConvention, ViewModelContext};
use crate::config::DEFAULT_DATETIME_FORMAT;

/// Partial used for date/time properties.
pub const DATETIME_PARTIAL: &str = "DateTime";

/// Formats date/time values with a chrono format string.
#[derive(Debug, Clone)]
pub struct DateTimePropertyConvention {
    format: String,
}

impl DateTimePropertyConvention {
    /// Creates the convention with the default format.
    pub fn new() -> Self {
        Self::with_format(DEFAULT_DATETIME_FORMAT)
    }

    /// Creates the convention with a custom format.
    pub fn with_format(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl DateTimePropertyConvention {
    fn format(&self, dt: &NaiveDateTime) -> String {
        let mut text = String::new();
        if write!(text, "{}", dt.format(&self.format)).is_err() {
            warn!(format = %self.format, "invalid date/time format, using default");
            text = dt.to_string();
        }
        text
    }
}

impl Default for DateTimePropertyConvention {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyConvention for DateTimePropertyConvention {
    fn can_handle(&self, property: &PropertyInfo) -> bool {
        property.property_type == PropertyType::DateTime
    }

    fn create(
        &self,
        property: &PropertyInfo,
        value: &PropertyValue,
        context: &ViewModelContext,
    ) -> PropertyViewModel {
        let mut view_model = base_view_model(property, value, context);
        if let PropertyValue::DateTime(dt) = value {
            view_model.value = ViewValue::Text(self.format(dt));
        }
        if property.metadata.partial.is_none() {
            view_model.partial_name = DATETIME_PARTIAL.to_string();
        }
        view_model
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn created_at() -> PropertyValue {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        PropertyValue::DateTime(dt)
    }

    #[test]
    fn test_default_format() {
        let property = PropertyInfo::new("CreatedAt", PropertyType::DateTime);
        let vm = DateTimePropertyConvention::new().create(
            &property,
            &created_at(),
            &ViewModelContext::new(),
        );
        assert_eq!(vm.partial_name, "DateTime");
        assert_eq!(vm.value, ViewValue::Text("2024-01-15 10:30".to_string()));
    }

    #[test]
    fn test_custom_format() {
        let property = PropertyInfo::new("CreatedAt", PropertyType::DateTime);
        let vm = DateTimePropertyConvention::with_format("%d/%m/%Y")
            .create(&property, &created_at(), &ViewModelContext::new());
        assert_eq!(vm.value, ViewValue::Text("15/01/2024".to_string()));
    }

    #[test]
    fn test_invalid_format_falls_back() {
        let property = PropertyInfo::new("CreatedAt", PropertyType::DateTime);
        let vm = DateTimePropertyConvention::with_format("%Q")
            .create(&property, &created_at(), &ViewModelContext::new());
        assert_eq!(vm.value, ViewValue::Text("2024-01-15 10:30:00".to_string()));
    }

    #[test]
    fn test_null_value() {
        let property = PropertyInfo::new("CreatedAt", PropertyType::DateTime);
        let vm = DateTimePropertyConvention::new().create(
            &property,
            &PropertyValue::Null,
            &ViewModelContext::new(),
        );
        assert_eq!(vm.value, ViewValue::Null);
    }
}
