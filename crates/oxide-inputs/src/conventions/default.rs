//! Fallback convention used for any property.

use std::sync::LazyLock;

use regex::Regex;

use super::property::{PropertyInfo, PropertyValue};
use super::view_model::{PropertyViewModel, ViewValue, FIELD_LAYOUT};
use super::{PropertyConvention, ViewModelContext};
use crate::html::id_from_name;

static WORD_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("word boundary pattern is valid"));

/// Turns a member name into a label: `FirstName` becomes `First Name`,
/// `first_name` becomes `First name`.
pub fn label_from_name(name: &str) -> String {
    let spaced = WORD_BOUNDARY.replace_all(name, "$1 $2").replace('_', " ");
    let spaced = spaced.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds the view-model shared by all conventions.
///
/// The value is the property value's string form, or null.
pub fn base_view_model(
    property: &PropertyInfo,
    value: &PropertyValue,
    context: &ViewModelContext,
) -> PropertyViewModel {
    let name = context.field_name(&property.name);
    let metadata = &property.metadata;

    PropertyViewModel {
        id: id_from_name(&name),
        name,
        label: metadata
            .label
            .clone()
            .unwrap_or_else(|| label_from_name(&property.name)),
        example: metadata.example.clone(),
        required: metadata.required,
        max_length: metadata.max_length,
        partial_name: metadata
            .partial
            .clone()
            .unwrap_or_else(|| property.property_type.type_name().to_string()),
        layout: FIELD_LAYOUT.to_string(),
        type_name: property.property_type.type_name().to_string(),
        value: if value.is_null() {
            ViewValue::Null
        } else {
            ViewValue::Text(value.to_string())
        },
    }
}

/// Handles every property; always last in the priority list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPropertyConvention;

impl PropertyConvention for DefaultPropertyConvention {
    fn can_handle(&self, _property: &PropertyInfo) -> bool {
        true
    }

    fn create(
        &self,
        property: &PropertyInfo,
        value: &PropertyValue,
        context: &ViewModelContext,
    ) -> PropertyViewModel {
        base_view_model(property, value, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conventions::property::PropertyType;

    #[test]
    fn test_label_from_name() {
        assert_eq!(label_from_name("FirstName"), "First Name");
        assert_eq!(label_from_name("first_name"), "First name");
        assert_eq!(label_from_name("price"), "Price");
        assert_eq!(label_from_name("HTTPPort"), "HTTPPort");
        assert_eq!(label_from_name("ZipCode2Digits"), "Zip Code2 Digits");
        assert_eq!(label_from_name(""), "");
    }

    #[test]
    fn test_base_view_model() {
        let property = PropertyInfo::new("UnitPrice", PropertyType::Decimal)
            .example("9.99")
            .required();
        let vm = base_view_model(
            &property,
            &PropertyValue::Decimal(12.5),
            &ViewModelContext::new(),
        );
        assert_eq!(vm.name, "UnitPrice");
        assert_eq!(vm.id, "UnitPrice");
        assert_eq!(vm.label, "Unit Price");
        assert_eq!(vm.partial_name, "Decimal");
        assert_eq!(vm.layout, "Field");
        assert_eq!(vm.value, ViewValue::Text("12.5".to_string()));
        assert!(vm.required);
        assert!(vm.has_example());
    }

    #[test]
    fn test_metadata_overrides() {
        let property = PropertyInfo::new("password", PropertyType::String)
            .label("Your password")
            .partial("Password");
        let vm = DefaultPropertyConvention.create(
            &property,
            &PropertyValue::Null,
            &ViewModelContext::new().prefix("Account"),
        );
        assert_eq!(vm.name, "Account.password");
        assert_eq!(vm.id, "Account_password");
        assert_eq!(vm.label, "Your password");
        assert_eq!(vm.partial_name, "Password");
        assert_eq!(vm.type_name, "String");
        assert_eq!(vm.value, ViewValue::Null);
    }
}
