//! Boolean properties rendered as checkboxes.

use super::default::base_view_model;
use super::property::{PropertyInfo, PropertyType, PropertyValue};
use super::view_model::{PropertyViewModel, ViewValue};
use super::{PropertyConvention, ViewModelContext};

/// Partial used for boolean properties.
pub const BOOLEAN_PARTIAL: &str = "Boolean";

/// Carries boolean values as booleans; null reads as unchecked.
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanPropertyConvention;

impl PropertyConvention for BooleanPropertyConvention {
    fn can_handle(&self, property: &PropertyInfo) -> bool {
        property.property_type == PropertyType::Boolean
    }

    fn create(
        &self,
        property: &PropertyInfo,
        value: &PropertyValue,
        context: &ViewModelContext,
    ) -> PropertyViewModel {
        let mut view_model = base_view_model(property, value, context);
        view_model.value = ViewValue::Boolean(matches!(value, PropertyValue::Boolean(true)));
        if property.metadata.partial.is_none() {
            view_model.partial_name = BOOLEAN_PARTIAL.to_string();
        }
        view_model
    }
}
