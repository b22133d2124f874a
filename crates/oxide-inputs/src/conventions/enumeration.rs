//! Enum properties rendered as option lists.

use tracing::debug;

use super::default::base_view_model;
use super::property::{PropertyInfo, PropertyValue};
use super::view_model::{PropertyViewModel, SelectListItem, ViewValue};
use super::{PropertyConvention, ViewModelContext};

/// Partial used for enum properties.
pub const ENUM_PARTIAL: &str = "Enum";

/// Turns enum properties into a list of options, one per declared variant.
///
/// The option whose name equals the current value's string form is selected.
/// A value matching no variant leaves every option unselected.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumPropertyConvention;

impl PropertyConvention for EnumPropertyConvention {
    fn can_handle(&self, property: &PropertyInfo) -> bool {
        property.property_type.as_enum().is_some()
    }

    fn create(
        &self,
        property: &PropertyInfo,
        value: &PropertyValue,
        context: &ViewModelContext,
    ) -> PropertyViewModel {
        let current = value.to_string();
        let variants = property
            .property_type
            .as_enum()
            .map(|info| info.variants)
            .unwrap_or_default();

        let options: Vec<SelectListItem> = variants
            .iter()
            .map(|variant| SelectListItem {
                text: (*variant).to_string(),
                value: (*variant).to_string(),
                selected: *variant == current,
            })
            .collect();

        if !value.is_null() && !options.iter().any(|o| o.selected) {
            debug!(property = %property.name, value = %current, "value matches no enum variant");
        }

        let mut view_model = base_view_model(property, value, context);
        view_model.value = ViewValue::Options(options);
        view_model.partial_name = ENUM_PARTIAL.to_string();
        view_model
    }
}
