//! Convention-based view-models for model properties.
//!
//! A [`ViewModelFactory`] holds an ordered list of [`PropertyConvention`]s.
//! For each property the first convention that can handle it builds the
//! [`PropertyViewModel`]; the default convention handles whatever is left.
//!
//! ```rust
//! use oxide_inputs::conventions::{
//!     PropertyInfo, PropertyType, PropertyValue, ViewModelContext, ViewModelFactory, ViewValue,
//! };
//!
//! let factory = ViewModelFactory::new();
//! let property = PropertyInfo::new("IsActive", PropertyType::Boolean);
//! let vm = factory.create(&property, &PropertyValue::Boolean(true), &ViewModelContext::new());
//! assert_eq!(vm.partial_name, "Boolean");
//! assert_eq!(vm.value, ViewValue::Boolean(true));
//! ```

mod boolean;
mod datetime;
mod default;
mod enumeration;
mod property;
mod view_model;

pub use boolean::{BooleanPropertyConvention, BOOLEAN_PARTIAL};
pub use datetime::{DateTimePropertyConvention, DATETIME_PARTIAL};
pub use default::{base_view_model, label_from_name, DefaultPropertyConvention};
pub use enumeration::{EnumPropertyConvention, ENUM_PARTIAL};
pub use property::{
    EnumInfo, InputEnum, InputModel, InputProperty, PropertyInfo, PropertyMetadata, PropertyType,
    PropertyValue,
};
pub use view_model::{PropertyViewModel, SelectListItem, ViewValue, FIELD_LAYOUT};

use tracing::debug;

use crate::config::InputConfig;

/// Decides how a model property is rendered.
pub trait PropertyConvention {
    /// Returns whether this convention applies to the property.
    fn can_handle(&self, property: &PropertyInfo) -> bool;

    /// Builds the view-model for the property.
    fn create(
        &self,
        property: &PropertyInfo,
        value: &PropertyValue,
        context: &ViewModelContext,
    ) -> PropertyViewModel;
}

/// Where a model sits in the enclosing form.
///
/// Nested and indexed models prefix their field names: a property `Name`
/// of the third item in `Items` becomes `Items[2].Name`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModelContext {
    pub prefix: Option<String>,
    pub index: Option<usize>,
}

impl ViewModelContext {
    /// Creates a context for a top-level model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the item index.
    #[must_use]
    pub fn index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Returns the full field name for a property.
    pub fn field_name(&self, property: &str) -> String {
        let mut name = self.prefix.clone().unwrap_or_default();
        if let Some(index) = self.index {
            name.push_str(&format!("[{index}]"));
        }
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(property);
        name
    }
}

/// Builds property view-models by first-match convention dispatch.
pub struct ViewModelFactory {
    conventions: Vec<Box<dyn PropertyConvention>>,
    fallback: DefaultPropertyConvention,
}

impl std::fmt::Debug for ViewModelFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewModelFactory")
            .field("conventions", &self.conventions.len())
            .finish_non_exhaustive()
    }
}

impl Default for ViewModelFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewModelFactory {
    /// Creates a factory with the built-in conventions: enum, boolean,
    /// date/time, then the default.
    pub fn new() -> Self {
        Self::with_config(&InputConfig::default())
    }

    /// Creates a factory with the built-in conventions, configured.
    pub fn with_config(config: &InputConfig) -> Self {
        Self::empty()
            .push(EnumPropertyConvention)
            .push(BooleanPropertyConvention)
            .push(DateTimePropertyConvention::with_format(config.datetime_format.clone()))
    }

    /// Creates a factory with only the default convention.
    pub fn empty() -> Self {
        Self {
            conventions: Vec::new(),
            fallback: DefaultPropertyConvention,
        }
    }

    /// Adds a convention ahead of all existing ones.
    #[must_use]
    pub fn convention(mut self, convention: impl PropertyConvention + 'static) -> Self {
        self.conventions.insert(0, Box::new(convention));
        self
    }

    fn push(mut self, convention: impl PropertyConvention + 'static) -> Self {
        self.conventions.push(Box::new(convention));
        self
    }

    /// Builds the view-model for one property.
    pub fn create(
        &self,
        property: &PropertyInfo,
        value: &PropertyValue,
        context: &ViewModelContext,
    ) -> PropertyViewModel {
        let convention = self
            .conventions
            .iter()
            .position(|c| c.can_handle(property));
        debug!(
            property = %property.name,
            convention = ?convention,
            "dispatching property convention"
        );
        match convention {
            Some(index) => self.conventions[index].create(property, value, context),
            None => self.fallback.create(property, value, context),
        }
    }

    /// Builds view-models for every property of a model.
    pub fn create_all<M: InputModel>(&self, model: &M) -> Vec<PropertyViewModel> {
        self.create_all_with(model, &ViewModelContext::new())
    }

    /// Builds view-models for every property of a model nested in a form.
    pub fn create_all_with<M: InputModel>(
        &self,
        model: &M,
        context: &ViewModelContext,
    ) -> Vec<PropertyViewModel> {
        M::properties()
            .iter()
            .map(|property| self.create(property, &model.property_value(&property.name), context))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Product {
        name: String,
        in_stock: bool,
    }

    impl InputModel for Product {
        fn properties() -> Vec<PropertyInfo> {
            vec![
                PropertyInfo::new("name", PropertyType::String).required(),
                PropertyInfo::new("in_stock", PropertyType::Boolean),
            ]
        }

        fn property_value(&self, name: &str) -> PropertyValue {
            match name {
                "name" => self.name.to_property_value(),
                "in_stock" => self.in_stock.to_property_value(),
                _ => PropertyValue::Null,
            }
        }
    }

    struct UpperCaseConvention;

    impl PropertyConvention for UpperCaseConvention {
        fn can_handle(&self, property: &PropertyInfo) -> bool {
            property.property_type == PropertyType::String
        }

        fn create(
            &self,
            property: &PropertyInfo,
            value: &PropertyValue,
            context: &ViewModelContext,
        ) -> PropertyViewModel {
            let mut vm = base_view_model(property, value, context);
            vm.value = ViewValue::Text(value.to_string().to_uppercase());
            vm.partial_name = "Shout".to_string();
            vm
        }
    }

    #[test]
    fn test_field_name() {
        assert_eq!(ViewModelContext::new().field_name("Name"), "Name");
        assert_eq!(
            ViewModelContext::new().prefix("Address").field_name("City"),
            "Address.City"
        );
        assert_eq!(
            ViewModelContext::new().prefix("Items").index(2).field_name("Name"),
            "Items[2].Name"
        );
        assert_eq!(ViewModelContext::new().index(0).field_name("Name"), "[0].Name");
    }

    #[test]
    fn test_create_all() {
        let product = Product {
            name: "Widget".to_string(),
            in_stock: true,
        };
        let vms = ViewModelFactory::new().create_all(&product);
        assert_eq!(vms.len(), 2);
        assert_eq!(vms[0].partial_name, "String");
        assert_eq!(vms[0].value, ViewValue::Text("Widget".to_string()));
        assert!(vms[0].required);
        assert_eq!(vms[1].partial_name, "Boolean");
        assert_eq!(vms[1].label, "In stock");
    }

    #[test]
    fn test_custom_convention_takes_priority() {
        let factory = ViewModelFactory::new().convention(UpperCaseConvention);
        let product = Product {
            name: "Widget".to_string(),
            in_stock: false,
        };
        let vms = factory.create_all_with(&product, &ViewModelContext::new().prefix("Product"));
        assert_eq!(vms[0].partial_name, "Shout");
        assert_eq!(vms[0].value, ViewValue::Text("WIDGET".to_string()));
        assert_eq!(vms[0].name, "Product.name");
        assert_eq!(vms[1].partial_name, "Boolean");
    }

    #[test]
    fn test_empty_factory_uses_default() {
        let property = PropertyInfo::new("in_stock", PropertyType::Boolean);
        let vm = ViewModelFactory::empty().create(
            &property,
            &PropertyValue::Boolean(true),
            &ViewModelContext::new(),
        );
        assert_eq!(vm.partial_name, "Boolean");
        assert_eq!(vm.value, ViewValue::Text("true".to_string()));
    }

    #[test]
    fn test_configured_datetime_format() {
        let config = InputConfig::new().datetime_format("%Y");
        let property = PropertyInfo::new("Created", PropertyType::DateTime);
        let dt = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let vm = ViewModelFactory::with_config(&config).create(
            &property,
            &PropertyValue::DateTime(dt),
            &ViewModelContext::new(),
        );
        assert_eq!(vm.value, ViewValue::Text("2024".to_string()));
    }
}
