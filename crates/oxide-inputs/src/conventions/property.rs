//! Property metadata inspected by conventions.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Declared variants of an enum property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumInfo {
    /// Enum type name.
    pub name: &'static str,
    /// Variant names, in declaration order.
    pub variants: &'static [&'static str],
}

/// The type of a model property, as far as input rendering cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Integer,
    Decimal,
    Boolean,
    DateTime,
    Enum(EnumInfo),
    /// Any other type, by name.
    Other(&'static str),
}

impl PropertyType {
    /// Returns the type name, used as the default partial name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Integer => "Integer",
            Self::Decimal => "Decimal",
            Self::Boolean => "Boolean",
            Self::DateTime => "DateTime",
            Self::Enum(info) => info.name,
            Self::Other(name) => *name,
        }
    }

    /// Returns the enum description for enum types.
    pub fn as_enum(&self) -> Option<&EnumInfo> {
        match self {
            Self::Enum(info) => Some(info),
            _ => None,
        }
    }
}

/// Display metadata attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyMetadata {
    /// Label override.
    pub label: Option<String>,
    /// Example text shown next to the input.
    pub example: Option<String>,
    /// Whether a value is required.
    pub required: bool,
    /// Partial name override.
    pub partial: Option<String>,
    /// Maximum length of the value.
    pub max_length: Option<usize>,
}

/// A model property: its name, type and metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyInfo {
    pub name: String,
    pub property_type: PropertyType,
    pub metadata: PropertyMetadata,
}

impl PropertyInfo {
    /// Creates a property with empty metadata.
    pub fn new(name: impl Into<String>, property_type: PropertyType) -> Self {
        Self {
            name: name.into(),
            property_type,
            metadata: PropertyMetadata::default(),
        }
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.metadata.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.metadata.example = Some(example.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.metadata.required = true;
        self
    }

    #[must_use]
    pub fn partial(mut self, partial: impl Into<String>) -> Self {
        self.metadata.partial = Some(partial.into());
        self
    }

    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.metadata.max_length = Some(max_length);
        self
    }
}

/// The current value of a model property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Text(String),
    Integer(i64),
    Decimal(f64),
    Boolean(bool),
    DateTime(NaiveDateTime),
    /// An enum value, by variant name.
    Enum(&'static str),
}

impl PropertyValue {
    /// Returns whether the value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// The string form of the value; null renders as the empty string.
impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Decimal(n) => write!(f, "{n}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::DateTime(dt) => write!(f, "{dt}"),
            Self::Enum(name) => f.write_str(name),
        }
    }
}

/// A Rust type usable as a model property.
///
/// Implemented for common scalar types, `Option<T>`, and enums deriving
/// `InputEnum`.
pub trait InputProperty {
    /// Returns the property type.
    fn property_type() -> PropertyType;

    /// Returns the current value.
    fn to_property_value(&self) -> PropertyValue;
}

/// A unit-only enum rendered as a list of options.
pub trait InputEnum {
    /// Enum type name.
    const NAME: &'static str;
    /// Variant names, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Returns the name of this variant.
    fn variant_name(&self) -> &'static str;

    /// Returns the enum description.
    fn enum_info() -> EnumInfo {
        EnumInfo {
            name: Self::NAME,
            variants: Self::VARIANTS,
        }
    }
}

/// A model whose properties can be turned into inputs.
///
/// Usually derived with `#[derive(InputModel)]`.
pub trait InputModel {
    /// Returns the properties in declaration order.
    fn properties() -> Vec<PropertyInfo>;

    /// Returns the current value of a property, or null for unknown names.
    fn property_value(&self, name: &str) -> PropertyValue;
}

impl InputProperty for String {
    fn property_type() -> PropertyType {
        PropertyType::String
    }

    fn to_property_value(&self) -> PropertyValue {
        PropertyValue::Text(self.clone())
    }
}

impl InputProperty for bool {
    fn property_type() -> PropertyType {
        PropertyType::Boolean
    }

    fn to_property_value(&self) -> PropertyValue {
        PropertyValue::Boolean(*self)
    }
}

macro_rules! integer_property {
    ($($ty:ty),*) => {
        $(
            impl InputProperty for $ty {
                fn property_type() -> PropertyType {
                    PropertyType::Integer
                }

                fn to_property_value(&self) -> PropertyValue {
                    PropertyValue::Integer(i64::from(*self))
                }
            }
        )*
    };
}

integer_property!(i8, i16, i32, i64, u8, u16, u32);

impl InputProperty for f32 {
    fn property_type() -> PropertyType {
        PropertyType::Decimal
    }

    fn to_property_value(&self) -> PropertyValue {
        PropertyValue::Decimal(f64::from(*self))
    }
}

impl InputProperty for f64 {
    fn property_type() -> PropertyType {
        PropertyType::Decimal
    }

    fn to_property_value(&self) -> PropertyValue {
        PropertyValue::Decimal(*self)
    }
}

impl InputProperty for NaiveDateTime {
    fn property_type() -> PropertyType {
        PropertyType::DateTime
    }

    fn to_property_value(&self) -> PropertyValue {
        PropertyValue::DateTime(*self)
    }
}

impl InputProperty for NaiveDate {
    fn property_type() -> PropertyType {
        PropertyType::DateTime
    }

    fn to_property_value(&self) -> PropertyValue {
        PropertyValue::DateTime(self.and_time(NaiveTime::MIN))
    }
}

impl<T: InputProperty> InputProperty for Option<T> {
    fn property_type() -> PropertyType {
        T::property_type()
    }

    fn to_property_value(&self) -> PropertyValue {
        self.as_ref()
            .map_or(PropertyValue::Null, InputProperty::to_property_value)
    }
}
