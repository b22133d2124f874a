//! View-models produced by conventions.

use serde::Serialize;

use crate::element::MemberBinding;

/// Layout wrapping every property input.
pub const FIELD_LAYOUT: &str = "Field";

/// One option of a select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectListItem {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

/// The value carried by a property view-model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ViewValue {
    Null,
    Text(String),
    Boolean(bool),
    Options(Vec<SelectListItem>),
}

impl ViewValue {
    /// Returns the value as a string suitable for an input's `value`.
    ///
    /// Option lists yield the selected option's value.
    pub fn as_input_value(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Text(text) => Some(text.clone()),
            Self::Boolean(b) => Some(b.to_string()),
            Self::Options(options) => options
                .iter()
                .find(|option| option.selected)
                .map(|option| option.value.clone()),
        }
    }
}

/// Everything a view needs to render one model property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyViewModel {
    /// Field name, including any prefix and index.
    pub name: String,
    pub id: String,
    pub label: String,
    pub example: Option<String>,
    pub required: bool,
    pub max_length: Option<usize>,
    /// Partial used to render the input.
    pub partial_name: String,
    /// Layout wrapping the partial.
    pub layout: String,
    pub type_name: String,
    pub value: ViewValue,
}

impl PropertyViewModel {
    /// Returns whether example text is present.
    pub fn has_example(&self) -> bool {
        self.example.as_deref().is_some_and(|e| !e.is_empty())
    }

    /// Returns a binding of an element to this property.
    pub fn binding(&self) -> MemberBinding {
        MemberBinding {
            member: self.name.clone(),
            model_value: self.value.as_input_value(),
            required: self.required,
            max_length: self.max_length,
        }
    }
}
