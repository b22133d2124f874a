//! Per-field validation state.
//!
//! The state records, for each submitted field, the validation errors raised
//! while binding it and the value the user attempted to submit. Input
//! behaviors read it at render time to re-populate forms.

use std::cell::{Ref, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// The raw submission for a field.
///
/// Checkboxes pair a visible input with a hidden fallback of the same name,
/// so a checked box submits two values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// The field was submitted once.
    Single(String),
    /// The field was submitted several times.
    Multiple(Vec<String>),
}

impl RawValue {
    /// Returns all submitted values in submission order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }
}

/// A submitted value: the raw submission and the single value resolved from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptedValue {
    /// What the client sent.
    pub raw: RawValue,
    /// The resolved single value.
    pub attempted: String,
}

impl AttemptedValue {
    /// Creates a value for a field submitted once.
    pub fn single(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            raw: RawValue::Single(value.clone()),
            attempted: value,
        }
    }

    /// Creates a value for a multi-valued field.
    pub fn multiple<I, S>(raw: I, attempted: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            raw: RawValue::Multiple(raw.into_iter().map(Into::into).collect()),
            attempted: attempted.into(),
        }
    }
}

/// Validation state of a single field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldState {
    /// Error messages, in the order they were added.
    #[serde(default)]
    pub errors: Vec<String>,
    /// The submitted value, if the field was part of the submission.
    #[serde(default)]
    pub value: Option<AttemptedValue>,
}

impl FieldState {
    /// Returns whether the field has at least one error.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the resolved attempted value.
    pub fn attempted_value(&self) -> Option<&str> {
        self.value.as_ref().map(|v| v.attempted.as_str())
    }
}

/// Validation state for a whole submission, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationState {
    fields: HashMap<String, FieldState>,
}

impl ValidationState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a state from submitted `(name, value)` pairs.
    ///
    /// A name submitted more than once gets a multi-valued raw value and
    /// resolves to the first value submitted for it.
    pub fn from_submission<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut grouped: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in pairs {
            grouped.entry(name.into()).or_default().push(value.into());
        }

        let fields = grouped
            .into_iter()
            .filter_map(|(name, mut values)| {
                let value = match values.len() {
                    0 => return None,
                    1 => AttemptedValue::single(values.remove(0)),
                    _ => {
                        let first = values[0].clone();
                        AttemptedValue::multiple(values, first)
                    }
                };
                Some((
                    name,
                    FieldState {
                        errors: Vec::new(),
                        value: Some(value),
                    },
                ))
            })
            .collect();

        Self { fields }
    }

    /// Adds an error for a field, creating its entry if needed.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .errors
            .push(message.into());
    }

    /// Adds several errors for a field.
    pub fn add_errors<I, S>(&mut self, field: &str, messages: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entry = self.fields.entry(field.to_string()).or_default();
        entry.errors.extend(messages.into_iter().map(Into::into));
    }

    /// Records the submitted value of a field, creating its entry if needed.
    pub fn set_value(&mut self, field: &str, value: AttemptedValue) {
        self.fields.entry(field.to_string()).or_default().value = Some(value);
    }

    /// Returns the state of a field.
    pub fn get(&self, field: &str) -> Option<&FieldState> {
        self.fields.get(field)
    }

    /// Returns the errors of a field, empty when it has none.
    pub fn errors_for(&self, field: &str) -> &[String] {
        self.fields
            .get(field)
            .map(|state| state.errors.as_slice())
            .unwrap_or_default()
    }

    /// Returns whether no field has errors.
    pub fn is_valid(&self) -> bool {
        self.fields.values().all(|state| !state.has_errors())
    }

    /// Returns whether the state has no entries.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the number of fields with an entry.
    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

/// A source of field validation state, consulted at render time.
pub trait ValidationStateSource {
    /// Returns the current state of the named field.
    fn field_state(&self, name: &str) -> Option<FieldState>;
}

impl ValidationStateSource for ValidationState {
    fn field_state(&self, name: &str) -> Option<FieldState> {
        self.get(name).cloned()
    }
}

/// A shared, mutable handle to a [`ValidationState`].
///
/// Behaviors hold a clone of the handle, so state recorded after they were
/// wired up is still visible when the element renders.
#[derive(Debug, Clone, Default)]
pub struct SharedValidationState(Rc<RefCell<ValidationState>>);

impl SharedValidationState {
    /// Creates a handle to an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field.
    pub fn add_error(&self, field: &str, message: impl Into<String>) {
        self.0.borrow_mut().add_error(field, message);
    }

    /// Records the submitted value of a field.
    pub fn set_value(&self, field: &str, value: AttemptedValue) {
        self.0.borrow_mut().set_value(field, value);
    }

    /// Replaces the whole state.
    pub fn replace(&self, state: ValidationState) -> ValidationState {
        self.0.replace(state)
    }

    /// Borrows the current state.
    ///
    /// # Panics
    ///
    /// Panics if the state is currently mutably borrowed.
    pub fn borrow(&self) -> Ref<'_, ValidationState> {
        self.0.borrow()
    }
}

impl From<ValidationState> for SharedValidationState {
    fn from(state: ValidationState) -> Self {
        Self(Rc::new(RefCell::new(state)))
    }
}

impl ValidationStateSource for SharedValidationState {
    fn field_state(&self, name: &str) -> Option<FieldState> {
        self.0.borrow().get(name).cloned()
    }
}

/// Adapts a lookup closure into a [`ValidationStateSource`].
pub(crate) struct FnSource<F>(pub(crate) F);

impl<F> ValidationStateSource for FnSource<F>
where
    F: Fn(&str) -> Option<FieldState>,
{
    fn field_state(&self, name: &str) -> Option<FieldState> {
        (self.0)(name)
    }
}
