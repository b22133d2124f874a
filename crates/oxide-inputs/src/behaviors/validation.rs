//! Validation-state behavior.

use std::fmt;
use std::rc::Rc;

use tracing::{debug, trace};

use super::Behavior;
use crate::config::{InputConfig, DEFAULT_ERROR_CLASS};
use crate::element::{InputKind, RenderTarget};
use crate::html::attr;
use crate::state::{FieldState, FnSource, ValidationStateSource};

/// Re-populates inputs from validation state.
///
/// For the element's field, the behavior:
///
/// - merges the error class into `class` when the field has errors;
/// - restores the attempted value when the element is bound to a member.
///   Text inputs get the value verbatim, checkboxes get `checked` from the
///   resolved value, and password fields never get a value back.
///
/// The state is looked up when the element renders, so errors recorded after
/// the behavior was created are still applied. One instance can be shared by
/// any number of elements.
#[derive(Clone)]
pub struct ValidationBehavior {
    source: Rc<dyn ValidationStateSource>,
    error_class: String,
}

impl fmt::Debug for ValidationBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationBehavior")
            .field("error_class", &self.error_class)
            .finish_non_exhaustive()
    }
}

impl ValidationBehavior {
    /// Creates the behavior with the default error class.
    pub fn new(source: impl ValidationStateSource + 'static) -> Self {
        Self::with_error_class(source, DEFAULT_ERROR_CLASS)
    }

    /// Creates the behavior with a custom error class.
    pub fn with_error_class(
        source: impl ValidationStateSource + 'static,
        error_class: impl Into<String>,
    ) -> Self {
        Self {
            source: Rc::new(source),
            error_class: error_class.into(),
        }
    }

    /// Creates the behavior from a lookup closure.
    pub fn from_fn<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<FieldState> + 'static,
    {
        Self::new(FnSource(lookup))
    }

    /// Creates the behavior from configuration.
    pub fn from_config(source: impl ValidationStateSource + 'static, config: &InputConfig) -> Self {
        Self::with_error_class(source, config.error_class.clone())
    }

    /// Returns the class merged into elements with errors.
    pub fn error_class(&self) -> &str {
        &self.error_class
    }
}

impl Behavior for ValidationBehavior {
    fn apply(&self, target: &mut RenderTarget<'_>) {
        let Some(state) = self.source.field_state(target.name()) else {
            trace!(field = target.name(), "no validation state");
            return;
        };

        if state.has_errors() {
            debug!(
                field = target.name(),
                errors = state.errors.len(),
                class = %self.error_class,
                "merging error class"
            );
            target.attrs_mut().add_class(&self.error_class);
        }

        if target.binding().is_none() {
            return;
        }
        let Some(value) = state.value else {
            return;
        };

        match target.kind() {
            InputKind::Password => {
                debug!(field = target.name(), "not restoring password value");
            }
            InputKind::Checkbox => {
                let checked = value.attempted == "true";
                trace!(field = target.name(), checked, "restoring checkbox state");
                let attrs = target.attrs_mut();
                attrs.set(attr::VALUE, "true");
                if checked {
                    attrs.set(attr::CHECKED, attr::CHECKED);
                } else {
                    attrs.remove(attr::CHECKED);
                }
            }
            InputKind::Text => {
                trace!(field = target.name(), "restoring attempted value");
                target.attrs_mut().set(attr::VALUE, value.attempted);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, MemberBinding};
    use crate::state::{AttemptedValue, SharedValidationState, ValidationState};

    fn behaviors(behavior: ValidationBehavior) -> Vec<Rc<dyn Behavior>> {
        let behavior: Rc<dyn Behavior> = Rc::new(behavior);
        vec![behavior]
    }

    #[test]
    fn test_unbound_element_keeps_configured_value() {
        let mut state = ValidationState::new();
        state.set_value("Price", AttemptedValue::single("foo"));
        let html = Element::text_box("Price", None, behaviors(ValidationBehavior::new(state)))
            .unwrap()
            .value("1.00")
            .render();
        assert!(html.contains(r#"value="1.00""#));
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_error_without_binding_still_adds_class() {
        let mut state = ValidationState::new();
        state.add_error("Price", "Something bad happened");
        state.set_value("Price", AttemptedValue::single("bad value"));
        let html = Element::text_box("Price", None, behaviors(ValidationBehavior::new(state)))
            .unwrap()
            .render();
        assert!(html.contains(r#"class="input-validation-error""#));
        assert!(!html.contains("bad value"));
    }

    #[test]
    fn test_attempted_value_overrides_model_value() {
        let mut state = ValidationState::new();
        state.set_value("Price", AttemptedValue::single("abc"));
        let binding = MemberBinding::new("Price").model_value("9.99");
        let target = ValidationBehavior::new(state);
        let html = Element::text_box("Price", Some(binding), behaviors(target))
            .unwrap()
            .render();
        assert!(html.contains(r#"value="abc""#));
    }

    #[test]
    fn test_checkbox_unchecked_attempt_clears_model_checked() {
        let mut state = ValidationState::new();
        state.set_value("Done", AttemptedValue::single("false"));
        let binding = MemberBinding::new("Done").model_value("true");
        let target = ValidationBehavior::new(state);
        let html = Element::check_box("Done", Some(binding), behaviors(target))
            .unwrap()
            .render();
        assert!(!html.contains("checked="));
        assert!(html.contains(r#"value="true""#));
    }

    #[test]
    fn test_from_fn_lookup() {
        let behavior = ValidationBehavior::from_fn(|name| {
            (name == "Price").then(|| FieldState {
                errors: vec!["Required".to_string()],
                value: None,
            })
        });
        let html = Element::text_box("Price", None, behaviors(behavior.clone()))
            .unwrap()
            .render();
        assert!(html.contains("input-validation-error"));

        let html = Element::text_box("Name", None, behaviors(behavior))
            .unwrap()
            .render();
        assert!(!html.contains("class="));
    }

    #[test]
    fn test_from_config() {
        let config = InputConfig::new().error_class("is-invalid");
        let state = SharedValidationState::new();
        state.add_error("Price", "Required");
        let behavior = ValidationBehavior::from_config(state, &config);
        assert_eq!(behavior.error_class(), "is-invalid");
        let html = Element::text_box("Price", None, behaviors(behavior))
            .unwrap()
            .render();
        assert!(html.contains(r#"class="is-invalid""#));
    }
}
