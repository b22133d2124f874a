//! Field layout rendering for property view-models.

use std::fmt;
use std::rc::Rc;

use ironhtml::html;
use ironhtml::typed::Element as HtmlElement;
use ironhtml_elements::Div;
use tracing::debug;

use crate::behaviors::Behavior;
use crate::config::InputConfig;
use crate::conventions::{
    PropertyViewModel, SelectListItem, ViewValue, BOOLEAN_PARTIAL, ENUM_PARTIAL,
};
use crate::element::Element;
use crate::error::Result;
use crate::html::html_escape;
use crate::state::{FieldState, ValidationStateSource};

/// Partial rendered as a password field.
pub const PASSWORD_PARTIAL: &str = "Password";

/// Renders property view-models inside the `Field` layout: a label, the
/// input chosen from the partial name, example text and error messages.
///
/// ```rust
/// use oxide_inputs::conventions::{
///     PropertyInfo, PropertyType, PropertyValue, ViewModelContext, ViewModelFactory,
/// };
/// use oxide_inputs::FieldLayout;
///
/// let property = PropertyInfo::new("FirstName", PropertyType::String).required();
/// let vm = ViewModelFactory::new().create(
///     &property,
///     &PropertyValue::Text("Ada".to_string()),
///     &ViewModelContext::new(),
/// );
/// let html = FieldLayout::new().render(&vm).unwrap();
/// assert!(html.contains("First Name *"));
/// assert!(html.contains(r#"value="Ada""#));
/// ```
#[derive(Clone, Default)]
pub struct FieldLayout {
    behaviors: Vec<Rc<dyn Behavior>>,
    messages: Option<Rc<dyn ValidationStateSource>>,
    config: InputConfig,
}

impl fmt::Debug for FieldLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldLayout")
            .field("behaviors", &self.behaviors.len())
            .field("messages", &self.messages.is_some())
            .field("config", &self.config)
            .finish()
    }
}

impl FieldLayout {
    /// Creates a layout with no behaviors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a layout using the given configuration.
    pub fn from_config(config: InputConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Attaches a behavior to every input rendered by this layout.
    #[must_use]
    pub fn behavior(mut self, behavior: Rc<dyn Behavior>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    /// Shows error messages from the given validation state.
    ///
    /// Enum selects also take their error class and attempted selection from
    /// this state, since they do not go through input behaviors.
    #[must_use]
    pub fn validation_messages(mut self, source: impl ValidationStateSource + 'static) -> Self {
        self.messages = Some(Rc::new(source));
        self
    }

    /// Renders one property.
    pub fn render(&self, view_model: &PropertyViewModel) -> Result<String> {
        let state = self
            .messages
            .as_ref()
            .and_then(|source| source.field_state(&view_model.name));
        let input_html = self.render_input(view_model, state.as_ref())?;
        let errors = state.map(|state| state.errors).unwrap_or_default();

        let id = view_model.id.clone();
        let marker = if view_model.required {
            self.config.required_marker.as_str()
        } else {
            ""
        };
        let label_text = format!("{}{}", view_model.label, marker);
        let label_el = html! {
            label.for_(#id).class("field-label") { #label_text }
        };

        let example = view_model.example.clone().filter(|_| view_model.has_example());

        Ok(html! { div.class("field") }
            .raw(label_el.render())
            .raw(&input_html)
            .when(example.is_some(), |d| {
                d.child::<Div, _>(|h| {
                    h.class("field-example")
                        .text(example.as_deref().unwrap_or(""))
                })
            })
            .children(&errors, |error, div: HtmlElement<Div>| {
                div.class("field-validation-error").text(error)
            })
            .render())
    }

    /// Renders several properties, one field block each.
    pub fn render_all(&self, view_models: &[PropertyViewModel]) -> Result<String> {
        view_models
            .iter()
            .map(|vm| self.render(vm))
            .collect::<Result<Vec<_>>>()
            .map(|fields| fields.concat())
    }

    fn render_input(
        &self,
        view_model: &PropertyViewModel,
        state: Option<&FieldState>,
    ) -> Result<String> {
        let binding = Some(view_model.binding());
        let behaviors = self.behaviors.clone();

        let element = match view_model.partial_name.as_str() {
            ENUM_PARTIAL => {
                if let ViewValue::Options(options) = &view_model.value {
                    let error_class = state
                        .filter(|state| state.has_errors())
                        .map(|_| self.config.error_class.as_str());
                    let attempted = state.and_then(FieldState::attempted_value);
                    return Ok(render_select(view_model, options, attempted, error_class));
                }
                Element::text_box(&view_model.name, binding, behaviors)?
            }
            BOOLEAN_PARTIAL => Element::check_box(&view_model.name, binding, behaviors)?,
            PASSWORD_PARTIAL => Element::password(&view_model.name, binding, behaviors)?,
            _ => Element::text_box(&view_model.name, binding, behaviors)?,
        };

        Ok(element.id(view_model.id.clone()).render())
    }
}

fn render_select(
    view_model: &PropertyViewModel,
    options: &[SelectListItem],
    attempted: Option<&str>,
    error_class: Option<&str>,
) -> String {
    let is_selected = |option: &SelectListItem| match attempted {
        Some(value) => option.value == value,
        None => option.selected,
    };
    if let Some(value) = attempted {
        debug!(field = %view_model.name, value, "restoring attempted selection");
    }

    let mut html = String::new();
    if !view_model.required {
        let selected_attr = if attempted == Some("") {
            r#" selected="selected""#
        } else {
            ""
        };
        html.push_str(&format!(r#"<option value=""{selected_attr}></option>"#));
    }
    for option in options {
        let selected_attr = if is_selected(option) {
            r#" selected="selected""#
        } else {
            ""
        };
        html.push_str(&format!(
            r#"<option value="{}"{selected_attr}>{}</option>"#,
            html_escape(&option.value),
            html_escape(&option.text)
        ));
    }

    let class_attr = error_class
        .map(|class| format!(r#" class="{}""#, html_escape(class)))
        .unwrap_or_default();
    format!(
        r#"<select id="{}" name="{}"{class_attr}>{html}</select>"#,
        html_escape(&view_model.id),
        html_escape(&view_model.name)
    )
}
