//! Fluent builders for `<input>` elements.

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

use crate::behaviors::Behavior;
use crate::error::{InputError, Result};
use crate::html::{attr, html_escape, id_from_name, HtmlAttributes};

static MEMBER_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(\[\d+\]\.)?",
        r"[A-Za-z_][A-Za-z0-9_]*(\[\d+\])*",
        r"(\.[A-Za-z_][A-Za-z0-9_]*(\[\d+\])*)*$",
    ))
    .expect("member path pattern is valid")
});

/// Checks that `name` is a member path such as `Price`, `Items[0].Name` or
/// `[0].Name` (an item of a list model).
pub fn validate_member_path(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(InputError::EmptyName);
    }
    if !MEMBER_PATH.is_match(name) {
        return Err(InputError::InvalidName(name.to_string()));
    }
    Ok(())
}

/// The kind of input being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Text,
    Password,
    Checkbox,
}

impl InputKind {
    /// Returns the value of the `type` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Password => "password",
            Self::Checkbox => "checkbox",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputKind {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "text" => Ok(Self::Text),
            "password" => Ok(Self::Password),
            "checkbox" => Ok(Self::Checkbox),
            other => Err(InputError::UnsupportedKind(other.to_string())),
        }
    }
}

/// A reference to the model member an element is bound to.
///
/// Elements built from a name alone carry no binding, and behaviors never
/// restore submitted values into them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberBinding {
    /// Member path on the model.
    pub member: String,
    /// The member's current value, as a string.
    pub model_value: Option<String>,
    /// Whether the member is required.
    pub required: bool,
    /// Maximum length declared for the member.
    pub max_length: Option<usize>,
}

impl MemberBinding {
    /// Creates a binding to a member.
    pub fn new(member: impl Into<String>) -> Self {
        Self {
            member: member.into(),
            ..Default::default()
        }
    }

    /// Sets the member's current value.
    #[must_use]
    pub fn model_value(mut self, value: impl Into<String>) -> Self {
        self.model_value = Some(value.into());
        self
    }

    /// Marks the member as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Sets the member's maximum length.
    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }
}

/// The view of an element handed to behaviors at render time.
///
/// Name, kind and binding are read-only; only the attribute bag may change.
#[derive(Debug)]
pub struct RenderTarget<'a> {
    name: &'a str,
    kind: InputKind,
    binding: Option<&'a MemberBinding>,
    attrs: &'a mut HtmlAttributes,
}

impl RenderTarget<'_> {
    /// Returns the element name.
    pub fn name(&self) -> &str {
        self.name
    }

    /// Returns the element kind.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Returns the bound member, if any.
    pub fn binding(&self) -> Option<&MemberBinding> {
        self.binding
    }

    /// Returns the attributes.
    pub fn attrs(&self) -> &HtmlAttributes {
        &*self.attrs
    }

    /// Returns the attributes for modification.
    pub fn attrs_mut(&mut self) -> &mut HtmlAttributes {
        &mut *self.attrs
    }
}

/// An `<input>` element under construction.
///
/// ```rust
/// use std::rc::Rc;
/// use oxide_inputs::{Behavior, Element, MemberBinding, SharedValidationState, ValidationBehavior};
///
/// let state = SharedValidationState::new();
/// let validation: Rc<dyn Behavior> = Rc::new(ValidationBehavior::new(state.clone()));
/// state.add_error("Price", "Price must be a number");
///
/// let html = Element::text_box("Price", Some(MemberBinding::new("Price")), vec![validation])
///     .unwrap()
///     .class("short")
///     .render();
/// assert!(html.contains("input-validation-error"));
/// assert!(html.contains("short"));
/// ```
pub struct Element {
    name: String,
    kind: InputKind,
    binding: Option<MemberBinding>,
    attrs: HtmlAttributes,
    checked: Option<bool>,
    behaviors: Vec<Rc<dyn Behavior>>,
}

impl fmt::Debug for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("binding", &self.binding)
            .field("attrs", &self.attrs)
            .field("behaviors", &self.behaviors.len())
            .finish_non_exhaustive()
    }
}

impl Element {
    /// Creates an element.
    ///
    /// Fails when `name` is empty or not a member path.
    pub fn new(
        name: impl Into<String>,
        binding: Option<MemberBinding>,
        kind: InputKind,
        behaviors: Vec<Rc<dyn Behavior>>,
    ) -> Result<Self> {
        let name = name.into();
        validate_member_path(&name)?;
        Ok(Self {
            name,
            kind,
            binding,
            attrs: HtmlAttributes::new(),
            checked: None,
            behaviors,
        })
    }

    /// Creates a text box.
    pub fn text_box(
        name: impl Into<String>,
        binding: Option<MemberBinding>,
        behaviors: Vec<Rc<dyn Behavior>>,
    ) -> Result<Self> {
        Self::new(name, binding, InputKind::Text, behaviors)
    }

    /// Creates a password field.
    pub fn password(
        name: impl Into<String>,
        binding: Option<MemberBinding>,
        behaviors: Vec<Rc<dyn Behavior>>,
    ) -> Result<Self> {
        Self::new(name, binding, InputKind::Password, behaviors)
    }

    /// Creates a checkbox.
    pub fn check_box(
        name: impl Into<String>,
        binding: Option<MemberBinding>,
        behaviors: Vec<Rc<dyn Behavior>>,
    ) -> Result<Self> {
        Self::new(name, binding, InputKind::Checkbox, behaviors)
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element kind.
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    /// Returns the bound member, if any.
    pub fn binding(&self) -> Option<&MemberBinding> {
        self.binding.as_ref()
    }

    /// Returns the configured attributes.
    pub fn attrs(&self) -> &HtmlAttributes {
        &self.attrs
    }

    /// Adds a CSS class.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.attrs.add_class(class);
        self
    }

    /// Sets the element id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.attrs.set(attr::ID, id);
        self
    }

    /// Sets an arbitrary attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.set(key, value);
        self
    }

    /// Sets the value, overriding the bound model value.
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.attrs.set(attr::VALUE, value);
        self
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.attrs.set(attr::TITLE, title);
        self
    }

    /// Disables the element.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.attrs.set(attr::DISABLED, attr::DISABLED);
        self
    }

    /// Sets the checked state, overriding the bound model value.
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    /// Attaches another behavior.
    #[must_use]
    pub fn behavior(mut self, behavior: Rc<dyn Behavior>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    /// Applies the behaviors in order and renders the markup.
    pub fn render(mut self) -> String {
        self.seed_defaults();

        let mut target = RenderTarget {
            name: &self.name,
            kind: self.kind,
            binding: self.binding.as_ref(),
            attrs: &mut self.attrs,
        };
        for behavior in &self.behaviors {
            behavior.apply(&mut target);
        }
        trace!(
            name = %self.name,
            kind = %self.kind,
            behaviors = self.behaviors.len(),
            "rendering input"
        );

        self.to_html()
    }

    fn seed_defaults(&mut self) {
        self.attrs.set_default(attr::ID, id_from_name(&self.name));

        let model_value = self
            .binding
            .as_ref()
            .and_then(|binding| binding.model_value.as_deref());

        match self.kind {
            InputKind::Text => {
                if let Some(value) = model_value {
                    self.attrs.set_default(attr::VALUE, value);
                }
            }
            // Model values are never echoed into password fields.
            InputKind::Password => self.attrs.set_default(attr::VALUE, ""),
            InputKind::Checkbox => {
                self.attrs.set_default(attr::VALUE, "true");
                let checked = self
                    .checked
                    .unwrap_or_else(|| model_value.is_some_and(|v| v.eq_ignore_ascii_case("true")));
                if checked {
                    self.attrs.set(attr::CHECKED, attr::CHECKED);
                } else {
                    self.attrs.remove(attr::CHECKED);
                }
            }
        }
    }

    fn to_html(&self) -> String {
        let name = html_escape(&self.name);
        let extra_attrs: String = self
            .attrs
            .iter()
            .filter(|(k, _)| *k != attr::NAME && *k != attr::TYPE)
            .map(|(k, v)| format!(r#" {k}="{}""#, html_escape(v)))
            .collect();

        let mut html = format!(r#"<input type="{}" name="{name}"{extra_attrs}/>"#, self.kind);
        if self.kind == InputKind::Checkbox {
            html.push_str(&format!(r#"<input type="hidden" name="{name}" value="false"/>"#));
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("text".parse::<InputKind>().unwrap(), InputKind::Text);
        assert_eq!("checkbox".parse::<InputKind>().unwrap(), InputKind::Checkbox);
        let err = "radio".parse::<InputKind>().unwrap_err();
        assert!(matches!(err, InputError::UnsupportedKind(k) if k == "radio"));
    }

    #[test]
    fn test_empty_name_fails() {
        let err = Element::text_box("  ", None, Vec::new()).unwrap_err();
        assert!(matches!(err, InputError::EmptyName));
    }

    #[test]
    fn test_invalid_name_fails() {
        assert!(matches!(
            Element::text_box("bad name", None, Vec::new()),
            Err(InputError::InvalidName(_))
        ));
        assert!(validate_member_path("Items[0].Name").is_ok());
        assert!(validate_member_path("Address.City").is_ok());
        assert!(validate_member_path("Items[x]").is_err());
        assert!(validate_member_path("[0].Name").is_ok());
        assert!(validate_member_path("[0]").is_err());
        assert!(validate_member_path("[0].[1].Name").is_err());
    }

    #[test]
    fn test_text_box_renders_name_type_and_id() {
        let html = Element::text_box("Price", None, Vec::new())
            .unwrap()
            .render();
        assert_eq!(html, r#"<input type="text" name="Price" id="Price"/>"#);
    }

    #[test]
    fn test_text_box_uses_model_value() {
        let binding = MemberBinding::new("Price").model_value("9.99");
        let html = Element::text_box("Price", Some(binding), Vec::new())
            .unwrap()
            .render();
        assert!(html.contains(r#"value="9.99""#));
    }

    #[test]
    fn test_explicit_value_wins_over_model_value() {
        let binding = MemberBinding::new("Price").model_value("9.99");
        let html = Element::text_box("Price", Some(binding), Vec::new())
            .unwrap()
            .value("1.00")
            .render();
        assert!(html.contains(r#"value="1.00""#));
        assert!(!html.contains("9.99"));
    }

    #[test]
    fn test_password_never_shows_model_value() {
        let binding = MemberBinding::new("Password").model_value("secret");
        let html = Element::password("Password", Some(binding), Vec::new())
            .unwrap()
            .render();
        assert!(html.contains(r#"type="password""#));
        assert!(html.contains(r#"value="""#));
        assert!(!html.contains("secret"));
    }

    #[test]
    fn test_checkbox_checked_from_model() {
        let binding = MemberBinding::new("Done").model_value("true");
        let html = Element::check_box("Done", Some(binding), Vec::new())
            .unwrap()
            .render();
        assert!(html.contains(r#"type="checkbox""#));
        assert!(html.contains(r#"value="true""#));
        assert!(html.contains(r#"checked="checked""#));
        assert!(html.ends_with(r#"<input type="hidden" name="Done" value="false"/>"#));
    }

    #[test]
    fn test_checkbox_explicit_unchecked() {
        let binding = MemberBinding::new("Done").model_value("true");
        let html = Element::check_box("Done", Some(binding), Vec::new())
            .unwrap()
            .checked(false)
            .render();
        assert!(!html.contains("checked"));
    }

    #[test]
    fn test_fluent_configuration() {
        let html = Element::text_box("Items[0].Name", None, Vec::new())
            .unwrap()
            .class("a")
            .class("b")
            .title("Name")
            .disabled()
            .attr("placeholder", "<name>")
            .render();
        assert!(html.contains(r#"id="Items_0_Name""#));
        assert!(html.contains(r#"class="a b""#));
        assert!(html.contains(r#"title="Name""#));
        assert!(html.contains(r#"disabled="disabled""#));
        assert!(html.contains(r#"placeholder="&lt;name&gt;""#));
    }

    #[test]
    fn test_name_and_type_attributes_cannot_be_overridden() {
        let html = Element::text_box("Price", None, Vec::new())
            .unwrap()
            .attr("name", "Other")
            .attr("type", "hidden")
            .render();
        assert!(html.contains(r#"name="Price""#));
        assert!(html.contains(r#"type="text""#));
        assert!(!html.contains("Other"));
        assert!(!html.contains("hidden"));
    }
}
