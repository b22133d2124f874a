//! Render-time behaviors attached to input elements.
//!
//! A behavior is consulted by [`Element::render`](crate::Element::render)
//! after defaults are seeded and before markup is produced. Behaviors run in
//! attachment order and may only touch the attribute bag.

mod validation;

pub use validation::ValidationBehavior;

use tracing::trace;

use crate::config::{InputConfig, DEFAULT_REQUIRED_CLASS};
use crate::element::{InputKind, RenderTarget};
use crate::html::attr;

/// A cross-cutting rule applied to elements at render time.
pub trait Behavior {
    /// Adjusts the element's attributes.
    fn apply(&self, target: &mut RenderTarget<'_>);
}

/// Merges a CSS class into elements bound to required members.
#[derive(Debug, Clone)]
pub struct RequiredBehavior {
    class: String,
}

impl RequiredBehavior {
    /// Creates the behavior with the default `required` class.
    pub fn new() -> Self {
        Self::with_class(DEFAULT_REQUIRED_CLASS)
    }

    /// Creates the behavior with a custom class.
    pub fn with_class(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
        }
    }

    /// Creates the behavior from configuration.
    pub fn from_config(config: &InputConfig) -> Self {
        Self::with_class(config.required_class.clone())
    }
}

impl Default for RequiredBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for RequiredBehavior {
    fn apply(&self, target: &mut RenderTarget<'_>) {
        if target.binding().is_some_and(|b| b.required) {
            trace!(field = target.name(), class = %self.class, "marking required");
            target.attrs_mut().add_class(&self.class);
        }
    }
}

/// Copies a bound member's maximum length into `maxlength`.
///
/// An explicitly configured `maxlength` is left alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaxLengthBehavior;

impl Behavior for MaxLengthBehavior {
    fn apply(&self, target: &mut RenderTarget<'_>) {
        if target.kind() == InputKind::Checkbox {
            return;
        }
        if let Some(max_length) = target.binding().and_then(|b| b.max_length) {
            target
                .attrs_mut()
                .set_default(attr::MAX_LENGTH, max_length.to_string());
        }
    }
}
