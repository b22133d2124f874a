//! # oxide-inputs
//!
//! Fluent HTML input builders that re-populate themselves from server-side
//! validation state, and convention-based view-models for model properties.
//!
//! This crate provides:
//! - Input element builders (text, password, checkbox)
//! - Render-time behaviors, including validation-state restoration
//! - Property conventions that pick a partial and value for each model member
//! - A field layout renderer for property view-models
//!
//! ## Quick Start
//!
//! ```rust
//! use std::rc::Rc;
//! use oxide_inputs::{
//!     AttemptedValue, Behavior, Element, MemberBinding, SharedValidationState,
//!     ValidationBehavior,
//! };
//!
//! // Behaviors read the state when the element renders.
//! let state = SharedValidationState::new();
//! let validation: Rc<dyn Behavior> = Rc::new(ValidationBehavior::new(state.clone()));
//!
//! state.add_error("Price", "Enter a valid price.");
//! state.set_value("Price", AttemptedValue::single("bad value"));
//!
//! let html = Element::text_box("Price", Some(MemberBinding::new("Price")), vec![validation])
//!     .unwrap()
//!     .render();
//! assert!(html.contains(r#"class="input-validation-error""#));
//! assert!(html.contains(r#"value="bad value""#));
//! ```
//!
//! ## Conventions
//!
//! ```rust
//! use oxide_inputs::conventions::ViewModelFactory;
//! use oxide_inputs::{FieldLayout, InputEnum, InputModel};
//!
//! #[derive(Debug, Clone, Copy, InputEnum)]
//! enum Status {
//!     Draft,
//!     Published,
//! }
//!
//! #[derive(InputModel)]
//! struct Post {
//!     #[input(required, max_length = 200)]
//!     title: String,
//!     status: Status,
//! }
//!
//! let post = Post { title: "Hello".to_string(), status: Status::Published };
//! let view_models = ViewModelFactory::new().create_all(&post);
//! assert_eq!(view_models[1].partial_name, "Enum");
//!
//! let html = FieldLayout::new().render_all(&view_models).unwrap();
//! assert!(html.contains(r#"<option value="Published" selected="selected">"#));
//! ```

pub mod behaviors;
mod config;
pub mod conventions;
mod element;
mod error;
pub mod html;
mod layout;
mod state;

pub use behaviors::{Behavior, MaxLengthBehavior, RequiredBehavior, ValidationBehavior};
pub use config::{
    InputConfig, DEFAULT_DATETIME_FORMAT, DEFAULT_ERROR_CLASS, DEFAULT_REQUIRED_CLASS,
};
pub use conventions::{InputEnum, InputModel, InputProperty};
pub use element::{validate_member_path, Element, InputKind, MemberBinding, RenderTarget};
pub use error::{InputError, Result};
pub use layout::{FieldLayout, PASSWORD_PARTIAL};
pub use state::{
    AttemptedValue, FieldState, RawValue, SharedValidationState, ValidationState,
    ValidationStateSource,
};

pub use oxide_inputs_derive::{InputEnum, InputModel};
