//! Dynamic form rendering and validation from OpenAPI-style schemas
//!
//! This crate compiles a declarative form schema (a restricted subset of the
//! OpenAPI "Schema Object" model) into an interactive form: it derives
//! initial field values, selects the right input control per field kind,
//! applies minimal presence validation, and disables submission until
//! required fields are filled.
//!
//! ## Architecture
//!
//! ```mermaid
//! flowchart LR
//!     subgraph Schema["Schema data"]
//!         Source["FormSource"] --> Model["Form / PropertyCollection"]
//!     end
//!
//!     subgraph Core["Compilation"]
//!         Model -->|normalize| Fields["renderable fields"]
//!         Fields -->|initial_values| Session["FormSession"]
//!         Fields -->|render_field| Output["RenderedForm"]
//!     end
//!
//!     Output -->|render_html| Html["HTML adapter"]
//! ```
//!
//! - [`schema`] models the form schema itself.
//! - [`normalize`] strips header-only kinds and guarantees a submit action.
//! - [`render`] maps each field kind to its control and validation rule.
//! - [`state`] tracks values, touched flags, and errors for one session.
//! - [`form`] orchestrates the above into a [`form::RenderedForm`].
//! - [`source`] supplies schemas; [`html`] is one presentation adapter.
//!
//! ## Example
//!
//! ```
//! use schema_forms::form::FormPresenter;
//! use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection};
//!
//! let form = Form::new(
//! 	"Contact",
//! 	PropertyCollection::from_iter([
//! 		(FieldKind::TextInput, vec![Property::string("Name")]),
//! 		(FieldKind::TextArea, vec![Property::string("Message")]),
//! 	]),
//! );
//!
//! let presenter = FormPresenter::new(form);
//! let mut session = presenter.start_session();
//!
//! session.set_value("Name", "Ada");
//! session.set_value("Message", "Hello");
//! assert!(session.submit_enabled());
//!
//! let rendered = presenter.render(&session);
//! assert_eq!(rendered.title, "Contact");
//! ```

pub mod form;
pub mod html;
pub mod normalize;
pub mod render;
pub mod schema;
pub mod source;
pub mod state;
pub mod validators;

pub use form::{FormPresenter, RenderedForm};
pub use html::{html_escape, render_html};
pub use normalize::{DEFAULT_SUBMIT_LABEL, initial_values, normalize};
pub use render::{
	Control, InputType, RenderedField, SELECT_PLACEHOLDER, SelectOption, render_field,
	validator_for,
};
pub use schema::{FieldKind, Form, Property, PropertyCollection, StringFormat};
pub use source::{FormSource, StaticFormSource};
pub use state::{FormSession, FormStateView, SubmitHook};
pub use validators::{
	DEFAULT_DEPENDENCY_FIELD, DEFAULT_DEPENDENCY_TRIGGERS, DateDependencyValidator, FieldError,
	FieldValidator, RequiredValidator, ValueSnapshot,
};
