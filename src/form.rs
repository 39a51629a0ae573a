//! Form orchestration
//!
//! [`FormPresenter`] composes the rest of the crate: it derives the header
//! title and subtitle from the schema, normalizes the property collection,
//! seeds a [`FormSession`] with initial values and validators, and renders
//! the field list for the current state.
//!
//! ```mermaid
//! flowchart LR
//!     Schema["Form (schema)"] -->|normalize| Fields["PropertyCollection"]
//!     Fields -->|initial_values| Session["FormSession"]
//!     Fields -->|render_field per property| Rendered["RenderedForm"]
//!     Session -->|values / errors / touched| Rendered
//! ```

use crate::normalize::{initial_values, normalize};
use crate::render::{RenderedField, render_field, validator_for};
use crate::schema::{FieldKind, Form, Property, PropertyCollection};
use crate::state::{FormSession, FormStateView};
use crate::validators::{DateDependencyValidator, ValueSnapshot};

/// A fully rendered form: header texts plus the ordered field list.
///
/// Fields appear in kind order (dropdowns, text inputs, text areas, then the
/// submit control), and within a kind in schema declaration order. Kinds
/// that render nothing contribute no entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedForm {
	pub title: String,
	pub subtitle: Option<String>,
	pub fields: Vec<RenderedField>,
}

/// Presents one form schema: derived texts, session setup, and rendering.
///
/// The normalized field collection is computed once per presenter, at
/// construction; [`normalize`] itself stays pure, so recomputing it is
/// always safe, just redundant.
///
/// # Examples
///
/// ```
/// use schema_forms::form::FormPresenter;
/// use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection};
///
/// let form = Form::new(
/// 	"Payroll Form",
/// 	PropertyCollection::from_iter([
/// 		(FieldKind::Subtitle, vec![Property::string("Please read carefully")]),
/// 		(FieldKind::TextArea, vec![Property::string("Query")]),
/// 	]),
/// );
///
/// let presenter = FormPresenter::new(form);
/// assert_eq!(presenter.title(), "Payroll Form");
/// assert_eq!(presenter.subtitle().as_deref(), Some("Please read carefully"));
///
/// let session = presenter.start_session();
/// let rendered = presenter.render(&session);
/// // The text area plus the injected default submit control.
/// assert_eq!(rendered.fields.len(), 2);
/// ```
pub struct FormPresenter {
	form: Form,
	fields: PropertyCollection,
	date_rule: DateDependencyValidator,
}

impl FormPresenter {
	/// Create a presenter for the given schema, with the default date rule.
	pub fn new(form: Form) -> Self {
		let fields = normalize(&form.properties);
		Self {
			form,
			fields,
			date_rule: DateDependencyValidator::new(),
		}
	}

	/// Replace the cross-field rule applied to date inputs.
	pub fn with_date_rule(mut self, date_rule: DateDependencyValidator) -> Self {
		self.date_rule = date_rule;
		self
	}

	/// The header title.
	pub fn title(&self) -> &str {
		&self.form.description
	}

	/// The subtitle text: the space-joined descriptions of every `subtitle`
	/// property, or `None` when the schema declares none.
	///
	/// # Examples
	///
	/// ```
	/// use schema_forms::form::FormPresenter;
	/// use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection};
	///
	/// let form = Form::new(
	/// 	"F",
	/// 	PropertyCollection::from_iter([(
	/// 		FieldKind::Subtitle,
	/// 		vec![
	/// 			Property::string("Please"),
	/// 			Property::string("read"),
	/// 			Property::string("carefully"),
	/// 		],
	/// 	)]),
	/// );
	///
	/// let presenter = FormPresenter::new(form);
	/// assert_eq!(presenter.subtitle().as_deref(), Some("Please read carefully"));
	/// ```
	pub fn subtitle(&self) -> Option<String> {
		let subtitles = self.form.properties.get(&FieldKind::Subtitle);
		if subtitles.is_empty() {
			return None;
		}
		Some(
			subtitles
				.iter()
				.map(Property::description)
				.collect::<Vec<_>>()
				.join(" "),
		)
	}

	/// The normalized field collection backing this presenter.
	pub fn fields(&self) -> &PropertyCollection {
		&self.fields
	}

	/// The starting value map: one empty-string entry per generic field.
	pub fn initial_values(&self) -> ValueSnapshot {
		initial_values(&self.fields)
	}

	/// Start a form display session: initial values, nothing touched, no
	/// errors, and the per-kind validation rules registered.
	pub fn start_session(&self) -> FormSession {
		let mut session = FormSession::new(self.initial_values());
		for (kind, properties) in self.fields.iter() {
			for property in properties {
				if let Some(validator) = validator_for(kind, property, &self.date_rule) {
					session.register_validator(property.description(), validator);
				}
			}
		}
		session
	}

	/// Render the form for the current state.
	///
	/// Fields are visited in kind order, then declaration order; entries
	/// that render nothing (unrecognized kinds) are dropped from the output.
	pub fn render(&self, state: &dyn FormStateView) -> RenderedForm {
		let mut fields = Vec::new();
		for (kind, properties) in self.fields.iter() {
			for property in properties {
				let field = render_field(kind, property, state);
				if !field.is_empty() {
					fields.push(field);
				}
			}
		}

		RenderedForm {
			title: self.title().to_string(),
			subtitle: self.subtitle(),
			fields,
		}
	}
}
