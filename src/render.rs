//! Field renderer and validator dispatch
//!
//! Maps a ([`FieldKind`], [`Property`]) pair to the control that should be
//! shown for it and to the validation rule that should guard it. The
//! dispatch emits control *descriptions* ([`Control`]); turning those into
//! concrete widgets is the job of a presentation adapter such as
//! [`crate::html`]. Unrecognized kinds map to [`Control::Empty`]: they render
//! nothing and carry no validator, by design never an error.

use crate::schema::{FieldKind, Property, StringFormat};
use crate::state::FormStateView;
use crate::validators::{DateDependencyValidator, FieldValidator, RequiredValidator};

/// Placeholder text of the disabled first option of every dropdown.
pub const SELECT_PLACEHOLDER: &str = " -- select an option -- ";

/// Subtype of a single-line text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
	Text,
	Date,
}

impl InputType {
	/// The HTML `type` attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			InputType::Text => "text",
			InputType::Date => "date",
		}
	}
}

/// One selectable entry of a dropdown control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	pub value: String,
	pub label: String,
}

/// Description of the concrete control a field renders as.
///
/// `name` is the form-state key (the property's `description`); `value` is
/// the field's current value at render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Control {
	Select {
		name: String,
		value: String,
		placeholder: String,
		options: Vec<SelectOption>,
	},
	TextInput {
		name: String,
		value: String,
		input_type: InputType,
	},
	TextArea {
		name: String,
		value: String,
	},
	SubmitButton {
		label: String,
		disabled: bool,
	},
	/// Nothing to show; produced for special and unrecognized kinds.
	Empty,
}

/// A single rendered field: an optional label element, the control, and the
/// inline error shown only once the field is touched and invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedField {
	pub label: Option<String>,
	pub control: Control,
	pub error: Option<String>,
}

impl RenderedField {
	fn control_only(control: Control) -> Self {
		Self {
			label: None,
			control,
			error: None,
		}
	}

	/// Whether this field renders nothing at all.
	pub fn is_empty(&self) -> bool {
		matches!(self.control, Control::Empty)
	}
}

/// Render a single field for the current form state.
///
/// # Examples
///
/// ```
/// use schema_forms::render::{Control, InputType, render_field};
/// use schema_forms::schema::{FieldKind, Property, StringFormat};
/// use schema_forms::state::FormSession;
/// use std::collections::HashMap;
///
/// let state = FormSession::new(HashMap::new());
/// let date = Property::string_with_format("Date of payslip", StringFormat::Date);
///
/// let field = render_field(&FieldKind::TextInput, &date, &state);
/// assert_eq!(field.label.as_deref(), Some("Date of payslip"));
/// assert!(matches!(
/// 	field.control,
/// 	Control::TextInput { input_type: InputType::Date, .. },
/// ));
/// ```
pub fn render_field(
	kind: &FieldKind,
	property: &Property,
	state: &dyn FormStateView,
) -> RenderedField {
	let name = property.description();

	match kind {
		FieldKind::Select => RenderedField {
			label: Some(name.to_string()),
			control: Control::Select {
				name: name.to_string(),
				value: state.value(name).to_string(),
				placeholder: SELECT_PLACEHOLDER.to_string(),
				options: leaf_options(property),
			},
			error: inline_error(state, name),
		},
		FieldKind::TextInput => {
			let input_type = match property.format() {
				Some(StringFormat::Date) => InputType::Date,
				_ => InputType::Text,
			};
			RenderedField {
				label: Some(name.to_string()),
				control: Control::TextInput {
					name: name.to_string(),
					value: state.value(name).to_string(),
					input_type,
				},
				error: inline_error(state, name),
			}
		}
		FieldKind::TextArea => RenderedField {
			label: Some(name.to_string()),
			control: Control::TextArea {
				name: name.to_string(),
				value: state.value(name).to_string(),
			},
			error: inline_error(state, name),
		},
		FieldKind::SubmitButton => RenderedField::control_only(Control::SubmitButton {
			label: name.to_string(),
			disabled: state.has_errors() || !state.any_touched(),
		}),
		FieldKind::Subtitle | FieldKind::Unknown(_) => {
			RenderedField::control_only(Control::Empty)
		}
	}
}

/// Select the validation rule guarding a field, if the kind has one.
///
/// Dropdowns and text areas are always required. Text inputs are required
/// unconditionally unless they carry the `date` format, in which case the
/// given cross-field rule decides. Special and unrecognized kinds carry no
/// validator.
pub fn validator_for(
	kind: &FieldKind,
	property: &Property,
	date_rule: &DateDependencyValidator,
) -> Option<FieldValidator> {
	match kind {
		FieldKind::Select | FieldKind::TextArea => Some(RequiredValidator::new().boxed()),
		FieldKind::TextInput => {
			if property.format() == Some(StringFormat::Date) {
				Some(date_rule.clone().boxed())
			} else {
				Some(RequiredValidator::new().boxed())
			}
		}
		FieldKind::Subtitle | FieldKind::SubmitButton | FieldKind::Unknown(_) => None,
	}
}

/// Dropdown options: one per leaf item, labeled and valued by its
/// description. Items that are themselves arrays cannot be rendered as an
/// option and are skipped.
fn leaf_options(property: &Property) -> Vec<SelectOption> {
	property
		.items()
		.iter()
		.filter_map(|item| match item {
			Property::Array { .. } => None,
			leaf => Some(SelectOption {
				value: leaf.description().to_string(),
				label: leaf.description().to_string(),
			}),
		})
		.collect()
}

fn inline_error(state: &dyn FormStateView, key: &str) -> Option<String> {
	if state.is_touched(key) {
		state.error(key).map(str::to_string)
	} else {
		None
	}
}
