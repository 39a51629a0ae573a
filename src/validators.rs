//! Field validators
//!
//! Validation in this crate is deliberately minimal: the only failure a
//! field can report is that it is required and currently empty. Validators
//! are pure functions of the field's own value and a read-only snapshot of
//! every field value in the form, which is what lets the date rule depend on
//! a sibling field without reaching into UI state.

use std::collections::HashMap;

/// Read-only snapshot of all current form values, keyed by field label.
pub type ValueSnapshot = HashMap<String, String>;

/// A registered per-field validation function.
///
/// Receives the field's current value and the whole-form snapshot; returns
/// the failure to display, or `None` when the field is acceptable.
pub type FieldValidator = Box<dyn Fn(&str, &ValueSnapshot) -> Option<FieldError> + Send + Sync>;

/// A field-level validation failure.
///
/// The rendered message is the user-facing inline error text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
	#[error("Required")]
	Required,
}

/// Validates that a field holds a non-empty value.
///
/// # Examples
///
/// ```
/// use schema_forms::validators::{FieldError, RequiredValidator};
///
/// let validator = RequiredValidator::new();
/// assert_eq!(validator.validate(""), Some(FieldError::Required));
/// assert_eq!(validator.validate("anything"), None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
	/// Creates a new `RequiredValidator`.
	pub fn new() -> Self {
		Self
	}

	/// Validates the given value for presence.
	pub fn validate(&self, value: &str) -> Option<FieldError> {
		if value.is_empty() {
			Some(FieldError::Required)
		} else {
			None
		}
	}

	/// Box this validator into the registered [`FieldValidator`] shape.
	pub fn boxed(self) -> FieldValidator {
		Box::new(move |value, _snapshot| self.validate(value))
	}
}

/// Label of the field the default date rule depends on.
pub const DEFAULT_DEPENDENCY_FIELD: &str = "What does your enquiry relate to?";

/// Values of the dependency field that make date inputs required.
pub const DEFAULT_DEPENDENCY_TRIGGERS: [&str; 2] = ["Incorrect Pay", "Missing Expense"];

/// Validates a date input that is required only conditionally.
///
/// A date input is required while a designated sibling field currently holds
/// one of the trigger values; otherwise an empty date is acceptable. The
/// sibling's value is read from the [`ValueSnapshot`], so the rule stays a
/// pure function and carries no reference into live form state.
///
/// The default rule reproduces the payroll-enquiry behavior: the date is
/// required while [`DEFAULT_DEPENDENCY_FIELD`] holds one of
/// [`DEFAULT_DEPENDENCY_TRIGGERS`].
///
/// # Examples
///
/// ```
/// use schema_forms::validators::{DateDependencyValidator, FieldError};
/// use std::collections::HashMap;
///
/// let validator = DateDependencyValidator::new();
/// let mut snapshot = HashMap::new();
/// snapshot.insert(
/// 	"What does your enquiry relate to?".to_string(),
/// 	"Incorrect Pay".to_string(),
/// );
///
/// assert_eq!(validator.validate("", &snapshot), Some(FieldError::Required));
/// assert_eq!(validator.validate("2024-02-29", &snapshot), None);
/// ```
#[derive(Debug, Clone)]
pub struct DateDependencyValidator {
	field: String,
	triggers: Vec<String>,
}

impl DateDependencyValidator {
	/// Creates the default rule.
	pub fn new() -> Self {
		Self {
			field: DEFAULT_DEPENDENCY_FIELD.to_string(),
			triggers: DEFAULT_DEPENDENCY_TRIGGERS
				.iter()
				.map(|value| value.to_string())
				.collect(),
		}
	}

	/// Creates a rule depending on a custom field and trigger values.
	///
	/// # Examples
	///
	/// ```
	/// use schema_forms::validators::DateDependencyValidator;
	/// use std::collections::HashMap;
	///
	/// let validator = DateDependencyValidator::with_rule("Reason", ["Late delivery"]);
	/// let snapshot = HashMap::new();
	/// // The dependency field is absent, so the date is not required.
	/// assert_eq!(validator.validate("", &snapshot), None);
	/// ```
	pub fn with_rule(
		field: impl Into<String>,
		triggers: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Self {
			field: field.into(),
			triggers: triggers.into_iter().map(Into::into).collect(),
		}
	}

	/// Label of the field this rule depends on.
	pub fn field(&self) -> &str {
		&self.field
	}

	/// Validates the date value against the current snapshot.
	pub fn validate(&self, value: &str, snapshot: &ValueSnapshot) -> Option<FieldError> {
		let dependent = snapshot.get(&self.field).map(String::as_str).unwrap_or("");
		if self.triggers.iter().any(|trigger| trigger == dependent) && value.is_empty() {
			Some(FieldError::Required)
		} else {
			None
		}
	}

	/// Box this validator into the registered [`FieldValidator`] shape.
	pub fn boxed(self) -> FieldValidator {
		Box::new(move |value, snapshot| self.validate(value, snapshot))
	}
}

impl Default for DateDependencyValidator {
	fn default() -> Self {
		Self::new()
	}
}
