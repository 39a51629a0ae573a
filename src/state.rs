//! Form-state engine
//!
//! The rendering core does not own UI state; it reads it through the
//! [`FormStateView`] contract. [`FormSession`] is the in-memory engine this
//! crate provides: it tracks the current value, touched flag, and validation
//! error of every field for one active form display session, and gates the
//! submit hook on the whole-form enablement rule.
//!
//! Per-field lifecycle: a field starts untouched, becomes touched on its
//! first change, and from then on flips between valid and invalid as values
//! change. There is no terminal state; the session lives as long as the form
//! is on screen.

use crate::validators::{FieldValidator, ValueSnapshot};
use std::collections::{HashMap, HashSet};

/// Read-only view of form state, as required by the render dispatch.
///
/// Implemented by [`FormSession`]; hosts embedding the crate in another
/// state engine implement this over their own storage.
pub trait FormStateView {
	/// Current value of a field; empty when the field is unknown.
	fn value(&self, key: &str) -> &str;

	/// Current validation error message of a field, if any.
	fn error(&self, key: &str) -> Option<&str>;

	/// Whether the field has received at least one interaction.
	fn is_touched(&self, key: &str) -> bool;

	/// Whether any field currently has a validation error.
	fn has_errors(&self) -> bool;

	/// Whether any field has been interacted with yet.
	fn any_touched(&self) -> bool;
}

/// Hook invoked with the full current value map on an enabled submission.
pub type SubmitHook = Box<dyn Fn(&ValueSnapshot) + Send + Sync>;

/// In-memory form-state engine for one form display session.
///
/// Created seeded with initial values, no touched fields, and no errors.
/// Every value change marks the field touched and revalidates the whole
/// form, because validators may read sibling values from the snapshot.
///
/// # Examples
///
/// ```
/// use schema_forms::state::{FormSession, FormStateView};
/// use schema_forms::validators::RequiredValidator;
/// use std::collections::HashMap;
///
/// let mut initial = HashMap::new();
/// initial.insert("Query".to_string(), String::new());
///
/// let mut session = FormSession::new(initial);
/// session.register_validator("Query", RequiredValidator::new().boxed());
/// assert!(!session.submit_enabled());
///
/// session.set_value("Query", "My payslip is wrong");
/// assert!(session.is_touched("Query"));
/// assert!(session.submit_enabled());
/// ```
pub struct FormSession {
	values: ValueSnapshot,
	touched: HashSet<String>,
	errors: HashMap<String, String>,
	validators: HashMap<String, FieldValidator>,
	on_submit: Option<SubmitHook>,
}

impl FormSession {
	/// Create a session seeded with the given initial values.
	pub fn new(initial: ValueSnapshot) -> Self {
		Self {
			values: initial,
			touched: HashSet::new(),
			errors: HashMap::new(),
			validators: HashMap::new(),
			on_submit: None,
		}
	}

	/// Associate a validation function with a field key.
	///
	/// Registering a second validator for the same key replaces the first.
	pub fn register_validator(&mut self, key: impl Into<String>, validator: FieldValidator) {
		self.validators.insert(key.into(), validator);
	}

	/// Install the hook invoked when an enabled submission is triggered.
	pub fn set_on_submit(&mut self, hook: impl Fn(&ValueSnapshot) + Send + Sync + 'static) {
		self.on_submit = Some(Box::new(hook));
	}

	/// Record a user interaction: store the value, mark the field touched,
	/// and revalidate the whole form.
	pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<String>) {
		let key = key.into();
		self.values.insert(key.clone(), value.into());
		self.touched.insert(key);
		self.revalidate();
	}

	/// All current values, keyed by field label.
	pub fn values(&self) -> &ValueSnapshot {
		&self.values
	}

	/// All current error messages, keyed by field label.
	pub fn errors(&self) -> &HashMap<String, String> {
		&self.errors
	}

	/// Whether submission is currently allowed: no field invalid, and at
	/// least one field touched.
	pub fn submit_enabled(&self) -> bool {
		!self.has_errors() && self.any_touched()
	}

	/// Trigger submission. Invokes the hook with the full value map when
	/// enabled; otherwise does nothing and reports `false`.
	pub fn submit(&self) -> bool {
		if !self.submit_enabled() {
			tracing::debug!(
				errors = self.errors.len(),
				touched = self.touched.len(),
				"submission blocked"
			);
			return false;
		}
		if let Some(hook) = &self.on_submit {
			hook(&self.values);
		}
		true
	}

	/// Run every registered validator against the current values.
	///
	/// Validators are pure in `(value, snapshot)`, so the iteration order of
	/// the registry does not affect the outcome.
	fn revalidate(&mut self) {
		let mut errors = HashMap::new();
		for (key, validator) in &self.validators {
			let value = self.values.get(key).map(String::as_str).unwrap_or("");
			if let Some(error) = validator(value, &self.values) {
				errors.insert(key.clone(), error.to_string());
			}
		}
		self.errors = errors;
	}
}

impl FormStateView for FormSession {
	fn value(&self, key: &str) -> &str {
		self.values.get(key).map(String::as_str).unwrap_or("")
	}

	fn error(&self, key: &str) -> Option<&str> {
		self.errors.get(key).map(String::as_str)
	}

	fn is_touched(&self, key: &str) -> bool {
		self.touched.contains(key)
	}

	fn has_errors(&self) -> bool {
		!self.errors.is_empty()
	}

	fn any_touched(&self) -> bool {
		!self.touched.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::validators::{DateDependencyValidator, RequiredValidator};
	use std::sync::Arc;
	use std::sync::Mutex;

	fn session_with_required(keys: &[&str]) -> FormSession {
		let initial = keys
			.iter()
			.map(|key| (key.to_string(), String::new()))
			.collect();
		let mut session = FormSession::new(initial);
		for key in keys {
			session.register_validator(*key, RequiredValidator::new().boxed());
		}
		session
	}

	#[test]
	fn fresh_session_is_untouched_and_error_free() {
		let session = session_with_required(&["Query"]);

		assert_eq!(session.value("Query"), "");
		assert!(!session.is_touched("Query"));
		assert!(!session.has_errors());
		assert!(!session.any_touched());
		assert!(!session.submit_enabled());
	}

	#[test]
	fn set_value_touches_and_revalidates() {
		let mut session = session_with_required(&["Query"]);

		session.set_value("Query", "");
		assert!(session.is_touched("Query"));
		assert_eq!(session.error("Query"), Some("Required"));

		session.set_value("Query", "filled in");
		assert_eq!(session.error("Query"), None);
	}

	#[test]
	fn changing_one_field_revalidates_its_siblings() {
		let mut initial = ValueSnapshot::new();
		initial.insert("What does your enquiry relate to?".to_string(), String::new());
		initial.insert("Date of payslip".to_string(), String::new());

		let mut session = FormSession::new(initial);
		session.register_validator(
			"Date of payslip",
			DateDependencyValidator::new().boxed(),
		);

		// Touch only the select; the date field's rule re-runs anyway.
		session.set_value("What does your enquiry relate to?", "Incorrect Pay");
		assert_eq!(session.error("Date of payslip"), Some("Required"));

		session.set_value("What does your enquiry relate to?", "Change of Address");
		assert_eq!(session.error("Date of payslip"), None);
	}

	#[test]
	fn submit_is_gated_on_enablement() {
		let submitted: Arc<Mutex<Vec<ValueSnapshot>>> = Arc::new(Mutex::new(vec![]));
		let sink = Arc::clone(&submitted);

		let mut session = session_with_required(&["Query"]);
		session.set_on_submit(move |values| {
			sink.lock().unwrap().push(values.clone());
		});

		// Untouched: blocked.
		assert!(!session.submit());
		assert!(submitted.lock().unwrap().is_empty());

		// Touched but invalid: still blocked.
		session.set_value("Query", "");
		assert!(!session.submit());
		assert!(submitted.lock().unwrap().is_empty());

		// Valid: the hook receives the full value map.
		session.set_value("Query", "My expense claim is missing");
		assert!(session.submit());
		let runs = submitted.lock().unwrap();
		assert_eq!(runs.len(), 1);
		assert_eq!(runs[0]["Query"], "My expense claim is missing");
	}

	#[test]
	fn emptying_a_required_field_disables_submission_again() {
		let mut session = session_with_required(&["Query", "Topic"]);

		session.set_value("Query", "text");
		session.set_value("Topic", "Pay");
		assert!(session.submit_enabled());

		session.set_value("Topic", "");
		assert!(!session.submit_enabled());
	}
}
