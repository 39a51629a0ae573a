//! Schema normalization and initial-value derivation
//!
//! Normalization turns a raw [`PropertyCollection`] into the collection a
//! form is actually built from: header text (`subtitle`) is stripped, and a
//! submit action is guaranteed to exist even when the schema supplies no
//! custom button text. Both operations here are pure; they never mutate the
//! input and are safe to re-run on every render.

use crate::schema::{FieldKind, Property, PropertyCollection};
use std::collections::HashMap;

/// Label of the submit button injected when the schema does not name one.
pub const DEFAULT_SUBMIT_LABEL: &str = "Submit";

/// Derive the renderable field collection from a raw schema collection.
///
/// - The `subtitle` kind is removed; it is rendered separately as header
///   text by the orchestrator.
/// - A `submitButton` entry is guaranteed: a non-empty custom entry is kept
///   as declared, while a missing or empty one is replaced by a synthetic
///   one-element sequence labeled [`DEFAULT_SUBMIT_LABEL`]. A key present
///   with an empty sequence counts as "no custom submit text", exactly like
///   an absent key.
/// - Unrecognized kinds pass through untouched; the render dispatch turns
///   them into no-ops.
///
/// The function is idempotent: `normalize(&normalize(&c))` equals
/// `normalize(&c)` for every collection `c`.
///
/// # Examples
///
/// ```
/// use schema_forms::normalize::{DEFAULT_SUBMIT_LABEL, normalize};
/// use schema_forms::schema::{FieldKind, Property, PropertyCollection};
///
/// let raw = PropertyCollection::from_iter([
/// 	(FieldKind::Subtitle, vec![Property::string("Please read carefully")]),
/// 	(FieldKind::TextArea, vec![Property::string("Query")]),
/// ]);
///
/// let fields = normalize(&raw);
/// assert!(fields.get(&FieldKind::Subtitle).is_empty());
/// assert_eq!(fields.get(&FieldKind::SubmitButton).len(), 1);
/// assert_eq!(
/// 	fields.get(&FieldKind::SubmitButton)[0].description(),
/// 	DEFAULT_SUBMIT_LABEL,
/// );
/// ```
pub fn normalize(properties: &PropertyCollection) -> PropertyCollection {
	let mut fields = PropertyCollection::new();

	for (kind, declared) in properties.iter() {
		if *kind == FieldKind::Subtitle || declared.is_empty() {
			continue;
		}
		fields.insert(kind.clone(), declared.to_vec());
	}

	if !fields.has_entries(&FieldKind::SubmitButton) {
		tracing::debug!("schema supplies no submit button text, injecting default");
		fields.insert(
			FieldKind::SubmitButton,
			vec![Property::string(DEFAULT_SUBMIT_LABEL)],
		);
	}

	fields
}

/// Flatten a normalized field collection into the starting form values.
///
/// Every property under a non-special, recognized kind contributes one entry
/// keyed by its `description`, valued by the empty string. Entries are
/// written in kind order, then declaration order within a kind; the returned
/// map itself carries no iteration-order contract.
///
/// Duplicate descriptions collapse by last write wins, and each collision is
/// reported through `tracing` (the schema invariant says labels are unique
/// within a form, so a collision is a schema defect, not a crash).
///
/// # Examples
///
/// ```
/// use schema_forms::normalize::{initial_values, normalize};
/// use schema_forms::schema::{FieldKind, Property, PropertyCollection};
///
/// let fields = normalize(&PropertyCollection::from_iter([
/// 	(FieldKind::Select, vec![Property::choices("Topic", ["A", "B"])]),
/// 	(FieldKind::TextArea, vec![Property::string("Query")]),
/// ]));
///
/// let values = initial_values(&fields);
/// assert_eq!(values.len(), 2);
/// assert_eq!(values["Topic"], "");
/// assert_eq!(values["Query"], "");
/// ```
pub fn initial_values(fields: &PropertyCollection) -> HashMap<String, String> {
	let mut values = HashMap::new();

	for (kind, properties) in fields.iter() {
		if kind.is_special() || kind.is_unknown() {
			continue;
		}
		for property in properties {
			let label = property.description();
			if values.insert(label.to_string(), String::new()).is_some() {
				tracing::warn!(%label, "duplicate field label; the later field wins");
			}
		}
	}

	values
}
