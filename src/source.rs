//! Schema source collaborator
//!
//! Forms are supplied whole, as already-resolved in-memory data, by whatever
//! backs the [`FormSource`] trait. [`StaticFormSource`] is the provided
//! implementation: a fixed in-memory sequence, optionally parsed from a JSON
//! document. Transport concerns (HTTP, files, caching) stay outside this
//! crate.

use crate::schema::Form;
use anyhow::Context;

/// Supplies the finite sequence of forms to display in one session.
pub trait FormSource {
	/// The forms, in display order.
	fn forms(&self) -> anyhow::Result<Vec<Form>>;
}

/// A form source backed by a fixed in-memory sequence.
///
/// # Examples
///
/// ```
/// use schema_forms::source::{FormSource, StaticFormSource};
///
/// let source = StaticFormSource::from_json(
/// 	r#"[{ "description": "Other Form", "properties": {} }]"#,
/// )
/// .unwrap();
///
/// let forms = source.forms().unwrap();
/// assert_eq!(forms.len(), 1);
/// assert_eq!(forms[0].description, "Other Form");
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticFormSource {
	forms: Vec<Form>,
}

impl StaticFormSource {
	/// Create a source over already-built forms.
	pub fn new(forms: Vec<Form>) -> Self {
		Self { forms }
	}

	/// Parse a source from a JSON array of form schemas.
	pub fn from_json(document: &str) -> anyhow::Result<Self> {
		let forms: Vec<Form> =
			serde_json::from_str(document).context("invalid form schema document")?;
		Ok(Self::new(forms))
	}
}

impl FormSource for StaticFormSource {
	fn forms(&self) -> anyhow::Result<Vec<Form>> {
		Ok(self.forms.clone())
	}
}
