//! Schema model for dynamically rendered forms
//!
//! The types here describe a restricted subset of the OpenAPI "Schema Object"
//! model: a form is a titled collection of properties, grouped by the kind of
//! input control each property should become. Schema values are immutable
//! data supplied whole by a [`crate::source::FormSource`]; the rest of the
//! crate only derives new collections from them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Optional `format` refinement for string properties.
///
/// OpenAPI primitives support an optional `format` parameter. Only `date`
/// affects rendering and validation in this crate; the other formats are
/// accepted for schema fidelity and otherwise treated as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StringFormat {
	Date,
	DateTime,
	Password,
}

/// A single schema property, tagged by its `type`.
///
/// The `description` doubles as the visible field label and as the unique
/// field key within one form. Duplicate descriptions therefore collide in
/// form state; see [`crate::normalize::initial_values`] for the documented
/// last-write-wins policy.
///
/// # Examples
///
/// ```
/// use schema_forms::schema::{Property, StringFormat};
///
/// let query = Property::string("Query");
/// assert_eq!(query.description(), "Query");
/// assert_eq!(query.format(), None);
///
/// let date = Property::string_with_format("Date of payslip", StringFormat::Date);
/// assert_eq!(date.format(), Some(StringFormat::Date));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Property {
	/// A plain string value, optionally refined by a [`StringFormat`].
	String {
		description: String,
		#[serde(default, skip_serializing_if = "Option::is_none")]
		format: Option<StringFormat>,
	},
	/// An ordered sequence of properties. The schema permits arbitrary
	/// nesting; nested arrays are accepted but not renderable.
	Array {
		description: String,
		items: Vec<Property>,
	},
	/// An ordered sequence of string literals. Schema-representable but
	/// never rendered as a control.
	Enum {
		description: String,
		#[serde(rename = "enum")]
		values: Vec<String>,
	},
}

impl Property {
	/// Create a plain string property.
	///
	/// # Examples
	///
	/// ```
	/// use schema_forms::schema::Property;
	///
	/// let property = Property::string("Sample field one");
	/// assert_eq!(property.description(), "Sample field one");
	/// ```
	pub fn string(description: impl Into<String>) -> Self {
		Property::String {
			description: description.into(),
			format: None,
		}
	}

	/// Create a string property carrying a format refinement.
	pub fn string_with_format(description: impl Into<String>, format: StringFormat) -> Self {
		Property::String {
			description: description.into(),
			format: Some(format),
		}
	}

	/// Create an array property from already-built item properties.
	pub fn array(description: impl Into<String>, items: Vec<Property>) -> Self {
		Property::Array {
			description: description.into(),
			items,
		}
	}

	/// Create an array property whose items are plain string leaves, one per
	/// label. This is the common shape backing a dropdown.
	///
	/// # Examples
	///
	/// ```
	/// use schema_forms::schema::Property;
	///
	/// let property = Property::choices("Status", ["Open", "Closed"]);
	/// assert_eq!(property.items().len(), 2);
	/// assert_eq!(property.items()[1].description(), "Closed");
	/// ```
	pub fn choices(
		description: impl Into<String>,
		labels: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Property::Array {
			description: description.into(),
			items: labels.into_iter().map(Property::string).collect(),
		}
	}

	/// Create an enum property.
	pub fn enumeration(
		description: impl Into<String>,
		values: impl IntoIterator<Item = impl Into<String>>,
	) -> Self {
		Property::Enum {
			description: description.into(),
			values: values.into_iter().map(Into::into).collect(),
		}
	}

	/// The display label of the property, doubling as its form-state key.
	pub fn description(&self) -> &str {
		match self {
			Property::String { description, .. }
			| Property::Array { description, .. }
			| Property::Enum { description, .. } => description,
		}
	}

	/// The format refinement, when this is a string property that has one.
	pub fn format(&self) -> Option<StringFormat> {
		match self {
			Property::String { format, .. } => *format,
			_ => None,
		}
	}

	/// The item properties of an array property; empty for other variants.
	pub fn items(&self) -> &[Property] {
		match self {
			Property::Array { items, .. } => items,
			_ => &[],
		}
	}
}

/// The kind of control a group of properties renders as.
///
/// The declaration order of the known kinds is the rendering order of a form.
/// `Subtitle` and `SubmitButton` are "special": they are rendered outside the
/// generic field pass (as header text and as the action control). Kind names
/// not recognized during deserialization are captured as [`FieldKind::Unknown`]
/// and render nothing; an unrecognized kind is never an error.
///
/// # Examples
///
/// ```
/// use schema_forms::schema::FieldKind;
///
/// assert_eq!(FieldKind::from_name("textInput"), FieldKind::TextInput);
/// assert!(FieldKind::SubmitButton.is_special());
/// assert!(FieldKind::from_name("checkbox").is_unknown());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKind {
	/// Text immediately below the form header.
	Subtitle,
	/// A standard dropdown select.
	Select,
	/// A single-line text box.
	TextInput,
	/// A multi-line text area.
	TextArea,
	/// The text of the submit button.
	SubmitButton,
	/// Any kind name this crate does not recognize.
	Unknown(String),
}

impl FieldKind {
	/// The schema name of the kind.
	pub fn name(&self) -> &str {
		match self {
			FieldKind::Subtitle => "subtitle",
			FieldKind::Select => "select",
			FieldKind::TextInput => "textInput",
			FieldKind::TextArea => "textArea",
			FieldKind::SubmitButton => "submitButton",
			FieldKind::Unknown(name) => name,
		}
	}

	/// Parse a schema kind name, capturing unrecognized names as `Unknown`.
	pub fn from_name(name: &str) -> Self {
		match name {
			"subtitle" => FieldKind::Subtitle,
			"select" => FieldKind::Select,
			"textInput" => FieldKind::TextInput,
			"textArea" => FieldKind::TextArea,
			"submitButton" => FieldKind::SubmitButton,
			other => FieldKind::Unknown(other.to_string()),
		}
	}

	/// Whether this kind is rendered outside the generic field pass.
	pub fn is_special(&self) -> bool {
		matches!(self, FieldKind::Subtitle | FieldKind::SubmitButton)
	}

	/// Whether this kind was not recognized from the schema.
	pub fn is_unknown(&self) -> bool {
		matches!(self, FieldKind::Unknown(_))
	}
}

impl Serialize for FieldKind {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(self.name())
	}
}

impl<'de> Deserialize<'de> for FieldKind {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let name = String::deserialize(deserializer)?;
		Ok(FieldKind::from_name(&name))
	}
}

/// An ordered mapping from [`FieldKind`] to the properties declared under it.
///
/// Keys are unique; within a key, declaration order is rendering order.
/// Iteration visits kinds in their declaration (rendering) order. A key that
/// is absent behaves exactly like a key present with an empty sequence.
///
/// # Examples
///
/// ```
/// use schema_forms::schema::{FieldKind, Property, PropertyCollection};
///
/// let collection = PropertyCollection::from_iter([
/// 	(FieldKind::TextArea, vec![Property::string("Query")]),
/// 	(FieldKind::Select, vec![Property::choices("Topic", ["A", "B"])]),
/// ]);
///
/// // Iteration follows kind order, not insertion order.
/// let kinds: Vec<_> = collection.iter().map(|(kind, _)| kind.clone()).collect();
/// assert_eq!(kinds, vec![FieldKind::Select, FieldKind::TextArea]);
/// assert!(collection.get(&FieldKind::Subtitle).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyCollection(BTreeMap<FieldKind, Vec<Property>>);

impl PropertyCollection {
	/// Create an empty collection.
	pub fn new() -> Self {
		Self(BTreeMap::new())
	}

	/// Insert the property sequence for a kind, replacing any previous one.
	pub fn insert(&mut self, kind: FieldKind, properties: Vec<Property>) -> Option<Vec<Property>> {
		self.0.insert(kind, properties)
	}

	/// The properties declared under a kind; empty when the kind is absent.
	pub fn get(&self, kind: &FieldKind) -> &[Property] {
		self.0.get(kind).map(Vec::as_slice).unwrap_or_default()
	}

	/// Whether a kind is present with at least one property.
	pub fn has_entries(&self, kind: &FieldKind) -> bool {
		!self.get(kind).is_empty()
	}

	/// Iterate kinds in rendering order, each with its declared properties.
	pub fn iter(&self) -> impl Iterator<Item = (&FieldKind, &[Property])> {
		self.0.iter().map(|(kind, properties)| (kind, properties.as_slice()))
	}

	/// Number of kinds present (including ones with empty sequences).
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Whether no kinds are present at all.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl FromIterator<(FieldKind, Vec<Property>)> for PropertyCollection {
	fn from_iter<I: IntoIterator<Item = (FieldKind, Vec<Property>)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}

/// A complete form schema: a header title and the field properties.
///
/// Invariant: property `description`s must be unique within one form, since
/// they double as form-state keys. Violations do not fail; they degrade to
/// the last-write-wins behavior documented on
/// [`crate::normalize::initial_values`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Form {
	/// The text used for the form header.
	pub description: String,
	/// The field properties, grouped by control kind.
	pub properties: PropertyCollection,
}

impl Form {
	/// Create a form from a title and its property collection.
	///
	/// # Examples
	///
	/// ```
	/// use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection};
	///
	/// let form = Form::new(
	/// 	"Payroll Form",
	/// 	PropertyCollection::from_iter([(
	/// 		FieldKind::TextArea,
	/// 		vec![Property::string("Query")],
	/// 	)]),
	/// );
	/// assert_eq!(form.description, "Payroll Form");
	/// ```
	pub fn new(description: impl Into<String>, properties: PropertyCollection) -> Self {
		Self {
			description: description.into(),
			properties,
		}
	}
}
