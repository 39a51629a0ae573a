//! Shared schema fixtures for the integration tests.

use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection, StringFormat};

/// Label of the enquiry-kind dropdown of the payroll form.
pub const ENQUIRY_FIELD: &str = "What does your enquiry relate to?";

/// Label of the conditionally required date input of the payroll form.
pub const PAYSLIP_DATE_FIELD: &str = "Date of payslip being queries (if applicable)";

/// The payroll enquiry form: subtitle, enquiry dropdown, conditional date
/// input, query text area, and a custom submit label.
pub fn payroll_enquiry_form() -> Form {
	Form::new(
		"Payroll Form",
		PropertyCollection::from_iter([
			(
				FieldKind::Subtitle,
				vec![Property::string(
					"Please use this form for any Payroll related enquiries",
				)],
			),
			(
				FieldKind::Select,
				vec![Property::choices(
					ENQUIRY_FIELD,
					[
						"Incorrect Pay",
						"Missing Expense",
						"Change of Bank Details",
						"Change of Address",
						"Other",
					],
				)],
			),
			(
				FieldKind::TextInput,
				vec![Property::string_with_format(
					PAYSLIP_DATE_FIELD,
					StringFormat::Date,
				)],
			),
			(FieldKind::TextArea, vec![Property::string("Query")]),
			(
				FieldKind::SubmitButton,
				vec![Property::string("Submit Payroll Enquiry")],
			),
		]),
	)
}

/// A minimal second form: two text inputs, everything else declared empty.
pub fn other_form() -> Form {
	Form::new(
		"Other Form",
		PropertyCollection::from_iter([
			(FieldKind::Subtitle, vec![]),
			(FieldKind::Select, vec![]),
			(
				FieldKind::TextInput,
				vec![
					Property::string("Sample field one"),
					Property::string_with_format("Sample field two", StringFormat::Date),
				],
			),
			(FieldKind::TextArea, vec![]),
			(FieldKind::SubmitButton, vec![]),
		]),
	)
}
