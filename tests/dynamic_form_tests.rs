//! End-to-end scenarios over the payroll enquiry schema.

mod common;

use common::{ENQUIRY_FIELD, PAYSLIP_DATE_FIELD, other_form, payroll_enquiry_form};
use rstest::rstest;
use schema_forms::form::FormPresenter;
use schema_forms::html::render_html;
use schema_forms::normalize::DEFAULT_SUBMIT_LABEL;
use schema_forms::render::Control;
use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection};
use schema_forms::source::{FormSource, StaticFormSource};
use schema_forms::state::FormStateView;

fn submit_control(presenter: &FormPresenter) -> Control {
	let session = presenter.start_session();
	presenter
		.render(&session)
		.fields
		.last()
		.expect("a rendered submit control")
		.control
		.clone()
}

#[test]
fn subtitle_concatenates_all_subtitle_descriptions() {
	let form = Form::new(
		"F",
		PropertyCollection::from_iter([(
			FieldKind::Subtitle,
			vec![
				Property::string("Please"),
				Property::string("read"),
				Property::string("carefully"),
			],
		)]),
	);

	let presenter = FormPresenter::new(form);
	assert_eq!(presenter.subtitle().as_deref(), Some("Please read carefully"));
	assert_eq!(
		presenter.render(&presenter.start_session()).subtitle.as_deref(),
		Some("Please read carefully"),
	);
}

#[rstest]
#[case::absent(false)]
#[case::empty(true)]
fn missing_submit_text_yields_the_default_submit_control(#[case] declare_empty: bool) {
	let mut properties = PropertyCollection::from_iter([(
		FieldKind::TextInput,
		vec![Property::string("Sample field one")],
	)]);
	if declare_empty {
		properties.insert(FieldKind::SubmitButton, vec![]);
	}

	let presenter = FormPresenter::new(Form::new("Other Form", properties));
	match submit_control(&presenter) {
		Control::SubmitButton { label, disabled } => {
			assert_eq!(label, DEFAULT_SUBMIT_LABEL);
			assert!(disabled);
		}
		other => panic!("expected the submit control, got {:?}", other),
	}
}

#[test]
fn custom_submit_text_is_kept() {
	let presenter = FormPresenter::new(payroll_enquiry_form());
	match submit_control(&presenter) {
		Control::SubmitButton { label, .. } => assert_eq!(label, "Submit Payroll Enquiry"),
		other => panic!("expected the submit control, got {:?}", other),
	}
}

#[test]
fn date_input_is_required_only_for_triggering_enquiry_kinds() {
	let presenter = FormPresenter::new(payroll_enquiry_form());
	let mut session = presenter.start_session();

	session.set_value(ENQUIRY_FIELD, "Incorrect Pay");
	assert_eq!(session.error(PAYSLIP_DATE_FIELD), Some("Required"));

	session.set_value(ENQUIRY_FIELD, "Missing Expense");
	assert_eq!(session.error(PAYSLIP_DATE_FIELD), Some("Required"));

	session.set_value(ENQUIRY_FIELD, "Change of Address");
	assert_eq!(session.error(PAYSLIP_DATE_FIELD), None);

	// Filling the date satisfies the rule even for a triggering kind.
	session.set_value(ENQUIRY_FIELD, "Incorrect Pay");
	session.set_value(PAYSLIP_DATE_FIELD, "2024-01-15");
	assert_eq!(session.error(PAYSLIP_DATE_FIELD), None);
}

#[test]
fn submission_unlocks_after_interaction_and_locks_on_new_errors() {
	let presenter = FormPresenter::new(payroll_enquiry_form());
	let mut session = presenter.start_session();

	// Before any interaction the submit control is disabled, valid or not.
	assert!(!session.submit_enabled());
	match presenter.render(&session).fields.last().unwrap().control {
		Control::SubmitButton { disabled, .. } => assert!(disabled),
		_ => panic!("expected the submit control last"),
	}

	// Touch every field with valid values.
	session.set_value(ENQUIRY_FIELD, "Other");
	session.set_value(PAYSLIP_DATE_FIELD, "2024-01-15");
	session.set_value("Query", "My January payslip looks wrong");
	assert!(session.submit_enabled());
	match presenter.render(&session).fields.last().unwrap().control {
		Control::SubmitButton { disabled, .. } => assert!(!disabled),
		_ => panic!("expected the submit control last"),
	}

	// Emptying one required field disables submission again.
	session.set_value("Query", "");
	assert!(!session.submit_enabled());
}

#[test]
fn unknown_kinds_contribute_nothing() {
	let mut properties = payroll_enquiry_form().properties;
	properties.insert(
		FieldKind::Unknown("ratingStars".to_string()),
		vec![Property::string("Satisfaction")],
	);

	let presenter = FormPresenter::new(Form::new("Payroll Form", properties));
	let session = presenter.start_session();

	assert!(!session.values().contains_key("Satisfaction"));
	assert_eq!(session.error("Satisfaction"), None);

	let rendered = presenter.render(&session);
	assert!(rendered.fields.iter().all(|field| !field.is_empty()));
	assert_eq!(rendered.fields.len(), 4); // select, date input, text area, submit
}

#[test]
fn nested_array_items_produce_no_dropdown_options() {
	let mut properties = payroll_enquiry_form().properties;
	properties.insert(
		FieldKind::Select,
		vec![Property::array(
			ENQUIRY_FIELD,
			vec![
				Property::string("Incorrect Pay"),
				Property::choices("Deeply nested", ["a", "b"]),
				Property::string("Other"),
			],
		)],
	);

	let presenter = FormPresenter::new(Form::new("Payroll Form", properties));
	let rendered = presenter.render(&presenter.start_session());

	match &rendered.fields[0].control {
		Control::Select { options, .. } => {
			let values: Vec<_> = options.iter().map(|option| option.value.as_str()).collect();
			assert_eq!(values, vec!["Incorrect Pay", "Other"]);
		}
		other => panic!("expected the enquiry dropdown, got {:?}", other),
	}
}

#[test]
fn a_source_backed_session_renders_to_html() {
	let source = StaticFormSource::new(vec![payroll_enquiry_form(), other_form()]);
	let forms = source.forms().unwrap();
	assert_eq!(forms.len(), 2);

	let presenter = FormPresenter::new(forms[0].clone());
	let mut session = presenter.start_session();
	session.set_value(ENQUIRY_FIELD, "Missing Expense");
	session.set_value(PAYSLIP_DATE_FIELD, "");

	let html = render_html(&presenter.render(&session));
	assert!(html.contains("<h2>Payroll Form</h2>"));
	assert!(html.contains("Please use this form for any Payroll related enquiries"));
	assert!(html.contains(r#"<option value="Missing Expense" selected>"#));
	assert!(html.contains(r#"<input type="date""#));
	assert!(html.contains(r#"<div class="form__error">Required</div>"#));
	assert!(html.contains("Submit Payroll Enquiry"));
}

#[test]
fn the_second_form_renders_independently() {
	let presenter = FormPresenter::new(other_form());
	let session = presenter.start_session();
	let rendered = presenter.render(&session);

	assert_eq!(rendered.title, "Other Form");
	assert_eq!(rendered.subtitle, None);
	// Two text inputs plus the injected default submit control.
	assert_eq!(rendered.fields.len(), 3);
	assert_eq!(
		session.values().len(),
		2,
		"only the text inputs carry values",
	);
}
