//! Plain-HTML presentation adapter
//!
//! One concrete implementation of the presentation collaborator: renders a
//! [`RenderedForm`] to an HTML string with no framework classes beyond the
//! form's own CSS hooks. All text and attribute values pass through
//! [`html_escape`].

use crate::form::RenderedForm;
use crate::render::{Control, RenderedField};

/// HTML escape utility
pub fn html_escape(s: &str) -> String {
	s.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
		.replace('\'', "&#x27;")
}

/// Render a form to an HTML string.
///
/// # Examples
///
/// ```
/// use schema_forms::form::FormPresenter;
/// use schema_forms::html::render_html;
/// use schema_forms::schema::{FieldKind, Form, Property, PropertyCollection};
///
/// let form = Form::new(
/// 	"Payroll Form",
/// 	PropertyCollection::from_iter([(
/// 		FieldKind::TextArea,
/// 		vec![Property::string("Query")],
/// 	)]),
/// );
/// let presenter = FormPresenter::new(form);
/// let session = presenter.start_session();
///
/// let html = render_html(&presenter.render(&session));
/// assert!(html.contains("<h2>Payroll Form</h2>"));
/// assert!(html.contains(r#"<textarea name="Query">"#));
/// ```
pub fn render_html(form: &RenderedForm) -> String {
	let mut html = String::new();

	html.push_str("<div class=\"wrapper\"><header>");
	html.push_str(&format!("<h2>{}</h2>", html_escape(&form.title)));
	if let Some(subtitle) = &form.subtitle {
		html.push_str(&format!(
			"<p class=\"form__subtitle\">{}</p>",
			html_escape(subtitle)
		));
	}
	html.push_str("</header><main class=\"main-wrapper\"><form class=\"form\">");

	for field in &form.fields {
		render_field_html(&mut html, field);
	}

	html.push_str("</form></main></div>");
	html
}

fn render_field_html(html: &mut String, field: &RenderedField) {
	if let Some(label) = &field.label {
		html.push_str(&format!(
			r#"<label class="form__label" for="{0}">{0}</label>"#,
			html_escape(label)
		));
	}

	match &field.control {
		Control::Select {
			name,
			value,
			placeholder,
			options,
		} => {
			html.push_str(&format!(r#"<select name="{}">"#, html_escape(name)));
			html.push_str(&format!(
				r#"<option disabled value="">{}</option>"#,
				html_escape(placeholder)
			));
			for option in options {
				html.push_str("<option");
				html.push_str(&format!(r#" value="{}""#, html_escape(&option.value)));
				if option.value == *value {
					html.push_str(" selected");
				}
				html.push('>');
				html.push_str(&html_escape(&option.label));
				html.push_str("</option>");
			}
			html.push_str("</select>");
		}
		Control::TextInput {
			name,
			value,
			input_type,
		} => {
			html.push_str(&format!(
				r#"<input type="{}" name="{}" value="{}" />"#,
				input_type.as_str(),
				html_escape(name),
				html_escape(value)
			));
		}
		Control::TextArea { name, value } => {
			html.push_str(&format!(
				"<textarea name=\"{}\">{}</textarea>",
				html_escape(name),
				html_escape(value)
			));
		}
		Control::SubmitButton { label, disabled } => {
			html.push_str("<button type=\"submit\" class=\"form__submit\"");
			if *disabled {
				html.push_str(" disabled");
			}
			html.push('>');
			html.push_str(&html_escape(label));
			html.push_str("</button>");
		}
		Control::Empty => {}
	}

	if let Some(error) = &field.error {
		html.push_str(&format!(
			r#"<div class="form__error">{}</div>"#,
			html_escape(error)
		));
	}
}
