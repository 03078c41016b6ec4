// File: src/render.rs
// Purpose: Server-side HTML for the registration form using Maud

use crate::path::FieldPath;
use crate::state::FormState;
use maud::{html, Markup};
use signup_types::Gender;

const EMAIL_HELP: &str = "Enter the email you'd like to receive the newsletter on.";

/// HTML `type` of a text-like input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
    Number,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
            InputKind::Number => "number",
        }
    }
}

/// Props for [`text_input`]
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    pub label: &'a str,
    pub field_id: &'a str,
    pub value: &'a str,
    pub kind: InputKind,
    pub error: Option<&'a str>,
    /// Shown only while there is no error
    pub helper: Option<&'a str>,
    pub autofocus: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(label: &'a str, field_id: &'a str, value: &'a str) -> Self {
        Self {
            label,
            field_id,
            value,
            kind: InputKind::Text,
            error: None,
            helper: None,
            autofocus: false,
        }
    }

    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn helper(mut self, helper: &'a str) -> Self {
        self.helper = Some(helper);
        self
    }

    pub fn autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = autofocus;
        self
    }
}

/// Reusable labelled input with its inline error message
pub fn text_input(props: &TextInput<'_>) -> Markup {
    let invalid = props.error.is_some();
    // Passwords are never echoed back into the page
    let value = (props.kind != InputKind::Password).then_some(props.value);

    html! {
        div.form-control.is-invalid[invalid] {
            label for=(props.field_id) { (props.label) }
            input
                id=(props.field_id)
                name=(props.field_id)
                type=(props.kind.as_str())
                placeholder=(props.label)
                value=[value]
                aria-invalid=[invalid.then_some("true")]
                autofocus[props.autofocus];
            @if let Some(error) = props.error {
                p.form-error-message { (error) }
            } @else if let Some(helper) = props.helper {
                p.form-helper-text { (helper) }
            }
        }
    }
}

/// The whole registration form for the current state of `form`
///
/// Only errors the validation mode marks visible are rendered. The
/// description editor is present only while privacy is accepted.
pub fn form(form: &FormState) -> Markup {
    let record = form.record();

    html! {
        form method="post" novalidate {
            (bound_input(form, "First Name", FieldPath::FirstName, &record.first_name, InputKind::Text))
            (bound_input(form, "Email", FieldPath::Email, &record.email, InputKind::Email))
            (bound_input(form, "Password", FieldPath::Password, &record.password, InputKind::Password))

            (gender_select(form))

            fieldset {
                legend { "Address" }
                (bound_input(form, "City", FieldPath::AddressCity, &record.address.city, InputKind::Text))
                (bound_input(form, "State", FieldPath::AddressState, &record.address.state, InputKind::Text))
            }

            (bound_input(form, "Age", FieldPath::Age, &record.age, InputKind::Number))

            (hobbies(form))

            div.form-control {
                label {
                    input type="checkbox" name="acceptPrivacy" value="true" checked[record.accept_privacy];
                    " Accept privacy policy"
                }
            }

            @if record.accept_privacy {
                (description(form))
            }

            div.form-control {
                button type="submit" disabled[form.is_submitting()] { "Submit" }
            }
        }
    }
}

/// [`text_input`] wired to the error and focus state of `path`
fn bound_input(form: &FormState, label: &str, path: FieldPath, value: &str, kind: InputKind) -> Markup {
    let field_id = path.to_string();
    let mut props = TextInput::new(label, &field_id, value)
        .kind(kind)
        .error(form.visible_error(path))
        .autofocus(form.focused_field() == Some(path));
    if kind == InputKind::Email {
        props = props.helper(EMAIL_HELP);
    }
    text_input(&props)
}

fn gender_select(form: &FormState) -> Markup {
    let path = FieldPath::Gender;
    let field_id = path.to_string();
    let selected = form.record().gender;
    let error = form.visible_error(path);

    html! {
        div.form-control.is-invalid[error.is_some()] {
            label for=(field_id) { "Gender" }
            select id=(field_id) name=(field_id) autofocus[form.focused_field() == Some(path)] {
                option value="" selected[selected.is_none()] { "Select gender" }
                @for gender in Gender::ALL {
                    option value=(gender.as_str()) selected[selected == Some(gender)] { (gender.as_str()) }
                }
            }
            @if let Some(error) = error {
                p.form-error-message { (error) }
            }
        }
    }
}

fn hobbies(form: &FormState) -> Markup {
    let hobbies = &form.record().hobbies;
    let sequence_error = form.visible_error(FieldPath::Hobbies);

    html! {
        fieldset.hobbies.is-invalid[sequence_error.is_some()] {
            legend { "Hobbies" }
            @for (index, (id, hobby)) in hobbies.iter().enumerate() {
                @let path = FieldPath::HobbyName(index);
                @let field_id = path.to_string();
                div.hobby data-entry-id=(id.value()) {
                    (text_input(
                        &TextInput::new("Hobby Name", &field_id, &hobby.name)
                            .error(form.visible_error(path))
                            .autofocus(form.focused_field() == Some(path))
                    ))
                    button type="submit" name="remove_hobby" value=(id.value()) { "Remove" }
                }
            }
            button type="submit" name="add_hobby" value="true" { "Add Hobby" }
            @if let Some(error) = sequence_error {
                p.form-error-message { (error) }
            }
        }
    }
}

fn description(form: &FormState) -> Markup {
    let path = FieldPath::Description;
    let field_id = path.to_string();
    let error = form.visible_error(path);
    let content = form.record().description.as_deref().unwrap_or_default();

    html! {
        div.form-control.is-invalid[error.is_some()] {
            label for=(field_id) { "Description" }
            textarea id=(field_id) name=(field_id) data-rich-text="true"
                autofocus[form.focused_field() == Some(path)] { (content) }
            @if let Some(error) = error {
                p.form-error-message { (error) }
            }
        }
    }
}
