//! Contact form with blur validation and simulated submission.

use dioxus::prelude::*;
use folio_core::form::{ContactForm, Field, FieldKind, deliver};
use folio_core::interaction::focus_style;

use super::toast::use_toast;
use crate::submit::SimulatedSubmitter;

#[component]
pub fn ContactSection(submit_delay_ms: u32) -> Element {
    let mut form = use_signal(ContactForm::new);
    let mut toast = use_toast();

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let message = match form.write().begin_submit() {
            Ok(message) => message,
            Err(rejection) => {
                if let Some((kind, text)) = rejection.notice() {
                    toast.show(kind, text);
                }
                return;
            }
        };
        let mut form = form;
        let mut toast = toast;
        spawn(async move {
            let submitter = SimulatedSubmitter {
                delay_ms: submit_delay_ms,
            };
            let outcome = deliver(&submitter, &message).await;
            let (kind, text) = form.write().finish_submit(&outcome);
            toast.show(kind, text);
        });
    };

    let snapshot = form.read();
    let fields: Vec<Field> = snapshot.fields().to_vec();
    let label = snapshot.submit_label();
    let disabled = snapshot.submit_disabled();
    drop(snapshot);

    rsx! {
        section { id: "contact", class: "contact",
            h2 { class: "section-title fade-up", "Get In Touch" }
            form {
                class: "contact-form slide-up",
                novalidate: true,
                onsubmit: on_submit,
                for field in fields {
                    FormField {
                        key: "{field.name}",
                        field: field.clone(),
                        on_input: move |(name, value): (&'static str, String)| {
                            form.write().input(name, value);
                        },
                        on_blur: move |name: &'static str| {
                            form.write().blur(name);
                        },
                    }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: disabled,
                    "{label}"
                }
            }
        }
    }
}

#[component]
fn FormField(
    field: Field,
    on_input: EventHandler<(&'static str, String)>,
    on_blur: EventHandler<&'static str>,
) -> Element {
    let mut focused = use_signal(|| false);
    let style = focus_style(focused());

    let name = field.name;
    let mut group_class = String::from("form-group");
    if let Some(state_class) = field.state.class() {
        group_class.push(' ');
        group_class.push_str(state_class);
    }
    let input_type = if field.kind == FieldKind::Email { "email" } else { "text" };
    let field_style = style.field.to_inline();
    let group_style = style.container.to_inline();

    rsx! {
        div { class: "{group_class}", style: "{group_style}",
            label { r#for: "{name}", "{field.label}" }
            if field.kind == FieldKind::TextArea {
                textarea {
                    id: "{name}",
                    name: "{name}",
                    class: "form-input",
                    rows: 5,
                    required: field.required,
                    style: "{field_style}",
                    value: "{field.value}",
                    oninput: move |e| on_input.call((name, e.value())),
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| {
                        focused.set(false);
                        on_blur.call(name);
                    },
                }
            } else {
                input {
                    id: "{name}",
                    name: "{name}",
                    class: "form-input",
                    r#type: input_type,
                    required: field.required,
                    style: "{field_style}",
                    value: "{field.value}",
                    oninput: move |e| on_input.call((name, e.value())),
                    onfocus: move |_| focused.set(true),
                    onblur: move |_| {
                        focused.set(false);
                        on_blur.call(name);
                    },
                }
            }
            if let Some(message) = field.state.message() {
                span { class: "error-message", "{message}" }
            }
        }
    }
}
