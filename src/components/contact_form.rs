use dioxus::prelude::*;
use crate::utils::dom::alert;
use crate::utils::ContactSubmission;

/// Demo contact form. Nothing is sent anywhere.
#[component]
pub fn ContactForm() -> Element {
    let mut fields = use_signal(ContactSubmission::default);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        let notice = fields.write().submit();
        alert(notice);
    };

    rsx! {
        form { class: "contact-form glass", onsubmit: submit,
            div { class: "field",
                label { r#for: "name", "Name" }
                input {
                    id: "name",
                    name: "name",
                    r#type: "text",
                    autocomplete: "name",
                    value: fields.read().name.clone(),
                    oninput: move |evt: FormEvent| fields.write().name = evt.value(),
                }
            }
            div { class: "field",
                label { r#for: "email", "Email" }
                input {
                    id: "email",
                    name: "email",
                    r#type: "email",
                    autocomplete: "email",
                    value: fields.read().email.clone(),
                    oninput: move |evt: FormEvent| fields.write().email = evt.value(),
                }
            }
            div { class: "field",
                label { r#for: "message", "Message" }
                textarea {
                    id: "message",
                    name: "message",
                    rows: "5",
                    value: fields.read().message.clone(),
                    oninput: move |evt: FormEvent| fields.write().message = evt.value(),
                }
            }
            button { class: "btn btn-primary", r#type: "submit", "Send message" }
        }
    }
}
