//! Inquiry modal component
//!
//! The dialog that collects an inquiry and hands it to the submission flow.
//! Field values, error slots and presentation side effects are adapted onto
//! the flow's capabilities over Dioxus signals.

use dioxus::prelude::*;
use std::collections::HashMap;

use crate::inquiry::{
    Field, FormFieldStore, InquiryClient, InquirySurface, SubmissionFlow, TimerDelay,
};

/// Product options offered in the interest select.
const INTEREST_OPTIONS: &[(&str, &str)] = &[
    ("forestry", "Forestry Credits"),
    ("dac", "Direct Air Capture"),
    ("renewables", "Renewable Energy Certificates"),
    ("blue-carbon", "Blue Carbon"),
];

/// Annual volume brackets, in tonnes.
const VOLUME_OPTIONS: &[(&str, &str)] = &[
    ("under-1000", "Under 1,000 t"),
    ("1000-10000", "1,000 \u{2013} 10,000 t"),
    ("10000-50000", "10,000 \u{2013} 50,000 t"),
    ("over-50000", "Over 50,000 t"),
];

/// [`FormFieldStore`] over the modal's field signals.
#[derive(Clone, Copy)]
struct ModalFormStore {
    company: Signal<String>,
    name: Signal<String>,
    email: Signal<String>,
    phone: Signal<String>,
    interest: Signal<String>,
    volume: Signal<String>,
    message: Signal<String>,
    errors: Signal<HashMap<Field, String>>,
}

impl ModalFormStore {
    fn field(&self, field: Field) -> Signal<String> {
        match field {
            Field::Company => self.company,
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Phone => self.phone,
            Field::Interest => self.interest,
            Field::Volume => self.volume,
            Field::Message => self.message,
        }
    }
}

impl FormFieldStore for ModalFormStore {
    fn value(&self, field: Field) -> String {
        self.field(field)()
    }

    fn set_error(&mut self, field: Field, message: &str) {
        self.errors.write().insert(field, message.to_string());
    }

    fn clear_errors(&mut self) {
        self.errors.write().clear();
    }

    fn reset(&mut self) {
        for field in Field::ALL {
            self.field(*field).set(String::new());
        }
    }
}

/// [`InquirySurface`] over the modal's presentation signals.
#[derive(Clone, Copy)]
struct ModalSurface {
    open: Signal<bool>,
    is_submitting: Signal<bool>,
    success_visible: Signal<bool>,
    alert_message: Signal<Option<String>>,
}

impl InquirySurface for ModalSurface {
    fn set_submitting(&mut self, busy: bool) {
        self.is_submitting.set(busy);
    }

    fn show_success(&mut self) {
        self.success_visible.set(true);
    }

    fn alert(&mut self, message: &str) {
        self.alert_message.set(Some(message.to_string()));
    }

    fn close_modal(&mut self) {
        self.open.set(false);
        self.success_visible.set(false);
    }
}

/// Inquiry modal. The parent owns the `open` signal; the flow closes it
/// again after a successful submission.
#[component]
pub fn InquiryModal(open: Signal<bool>) -> Element {
    let mut company = use_signal(String::new);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut interest = use_signal(String::new);
    let mut volume = use_signal(String::new);
    let mut message = use_signal(String::new);
    let errors = use_signal(HashMap::<Field, String>::new);

    let is_submitting = use_signal(|| false);
    let success_visible = use_signal(|| false);
    let mut alert_message = use_signal(|| None::<String>);

    let store = ModalFormStore {
        company,
        name,
        email,
        phone,
        interest,
        volume,
        message,
        errors,
    };
    let surface = ModalSurface {
        open,
        is_submitting,
        success_visible,
        alert_message,
    };

    // Backdrop click and the close button: discard the draft entirely.
    let close = move |_| {
        let mut store = store;
        let mut surface = surface;
        store.reset();
        store.clear_errors();
        alert_message.set(None);
        surface.close_modal();
    };

    let handle_submit = move |_| {
        if is_submitting() {
            return;
        }

        spawn(async move {
            alert_message.set(None);
            let mut flow =
                SubmissionFlow::new(store, surface, InquiryClient::from_location(), TimerDelay);
            let outcome = flow.submit().await;
            tracing::debug!(?outcome, state = ?flow.state(), "inquiry flow settled");
        });
    };

    let error_for = move |field: Field| errors().get(&field).cloned();

    rsx! {
        div {
            id: "inquiryModal",
            class: if open() { "modal-backdrop active" } else { "modal-backdrop" },
            onclick: close,

            div {
                class: "modal-content",
                onclick: move |e| e.stop_propagation(),

                div {
                    class: "flex items-start justify-between mb-6",
                    div {
                        h2 { class: "text-2xl font-bold text-gray-900", "Request a Quote" }
                        p {
                            class: "text-gray-600 text-sm mt-1",
                            "Tell us about your offsetting needs and we'll be in touch within one business day."
                        }
                    }
                    button {
                        class: "text-gray-400 hover:text-gray-600 text-2xl leading-none",
                        onclick: close,
                        "\u{00d7}"
                    }
                }

                if success_visible() {
                    div {
                        id: "successMessage",
                        class: "bg-green-50 border border-green-200 text-green-700 p-4 rounded-lg mb-4",
                        "Thank you! Your inquiry has been received."
                    }
                }

                form {
                    id: "inquiryForm",
                    class: "space-y-4",
                    onsubmit: handle_submit,

                    if let Some(msg) = alert_message() {
                        div {
                            class: "bg-red-50 border border-red-200 text-red-700 p-3 rounded-lg text-sm",
                            "{msg}"
                        }
                    }

                    // Company
                    div {
                        label {
                            r#for: "company",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Company "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            id: Field::Company.id(),
                            r#type: "text",
                            value: "{company}",
                            oninput: move |e| company.set(e.value()),
                            placeholder: "Acme Industries",
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500"
                        }
                        if let Some(msg) = error_for(Field::Company) {
                            span { class: "error-message", "{msg}" }
                        }
                    }

                    // Contact name
                    div {
                        label {
                            r#for: "name",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Contact Name "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            id: Field::Name.id(),
                            r#type: "text",
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                            placeholder: "Jane Doe",
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500"
                        }
                        if let Some(msg) = error_for(Field::Name) {
                            span { class: "error-message", "{msg}" }
                        }
                    }

                    // Email
                    div {
                        label {
                            r#for: "email",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Work Email "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            id: Field::Email.id(),
                            r#type: "email",
                            value: "{email}",
                            oninput: move |e| email.set(e.value()),
                            placeholder: "jane@acme.example",
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500"
                        }
                        if let Some(msg) = error_for(Field::Email) {
                            span { class: "error-message", "{msg}" }
                        }
                    }

                    // Phone
                    div {
                        label {
                            r#for: "phone",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Phone "
                            span { class: "text-red-500", "*" }
                        }
                        input {
                            id: Field::Phone.id(),
                            r#type: "tel",
                            value: "{phone}",
                            oninput: move |e| phone.set(e.value()),
                            placeholder: "(555) 123-4567",
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500"
                        }
                        if let Some(msg) = error_for(Field::Phone) {
                            span { class: "error-message", "{msg}" }
                        }
                    }

                    // Interest
                    div {
                        label {
                            r#for: "interest",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Product of Interest "
                            span { class: "text-red-500", "*" }
                        }
                        select {
                            id: Field::Interest.id(),
                            value: "{interest}",
                            onchange: move |e| interest.set(e.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500 bg-white",
                            option { value: "", "Select a product" }
                            for (value, label) in INTEREST_OPTIONS {
                                option { value: "{value}", "{label}" }
                            }
                        }
                        if let Some(msg) = error_for(Field::Interest) {
                            span { class: "error-message", "{msg}" }
                        }
                    }

                    // Volume (optional)
                    div {
                        label {
                            r#for: "volume",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Estimated Annual Volume"
                        }
                        select {
                            id: Field::Volume.id(),
                            value: "{volume}",
                            onchange: move |e| volume.set(e.value()),
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500 bg-white",
                            option { value: "", "Not sure yet" }
                            for (value, label) in VOLUME_OPTIONS {
                                option { value: "{value}", "{label}" }
                            }
                        }
                    }

                    // Message (optional)
                    div {
                        label {
                            r#for: "message",
                            class: "block text-sm font-medium text-gray-700 mb-1",
                            "Message"
                        }
                        textarea {
                            id: Field::Message.id(),
                            value: "{message}",
                            oninput: move |e| message.set(e.value()),
                            placeholder: "Anything else we should know?",
                            rows: "3",
                            class: "w-full px-4 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-green-500 resize-none"
                        }
                    }

                    button {
                        id: "submitBtn",
                        r#type: "submit",
                        class: "w-full py-3 bg-green-600 text-white rounded-lg hover:bg-green-700 transition-colors font-medium disabled:opacity-50 disabled:cursor-not-allowed",
                        disabled: is_submitting(),
                        if is_submitting() {
                            "Submitting..."
                        } else {
                            "Submit Inquiry"
                        }
                    }
                }
            }
        }
    }
}
