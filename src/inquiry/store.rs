//! Form Field Store capability
//!
//! Abstraction over wherever field values and error slots live. The modal
//! implements it over Dioxus signals; tests use [`MemoryFormStore`].

use std::collections::HashMap;

use crate::inquiry::form::{Field, InquiryForm};

/// Key-value holder for the inquiry form's values and per-field errors.
pub trait FormFieldStore {
    /// Current raw value of `field`.
    fn value(&self, field: Field) -> String;

    /// Surface an error message on `field`. Re-showing the same message is
    /// a visual no-op.
    fn set_error(&mut self, field: Field, message: &str);

    /// Clear every field error. Always called at the start of a fresh
    /// submission attempt so stale errors never persist across attempts.
    fn clear_errors(&mut self);

    /// Clear every field value.
    fn reset(&mut self);

    /// Snapshot the current values into a submission record. Free-text
    /// fields are trimmed; select fields are taken verbatim.
    fn snapshot(&self) -> InquiryForm {
        InquiryForm {
            company: self.value(Field::Company).trim().to_string(),
            name: self.value(Field::Name).trim().to_string(),
            email: self.value(Field::Email).trim().to_string(),
            phone: self.value(Field::Phone).trim().to_string(),
            interest: self.value(Field::Interest),
            volume: self.value(Field::Volume),
            message: self.value(Field::Message).trim().to_string(),
        }
    }
}

/// In-memory store, used by tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryFormStore {
    values: HashMap<Field, String>,
    errors: HashMap<Field, String>,
}

impl MemoryFormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}

impl FormFieldStore for MemoryFormStore {
    fn value(&self, field: Field) -> String {
        self.values.get(&field).cloned().unwrap_or_default()
    }

    fn set_error(&mut self, field: Field, message: &str) {
        self.errors.insert(field, message.to_string());
    }

    fn clear_errors(&mut self) {
        self.errors.clear();
    }

    fn reset(&mut self) {
        self.values.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_trims_free_text_but_not_selects() {
        let mut store = MemoryFormStore::new();
        store.set_value(Field::Company, "  Northwind  ");
        store.set_value(Field::Name, " Jo Meyer ");
        store.set_value(Field::Email, " jo@northwind.example ");
        store.set_value(Field::Phone, " 555 123 4567 ");
        store.set_value(Field::Interest, "forestry");
        store.set_value(Field::Volume, "1000-10000");
        store.set_value(Field::Message, "  hello  ");

        let form = store.snapshot();
        assert_eq!(form.company, "Northwind");
        assert_eq!(form.name, "Jo Meyer");
        assert_eq!(form.email, "jo@northwind.example");
        assert_eq!(form.phone, "555 123 4567");
        assert_eq!(form.interest, "forestry");
        assert_eq!(form.message, "hello");
    }

    #[test]
    fn set_error_is_idempotent() {
        let mut store = MemoryFormStore::new();
        store.set_error(Field::Email, "Please enter a valid email address");
        store.set_error(Field::Email, "Please enter a valid email address");
        assert_eq!(store.error_count(), 1);
        assert_eq!(
            store.error(Field::Email),
            Some("Please enter a valid email address")
        );

        store.clear_errors();
        assert_eq!(store.error_count(), 0);
    }
}
