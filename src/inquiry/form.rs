//! Inquiry form record and validation

use serde::{Deserialize, Serialize};

use crate::inquiry::validate::{is_valid_email, is_valid_phone};

/// One inquiry submission, built fresh per attempt and discarded after.
///
/// Serializes to the wire shape the inquiry API expects: a flat JSON object
/// with exactly these seven string fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InquiryForm {
    pub company: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: String,
    pub volume: String,
    pub message: String,
}

/// Form fields, used to key values and error slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Company,
    Name,
    Email,
    Phone,
    Interest,
    Volume,
    Message,
}

impl Field {
    /// All fields, in display order.
    pub const ALL: &'static [Field] = &[
        Field::Company,
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Interest,
        Field::Volume,
        Field::Message,
    ];

    /// Stable identifier, also used as the element id in the modal.
    pub fn id(&self) -> &'static str {
        match self {
            Field::Company => "company",
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Interest => "interest",
            Field::Volume => "volume",
            Field::Message => "message",
        }
    }
}

/// A failed required-field validation with its user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Run every required-field check and report all failures in one pass.
///
/// Deliberately not short-circuited: a submission attempt surfaces every
/// failing field at once. `volume` and `message` are optional and never
/// validated.
pub fn validate(form: &InquiryForm) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if form.company.chars().count() < 2 {
        errors.push(FieldError {
            field: Field::Company,
            message: "Company name must be at least 2 characters",
        });
    }

    if form.name.chars().count() < 2 {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name must be at least 2 characters",
        });
    }

    if !is_valid_email(&form.email) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }

    if !is_valid_phone(&form.phone) {
        errors.push(FieldError {
            field: Field::Phone,
            message: "Please enter a valid phone number",
        });
    }

    if form.interest.is_empty() {
        errors.push(FieldError {
            field: Field::Interest,
            message: "Please select a product",
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> InquiryForm {
        InquiryForm {
            company: "Northwind".to_string(),
            name: "Jo Meyer".to_string(),
            email: "jo@northwind.example".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            interest: "forestry".to_string(),
            volume: "1000-10000".to_string(),
            message: "Looking for Q3 offsets".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(validate(&valid_form()).is_ok());
    }

    #[test]
    fn min_length_boundary_on_company_and_name() {
        let mut form = valid_form();
        form.company = "AB".to_string();
        form.name = "Jo".to_string();
        assert!(validate(&form).is_ok());

        form.company = "A".to_string();
        form.name = "J".to_string();
        let errors = validate(&form).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec![Field::Company, Field::Name]);
    }

    #[test]
    fn empty_form_reports_every_required_field_at_once() {
        let errors = validate(&InquiryForm::default()).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                Field::Company,
                Field::Name,
                Field::Email,
                Field::Phone,
                Field::Interest
            ]
        );
    }

    #[test]
    fn optional_fields_are_never_validated() {
        let mut form = valid_form();
        form.volume = String::new();
        form.message = String::new();
        assert!(validate(&form).is_ok());
    }

    #[test]
    fn serializes_to_the_wire_shape() {
        let value = serde_json::to_value(valid_form()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "company": "Northwind",
                "name": "Jo Meyer",
                "email": "jo@northwind.example",
                "phone": "+1 (555) 123-4567",
                "interest": "forestry",
                "volume": "1000-10000",
                "message": "Looking for Q3 offsets",
            })
        );
    }
}
