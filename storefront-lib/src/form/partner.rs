use super::Form;
use super::parse;
use crate::error::ValidationErrors;
use crate::model::PartnerPayload;

/// Minimum password length for new partner accounts.
pub const MIN_PASSWORD_LEN: usize = 8;

/// New delivery partner registration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartnerForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Exactly one `@` with something on both sides, and no whitespace.
fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl Form for PartnerForm {
    type Payload = PartnerPayload;

    fn validate(&self) -> Result<PartnerPayload, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = self.email.trim();
        if email.is_empty() {
            errors.add("email", "Email is required.");
        } else if !is_plausible_email(email) {
            errors.add("email", "Email address is not valid.");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.add(
                "password",
                format!("Password must be at least {} characters.", MIN_PASSWORD_LEN),
            );
        }

        errors.into_result(|| PartnerPayload {
            full_name: parse::non_blank(&self.full_name).map(str::to_string),
            email: email.to_lowercase(),
            password: self.password.clone(),
        })
    }
}
