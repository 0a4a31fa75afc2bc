//! Boundary validation for the registration submission.
//!
//! The checks run as an ordered list of named predicates; the first failure
//! wins and nothing after it is evaluated. Presence failures are batched
//! into one generic rejection, while a present-but-invalid field gets its
//! own sentence.

use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::sync::LazyLock;

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const COMPANY_NAME_MIN_LENGTH: usize = 2;
pub const COMPANY_NAME_MAX_LENGTH: usize = 100;
pub const PASSWORD_MIN_LENGTH: usize = 6;
pub const PASSWORD_MAX_LENGTH: usize = 128;
pub const EMAIL_MAX_LENGTH: usize = 254;

/// `local@domain.tld`, nothing fancier; the backend is the authority.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Latin and Cyrillic letters plus whitespace. Digits, punctuation and
/// apostrophes are rejected, so "O'Connor" fails; this mirrors the
/// registration contract and is not a bug to silently fix.
static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s\x{0400}-\x{04FF}]+$").expect("name regex"));

/// Rejections, in the order the predicates run: presence, then
/// name → email → company name → password → tariff plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingFields,

    #[error("Full name must contain at least {} letters", NAME_MIN_LENGTH)]
    InvalidName,

    #[error("Email address has an invalid format")]
    InvalidEmail,

    #[error("Company name must contain at least {} characters", COMPANY_NAME_MIN_LENGTH)]
    InvalidCompanyName,

    #[error("Password must be at least {} characters long", PASSWORD_MIN_LENGTH)]
    PasswordTooShort,

    #[error("Password must not exceed {} characters", PASSWORD_MAX_LENGTH)]
    PasswordTooLong,

    #[error("A tariff plan must be selected")]
    MissingTariffPlan,
}

/// A validated, normalized registration ready for forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationSubmission {
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub password: String,
    pub tariff_plan_id: i64,
}

/// What actually goes over the wire: the submission plus the
/// server-computed `password_confirmation` mirror the backend insists on.
#[derive(Debug, Serialize)]
pub struct RegistrationPayload<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub company_name: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
    pub tariff_plan_id: i64,
}

impl RegistrationSubmission {
    /// Parses and validates a raw JSON body.
    ///
    /// # Errors
    /// The first failing predicate, see [`ValidationError`].
    pub fn parse(body: &Value) -> Result<Self, ValidationError> {
        let name = non_empty_string(body, "name");
        let email = non_empty_string(body, "email");
        let company_name = non_empty_string(body, "company_name");
        let password = non_empty_string(body, "password");

        let (Some(name), Some(email), Some(company_name), Some(password)) =
            (name, email, company_name, password)
        else {
            return Err(ValidationError::MissingFields);
        };

        let name = name.trim();
        if !is_valid_name(name) {
            return Err(ValidationError::InvalidName);
        }

        let email = email.trim();
        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }

        let company_name = company_name.trim();
        if !is_valid_company_name(company_name) {
            return Err(ValidationError::InvalidCompanyName);
        }

        let password_length = password.chars().count();
        if password_length < PASSWORD_MIN_LENGTH {
            return Err(ValidationError::PasswordTooShort);
        }
        if password_length > PASSWORD_MAX_LENGTH {
            return Err(ValidationError::PasswordTooLong);
        }

        let tariff_plan_id = body
            .get("tariff_plan_id")
            .and_then(Value::as_i64)
            .filter(|id| (1..=3).contains(id))
            .ok_or(ValidationError::MissingTariffPlan)?;

        Ok(Self {
            name: name.to_owned(),
            email: email.to_lowercase(),
            company_name: company_name.to_owned(),
            password: password.to_owned(),
            tariff_plan_id,
        })
    }

    /// The forwarding payload, with `password_confirmation` mirroring the
    /// password. The client-side `confirmPassword` field never crosses this
    /// boundary.
    #[must_use]
    pub fn payload(&self) -> RegistrationPayload<'_> {
        RegistrationPayload {
            name: &self.name,
            email: &self.email,
            company_name: &self.company_name,
            password: &self.password,
            password_confirmation: &self.password,
            tariff_plan_id: self.tariff_plan_id,
        }
    }
}

/// Presence means: the field exists, is a string, and is non-empty *before*
/// trimming. A whitespace-only value passes presence and fails its field
/// check instead.
fn non_empty_string<'v>(body: &'v Value, field: &str) -> Option<&'v str> {
    body.get(field).and_then(Value::as_str).filter(|value| !value.is_empty())
}

fn is_valid_name(name: &str) -> bool {
    let length = name.chars().count();
    (NAME_MIN_LENGTH..=NAME_MAX_LENGTH).contains(&length) && NAME_REGEX.is_match(name)
}

fn is_valid_email(email: &str) -> bool {
    email.chars().count() <= EMAIL_MAX_LENGTH && EMAIL_REGEX.is_match(email)
}

fn is_valid_company_name(company_name: &str) -> bool {
    let length = company_name.chars().count();
    (COMPANY_NAME_MIN_LENGTH..=COMPANY_NAME_MAX_LENGTH).contains(&length)
}
