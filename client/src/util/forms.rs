//! Client-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rules mirror the backend's bean validation so users see mistakes before a
//! round trip. The backend stays authoritative; its messages are still shown
//! when a request is rejected.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{LoginRequest, OtpVerification, ProfileUpdate, SignupRequest};
use crate::state::session::Role;

/// Raw signup form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub role: Role,
    pub company_name: String,
    pub address: String,
}

/// Raw profile form fields as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub company_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// # Errors
///
/// Returns a message naming the first missing or malformed field.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !looks_like_email(email) {
        return Err("Invalid email format");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// # Errors
///
/// Returns a message naming the first failing rule.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, &'static str> {
    let name = form.name.trim();
    validate_name(name)?;
    let email = form.email.trim();
    if !looks_like_email(email) {
        return Err("Invalid email format");
    }
    if form.password.chars().count() < 6 {
        return Err("Password must be at least 6 characters");
    }
    let phone = form.phone.trim();
    validate_phone(phone)?;
    if !matches!(form.role, Role::Buyer | Role::Seller) {
        return Err("Choose whether you are buying or selling");
    }
    let seller_only = |value: &str| {
        let value = value.trim();
        (form.role == Role::Seller && !value.is_empty()).then(|| value.to_owned())
    };
    Ok(SignupRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        role: form.role,
        phone: phone.to_owned(),
        company_name: seller_only(&form.company_name),
        address: seller_only(&form.address),
    })
}

/// # Errors
///
/// Returns a message unless `code` is exactly six digits.
pub fn validate_otp(email: &str, code: &str) -> Result<OtpVerification, &'static str> {
    let code = code.trim();
    if code.len() != 6 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code from your email.");
    }
    Ok(OtpVerification { email: email.trim().to_owned(), otp: code.to_owned() })
}

/// Build a profile update, sending only non-blank fields.
///
/// # Errors
///
/// Returns a message naming the first malformed field.
pub fn validate_profile(form: &ProfileForm) -> Result<ProfileUpdate, &'static str> {
    let non_blank = |value: &str| {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_owned())
    };
    let update = ProfileUpdate {
        name: non_blank(&form.name),
        phone: non_blank(&form.phone),
        company_name: non_blank(&form.company_name),
        address: non_blank(&form.address),
        city: non_blank(&form.city),
        state: non_blank(&form.state),
        zip: non_blank(&form.zip),
    };
    if let Some(name) = &update.name {
        validate_name(name)?;
    }
    if let Some(phone) = &update.phone {
        validate_phone(phone)?;
    }
    if let Some(address) = &update.address
        && !is_letters_and_spaces(address)
    {
        return Err("Address must contain only alphabets and spaces");
    }
    if let Some(city) = &update.city
        && !is_letters_and_spaces(city)
    {
        return Err("City must contain only alphabets and spaces");
    }
    if let Some(state) = &update.state
        && !is_letters_and_spaces(state)
    {
        return Err("State must contain only alphabets and spaces");
    }
    if let Some(zip) = &update.zip
        && (zip.len() != 6 || !zip.chars().all(|c| c.is_ascii_digit()))
    {
        return Err("Zip must be 6 digits");
    }
    Ok(update)
}

/// Parse an optional numeric input; blank or invalid means "no value".
pub fn parse_optional<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if raw.is_empty() { None } else { raw.parse().ok() }
}

fn validate_name(name: &str) -> Result<(), &'static str> {
    let len = name.chars().count();
    if !(3..=50).contains(&len) {
        return Err("Name must be between 3 and 50 characters");
    }
    if !is_letters_and_spaces(name) {
        return Err("Name must contain only alphabets and spaces");
    }
    Ok(())
}

fn validate_phone(phone: &str) -> Result<(), &'static str> {
    if phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err("Phone must be exactly 10 digits")
    }
}

fn is_letters_and_spaces(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|part| !part.is_empty())
        && !email.chars().any(char::is_whitespace)
}
