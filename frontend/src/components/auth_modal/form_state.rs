//! Form state for the auth modal.
//!
//! Consolidates the scattered input signals into state structs that own
//! holding, resetting and conversion to API payloads. Validation itself
//! is plain functions over plain data so it can run anywhere.

use leptos::prelude::*;
use mealbridge_shared::UserRole;
use mealbridge_shared::protocol::{LoginRequest, RegisterRequest};

/// Field-level validation errors, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(Vec<(&'static str, &'static str)>);

impl FieldErrors {
    fn push(&mut self, field: &'static str, message: &'static str) {
        self.0.push((field, message));
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, msg)| *msg)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Plain snapshot of the register form, for validation and payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterData {
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub display_name: String,
}

/// Field-level checks run before any network call. Students must sign up
/// with an institutional (`.edu`) address; donors may use any email.
pub fn validate_register(data: &RegisterData, role: UserRole) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let email = data.email.trim();
    if email.is_empty() {
        errors.push("email", "Email is required");
    } else if !email.contains('@') {
        errors.push("email", "Enter a valid email address");
    } else if role == UserRole::Student && !email.ends_with(".edu") {
        errors.push("email", "Must be a valid .edu email");
    }

    if data.phone.trim().is_empty() {
        errors.push("phone", "Phone is required");
    }
    if data.address.trim().is_empty() {
        errors.push("address", "Full street address is required");
    }
    if data.city.trim().is_empty() {
        errors.push("city", "City is required");
    }
    if data.state.trim().is_empty() {
        errors.push("state", "State is required");
    }
    if data.zip.trim().is_empty() {
        errors.push("zip", "Zip is required");
    }

    errors
}

pub fn validate_login(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    if email.trim().is_empty() {
        errors.push("email", "Email is required");
    }
    if password.is_empty() {
        errors.push("password", "Password is required");
    }
    errors
}

fn default_display_name(role: UserRole) -> &'static str {
    match role {
        UserRole::Student => "Anonymous Student",
        _ => "Kind Neighbor",
    }
}

/// Register form signals. `RwSignal` is `Copy`, so the whole struct can
/// be passed around freely between the modal's sub-views.
#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub email: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub address: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub zip: RwSignal<String>,
    pub display_name: RwSignal<String>,
}

impl RegisterFormState {
    pub fn new(role: UserRole) -> Self {
        Self {
            email: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            address: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            zip: RwSignal::new(String::new()),
            display_name: RwSignal::new(default_display_name(role).to_string()),
        }
    }

    pub fn reset(&self, role: UserRole) {
        self.email.set(String::new());
        self.phone.set(String::new());
        self.address.set(String::new());
        self.city.set(String::new());
        self.state.set(String::new());
        self.zip.set(String::new());
        self.display_name.set(default_display_name(role).to_string());
    }

    pub fn data(&self) -> RegisterData {
        RegisterData {
            email: self.email.get(),
            phone: self.phone.get(),
            address: self.address.get(),
            city: self.city.get(),
            state: self.state.get(),
            zip: self.zip.get(),
            display_name: self.display_name.get(),
        }
    }

    pub fn to_payload(&self, role: UserRole) -> RegisterRequest {
        let data = self.data();
        RegisterRequest {
            email: data.email.trim().to_string(),
            role,
            display_name: data.display_name,
            phone: data.phone,
            address: data.address,
            city: data.city,
            state: data.state,
            zip: data.zip,
            country: "United States".to_string(),
        }
    }
}

/// Login form signals.
#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl LoginFormState {
    pub fn new() -> Self {
        Self {
            email: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.email.set(String::new());
        self.password.set(String::new());
    }

    pub fn to_payload(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.get().trim().to_string(),
            password: self.password.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(email: &str) -> RegisterData {
        RegisterData {
            email: email.to_string(),
            phone: "(555) 123-4567".to_string(),
            address: "123 Campus Dr".to_string(),
            city: "San Jose".to_string(),
            state: "CA".to_string(),
            zip: "95112".to_string(),
            display_name: "Anonymous Student".to_string(),
        }
    }

    #[test]
    fn student_requires_an_edu_email() {
        let errors = validate_register(&filled("someone@gmail.com"), UserRole::Student);
        assert_eq!(errors.get("email"), Some("Must be a valid .edu email"));

        let errors = validate_register(&filled("someone@university.edu"), UserRole::Student);
        assert!(errors.is_empty());
    }

    #[test]
    fn donor_may_use_any_email() {
        let errors = validate_register(&filled("kind@gmail.com"), UserRole::Donor);
        assert!(errors.is_empty());
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = validate_register(&RegisterData::default(), UserRole::Donor);
        for field in ["email", "phone", "address", "city", "state", "zip"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn malformed_email_is_caught_before_the_domain_rule() {
        let errors = validate_register(&filled("not-an-email.edu"), UserRole::Student);
        assert_eq!(errors.get("email"), Some("Enter a valid email address"));
    }

    #[test]
    fn whitespace_only_input_is_rejected() {
        let mut data = filled("x@y.edu");
        data.city = "   ".to_string();
        let errors = validate_register(&data, UserRole::Student);
        assert_eq!(errors.get("city"), Some("City is required"));
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = validate_login("", "");
        assert!(errors.get("email").is_some());
        assert!(errors.get("password").is_some());
        assert!(validate_login("a@b.edu", "password").is_empty());
    }
}
