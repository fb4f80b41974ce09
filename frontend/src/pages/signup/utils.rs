use crate::api::{ApiError, SignupRequest};
use crate::utils::token::Role;

pub const ROLE_OPTIONS: [Role; 2] = [Role::Employee, Role::Admin];

pub fn role_label(role: Role) -> &'static str {
    match role {
        Role::Employee => "Employee",
        Role::Admin => "Admin",
    }
}

/// The form offers a fixed select, but typed values are accepted loosely.
fn role_from_form(raw: &str) -> Role {
    if raw.trim().eq_ignore_ascii_case(Role::Admin.as_str()) {
        Role::Admin
    } else {
        Role::Employee
    }
}

pub fn build_request(
    name: &str,
    email: &str,
    password: &str,
    role: &str,
) -> Result<SignupRequest, ApiError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() {
        return Err(ApiError::validation("Please enter your name."));
    }
    if email.is_empty() {
        return Err(ApiError::validation("Please enter your email."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter a password."));
    }
    Ok(SignupRequest {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        role: role_from_form(role).as_str().to_string(),
    })
}
