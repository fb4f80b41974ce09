use crate::api::ApiError;

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if email.trim().is_empty() {
        return Err(ApiError::validation("Please enter your email."));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Please enter your password."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_email_and_password() {
        assert_eq!(
            validate_credentials("  ", "pw").unwrap_err().error,
            "Please enter your email."
        );
        assert_eq!(
            validate_credentials("a@x.com", "").unwrap_err().error,
            "Please enter your password."
        );
        assert!(validate_credentials("a@x.com", "pw").is_ok());
    }
}
