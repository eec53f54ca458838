use crate::api::{ApiError, LoginRequest};
use leptos::*;

/// Loose syntactic check: one `@`, non-empty local part, dotted-or-bare domain, no spaces.
pub fn is_valid_email(raw: &str) -> bool {
    if raw.chars().any(char::is_whitespace) {
        return false;
    }
    match raw.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), ApiError> {
    if !is_valid_email(email) {
        return Err(ApiError::validation("A valid email is required"));
    }
    if password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub hide_password: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            hide_password: create_rw_signal(true),
        }
    }
}

impl LoginFormState {
    pub fn is_valid(&self) -> bool {
        validate_credentials(&self.email.get(), &self.password.get()).is_ok()
    }

    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest { email, password })
    }

    pub fn toggle_password_visibility(&self) {
        self.hide_password.update(|hide| *hide = !*hide);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_matches_form_rules() {
        assert!(is_valid_email("test@test.fr"));
        assert!(is_valid_email("yoga@studio"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("invalide"));
        assert!(!is_valid_email("@test.fr"));
        assert!(!is_valid_email("a b@test.fr"));
        assert!(!is_valid_email("a@b@c"));
        assert!(!is_valid_email("a@test."));
    }

    #[test]
    fn credentials_require_email_and_password() {
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("invalide", "password123").is_err());
        assert!(validate_credentials("test@test.fr", "").is_err());
        assert!(validate_credentials("test@test.fr", "password123").is_ok());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_builds_request_and_toggles_visibility() {
        with_runtime(|| {
            let form = LoginFormState::default();
            assert!(!form.is_valid());
            assert!(form.hide_password.get());

            form.email.set(" test@test.fr".into());
            form.password.set("password123".into());
            assert!(!form.is_valid());

            form.email.set("test@test.fr".into());
            assert!(form.is_valid());
            assert_eq!(
                form.to_request().unwrap(),
                LoginRequest {
                    email: "test@test.fr".into(),
                    password: "password123".into(),
                }
            );

            form.toggle_password_visibility();
            assert!(!form.hide_password.get());
        });
    }
}
