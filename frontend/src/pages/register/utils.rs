use crate::api::{ApiError, RegisterRequest};
use crate::pages::login::utils::is_valid_email;
use leptos::*;

pub fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    if request.first_name.is_empty() || request.last_name.is_empty() {
        return Err(ApiError::validation("First and last name are required"));
    }
    if !is_valid_email(&request.email) {
        return Err(ApiError::validation("A valid email is required"));
    }
    if request.password.is_empty() {
        return Err(ApiError::validation("Password is required"));
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct RegisterFormState {
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
}

impl Default for RegisterFormState {
    fn default() -> Self {
        Self {
            first_name: create_rw_signal(String::new()),
            last_name: create_rw_signal(String::new()),
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
        }
    }
}

impl RegisterFormState {
    fn snapshot(&self) -> RegisterRequest {
        RegisterRequest {
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            password: self.password.get_untracked(),
        }
    }

    pub fn is_valid(&self) -> bool {
        let request = RegisterRequest {
            first_name: self.first_name.get(),
            last_name: self.last_name.get(),
            email: self.email.get(),
            password: self.password.get(),
        };
        validate_registration(&request).is_ok()
    }

    pub fn to_request(&self) -> Result<RegisterRequest, ApiError> {
        let request = self.snapshot();
        validate_registration(&request)?;
        Ok(request)
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn form_state_builds_request_once_complete() {
        with_runtime(|| {
            let form = RegisterFormState::default();
            assert!(!form.is_valid());
            assert_eq!(form.to_request().unwrap_err().code, "VALIDATION_ERROR");

            form.first_name.set("Jean".into());
            form.last_name.set("Dupont".into());
            form.email.set("test@test.fr".into());
            form.password.set("test!1234".into());
            assert!(form.is_valid());
            assert_eq!(form.to_request().unwrap().last_name, "Dupont");
        });
    }
}
