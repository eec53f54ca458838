use super::{repository::RegisterRepository, utils::RegisterFormState};
use crate::api::{ApiError, RegisterRequest};
use crate::state::auth::use_api;
use crate::utils::navigation::use_navigator;
use leptos::*;
use std::rc::Rc;

pub const AFTER_REGISTER_PATH: &str = "/login";

#[derive(Clone, Copy)]
pub struct RegisterViewModel {
    pub form: RegisterFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub register_action: Action<RegisterRequest, Result<(), ApiError>>,
}

impl RegisterViewModel {
    pub fn submit(&self) {
        if self.register_action.pending().get_untracked() {
            return;
        }
        match self.form.to_request() {
            Ok(request) => {
                self.error.set(None);
                self.register_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_register_view_model() -> RegisterViewModel {
    let form = RegisterFormState::default();
    let error = create_rw_signal(None::<ApiError>);
    let repo = RegisterRepository::new_with_client(Rc::new(use_api()));
    let navigator = use_navigator();

    let register_action = create_action(move |request: &RegisterRequest| {
        let repo = repo.clone();
        let request = request.clone();
        async move { repo.register(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = register_action.value().get() {
            match result {
                Ok(()) => navigator.go(AFTER_REGISTER_PATH),
                Err(err) => error.set(Some(err)),
            }
        }
    });

    RegisterViewModel {
        form,
        error,
        register_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn incomplete_form_is_rejected_before_any_request() {
        with_runtime(|| {
            let vm = use_register_view_model();
            vm.form.first_name.set("Jean".into());
            vm.submit();
            assert_eq!(vm.error.get().unwrap().code, "VALIDATION_ERROR");
            assert!(vm.register_action.value().get().is_none());
        });
    }
}
