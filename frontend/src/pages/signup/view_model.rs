use super::utils::build_request;
use crate::api::{ApiError, ApiResponse, SignupRequest};
use crate::router::{redirect_to, LOGIN_PATH};
use crate::state::auth;
use leptos::*;

#[derive(Clone, Copy)]
pub struct SignupViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub role: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub signup_action: Action<SignupRequest, Result<ApiResponse, ApiError>>,
}

/// Returns true when the account was created.
fn apply_signup_result(
    result: Option<Result<ApiResponse, ApiError>>,
    error: RwSignal<Option<ApiError>>,
) -> bool {
    match result {
        Some(Ok(_)) => {
            error.set(None);
            true
        }
        Some(Err(err)) => {
            error.set(Some(err));
            false
        }
        None => false,
    }
}

impl SignupViewModel {
    pub fn submit(&self) -> bool {
        if self.signup_action.pending().get_untracked() {
            return false;
        }
        match build_request(
            &self.name.get_untracked(),
            &self.email.get_untracked(),
            &self.password.get_untracked(),
            &self.role.get_untracked(),
        ) {
            Ok(request) => {
                self.error.set(None);
                self.signup_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_signup_view_model() -> SignupViewModel {
    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let role = create_rw_signal("EMPLOYEE".to_string());
    let error = create_rw_signal(None::<ApiError>);
    let signup_action = auth::use_signup_action();

    create_effect(move |_| {
        if apply_signup_result(signup_action.value().get(), error) {
            redirect_to(LOGIN_PATH);
        }
    });

    SignupViewModel {
        name,
        email,
        password,
        role,
        error,
        signup_action,
    }
}
