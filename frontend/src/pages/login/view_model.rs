use super::utils::validate_credentials;
use crate::api::{ApiError, LoginRequest};
use crate::router::{redirect_to, HOME_PATH};
use crate::state::auth;
use crate::utils::token::Identity;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<Identity, ApiError>>,
}

fn apply_login_result(
    result: Option<Result<Identity, ApiError>>,
    password: RwSignal<String>,
    error: RwSignal<Option<ApiError>>,
) -> bool {
    match result {
        Some(Ok(_)) => {
            error.set(None);
            password.set(String::new());
            true
        }
        Some(Err(err)) => {
            error.set(Some(err));
            false
        }
        None => false,
    }
}

impl LoginViewModel {
    /// Validates the form and dispatches the login; returns whether a request
    /// went out.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        if let Err(err) = validate_credentials(&email, &password) {
            self.error.set(Some(err));
            return false;
        }
        self.error.set(None);
        self.login_action.dispatch(LoginRequest {
            email: email.trim().to_string(),
            password,
        });
        true
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        if apply_login_result(login_action.value().get(), password, error) {
            redirect_to(HOME_PATH);
        }
    });

    LoginViewModel {
        email,
        password,
        error,
        login_action,
    }
}
