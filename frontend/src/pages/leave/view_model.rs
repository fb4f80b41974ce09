use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, LeaveBalanceResponse, LeaveRequestResponse,
};
use crate::pages::leave::{repository::LeaveRepository, utils::LeaveFormState};
use crate::pages::utils::{bump, report_error, MessageState};
use crate::router::redirect_to;
use crate::state::auth::{use_session, SessionContext};
use leptos::*;

pub const HISTORY_PATH: &str = "/leave/history";
pub const REDIRECT_DELAY_MS: u32 = 1500;

fn repository() -> StoredValue<LeaveRepository> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    store_value(LeaveRepository::new(api))
}

#[derive(Clone, Copy)]
pub struct ApplyLeaveViewModel {
    pub form: LeaveFormState,
    pub message: RwSignal<MessageState>,
    pub apply_action: Action<CreateLeaveRequest, Result<(), ApiError>>,
}

/// Returns true once the request was accepted and the history page is due.
fn apply_optional_apply_result(
    result: Option<Result<(), ApiError>>,
    session: SessionContext,
    form: LeaveFormState,
    message: RwSignal<MessageState>,
) -> bool {
    match result {
        Some(Ok(())) => {
            message.update(|msg| msg.set_success("Leave request submitted successfully!"));
            form.reset();
            true
        }
        Some(Err(err)) => {
            report_error(session, message, err);
            false
        }
        None => false,
    }
}

impl ApplyLeaveViewModel {
    pub fn new() -> Self {
        let repository = repository();
        let session = use_session();
        let form = LeaveFormState::default();
        let message = create_rw_signal(MessageState::default());

        let apply_action = create_action(move |payload: &CreateLeaveRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.apply(payload).await.map(|_| ()) }
        });

        create_effect(move |_| {
            if apply_optional_apply_result(apply_action.value().get(), session, form, message) {
                spawn_local(async {
                    gloo_timers::future::TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                    redirect_to(HISTORY_PATH);
                });
            }
        });

        Self {
            form,
            message,
            apply_action,
        }
    }

    pub fn submit(&self) -> bool {
        if self.apply_action.pending().get_untracked() {
            return false;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.message.update(|msg| msg.clear());
                self.apply_action.dispatch(payload);
                true
            }
            Err(err) => {
                self.message.update(|msg| msg.set_error(err));
                false
            }
        }
    }
}

#[derive(Clone, Copy)]
pub struct LeaveHistoryViewModel {
    pub message: RwSignal<MessageState>,
    pub requests_resource: Resource<u32, Result<Vec<LeaveRequestResponse>, ApiError>>,
    pub cancel_action: Action<i64, Result<(), ApiError>>,
}

fn apply_optional_cancel_result(
    result: Option<Result<(), ApiError>>,
    session: SessionContext,
    message: RwSignal<MessageState>,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(())) => {
            message.update(|msg| msg.set_success("Leave request cancelled successfully."));
            bump(reload);
        }
        Some(Err(err)) => report_error(session, message, err),
        None => {}
    }
}

impl LeaveHistoryViewModel {
    pub fn new() -> Self {
        let repository = repository();
        let session = use_session();
        let message = create_rw_signal(MessageState::default());
        let reload = create_rw_signal(0u32);

        let requests_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.list_my_requests().await;
                    if let Err(err) = &result {
                        session.handle_api_error(err);
                    }
                    result
                }
            },
        );

        let cancel_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move { repo.cancel(id).await }
        });

        create_effect(move |_| {
            apply_optional_cancel_result(cancel_action.value().get(), session, message, reload);
        });

        Self {
            message,
            requests_resource,
            cancel_action,
        }
    }

    pub fn requests(&self) -> Signal<Vec<LeaveRequestResponse>> {
        let resource = self.requests_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    /// Only pending requests can be withdrawn.
    pub fn on_cancel(&self) -> Callback<LeaveRequestResponse> {
        let cancel_action = self.cancel_action;
        let message = self.message;
        Callback::new(move |request: LeaveRequestResponse| {
            if !request.is_pending() || cancel_action.pending().get_untracked() {
                return;
            }
            message.update(|msg| msg.clear());
            cancel_action.dispatch(request.id);
        })
    }
}

#[derive(Clone, Copy)]
pub struct LeaveBalanceViewModel {
    pub balance_resource: Resource<(), Result<LeaveBalanceResponse, ApiError>>,
}

impl LeaveBalanceViewModel {
    pub fn new() -> Self {
        let repository = repository();
        let session = use_session();
        let balance_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.my_balance().await;
                    if let Err(err) = &result {
                        session.handle_api_error(err);
                    }
                    result
                }
            },
        );
        Self { balance_resource }
    }

    pub fn balance(&self) -> Signal<Option<LeaveBalanceResponse>> {
        let resource = self.balance_resource;
        Signal::derive(move || resource.get().and_then(|result| result.ok()))
    }

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.balance_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }
}
