use super::{repository::AdminRepository, utils::BalanceFormState};
use crate::api::{
    ApiClient, ApiError, ApiResponse, LeaveBalanceResponse, LeaveRequestResponse,
    UpdateLeaveBalanceRequest,
};
use crate::pages::utils::{bump, report_error, MessageState};
use crate::state::auth::{use_session, SessionContext};
use leptos::*;
use std::rc::Rc;

fn repository() -> StoredValue<AdminRepository> {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    store_value(AdminRepository::new_with_client(Rc::new(api)))
}

/// A decision on one pending request. `reason` only travels with rejections.
#[derive(Clone, Debug, PartialEq)]
pub struct DecisionPayload {
    pub id: i64,
    pub approve: bool,
    pub reason: Option<String>,
}

impl DecisionPayload {
    fn success_message(&self) -> &'static str {
        if self.approve {
            "Leave request approved successfully."
        } else {
            "Leave request rejected successfully."
        }
    }
}

#[derive(Clone, Copy)]
pub struct ApproveRequestsViewModel {
    pub message: RwSignal<MessageState>,
    pub reject_reason: RwSignal<String>,
    pub pending_resource: Resource<u32, Result<Vec<LeaveRequestResponse>, ApiError>>,
    pub decision_action: Action<DecisionPayload, Result<&'static str, ApiError>>,
}

/// A recorded decision clears the rejection reason so it is not reused.
fn apply_optional_decision_result(
    result: Option<Result<&'static str, ApiError>>,
    session: SessionContext,
    message: RwSignal<MessageState>,
    reject_reason: RwSignal<String>,
    reload: RwSignal<u32>,
) {
    match result {
        Some(Ok(text)) => {
            message.update(|msg| msg.set_success(text));
            reject_reason.set(String::new());
            bump(reload);
        }
        Some(Err(err)) => report_error(session, message, err),
        None => {}
    }
}

impl ApproveRequestsViewModel {
    pub fn new() -> Self {
        let repository = repository();
        let session = use_session();
        let message = create_rw_signal(MessageState::default());
        let reject_reason = create_rw_signal(String::new());
        let reload = create_rw_signal(0u32);

        let pending_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.list_pending_requests().await;
                    if let Err(err) = &result {
                        session.handle_api_error(err);
                    }
                    result
                }
            },
        );

        let decision_action = create_action(move |payload: &DecisionPayload| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move {
                if payload.approve {
                    repo.approve(payload.id).await?;
                } else {
                    repo.reject(payload.id, payload.reason.clone()).await?;
                }
                Ok::<_, ApiError>(payload.success_message())
            }
        });

        create_effect(move |_| {
            apply_optional_decision_result(
                decision_action.value().get(),
                session,
                message,
                reject_reason,
                reload,
            );
        });

        Self {
            message,
            reject_reason,
            pending_resource,
            decision_action,
        }
    }

    pub fn pending_requests(&self) -> Signal<Vec<LeaveRequestResponse>> {
        let resource = self.pending_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(|result| result.ok())
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.pending_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    pub fn decide(&self, id: i64, approve: bool) -> bool {
        if self.decision_action.pending().get_untracked() {
            return false;
        }
        let reason = if approve {
            None
        } else {
            Some(self.reject_reason.get_untracked().trim().to_string()).filter(|r| !r.is_empty())
        };
        self.message.update(|msg| msg.clear());
        self.decision_action.dispatch(DecisionPayload {
            id,
            approve,
            reason,
        });
        true
    }
}

#[derive(Clone, Copy)]
pub struct UpdateBalanceViewModel {
    pub form: BalanceFormState,
    pub message: RwSignal<MessageState>,
    pub load_action: Action<String, Result<LeaveBalanceResponse, ApiError>>,
    pub update_action: Action<UpdateLeaveBalanceRequest, Result<ApiResponse, ApiError>>,
}

fn apply_optional_load_result(
    result: Option<Result<LeaveBalanceResponse, ApiError>>,
    session: SessionContext,
    form: BalanceFormState,
    message: RwSignal<MessageState>,
) {
    match result {
        Some(Ok(balance)) => {
            form.fill(&balance);
            message.update(|msg| msg.set_success("Current balance loaded."));
        }
        Some(Err(err)) => report_error(session, message, err),
        None => {}
    }
}

/// Returns true when the stored balance changed and should be fetched again.
fn apply_optional_update_result(
    result: Option<Result<ApiResponse, ApiError>>,
    session: SessionContext,
    message: RwSignal<MessageState>,
) -> bool {
    match result {
        Some(Ok(_)) => {
            message.update(|msg| msg.set_success("Leave balance updated successfully."));
            true
        }
        Some(Err(err)) => {
            report_error(session, message, err);
            false
        }
        None => false,
    }
}

impl UpdateBalanceViewModel {
    pub fn new() -> Self {
        let repository = repository();
        let session = use_session();
        let form = BalanceFormState::default();
        let message = create_rw_signal(MessageState::default());

        let load_action = create_action(move |email: &String| {
            let repo = repository.get_value();
            let email = email.clone();
            async move { repo.balance_for(&email).await }
        });

        let update_action = create_action(move |payload: &UpdateLeaveBalanceRequest| {
            let repo = repository.get_value();
            let payload = payload.clone();
            async move { repo.update_balance(payload).await }
        });

        create_effect(move |_| {
            apply_optional_load_result(load_action.value().get(), session, form, message);
        });

        create_effect(move |_| {
            if apply_optional_update_result(update_action.value().get(), session, message) {
                if let Ok(email) = form.lookup_email() {
                    load_action.dispatch(email);
                }
            }
        });

        Self {
            form,
            message,
            load_action,
            update_action,
        }
    }

    pub fn load(&self) -> bool {
        match self.form.lookup_email() {
            Ok(email) => {
                self.message.update(|msg| msg.clear());
                self.load_action.dispatch(email);
                true
            }
            Err(err) => {
                self.message.update(|msg| msg.set_error(err));
                false
            }
        }
    }

    pub fn submit(&self) -> bool {
        if self.update_action.pending().get_untracked() {
            return false;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.message.update(|msg| msg.clear());
                self.update_action.dispatch(payload);
                true
            }
            Err(err) => {
                self.message.update(|msg| msg.set_error(err));
                false
            }
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::LeaveStatus;
    use crate::test_support::helpers::{admin_identity, leave_request, provide_session};
    use crate::test_support::ssr::{wait_until, with_local_runtime_async, with_runtime};
    use serde_json::json;

    fn mock_server() -> MockServer {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/all");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave/approve/4");
            then.status(200)
                .json_body(json!({ "success": true, "message": "Leave request approved" }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave/reject/5");
            then.status(200).json_body(json!({
                "success": false,
                "message": "Leave request is no longer pending"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/balance");
            then.status(200).json_body(json!({
                "annualLeaveBalance": 20,
                "sickLeaveBalance": 10,
                "casualLeaveBalance": 5
            }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave/balance/update");
            then.status(200)
                .json_body(json!({ "success": true, "message": "Leave balance updated" }));
        });
        server
    }

    #[test]
    fn decision_messages_follow_the_action() {
        let approve = DecisionPayload {
            id: 1,
            approve: true,
            reason: None,
        };
        let reject = DecisionPayload {
            id: 1,
            approve: false,
            reason: None,
        };
        assert_eq!(approve.success_message(), "Leave request approved successfully.");
        assert_eq!(reject.success_message(), "Leave request rejected successfully.");
    }

    #[test]
    fn decision_result_reloads_queue() {
        with_runtime(|| {
            let session = provide_session(Some(admin_identity()));
            let message = create_rw_signal(MessageState::default());
            let reject_reason = create_rw_signal("team offsite".to_string());
            let reload = create_rw_signal(0u32);

            apply_optional_decision_result(
                Some(Err(ApiError::validation("Leave request is no longer pending"))),
                session,
                message,
                reject_reason,
                reload,
            );
            assert_eq!(reload.get(), 0);
            assert_eq!(reject_reason.get(), "team offsite");

            apply_optional_decision_result(
                Some(Ok("Leave request rejected successfully.")),
                session,
                message,
                reject_reason,
                reload,
            );
            assert_eq!(reload.get(), 1);
            assert!(reject_reason.get().is_empty());
            assert_eq!(
                message.get().success.as_deref(),
                Some("Leave request rejected successfully.")
            );

            apply_optional_decision_result(
                Some(Err(ApiError::from_response(401, None, "Unauthorized"))),
                session,
                message,
                reject_reason,
                reload,
            );
            assert_eq!(reload.get(), 1);
            assert!(!session.is_authenticated());
        });
    }

    #[test]
    fn pending_queue_reads_resource() {
        with_runtime(|| {
            provide_session(Some(admin_identity()));
            leptos_reactive::suppress_resource_load(true);
            let vm = ApproveRequestsViewModel::new();
            vm.pending_resource
                .set(Ok(vec![leave_request(4, LeaveStatus::Pending)]));
            assert_eq!(vm.pending_requests().get().len(), 1);
            assert!(vm.load_error().get().is_none());
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn decisions_hit_the_server() {
        with_local_runtime_async(|| async {
            let runtime = create_runtime();
            let server = mock_server();
            provide_context(ApiClient::new_with_base_url(&server.url("/api")));
            provide_session(Some(admin_identity()));
            let vm = ApproveRequestsViewModel::new();

            assert!(vm.decide(4, true));
            assert!(
                wait_until(|| vm.decision_action.value().get().is_some()).await,
                "approve should complete"
            );
            assert_eq!(
                vm.decision_action.value().get(),
                Some(Ok("Leave request approved successfully."))
            );

            vm.reject_reason.set("  team offsite  ".into());
            assert!(vm.decide(5, false));
            assert!(
                wait_until(|| matches!(vm.decision_action.value().get(), Some(Err(_)))).await,
                "declined reject should surface an error"
            );
            let err = vm.decision_action.value().get().unwrap().unwrap_err();
            assert_eq!(err.error, "Leave request is no longer pending");
            let body = server.last_request().body.unwrap();
            assert_eq!(body["reason"], "team offsite");
            runtime.dispose();
        });
    }

    #[test]
    fn load_and_update_results_fill_form() {
        with_runtime(|| {
            let session = provide_session(Some(admin_identity()));
            let form = BalanceFormState::default();
            let message = create_rw_signal(MessageState::default());

            apply_optional_load_result(
                Some(Ok(LeaveBalanceResponse {
                    annual_leave_balance: 20,
                    sick_leave_balance: 10,
                    casual_leave_balance: 5,
                })),
                session,
                form,
                message,
            );
            assert_eq!(form.annual_signal().get(), "20");
            assert_eq!(message.get().success.as_deref(), Some("Current balance loaded."));

            assert!(apply_optional_update_result(
                Some(Ok(ApiResponse {
                    success: true,
                    message: None,
                })),
                session,
                message
            ));
            assert_eq!(
                message.get().success.as_deref(),
                Some("Leave balance updated successfully.")
            );
            assert!(!apply_optional_update_result(
                Some(Err(ApiError::validation("User not found"))),
                session,
                message
            ));
            assert_eq!(
                message.get().error.map(|e| e.error),
                Some("User not found".to_string())
            );
        });
    }

    #[test]
    fn update_balance_validates_before_dispatch() {
        with_runtime(|| {
            provide_session(Some(admin_identity()));
            let vm = UpdateBalanceViewModel::new();
            assert!(!vm.load());
            assert!(!vm.submit());
            assert_eq!(vm.load_action.version().get_untracked(), 0);
            assert_eq!(vm.update_action.version().get_untracked(), 0);
        });
    }

    #[test]
    fn balance_actions_round_trip_through_server() {
        with_local_runtime_async(|| async {
            let runtime = create_runtime();
            let server = mock_server();
            provide_context(ApiClient::new_with_base_url(&server.url("/api")));
            provide_session(Some(admin_identity()));
            let vm = UpdateBalanceViewModel::new();

            vm.form.email_signal().set("bob@example.com".into());
            assert!(vm.load());
            assert!(
                wait_until(|| vm.load_action.value().get().is_some()).await,
                "load should complete"
            );
            let balance = vm.load_action.value().get().unwrap().unwrap();
            vm.form.fill(&balance);

            vm.form.annual_signal().set("18".into());
            assert!(vm.submit());
            assert!(
                wait_until(|| vm.update_action.value().get().is_some()).await,
                "update should complete"
            );
            assert!(matches!(vm.update_action.value().get(), Some(Ok(_))));
            let body = server.last_request().body.unwrap();
            assert_eq!(body["annualLeaveBalance"], 18);
            assert_eq!(body["email"], "bob@example.com");
            runtime.dispose();
        });
    }
}
