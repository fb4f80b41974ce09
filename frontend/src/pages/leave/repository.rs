use crate::api::{
    ApiClient, ApiError, CreateLeaveRequest, LeaveBalanceResponse, LeaveRequestResponse,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct LeaveRepository {
    client: Rc<ApiClient>,
}

impl LeaveRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn apply(&self, payload: CreateLeaveRequest) -> Result<LeaveRequestResponse, ApiError> {
        self.client.apply_leave(&payload).await
    }

    pub async fn list_my_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.get_my_leave_requests().await
    }

    pub async fn cancel(&self, id: i64) -> Result<(), ApiError> {
        self.client.cancel_leave(id).await.map(|_| ())
    }

    pub async fn my_balance(&self) -> Result<LeaveBalanceResponse, ApiError> {
        self.client.get_leave_balance(None).await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;
    use crate::api::LeaveType;
    use chrono::NaiveDate;
    use serde_json::json;

    #[tokio::test]
    async fn leave_repository_calls_api() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/leave/apply");
            then.status(200).json_body(json!({
                "id": 3,
                "startDate": "2025-01-10",
                "endDate": "2025-01-12",
                "reason": "family trip",
                "leaveType": "ANNUAL",
                "status": "PENDING",
                "appliedAt": "2025-01-02T09:30:00"
            }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/my-requests");
            then.status(200).json_body(json!([]));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/leave/cancel/3");
            then.status(200).json_body(json!({
                "success": true,
                "message": "Leave request cancelled successfully"
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

        let repo = LeaveRepository::new(ApiClient::new_with_base_url(&server.url("/api")));
        let created = repo
            .apply(CreateLeaveRequest {
                start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
                leave_type: LeaveType::Annual,
                reason: "family trip".into(),
            })
            .await
            .unwrap();
        assert!(created.is_pending());
        assert!(repo.list_my_requests().await.unwrap().is_empty());
        repo.cancel(3).await.unwrap();
        assert_eq!(server.last_request().path, "/api/leave/cancel/3");
        let balance = repo.my_balance().await.unwrap();
        assert_eq!(balance.annual_leave_balance, 20);
    }
}
