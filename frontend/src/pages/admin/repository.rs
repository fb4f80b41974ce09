use crate::api::{
    ApiClient, ApiError, ApiResponse, LeaveBalanceResponse, LeaveRequestResponse,
    UpdateLeaveBalanceRequest,
};
use std::rc::Rc;

#[derive(Clone)]
pub struct AdminRepository {
    client: Rc<ApiClient>,
}

impl AdminRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    /// The approval queue only holds requests still awaiting a decision.
    pub async fn list_pending_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let requests = self.client.get_all_leave_requests().await?;
        Ok(requests.into_iter().filter(|r| r.is_pending()).collect())
    }

    pub async fn approve(&self, id: i64) -> Result<ApiResponse, ApiError> {
        self.client.approve_leave(id).await
    }

    pub async fn reject(&self, id: i64, reason: Option<String>) -> Result<ApiResponse, ApiError> {
        self.client.reject_leave(id, reason).await
    }

    pub async fn balance_for(&self, email: &str) -> Result<LeaveBalanceResponse, ApiError> {
        self.client.get_leave_balance(Some(email)).await
    }

    pub async fn update_balance(
        &self,
        payload: UpdateLeaveBalanceRequest,
    ) -> Result<ApiResponse, ApiError> {
        self.client.update_leave_balance(&payload).await
    }
}
