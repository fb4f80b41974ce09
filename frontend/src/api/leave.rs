use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use super::{
    client::ApiClient,
    types::{
        ApiError, ApiResponse, CreateLeaveRequest, LeaveBalanceResponse, LeaveRequestResponse,
        RejectLeaveRequest, UpdateLeaveBalanceRequest,
    },
};

fn balance_path(email: Option<&str>) -> String {
    match email.map(str::trim).filter(|e| !e.is_empty()) {
        Some(email) => format!(
            "/leave/balance?email={}",
            utf8_percent_encode(email, NON_ALPHANUMERIC)
        ),
        None => "/leave/balance".to_string(),
    }
}

impl ApiClient {
    pub async fn get_my_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}/leave/my-requests", base_url)),
            )
            .await?;
        Self::parse_json(
            response,
            "Failed to load leave requests. Please try again later.",
        )
        .await
    }

    pub async fn get_all_leave_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(self.http_client().get(format!("{}/leave/all", base_url)))
            .await?;
        Self::parse_json(response, "Failed to load leave requests.").await
    }

    /// Without an email the server answers for the caller; admins pass the
    /// employee's email.
    pub async fn get_leave_balance(
        &self,
        email: Option<&str>,
    ) -> Result<LeaveBalanceResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .get(format!("{}{}", base_url, balance_path(email))),
            )
            .await?;
        Self::parse_json(response, "Error loading current leave balance.").await
    }

    pub async fn update_leave_balance(
        &self,
        request: &UpdateLeaveBalanceRequest,
    ) -> Result<ApiResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leave/balance/update", base_url))
                    .json(request),
            )
            .await?;
        Self::parse_api_response(response, "Failed to update leave balance.").await
    }

    pub async fn apply_leave(
        &self,
        request: &CreateLeaveRequest,
    ) -> Result<LeaveRequestResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .post(format!("{}/leave/apply", base_url))
                    .json(request),
            )
            .await?;
        Self::parse_json(
            response,
            "Error submitting leave request. Please try again.",
        )
        .await
    }

    pub async fn approve_leave(&self, id: i64) -> Result<ApiResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leave/approve/{}", base_url, id)),
            )
            .await?;
        Self::parse_api_response(response, "Failed to approve leave request.").await
    }

    pub async fn reject_leave(
        &self,
        id: i64,
        reason: Option<String>,
    ) -> Result<ApiResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let body = RejectLeaveRequest {
            reason: reason.filter(|r| !r.trim().is_empty()),
        };
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leave/reject/{}", base_url, id))
                    .json(&body),
            )
            .await?;
        Self::parse_api_response(response, "Failed to reject leave request.").await
    }

    pub async fn cancel_leave(&self, id: i64) -> Result<ApiResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send(
                self.http_client()
                    .put(format!("{}/leave/cancel/{}", base_url, id)),
            )
            .await?;
        Self::parse_api_response(response, "Failed to cancel leave request.").await
    }
}
