use super::{
    client::ApiClient,
    types::{ApiError, ApiResponse, LoginRequest, LoginResponse, SignupRequest},
};

impl ApiClient {
    /// Exchanges credentials for a session token. Sent without any
    /// `Authorization` header; persisting the token is the session's job.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_anonymous(
                self.http_client()
                    .post(format!("{}/auth/login", base_url))
                    .json(request),
            )
            .await?;
        Self::parse_json(response, "Something went wrong. Please try again.").await
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<ApiResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_anonymous(
                self.http_client()
                    .post(format!("{}/auth/signup", base_url))
                    .json(request),
            )
            .await?;
        Self::parse_api_response(response, "Something went wrong. Please try again.").await
    }
}
