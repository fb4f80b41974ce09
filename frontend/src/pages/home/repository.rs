use crate::api::{ApiClient, ApiError, LeaveRequestResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct HomeRepository {
    client: Rc<ApiClient>,
}

impl HomeRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn list_all_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.get_all_leave_requests().await
    }

    pub async fn list_my_requests(&self) -> Result<Vec<LeaveRequestResponse>, ApiError> {
        self.client.get_my_leave_requests().await
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::*;

    #[tokio::test]
    async fn home_repository_lists_by_scope() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/all");
            then.status(200).json_body(serde_json::json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/leave/my-requests");
            then.status(200).json_body(serde_json::json!([]));
        });

        let repo = HomeRepository::new(ApiClient::new_with_base_url(&server.url("/api")));
        assert!(repo.list_all_requests().await.unwrap().is_empty());
        assert_eq!(server.last_request().path, "/api/leave/all");
        assert!(repo.list_my_requests().await.unwrap().is_empty());
        assert_eq!(server.last_request().path, "/api/leave/my-requests");
    }
}
