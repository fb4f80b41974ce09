use crate::api::{ApiClient, ApiError, LeaveRequestResponse, LeaveStatus};
use crate::pages::home::repository::HomeRepository;
use crate::state::auth::use_session;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardScope {
    AllRequests,
    MyRequests,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
}

pub fn summarize(requests: &[LeaveRequestResponse]) -> DashboardSummary {
    requests
        .iter()
        .fold(DashboardSummary::default(), |mut summary, request| {
            summary.total += 1;
            match request.status {
                LeaveStatus::Pending => summary.pending += 1,
                LeaveStatus::Approved => summary.approved += 1,
                LeaveStatus::Rejected => summary.rejected += 1,
                LeaveStatus::Cancelled => {}
            }
            summary
        })
}

#[derive(Clone, Copy)]
pub struct HomeViewModel {
    pub requests_resource: Resource<(), Result<Vec<LeaveRequestResponse>, ApiError>>,
}

impl HomeViewModel {
    pub fn new(scope: DashboardScope) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(HomeRepository::new(api));
        let session = use_session();

        let requests_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = match scope {
                        DashboardScope::AllRequests => repo.list_all_requests().await,
                        DashboardScope::MyRequests => repo.list_my_requests().await,
                    };
                    if let Err(err) = &result {
                        session.handle_api_error(err);
                    }
                    result
                }
            },
        );

        Self { requests_resource }
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

    pub fn error(&self) -> Signal<Option<ApiError>> {
        let resource = self.requests_resource;
        Signal::derive(move || resource.get().and_then(|result| result.err()))
    }

    pub fn summary(&self) -> Signal<DashboardSummary> {
        let requests = self.requests();
        Signal::derive(move || requests.with(|list| summarize(list)))
    }
}
