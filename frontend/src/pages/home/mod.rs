use crate::router::ViewSet;
use crate::state::auth::use_session;
use leptos::*;

pub mod repository;
pub mod view_model;

mod panel;

pub use panel::{AdminHome, EmployeeHome};

/// Picks the dashboard for the signed-in role.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let view_set = Signal::derive(move || session.state().with(|s| s.view_set()));
    move || match view_set.get() {
        ViewSet::Admin => view! { <AdminHome /> }.into_view(),
        ViewSet::Employee => view! { <EmployeeHome /> }.into_view(),
        ViewSet::Anonymous => ().into_view(),
    }
}
