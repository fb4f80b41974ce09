use leptos::*;

pub mod repository;
pub mod utils;
pub mod view_model;

mod panel;

pub use panel::SignupPanel;

#[component]
pub fn SignupPage() -> impl IntoView {
    view! { <SignupPanel /> }
}
