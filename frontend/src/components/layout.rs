use crate::{
    router::{redirect_to, NavLink, HOME_PATH, LOGIN_PATH},
    state::auth::{self, use_session},
};
use leptos::*;

const LINK_CLASS: &str =
    "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let state = session.state();
    let links = Signal::derive(move || state.with(|s| s.view_set().nav_links()));
    let signed_in = Signal::derive(move || state.with(|s| s.is_authenticated()));
    let display_name = Signal::derive(move || {
        state.with(|s| {
            s.identity
                .as_ref()
                .map(|identity| identity.name.clone())
                .unwrap_or_default()
        })
    });

    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            redirect_to(LOGIN_PATH);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        logout_action.dispatch(());
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <a href=HOME_PATH class="text-xl font-semibold text-fg">
                        "Leave Management"
                    </a>
                    <nav class="flex items-center space-x-4">
                        <Show when=move || signed_in.get()>
                            <a href=HOME_PATH class=LINK_CLASS>"Home"</a>
                        </Show>
                        <For
                            each=move || links.get().iter().copied()
                            key=|link: &NavLink| link.path
                            children=move |link: NavLink| {
                                view! { <a href=link.path class=LINK_CLASS>{link.label}</a> }
                            }
                        />
                        <Show when=move || signed_in.get()>
                            <span class="text-sm text-fg-muted">{move || display_name.get()}</span>
                            <button
                                on:click=on_logout
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium disabled:opacity-50 hover:bg-action-ghost-bg-hover"
                                disabled=move || logout_pending.get()
                            >
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_identity, employee_identity, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn navbar_shows_admin_links_for_admins() {
        let html = render_to_string(move || {
            provide_session(Some(admin_identity()));
            view! { <Navbar /> }
        });
        assert!(html.contains("/admin/approve"));
        assert!(html.contains("/admin/update-balance"));
        assert!(!html.contains("/leave/apply"));
        assert!(html.contains("Logout"));
        assert!(html.contains("Admin User"));
    }

    #[test]
    fn navbar_shows_employee_links_for_employees() {
        let html = render_to_string(move || {
            provide_session(Some(employee_identity()));
            view! { <Navbar /> }
        });
        assert!(html.contains("/leave/apply"));
        assert!(html.contains("/leave/history"));
        assert!(html.contains("/leave/balance"));
        assert!(!html.contains("/admin/approve"));
    }

    #[test]
    fn navbar_offers_login_and_signup_when_anonymous() {
        let html = render_to_string(move || {
            provide_session(None);
            view! { <Navbar /> }
        });
        assert!(html.contains("/auth/login"));
        assert!(html.contains("/auth/signup"));
        assert!(!html.contains("Logout"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <SuccessMessage message="saved" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("saved"));
    }
}
