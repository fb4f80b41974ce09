use crate::{
    components::layout::LoadingSpinner,
    router::{redirect_to, ViewSet},
    state::auth::{use_session, Session},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardOutcome {
    Loading,
    Render,
    Redirect(&'static str),
}

/// `required: None` admits any signed-in visitor.
fn guard_outcome(session: &Session, required: Option<ViewSet>) -> GuardOutcome {
    if session.is_loading() {
        return GuardOutcome::Loading;
    }
    match (session.view_set(), required) {
        (ViewSet::Anonymous, _) => GuardOutcome::Redirect(ViewSet::Anonymous.landing_path()),
        (_, None) => GuardOutcome::Render,
        (current, Some(required)) if current == required => GuardOutcome::Render,
        (current, _) => GuardOutcome::Redirect(current.landing_path()),
    }
}

fn guarded(required: Option<ViewSet>, children: ChildrenFn) -> impl IntoView {
    let session = use_session().state();
    let outcome = create_memo(move |_| session.with(|s| guard_outcome(s, required)));
    create_effect(move |_| {
        if let GuardOutcome::Redirect(target) = outcome.get() {
            redirect_to(target);
        }
    });
    view! {
        <Show
            when=move || outcome.get() == GuardOutcome::Render
            fallback=move || {
                if outcome.get() == GuardOutcome::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    guarded(None, children)
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    guarded(Some(ViewSet::Admin), children)
}

#[component]
pub fn RequireEmployee(children: ChildrenFn) -> impl IntoView {
    guarded(Some(ViewSet::Employee), children)
}
