use super::{
    utils::{role_label, ROLE_OPTIONS},
    view_model::use_signup_view_model,
};
use crate::{components::error::InlineErrorMessage, router::LOGIN_PATH};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlSelectElement};

const INPUT_CLASS: &str = "block w-full px-3 py-2 border border-border rounded-md text-fg focus:outline-none focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let pending = vm.signup_action.pending();
    let error: Signal<Option<_>> = vm.error.into();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    let text_input = move |id: &'static str, kind: &'static str, label: &'static str, value: RwSignal<String>| {
        view! {
            <div>
                <label for=id class="block text-sm font-medium text-fg">{label}</label>
                <input
                    id=id
                    type=kind
                    required
                    class=INPUT_CLASS
                    prop:value=move || value.get()
                    on:input=move |ev| {
                        let target = event_target::<HtmlInputElement>(&ev);
                        value.set(target.value());
                    }
                />
            </div>
        }
    };

    view! {
        <div class="max-w-lg mx-auto mt-10 p-6 bg-surface-elevated shadow rounded-lg space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Signup"</h1>
            <InlineErrorMessage error=error />
            <form class="space-y-4" on:submit=on_submit>
                {text_input("name", "text", "Name", vm.name)}
                {text_input("email", "email", "Email", vm.email)}
                {text_input("password", "password", "Password", vm.password)}
                <div>
                    <label for="role" class="block text-sm font-medium text-fg">"Role"</label>
                    <select
                        id="role"
                        class=INPUT_CLASS
                        prop:value=move || vm.role.get()
                        on:change=move |ev| {
                            let target = event_target::<HtmlSelectElement>(&ev);
                            vm.role.set(target.value());
                        }
                    >
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|role| view! { <option value=role.as_str()>{role_label(role)}</option> })
                            .collect_view()}
                    </select>
                </div>
                <button
                    type="submit"
                    disabled=move || pending.get()
                    class="w-full py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                >
                    {move || if pending.get() { "Signing up..." } else { "Signup" }}
                </button>
            </form>
            <p class="text-sm text-fg-muted">
                "Already registered? "
                <a href=LOGIN_PATH class="text-action-primary-bg">"Login"</a>
            </p>
        </div>
    }
}
