use super::view_model::use_login_view_model;
use crate::{components::error::InlineErrorMessage, router::SIGNUP_PATH};
use leptos::{ev::SubmitEvent, *};
use web_sys::HtmlInputElement;

const INPUT_CLASS: &str = "appearance-none relative block w-full px-3 py-2 border border-border rounded-md text-fg focus:outline-none focus:ring-action-primary-focus sm:text-sm";

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let error: Signal<Option<_>> = vm.error.into();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface py-12 px-4">
            <div class="max-w-md w-full space-y-8">
                <h2 class="text-center text-3xl font-extrabold text-fg">"Login"</h2>
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label for="email" class="sr-only">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            required
                            class=INPUT_CLASS
                            placeholder="Email"
                            prop:value=move || vm.email.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                vm.email.set(target.value());
                            }
                        />
                    </div>
                    <div>
                        <label for="password" class="sr-only">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            required
                            class=INPUT_CLASS
                            placeholder="Password"
                            prop:value=move || vm.password.get()
                            on:input=move |ev| {
                                let target = event_target::<HtmlInputElement>(&ev);
                                vm.password.set(target.value());
                            }
                        />
                    </div>

                    <InlineErrorMessage error=error />

                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <p class="text-center text-sm text-fg-muted">
                    "No account yet? "
                    <a href=SIGNUP_PATH class="text-action-primary-bg">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
