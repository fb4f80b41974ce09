use super::view_model::{ApproveRequestsViewModel, UpdateBalanceViewModel};
use crate::api::LeaveRequestResponse;
use crate::components::{
    error::{InlineErrorMessage, MessageBanner},
    layout::LoadingSpinner,
    leave_table::LeaveRequestTable,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-action-primary-focus";
const PRIMARY_BUTTON_CLASS: &str = "inline-flex justify-center px-4 py-2 rounded-md text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50";
const SECONDARY_BUTTON_CLASS: &str = "inline-flex justify-center px-4 py-2 rounded-md text-sm font-semibold text-fg border border-border hover:bg-action-ghost-bg-hover disabled:opacity-50";

#[component]
pub fn ApproveRequestsPage() -> impl IntoView {
    let vm = ApproveRequestsViewModel::new();
    let requests = vm.pending_requests();
    let load_error = vm.load_error();
    let loading = vm.pending_resource.loading();
    let deciding = vm.decision_action.pending();

    let actions = Callback::new(move |request: LeaveRequestResponse| {
        let id = request.id;
        view! {
            <button
                class="text-sm font-medium text-status-success-text hover:underline disabled:opacity-50"
                disabled=move || deciding.get()
                on:click=move |_| {
                    vm.decide(id, true);
                }
            >
                "Approve"
            </button>
            <button
                class="text-sm font-medium text-status-error-text hover:underline disabled:opacity-50"
                disabled=move || deciding.get()
                on:click=move |_| {
                    vm.decide(id, false);
                }
            >
                "Reject"
            </button>
        }
        .into_view()
    });

    view! {
        <div class="max-w-7xl mx-auto py-6 px-4 space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Approve Leave Requests"</h1>
            <MessageBanner message=vm.message />
            <InlineErrorMessage error=load_error />
            <div class="max-w-md">
                <label class="block text-sm font-medium text-fg-muted" for="reject-reason">
                    "Rejection reason (optional)"
                </label>
                <input
                    id="reject-reason"
                    type="text"
                    class=INPUT_CLASS
                    on:input=move |ev| vm.reject_reason.set(event_target_value(&ev))
                    prop:value=move || vm.reject_reason.get()
                />
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-4">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <Show
                        when=move || !requests.with(Vec::is_empty)
                        fallback=|| view! { <p class="text-sm text-fg-muted">"No pending leave requests."</p> }
                    >
                        <LeaveRequestTable requests=requests show_employee=true actions=actions />
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[component]
pub fn UpdateBalancePage() -> impl IntoView {
    let vm = UpdateBalanceViewModel::new();
    let form = vm.form;
    let loading = vm.load_action.pending();
    let saving = vm.update_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    let number_input = move |id: &'static str, label: &'static str, signal: RwSignal<String>| {
        view! {
            <div>
                <label class="block text-sm font-medium text-fg-muted" for=id>{label}</label>
                <input
                    id=id
                    type="number"
                    min="0"
                    class=INPUT_CLASS
                    on:input=move |ev| signal.set(event_target_value(&ev))
                    prop:value=move || signal.get()
                />
            </div>
        }
    };

    view! {
        <div class="max-w-2xl mx-auto py-6 px-4 space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Update Leave Balance"</h1>
            <MessageBanner message=vm.message />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted" for="employee-email">
                        "Employee Email"
                    </label>
                    <div class="flex gap-2">
                        <input
                            id="employee-email"
                            type="email"
                            class=INPUT_CLASS
                            on:input=move |ev| form.email_signal().set(event_target_value(&ev))
                            prop:value=move || form.email_signal().get()
                        />
                        <button
                            type="button"
                            class=SECONDARY_BUTTON_CLASS
                            disabled=move || loading.get()
                            on:click=move |_| {
                                vm.load();
                            }
                        >
                            "Load Current Balance"
                        </button>
                    </div>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-4">
                    {number_input("annual-balance", "Annual Leave", form.annual_signal())}
                    {number_input("sick-balance", "Sick Leave", form.sick_signal())}
                    {number_input("casual-balance", "Casual Leave", form.casual_signal())}
                </div>
                <button type="submit" class=PRIMARY_BUTTON_CLASS disabled=move || saving.get()>
                    {move || if saving.get() { "Updating..." } else { "Update Balance" }}
                </button>
            </form>
        </div>
    }
}
