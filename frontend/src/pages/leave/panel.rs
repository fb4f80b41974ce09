use super::view_model::{ApplyLeaveViewModel, LeaveBalanceViewModel, LeaveHistoryViewModel};
use crate::api::{LeaveRequestResponse, LeaveType};
use crate::components::{
    error::{InlineErrorMessage, MessageBanner},
    layout::LoadingSpinner,
    leave_table::LeaveRequestTable,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 block w-full rounded-md border border-form-control-border bg-form-control-bg text-fg px-3 py-2 focus:outline-none focus:ring-2 focus:ring-action-primary-focus";
const PRIMARY_BUTTON_CLASS: &str = "inline-flex justify-center px-4 py-2 rounded-md text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50";

#[component]
pub fn ApplyLeavePage() -> impl IntoView {
    let vm = ApplyLeaveViewModel::new();
    let form = vm.form;
    let pending = vm.apply_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="max-w-2xl mx-auto py-6 px-4 space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Apply for Leave"</h1>
            <MessageBanner message=vm.message />
            <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg-muted" for="leave-type">"Leave Type"</label>
                    <select
                        id="leave-type"
                        class=INPUT_CLASS
                        on:change=move |ev| form.leave_type_signal().set(event_target_value(&ev))
                        prop:value=move || form.leave_type_signal().get()
                    >
                        {LeaveType::ALL
                            .iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="start-date">"Start Date"</label>
                        <input
                            id="start-date"
                            type="date"
                            class=INPUT_CLASS
                            on:input=move |ev| form.start_signal().set(event_target_value(&ev))
                            prop:value=move || form.start_signal().get()
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg-muted" for="end-date">"End Date"</label>
                        <input
                            id="end-date"
                            type="date"
                            class=INPUT_CLASS
                            on:input=move |ev| form.end_signal().set(event_target_value(&ev))
                            prop:value=move || form.end_signal().get()
                        />
                    </div>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg-muted" for="reason">"Reason"</label>
                    <textarea
                        id="reason"
                        rows="3"
                        class=INPUT_CLASS
                        on:input=move |ev| form.reason_signal().set(event_target_value(&ev))
                        prop:value=move || form.reason_signal().get()
                    ></textarea>
                </div>
                <button type="submit" class=PRIMARY_BUTTON_CLASS disabled=move || pending.get()>
                    {move || if pending.get() { "Submitting..." } else { "Submit Request" }}
                </button>
            </form>
        </div>
    }
}

#[component]
pub fn LeaveHistoryPage() -> impl IntoView {
    let vm = LeaveHistoryViewModel::new();
    let requests = vm.requests();
    let load_error = vm.load_error();
    let loading = vm.requests_resource.loading();
    let cancel_pending = vm.cancel_action.pending();
    let on_cancel = vm.on_cancel();

    let actions = Callback::new(move |request: LeaveRequestResponse| {
        if !request.is_pending() {
            return ().into_view();
        }
        view! {
            <button
                class="text-sm font-medium text-status-error-text hover:underline disabled:opacity-50"
                disabled=move || cancel_pending.get()
                on:click=move |_| on_cancel.call(request.clone())
            >
                "Cancel"
            </button>
        }
        .into_view()
    });

    view! {
        <div class="max-w-7xl mx-auto py-6 px-4 space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Leave History"</h1>
            <MessageBanner message=vm.message />
            <InlineErrorMessage error=load_error />
            <section class="bg-surface-elevated shadow rounded-lg p-4">
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <Show
                        when=move || !requests.with(Vec::is_empty)
                        fallback=|| view! { <p class="text-sm text-fg-muted">"No leave requests found."</p> }
                    >
                        <LeaveRequestTable requests=requests actions=actions />
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[component]
fn BalanceCard(label: &'static str, days: i32) -> impl IntoView {
    view! {
        <div class="flex-1 min-w-[160px] p-4 bg-surface-elevated shadow rounded-lg">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="text-2xl font-bold text-fg">{format!("{} days", days)}</p>
        </div>
    }
}

#[component]
pub fn LeaveBalancePage() -> impl IntoView {
    let vm = LeaveBalanceViewModel::new();
    let balance = vm.balance();
    let error = vm.error();
    let loading = vm.balance_resource.loading();

    view! {
        <div class="max-w-4xl mx-auto py-6 px-4 space-y-4">
            <h1 class="text-2xl font-bold text-fg">"Leave Balance"</h1>
            <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                <Show
                    when=move || error.get().is_none()
                    fallback=|| view! {
                        <InlineErrorMessage error=Signal::derive(|| Some(crate::api::ApiError::unknown(
                            "Failed to load leave balance. Please try again later.",
                        ))) />
                    }
                >
                    {move || balance.get().map(|b| view! {
                        <div class="flex flex-wrap gap-4">
                            <BalanceCard label="Annual Leave" days=b.annual_leave_balance />
                            <BalanceCard label="Sick Leave" days=b.sick_leave_balance />
                            <BalanceCard label="Casual Leave" days=b.casual_leave_balance />
                        </div>
                    })}
                </Show>
            </Show>
        </div>
    }
}
