use super::view_model::{DashboardScope, HomeViewModel};
use crate::components::{
    error::InlineErrorMessage, layout::LoadingSpinner, leave_table::LeaveRequestTable,
};
use leptos::*;

const ACTION_LINK_CLASS: &str = "inline-flex items-center px-4 py-2 rounded-md text-sm font-semibold text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover";

#[component]
fn SummaryTile(label: &'static str, value: Signal<usize>) -> impl IntoView {
    view! {
        <div class="flex-1 min-w-[140px] p-4 bg-surface-elevated shadow rounded-lg">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="text-2xl font-bold text-fg">{move || value.get()}</p>
        </div>
    }
}

#[component]
pub fn AdminHome() -> impl IntoView {
    let vm = HomeViewModel::new(DashboardScope::AllRequests);
    let requests = vm.requests();
    let error = vm.error();
    let summary = vm.summary();
    let loading = vm.requests_resource.loading();

    view! {
        <div class="max-w-7xl mx-auto py-6 px-4 space-y-6">
            <h1 class="text-2xl font-bold text-fg">"Admin Dashboard"</h1>
            <div class="flex flex-wrap gap-4">
                <SummaryTile label="Total Requests" value=Signal::derive(move || summary.get().total) />
                <SummaryTile label="Pending" value=Signal::derive(move || summary.get().pending) />
                <SummaryTile label="Approved" value=Signal::derive(move || summary.get().approved) />
                <SummaryTile label="Rejected" value=Signal::derive(move || summary.get().rejected) />
            </div>
            <div class="flex gap-3">
                <a href="/admin/approve" class=ACTION_LINK_CLASS>"Review Pending Requests"</a>
                <a href="/admin/update-balance" class=ACTION_LINK_CLASS>"Update Leave Balances"</a>
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                <h2 class="text-lg font-semibold text-fg">"All Leave Requests"</h2>
                <InlineErrorMessage error=error />
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <Show
                        when=move || !requests.with(Vec::is_empty)
                        fallback=|| view! { <p class="text-sm text-fg-muted">"No leave requests found."</p> }
                    >
                        <LeaveRequestTable requests=requests show_employee=true />
                    </Show>
                </Show>
            </section>
        </div>
    }
}

#[component]
pub fn EmployeeHome() -> impl IntoView {
    let vm = HomeViewModel::new(DashboardScope::MyRequests);
    let requests = vm.requests();
    let error = vm.error();
    let loading = vm.requests_resource.loading();

    view! {
        <div class="max-w-7xl mx-auto py-6 px-4 space-y-6">
            <div class="flex justify-between items-center">
                <h1 class="text-2xl font-bold text-fg">"Employee Dashboard"</h1>
                <a href="/leave/apply" class=ACTION_LINK_CLASS>"Apply for Leave"</a>
            </div>
            <section class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
                <h2 class="text-lg font-semibold text-fg">"My Leave Requests"</h2>
                <InlineErrorMessage error=error />
                <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner /> }>
                    <Show
                        when=move || !requests.with(Vec::is_empty)
                        fallback=|| view! {
                            <div class="text-center py-8 space-y-3">
                                <p class="text-sm text-fg-muted">"You haven't made any leave requests yet."</p>
                                <a href="/leave/apply" class=ACTION_LINK_CLASS>"Apply for your first leave"</a>
                            </div>
                        }
                    >
                        <LeaveRequestTable requests=requests />
                    </Show>
                </Show>
            </section>
        </div>
    }
}
