use crate::api::{LeaveRequestResponse, LeaveStatus};
use chrono::NaiveDate;
use leptos::*;

pub fn status_badge_class(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Approved => "bg-status-success-bg text-status-success-text",
        LeaveStatus::Rejected => "bg-status-error-bg text-status-error-text",
        LeaveStatus::Cancelled => "bg-status-warning-bg text-status-warning-text",
        LeaveStatus::Pending => "bg-status-info-bg text-status-info-text",
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn applied_on(request: &LeaveRequestResponse) -> String {
    request
        .applied_at
        .map(|at| format_date(at.date()))
        .unwrap_or_else(|| "-".into())
}

#[component]
pub fn StatusBadge(status: LeaveStatus) -> impl IntoView {
    view! {
        <span class=format!("inline-flex px-2 py-0.5 rounded-full text-xs font-semibold {}", status_badge_class(status))>
            {status.as_str()}
        </span>
    }
}

/// `actions` renders the trailing cell of each row; the column is omitted
/// when absent.
#[component]
pub fn LeaveRequestTable(
    #[prop(into)] requests: Signal<Vec<LeaveRequestResponse>>,
    #[prop(optional)] show_employee: bool,
    #[prop(optional)] actions: Option<Callback<LeaveRequestResponse, View>>,
) -> impl IntoView {
    let has_actions = actions.is_some();
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead>
                    <tr class="text-left text-fg-muted">
                        <Show when=move || show_employee>
                            <th class="px-3 py-2">"Employee"</th>
                            <th class="px-3 py-2">"Email"</th>
                        </Show>
                        <th class="px-3 py-2">"Type"</th>
                        <th class="px-3 py-2">"From"</th>
                        <th class="px-3 py-2">"To"</th>
                        <th class="px-3 py-2">"Reason"</th>
                        <th class="px-3 py-2">"Status"</th>
                        <th class="px-3 py-2">"Applied On"</th>
                        <Show when=move || has_actions>
                            <th class="px-3 py-2">"Actions"</th>
                        </Show>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || requests.get()
                        key=|request| request.id
                        children=move |request: LeaveRequestResponse| {
                            let action_cell = actions.map(|render| render.call(request.clone()));
                            view! {
                                <tr>
                                    {show_employee.then(|| view! {
                                        <td class="px-3 py-2">{request.user_name.clone().unwrap_or_default()}</td>
                                        <td class="px-3 py-2">{request.user_email.clone().unwrap_or_default()}</td>
                                    })}
                                    <td class="px-3 py-2">{request.leave_type.label()}</td>
                                    <td class="px-3 py-2">{format_date(request.start_date)}</td>
                                    <td class="px-3 py-2">{format_date(request.end_date)}</td>
                                    <td class="px-3 py-2">{request.reason.clone().unwrap_or_default()}</td>
                                    <td class="px-3 py-2"><StatusBadge status=request.status /></td>
                                    <td class="px-3 py-2">{applied_on(&request)}</td>
                                    {action_cell.map(|cell| view! { <td class="px-3 py-2 space-x-2">{cell}</td> })}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}
