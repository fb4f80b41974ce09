use crate::{api::ApiError, components::layout::SuccessMessage, pages::utils::MessageState};
use leptos::*;

/// Field messages carried by a validation error, in server order.
pub fn field_messages(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    error
        .details
        .as_ref()
        .and_then(|details| details.get("errors"))
        .and_then(|errors| errors.as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// `None` for errors that carry nothing beyond their message.
fn error_footer(error: &ApiError) -> Option<String> {
    let code = Some(error.code.as_str()).filter(|c| !c.is_empty() && *c != "UNKNOWN");
    match (code, error.status) {
        (Some(code), Some(status)) => Some(format!("Code: {} (HTTP {})", code, status)),
        (Some(code), None) => Some(format!("Code: {}", code)),
        (None, Some(status)) => Some(format!("HTTP {}", status)),
        (None, None) => None,
    }
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    let render = move || {
        error.get().map(|e| {
            let fields = field_messages(&e);
            let headline = if fields.is_empty() {
                e.error.clone()
            } else {
                "Please correct the following:".to_string()
            };
            view! {
                <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                    <div class="font-bold">{headline}</div>
                    {(!fields.is_empty()).then(|| view! {
                        <ul class="list-disc list-inside text-sm">
                            {fields.into_iter().map(|msg| view! { <li>{msg}</li> }).collect_view()}
                        </ul>
                    })}
                    {error_footer(&e).map(|footer| view! { <div class="text-xs opacity-75">{footer}</div> })}
                </div>
            }
        })
    };
    render
}

/// Success text or the inline error, whichever the page last recorded.
#[component]
pub fn MessageBanner(message: RwSignal<MessageState>) -> impl IntoView {
    let error = Signal::derive(move || message.with(|m| m.error.clone()));
    view! {
        {move || message.with(|m| m.success.clone()).map(|text| view! { <SuccessMessage message=text /> })}
        <InlineErrorMessage error=error />
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;
    use serde_json::json;

    #[test]
    fn inline_error_renders_validation_details() {
        let html = render_to_string(move || {
            let error = ApiError {
                error: "Validation failed".into(),
                code: "VALIDATION_ERROR".into(),
                details: Some(json!({
                    "errors": ["startDate: Start date is required", "reason: Reason is required"]
                })),
                status: Some(400),
            };
            let signal = create_rw_signal(Some(error));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Please correct the following:"));
        assert!(html.contains("Code: VALIDATION_ERROR (HTTP 400)"));
        assert!(html.contains("startDate: Start date is required"));
        assert!(html.contains("reason: Reason is required"));
    }

    #[test]
    fn inline_error_renders_code_when_present() {
        let html = render_to_string(move || {
            let signal = create_rw_signal(Some(ApiError::request_failed("Request failed")));
            view! { <InlineErrorMessage error={signal.into()} /> }
        });
        assert!(html.contains("Request failed"));
        assert!(html.contains("Code: REQUEST_FAILED"));
    }

    #[test]
    fn message_banner_switches_between_success_and_error() {
        let html = render_to_string(move || {
            let message = create_rw_signal(MessageState::default());
            message.update(|m| m.set_success("Leave request approved successfully."));
            view! { <MessageBanner message=message /> }
        });
        assert!(html.contains("Leave request approved successfully."));

        let html = render_to_string(move || {
            let message = create_rw_signal(MessageState::default());
            message.update(|m| m.set_error(ApiError::unknown("Failed to approve leave request.")));
            view! { <MessageBanner message=message /> }
        });
        assert!(html.contains("Failed to approve leave request."));
        assert!(!html.contains("Code: UNKNOWN"));
    }
}
