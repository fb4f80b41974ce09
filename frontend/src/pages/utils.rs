use crate::{api::ApiError, state::auth::SessionContext};
use leptos::*;

#[derive(Clone, Default, Debug, PartialEq)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<ApiError>,
}

impl MessageState {
    pub fn set_success(&mut self, msg: impl Into<String>) {
        self.success = Some(msg.into());
        self.error = None;
    }

    pub fn set_error(&mut self, msg: ApiError) {
        self.error = Some(msg);
        self.success = None;
    }

    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }
}

/// Re-triggers resources keyed on `reload`.
pub fn bump(reload: RwSignal<u32>) {
    reload.update(|value| *value = value.wrapping_add(1));
}

/// A 401 ends the session before the error is shown.
pub fn report_error(session: SessionContext, message: RwSignal<MessageState>, err: ApiError) {
    session.handle_api_error(&err);
    message.update(|msg| msg.set_error(err));
}
