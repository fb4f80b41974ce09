use crate::api::{ApiError, CreateLeaveRequest, LeaveType};
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct LeaveFormState {
    leave_type: RwSignal<String>,
    start_date: RwSignal<String>,
    end_date: RwSignal<String>,
    reason: RwSignal<String>,
}

impl Default for LeaveFormState {
    fn default() -> Self {
        Self {
            leave_type: create_rw_signal(LeaveType::Annual.as_str().to_string()),
            start_date: create_rw_signal(String::new()),
            end_date: create_rw_signal(String::new()),
            reason: create_rw_signal(String::new()),
        }
    }
}

impl LeaveFormState {
    pub fn leave_type_signal(&self) -> RwSignal<String> {
        self.leave_type
    }

    pub fn start_signal(&self) -> RwSignal<String> {
        self.start_date
    }

    pub fn end_signal(&self) -> RwSignal<String> {
        self.end_date
    }

    pub fn reason_signal(&self) -> RwSignal<String> {
        self.reason
    }

    pub fn reset(&self) {
        self.leave_type.set(LeaveType::Annual.as_str().into());
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        self.reason.set(String::new());
    }

    pub fn to_payload(self) -> Result<CreateLeaveRequest, ApiError> {
        let start = parse_date(
            &self.start_date.get_untracked(),
            "Please enter a start date (YYYY-MM-DD).",
        )?;
        let end = parse_date(
            &self.end_date.get_untracked(),
            "Please enter an end date (YYYY-MM-DD).",
        )?;
        if end < start {
            return Err(ApiError::validation(
                "End date must be on or after the start date.",
            ));
        }
        let leave_type = LeaveType::parse(&self.leave_type.get_untracked())
            .ok_or_else(|| ApiError::validation("Please choose a leave type."))?;
        let reason = self.reason.get_untracked().trim().to_string();
        if reason.is_empty() {
            return Err(ApiError::validation("Please enter a reason."));
        }
        Ok(CreateLeaveRequest {
            start_date: start,
            end_date: end,
            leave_type,
            reason,
        })
    }
}

fn parse_date(input: &str, err: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::validation(err.to_string()))
}
