use crate::api::{ApiError, LeaveBalanceResponse, UpdateLeaveBalanceRequest};
use leptos::*;

#[derive(Clone, Copy)]
pub struct BalanceFormState {
    email: RwSignal<String>,
    annual: RwSignal<String>,
    sick: RwSignal<String>,
    casual: RwSignal<String>,
}

impl Default for BalanceFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            annual: create_rw_signal(String::new()),
            sick: create_rw_signal(String::new()),
            casual: create_rw_signal(String::new()),
        }
    }
}

impl BalanceFormState {
    pub fn email_signal(&self) -> RwSignal<String> {
        self.email
    }

    pub fn annual_signal(&self) -> RwSignal<String> {
        self.annual
    }

    pub fn sick_signal(&self) -> RwSignal<String> {
        self.sick
    }

    pub fn casual_signal(&self) -> RwSignal<String> {
        self.casual
    }

    /// Copies a loaded balance into the editable fields.
    pub fn fill(&self, balance: &LeaveBalanceResponse) {
        self.annual.set(balance.annual_leave_balance.to_string());
        self.sick.set(balance.sick_leave_balance.to_string());
        self.casual.set(balance.casual_leave_balance.to_string());
    }

    pub fn lookup_email(&self) -> Result<String, ApiError> {
        let email = self.email.get_untracked().trim().to_string();
        if email.is_empty() {
            return Err(ApiError::validation("Please enter an employee email."));
        }
        Ok(email)
    }

    pub fn to_payload(&self) -> Result<UpdateLeaveBalanceRequest, ApiError> {
        let email = self.lookup_email()?;
        Ok(UpdateLeaveBalanceRequest {
            email,
            annual_leave_balance: parse_days(&self.annual.get_untracked(), "Annual leave")?,
            sick_leave_balance: parse_days(&self.sick.get_untracked(), "Sick leave")?,
            casual_leave_balance: parse_days(&self.casual.get_untracked(), "Casual leave")?,
        })
    }
}

fn parse_days(raw: &str, label: &str) -> Result<i32, ApiError> {
    match raw.trim().parse::<i32>() {
        Ok(days) if days >= 0 => Ok(days),
        _ => Err(ApiError::validation(format!(
            "{} balance must be a whole number of days (0 or more).",
            label
        ))),
    }
}
