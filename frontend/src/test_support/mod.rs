#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{LeaveRequestResponse, LeaveStatus, LeaveType};
    use crate::state::auth::SessionContext;
    use crate::utils::storage::MemoryTokenStore;
    use crate::utils::token::{encode_for_test, Identity, Role};
    use chrono::{NaiveDate, TimeZone, Utc};
    use leptos::*;
    use std::rc::Rc;

    pub fn admin_identity() -> Identity {
        Identity {
            id: "1".into(),
            name: "Admin User".into(),
            email: "admin@example.com".into(),
            role: Role::Admin,
            expires_at: Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn employee_identity() -> Identity {
        Identity {
            id: "2".into(),
            name: "Regular Employee".into(),
            email: "employee@example.com".into(),
            role: Role::Employee,
            expires_at: Utc.with_ymd_and_hms(2100, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    pub fn token_for(identity: &Identity) -> String {
        encode_for_test(&serde_json::json!({
            "sub": identity.id,
            "name": identity.name,
            "email": identity.email,
            "role": identity.role.as_str(),
            "exp": identity.expires_at.timestamp(),
        }))
    }

    /// Provides a session that has finished its startup check.
    pub fn provide_session(identity: Option<Identity>) -> SessionContext {
        let store = match identity.as_ref() {
            Some(identity) => MemoryTokenStore::with_token(token_for(identity)),
            None => MemoryTokenStore::new(),
        };
        let session = SessionContext::new(Rc::new(store));
        session.check_auth();
        provide_context(session);
        session
    }

    pub fn provide_loading_session() -> SessionContext {
        let session = SessionContext::new(Rc::new(MemoryTokenStore::new()));
        provide_context(session);
        session
    }

    pub fn leave_request(id: i64, status: LeaveStatus) -> LeaveRequestResponse {
        LeaveRequestResponse {
            id,
            user_name: Some("Alice Example".into()),
            user_email: Some("alice@example.com".into()),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 12).unwrap(),
            reason: Some("family trip".into()),
            leave_type: LeaveType::Annual,
            status,
            applied_at: None,
        }
    }
}
