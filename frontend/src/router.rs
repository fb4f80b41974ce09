use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{
        guard::{RequireAdmin, RequireAuth, RequireEmployee},
        layout::Navbar,
    },
    pages::{
        admin::{ApproveRequestsPage, UpdateBalancePage},
        home::{AdminHome, EmployeeHome, HomePage},
        leave::{ApplyLeavePage, LeaveBalancePage, LeaveHistoryPage},
        login::LoginPage,
        signup::SignupPage,
    },
    state::auth::AuthProvider,
    utils::{storage as storage_utils, token::Identity},
};

pub const LOGIN_PATH: &str = "/auth/login";
pub const SIGNUP_PATH: &str = "/auth/signup";
pub const HOME_PATH: &str = "/";

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/auth/login",
    "/auth/signup",
    "/employee",
    "/leave/apply",
    "/leave/history",
    "/leave/balance",
    "/admin",
    "/admin/approve",
    "/admin/update-balance",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/auth/login", "/auth/signup"];

pub const EMPLOYEE_ROUTE_PATHS: &[&str] = &[
    "/",
    "/employee",
    "/leave/apply",
    "/leave/history",
    "/leave/balance",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &["/", "/admin", "/admin/approve", "/admin/update-balance"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
}

const ANONYMOUS_LINKS: &[NavLink] = &[
    NavLink {
        label: "Login",
        path: LOGIN_PATH,
    },
    NavLink {
        label: "Signup",
        path: SIGNUP_PATH,
    },
];

const EMPLOYEE_LINKS: &[NavLink] = &[
    NavLink {
        label: "Apply Leave",
        path: "/leave/apply",
    },
    NavLink {
        label: "Leave History",
        path: "/leave/history",
    },
    NavLink {
        label: "Leave Balance",
        path: "/leave/balance",
    },
];

const ADMIN_LINKS: &[NavLink] = &[
    NavLink {
        label: "Approve Leave",
        path: "/admin/approve",
    },
    NavLink {
        label: "Update Leave Balance",
        path: "/admin/update-balance",
    },
];

/// Which family of views the current visitor may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSet {
    Anonymous,
    Employee,
    Admin,
}

pub fn view_set_for(identity: Option<&Identity>) -> ViewSet {
    match identity {
        None => ViewSet::Anonymous,
        Some(identity) if identity.is_admin() => ViewSet::Admin,
        Some(_) => ViewSet::Employee,
    }
}

impl ViewSet {
    pub fn nav_links(&self) -> &'static [NavLink] {
        match self {
            ViewSet::Anonymous => ANONYMOUS_LINKS,
            ViewSet::Employee => EMPLOYEE_LINKS,
            ViewSet::Admin => ADMIN_LINKS,
        }
    }

    pub fn route_paths(&self) -> &'static [&'static str] {
        match self {
            ViewSet::Anonymous => &[],
            ViewSet::Employee => EMPLOYEE_ROUTE_PATHS,
            ViewSet::Admin => ADMIN_ROUTE_PATHS,
        }
    }

    /// Login and signup stay reachable for everyone.
    pub fn allows(&self, path: &str) -> bool {
        PUBLIC_ROUTE_PATHS.contains(&path) || self.route_paths().contains(&path)
    }

    pub fn landing_path(&self) -> &'static str {
        match self {
            ViewSet::Anonymous => LOGIN_PATH,
            ViewSet::Employee | ViewSet::Admin => HOME_PATH,
        }
    }
}

/// Full page navigation; a no-op outside the browser.
pub fn redirect_to(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Ok(window) = storage_utils::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        log::debug!("redirect to {} skipped outside the browser", path);
    }
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::with_token_store(
        storage_utils::default_token_store(),
    ));
    view! {
        <AuthProvider>
            <Router>
                <Navbar/>
                <main>
                    <Routes>
                        <Route path="/" view=ProtectedHome/>
                        <Route path="/auth/login" view=LoginPage/>
                        <Route path="/auth/signup" view=SignupPage/>
                        <Route path="/employee" view=ProtectedEmployeeHome/>
                        <Route path="/leave/apply" view=ProtectedApplyLeave/>
                        <Route path="/leave/history" view=ProtectedLeaveHistory/>
                        <Route path="/leave/balance" view=ProtectedLeaveBalance/>
                        <Route path="/admin" view=ProtectedAdminHome/>
                        <Route path="/admin/approve" view=ProtectedApproveRequests/>
                        <Route path="/admin/update-balance" view=ProtectedUpdateBalance/>
                    </Routes>
                </main>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedHome() -> impl IntoView {
    view! { <RequireAuth><HomePage/></RequireAuth> }
}

#[component]
fn ProtectedEmployeeHome() -> impl IntoView {
    view! { <RequireEmployee><EmployeeHome/></RequireEmployee> }
}

#[component]
fn ProtectedApplyLeave() -> impl IntoView {
    view! { <RequireEmployee><ApplyLeavePage/></RequireEmployee> }
}

#[component]
fn ProtectedLeaveHistory() -> impl IntoView {
    view! { <RequireEmployee><LeaveHistoryPage/></RequireEmployee> }
}

#[component]
fn ProtectedLeaveBalance() -> impl IntoView {
    view! { <RequireEmployee><LeaveBalancePage/></RequireEmployee> }
}

#[component]
fn ProtectedAdminHome() -> impl IntoView {
    view! { <RequireAdmin><AdminHome/></RequireAdmin> }
}

#[component]
fn ProtectedApproveRequests() -> impl IntoView {
    view! { <RequireAdmin><ApproveRequestsPage/></RequireAdmin> }
}

#[component]
fn ProtectedUpdateBalance() -> impl IntoView {
    view! { <RequireAdmin><UpdateBalancePage/></RequireAdmin> }
}
