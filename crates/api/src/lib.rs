// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod auth;
mod capabilities;
mod config;
mod credentials;
mod error;
mod export;
mod handlers;
mod request_response;
mod session;

#[cfg(test)]
mod tests;

// Re-export public types
pub use auth::AuthorizationService;
pub use capabilities::{
    Capability, SessionCapabilities, TicketCapabilities, compute_session_capabilities,
    compute_ticket_capabilities,
};
pub use config::SessionConfig;
pub use credentials::{CredentialVerifier, DEMO_PASSWORD, DemoCredentials};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use export::{tickets_csv, weekly_reports_csv};
pub use handlers::{
    DASHBOARD_RECENT_LIMIT, add_note, create_ticket, delete_ticket, get_admin_overview,
    get_dashboard, get_weekly_reports, list_tickets, login, logout, update_ticket_status, whoami,
};
pub use request_response::{
    AddNoteRequest, CreateTicketRequest, DashboardResponse, ListTicketsRequest, LoginRequest,
    UpdateStatusRequest, WhoAmIResponse,
};
pub use session::{
    EMPTY_CREDENTIALS_MESSAGE, LOGIN_FAILURE_MESSAGE, LoadState, SessionEvent, SessionState,
    SessionStore,
};
