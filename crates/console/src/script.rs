// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The scripted demo session the console runs.

use std::sync::Arc;

use repair_desk::{TicketStore, WeeklyReport};
use repair_desk_api::{
    ApiError, CreateTicketRequest, DashboardResponse, DemoCredentials, LoginRequest,
    SessionStore, WhoAmIResponse, create_ticket, get_dashboard, get_weekly_reports, login,
};
use repair_desk_domain::Ticket;
use serde::Serialize;
use tracing::info;

use crate::config::ConsoleConfig;

/// Everything the demo session produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleReport {
    pub session: WhoAmIResponse,
    pub created_ticket: Ticket,
    pub dashboard: DashboardResponse,
    pub weekly_reports: Vec<WeeklyReport>,
    /// Every ticket, newest first.
    #[serde(skip)]
    pub tickets: Vec<Ticket>,
}

/// The ticket the demo session files.
#[must_use]
pub fn sample_ticket_request() -> CreateTicketRequest {
    CreateTicketRequest {
        device_type: String::from("pc"),
        device_id: String::from("PC-1"),
        location: String::from("L"),
        department: String::from("D"),
        issue_description: String::from("broken"),
        priority: String::from("high"),
        estimated_cost: String::new(),
        reported_by: String::from("r"),
    }
}

/// Builds both stores, logs in, files the sample ticket and collects the
/// dashboard and weekly reports.
///
/// # Errors
///
/// Returns an error if the credential list cannot be built, the login is
/// rejected, or the sample ticket is invalid.
pub async fn run(
    config: &ConsoleConfig,
    username: &str,
    password: &str,
) -> Result<ConsoleReport, ApiError> {
    let credentials: DemoCredentials = DemoCredentials::new(config.session.bcrypt_cost)?;
    let mut session: SessionStore = SessionStore::new(Arc::new(credentials), config.session);
    session.restore();

    let mut store: TicketStore = TicketStore::new(config.store);
    if config.seed_fixtures {
        store = store.with_fixtures();
    }

    let whoami: WhoAmIResponse = login(
        &mut session,
        &LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        },
    )
    .await?;

    let created_ticket: Ticket = create_ticket(
        &mut store,
        &sample_ticket_request(),
        &whoami.identity,
        session.config(),
    )
    .await?;
    info!(
        ticket_number = %created_ticket.ticket_number,
        "Filed sample ticket"
    );

    Ok(ConsoleReport {
        session: whoami,
        created_ticket,
        dashboard: get_dashboard(&store),
        weekly_reports: get_weekly_reports(&store, config.report_weeks),
        tickets: store.tickets().to_vec(),
    })
}
