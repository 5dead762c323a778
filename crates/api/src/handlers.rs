// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request handlers.
//!
//! Handlers sit between a presentation layer and the stores. They parse raw
//! form input, validate it, apply the role checks, and only then mutate the
//! ticket store.

use repair_desk::{TicketCounts, TicketFilter, TicketStore, WeeklyReport};
use repair_desk_domain::{
    DeviceType, Identity, Priority, Ticket, TicketDraft, TicketId, TicketStatus, TicketUpdate,
    format_note, parse_cost, validate_ticket_draft,
};
use tracing::info;

use crate::auth::AuthorizationService;
use crate::capabilities::compute_session_capabilities;
use crate::config::SessionConfig;
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddNoteRequest, CreateTicketRequest, DashboardResponse, ListTicketsRequest, LoginRequest,
    UpdateStatusRequest, WhoAmIResponse,
};
use crate::session::{EMPTY_CREDENTIALS_MESSAGE, LOGIN_FAILURE_MESSAGE, SessionStore};

/// Number of tickets shown in the dashboard's recent list.
pub const DASHBOARD_RECENT_LIMIT: usize = 5;

/// Logs in and returns the new identity with its capabilities.
///
/// # Errors
///
/// Returns `ApiError::AuthenticationFailed` with the message to show the
/// user if either field is blank or the credentials are rejected.
pub async fn login(
    session: &mut SessionStore,
    request: &LoginRequest,
) -> Result<WhoAmIResponse, ApiError> {
    if request.username.is_empty() || request.password.is_empty() {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from(EMPTY_CREDENTIALS_MESSAGE),
        });
    }

    if !session.login(&request.username, &request.password).await {
        return Err(ApiError::AuthenticationFailed {
            reason: String::from(LOGIN_FAILURE_MESSAGE),
        });
    }

    whoami(session)
}

/// Logs out. Never fails.
pub fn logout(session: &mut SessionStore) {
    session.logout();
}

/// Returns the current identity with its capabilities.
///
/// # Errors
///
/// Returns an error if no one is logged in.
pub fn whoami(session: &SessionStore) -> Result<WhoAmIResponse, ApiError> {
    let identity: &Identity = session.require_identity()?;
    Ok(WhoAmIResponse {
        identity: identity.clone(),
        capabilities: compute_session_capabilities(Some(identity)),
    })
}

/// Opens a ticket from the new-ticket form.
///
/// The ticket starts `pending`, assigned to `actor`, with no notes. Once the
/// form is valid the call waits out `config`'s simulated create latency
/// before the ticket is stored.
///
/// # Errors
///
/// Returns `ApiError::InvalidInput` if the device type or priority is
/// unknown, the cost is not a non-negative number, or a required field is
/// blank. Nothing is created in that case.
pub async fn create_ticket(
    store: &mut TicketStore,
    request: &CreateTicketRequest,
    actor: &Identity,
    config: &SessionConfig,
) -> Result<Ticket, ApiError> {
    let device_type: DeviceType = request
        .device_type
        .parse()
        .map_err(translate_domain_error)?;
    let priority: Priority = request.priority.parse().map_err(translate_domain_error)?;
    let estimated_cost: Option<f64> =
        parse_cost(&request.estimated_cost).map_err(translate_domain_error)?;

    let draft: TicketDraft = TicketDraft {
        device_type,
        device_id: request.device_id.trim().to_string(),
        location: request.location.trim().to_string(),
        department: request.department.trim().to_string(),
        issue_description: request.issue_description.trim().to_string(),
        priority,
        status: TicketStatus::Pending,
        assigned_to: actor.username.clone(),
        reported_by: request.reported_by.trim().to_string(),
        completed_at: None,
        estimated_cost,
        actual_cost: None,
        notes: Vec::new(),
    };
    validate_ticket_draft(&draft).map_err(translate_domain_error)?;

    tokio::time::sleep(config.simulated_create_latency()).await;
    Ok(store.create(draft))
}

/// Moves a ticket to a new status.
///
/// Moving to `completed` stamps `completedAt` with the current time. Moving
/// away from `completed` leaves it untouched.
///
/// # Errors
///
/// Returns an error if the id or status cannot be parsed or the ticket does
/// not exist.
pub fn update_ticket_status(
    store: &mut TicketStore,
    request: &UpdateStatusRequest,
    actor: &Identity,
) -> Result<Ticket, ApiError> {
    let id: TicketId = existing_ticket_id(store, &request.ticket_id)?;
    let status: TicketStatus = request.status.parse().map_err(translate_domain_error)?;

    let mut update: TicketUpdate = TicketUpdate::status(status);
    if status == TicketStatus::Completed {
        update = update.with_completed_at(store.now());
    }
    store.update(&id, update).map_err(translate_core_error)?;

    info!(ticket_id = %id, status = %status, actor = %actor.username, "Ticket status changed");
    fetch(store, &id)
}

/// Appends a note, prefixed with the time and the author's username.
///
/// # Errors
///
/// Returns an error if the note is blank, the id cannot be parsed, or the
/// ticket does not exist.
pub fn add_note(
    store: &mut TicketStore,
    request: &AddNoteRequest,
    actor: &Identity,
) -> Result<Ticket, ApiError> {
    let id: TicketId = existing_ticket_id(store, &request.ticket_id)?;
    if request.text.trim().is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("text"),
            message: String::from("Note text must not be empty"),
        });
    }

    let note: String = format_note(store.now(), &actor.username, &request.text);
    store
        .update(&id, TicketUpdate::note(note))
        .map_err(translate_core_error)?;
    fetch(store, &id)
}

/// Deletes a ticket. Admin only.
///
/// # Errors
///
/// Returns an error if `actor` is not an admin, the id cannot be parsed, or
/// the ticket does not exist.
pub fn delete_ticket(
    store: &mut TicketStore,
    ticket_id: &str,
    actor: &Identity,
) -> Result<(), ApiError> {
    AuthorizationService::authorize_delete_ticket(actor)?;
    let id: TicketId = existing_ticket_id(store, ticket_id)?;
    store.delete(&id).map_err(translate_core_error)?;

    info!(ticket_id = %id, actor = %actor.username, "Ticket deleted by admin");
    Ok(())
}

/// Lists tickets matching a search string, status and device type, newest
/// first.
///
/// # Errors
///
/// Returns an error if the status or device type is neither `all` nor a
/// known value.
pub fn list_tickets(
    store: &TicketStore,
    request: &ListTicketsRequest,
) -> Result<Vec<Ticket>, ApiError> {
    let status: Option<TicketStatus> = match request.status.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(s.parse().map_err(translate_domain_error)?),
    };
    let device_type: Option<DeviceType> = match request.device_type.as_deref() {
        None | Some("all") => None,
        Some(s) => Some(s.parse().map_err(translate_domain_error)?),
    };
    let filter: TicketFilter = TicketFilter {
        search: request.search.clone(),
        status,
        device_type,
    };

    Ok(store.search(&filter).into_iter().cloned().collect())
}

/// Dashboard figures and the most recent tickets.
#[must_use]
pub fn get_dashboard(store: &TicketStore) -> DashboardResponse {
    DashboardResponse {
        stats: store.dashboard_stats(),
        recent_tickets: store.recent_tickets(DASHBOARD_RECENT_LIMIT).to_vec(),
    }
}

/// Ticket analytics for the admin panel. Admin only.
///
/// # Errors
///
/// Returns an error if `actor` is not an admin.
pub fn get_admin_overview(
    store: &TicketStore,
    actor: &Identity,
) -> Result<TicketCounts, ApiError> {
    AuthorizationService::authorize_admin_panel(actor)?;
    Ok(store.ticket_counts())
}

/// Weekly reports, most recent first.
///
/// With `weeks`, returns exactly that many consecutive weeks ending with the
/// current one, including empty weeks. Without it, returns one report per
/// week that has tickets.
#[must_use]
pub fn get_weekly_reports(store: &TicketStore, weeks: Option<usize>) -> Vec<WeeklyReport> {
    match weeks {
        Some(weeks) => store.weekly_reports_trailing(weeks),
        None => store.weekly_reports(),
    }
}

fn existing_ticket_id(store: &TicketStore, raw: &str) -> Result<TicketId, ApiError> {
    let id: TicketId = raw.trim().parse().map_err(translate_domain_error)?;
    if store.get(&id).is_none() {
        return Err(ApiError::ResourceNotFound {
            resource_type: String::from("Ticket"),
            message: format!("Ticket {id} does not exist"),
        });
    }
    Ok(id)
}

fn fetch(store: &TicketStore, id: &TicketId) -> Result<Ticket, ApiError> {
    store
        .get(id)
        .cloned()
        .ok_or_else(|| ApiError::Internal {
            message: format!("Ticket {id} vanished during update"),
        })
}
