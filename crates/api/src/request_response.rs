// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests carry raw form text; handlers parse and validate it.

use repair_desk::DashboardStats;
use repair_desk_domain::{Identity, Ticket};

use crate::capabilities::SessionCapabilities;

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The current identity together with what it may do.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoAmIResponse {
    pub identity: Identity,
    pub capabilities: SessionCapabilities,
}

/// API request to open a new ticket, as entered in the new-ticket form.
///
/// Status, assignee and timestamps are not part of the form: a new ticket
/// starts `pending` and is assigned to whoever opened it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    /// One of `pc`, `printer`, `laptop`, `monitor`.
    pub device_type: String,
    pub device_id: String,
    pub location: String,
    pub department: String,
    pub issue_description: String,
    /// One of `low`, `medium`, `high`, `critical`.
    pub priority: String,
    /// Free text; blank means no estimate.
    #[serde(default)]
    pub estimated_cost: String,
    pub reported_by: String,
}

/// API request to move a ticket to a new status.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusRequest {
    pub ticket_id: String,
    pub status: String,
}

/// API request to append a note to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddNoteRequest {
    pub ticket_id: String,
    pub text: String,
}

/// API request to list tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListTicketsRequest {
    /// Case-insensitive substring search.
    pub search: String,
    /// A status name, `all`, or `None` for every status.
    pub status: Option<String>,
    /// A device type, `all`, or `None` for every device type.
    pub device_type: Option<String>,
}

/// Dashboard figures plus the most recent tickets.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub stats: DashboardStats,
    pub recent_tickets: Vec<Ticket>,
}
