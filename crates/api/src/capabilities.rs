// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capability computation for authorization-aware UI gating.
//!
//! Capabilities tell a presentation layer which controls to show. They are
//! advisory only and do not replace the checks in the handlers.

use repair_desk_domain::{Identity, Ticket};
use serde::{Deserialize, Serialize};

use crate::auth::AuthorizationService;

/// Represents whether a specific action is permitted.
///
/// Serializes to JSON as true/false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// The action is permitted.
    Allowed,
    /// The action is not permitted.
    Denied,
}

impl Capability {
    /// Returns true if the capability is allowed.
    #[must_use]
    pub const fn is_allowed(self) -> bool {
        matches!(self, Self::Allowed)
    }

    /// Creates a capability from a boolean value.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Allowed } else { Self::Denied }
    }
}

impl Serialize for Capability {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bool(self.is_allowed())
    }
}

impl<'de> Deserialize<'de> for Capability {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let b = bool::deserialize(deserializer)?;
        Ok(Self::from_bool(b))
    }
}

/// What the current session may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCapabilities {
    /// Dashboard, ticket list and weekly reports.
    pub can_view_tickets: Capability,
    pub can_create_tickets: Capability,
    pub can_delete_tickets: Capability,
    pub can_view_admin_panel: Capability,
}

/// What the current session may do to one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCapabilities {
    /// Change status and append notes.
    pub can_modify: Capability,
    pub can_delete: Capability,
}

/// Computes session-wide capabilities. `None` means no one is logged in.
#[must_use]
pub fn compute_session_capabilities(identity: Option<&Identity>) -> SessionCapabilities {
    let Some(identity) = identity else {
        return SessionCapabilities {
            can_view_tickets: Capability::Denied,
            can_create_tickets: Capability::Denied,
            can_delete_tickets: Capability::Denied,
            can_view_admin_panel: Capability::Denied,
        };
    };

    SessionCapabilities {
        can_view_tickets: Capability::Allowed,
        can_create_tickets: Capability::Allowed,
        can_delete_tickets: Capability::from_bool(
            AuthorizationService::authorize_delete_ticket(identity).is_ok(),
        ),
        can_view_admin_panel: Capability::from_bool(
            AuthorizationService::authorize_admin_panel(identity).is_ok(),
        ),
    }
}

/// Computes capabilities for `ticket`.
#[must_use]
pub fn compute_ticket_capabilities(identity: &Identity, ticket: &Ticket) -> TicketCapabilities {
    TicketCapabilities {
        can_modify: Capability::from_bool(
            AuthorizationService::authorize_modify_ticket(identity, ticket).is_ok(),
        ),
        can_delete: Capability::from_bool(
            AuthorizationService::authorize_delete_ticket(identity).is_ok(),
        ),
    }
}
