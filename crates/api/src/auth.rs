// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role checks.

use repair_desk_domain::{Identity, Role, Ticket};

use crate::error::AuthError;

/// Authorization service for role-based access control.
///
/// Deleting a ticket is the only enforced check. The remaining checks back
/// the advisory capabilities a presentation layer uses to hide controls.
pub struct AuthorizationService;

impl AuthorizationService {
    /// Checks if an identity may delete tickets.
    ///
    /// Only admins may delete tickets.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity does not have the admin role.
    pub fn authorize_delete_ticket(identity: &Identity) -> Result<(), AuthError> {
        Self::require_admin(identity, "delete_ticket")
    }

    /// Checks if an identity may open the admin panel.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity does not have the admin role.
    pub fn authorize_admin_panel(identity: &Identity) -> Result<(), AuthError> {
        Self::require_admin(identity, "admin_panel")
    }

    /// Checks if an identity may change a ticket's status or add notes.
    ///
    /// Admins may modify any ticket; staff only the tickets assigned to them.
    ///
    /// # Errors
    ///
    /// Returns an error if the identity is neither an admin nor the assignee.
    pub fn authorize_modify_ticket(identity: &Identity, ticket: &Ticket) -> Result<(), AuthError> {
        if identity.is_admin() || ticket.assigned_to == identity.username {
            return Ok(());
        }
        Err(AuthError::Unauthorized {
            action: String::from("modify_ticket"),
            required_role: String::from("Admin or assignee"),
        })
    }

    fn require_admin(identity: &Identity, action: &str) -> Result<(), AuthError> {
        match identity.role {
            Role::Admin => Ok(()),
            Role::Staff => Err(AuthError::Unauthorized {
                action: action.to_string(),
                required_role: String::from("Admin"),
            }),
        }
    }
}
