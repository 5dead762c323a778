// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_desk_domain::{DeviceType, Ticket, TicketStatus};
use serde::{Deserialize, Serialize};

/// Criteria for narrowing the ticket list.
///
/// The default filter matches every ticket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketFilter {
    /// Case-insensitive substring matched against the ticket number, device
    /// id, issue description and location. Empty matches everything.
    /// Whitespace is significant.
    pub search: String,
    /// Exact status to keep. `None` keeps all statuses.
    pub status: Option<TicketStatus>,
    /// Exact device type to keep. `None` keeps all device types.
    pub device_type: Option<DeviceType>,
}

impl TicketFilter {
    /// A filter on search text only.
    #[must_use]
    pub fn search(text: &str) -> Self {
        Self {
            search: text.to_string(),
            status: None,
            device_type: None,
        }
    }

    /// A filter on status only.
    #[must_use]
    pub const fn status(status: TicketStatus) -> Self {
        Self {
            search: String::new(),
            status: Some(status),
            device_type: None,
        }
    }

    /// A filter on device type only.
    #[must_use]
    pub const fn device_type(device_type: DeviceType) -> Self {
        Self {
            search: String::new(),
            status: None,
            device_type: Some(device_type),
        }
    }

    /// Returns whether `ticket` satisfies this filter.
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        if self.status.is_some_and(|status| status != ticket.status) {
            return false;
        }
        if self
            .device_type
            .is_some_and(|device_type| device_type != ticket.device_type)
        {
            return false;
        }

        let needle: String = self.search.to_lowercase();
        if needle.is_empty() {
            return true;
        }

        [
            &ticket.ticket_number,
            &ticket.device_id,
            &ticket.issue_description,
            &ticket.location,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
