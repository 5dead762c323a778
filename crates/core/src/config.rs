// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

/// What `update` and `delete` do when the ticket id is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingTicketPolicy {
    /// Leave the collection unchanged and report success.
    #[default]
    Ignore,
    /// Leave the collection unchanged and return `CoreError::TicketNotFound`.
    Reject,
}

/// Ticket store configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreConfig {
    /// Handling of update/delete on unknown ids.
    pub missing_ticket_policy: MissingTicketPolicy,
}
