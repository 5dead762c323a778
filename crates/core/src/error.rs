// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_desk_domain::TicketId;
use thiserror::Error;

/// Errors that can occur while mutating the ticket store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// An update or delete named a ticket that is not in the store.
    ///
    /// Only returned under `MissingTicketPolicy::Reject`.
    #[error("Ticket {id} not found")]
    TicketNotFound {
        /// The identifier that was looked up.
        id: TicketId,
    },
}
