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
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod notes;
mod types;
mod validation;
mod week;

#[cfg(test)]
mod tests;

// Re-export public types
pub use error::DomainError;
pub use notes::format_note;
pub use types::{
    DeviceType, Identity, Priority, Role, Ticket, TicketDraft, TicketId, TicketStatus,
    TicketUpdate,
};
pub use validation::{parse_cost, validate_cost, validate_ticket_draft};
pub use week::IsoWeek;
