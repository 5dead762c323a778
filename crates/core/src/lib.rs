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

mod clock;
mod config;
mod error;
mod filter;
mod fixtures;
mod reports;
mod stats;
mod store;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MissingTicketPolicy, StoreConfig};
pub use error::CoreError;
pub use filter::TicketFilter;
pub use fixtures::fixture_tickets;
pub use reports::{
    CompletionRating, DeviceBreakdown, WeeklyReport, aggregate_weekly_reports,
    trailing_weekly_reports,
};
pub use stats::{
    COMPLETION_WINDOW, DashboardStats, FixedOperationalMetrics, OperationalMetrics,
    PriorityCounts, StatusCounts, TicketCounts, compute_dashboard_stats, compute_ticket_counts,
};
pub use store::TicketStore;
