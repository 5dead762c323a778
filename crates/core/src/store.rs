// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use repair_desk_domain::{IsoWeek, Ticket, TicketDraft, TicketId, TicketUpdate};
use time::{Duration, OffsetDateTime, UtcOffset};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::{MissingTicketPolicy, StoreConfig};
use crate::error::CoreError;
use crate::filter::TicketFilter;
use crate::fixtures::fixture_tickets;
use crate::reports::{WeeklyReport, aggregate_weekly_reports, trailing_weekly_reports};
use crate::stats::{
    DashboardStats, FixedOperationalMetrics, OperationalMetrics, TicketCounts,
    compute_dashboard_stats, compute_ticket_counts,
};

/// Smallest step `updated_at` advances by when the clock has not moved.
const MIN_UPDATE_STEP: Duration = Duration::microseconds(1);

/// The canonical, exclusively owned collection of repair tickets.
///
/// Tickets are kept newest first. All mutation goes through this type's
/// methods; consumers only ever borrow read snapshots.
///
/// The store performs no field validation. Callers validate drafts before
/// calling [`TicketStore::create`].
///
/// Ticket numbers are derived from the live ticket count, so they are only
/// unique while there is a single writer and tickets are not deleted.
pub struct TicketStore {
    tickets: Vec<Ticket>,
    config: StoreConfig,
    clock: Arc<dyn Clock>,
    metrics: Arc<dyn OperationalMetrics>,
}

impl TicketStore {
    /// Creates an empty store using the system clock and placeholder
    /// operational metrics.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            tickets: Vec::new(),
            config,
            clock: Arc::new(SystemClock),
            metrics: Arc::new(FixedOperationalMetrics),
        }
    }

    /// Replaces the time source.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the source of the dashboard figures the store cannot derive.
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn OperationalMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Seeds the collection. `tickets` must already be newest first.
    #[must_use]
    pub fn with_tickets(mut self, tickets: Vec<Ticket>) -> Self {
        info!(count = tickets.len(), "Seeding ticket store");
        self.tickets = tickets;
        self
    }

    /// Seeds the collection with the demo fixture tickets.
    #[must_use]
    pub fn with_fixtures(self) -> Self {
        self.with_tickets(fixture_tickets())
    }

    /// Returns the store configuration.
    #[must_use]
    pub const fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Returns the store's notion of the current time.
    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        self.clock.now()
    }

    /// Read snapshot of every ticket, newest first.
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Looks up a ticket by id.
    #[must_use]
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| &t.id == id)
    }

    /// Number of live tickets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Returns whether the store holds no tickets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// The `limit` newest tickets.
    #[must_use]
    pub fn recent_tickets(&self, limit: usize) -> &[Ticket] {
        &self.tickets[..limit.min(self.tickets.len())]
    }

    /// Tickets matching `filter`, newest first.
    #[must_use]
    pub fn search(&self, filter: &TicketFilter) -> Vec<&Ticket> {
        let matches: Vec<&Ticket> = self.tickets.iter().filter(|t| filter.matches(t)).collect();
        debug!(
            search = %filter.search,
            status = ?filter.status,
            matches = matches.len(),
            "Searched tickets"
        );
        matches
    }

    /// Creates a ticket from `draft` and inserts it at the front.
    ///
    /// Assigns a fresh id, a count-based ticket number
    /// `IT-<current year>-<live count + 1>` zero-padded to three digits, and
    /// sets both timestamps to the current time.
    pub fn create(&mut self, draft: TicketDraft) -> Ticket {
        let now: OffsetDateTime = self.now();
        let ticket: Ticket = Ticket {
            id: TicketId::generate(),
            ticket_number: self.next_ticket_number(now),
            device_type: draft.device_type,
            device_id: draft.device_id,
            location: draft.location,
            department: draft.department,
            issue_description: draft.issue_description,
            priority: draft.priority,
            status: draft.status,
            assigned_to: draft.assigned_to,
            reported_by: draft.reported_by,
            created_at: now,
            updated_at: now,
            completed_at: draft.completed_at,
            estimated_cost: draft.estimated_cost,
            actual_cost: draft.actual_cost,
            notes: draft.notes,
        };

        info!(
            ticket_id = %ticket.id,
            ticket_number = %ticket.ticket_number,
            device_type = %ticket.device_type,
            priority = %ticket.priority,
            "Created ticket"
        );

        self.tickets.insert(0, ticket.clone());
        ticket
    }

    /// Merges `update` over the ticket with `id` and refreshes `updated_at`.
    ///
    /// `updated_at` always moves strictly forward, even if the clock has not.
    /// `completed_at` is never managed here: callers completing a ticket set
    /// it themselves, and moving away from `completed` leaves it in place.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TicketNotFound` if `id` is unknown and the store is
    /// configured with `MissingTicketPolicy::Reject`.
    pub fn update(&mut self, id: &TicketId, update: TicketUpdate) -> Result<(), CoreError> {
        let now: OffsetDateTime = self.now();
        let Some(ticket) = self.tickets.iter_mut().find(|t| &t.id == id) else {
            return self.missing(id, "update");
        };

        update.merge_into(ticket);
        ticket.updated_at = if now > ticket.updated_at {
            now
        } else {
            ticket.updated_at.saturating_add(MIN_UPDATE_STEP)
        };

        info!(
            ticket_id = %id,
            status = %ticket.status,
            notes = ticket.notes.len(),
            "Updated ticket"
        );
        Ok(())
    }

    /// Removes the ticket with `id`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::TicketNotFound` if `id` is unknown and the store is
    /// configured with `MissingTicketPolicy::Reject`.
    pub fn delete(&mut self, id: &TicketId) -> Result<(), CoreError> {
        let Some(index) = self.tickets.iter().position(|t| &t.id == id) else {
            return self.missing(id, "delete");
        };

        let removed: Ticket = self.tickets.remove(index);
        info!(
            ticket_id = %id,
            ticket_number = %removed.ticket_number,
            "Deleted ticket"
        );
        Ok(())
    }

    /// Dashboard statistics over the current collection.
    #[must_use]
    pub fn dashboard_stats(&self) -> DashboardStats {
        compute_dashboard_stats(&self.tickets, self.now(), self.metrics.as_ref())
    }

    /// Ticket counts by status and by priority.
    #[must_use]
    pub fn ticket_counts(&self) -> TicketCounts {
        compute_ticket_counts(&self.tickets)
    }

    /// One report per ISO week that has tickets, most recent first.
    #[must_use]
    pub fn weekly_reports(&self) -> Vec<WeeklyReport> {
        aggregate_weekly_reports(&self.tickets)
    }

    /// Reports for the `weeks` consecutive ISO weeks ending with the current
    /// week, most recent first, including weeks without tickets.
    #[must_use]
    pub fn weekly_reports_trailing(&self, weeks: usize) -> Vec<WeeklyReport> {
        let current: IsoWeek = IsoWeek::containing(self.now().to_offset(UtcOffset::UTC).date());
        trailing_weekly_reports(&self.tickets, current, weeks)
    }

    fn next_ticket_number(&self, now: OffsetDateTime) -> String {
        format!("IT-{}-{:03}", now.year(), self.tickets.len() + 1)
    }

    fn missing(&self, id: &TicketId, operation: &'static str) -> Result<(), CoreError> {
        match self.config.missing_ticket_policy {
            MissingTicketPolicy::Ignore => {
                debug!(ticket_id = %id, operation, "Ticket not found, ignoring");
                Ok(())
            }
            MissingTicketPolicy::Reject => {
                debug!(ticket_id = %id, operation, "Ticket not found, rejecting");
                Err(CoreError::TicketNotFound { id: *id })
            }
        }
    }
}

impl std::fmt::Debug for TicketStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TicketStore")
            .field("tickets", &self.tickets.len())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
