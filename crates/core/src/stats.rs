// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dashboard statistics.

use repair_desk_domain::{Priority, Ticket, TicketStatus};
use serde::Serialize;
use time::{Duration, OffsetDateTime};

/// Length of the trailing window used for "completed this week".
pub const COMPLETION_WINDOW: Duration = Duration::days(7);

/// Headline figures for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Devices under management. Sourced from inventory.
    pub total_devices: u32,
    /// Tickets whose status is pending, in progress or waiting for parts.
    pub active_tickets: usize,
    /// Completed tickets whose completion falls in the trailing seven days.
    pub completed_this_week: usize,
    /// Average resolution time in days. Sourced from operations.
    pub avg_resolution_time: f64,
    /// Repair spend this month. Sourced from cost accounting.
    pub cost_this_month: f64,
    /// Efficiency percentage. Sourced from operations.
    pub efficiency: u8,
}

/// Figures the dashboard shows that the ticket collection cannot derive.
///
/// These belong to inventory and cost-accounting systems that do not exist
/// yet; the store asks this source for them instead of computing them.
pub trait OperationalMetrics: Send + Sync {
    /// Number of devices under management.
    fn total_devices(&self) -> u32;
    /// Average resolution time in days.
    fn avg_resolution_time(&self) -> f64;
    /// Repair spend for the current month.
    fn cost_this_month(&self) -> f64;
    /// Efficiency percentage.
    fn efficiency(&self) -> u8;
}

/// Placeholder figures used until real inventory and cost feeds exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedOperationalMetrics;

impl FixedOperationalMetrics {
    const TOTAL_DEVICES: u32 = 156;
    const AVG_RESOLUTION_TIME: f64 = 2.1;
    const COST_THIS_MONTH: f64 = 2850.0;
    const EFFICIENCY: u8 = 87;
}

impl OperationalMetrics for FixedOperationalMetrics {
    fn total_devices(&self) -> u32 {
        Self::TOTAL_DEVICES
    }

    fn avg_resolution_time(&self) -> f64 {
        Self::AVG_RESOLUTION_TIME
    }

    fn cost_this_month(&self) -> f64 {
        Self::COST_THIS_MONTH
    }

    fn efficiency(&self) -> u8 {
        Self::EFFICIENCY
    }
}

/// Computes dashboard statistics over `tickets` as of `now`.
///
/// Pure function of its inputs.
#[must_use]
pub fn compute_dashboard_stats(
    tickets: &[Ticket],
    now: OffsetDateTime,
    metrics: &dyn OperationalMetrics,
) -> DashboardStats {
    let window_start: OffsetDateTime = now.saturating_sub(COMPLETION_WINDOW);

    let active_tickets: usize = tickets.iter().filter(|t| t.status.is_active()).count();
    let completed_this_week: usize = tickets
        .iter()
        .filter(|t| {
            t.status == TicketStatus::Completed
                && t.completed_at.is_some_and(|at| at > window_start)
        })
        .count();

    DashboardStats {
        total_devices: metrics.total_devices(),
        active_tickets,
        completed_this_week,
        avg_resolution_time: metrics.avg_resolution_time(),
        cost_this_month: metrics.cost_this_month(),
        efficiency: metrics.efficiency(),
    }
}

/// Ticket counts per status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub waiting_parts: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    /// Returns the count for `status`.
    #[must_use]
    pub const fn get(&self, status: TicketStatus) -> usize {
        match status {
            TicketStatus::Pending => self.pending,
            TicketStatus::InProgress => self.in_progress,
            TicketStatus::WaitingParts => self.waiting_parts,
            TicketStatus::Completed => self.completed,
            TicketStatus::Cancelled => self.cancelled,
        }
    }

    const fn record(&mut self, status: TicketStatus) {
        match status {
            TicketStatus::Pending => self.pending += 1,
            TicketStatus::InProgress => self.in_progress += 1,
            TicketStatus::WaitingParts => self.waiting_parts += 1,
            TicketStatus::Completed => self.completed += 1,
            TicketStatus::Cancelled => self.cancelled += 1,
        }
    }
}

/// Ticket counts per priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub critical: usize,
}

impl PriorityCounts {
    /// Returns the count for `priority`.
    #[must_use]
    pub const fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Critical => self.critical,
        }
    }

    const fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
            Priority::Critical => self.critical += 1,
        }
    }
}

/// Ticket analytics for the admin panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketCounts {
    pub total_tickets: usize,
    pub by_status: StatusCounts,
    pub by_priority: PriorityCounts,
}

/// Counts `tickets` by status and by priority.
#[must_use]
pub fn compute_ticket_counts(tickets: &[Ticket]) -> TicketCounts {
    let mut counts: TicketCounts = TicketCounts::default();
    for ticket in tickets {
        counts.total_tickets += 1;
        counts.by_status.record(ticket.status);
        counts.by_priority.record(ticket.priority);
    }
    counts
}
