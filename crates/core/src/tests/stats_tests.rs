// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use repair_desk_domain::{DeviceType, Priority, Ticket, TicketStatus, TicketUpdate};
use time::{Duration, OffsetDateTime};

use crate::tests::helpers::{
    create_draft, create_test_clock, create_test_draft, create_test_store, test_start,
};
use crate::{
    DashboardStats, FixedOperationalMetrics, OperationalMetrics, PriorityCounts, StatusCounts,
    TicketCounts, TicketStore, compute_dashboard_stats, compute_ticket_counts, fixture_tickets,
};

struct InventoryMetrics;

impl OperationalMetrics for InventoryMetrics {
    fn total_devices(&self) -> u32 {
        42
    }

    fn avg_resolution_time(&self) -> f64 {
        1.25
    }

    fn cost_this_month(&self) -> f64 {
        990.0
    }

    fn efficiency(&self) -> u8 {
        64
    }
}

#[test]
fn test_empty_store_stats() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock);

    let stats: DashboardStats = store.dashboard_stats();

    assert_eq!(stats.active_tickets, 0);
    assert_eq!(stats.completed_this_week, 0);
    assert_eq!(stats.total_devices, 156);
    assert!((stats.avg_resolution_time - 2.1).abs() < f64::EPSILON);
    assert!((stats.cost_this_month - 2850.0).abs() < f64::EPSILON);
    assert_eq!(stats.efficiency, 87);
}

#[test]
fn test_active_tickets_counts_open_statuses() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    for status in [
        TicketStatus::Pending,
        TicketStatus::InProgress,
        TicketStatus::WaitingParts,
        TicketStatus::Completed,
        TicketStatus::Cancelled,
    ] {
        store.create(create_draft(DeviceType::Pc, status));
    }

    assert_eq!(store.dashboard_stats().active_tickets, 3);
}

#[test]
fn test_new_ticket_is_active() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    store.create(create_test_draft());

    assert_eq!(store.dashboard_stats().active_tickets, 1);
}

#[test]
fn test_completed_this_week_uses_trailing_window() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    let recent: Ticket = store.create(create_test_draft());
    let old: Ticket = store.create(create_test_draft());
    let boundary: Ticket = store.create(create_test_draft());

    let recent_at: OffsetDateTime = test_start() - Duration::days(2);
    let old_at: OffsetDateTime = test_start() - Duration::days(10);
    let boundary_at: OffsetDateTime = test_start() - Duration::days(7);
    for (ticket, at) in [(&recent, recent_at), (&old, old_at), (&boundary, boundary_at)] {
        store
            .update(
                &ticket.id,
                TicketUpdate::status(TicketStatus::Completed).with_completed_at(at),
            )
            .unwrap();
    }

    assert_eq!(store.dashboard_stats().completed_this_week, 1);
}

#[test]
fn test_completed_this_week_ignores_reopened_tickets() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);
    let ticket: Ticket = store.create(create_test_draft());

    clock.advance(Duration::hours(1));
    let completed_at: OffsetDateTime = store.now();
    store
        .update(
            &ticket.id,
            TicketUpdate::status(TicketStatus::Completed).with_completed_at(completed_at),
        )
        .unwrap();
    assert_eq!(store.dashboard_stats().completed_this_week, 1);

    store
        .update(&ticket.id, TicketUpdate::status(TicketStatus::InProgress))
        .unwrap();

    let stats: DashboardStats = store.dashboard_stats();
    assert_eq!(stats.completed_this_week, 0);
    assert_eq!(stats.active_tickets, 1);
}

#[test]
fn test_completed_without_timestamp_is_not_counted() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    store.create(create_draft(DeviceType::Monitor, TicketStatus::Completed));

    assert_eq!(store.dashboard_stats().completed_this_week, 0);
}

#[test]
fn test_fixture_stats_against_fixed_instant() {
    let tickets: Vec<Ticket> = fixture_tickets();
    let now: OffsetDateTime = time::macros::datetime!(2024-01-16 09:00 UTC);

    let stats: DashboardStats = compute_dashboard_stats(&tickets, now, &FixedOperationalMetrics);

    assert_eq!(stats.active_tickets, 2);
    assert_eq!(stats.completed_this_week, 1);
}

#[test]
fn test_custom_operational_metrics() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_metrics(Arc::new(InventoryMetrics));

    let stats: DashboardStats = store.dashboard_stats();

    assert_eq!(stats.total_devices, 42);
    assert!((stats.avg_resolution_time - 1.25).abs() < f64::EPSILON);
    assert!((stats.cost_this_month - 990.0).abs() < f64::EPSILON);
    assert_eq!(stats.efficiency, 64);
}

#[test]
fn test_stats_serialize_camel_case() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock);

    let json: serde_json::Value = serde_json::to_value(store.dashboard_stats()).unwrap();

    assert_eq!(json["totalDevices"], 156);
    assert_eq!(json["activeTickets"], 0);
    assert_eq!(json["completedThisWeek"], 0);
    assert_eq!(json["efficiency"], 87);
}

#[test]
fn test_fixture_ticket_counts() {
    let counts: TicketCounts = compute_ticket_counts(&fixture_tickets());

    assert_eq!(counts.total_tickets, 3);
    assert_eq!(
        counts.by_status,
        StatusCounts {
            pending: 0,
            in_progress: 1,
            waiting_parts: 1,
            completed: 1,
            cancelled: 0,
        }
    );
    assert_eq!(
        counts.by_priority,
        PriorityCounts {
            low: 0,
            medium: 1,
            high: 1,
            critical: 1,
        }
    );
}

#[test]
fn test_store_ticket_counts_track_updates() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);
    assert_eq!(store.ticket_counts(), TicketCounts::default());

    let ticket: Ticket = store.create(create_test_draft());
    store.create(create_draft(DeviceType::Printer, TicketStatus::Cancelled));
    store
        .update(&ticket.id, TicketUpdate::status(TicketStatus::Completed))
        .unwrap();

    let counts: TicketCounts = store.ticket_counts();
    assert_eq!(counts.total_tickets, 2);
    assert_eq!(counts.by_status.get(TicketStatus::Completed), 1);
    assert_eq!(counts.by_status.get(TicketStatus::Cancelled), 1);
    assert_eq!(counts.by_status.get(TicketStatus::Pending), 0);
    assert_eq!(counts.by_priority.get(Priority::High), 2);
}

#[test]
fn test_ticket_counts_serialize_with_status_names() {
    let json: serde_json::Value =
        serde_json::to_value(compute_ticket_counts(&fixture_tickets())).unwrap();

    assert_eq!(json["totalTickets"], 3);
    assert_eq!(json["byStatus"]["in_progress"], 1);
    assert_eq!(json["byStatus"]["waiting_parts"], 1);
    assert_eq!(json["byPriority"]["critical"], 1);
}
