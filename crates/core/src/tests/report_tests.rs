// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_desk_domain::{DeviceType, IsoWeek, Ticket, TicketStatus, TicketUpdate};
use time::Duration;
use time::macros::{date, datetime};

use crate::tests::helpers::{create_draft, create_test_clock, create_test_store, create_ticket_at};
use crate::{
    CompletionRating, DeviceBreakdown, TicketStore, WeeklyReport, aggregate_weekly_reports,
    fixture_tickets, trailing_weekly_reports,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_fixture_reports_are_grouped_by_week() {
    let reports: Vec<WeeklyReport> = aggregate_weekly_reports(&fixture_tickets());

    assert_eq!(reports.len(), 2);

    let latest: &WeeklyReport = &reports[0];
    assert_eq!(latest.week, "Jan 15-21, 2024");
    assert_eq!(latest.iso_week.to_string(), "2024-W03");
    assert_eq!(latest.total_tickets, 1);
    assert_eq!(latest.completed_tickets, 0);
    assert_eq!(latest.pending_tickets, 1);
    assert!(approx(latest.completion_rate, 0.0));
    assert_eq!(latest.device_breakdown.pc, 1);

    let earlier: &WeeklyReport = &reports[1];
    assert_eq!(earlier.week, "Jan 8-14, 2024");
    assert_eq!(earlier.total_tickets, 2);
    assert_eq!(earlier.completed_tickets, 1);
    assert_eq!(earlier.pending_tickets, 1);
    assert!(approx(earlier.completion_rate, 0.5));
    assert!(approx(earlier.cost_saved, 110.0));
    assert!(approx(earlier.avg_resolution_time, 76_080.0 / 86_400.0));
    assert_eq!(
        earlier.device_breakdown,
        DeviceBreakdown {
            pc: 0,
            printer: 1,
            laptop: 1,
            monitor: 0,
        }
    );
}

#[test]
fn test_report_invariants_hold() {
    let reports: Vec<WeeklyReport> = aggregate_weekly_reports(&fixture_tickets());

    for report in &reports {
        assert!(report.completed_tickets + report.pending_tickets <= report.total_tickets);
        assert!((0.0..=1.0).contains(&report.completion_rate));
        let breakdown: &DeviceBreakdown = &report.device_breakdown;
        assert_eq!(
            breakdown.pc + breakdown.printer + breakdown.laptop + breakdown.monitor,
            report.total_tickets
        );
    }
}

#[test]
fn test_empty_collection_has_no_reports() {
    assert!(aggregate_weekly_reports(&[]).is_empty());
}

#[test]
fn test_trailing_reports_include_empty_weeks() {
    let current: IsoWeek = IsoWeek::containing(date!(2024-01-17));

    let reports: Vec<WeeklyReport> = trailing_weekly_reports(&fixture_tickets(), current, 4);

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[0].week, "Jan 15-21, 2024");
    assert_eq!(reports[1].week, "Jan 8-14, 2024");
    assert_eq!(reports[2].week, "Jan 1-7, 2024");
    assert_eq!(reports[3].week, "Dec 25-31, 2023");

    let empty: &WeeklyReport = &reports[2];
    assert_eq!(empty.total_tickets, 0);
    assert!(approx(empty.completion_rate, 0.0));
    assert!(approx(empty.avg_resolution_time, 0.0));
    assert_eq!(empty.rating(), CompletionRating::Poor);
}

#[test]
fn test_trailing_zero_weeks() {
    let current: IsoWeek = IsoWeek::containing(date!(2024-01-17));
    assert!(trailing_weekly_reports(&fixture_tickets(), current, 0).is_empty());
}

#[test]
fn test_store_trailing_reports_follow_clock() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    create_ticket_at(
        &mut store,
        &clock,
        datetime!(2026-10-13 10:00 UTC),
        create_draft(DeviceType::Printer, TicketStatus::Pending),
    );
    clock.set(datetime!(2026-10-21 10:00 UTC));

    let reports: Vec<WeeklyReport> = store.weekly_reports_trailing(2);

    assert_eq!(reports[0].week, "Oct 19-25, 2026");
    assert_eq!(reports[0].total_tickets, 0);
    assert_eq!(reports[1].week, "Oct 12-18, 2026");
    assert_eq!(reports[1].device_breakdown.printer, 1);
}

#[test]
fn test_completion_rating_bands() {
    let mut report: WeeklyReport = WeeklyReport::empty(IsoWeek::containing(date!(2024-01-08)));

    report.completion_rate = 0.8;
    assert_eq!(report.rating(), CompletionRating::Good);
    report.completion_rate = 0.75;
    assert_eq!(report.completion_percent(), 75);
    report.completion_rate = 0.6;
    assert_eq!(report.rating(), CompletionRating::Fair);
    report.completion_rate = 0.59;
    assert_eq!(report.rating(), CompletionRating::Poor);
}

#[test]
fn test_device_share() {
    let reports: Vec<WeeklyReport> = aggregate_weekly_reports(&fixture_tickets());
    let earlier: &WeeklyReport = &reports[1];

    assert_eq!(earlier.device_share(DeviceType::Printer), 50);
    assert_eq!(earlier.device_share(DeviceType::Pc), 0);

    let empty: WeeklyReport = WeeklyReport::empty(earlier.iso_week);
    assert_eq!(empty.device_share(DeviceType::Pc), 0);
}

#[test]
fn test_cost_saved_ignores_overruns() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    let under: Ticket = store.create(create_draft(DeviceType::Pc, TicketStatus::Pending));
    let over: Ticket = store.create(create_draft(DeviceType::Pc, TicketStatus::Pending));
    store
        .update(
            &under.id,
            TicketUpdate {
                estimated_cost: Some(100.0),
                actual_cost: Some(60.0),
                ..TicketUpdate::default()
            },
        )
        .unwrap();
    store
        .update(
            &over.id,
            TicketUpdate {
                estimated_cost: Some(50.0),
                actual_cost: Some(90.0),
                ..TicketUpdate::default()
            },
        )
        .unwrap();

    let reports: Vec<WeeklyReport> = store.weekly_reports();
    assert_eq!(reports.len(), 1);
    assert!(approx(reports[0].cost_saved, 40.0));
}

#[test]
fn test_resolution_time_averages_completed_tickets() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    let one: Ticket = store.create(create_draft(DeviceType::Laptop, TicketStatus::Pending));
    let two: Ticket = store.create(create_draft(DeviceType::Laptop, TicketStatus::Pending));
    for (ticket, days) in [(&one, 1), (&two, 2)] {
        let at = ticket.created_at + Duration::days(days);
        store
            .update(
                &ticket.id,
                TicketUpdate::status(TicketStatus::Completed).with_completed_at(at),
            )
            .unwrap();
    }

    let reports: Vec<WeeklyReport> = store.weekly_reports();
    assert!(approx(reports[0].avg_resolution_time, 1.5));
    assert!(approx(reports[0].completion_rate, 1.0));
    assert_eq!(reports[0].rating(), CompletionRating::Good);
}

#[test]
fn test_report_serializes_camel_case() {
    let reports: Vec<WeeklyReport> = aggregate_weekly_reports(&fixture_tickets());
    let json: serde_json::Value = serde_json::to_value(&reports[1]).unwrap();

    assert_eq!(json["week"], "Jan 8-14, 2024");
    assert_eq!(json["isoWeek"], "2024-W02");
    assert_eq!(json["totalTickets"], 2);
    assert_eq!(json["deviceBreakdown"]["printer"], 1);
}

#[test]
fn test_resolution_time_lands_in_completion_week() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    let carried: Ticket = create_ticket_at(
        &mut store,
        &clock,
        datetime!(2026-10-17 12:00 UTC),
        create_draft(DeviceType::Pc, TicketStatus::Pending),
    );
    create_ticket_at(
        &mut store,
        &clock,
        datetime!(2026-10-20 09:00 UTC),
        create_draft(DeviceType::Monitor, TicketStatus::Pending),
    );
    clock.set(datetime!(2026-10-20 12:00 UTC));
    store
        .update(
            &carried.id,
            TicketUpdate::status(TicketStatus::Completed)
                .with_completed_at(datetime!(2026-10-20 12:00 UTC)),
        )
        .unwrap();

    let reports: Vec<WeeklyReport> = store.weekly_reports();
    assert_eq!(reports.len(), 2);

    let completed_week: &WeeklyReport = &reports[0];
    assert_eq!(completed_week.iso_week.to_string(), "2026-W43");
    assert_eq!(completed_week.total_tickets, 1);
    assert_eq!(completed_week.pending_tickets, 1);
    assert_eq!(completed_week.completed_tickets, 1);
    assert!(approx(completed_week.avg_resolution_time, 3.0));
    assert_eq!(completed_week.device_breakdown.monitor, 1);

    let created_week: &WeeklyReport = &reports[1];
    assert_eq!(created_week.iso_week.to_string(), "2026-W42");
    assert_eq!(created_week.total_tickets, 1);
    assert_eq!(created_week.pending_tickets, 0);
    assert_eq!(created_week.completed_tickets, 0);
    assert!(approx(created_week.avg_resolution_time, 0.0));
    assert_eq!(created_week.device_breakdown.pc, 1);
}

#[test]
fn test_week_with_only_completions_has_zero_rate() {
    let clock = create_test_clock();
    let mut store: TicketStore = create_test_store(&clock);

    let ticket: Ticket = create_ticket_at(
        &mut store,
        &clock,
        datetime!(2026-10-12 08:00 UTC),
        create_draft(DeviceType::Laptop, TicketStatus::Pending),
    );
    store
        .update(
            &ticket.id,
            TicketUpdate::status(TicketStatus::Completed)
                .with_completed_at(datetime!(2026-10-21 08:00 UTC)),
        )
        .unwrap();
    clock.set(datetime!(2026-10-21 08:00 UTC));

    let reports: Vec<WeeklyReport> = store.weekly_reports_trailing(2);

    assert_eq!(reports[0].iso_week.to_string(), "2026-W43");
    assert_eq!(reports[0].total_tickets, 0);
    assert_eq!(reports[0].completed_tickets, 1);
    assert!(approx(reports[0].completion_rate, 0.0));
    assert!(approx(reports[0].avg_resolution_time, 9.0));
    assert_eq!(reports[1].completed_tickets, 0);
}

#[test]
fn test_completion_percent_saturates() {
    let mut report: WeeklyReport = WeeklyReport::empty(IsoWeek::containing(date!(2024-01-08)));

    report.completion_rate = 3.0;
    assert_eq!(report.completion_percent(), 255);
    assert_eq!(report.rating(), CompletionRating::Good);
}
