// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly summary reports.
//!
//! Intake figures (totals, pending, device mix, savings) bucket tickets by
//! the ISO week of `createdAt`. Completion figures bucket completed tickets
//! by the ISO week of `completedAt`. All weeks are taken in UTC.

use num_traits::ToPrimitive;
use repair_desk_domain::{DeviceType, IsoWeek, Ticket, TicketStatus};
use serde::Serialize;
use std::collections::BTreeMap;
use time::{OffsetDateTime, UtcOffset};

/// Ticket counts per device type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DeviceBreakdown {
    pub pc: usize,
    pub printer: usize,
    pub laptop: usize,
    pub monitor: usize,
}

impl DeviceBreakdown {
    /// Returns the count for `device_type`.
    #[must_use]
    pub const fn get(&self, device_type: DeviceType) -> usize {
        match device_type {
            DeviceType::Pc => self.pc,
            DeviceType::Printer => self.printer,
            DeviceType::Laptop => self.laptop,
            DeviceType::Monitor => self.monitor,
        }
    }

    const fn record(&mut self, device_type: DeviceType) {
        match device_type {
            DeviceType::Pc => self.pc += 1,
            DeviceType::Printer => self.printer += 1,
            DeviceType::Laptop => self.laptop += 1,
            DeviceType::Monitor => self.monitor += 1,
        }
    }
}

/// Coarse grading of a week's completion rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionRating {
    /// 80% or more.
    Good,
    /// 60% to 79%.
    Fair,
    /// Below 60%.
    Poor,
}

/// Summary of one ISO week of tickets.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyReport {
    /// The week these figures cover.
    pub iso_week: IsoWeek,
    /// Display label, e.g. `Jan 8-14, 2024`.
    pub week: String,
    /// Tickets created this week.
    pub total_tickets: usize,
    /// Tickets completed this week, whenever they were created.
    pub completed_tickets: usize,
    /// Tickets created this week that are still in an active status.
    pub pending_tickets: usize,
    /// `completed / total`, or 0 for a week with no new tickets.
    pub completion_rate: f64,
    /// Mean days from creation to completion over tickets completed this
    /// week.
    pub avg_resolution_time: f64,
    /// Sum of per-ticket savings against the estimate.
    pub cost_saved: f64,
    pub device_breakdown: DeviceBreakdown,
}

impl WeeklyReport {
    /// A report for a week with no tickets.
    #[must_use]
    pub fn empty(iso_week: IsoWeek) -> Self {
        Self {
            iso_week,
            week: iso_week.label(),
            total_tickets: 0,
            completed_tickets: 0,
            pending_tickets: 0,
            completion_rate: 0.0,
            avg_resolution_time: 0.0,
            cost_saved: 0.0,
            device_breakdown: DeviceBreakdown::default(),
        }
    }

    /// The completion rate as a rounded percentage.
    #[must_use]
    pub fn completion_percent(&self) -> u8 {
        percent(self.completion_rate)
    }

    /// Grades the completion rate.
    #[must_use]
    pub fn rating(&self) -> CompletionRating {
        match self.completion_percent() {
            80.. => CompletionRating::Good,
            60..=79 => CompletionRating::Fair,
            _ => CompletionRating::Poor,
        }
    }

    /// Share of the week's tickets for `device_type`, as a rounded percentage.
    #[must_use]
    pub fn device_share(&self, device_type: DeviceType) -> u8 {
        percent(ratio(
            self.device_breakdown.get(device_type),
            self.total_tickets,
        ))
    }
}

/// Builds one report per ISO week that has at least one ticket, most recent
/// week first.
#[must_use]
pub fn aggregate_weekly_reports(tickets: &[Ticket]) -> Vec<WeeklyReport> {
    bucket_by_week(tickets)
        .into_iter()
        .rev()
        .map(|(week, bucket)| build_report(week, &bucket))
        .collect()
}

/// Builds exactly `weeks` reports for the consecutive ISO weeks ending with
/// `current`, most recent first. Weeks without tickets yield empty reports.
#[must_use]
pub fn trailing_weekly_reports(
    tickets: &[Ticket],
    current: IsoWeek,
    weeks: usize,
) -> Vec<WeeklyReport> {
    let mut buckets: BTreeMap<IsoWeek, WeekBucket<'_>> = bucket_by_week(tickets);
    let mut reports: Vec<WeeklyReport> = Vec::with_capacity(weeks);
    let mut week: IsoWeek = current;

    for _ in 0..weeks {
        let report: WeeklyReport = match buckets.remove(&week) {
            Some(bucket) => build_report(week, &bucket),
            None => WeeklyReport::empty(week),
        };
        reports.push(report);
        week = week.previous();
    }

    reports
}

#[derive(Default)]
struct WeekBucket<'a> {
    created: Vec<&'a Ticket>,
    completed: Vec<&'a Ticket>,
}

fn bucket_by_week(tickets: &[Ticket]) -> BTreeMap<IsoWeek, WeekBucket<'_>> {
    let mut buckets: BTreeMap<IsoWeek, WeekBucket<'_>> = BTreeMap::new();
    for ticket in tickets {
        buckets
            .entry(utc_week(ticket.created_at))
            .or_default()
            .created
            .push(ticket);

        if ticket.status == TicketStatus::Completed {
            // Completed without a timestamp counts in its creation week.
            let completed_at: OffsetDateTime = ticket.completed_at.unwrap_or(ticket.created_at);
            buckets
                .entry(utc_week(completed_at))
                .or_default()
                .completed
                .push(ticket);
        }
    }
    buckets
}

fn utc_week(at: OffsetDateTime) -> IsoWeek {
    IsoWeek::containing(at.to_offset(UtcOffset::UTC).date())
}

fn build_report(iso_week: IsoWeek, bucket: &WeekBucket<'_>) -> WeeklyReport {
    let mut report: WeeklyReport = WeeklyReport::empty(iso_week);

    for ticket in &bucket.created {
        report.total_tickets += 1;
        report.device_breakdown.record(ticket.device_type);

        if ticket.status.is_active() {
            report.pending_tickets += 1;
        }
        if let Some(saved) = ticket.cost_saved() {
            report.cost_saved += saved;
        }
    }

    let resolution_days: Vec<f64> = bucket
        .completed
        .iter()
        .filter_map(|ticket| ticket.resolution_days())
        .collect();

    report.completed_tickets = bucket.completed.len();
    report.completion_rate = ratio(report.completed_tickets, report.total_tickets);
    report.avg_resolution_time = mean(&resolution_days);
    report
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    match (numerator.to_f64(), denominator.to_f64()) {
        (Some(n), Some(d)) => n / d,
        _ => 0.0,
    }
}

fn mean(values: &[f64]) -> f64 {
    match values.len().to_f64() {
        Some(count) if count > 0.0 => values.iter().sum::<f64>() / count,
        _ => 0.0,
    }
}

// A week that clears older backlog can exceed 100%.
fn percent(rate: f64) -> u8 {
    (rate * 100.0)
        .round()
        .clamp(0.0, f64::from(u8::MAX))
        .to_u8()
        .unwrap_or(0)
}
