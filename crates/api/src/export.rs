// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of tickets and weekly reports.

use repair_desk::WeeklyReport;
use repair_desk_domain::Ticket;
use serde::Serialize;
use time::format_description::well_known::Rfc3339;

use crate::error::ApiError;

/// One row of the weekly report export.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WeeklyReportRow<'a> {
    iso_week: String,
    week: &'a str,
    total_tickets: usize,
    completed_tickets: usize,
    pending_tickets: usize,
    completion_percent: u8,
    avg_resolution_time: f64,
    cost_saved: f64,
    pc: usize,
    printer: usize,
    laptop: usize,
    monitor: usize,
}

/// One row of the ticket export. Notes are joined with ` | `.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TicketRow<'a> {
    ticket_number: &'a str,
    device_type: &'a str,
    device_id: &'a str,
    location: &'a str,
    department: &'a str,
    priority: &'a str,
    status: &'a str,
    assigned_to: &'a str,
    reported_by: &'a str,
    created_at: String,
    updated_at: String,
    completed_at: Option<String>,
    estimated_cost: Option<f64>,
    actual_cost: Option<f64>,
    notes: String,
}

/// Renders weekly reports as CSV with a header row.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn weekly_reports_csv(reports: &[WeeklyReport]) -> Result<String, ApiError> {
    let rows = reports.iter().map(|r| WeeklyReportRow {
        iso_week: r.iso_week.to_string(),
        week: &r.week,
        total_tickets: r.total_tickets,
        completed_tickets: r.completed_tickets,
        pending_tickets: r.pending_tickets,
        completion_percent: r.completion_percent(),
        avg_resolution_time: r.avg_resolution_time,
        cost_saved: r.cost_saved,
        pc: r.device_breakdown.pc,
        printer: r.device_breakdown.printer,
        laptop: r.device_breakdown.laptop,
        monitor: r.device_breakdown.monitor,
    });
    write_rows(rows)
}

/// Renders tickets as CSV with a header row.
///
/// # Errors
///
/// Returns an error if a timestamp cannot be formatted or serialization
/// fails.
pub fn tickets_csv(tickets: &[Ticket]) -> Result<String, ApiError> {
    let mut rows: Vec<TicketRow<'_>> = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        rows.push(TicketRow {
            ticket_number: &ticket.ticket_number,
            device_type: ticket.device_type.as_str(),
            device_id: &ticket.device_id,
            location: &ticket.location,
            department: &ticket.department,
            priority: ticket.priority.as_str(),
            status: ticket.status.as_str(),
            assigned_to: &ticket.assigned_to,
            reported_by: &ticket.reported_by,
            created_at: rfc3339(ticket.created_at)?,
            updated_at: rfc3339(ticket.updated_at)?,
            completed_at: ticket.completed_at.map(rfc3339).transpose()?,
            estimated_cost: ticket.estimated_cost,
            actual_cost: ticket.actual_cost,
            notes: ticket.notes.join(" | "),
        });
    }
    write_rows(rows)
}

fn write_rows<T: Serialize>(rows: impl IntoIterator<Item = T>) -> Result<String, ApiError> {
    let mut writer: csv::Writer<Vec<u8>> = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row).map_err(|e| ApiError::Internal {
            message: format!("Failed to write CSV row: {e}"),
        })?;
    }
    let bytes: Vec<u8> = writer.into_inner().map_err(|e| ApiError::Internal {
        message: format!("Failed to flush CSV output: {e}"),
    })?;
    String::from_utf8(bytes).map_err(|e| ApiError::Internal {
        message: format!("CSV output is not valid UTF-8: {e}"),
    })
}

fn rfc3339(at: time::OffsetDateTime) -> Result<String, ApiError> {
    at.format(&Rfc3339).map_err(|e| ApiError::Internal {
        message: format!("Failed to format timestamp: {e}"),
    })
}
