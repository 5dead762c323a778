// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed tickets for demos and first start.

use repair_desk_domain::{DeviceType, Priority, Ticket, TicketId, TicketStatus};
use time::macros::datetime;
use uuid::Uuid;

/// Returns the seed ticket collection, newest first.
#[must_use]
pub fn fixture_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: TicketId::from_uuid(Uuid::from_u128(1)),
            ticket_number: String::from("IT-2024-001"),
            device_type: DeviceType::Pc,
            device_id: String::from("PC-BRANCH-001"),
            location: String::from("Main Branch - Teller Station 1"),
            department: String::from("Customer Service"),
            issue_description: String::from(
                "Computer won't boot up, blue screen error on startup",
            ),
            priority: Priority::High,
            status: TicketStatus::InProgress,
            assigned_to: String::from("tech1"),
            reported_by: String::from("Sarah Johnson"),
            created_at: datetime!(2024-01-15 09:30 UTC),
            updated_at: datetime!(2024-01-15 14:22 UTC),
            completed_at: None,
            estimated_cost: Some(150.0),
            actual_cost: None,
            notes: vec![
                String::from("Initial diagnosis: Hardware failure suspected"),
                String::from("RAM modules tested - all working"),
                String::from("Hard drive diagnostics in progress"),
            ],
        },
        Ticket {
            id: TicketId::from_uuid(Uuid::from_u128(2)),
            ticket_number: String::from("IT-2024-002"),
            device_type: DeviceType::Printer,
            device_id: String::from("PR-ADMIN-002"),
            location: String::from("Administrative Floor - Office 204"),
            department: String::from("Administration"),
            issue_description: String::from("Printer jamming frequently, print quality poor"),
            priority: Priority::Medium,
            status: TicketStatus::WaitingParts,
            assigned_to: String::from("tech2"),
            reported_by: String::from("Michael Chen"),
            created_at: datetime!(2024-01-14 11:15 UTC),
            updated_at: datetime!(2024-01-15 16:45 UTC),
            completed_at: None,
            estimated_cost: Some(75.0),
            actual_cost: Some(45.0),
            notes: vec![
                String::from("Cleaned roller mechanism"),
                String::from("Ordered replacement toner cartridge"),
                String::from("Waiting for delivery"),
            ],
        },
        Ticket {
            id: TicketId::from_uuid(Uuid::from_u128(3)),
            ticket_number: String::from("IT-2024-003"),
            device_type: DeviceType::Laptop,
            device_id: String::from("LT-LOAN-015"),
            location: String::from("Loan Department - Manager Office"),
            department: String::from("Loans"),
            issue_description: String::from("Laptop overheating and shutting down randomly"),
            priority: Priority::Critical,
            status: TicketStatus::Completed,
            assigned_to: String::from("tech1"),
            reported_by: String::from("Lisa Rodriguez"),
            created_at: datetime!(2024-01-13 13:22 UTC),
            updated_at: datetime!(2024-01-14 10:30 UTC),
            completed_at: Some(datetime!(2024-01-14 10:30 UTC)),
            estimated_cost: Some(200.0),
            actual_cost: Some(120.0),
            notes: vec![
                String::from("Thermal paste replacement required"),
                String::from("Fan cleaning completed"),
                String::from("System stress test passed"),
                String::from("Device returned to user"),
            ],
        },
    ]
}
