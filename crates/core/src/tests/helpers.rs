// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::sync::Arc;

use repair_desk_domain::{DeviceType, Priority, Ticket, TicketDraft, TicketStatus};
use time::OffsetDateTime;
use time::macros::datetime;

use crate::{ManualClock, StoreConfig, TicketStore};

/// Monday, so the current ISO week starts on the test start date.
pub fn test_start() -> OffsetDateTime {
    datetime!(2026-10-19 12:00 UTC)
}

pub fn create_test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(test_start()))
}

pub fn create_test_store(clock: &Arc<ManualClock>) -> TicketStore {
    create_test_store_with_config(clock, StoreConfig::default())
}

pub fn create_test_store_with_config(
    clock: &Arc<ManualClock>,
    config: StoreConfig,
) -> TicketStore {
    TicketStore::new(config).with_clock(clock.clone())
}

pub fn create_test_draft() -> TicketDraft {
    TicketDraft {
        device_type: DeviceType::Pc,
        device_id: String::from("PC-1"),
        location: String::from("L"),
        department: String::from("D"),
        issue_description: String::from("broken"),
        priority: Priority::High,
        status: TicketStatus::Pending,
        assigned_to: String::from("tech1"),
        reported_by: String::from("r"),
        completed_at: None,
        estimated_cost: None,
        actual_cost: None,
        notes: Vec::new(),
    }
}

pub fn create_draft(device_type: DeviceType, status: TicketStatus) -> TicketDraft {
    TicketDraft {
        device_type,
        status,
        ..create_test_draft()
    }
}

/// Creates a ticket with the clock moved to `at`.
pub fn create_ticket_at(
    store: &mut TicketStore,
    clock: &ManualClock,
    at: OffsetDateTime,
    draft: TicketDraft,
) -> Ticket {
    clock.set(at);
    store.create(draft)
}
