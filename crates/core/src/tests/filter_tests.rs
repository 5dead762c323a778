// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use repair_desk_domain::{DeviceType, Ticket, TicketStatus};

use crate::tests::helpers::{create_test_clock, create_test_store};
use crate::{TicketFilter, TicketStore, fixture_tickets};

fn numbers(tickets: &[&Ticket]) -> Vec<String> {
    tickets.iter().map(|t| t.ticket_number.clone()).collect()
}

#[test]
fn test_empty_filter_matches_everything() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    assert_eq!(store.search(&TicketFilter::default()).len(), 3);
    assert_eq!(store.search(&TicketFilter::search("")).len(), 3);
}

#[test]
fn test_search_text_is_not_trimmed() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    assert_eq!(
        numbers(&store.search(&TicketFilter::search("PC"))),
        vec!["IT-2024-001"]
    );
    assert!(store.search(&TicketFilter::search(" PC")).is_empty());
    assert!(store.search(&TicketFilter::search("   ")).is_empty());
}

#[test]
fn test_device_type_filter() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    assert_eq!(
        numbers(&store.search(&TicketFilter::device_type(DeviceType::Printer))),
        vec!["IT-2024-002"]
    );
    assert_eq!(
        numbers(&store.search(&TicketFilter::device_type(DeviceType::Laptop))),
        vec!["IT-2024-003"]
    );
    assert!(
        store
            .search(&TicketFilter::device_type(DeviceType::Monitor))
            .is_empty()
    );
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    assert_eq!(
        numbers(&store.search(&TicketFilter::search("it-2024-002"))),
        vec!["IT-2024-002"]
    );
    assert_eq!(
        numbers(&store.search(&TicketFilter::search("pc-branch"))),
        vec!["IT-2024-001"]
    );
    assert_eq!(
        numbers(&store.search(&TicketFilter::search("BLUE SCREEN"))),
        vec!["IT-2024-001"]
    );
    assert_eq!(
        numbers(&store.search(&TicketFilter::search("office 204"))),
        vec!["IT-2024-002"]
    );
    assert!(store.search(&TicketFilter::search("no such thing")).is_empty());
}

#[test]
fn test_search_does_not_match_other_fields() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    // Reporter names are not searched
    assert!(store.search(&TicketFilter::search("Sarah Johnson")).is_empty());
}

#[test]
fn test_status_filter() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    assert_eq!(
        numbers(&store.search(&TicketFilter::status(TicketStatus::Completed))),
        vec!["IT-2024-003"]
    );
    assert!(store.search(&TicketFilter::status(TicketStatus::Cancelled)).is_empty());
}

#[test]
fn test_search_and_status_combine() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    let filter: TicketFilter = TicketFilter {
        search: String::from("it-2024"),
        status: Some(TicketStatus::WaitingParts),
        device_type: None,
    };

    assert_eq!(numbers(&store.search(&filter)), vec!["IT-2024-002"]);
}

#[test]
fn test_device_type_combines_with_status() {
    let clock = create_test_clock();
    let store: TicketStore = create_test_store(&clock).with_tickets(fixture_tickets());

    let filter: TicketFilter = TicketFilter {
        search: String::new(),
        status: Some(TicketStatus::InProgress),
        device_type: Some(DeviceType::Printer),
    };

    assert!(store.search(&filter).is_empty());
}
