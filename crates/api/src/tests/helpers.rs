// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use repair_desk::{ManualClock, StoreConfig, TicketStore};
use repair_desk_domain::{Identity, Role};
use time::macros::datetime;

use crate::{CreateTicketRequest, CredentialVerifier, DemoCredentials, SessionConfig, SessionStore};

/// Verifier that rejects everything and counts how often it was asked.
#[derive(Debug, Default)]
pub struct CountingVerifier {
    calls: AtomicUsize,
}

impl CountingVerifier {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CredentialVerifier for CountingVerifier {
    fn verify(&self, _username: &str, _password: &str) -> Option<Identity> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        None
    }
}

pub fn create_test_session_config() -> SessionConfig {
    SessionConfig {
        simulated_latency_ms: 0,
        simulated_create_latency_ms: 0,
        bcrypt_cost: 4,
    }
}

pub fn create_test_session() -> SessionStore {
    let config: SessionConfig = create_test_session_config();
    let credentials: DemoCredentials =
        DemoCredentials::new(config.bcrypt_cost).expect("Failed to build demo credentials");
    let mut session: SessionStore = SessionStore::new(Arc::new(credentials), config);
    session.restore();
    session
}

pub fn create_test_admin() -> Identity {
    Identity::new(
        String::from("1"),
        String::from("admin"),
        Role::Admin,
        String::from("IT Administration"),
        String::from("admin@company.com"),
    )
}

pub fn create_test_staff() -> Identity {
    Identity::new(
        String::from("2"),
        String::from("tech1"),
        Role::Staff,
        String::from("IT Support"),
        String::from("tech1@company.com"),
    )
}

pub fn create_test_clock() -> Arc<ManualClock> {
    Arc::new(ManualClock::new(datetime!(2026-10-19 12:00 UTC)))
}

/// Store seeded with the fixture tickets.
pub fn create_test_store(clock: &Arc<ManualClock>) -> TicketStore {
    TicketStore::new(StoreConfig::default())
        .with_clock(clock.clone())
        .with_fixtures()
}

pub fn create_test_ticket_request() -> CreateTicketRequest {
    CreateTicketRequest {
        device_type: String::from("monitor"),
        device_id: String::from(" MON-HR-007 "),
        location: String::from("HR Office"),
        department: String::from("Human Resources"),
        issue_description: String::from("Flickering display"),
        priority: String::from("low"),
        estimated_cost: String::from("150"),
        reported_by: String::from("Dana Park"),
    }
}

/// Id of the fixture ticket assigned to tech1 (`IT-2024-001`).
pub const FIXTURE_TECH1_TICKET: &str = "00000000-0000-0000-0000-000000000001";

/// Id of the fixture ticket assigned to tech2 (`IT-2024-002`).
pub const FIXTURE_TECH2_TICKET: &str = "00000000-0000-0000-0000-000000000002";
