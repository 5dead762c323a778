// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Session store and handler settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SessionConfig {
    /// Artificial delay applied to every login attempt that reaches the
    /// credential verifier, in milliseconds.
    pub simulated_latency_ms: u64,
    /// Artificial delay applied to ticket creation after the form is
    /// validated, in milliseconds.
    pub simulated_create_latency_ms: u64,
    /// bcrypt work factor used when hashing the demo allow-list.
    pub bcrypt_cost: u32,
}

impl SessionConfig {
    pub const DEFAULT_LATENCY_MS: u64 = 500;
    pub const DEFAULT_CREATE_LATENCY_MS: u64 = 1000;

    /// The simulated login latency.
    #[must_use]
    pub const fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    /// The simulated ticket creation latency.
    #[must_use]
    pub const fn simulated_create_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_create_latency_ms)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            simulated_latency_ms: Self::DEFAULT_LATENCY_MS,
            simulated_create_latency_ms: Self::DEFAULT_CREATE_LATENCY_MS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}
