// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Credential verification.
//!
//! The session store never inspects credentials itself. It hands them to a
//! [`CredentialVerifier`], which either returns the matching identity or
//! nothing.

use repair_desk_domain::{Identity, Role};
use tracing::debug;

use crate::error::ApiError;

/// Password shared by every account on the demo allow-list.
pub const DEMO_PASSWORD: &str = "password";

/// Source of truth for username/password checks.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the identity for `username` if `password` is correct.
    fn verify(&self, username: &str, password: &str) -> Option<Identity>;
}

struct DemoAccount {
    identity: Identity,
    password_hash: String,
}

/// The fixed demo allow-list: `admin` plus `tech1`..`tech3`.
///
/// Passwords are kept only as bcrypt hashes.
pub struct DemoCredentials {
    accounts: Vec<DemoAccount>,
}

impl DemoCredentials {
    /// Builds the allow-list, hashing the demo password with `cost`.
    ///
    /// # Errors
    ///
    /// Returns an error if bcrypt rejects the cost or hashing fails.
    pub fn new(cost: u32) -> Result<Self, ApiError> {
        let identities: [Identity; 4] = [
            Identity::new(
                String::from("1"),
                String::from("admin"),
                Role::Admin,
                String::from("IT Administration"),
                String::from("admin@company.com"),
            ),
            Identity::new(
                String::from("2"),
                String::from("tech1"),
                Role::Staff,
                String::from("IT Support"),
                String::from("tech1@company.com"),
            ),
            Identity::new(
                String::from("3"),
                String::from("tech2"),
                Role::Staff,
                String::from("IT Support"),
                String::from("tech2@company.com"),
            ),
            Identity::new(
                String::from("4"),
                String::from("tech3"),
                Role::Staff,
                String::from("IT Support"),
                String::from("tech3@company.com"),
            ),
        ];

        let mut accounts: Vec<DemoAccount> = Vec::with_capacity(identities.len());
        for identity in identities {
            let password_hash: String =
                bcrypt::hash(DEMO_PASSWORD, cost).map_err(|e| ApiError::Internal {
                    message: format!("Failed to hash demo password: {e}"),
                })?;
            accounts.push(DemoAccount {
                identity,
                password_hash,
            });
        }

        Ok(Self { accounts })
    }

    /// Usernames on the allow-list, in declaration order.
    pub fn usernames(&self) -> impl Iterator<Item = &str> {
        self.accounts.iter().map(|a| a.identity.username.as_str())
    }
}

impl CredentialVerifier for DemoCredentials {
    fn verify(&self, username: &str, password: &str) -> Option<Identity> {
        let Some(account) = self
            .accounts
            .iter()
            .find(|a| a.identity.username == username)
        else {
            debug!(username, "Unknown username");
            return None;
        };

        // A malformed stored hash counts as a mismatch
        if bcrypt::verify(password, &account.password_hash).unwrap_or(false) {
            Some(account.identity.clone())
        } else {
            debug!(username, "Password mismatch");
            None
        }
    }
}

impl std::fmt::Debug for DemoCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoCredentials")
            .field("accounts", &self.accounts.len())
            .finish_non_exhaustive()
    }
}
