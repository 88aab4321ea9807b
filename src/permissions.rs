// ABOUTME: Read-scope permission gate consulted before any data collection
// ABOUTME: Required-scope table, subset check, and an in-memory gate implementation
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Permission gate for health data read scopes.
//!
//! The engine never second-guesses partial grants: collection requires the
//! full required set, and any missing scope blocks the range collector
//! entirely (not just the affected metric). The gate is an external
//! collaborator; this module defines its interface, the required-scope
//! table, and an in-memory implementation used by the CLI and tests.

use crate::models::RecordType;
use async_trait::async_trait;
use std::collections::HashSet;
use std::fmt;
use std::sync::RwLock;

/// Kind of access to a record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessType {
    /// Read access
    Read,
    /// Write access
    Write,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => f.write_str("read"),
            Self::Write => f.write_str("write"),
        }
    }
}

/// One grantable permission: access to one record type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Scope {
    /// Record type the scope covers
    pub record_type: RecordType,
    /// Access kind
    pub access_type: AccessType,
}

impl Scope {
    /// Read scope for a record type
    #[must_use]
    pub const fn read(record_type: RecordType) -> Self {
        Self {
            record_type,
            access_type: AccessType::Read,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.access_type, self.record_type)
    }
}

/// The scopes the engine requires: read access for all eleven record types
#[must_use]
pub fn required_scopes() -> Vec<Scope> {
    RecordType::ALL.iter().map(|rt| Scope::read(*rt)).collect()
}

/// Required scopes not present in `granted`
#[must_use]
pub fn missing_scopes(granted: &[Scope]) -> Vec<Scope> {
    let granted: HashSet<Scope> = granted.iter().copied().collect();
    required_scopes()
        .into_iter()
        .filter(|s| !granted.contains(s))
        .collect()
}

/// Permission gate interface (external collaborator)
///
/// Mutated only by the explicit grant/revoke flow, never by the
/// aggregator; read-only during an in-flight collection fetch.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Currently granted scopes
    async fn granted_scopes(&self) -> Vec<Scope>;

    /// Drive the grant flow for the required scopes; returns the scopes
    /// granted afterwards (possibly a partial set)
    async fn request_scopes(&self, required: &[Scope]) -> Vec<Scope>;

    /// Revoke all granted scopes
    async fn revoke(&self);
}

/// In-memory permission gate for the CLI and tests
///
/// A real deployment wires the platform's permission controller in here;
/// the engine only ever sees the trait.
pub struct InMemoryPermissionGate {
    granted: RwLock<HashSet<Scope>>,
}

impl InMemoryPermissionGate {
    /// Gate with nothing granted
    #[must_use]
    pub fn new() -> Self {
        Self {
            granted: RwLock::new(HashSet::new()),
        }
    }

    /// Gate with the full required set granted
    #[must_use]
    pub fn with_all_granted() -> Self {
        Self {
            granted: RwLock::new(required_scopes().into_iter().collect()),
        }
    }

    /// Gate with the required set granted except the given scopes
    #[must_use]
    pub fn with_all_granted_except(denied: &[Scope]) -> Self {
        let denied: HashSet<Scope> = denied.iter().copied().collect();
        Self {
            granted: RwLock::new(
                required_scopes()
                    .into_iter()
                    .filter(|s| !denied.contains(s))
                    .collect(),
            ),
        }
    }
}

impl Default for InMemoryPermissionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PermissionGate for InMemoryPermissionGate {
    async fn granted_scopes(&self) -> Vec<Scope> {
        self.granted
            .read()
            .map(|g| g.iter().copied().collect())
            .unwrap_or_default()
    }

    async fn request_scopes(&self, required: &[Scope]) -> Vec<Scope> {
        if let Ok(mut granted) = self.granted.write() {
            granted.extend(required.iter().copied());
        }
        self.granted_scopes().await
    }

    async fn revoke(&self) {
        if let Ok(mut granted) = self.granted.write() {
            granted.clear();
        }
    }
}
