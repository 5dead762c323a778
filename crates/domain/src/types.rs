// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;
use uuid::Uuid;

/// The role of an authenticated identity.
///
/// Only one authorization decision in the system depends on the role:
/// administrative surfaces are restricted to `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// IT administration. May open the admin panel and delete tickets.
    Admin,
    /// IT support staff.
    #[serde(alias = "it_staff")]
    Staff,
}

impl Role {
    /// Converts this role to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Staff => "staff",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "staff" | "it_staff" => Ok(Self::Staff),
            _ => Err(DomainError::UnknownRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated user's role and department context.
///
/// Immutable while it is the current identity of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable identifier.
    pub id: String,
    /// Login name.
    pub username: String,
    /// Authorization role.
    pub role: Role,
    /// Department the user belongs to.
    pub department: String,
    /// Contact address.
    pub email: String,
}

impl Identity {
    /// Creates a new `Identity`.
    #[must_use]
    pub const fn new(
        id: String,
        username: String,
        role: Role,
        department: String,
        email: String,
    ) -> Self {
        Self {
            id,
            username,
            role,
            department,
            email,
        }
    }

    /// Returns whether this identity holds the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// The kind of device a ticket concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    /// Desktop computer.
    Pc,
    /// Printer.
    Printer,
    /// Laptop.
    Laptop,
    /// Monitor.
    Monitor,
}

impl DeviceType {
    /// Every device type, in display order.
    pub const ALL: [Self; 4] = [Self::Pc, Self::Printer, Self::Laptop, Self::Monitor];

    /// Converts this device type to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pc => "pc",
            Self::Printer => "printer",
            Self::Laptop => "laptop",
            Self::Monitor => "monitor",
        }
    }
}

impl FromStr for DeviceType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pc" => Ok(Self::Pc),
            "printer" => Ok(Self::Printer),
            "laptop" => Ok(Self::Laptop),
            "monitor" => Ok(Self::Monitor),
            _ => Err(DomainError::UnknownDeviceType(s.to_string())),
        }
    }
}

impl std::fmt::Display for DeviceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Urgency of a repair request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    /// Converts this priority to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for Priority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::UnknownPriority(s.to_string())),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Workflow status of a ticket.
///
/// There is no enforced transition graph: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    InProgress,
    WaitingParts,
    Completed,
    Cancelled,
}

impl TicketStatus {
    /// Converts this status to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::WaitingParts => "waiting_parts",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns whether a ticket in this status still needs work.
    ///
    /// Active statuses are `pending`, `in_progress` and `waiting_parts`.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::InProgress | Self::WaitingParts)
    }
}

impl FromStr for TicketStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "waiting_parts" => Ok(Self::WaitingParts),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::UnknownStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Opaque unique identifier of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(Uuid);

impl TicketId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl FromStr for TicketId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| DomainError::InvalidTicketId(s.to_string()))
    }
}

impl std::fmt::Display for TicketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One repair request and its tracked lifecycle state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Opaque identifier, assigned at creation and never reused.
    pub id: TicketId,
    /// Human-readable number (`IT-<year>-<seq>`), immutable.
    pub ticket_number: String,
    pub device_type: DeviceType,
    pub device_id: String,
    pub location: String,
    pub department: String,
    pub issue_description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assigned_to: String,
    pub reported_by: String,
    /// Set once, at creation.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Reset on every mutation.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
    /// Set by the caller when the ticket is completed. Never cleared
    /// automatically when the status later moves away from `completed`.
    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_cost: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_cost: Option<f64>,
    /// Append-only free-text notes.
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Ticket {
    /// Returns the resolution time in fractional days, if the ticket has a
    /// completion timestamp.
    #[must_use]
    pub fn resolution_days(&self) -> Option<f64> {
        self.completed_at
            .map(|completed_at| (completed_at - self.created_at).as_seconds_f64() / 86_400.0)
    }

    /// Returns the amount saved against the estimate, if both costs are known.
    ///
    /// Overruns count as zero savings.
    #[must_use]
    pub fn cost_saved(&self) -> Option<f64> {
        match (self.estimated_cost, self.actual_cost) {
            (Some(estimated), Some(actual)) => Some((estimated - actual).max(0.0)),
            _ => None,
        }
    }
}

/// The caller-supplied fields of a new ticket.
///
/// Everything except the identifier, ticket number and the creation and
/// update timestamps, which the store assigns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDraft {
    pub device_type: DeviceType,
    pub device_id: String,
    pub location: String,
    pub department: String,
    pub issue_description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub assigned_to: String,
    pub reported_by: String,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    #[serde(default)]
    pub actual_cost: Option<f64>,
    #[serde(default)]
    pub notes: Vec<String>,
}

/// A partial set of ticket fields to merge over an existing ticket.
///
/// Absent fields are left unchanged. Notes can only be appended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketUpdate {
    pub device_type: Option<DeviceType>,
    pub device_id: Option<String>,
    pub location: Option<String>,
    pub department: Option<String>,
    pub issue_description: Option<String>,
    pub priority: Option<Priority>,
    pub status: Option<TicketStatus>,
    pub assigned_to: Option<String>,
    pub reported_by: Option<String>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub completed_at: Option<OffsetDateTime>,
    pub estimated_cost: Option<f64>,
    pub actual_cost: Option<f64>,
    pub append_notes: Vec<String>,
}

impl TicketUpdate {
    /// An update that only changes the status.
    #[must_use]
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// An update that only appends one note.
    #[must_use]
    pub fn note(note: String) -> Self {
        Self {
            append_notes: vec![note],
            ..Self::default()
        }
    }

    /// Sets the completion timestamp on this update.
    #[must_use]
    pub const fn with_completed_at(mut self, completed_at: OffsetDateTime) -> Self {
        self.completed_at = Some(completed_at);
        self
    }

    /// Merges the present fields into `ticket`.
    ///
    /// `updated_at` is not touched; the store owns that timestamp.
    pub fn merge_into(self, ticket: &mut Ticket) {
        if let Some(device_type) = self.device_type {
            ticket.device_type = device_type;
        }
        if let Some(device_id) = self.device_id {
            ticket.device_id = device_id;
        }
        if let Some(location) = self.location {
            ticket.location = location;
        }
        if let Some(department) = self.department {
            ticket.department = department;
        }
        if let Some(issue_description) = self.issue_description {
            ticket.issue_description = issue_description;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(assigned_to) = self.assigned_to {
            ticket.assigned_to = assigned_to;
        }
        if let Some(reported_by) = self.reported_by {
            ticket.reported_by = reported_by;
        }
        if let Some(completed_at) = self.completed_at {
            ticket.completed_at = Some(completed_at);
        }
        if let Some(estimated_cost) = self.estimated_cost {
            ticket.estimated_cost = Some(estimated_cost);
        }
        if let Some(actual_cost) = self.actual_cost {
            ticket.actual_cost = Some(actual_cost);
        }
        ticket.notes.extend(self.append_notes);
    }
}
