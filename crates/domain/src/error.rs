// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required text field is empty or whitespace.
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },
    /// A cost value is not a non-negative number.
    InvalidCost {
        /// The offending input.
        value: String,
    },
    /// Device type string is not recognised.
    UnknownDeviceType(String),
    /// Priority string is not recognised.
    UnknownPriority(String),
    /// Status string is not recognised.
    UnknownStatus(String),
    /// Role string is not recognised.
    UnknownRole(String),
    /// Ticket identifier is not a valid opaque token.
    InvalidTicketId(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingField { field } => write!(f, "Field '{field}' is required"),
            Self::InvalidCost { value } => {
                write!(f, "Invalid cost '{value}': must be a non-negative number")
            }
            Self::UnknownDeviceType(value) => write!(f, "Unknown device type: {value}"),
            Self::UnknownPriority(value) => write!(f, "Unknown priority: {value}"),
            Self::UnknownStatus(value) => write!(f, "Unknown ticket status: {value}"),
            Self::UnknownRole(value) => write!(f, "Unknown role: {value}"),
            Self::InvalidTicketId(value) => write!(f, "Invalid ticket id: {value}"),
        }
    }
}

impl std::error::Error for DomainError {}
