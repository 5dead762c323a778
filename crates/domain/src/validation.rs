// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::TicketDraft;

/// Validates that a ticket draft's required fields are present and its costs
/// are well formed.
///
/// The ticket store performs no validation of its own; callers run this
/// before `create`.
///
/// # Arguments
///
/// * `draft` - The draft to validate
///
/// # Errors
///
/// Returns an error if:
/// - The device id, location, department, issue description, or reporter is blank
/// - Either cost is negative or not finite
pub fn validate_ticket_draft(draft: &TicketDraft) -> Result<(), DomainError> {
    require_text("deviceId", &draft.device_id)?;
    require_text("location", &draft.location)?;
    require_text("department", &draft.department)?;
    require_text("issueDescription", &draft.issue_description)?;
    require_text("reportedBy", &draft.reported_by)?;

    if let Some(cost) = draft.estimated_cost {
        validate_cost(cost)?;
    }
    if let Some(cost) = draft.actual_cost {
        validate_cost(cost)?;
    }

    Ok(())
}

/// Validates that a cost is a finite, non-negative amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidCost` otherwise.
pub fn validate_cost(cost: f64) -> Result<(), DomainError> {
    if !cost.is_finite() || cost < 0.0 {
        return Err(DomainError::InvalidCost {
            value: cost.to_string(),
        });
    }
    Ok(())
}

/// Parses a free-text cost field.
///
/// Blank input means "no cost given" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns `DomainError::InvalidCost` if the input is not a number or is
/// negative.
pub fn parse_cost(input: &str) -> Result<Option<f64>, DomainError> {
    let trimmed: &str = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let cost: f64 = trimmed.parse().map_err(|_| DomainError::InvalidCost {
        value: trimmed.to_string(),
    })?;
    validate_cost(cost).map_err(|_| DomainError::InvalidCost {
        value: trimmed.to_string(),
    })?;
    Ok(Some(cost))
}

fn require_text(field: &'static str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField { field });
    }
    Ok(())
}
