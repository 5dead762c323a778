// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::MissingField { field: "deviceId" };
    assert_eq!(format!("{err}"), "Field 'deviceId' is required");

    let err: DomainError = DomainError::InvalidCost {
        value: String::from("abc"),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid cost 'abc': must be a non-negative number"
    );

    let err: DomainError = DomainError::UnknownDeviceType(String::from("phone"));
    assert_eq!(format!("{err}"), "Unknown device type: phone");

    let err: DomainError = DomainError::UnknownPriority(String::from("urgent"));
    assert_eq!(format!("{err}"), "Unknown priority: urgent");

    let err: DomainError = DomainError::UnknownStatus(String::from("done"));
    assert_eq!(format!("{err}"), "Unknown ticket status: done");

    let err: DomainError = DomainError::UnknownRole(String::from("root"));
    assert_eq!(format!("{err}"), "Unknown role: root");

    let err: DomainError = DomainError::InvalidTicketId(String::from("42"));
    assert_eq!(format!("{err}"), "Invalid ticket id: 42");
}
