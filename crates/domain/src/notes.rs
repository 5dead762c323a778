// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

/// Formats a ticket note with the conventional `[timestamp] author: text`
/// prefix.
///
/// The store does not enforce this format; it is what the console writes.
#[must_use]
pub fn format_note(at: OffsetDateTime, author: &str, text: &str) -> String {
    format!(
        "[{:04}-{:02}-{:02} {:02}:{:02}] {author}: {}",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute(),
        text.trim()
    )
}
