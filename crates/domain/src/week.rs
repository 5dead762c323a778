// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::{Date, Duration, Month};

/// An ISO-8601 week, identified by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IsoWeek {
    monday: Date,
}

impl IsoWeek {
    /// Returns the ISO week containing `date`.
    #[must_use]
    pub fn containing(date: Date) -> Self {
        let offset: i64 = i64::from(date.weekday().number_days_from_monday());
        Self {
            monday: date.saturating_sub(Duration::days(offset)),
        }
    }

    /// The Monday that starts this week.
    #[must_use]
    pub const fn monday(&self) -> Date {
        self.monday
    }

    /// The Sunday that ends this week.
    #[must_use]
    pub fn sunday(&self) -> Date {
        self.monday.saturating_add(Duration::days(6))
    }

    /// The ISO week-numbering year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.monday.to_iso_week_date().0
    }

    /// The ISO week number (1-53).
    #[must_use]
    pub fn week(&self) -> u8 {
        self.monday.to_iso_week_date().1
    }

    /// The week immediately before this one.
    #[must_use]
    pub fn previous(&self) -> Self {
        Self {
            monday: self.monday.saturating_sub(Duration::weeks(1)),
        }
    }

    /// Returns whether `date` falls inside this week.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date >= self.monday && date <= self.sunday()
    }

    /// A human-readable range such as `Jan 8-14, 2024`.
    ///
    /// Weeks spanning two months read `Jan 29 - Feb 4, 2024`; weeks spanning
    /// two years read `Dec 30, 2024 - Jan 5, 2025`.
    #[must_use]
    pub fn label(&self) -> String {
        let start: Date = self.monday;
        let end: Date = self.sunday();
        if start.year() != end.year() {
            format!(
                "{} {}, {} - {} {}, {}",
                month_abbrev(start.month()),
                start.day(),
                start.year(),
                month_abbrev(end.month()),
                end.day(),
                end.year()
            )
        } else if start.month() != end.month() {
            format!(
                "{} {} - {} {}, {}",
                month_abbrev(start.month()),
                start.day(),
                month_abbrev(end.month()),
                end.day(),
                end.year()
            )
        } else {
            format!(
                "{} {}-{}, {}",
                month_abbrev(start.month()),
                start.day(),
                end.day(),
                end.year()
            )
        }
    }
}

impl std::fmt::Display for IsoWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-W{:02}", self.year(), self.week())
    }
}

const fn month_abbrev(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

impl serde::Serialize for IsoWeek {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
