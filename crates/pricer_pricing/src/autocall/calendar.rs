//! Business-day calendar helpers.
//!
//! The corpus's `DayCountConvention` handles year fractions but stops short
//! of calendar enumeration. No named holiday calendar is specified anywhere
//! in the term sheet or run config, so this engine uses a weekend-only
//! calendar: every day that isn't Saturday or Sunday is a business day. This
//! is the only choice that doesn't invent a holiday list out of nothing.

use chrono::{Datelike, Weekday};

use pricer_core::types::time::Date;

/// True if `date` falls on a weekday (Mon-Fri).
pub fn is_business_day(date: Date) -> bool {
    !matches!(
        date.into_inner().weekday(),
        Weekday::Sat | Weekday::Sun
    )
}

/// The next business day on or after `date`.
pub fn next_business_day(date: Date) -> Date {
    let mut naive = date.into_inner();
    while !is_business_day(Date::from_ymd(naive.year(), naive.month(), naive.day()).unwrap()) {
        naive = naive.succ_opt().expect("date arithmetic overflow");
    }
    Date::from_ymd(naive.year(), naive.month(), naive.day()).unwrap()
}
