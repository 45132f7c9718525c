//! Spreadsheet date serials (1900 date system).
//!
//! Day 0 is 1899-12-30. Serial 60 is the 1900-02-29 that spreadsheets count
//! even though it never existed; it round-trips through
//! [`CalendarDay::PhantomLeapDay`]. Fractions of a serial are the time of day.

use chrono::{NaiveDate, NaiveTime, TimeDelta, Timelike};

use crate::domain::entities::cell::{CalendarDay, CellDate};

const SECONDS_PER_DAY: f64 = 86_400.0;
const PHANTOM_LEAP_SERIAL: i64 = 60;
/// 9999-12-31, the last day a spreadsheet can display.
const MAX_SERIAL: f64 = 2_958_465.0;

fn epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Whole days and seconds past midnight, rounded to the nearest second.
fn split(serial: f64) -> Option<(i64, u32)> {
    if !serial.is_finite() {
        return None;
    }
    let whole = serial.floor();
    let mut days = whole as i64;
    let mut seconds = ((serial - whole) * SECONDS_PER_DAY).round() as u32;
    if seconds >= SECONDS_PER_DAY as u32 {
        seconds = 0;
        days = days.checked_add(1)?;
    }
    Some((days, seconds))
}

fn offset_date(days: i64) -> Option<NaiveDate> {
    epoch()?.checked_add_signed(TimeDelta::try_days(days)?)
}

fn attach_time(date: CellDate, seconds: u32) -> Option<CellDate> {
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)?;
    Some(date.with_time(time))
}

/// Decodes a serial inside the range spreadsheets display as dates.
pub fn from_serial(serial: f64) -> Option<CellDate> {
    if !(0.0..=MAX_SERIAL).contains(&serial) {
        return None;
    }
    let (days, seconds) = split(serial)?;
    let day = if days == PHANTOM_LEAP_SERIAL {
        CalendarDay::PhantomLeapDay
    } else {
        CalendarDay::Real(offset_date(days)?)
    };
    attach_time(CellDate { day, time: None }, seconds)
}

/// Plain day offset from the epoch for serials outside the displayable range.
pub fn from_epoch_offset(serial: f64) -> Option<CellDate> {
    let (days, seconds) = split(serial)?;
    attach_time(CellDate::from_date(offset_date(days)?), seconds)
}

pub fn to_serial(date: &CellDate) -> f64 {
    let days = match date.day {
        CalendarDay::PhantomLeapDay => PHANTOM_LEAP_SERIAL,
        CalendarDay::Real(day) => match epoch() {
            Some(epoch) => day.signed_duration_since(epoch).num_days(),
            None => 0,
        },
    };
    let seconds = date
        .time
        .map(|t| f64::from(t.num_seconds_from_midnight()))
        .unwrap_or(0.0);
    days as f64 + seconds / SECONDS_PER_DAY
}
