//! Clock Commands
//!
//! Time readings from the browser's `Date`.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, Timelike, Utc};
use wasm_bindgen::JsValue;
use wedding_core::Clock;

/// Wall clock backed by `Date.now()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_millis(&self) -> i64 {
        js_sys::Date::now() as i64
    }
}

/// Epoch milliseconds of a wall-clock time in the viewer's timezone.
pub fn local_millis(at: NaiveDateTime) -> i64 {
    let date = js_sys::Date::new_with_year_month_day_hr_min_sec(
        at.year() as u32,
        at.month0() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
        at.second() as i32,
    );
    date.get_time() as i64
}

/// The viewer's UTC offset in force at `at`, daylight saving included.
pub fn viewer_offset_at(at: &DateTime<Utc>) -> FixedOffset {
    // getTimezoneOffset is minutes *behind* UTC.
    let date = js_sys::Date::new(&JsValue::from_f64(at.timestamp_millis() as f64));
    offset_from_minutes_behind(date.get_timezone_offset())
}

fn offset_from_minutes_behind(minutes: f64) -> FixedOffset {
    FixedOffset::west_opt((minutes * 60.0) as i32).unwrap_or_else(|| Utc.fix())
}
