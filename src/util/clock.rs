//! Wall-clock helpers for the live clock and chat timestamps.
//!
//! In `csr` builds times are broken down in the browser's local zone via
//! `js_sys::Date`; elsewhere they are broken down as UTC.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

const MS_PER_DAY: i64 = 86_400_000;
const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const MONTHS: [&str; 12] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"];

/// Calendar breakdown of an instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeParts {
    pub year: i64,
    /// Zero-based month.
    pub month: u32,
    pub day: u32,
    /// Zero-based, Sunday first.
    pub weekday: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl TimeParts {
    /// Break down milliseconds since the Unix epoch.
    pub fn from_ms(ms: f64) -> Self {
        #[cfg(feature = "csr")]
        {
            let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
            Self {
                year: i64::from(date.get_full_year()),
                month: date.get_month(),
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::from_ms_utc(ms)
        }
    }

    /// UTC breakdown.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_ms_utc(ms: f64) -> Self {
        let ms = ms.floor() as i64;
        let days = ms.div_euclid(MS_PER_DAY);
        let secs = ms.rem_euclid(MS_PER_DAY) / 1000;

        // Days-to-civil conversion (proleptic Gregorian, era-based).
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z.rem_euclid(146_097);
        let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= 2);

        Self {
            year,
            month: (month - 1) as u32,
            day: day as u32,
            weekday: (days + 4).rem_euclid(7) as u32,
            hour: (secs / 3600) as u32,
            minute: (secs % 3600 / 60) as u32,
            second: (secs % 60) as u32,
        }
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// 24-hour `HH:MM` or `HH:MM:SS`.
pub fn format_time(t: &TimeParts, show_seconds: bool) -> String {
    if show_seconds {
        format!("{:02}:{:02}:{:02}", t.hour, t.minute, t.second)
    } else {
        format!("{:02}:{:02}", t.hour, t.minute)
    }
}

/// Short date such as `Mon, Jan 5`.
pub fn format_date(t: &TimeParts) -> String {
    let weekday = WEEKDAYS.get(t.weekday as usize).copied().unwrap_or("?");
    let month = MONTHS.get(t.month as usize).copied().unwrap_or("?");
    format!("{weekday}, {month} {}", t.day)
}

/// Visual variant of the live clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ClockVariant {
    #[default]
    Default,
    Compact,
    Detailed,
}

impl ClockVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "live-clock",
            Self::Compact => "live-clock live-clock--compact",
            Self::Detailed => "live-clock live-clock--detailed",
        }
    }
}
