//! Display formatting for raw snapshot values.
//!
//! All functions are pure. The current time and display time zone are passed
//! in by the caller so rendering stays reproducible in tests.

use crate::status::{InterfaceStatus, parse_float_prefix, parse_int_prefix};
use chrono::{TimeZone, Utc};
use std::fmt::Display;

pub const MODE_LABEL_FAILOVER: &str = "Failover (Primary/Backup)";
pub const MODE_LABEL_MULTI_UPLINK: &str = "Multi-Uplink (Load Balancing)";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current wall-clock time in epoch seconds.
pub fn now_epoch_secs() -> i64 {
    Utc::now().timestamp()
}

/// Interpret a raw epoch-seconds field. Empty, non-numeric and zero values
/// all count as "no value".
///
/// A literal `0` is absent too: the daemon writes `0` for "never happened",
/// so it renders as "Never"/"Unknown" rather than the 1970 epoch.
pub fn epoch_value(raw: &str) -> Option<i64> {
    parse_int_prefix(raw).filter(|secs| *secs != 0)
}

/// Elapsed time since `epoch` as a single floored unit.
///
/// A value in the future produces a negative second count; clock skew
/// between the daemon and the viewer is not corrected for. Differences
/// beyond the `i64` range saturate.
pub fn format_duration(epoch: Option<i64>, now: i64) -> String {
    let Some(then) = epoch.filter(|secs| *secs != 0) else {
        return "Unknown".to_string();
    };

    let diff = now.saturating_sub(then);
    if diff < 60 {
        format!("{} seconds", diff)
    } else if diff < 3600 {
        format!("{} minutes", diff.div_euclid(60))
    } else if diff < 86400 {
        format!("{} hours", diff.div_euclid(3600))
    } else {
        format!("{} days", diff.div_euclid(86400))
    }
}

/// Absolute local date-time for `epoch`, or "Never".
pub fn format_timestamp<Tz>(epoch: Option<i64>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(secs) = epoch.filter(|secs| *secs != 0) else {
        return "Never".to_string();
    };

    match tz.timestamp_opt(secs, 0).earliest() {
        Some(datetime) => datetime.format(TIMESTAMP_FORMAT).to_string(),
        None => "Never".to_string(),
    }
}

/// Latency in milliseconds with two decimals, or "-" when unmeasured.
///
/// `0` means the interface has not been pinged yet, so it shows "-" and
/// never "0.00 ms".
pub fn format_latency(raw: &str) -> String {
    match parse_float_prefix(raw) {
        Some(ms) if ms != 0.0 => format!("{:.2} ms", ms),
        _ => "-".to_string(),
    }
}

pub fn or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

pub fn mode_label(mode: &str) -> &'static str {
    if mode == crate::status::MODE_FAILOVER {
        MODE_LABEL_FAILOVER
    } else {
        MODE_LABEL_MULTI_UPLINK
    }
}

/// Color family of a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Red,
    Orange,
    Gray,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Green => "green",
            Tone::Red => "red",
            Tone::Orange => "orange",
            Tone::Gray => "gray",
        }
    }

    pub fn hex(&self) -> &'static str {
        match self {
            Tone::Green => "#4CAF50",
            Tone::Red => "#f44336",
            Tone::Orange => "#FF9800",
            Tone::Gray => "#9E9E9E",
        }
    }
}

/// Fixed label and style for an interface status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub symbol: &'static str,
    pub label: &'static str,
    pub tone: Tone,
    pub bold: bool,
}

impl Badge {
    pub fn text(&self) -> String {
        format!("{} {}", self.symbol, self.label)
    }
}

/// Badge for a raw status code. Unrecognized codes get the "Unknown" badge.
pub fn status_badge(code: &str) -> Badge {
    badge_for(InterfaceStatus::from_code(code))
}

pub fn badge_for(status: InterfaceStatus) -> Badge {
    match status {
        InterfaceStatus::Up => Badge {
            symbol: "●",
            label: "UP",
            tone: Tone::Green,
            bold: true,
        },
        InterfaceStatus::Down => Badge {
            symbol: "●",
            label: "DOWN",
            tone: Tone::Red,
            bold: true,
        },
        InterfaceStatus::InterfaceDown => Badge {
            symbol: "⚠",
            label: "Interface Down",
            tone: Tone::Orange,
            bold: false,
        },
        InterfaceStatus::Disabled => Badge {
            symbol: "○",
            label: "Disabled",
            tone: Tone::Gray,
            bold: false,
        },
        InterfaceStatus::NoGateway => Badge {
            symbol: "⚠",
            label: "No Gateway",
            tone: Tone::Orange,
            bold: false,
        },
        InterfaceStatus::Unknown => Badge {
            symbol: "?",
            label: "Unknown",
            tone: Tone::Gray,
            bold: false,
        },
    }
}
