//! Status snapshot parser.
//!
//! The snapshot is rewritten wholesale by the daemon, so a read can land on a
//! half-written file. Parsing never fails: lines that are neither a section
//! header nor a single `key=value` pair are dropped.

use crate::status::types::{Interface, Status};
use tracing::debug;

/// Where subsequent `key=value` lines are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    /// Before the first section header.
    Global,
    /// Inside the section at this index of `Status::interfaces`.
    Section(usize),
}

/// A classified, trimmed input line.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Header(&'a str),
    Pair(&'a str, &'a str),
    Ignored,
}

fn classify(line: &str) -> Line<'_> {
    if let Some(name) = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|name| !name.is_empty())
    {
        return Line::Header(name);
    }

    let mut parts = line.split('=');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(value), None) => Line::Pair(key.trim(), value.trim()),
        _ => Line::Ignored,
    }
}

/// Parse a raw snapshot.
///
/// Returns `None` for absent or empty input so callers can tell "no data yet"
/// apart from a valid snapshot listing zero interfaces.
pub fn parse(raw: Option<&str>) -> Option<Status> {
    let raw = raw.filter(|text| !text.is_empty())?;

    let mut status = Status::default();
    let mut context = Context::Global;
    let mut skipped = 0usize;

    for line in raw.trim().split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match (classify(line), context) {
            (Line::Header(name), _) => {
                status.interfaces.push(Interface::new(name));
                context = Context::Section(status.interfaces.len() - 1);
            }
            (Line::Pair(key, value), Context::Global) => set_global(&mut status, key, value),
            (Line::Pair(key, value), Context::Section(index)) => {
                status.interfaces[index].set(key, value.to_string());
            }
            (Line::Ignored, _) => skipped += 1,
        }
    }

    debug!(
        event = "core.status.parse_completed",
        interfaces = status.interfaces.len(),
        skipped_lines = skipped
    );

    Some(status)
}

fn set_global(status: &mut Status, key: &str, value: &str) {
    match key {
        "timestamp" => status.timestamp = parse_int_prefix(value),
        "check_interval" => status.check_interval = parse_int_prefix(value),
        "mode" => status.mode = value.to_string(),
        _ => {
            status.extra.insert(key.to_string(), value.to_string());
        }
    }
}

/// Best-effort integer conversion: optional sign followed by leading digits,
/// trailing garbage ignored. `None` when there are no digits or the value
/// does not fit.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let (sign, rest) = match value.as_bytes().first() {
        Some(b'-') => ("-", &value[1..]),
        Some(b'+') => ("", &value[1..]),
        _ => ("", value),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    format!("{}{}", sign, &rest[..digits_len]).parse().ok()
}

/// Best-effort float conversion: the longest leading decimal number with an
/// optional exponent, trailing garbage ignored.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let value = value.trim_start();
    let bytes = value.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_digits = bytes[end..].iter().take_while(|b| b.is_ascii_digit()).count();
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = bytes[end + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_digits > 0 || int_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign = usize::from(matches!(bytes.get(end + 1), Some(b'-' | b'+')));
        let exp_digits = bytes[end + 1 + sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if exp_digits > 0 {
            end += 1 + sign + exp_digits;
        }
    }

    value[..end].parse().ok()
}
