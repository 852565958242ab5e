//! Date conversion between the API's storage encoding and the form's
//! display encoding.
//!
//! The roster backend stores dates as ISO timestamps in which the `:00.0`
//! run (zero seconds plus the first millisecond digit) has been replaced by
//! a `+`, e.g. `2024-03-05T00:00+00Z`. That is a convention of this backend,
//! not an ISO format. Reading is lenient: plain RFC 3339, minute-precision
//! timestamps and bare dates are accepted too, and only the calendar date is
//! kept. Writing always anchors the date at midnight UTC so the date never
//! shifts with the host timezone.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, NaiveDate, NaiveTime};
use tracing::warn;

use crate::model::{Field, InternRecord};

/// Display encoding used by date fields in the form.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d";

/// What the backend substitutes `+` for.
const STORAGE_MARKER: &str = ":00.0";

/// Parse a display-encoded date (`YYYY-MM-DD`).
pub fn parse_local_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DISPLAY_FORMAT).ok()
}

/// Convert a stored timestamp to a `YYYY-MM-DD` display date.
pub fn to_local_date(stored: &str) -> Result<String> {
    let date = parse_stored(stored.trim())
        .with_context(|| format!("not a stored date: {stored:?}"))?;
    Ok(date.format(DISPLAY_FORMAT).to_string())
}

/// Convert a `YYYY-MM-DD` display date to the storage encoding.
pub fn to_stored_format(local: &str) -> Result<String> {
    let Some(date) = parse_local_date(local) else {
        bail!("not a YYYY-MM-DD date: {local:?}");
    };
    let iso = date
        .and_time(NaiveTime::MIN)
        .and_utc()
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string();
    Ok(iso.replacen(STORAGE_MARKER, "+", 1))
}

/// Turn a record fetched from the API into its display form.
///
/// A date that cannot be read is left empty, which the validator reports
/// as a missing field.
pub fn decode_record(mut stored: InternRecord) -> InternRecord {
    for field in [Field::InternshipStart, Field::InternshipEnd] {
        let raw = stored.get(field);
        if raw.is_empty() {
            continue;
        }
        let display = match to_local_date(raw) {
            Ok(date) => date,
            Err(e) => {
                warn!(id = %stored.id, %field, error = %e, "dropping unreadable date");
                String::new()
            }
        };
        stored.set(field, display);
    }
    stored
}

/// Turn a display-form record into what the API stores.
pub fn encode_record(display: &InternRecord) -> Result<InternRecord> {
    let mut stored = display.clone();
    for field in [Field::InternshipStart, Field::InternshipEnd] {
        let encoded = to_stored_format(display.get(field))
            .with_context(|| format!("cannot encode {field}"))?;
        stored.set(field, encoded);
    }
    Ok(stored)
}

fn parse_stored(text: &str) -> Option<NaiveDate> {
    // Backend convention first, then real RFC 3339.
    if text.contains('+')
        && let Ok(ts) = DateTime::parse_from_rfc3339(&text.replacen('+', STORAGE_MARKER, 1))
    {
        return Some(ts.date_naive());
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Some(ts.date_naive());
    }
    date_portion(text)
}

/// The leading `YYYY-MM-DD` of a timestamp, provided what follows it looks
/// like a time of day.
fn date_portion(text: &str) -> Option<NaiveDate> {
    let (date, rest) = match text.find(['T', 't', ' ']) {
        Some(i) => text.split_at(i),
        None => (text, ""),
    };
    let date = NaiveDate::parse_from_str(date, DISPLAY_FORMAT).ok()?;
    if !rest.is_empty() {
        let hh_mm = rest.get(1..6)?;
        NaiveTime::parse_from_str(hh_mm, "%H:%M").ok()?;
    }
    Some(date)
}
