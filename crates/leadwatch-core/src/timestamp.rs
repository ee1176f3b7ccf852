use std::cmp::Ordering;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Parses backend timestamps: RFC 3339, or ISO 8601 without an offset (read as UTC).
pub fn parse_timestamp(value: &str) -> Option<OffsetDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Some(parsed);
    }
    let naive = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    let spaced = format_description!(
        "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
    );
    PrimitiveDateTime::parse(value, naive)
        .or_else(|_| PrimitiveDateTime::parse(value, spaced))
        .ok()
        .map(PrimitiveDateTime::assume_utc)
}

/// Human-readable form in UTC; "N/A" when missing, the raw text when unparseable.
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.filter(|raw| !raw.trim().is_empty()) else {
        return "N/A".to_string();
    };
    let Some(parsed) = parse_timestamp(raw) else {
        return raw.to_string();
    };
    parsed
        .to_offset(UtcOffset::UTC)
        .format(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second] UTC"
        ))
        .unwrap_or_else(|_| raw.to_string())
}

/// Newest-first ordering. Unparseable or missing timestamps sort after all
/// dated entries and keep their relative order.
pub fn newest_first(a: Option<&str>, b: Option<&str>) -> Ordering {
    match (a.and_then(parse_timestamp), b.and_then(parse_timestamp)) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
