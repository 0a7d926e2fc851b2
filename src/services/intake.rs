use chrono::{DateTime, Datelike, FixedOffset, Offset, Timelike, Utc};

use crate::errors::IntakeError;
use crate::models::{ReservationRecord, ReservationStatus, SkillPayload, NOT_SPECIFIED};

/// Builds the reservation row from a skill callback. Slot values are
/// copied verbatim; nothing is validated.
pub fn extract_reservation(
    payload: &SkillPayload,
    now: DateTime<Utc>,
    offset: FixedOffset,
) -> Result<ReservationRecord, IntakeError> {
    let params = payload.params();

    let slot = |value: Option<&String>| -> Option<String> {
        value.filter(|v| !v.is_empty()).cloned()
    };

    let people_count = slot(params.and_then(|p| p.people_count.as_ref()));
    let preferred_date = slot(params.and_then(|p| p.preferred_date.as_ref()));
    let preferred_time = slot(params.and_then(|p| p.preferred_time.as_ref()));

    // The user often just types their number instead of filling the slot.
    let contact_number = match slot(params.and_then(|p| p.contact_number.as_ref())) {
        Some(contact) => contact,
        None => payload
            .utterance()
            .map(str::to_string)
            .ok_or(IntakeError::MissingUtterance)?,
    };

    Ok(ReservationRecord {
        timestamp: format_korean_timestamp(&now.with_timezone(&offset)),
        people_count: people_count.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        preferred_date: preferred_date.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        preferred_time: preferred_time.unwrap_or_else(|| NOT_SPECIFIED.to_string()),
        contact_number,
        status: ReservationStatus::Received,
    })
}

pub fn offset_from_hours(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap_or_else(|| Utc.fix())
}

/// Korean locale display form, e.g. `2025. 1. 1. 오후 2:05:09`.
pub fn format_korean_timestamp(dt: &DateTime<FixedOffset>) -> String {
    let (is_pm, hour) = dt.hour12();
    let meridiem = if is_pm { "오후" } else { "오전" };
    format!(
        "{}. {}. {}. {} {}:{:02}:{:02}",
        dt.year(),
        dt.month(),
        dt.day(),
        meridiem,
        hour,
        dt.minute(),
        dt.second()
    )
}
