use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;
use tracing::debug;

use crate::models::form::{DraftField, MeetingDraft};
use crate::models::meeting::{clock_time, Meeting};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reasons a draft cannot be submitted, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("all fields except participants are required")]
    MissingRequired,
    #[error("field {0} could not be parsed")]
    Malformed(DraftField),
    #[error("meeting date and start time must be in the future")]
    StartNotInFuture,
    #[error("end time must be after start time")]
    EndNotAfterStart,
}

/// Check a draft against the scheduling rules, as of `now` (local time).
///
/// On success returns the meeting body to send, without an id.
pub fn validate_draft(draft: &MeetingDraft, now: NaiveDateTime) -> Result<Meeting, Violation> {
    let required = [&draft.topic, &draft.date, &draft.start_time, &draft.end_time];
    if required.iter().any(|value| value.is_empty()) {
        return Err(Violation::MissingRequired);
    }

    let date = NaiveDate::parse_from_str(&draft.date, DATE_FORMAT)
        .map_err(|_| Violation::Malformed(DraftField::Date))?;
    let start_time =
        clock_time::parse(&draft.start_time).map_err(|_| Violation::Malformed(DraftField::StartTime))?;
    let end_time =
        clock_time::parse(&draft.end_time).map_err(|_| Violation::Malformed(DraftField::EndTime))?;

    let starts_at = date.and_time(start_time);
    let ends_at = date.and_time(end_time);
    debug!("Validating meeting from {} to {} against {}", starts_at, ends_at, now);

    if starts_at <= now {
        return Err(Violation::StartNotInFuture);
    }
    if ends_at <= starts_at {
        return Err(Violation::EndNotAfterStart);
    }

    Ok(Meeting {
        id: None,
        topic: draft.topic.clone(),
        date,
        start_time,
        end_time,
        participants: draft.participants.clone(),
    })
}
