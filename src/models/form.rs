use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::meeting::{clock_time, Meeting};

/// The form fields a user can type into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Topic,
    Date,
    StartTime,
    EndTime,
    Participants,
}

impl DraftField {
    pub const ALL: [DraftField; 5] = [
        DraftField::Topic,
        DraftField::Date,
        DraftField::StartTime,
        DraftField::EndTime,
        DraftField::Participants,
    ];

    /// Field name as used in the form and on the wire
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Topic => "topic",
            DraftField::Date => "date",
            DraftField::StartTime => "start_time",
            DraftField::EndTime => "end_time",
            DraftField::Participants => "participants",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for DraftField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftField::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// In-progress meeting bound to the form.
///
/// Fields hold the raw text as typed; nothing is parsed until validation.
/// A present `id` means the next submit updates that meeting instead of
/// creating a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingDraft {
    pub id: Option<i64>,
    pub topic: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub participants: Vec<String>,
}

impl MeetingDraft {
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Topic => self.topic = value.to_string(),
            DraftField::Date => self.date = value.to_string(),
            DraftField::StartTime => self.start_time = value.to_string(),
            DraftField::EndTime => self.end_time = value.to_string(),
            DraftField::Participants => self.participants = parse_participants(value),
        }
    }

    /// Current text of a field, as the form would show it.
    pub fn get(&self, field: DraftField) -> String {
        match field {
            DraftField::Topic => self.topic.clone(),
            DraftField::Date => self.date.clone(),
            DraftField::StartTime => self.start_time.clone(),
            DraftField::EndTime => self.end_time.clone(),
            DraftField::Participants => self.participants_text(),
        }
    }

    pub fn participants_text(&self) -> String {
        self.participants.join(", ")
    }
}

impl From<&Meeting> for MeetingDraft {
    fn from(meeting: &Meeting) -> Self {
        Self {
            id: meeting.id,
            topic: meeting.topic.clone(),
            date: meeting.date.format("%Y-%m-%d").to_string(),
            start_time: clock_time::format(&meeting.start_time),
            end_time: clock_time::format(&meeting.end_time),
            participants: meeting.participants.clone(),
        }
    }
}

/// Split a comma separated participants input into trimmed names.
///
/// Empty segments are kept and order is preserved, so `""` yields `[""]`.
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',').map(|name| name.trim().to_string()).collect()
}
