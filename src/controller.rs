//! State behind the meeting form and table.
//!
//! The controller owns the collection last fetched from the API, the draft
//! bound to the form, the inline error line and the queue of pending
//! notices. Whether a submit creates or updates is decided only by the
//! presence of an id on the draft.

use chrono::{Local, NaiveDateTime};
use tracing::{debug, error, info, warn};

use crate::client::MeetingsApi;
use crate::i18n::{Locale, Messages};
use crate::models::form::{DraftField, MeetingDraft, UnknownField};
use crate::models::meeting::Meeting;
use crate::validation::validate_draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message about the outcome of one operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

pub struct MeetingController<A> {
    api: A,
    messages: &'static Messages,
    meetings: Vec<Meeting>,
    draft: MeetingDraft,
    error: Option<String>,
    notices: Vec<Notice>,
}

impl<A: MeetingsApi> MeetingController<A> {
    pub fn new(api: A, locale: Locale) -> Self {
        Self {
            api,
            messages: locale.messages(),
            meetings: Vec::new(),
            draft: MeetingDraft::default(),
            error: None,
            notices: Vec::new(),
        }
    }

    pub fn meetings(&self) -> &[Meeting] {
        &self.meetings
    }

    pub fn draft(&self) -> &MeetingDraft {
        &self.draft
    }

    /// Id of the meeting being edited, `None` in create mode
    pub fn editing_id(&self) -> Option<i64> {
        self.draft.id
    }

    pub fn is_editing(&self) -> bool {
        self.draft.id.is_some()
    }

    /// Inline error shown beneath the form
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn messages(&self) -> &'static Messages {
        self.messages
    }

    pub fn find(&self, id: i64) -> Option<&Meeting> {
        self.meetings.iter().find(|meeting| meeting.id == Some(id))
    }

    /// Take the notices raised since the last call.
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// Fetch the full collection, keeping the previous one on failure.
    pub async fn load_meetings(&mut self) -> bool {
        match self.api.list_meetings().await {
            Ok(meetings) => {
                info!("Loaded {} meetings", meetings.len());
                self.meetings = meetings;
                true
            }
            Err(err) => {
                error!("Failed to fetch meetings: {}", err);
                self.fail(self.messages.fetch_failed);
                false
            }
        }
    }

    /// Write a form field by name.
    pub fn update_field(&mut self, name: &str, value: &str) -> Result<(), UnknownField> {
        let field = name.parse::<DraftField>()?;
        self.set_field(field, value);
        Ok(())
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) {
        debug!("Setting draft field {} to '{}'", field, value);
        self.draft.set(field, value);
    }

    pub fn validate(&mut self) -> bool {
        self.validate_at(Local::now().naive_local())
    }

    /// Validate the draft as of `now`, recording the violation for display.
    pub fn validate_at(&mut self, now: NaiveDateTime) -> bool {
        self.checked_draft(now).is_some()
    }

    pub async fn submit(&mut self) -> bool {
        self.submit_at(Local::now().naive_local()).await
    }

    /// Validate and send the draft, creating or updating depending on its id.
    ///
    /// A rejected draft never reaches the API. A failed request keeps the
    /// draft so the user can retry.
    pub async fn submit_at(&mut self, now: NaiveDateTime) -> bool {
        let Some(meeting) = self.checked_draft(now) else {
            return false;
        };

        let editing_id = self.draft.id;
        let result = match editing_id {
            Some(id) => self.api.update_meeting(id, &meeting).await,
            None => self.api.create_meeting(&meeting).await,
        };

        if let Err(err) = result {
            error!("Failed to save meeting: {}", err);
            self.fail(self.messages.save_failed);
            return false;
        }

        match editing_id {
            Some(id) => info!("Successfully updated meeting {}", id),
            None => info!("Successfully created meeting: {}", meeting.topic),
        }

        self.load_meetings().await;

        let confirmation = if editing_id.is_some() {
            self.messages.updated
        } else {
            self.messages.created
        };
        self.notify(NoticeKind::Success, confirmation);

        self.draft = MeetingDraft::default();
        true
    }

    /// Load an existing meeting into the form so the next submit updates it.
    pub fn begin_edit(&mut self, meeting: &Meeting) {
        debug!("Editing meeting {:?}", meeting.id);
        self.draft = MeetingDraft::from(meeting);
    }

    /// Drop the draft and return to create mode.
    pub fn cancel_edit(&mut self) {
        self.draft = MeetingDraft::default();
        self.error = None;
    }

    pub async fn delete(&mut self, id: i64) -> bool {
        match self.api.delete_meeting(id).await {
            Ok(()) => {
                info!("Successfully deleted meeting {}", id);
                self.load_meetings().await;
                self.notify(NoticeKind::Success, self.messages.deleted);
                true
            }
            Err(err) => {
                error!("Failed to delete meeting {}: {}", id, err);
                self.fail(self.messages.delete_failed);
                false
            }
        }
    }

    fn checked_draft(&mut self, now: NaiveDateTime) -> Option<Meeting> {
        match validate_draft(&self.draft, now) {
            Ok(meeting) => {
                self.error = None;
                Some(meeting)
            }
            Err(violation) => {
                warn!("Draft rejected: {}", violation);
                let message = self.messages.violation(&violation);
                self.fail(&message);
                None
            }
        }
    }

    fn notify(&mut self, kind: NoticeKind, message: &str) {
        self.notices.push(Notice {
            kind,
            message: message.to_string(),
        });
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.notify(NoticeKind::Error, message);
    }
}
