//! User-facing strings, keyed by locale.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::form::DraftField;
use crate::validation::Violation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    English,
    Turkish,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported locale '{0}', expected 'en' or 'tr'")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "tr" | "turkish" => Ok(Locale::Turkish),
            _ => Err(UnknownLocale(s.to_string())),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::English => f.write_str("en"),
            Locale::Turkish => f.write_str("tr"),
        }
    }
}

impl Locale {
    pub fn messages(&self) -> &'static Messages {
        match self {
            Locale::English => &ENGLISH,
            Locale::Turkish => &TURKISH,
        }
    }
}

pub struct Messages {
    pub app_title: &'static str,
    pub create_title: &'static str,
    pub edit_title: &'static str,
    pub create_button: &'static str,
    pub update_button: &'static str,
    pub meetings_title: &'static str,

    pub id_label: &'static str,
    pub topic_label: &'static str,
    pub date_label: &'static str,
    pub start_time_label: &'static str,
    pub end_time_label: &'static str,
    pub participants_label: &'static str,
    pub no_meetings: &'static str,

    pub missing_required: &'static str,
    pub invalid_value: &'static str,
    pub start_in_past: &'static str,
    pub end_before_start: &'static str,

    pub fetch_failed: &'static str,
    pub save_failed: &'static str,
    pub delete_failed: &'static str,

    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

impl Messages {
    pub fn field_label(&self, field: DraftField) -> &'static str {
        match field {
            DraftField::Topic => self.topic_label,
            DraftField::Date => self.date_label,
            DraftField::StartTime => self.start_time_label,
            DraftField::EndTime => self.end_time_label,
            DraftField::Participants => self.participants_label,
        }
    }

    pub fn violation(&self, violation: &Violation) -> String {
        match violation {
            Violation::MissingRequired => self.missing_required.to_string(),
            Violation::Malformed(field) => {
                format!("{}: {}", self.invalid_value, self.field_label(*field))
            }
            Violation::StartNotInFuture => self.start_in_past.to_string(),
            Violation::EndNotAfterStart => self.end_before_start.to_string(),
        }
    }
}

static ENGLISH: Messages = Messages {
    app_title: "Meeting Organizer",
    create_title: "Create New Meeting",
    edit_title: "Edit Meeting",
    create_button: "Create Meeting",
    update_button: "Update Meeting",
    meetings_title: "Meetings",

    id_label: "Id",
    topic_label: "Topic",
    date_label: "Date",
    start_time_label: "Start Time",
    end_time_label: "End Time",
    participants_label: "Participants",
    no_meetings: "No meetings yet",

    missing_required: "All fields except participants are required",
    invalid_value: "Invalid value",
    start_in_past: "Meeting date and start time must be in the future",
    end_before_start: "End time must be after start time",

    fetch_failed: "Failed to fetch meetings",
    save_failed: "Failed to save meeting",
    delete_failed: "Failed to delete meeting",

    created: "Meeting successfully created",
    updated: "Meeting successfully edited",
    deleted: "Meeting successfully deleted",
};

static TURKISH: Messages = Messages {
    app_title: "Toplantı Düzenleyici",
    create_title: "Yeni Toplantı Oluştur",
    edit_title: "Toplantıyı Düzenle",
    create_button: "Toplantı Oluştur",
    update_button: "Toplantıyı Güncelle",
    meetings_title: "Toplantılar",

    id_label: "No",
    topic_label: "Konu",
    date_label: "Tarih",
    start_time_label: "Başlangıç Saati",
    end_time_label: "Bitiş Saati",
    participants_label: "Katılımcılar",
    no_meetings: "Henüz toplantı yok",

    missing_required: "Katılımcılar dışındaki tüm alanlar zorunludur",
    invalid_value: "Geçersiz değer",
    start_in_past: "Toplantı tarihi ve başlangıç saati gelecekte olmalıdır",
    end_before_start: "Bitiş saati başlangıç saatinden sonra olmalıdır",

    fetch_failed: "Toplantılar alınamadı",
    save_failed: "Toplantı kaydedilemedi",
    delete_failed: "Toplantı silinemedi",

    created: "Toplantı başarıyla oluşturuldu",
    updated: "Toplantı başarıyla düzenlendi",
    deleted: "Toplantı başarıyla silindi",
};
