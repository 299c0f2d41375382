//! Meeting Organizer
//!
//! A client for a meetings REST API: it keeps the list of meetings and a
//! draft bound to a form, validates the draft before anything is sent, and
//! turns create, update and delete actions into HTTP requests, reloading the
//! list after every change.
//!
//! # Modules
//!
//! - `controller`: MeetingController, the state behind the form and table
//! - `client`: MeetingsApi and its reqwest implementation, MeetingsClient
//! - `validation`: scheduling rules a draft must satisfy
//! - `i18n`: user-facing strings for each supported locale
//! - `view`: plain-text form and table rendering
//! - `cli`: the `meeting-organizer` command line

pub mod cli;
pub mod client;
pub mod config;
pub mod controller;
pub mod i18n;
pub mod models;
pub mod validation;
pub mod view;


// Re-export the main API types for ease of use
pub use client::{ClientError, MeetingsApi, MeetingsClient};
pub use config::Config;
pub use controller::{MeetingController, Notice, NoticeKind};
pub use i18n::Locale;
pub use models::form::{DraftField, MeetingDraft};
pub use models::meeting::Meeting;
pub use validation::Violation;
