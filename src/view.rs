//! Terminal rendering of the meeting form, table and notices.

use owo_colors::OwoColorize;

use crate::controller::{Notice, NoticeKind};
use crate::i18n::Messages;
use crate::models::form::{DraftField, MeetingDraft};
use crate::models::meeting::{clock_time, Meeting};

/// Form header, the five fields, the inline error and the submit label.
pub fn render_form(draft: &MeetingDraft, error: Option<&str>, messages: &Messages) -> String {
    let (title, button) = if draft.id.is_some() {
        (messages.edit_title, messages.update_button)
    } else {
        (messages.create_title, messages.create_button)
    };

    let label_width = DraftField::ALL
        .iter()
        .map(|field| messages.field_label(*field).chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![title.to_string()];
    for field in DraftField::ALL {
        let label = messages.field_label(field);
        lines.push(format!("  {}: {}", pad(label, label_width), draft.get(field)));
    }
    if let Some(error) = error {
        lines.push(format!("  ! {}", error));
    }
    lines.push(format!("  [{}]", button));

    lines.join("\n")
}

/// The meetings table, one row per meeting in collection order.
pub fn render_table(meetings: &[Meeting], messages: &Messages) -> String {
    let header = [
        messages.id_label,
        messages.topic_label,
        messages.date_label,
        messages.start_time_label,
        messages.end_time_label,
        messages.participants_label,
    ];

    if meetings.is_empty() {
        return format!("{}\n  {}", messages.meetings_title, messages.no_meetings);
    }

    let rows: Vec<[String; 6]> = meetings
        .iter()
        .map(|meeting| {
            [
                meeting.id.map(|id| id.to_string()).unwrap_or_default(),
                meeting.topic.clone(),
                meeting.date.format("%Y-%m-%d").to_string(),
                clock_time::format(&meeting.start_time),
                clock_time::format(&meeting.end_time),
                meeting.participants_text(),
            ]
        })
        .collect();

    let mut widths = header.map(|title| title.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines = vec![messages.meetings_title.to_string()];
    lines.push(render_row(header.iter().copied(), &widths));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    for row in &rows {
        lines.push(render_row(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

/// One notice line, marked and colored by its kind.
pub fn render_notice(notice: &Notice) -> String {
    match notice.kind {
        NoticeKind::Success => format!("{} {}", "✓".green(), notice.message.green()),
        NoticeKind::Error => format!("{} {}", "✗".red(), notice.message.red()),
    }
}

fn render_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(" | ")
        .trim_end()
        .to_string()
}

// Pads by characters, not bytes, so Turkish labels line up
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    format!("{}{}", text, " ".repeat(width.saturating_sub(len)))
}
