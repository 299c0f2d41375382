use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

use crate::models::meeting::Meeting;

/// Fixed "now" for tests that inject the clock
pub fn fixed_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2035, 3, 30)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// Tomorrow's date as typed into the form, for tests on the real clock
pub fn tomorrow() -> String {
    (Local::now().date_naive() + Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

pub fn yesterday() -> String {
    (Local::now().date_naive() - Duration::days(1))
        .format("%Y-%m-%d")
        .to_string()
}

/// A stored meeting on 2035-03-31 from `start` to `end` (whole hours)
pub fn sample_meeting(id: i64, topic: &str, start: u32, end: u32) -> Meeting {
    Meeting {
        id: Some(id),
        topic: topic.to_string(),
        date: NaiveDate::from_ymd_opt(2035, 3, 31).unwrap(),
        start_time: NaiveTime::from_hms_opt(start, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end, 0, 0).unwrap(),
        participants: vec!["Ann".to_string(), "Bob".to_string()],
    }
}
