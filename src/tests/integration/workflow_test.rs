use std::sync::Arc;
use std::time::Duration;

use crate::cli::{execute, Commands, FieldArgs};
use crate::client::MeetingsClient;
use crate::controller::MeetingController;
use crate::i18n::Locale;
use crate::models::form::DraftField;
use crate::tests::common::fake_api::{spawn_fake_api, FakeApi};
use crate::tests::common::fixtures::{sample_meeting, tomorrow};

/// End-to-end workflow tests over real HTTP
#[cfg(test)]
mod workflow_tests {
    use super::*;

    // Start a fake API and a controller talking to it
    async fn setup_test_environment(api: &Arc<FakeApi>) -> MeetingController<MeetingsClient> {
        let base_url = spawn_fake_api(api.clone()).await;
        let client = MeetingsClient::new(&base_url, Duration::from_secs(5)).unwrap();
        MeetingController::new(client, Locale::English)
    }

    fn create_args(topic: &str, date: &str) -> FieldArgs {
        FieldArgs {
            topic: Some(topic.to_string()),
            date: Some(date.to_string()),
            start_time: Some("09:00".to_string()),
            end_time: Some("09:30".to_string()),
            participants: Some("Ann, Bob".to_string()),
            interactive: false,
        }
    }

    #[tokio::test]
    async fn test_create_edit_delete_workflow() {
        let api = FakeApi::with_meetings(vec![]);
        let mut controller = setup_test_environment(&api).await;

        assert!(controller.load_meetings().await);
        assert!(controller.meetings().is_empty());

        // Create
        controller.set_field(DraftField::Topic, "Standup");
        controller.set_field(DraftField::Date, &tomorrow());
        controller.set_field(DraftField::StartTime, "09:00");
        controller.set_field(DraftField::EndTime, "09:30");
        controller.set_field(DraftField::Participants, "Ann, Bob");
        assert!(controller.submit().await);

        let created = controller.meetings()[0].clone();
        assert_eq!(created.id, Some(1));
        assert_eq!(created.participants, vec!["Ann", "Bob"]);

        // Edit
        controller.begin_edit(&created);
        controller.set_field(DraftField::EndTime, "10:00");
        assert!(controller.submit().await);
        assert_eq!(controller.meetings().len(), 1);
        assert_eq!(controller.find(1).unwrap().end_time.format("%H:%M").to_string(), "10:00");

        // Delete
        assert!(controller.delete(1).await);
        assert!(controller.meetings().is_empty());

        let mutations: Vec<(String, String)> = api
            .mutations()
            .into_iter()
            .map(|request| (request.method.to_string(), request.path))
            .collect();
        assert_eq!(
            mutations,
            vec![
                ("POST".to_string(), "/api/v1/meetings".to_string()),
                ("PUT".to_string(), "/api/v1/meetings/1".to_string()),
                ("DELETE".to_string(), "/api/v1/meetings/1".to_string()),
            ]
        );

        // Every successful mutation is followed by a reload
        let methods: Vec<&str> = api.requests().iter().map(|r| r.method).collect();
        assert_eq!(methods, vec!["GET", "POST", "GET", "PUT", "GET", "DELETE", "GET"]);
    }

    #[tokio::test]
    async fn test_server_failure_preserves_state() {
        let api = FakeApi::with_meetings(vec![sample_meeting(1, "Standup", 9, 10)]);
        let mut controller = setup_test_environment(&api).await;
        assert!(controller.load_meetings().await);

        api.fail_writes(true);
        assert!(!controller.delete(1).await);
        assert_eq!(controller.meetings().len(), 1);

        controller.set_field(DraftField::Topic, "Retro");
        controller.set_field(DraftField::Date, &tomorrow());
        controller.set_field(DraftField::StartTime, "15:00");
        controller.set_field(DraftField::EndTime, "16:00");
        assert!(!controller.submit().await);
        assert_eq!(controller.draft().topic, "Retro");
        assert_eq!(controller.error(), Some("Failed to save meeting"));

        // Retry once the server recovers
        api.fail_writes(false);
        assert!(controller.submit().await);
        assert_eq!(controller.meetings().len(), 2);
        assert_eq!(controller.error(), None);
    }

    #[tokio::test]
    async fn test_garbled_reload_keeps_previous_collection() {
        let api = FakeApi::with_meetings(vec![
            sample_meeting(1, "Standup", 9, 10),
            sample_meeting(2, "Retro", 15, 16),
        ]);
        let mut controller = setup_test_environment(&api).await;
        assert!(controller.load_meetings().await);

        api.garble_reads(true);
        assert!(!controller.load_meetings().await);
        assert_eq!(controller.meetings().len(), 2);
        assert_eq!(controller.find(2).unwrap().topic, "Retro");
        assert_eq!(controller.error(), Some("Failed to fetch meetings"));
    }

    #[tokio::test]
    async fn test_invalid_draft_never_reaches_server() {
        let api = FakeApi::with_meetings(vec![]);
        let mut controller = setup_test_environment(&api).await;

        let mut args = create_args("Standup", &tomorrow());
        args.end_time = Some("09:00".to_string());
        let ok = execute(&mut controller, Commands::Create { fields: args }).await.unwrap();

        assert!(!ok);
        assert!(api.mutations().is_empty());
        assert_eq!(controller.error(), Some("End time must be after start time"));
    }

    #[tokio::test]
    async fn test_cli_create_and_edit() {
        let api = FakeApi::with_meetings(vec![sample_meeting(3, "Retro", 15, 16)]);
        let mut controller = setup_test_environment(&api).await;

        let ok = execute(
            &mut controller,
            Commands::Create {
                fields: create_args("Standup", &tomorrow()),
            },
        )
        .await
        .unwrap();
        assert!(ok);
        assert_eq!(api.meetings().len(), 2);
        assert_eq!(api.meetings()[1].id, Some(4));

        api.clear_requests();
        let ok = execute(
            &mut controller,
            Commands::Edit {
                id: 3,
                fields: FieldArgs {
                    topic: Some("Retrospective".to_string()),
                    ..Default::default()
                },
            },
        )
        .await
        .unwrap();
        assert!(ok);

        let mutations = api.mutations();
        assert_eq!(mutations.len(), 1);
        assert_eq!(mutations[0].method, "PUT");
        assert_eq!(mutations[0].path, "/api/v1/meetings/3");
        assert_eq!(api.meetings()[0].topic, "Retrospective");
    }

    #[tokio::test]
    async fn test_cli_edit_unknown_meeting() {
        let api = FakeApi::with_meetings(vec![]);
        let mut controller = setup_test_environment(&api).await;

        let result = execute(
            &mut controller,
            Commands::Edit {
                id: 8,
                fields: FieldArgs::default(),
            },
        )
        .await;
        assert!(result.is_err());
        assert!(api.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_cli_list_reports_unreachable_collection() {
        let api = FakeApi::with_meetings(vec![]);
        api.fail_reads(true);
        let mut controller = setup_test_environment(&api).await;

        let ok = execute(&mut controller, Commands::List).await.unwrap();
        assert!(!ok);
        assert_eq!(controller.error(), Some("Failed to fetch meetings"));
    }
}
