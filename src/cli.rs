use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use inquire::Text;
use tracing::info;

use crate::client::{MeetingsApi, MeetingsClient};
use crate::config::Config;
use crate::controller::{MeetingController, NoticeKind};
use crate::i18n::Locale;
use crate::models::form::{DraftField, MeetingDraft};
use crate::view::{render_form, render_notice, render_table};

#[derive(Parser, Debug)]
#[command(name = "meeting-organizer", version, about = "Create, list, edit and delete meetings")]
pub struct Cli {
    /// Base URL of the meetings API, overrides MEETINGS_API_URL
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Language for messages (en, tr), overrides MEETINGS_LOCALE
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Show all meetings
    List,
    /// Create a new meeting
    Create {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change an existing meeting
    Edit {
        id: i64,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Delete a meeting
    Delete { id: i64 },
}

#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct FieldArgs {
    #[arg(long)]
    pub topic: Option<String>,

    /// Date as YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// Start time as HH:MM
    #[arg(long = "start")]
    pub start_time: Option<String>,

    /// End time as HH:MM
    #[arg(long = "end")]
    pub end_time: Option<String>,

    /// Comma separated names
    #[arg(long)]
    pub participants: Option<String>,

    /// Prompt for every field, starting from the current values
    #[arg(short, long)]
    pub interactive: bool,
}

impl FieldArgs {
    fn values(&self) -> [(DraftField, Option<&str>); 5] {
        [
            (DraftField::Topic, self.topic.as_deref()),
            (DraftField::Date, self.date.as_deref()),
            (DraftField::StartTime, self.start_time.as_deref()),
            (DraftField::EndTime, self.end_time.as_deref()),
            (DraftField::Participants, self.participants.as_deref()),
        ]
    }

    /// Write the given flags into the controller's draft.
    pub fn apply<A: MeetingsApi>(&self, controller: &mut MeetingController<A>) {
        for (field, value) in self.values() {
            if let Some(value) = value {
                controller.set_field(field, value);
            }
        }
    }
}

pub async fn run(cli: Cli) -> Result<bool> {
    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    info!("Using meetings API at {} ({})", config.api_url, config.locale);
    let client = MeetingsClient::from_config(&config).context("failed to build HTTP client")?;
    let mut controller = MeetingController::new(client, config.locale);

    execute(&mut controller, cli.command).await
}

/// Run one command against the controller and print its outcome.
///
/// Returns whether the action succeeded.
pub async fn execute<A: MeetingsApi>(
    controller: &mut MeetingController<A>,
    command: Commands,
) -> Result<bool> {
    // Initial load, as when the view is first shown
    let loaded = controller.load_meetings().await;

    let ok = match command {
        Commands::List => loaded,
        Commands::Create { fields } => {
            fill_form(controller, &fields)?;
            controller.submit().await
        }
        Commands::Edit { id, fields } => {
            if !loaded {
                print_notices(controller);
                return Ok(false);
            }
            let Some(meeting) = controller.find(id).cloned() else {
                bail!("meeting {} not found", id);
            };
            controller.begin_edit(&meeting);
            fill_form(controller, &fields)?;
            controller.submit().await
        }
        Commands::Delete { id } => controller.delete(id).await,
    };

    print_notices(controller);
    if ok {
        println!("{}", render_table(controller.meetings(), controller.messages()));
    } else if *controller.draft() != MeetingDraft::default() {
        println!(
            "{}",
            render_form(controller.draft(), controller.error(), controller.messages())
        );
    }

    Ok(ok)
}

fn fill_form<A: MeetingsApi>(controller: &mut MeetingController<A>, fields: &FieldArgs) -> Result<()> {
    fields.apply(controller);
    if !fields.interactive {
        return Ok(());
    }

    let messages = controller.messages();
    let title = if controller.is_editing() {
        messages.edit_title
    } else {
        messages.create_title
    };
    println!("{}", title);

    for field in DraftField::ALL {
        let current = controller.draft().get(field);
        let prompt = format!("{}:", messages.field_label(field));
        let value = Text::new(&prompt)
            .with_initial_value(&current)
            .prompt()
            .with_context(|| format!("failed to read {}", field))?;
        apply_answer(controller, field, &value);
    }

    Ok(())
}

// Only an edited answer is written back: "" shown for no participants
// would otherwise come back as one empty participant
fn apply_answer<A: MeetingsApi>(controller: &mut MeetingController<A>, field: DraftField, answer: &str) {
    if controller.draft().get(field) != answer {
        controller.set_field(field, answer);
    }
}

fn print_notices<A: MeetingsApi>(controller: &mut MeetingController<A>) {
    for notice in controller.drain_notices() {
        match notice.kind {
            NoticeKind::Success => println!("{}", render_notice(&notice)),
            NoticeKind::Error => eprintln!("{}", render_notice(&notice)),
        }
    }
}
