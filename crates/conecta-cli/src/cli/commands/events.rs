//! Event commands, including the undo-window delete.

use std::time::Duration;

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use conecta_app::{
    AppRuntime, GRACE_PERIOD, Notice, Notifier, Route, Router, SessionState, UiEvent,
};
use conecta_core::config::Config;
use conecta_core::duration::{UNIT_HOURS, format_duration, parse_duration_to_minutes};
use conecta_core::models::{
    Event, EventDraft, EventFormat, EventPatch, JoinOutcome, JoinRequest, Publicity,
};
use tokio::io::AsyncBufReadExt;

#[derive(Debug, clap::Subcommand)]
pub enum EventsCommand {
    /// List events open for joining
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 0)]
        offset: u32,
    },
    /// List events you created
    Mine,
    /// List events you joined
    Joined,
    /// Create an event
    Create(CreateArgs),
    /// Edit an event you created
    Edit(EditArgs),
    /// Join an event
    Join(JoinArgs),
    /// Delete an event you created, with an undo window before the remote
    /// delete goes out
    Delete {
        event_id: String,
        /// Skip the undo window and delete immediately
        #[arg(long)]
        now: bool,
    },
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum PublicityArg {
    Public,
    Private,
}

impl From<PublicityArg> for Publicity {
    fn from(arg: PublicityArg) -> Self {
        match arg {
            PublicityArg::Public => Publicity::Public,
            PublicityArg::Private => Publicity::Private,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum FormatArg {
    Presencial,
    Online,
}

impl From<FormatArg> for EventFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Presencial => EventFormat::InPerson,
            FormatArg::Online => EventFormat::Online,
        }
    }
}

#[derive(Debug, clap::Args)]
pub struct CreateArgs {
    /// Event name
    #[arg(long)]
    pub name: String,
    /// Description
    #[arg(long, default_value = "")]
    pub details: String,
    /// Date and time (RFC 3339, e.g. 2026-09-01T18:30:00Z)
    #[arg(long)]
    pub date: DateTime<Utc>,
    /// Duration value, in --duration-unit units
    #[arg(long)]
    pub duration: u32,
    #[arg(long, default_value = UNIT_HOURS)]
    pub duration_unit: String,
    #[arg(long, value_enum, default_value_t = FormatArg::Presencial)]
    pub format: FormatArg,
    /// Venue, or meeting link for online events
    #[arg(long)]
    pub local: String,
    #[arg(long, value_enum, default_value_t = PublicityArg::Public)]
    pub publicity: PublicityArg,
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,
    /// 0 means unlimited
    #[arg(long, default_value_t = 0)]
    pub max_participants: u32,
}

#[derive(Debug, clap::Args)]
pub struct EditArgs {
    pub event_id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub details: Option<String>,
    #[arg(long)]
    pub date: Option<DateTime<Utc>>,
    /// Duration value, in --duration-unit units
    #[arg(long)]
    pub duration: Option<u32>,
    #[arg(long, default_value = UNIT_HOURS)]
    pub duration_unit: String,
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    #[arg(long)]
    pub local: Option<String>,
    #[arg(long, value_enum)]
    pub publicity: Option<PublicityArg>,
    #[arg(long)]
    pub price: Option<f64>,
    #[arg(long)]
    pub max_participants: Option<u32>,
}

#[derive(Debug, clap::Args)]
pub struct JoinArgs {
    pub event_id: String,
    #[arg(long)]
    pub full_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub phone: String,
    /// Access code, required for private events
    #[arg(long)]
    pub access_code: Option<String>,
    /// Confirm you agree to the event's terms
    #[arg(long)]
    pub agree_terms: bool,
}

pub async fn run(config: &Config, command: EventsCommand) -> Result<()> {
    match command {
        EventsCommand::List { limit, offset } => {
            let (api, user_id) = super::authenticated(config).await?;
            let events = api
                .list_events(limit, offset, &user_id)
                .await
                .context("Erro ao buscar eventos")?;
            print_events(&events);
            Ok(())
        }
        EventsCommand::Mine => {
            let (api, user_id) = super::authenticated(config).await?;
            let events = api
                .created_events(&user_id)
                .await
                .context("Erro ao buscar eventos")?;
            print_events(&events);
            Ok(())
        }
        EventsCommand::Joined => {
            let (api, user_id) = super::authenticated(config).await?;
            let events = api
                .joined_events(&user_id)
                .await
                .context("Erro ao buscar eventos")?;
            print_events(&events);
            Ok(())
        }
        EventsCommand::Create(args) => create(config, args).await,
        EventsCommand::Edit(args) => edit(config, args).await,
        EventsCommand::Join(args) => join(config, args).await,
        EventsCommand::Delete { event_id, now } => delete(config, event_id, now).await,
    }
}

async fn create(config: &Config, args: CreateArgs) -> Result<()> {
    let (api, user_id) = super::authenticated(config).await?;
    let draft = EventDraft {
        user_id,
        event_name: args.name,
        event_details: args.details,
        event_date: args.date,
        duration: parse_duration_to_minutes(args.duration, &args.duration_unit),
        duration_unit: args.duration_unit,
        event_format: args.format.into(),
        event_local: args.local,
        event_publicity: args.publicity.into(),
        price: args.price,
        max_participants: args.max_participants,
    };
    api.create_event(&draft)
        .await
        .context("Erro no envio do formulário")?;
    println!("Evento criado com sucesso!");
    Ok(())
}

async fn edit(config: &Config, args: EditArgs) -> Result<()> {
    let (api, _user_id) = super::authenticated(config).await?;
    let patch = EventPatch {
        event_name: args.name,
        event_details: args.details,
        event_date: args.date,
        duration: args
            .duration
            .map(|value| parse_duration_to_minutes(value, &args.duration_unit)),
        event_format: args.format.map(Into::into),
        event_local: args.local,
        event_publicity: args.publicity.map(Into::into),
        price: args.price,
        max_participants: args.max_participants,
    };
    if patch_is_empty(&patch) {
        bail!("Nada para atualizar; informe ao menos um campo.");
    }
    api.update_event(&args.event_id, &patch)
        .await
        .context("Erro ao editar evento")?;
    println!("Evento editado com sucesso!");
    Ok(())
}

fn patch_is_empty(patch: &EventPatch) -> bool {
    patch.event_name.is_none()
        && patch.event_details.is_none()
        && patch.event_date.is_none()
        && patch.duration.is_none()
        && patch.event_format.is_none()
        && patch.event_local.is_none()
        && patch.event_publicity.is_none()
        && patch.price.is_none()
        && patch.max_participants.is_none()
}

async fn join(config: &Config, args: JoinArgs) -> Result<()> {
    if !args.agree_terms {
        bail!("Por favor, aceite os termos do evento com --agree-terms.");
    }

    let (api, user_id) = super::authenticated(config).await?;
    let request = JoinRequest {
        user_id,
        full_name: args.full_name,
        email: args.email,
        phone_number: args.phone,
        agreed_to_terms: true,
        access_code: args.access_code,
    };
    match api
        .join_event(&args.event_id, &request)
        .await
        .context("Erro ao realizar inscrição")?
    {
        JoinOutcome::Joined => println!("Inscrição realizada com sucesso!"),
        JoinOutcome::AlreadyJoined => println!("Você já está inscrito neste evento."),
    }
    Ok(())
}

/// Deletes through the app shell: the event leaves the list immediately,
/// the remote delete only goes out after the grace period, and typing
/// `u` + Enter before then restores it without any request being sent.
async fn delete(config: &Config, event_id: String, now: bool) -> Result<()> {
    let (api, user_id) = super::authenticated(config).await?;

    if now {
        api.delete_event(&event_id, &user_id)
            .await
            .context("Erro ao deletar evento")?;
        println!("Evento deletado.");
        return Ok(());
    }

    let grace = grace_period();
    let mut runtime = AppRuntime::with_grace(
        api,
        Box::new(CliRouter),
        Box::new(CliNotifier),
        Route::MyEvents,
        grace,
    );
    runtime.dispatch(UiEvent::SessionResolved {
        state: SessionState::Authenticated { user_id },
    });
    tokio::time::timeout(
        Duration::from_secs(30),
        runtime.run_until(|event| matches!(event, UiEvent::EventsLoaded { .. })),
    )
    .await
    .context("Tempo esgotado ao carregar seus eventos")?;

    if !runtime.state.events.iter().any(|e| e.id == event_id) {
        bail!("Evento {event_id} não encontrado entre os seus eventos");
    }

    runtime.dispatch(UiEvent::DeleteRequested {
        event_id: event_id.clone(),
    });

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            event = runtime.next_event() => {
                let Some(event) = event else { break };
                let committed = matches!(event, UiEvent::DeleteCommitted { .. });
                runtime.dispatch(event);
                if committed {
                    println!("Exclusão confirmada.");
                    break;
                }
            }
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(input)) if input.trim().eq_ignore_ascii_case("u") => {
                    runtime.dispatch(UiEvent::UndoRequested {
                        event_id: event_id.clone(),
                    });
                    println!("Exclusão desfeita; o evento voltou para a lista.");
                    break;
                }
                Ok(Some(_)) => {}
                Ok(None) | Err(_) => stdin_open = false,
            },
        }
    }
    Ok(())
}

/// The undo window. Overridable for tests; otherwise the product constant.
fn grace_period() -> Duration {
    std::env::var("CONECTA_GRACE_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(GRACE_PERIOD)
}

fn print_events(events: &[Event]) {
    if events.is_empty() {
        println!("Nenhum evento encontrado.");
        return;
    }
    for event in events {
        println!(
            "{}  {}  {}  {}  {}",
            event.id,
            event.event_name,
            event.event_date.format("%d/%m/%Y %H:%M"),
            event.event_local,
            format_duration(event.duration),
        );
    }
}

struct CliRouter;

impl Router for CliRouter {
    fn replace(&self, route: &Route) {
        tracing::debug!("router replace -> {}", route.path());
    }
}

struct CliNotifier;

impl Notifier for CliNotifier {
    fn notify(&self, notice: Notice) {
        println!("{}", notice.message);
        if let Some(body) = &notice.body {
            println!("  {body}");
        }
        if let Some(action) = &notice.action {
            println!(
                "  [{}] digite \"u\" e Enter dentro de {:.1}s",
                action.label,
                notice.duration.as_secs_f64(),
            );
        }
    }
}
