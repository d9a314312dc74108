use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use project_invites::config::Config;
use project_invites::dispatch::{self, DispatchError, Dispatcher};
use project_invites::invites::{Invite, InviteSlice, ProjectId, Role};
use project_invites::logging::init_tracing;
use project_invites::service::HttpInviteService;
use project_invites::signals::{spawn_invite_reactor, SessionSignal, SignalBus};

#[derive(Debug, Parser)]
#[command(name = "project-invites", version, about = "Manage pending project invites")]
struct Cli {
    /// Path to a config file (default: the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Project whose invites to manage
    #[arg(long, short, global = true)]
    project: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List pending invites
    List,
    /// Invite someone to the project
    Add {
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "member")]
        role: Role,
    },
    /// Change the role of an invite
    Update {
        invite_id: String,
        #[arg(long)]
        role: Role,
    },
    /// Withdraw an invite
    Remove { invite_id: String },
}

impl Cli {
    /// Clap cannot require a global argument, so `--project` is checked here.
    fn project_id(&self) -> Result<ProjectId, clap::Error> {
        match self.project.as_deref().map(str::trim) {
            Some(project) if !project.is_empty() => Ok(ProjectId::from(project)),
            _ => Err(Cli::command().error(
                ErrorKind::MissingRequiredArgument,
                "the following required argument was not provided: --project <PROJECT>",
            )),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let project = cli.project_id().unwrap_or_else(|err| err.exit());

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    init_tracing(&config.logging.level);

    let service = HttpInviteService::new(&config.service).context("creating invite client")?;
    let slice = InviteSlice::new(Arc::new(service));

    let bus = SignalBus::new();
    let reactor = spawn_invite_reactor(slice.clone(), &bus);
    let (dispatcher, server) = dispatch::channel();
    let server_task = tokio::spawn(server.run(slice.clone()));

    let outcome = run_command(&dispatcher, project, cli.command).await;

    let code = match outcome {
        Ok(()) => {
            print_invites(&slice.invites());
            ExitCode::SUCCESS
        }
        Err(DispatchError::Command(err)) => {
            let message = slice
                .error_message()
                .unwrap_or_else(|| err.message().to_string());
            eprintln!("error: {}", message);
            tracing::debug!(error = %err.service_error(), "command failed");
            ExitCode::FAILURE
        }
        Err(err) => return Err(err.into()),
    };

    // End of session: the slice resets and the background tasks wind down.
    bus.publish(SessionSignal::LoggedOut);
    drop(bus);
    drop(dispatcher);
    let _ = reactor.await;
    let _ = server_task.await;

    Ok(code)
}

async fn run_command(
    dispatcher: &Dispatcher,
    project: ProjectId,
    command: Command,
) -> Result<(), DispatchError> {
    dispatcher.set_current_project(project.clone()).await?;

    match command {
        Command::List => Ok(()),
        Command::Add { email, role } => {
            dispatcher.add_project_invite(project, email, role).await
        }
        Command::Update { invite_id, role } => {
            dispatcher
                .update_project_invite(project, invite_id.into(), role)
                .await
        }
        Command::Remove { invite_id } => {
            dispatcher
                .remove_project_invite(project, invite_id.into())
                .await
        }
    }
}

fn print_invites(invites: &[Invite]) {
    if invites.is_empty() {
        println!("No pending invites.");
        return;
    }

    let id_width = invites.iter().map(|i| i.id.as_str().len()).max().unwrap_or(2).max(2);
    let email_width = invites.iter().map(|i| i.email.len()).max().unwrap_or(5).max(5);
    println!("{:<id_width$}  {:<email_width$}  ROLE", "ID", "EMAIL");
    for invite in invites {
        println!(
            "{:<id_width$}  {:<email_width$}  {}",
            invite.id.as_str(),
            invite.email,
            invite.role
        );
    }
}
