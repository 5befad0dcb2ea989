//! CLI command definitions and handlers.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use sh_core::config::Config;
use sh_core::session::{Gate, GateState, Session};
use sh_core::store::demo::DemoStore;
use sh_core::store::StudentStore;
use sh_remote::{AuthClient, RemoteStore, RestClient};
use tracing::warn;

pub mod auth;
pub mod dashboard;
pub mod grades;
pub mod homework;
pub mod schedule;
pub mod timer;

/// SchoolHelper - homework, grades, schedule and a study timer
#[derive(Parser)]
#[command(name = "schoolhelper")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a config file (defaults to <config dir>/schoolhelper/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overview: upcoming homework, grade average, recent grades
    Dashboard,

    /// Track homework assignments
    #[command(subcommand)]
    Homework(homework::HomeworkCommands),

    /// Grade sheet and weighted averages
    Grades(grades::GradesArgs),

    /// Weekly class schedule
    Schedule(schedule::ScheduleArgs),

    /// Pomodoro study timer
    Timer(timer::TimerArgs),

    /// Sign in to the remote store
    Login,

    /// Create an account on the remote store
    Signup,

    /// Sign out and clear the saved session
    Logout,

    /// Show the signed-in account
    Whoami,
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match self.command {
            Commands::Dashboard => dashboard::execute(&config).await,
            Commands::Homework(cmd) => homework::execute(cmd, &config).await,
            Commands::Grades(args) => grades::execute(args, &config).await,
            Commands::Schedule(args) => schedule::execute(args, &config).await,
            Commands::Timer(args) => timer::execute(args).await,
            Commands::Login => auth::login(&config).await,
            Commands::Signup => auth::signup(&config).await,
            Commands::Logout => auth::logout(&config).await,
            Commands::Whoami => auth::whoami(&config).await,
        }
    }
}

/// An opened store plus the session it runs under (live mode only).
pub(crate) struct AppContext {
    pub store: Arc<dyn StudentStore>,
    pub session: Option<Session>,
}

/// Open the store for a data command.
///
/// Configured: run the session gate (loading line while the probe is in
/// flight, login hint when anonymous) and bind the remote store to the
/// session. Unconfigured: demo banner and the in-memory store.
pub(crate) async fn open_context(config: &Config) -> Result<Option<AppContext>> {
    let Some((url, key)) = config.credentials() else {
        println!(
            "{}",
            "⚠ Demo mode: data lives in memory only. Configure the remote store for persistence."
                .yellow()
        );
        println!();
        return Ok(Some(AppContext {
            store: Arc::new(DemoStore::new()),
            session: None,
        }));
    };

    eprintln!("{}", "Checking session...".dimmed());
    let auth = AuthClient::new(RestClient::new(url, key));
    let mut gate = Gate::new();
    gate.resolve_probe(auth.current_session().await);

    match gate.state() {
        GateState::Authenticated(session) => {
            let token = Some(session.access_token.clone());
            Ok(Some(AppContext {
                store: Arc::new(RemoteStore::new(RestClient::new(url, key), token)),
                session: Some(session.clone()),
            }))
        }
        _ => {
            println!("You're not signed in.");
            println!(
                "Run {} to sign in or {} to create an account.",
                "schoolhelper login".cyan(),
                "schoolhelper signup".cyan()
            );
            Ok(None)
        }
    }
}

/// Remote write failure policy: log and leave the view stale. No retry, no
/// error dialog; the next successful reload catches up.
pub(crate) fn swallow_write_failure(err: sh_core::CoreError) {
    warn!(error = %err, "remote write failed; view not refreshed");
}
