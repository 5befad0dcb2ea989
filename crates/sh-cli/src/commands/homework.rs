//! Homework tracker commands.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};
use colored::Colorize;
use sh_core::config::Config;
use sh_core::homework::model::{NewHomework, Priority};
use sh_core::store::HomeworkFilter;

use crate::commands::{open_context, swallow_write_failure, AppContext};
use crate::output;

#[derive(Subcommand)]
pub enum HomeworkCommands {
    /// List assignments (pending and completed)
    List(ListArgs),

    /// Add an assignment
    Add(AddArgs),

    /// Mark an assignment completed
    Done { id: String },

    /// Mark an assignment pending again
    Undo { id: String },

    /// Delete an assignment
    Rm { id: String },
}

#[derive(Args)]
pub struct ListArgs {
    /// Show only completed assignments
    #[arg(long)]
    pub done: bool,

    /// Show only pending assignments
    #[arg(long)]
    pub pending: bool,
}

#[derive(Args)]
pub struct AddArgs {
    /// Subject ("Mathematics")
    pub subject: String,

    /// What to do ("Finish chapter 5 exercises")
    pub task: String,

    /// Due date, YYYY-MM-DD
    #[arg(long)]
    pub due: NaiveDate,

    /// Priority (low, medium, high)
    #[arg(long, default_value = "medium")]
    pub priority: String,
}

pub async fn execute(cmd: HomeworkCommands, config: &Config) -> Result<()> {
    let Some(ctx) = open_context(config).await? else {
        return Ok(());
    };
    let today = Local::now().date_naive();

    match cmd {
        HomeworkCommands::List(args) => {
            let filter = if args.done {
                HomeworkFilter { completed: Some(true), limit: None }
            } else if args.pending {
                HomeworkFilter { completed: Some(false), limit: None }
            } else {
                HomeworkFilter::default()
            };
            let rows = ctx.store.list_homework(filter).await?;
            output::print_homework(&rows, today);
        }

        HomeworkCommands::Add(args) => {
            let new = NewHomework {
                subject: args.subject.clone(),
                task: args.task,
                due_date: args.due,
                priority: Priority::from_str(&args.priority),
            };
            match ctx.store.add_homework(new).await {
                Ok(()) => {
                    println!("{} Added homework for {}", "✓".green().bold(), args.subject.cyan());
                    reload(&ctx, today).await;
                }
                Err(e) => swallow_write_failure(e),
            }
        }

        HomeworkCommands::Done { id } => set_completed(&ctx, &id, true, today).await,
        HomeworkCommands::Undo { id } => set_completed(&ctx, &id, false, today).await,

        HomeworkCommands::Rm { id } => match ctx.store.delete_homework(&id).await {
            Ok(()) => {
                println!("{} Deleted {}", "✓".green().bold(), id.dimmed());
                reload(&ctx, today).await;
            }
            Err(e) => swallow_write_failure(e),
        },
    }

    Ok(())
}

async fn set_completed(ctx: &AppContext, id: &str, completed: bool, today: NaiveDate) {
    match ctx.store.set_homework_completed(id, completed).await {
        Ok(()) => {
            let verb = if completed { "Completed" } else { "Reopened" };
            println!("{} {} {}", "✓".green().bold(), verb, id.dimmed());
            reload(ctx, today).await;
        }
        Err(e) => swallow_write_failure(e),
    }
}

// Read-after-write: every successful mutation re-fetches the collection so
// the printed view carries server-assigned fields.
async fn reload(ctx: &AppContext, today: NaiveDate) {
    match ctx.store.list_homework(HomeworkFilter::default()).await {
        Ok(rows) => {
            println!();
            output::print_homework(&rows, today);
        }
        Err(e) => swallow_write_failure(e),
    }
}
