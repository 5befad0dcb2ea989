//! Weekly schedule commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use sh_core::config::Config;
use sh_core::schedule::model::{Color, NewClassSession, Weekday};
use sh_core::schedule;

use crate::commands::{open_context, swallow_write_failure, AppContext};
use crate::output;

#[derive(Args)]
pub struct ScheduleArgs {
    /// Show a single day ("monday".."friday")
    #[arg(long)]
    pub day: Option<String>,

    #[command(subcommand)]
    pub command: Option<ScheduleCommands>,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Add a class
    Add(AddClassArgs),

    /// Remove a class
    Rm { id: String },
}

#[derive(Args)]
pub struct AddClassArgs {
    /// Day of the week ("monday".."friday")
    pub day: String,

    /// Class name
    pub name: String,

    /// Teacher
    #[arg(long)]
    pub teacher: String,

    /// Room
    #[arg(long)]
    pub room: String,

    /// Time slot, free text ("8:00 - 9:30")
    #[arg(long)]
    pub time: String,

    /// Display color (blue, green, purple, yellow, red, orange, pink)
    #[arg(long, default_value = "blue")]
    pub color: String,
}

pub async fn execute(args: ScheduleArgs, config: &Config) -> Result<()> {
    let Some(ctx) = open_context(config).await? else {
        return Ok(());
    };

    match args.command {
        None => {
            let day = match args.day.as_deref() {
                Some(raw) => Some(parse_day(raw)?),
                None => None,
            };
            let sessions = ctx.store.list_schedule(day).await?;
            output::print_schedule(&schedule::group_by_day(&sessions));
        }

        Some(ScheduleCommands::Add(args)) => {
            let new = NewClassSession {
                day: parse_day(&args.day)?,
                name: args.name.clone(),
                teacher: args.teacher,
                room: args.room,
                time: args.time,
                color: parse_color(&args.color)?,
            };
            match ctx.store.add_class(new).await {
                Ok(()) => {
                    println!("{} Added class {}", "✓".green().bold(), args.name.cyan());
                    reload(&ctx).await;
                }
                Err(e) => swallow_write_failure(e),
            }
        }

        Some(ScheduleCommands::Rm { id }) => match ctx.store.delete_class(&id).await {
            Ok(()) => {
                println!("{} Removed class {}", "✓".green().bold(), id.dimmed());
                reload(&ctx).await;
            }
            Err(e) => swallow_write_failure(e),
        },
    }

    Ok(())
}

fn parse_day(raw: &str) -> Result<Weekday> {
    Weekday::from_str(raw)
        .ok_or_else(|| anyhow::anyhow!("Invalid day '{}'. Use monday..friday.", raw))
}

fn parse_color(raw: &str) -> Result<Color> {
    Color::from_str(raw).ok_or_else(|| {
        let palette: Vec<&str> = Color::ALL.iter().map(|c| c.as_str()).collect();
        anyhow::anyhow!("Invalid color '{}'. Choose one of: {}", raw, palette.join(", "))
    })
}

async fn reload(ctx: &AppContext) {
    match ctx.store.list_schedule(None).await {
        Ok(sessions) => {
            println!();
            output::print_schedule(&schedule::group_by_day(&sessions));
        }
        Err(e) => swallow_write_failure(e),
    }
}
