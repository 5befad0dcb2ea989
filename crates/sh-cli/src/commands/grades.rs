//! Grade sheet commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use sh_core::config::Config;
use sh_core::grades::model::NewGrade;

use crate::commands::{open_context, swallow_write_failure, AppContext};
use crate::output;

#[derive(Args)]
pub struct GradesArgs {
    #[command(subcommand)]
    pub command: Option<GradesCommands>,
}

#[derive(Subcommand)]
pub enum GradesCommands {
    /// Add a course
    AddCourse { name: String },

    /// Delete a course and its grades
    RmCourse { id: String },

    /// Add a grade entry to a course
    Add(AddGradeArgs),

    /// Delete a grade entry
    Rm { id: String },
}

#[derive(Args)]
pub struct AddGradeArgs {
    /// Course id
    pub course_id: String,

    /// Entry name ("Midterm")
    pub name: String,

    /// Score, 0-100
    pub score: f64,

    /// Weight, 0-100
    pub weight: f64,
}

pub async fn execute(args: GradesArgs, config: &Config) -> Result<()> {
    let Some(ctx) = open_context(config).await? else {
        return Ok(());
    };

    match args.command {
        // Bare `grades` renders the sheet.
        None => {
            let courses = ctx.store.list_courses_with_grades().await?;
            output::print_grade_sheet(&courses);
        }

        Some(GradesCommands::AddCourse { name }) => {
            match ctx.store.add_course(&name).await {
                Ok(()) => {
                    println!("{} Added course {}", "✓".green().bold(), name.cyan());
                    reload(&ctx).await;
                }
                Err(e) => swallow_write_failure(e),
            }
        }

        Some(GradesCommands::RmCourse { id }) => {
            match ctx.store.delete_course(&id).await {
                Ok(()) => {
                    println!("{} Deleted course {}", "✓".green().bold(), id.dimmed());
                    reload(&ctx).await;
                }
                Err(e) => swallow_write_failure(e),
            }
        }

        Some(GradesCommands::Add(args)) => {
            let new = NewGrade {
                course_id: args.course_id,
                name: args.name.clone(),
                score: args.score,
                weight: args.weight,
            };
            match ctx.store.add_grade(new).await {
                Ok(()) => {
                    println!("{} Added grade {}", "✓".green().bold(), args.name.cyan());
                    reload(&ctx).await;
                }
                Err(e) => swallow_write_failure(e),
            }
        }

        Some(GradesCommands::Rm { id }) => {
            match ctx.store.delete_grade(&id).await {
                Ok(()) => {
                    println!("{} Deleted grade {}", "✓".green().bold(), id.dimmed());
                    reload(&ctx).await;
                }
                Err(e) => swallow_write_failure(e),
            }
        }
    }

    Ok(())
}

async fn reload(ctx: &AppContext) {
    match ctx.store.list_courses_with_grades().await {
        Ok(courses) => {
            println!();
            output::print_grade_sheet(&courses);
        }
        Err(e) => swallow_write_failure(e),
    }
}
