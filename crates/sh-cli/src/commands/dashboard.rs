//! Dashboard: upcoming homework, grade average, recent grades.

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use sh_core::config::Config;
use sh_core::store::HomeworkFilter;

use crate::commands::open_context;
use crate::output;

pub async fn execute(config: &Config) -> Result<()> {
    let Some(ctx) = open_context(config).await? else {
        return Ok(());
    };

    if let Some(session) = &ctx.session {
        if let Some(email) = &session.email {
            println!("{} {}", "Signed in as".dimmed(), email.dimmed());
            println!();
        }
    }

    let upcoming = ctx.store.list_homework(HomeworkFilter::upcoming(3)).await?;
    let courses = ctx.store.list_courses_with_grades().await?;

    output::print_upcoming(&upcoming, Local::now().date_naive());
    println!();
    output::print_overall(&courses);
    println!();
    output::print_recent_grades(&courses);
    println!();
    println!(
        "{}",
        "Start a study session with 'schoolhelper timer'.".dimmed()
    );

    Ok(())
}
