//! Pomodoro study timer.
//!
//! Drives the core state machine from a single one-second interval. The
//! interval is the only tick source and is dropped on every exit path, so
//! no orphaned ticks outlive the command.

use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sh_core::timer::{Timer, TimerMode};

#[derive(Args)]
pub struct TimerArgs {
    /// Start a work interval of N minutes (default 25)
    #[arg(long, conflicts_with = "break_minutes")]
    pub work: Option<u32>,

    /// Start a break of N minutes (5 is the normal cycle, 15 the long one)
    #[arg(long = "break")]
    pub break_minutes: Option<u32>,
}

pub async fn execute(args: TimerArgs) -> Result<()> {
    let mut timer = Timer::new();
    if let Some(minutes) = args.work {
        timer.select_preset(TimerMode::Work, minutes);
    }
    if let Some(minutes) = args.break_minutes {
        timer.select_preset(TimerMode::Break, minutes);
    }

    println!(
        "{} — {} on the clock. Press Ctrl-C to stop.",
        mode_colored(timer.mode),
        timer.display()
    );
    timer.toggle_running();

    let mut interval = tokio::time::interval(Duration::from_secs(1));
    // The first tick of a tokio interval fires immediately; consume it so
    // ticks land on whole seconds from now.
    interval.tick().await;
    render(&timer);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let before = timer.mode;
                timer.tick();
                render(&timer);
                if !timer.running {
                    println!();
                    println!(
                        "{} {} finished. Next up: {} ({}) — run 'schoolhelper timer' to start it.",
                        "✓".green().bold(),
                        before.label(),
                        mode_colored(timer.mode),
                        timer.display()
                    );
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                timer.reset();
                println!();
                println!("Timer stopped. {} re-armed at {}.", mode_colored(timer.mode), timer.display());
                break;
            }
        }
    }

    Ok(())
}

fn render(timer: &Timer) {
    print!("\r  {} {}  ", mode_colored(timer.mode), timer.display().bold());
    let _ = std::io::stdout().flush();
}

fn mode_colored(mode: TimerMode) -> colored::ColoredString {
    match mode {
        TimerMode::Work => mode.label().blue(),
        TimerMode::Break => mode.label().green(),
    }
}
