//! Account commands: login, signup, logout, whoami.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Password};
use sh_core::config::Config;
use sh_core::session::{
    sign_in_error_message, Gate, SignUpOutcome, CONFIRMATION_PENDING_MSG,
};
use sh_remote::{AuthClient, RemoteError, RestClient};

fn auth_client(config: &Config) -> Option<AuthClient> {
    let (url, key) = config.credentials()?;
    Some(AuthClient::new(RestClient::new(url, key)))
}

fn demo_notice() {
    println!(
        "{}",
        "No remote store configured — accounts only exist in live mode. Demo mode needs no login."
            .yellow()
    );
}

fn prompt_credentials() -> Result<(String, String)> {
    let email: String = Input::new().with_prompt("Email").interact_text()?;
    let password = Password::new().with_prompt("Password").interact()?;
    Ok((email, password))
}

pub async fn login(config: &Config) -> Result<()> {
    let Some(auth) = auth_client(config) else {
        demo_notice();
        return Ok(());
    };

    let mut gate = Gate::new();
    let mut events = auth.subscribe();

    let (email, password) = prompt_credentials()?;
    match auth.sign_in(&email, &password).await {
        Ok(_) => {
            // The sign-in notification flips the gate; no re-probe needed.
            if let Ok(event) = events.try_recv() {
                gate.apply(event);
            }
            let who = gate
                .session()
                .and_then(|s| s.email.clone())
                .unwrap_or(email);
            println!("{} Signed in as {}", "✓".green().bold(), who.cyan());
        }
        Err(RemoteError::Auth(msg)) => {
            println!("{}", sign_in_error_message(&msg).red());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

pub async fn signup(config: &Config) -> Result<()> {
    let Some(auth) = auth_client(config) else {
        demo_notice();
        return Ok(());
    };

    let (email, password) = prompt_credentials()?;
    match auth.sign_up(&email, &password).await {
        Ok(SignUpOutcome::SignedIn(session)) => {
            println!(
                "{} Account created; signed in as {}",
                "✓".green().bold(),
                session.email.unwrap_or(email).cyan()
            );
        }
        Ok(SignUpOutcome::ConfirmationPending) => {
            println!("{}", CONFIRMATION_PENDING_MSG.green());
            println!("Then run {}.", "schoolhelper login".cyan());
        }
        Err(RemoteError::Auth(msg)) => {
            println!("{}", msg.red());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

pub async fn logout(config: &Config) -> Result<()> {
    let Some(auth) = auth_client(config) else {
        demo_notice();
        return Ok(());
    };

    auth.sign_out().await?;
    println!("{} Signed out.", "✓".green().bold());
    Ok(())
}

pub async fn whoami(config: &Config) -> Result<()> {
    let Some(auth) = auth_client(config) else {
        demo_notice();
        return Ok(());
    };

    match auth.current_session().await {
        Some(session) => {
            let who = session.email.unwrap_or(session.user_id);
            println!("{}", who.cyan());
        }
        None => println!("Not signed in."),
    }

    Ok(())
}
