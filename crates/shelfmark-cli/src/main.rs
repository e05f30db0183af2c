use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;

use shelfmark_client::{ApiClient, ClientConfig, SessionEvent};
use tokio::sync::broadcast;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod cli_args;
mod cli_command;
mod modules;
#[cfg(test)]
mod tests;

use crate::cli_args::*;
use crate::cli_command::handle_command;
use crate::modules::auth::open_session_store;
use crate::modules::system::{
    ensure_secure_addr, handle_config_command, load_config, resolve_target, save_config,
    CommandContext,
};

pub(crate) const DEFAULT_CONTEXT: &str = "default";
pub(crate) const KEYRING_SERVICE: &str = "shelfmark";
pub(crate) const CREDENTIAL_STORE_ENV: &str = "SHELFMARK_CREDENTIAL_STORE";
pub(crate) const PASSWORD_ENV: &str = "SHELFMARK_PASSWORD";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let mut config = load_config()?;

    let command = match cli.command {
        Command::Config(args) => {
            handle_config_command(args, &mut config)?;
            save_config(&config)?;
            return Ok(());
        }
        command => command,
    };

    let target = resolve_target(cli.addr, cli.context, &config)?;
    ensure_secure_addr(&target.addr, cli.insecure)?;

    let client_config = ClientConfig::new(target.addr.clone())
        .with_timeout(Some(Duration::from_secs(cli.timeout)));
    let http = reqwest::Client::builder()
        .danger_accept_invalid_certs(cli.insecure)
        .timeout(Duration::from_secs(cli.timeout))
        .user_agent(client_config.user_agent.clone())
        .build()?;
    let store = open_session_store(&target.name)?;
    let api = ApiClient::with_http_client(http, client_config, store);
    let mut events = api.subscribe();

    let mut ctx = CommandContext {
        api: &api,
        context_name: target.name,
        addr: target.addr,
        config: &mut config,
    };
    let result = handle_command(command, &mut ctx).await;
    report_session_events(&mut events);
    result?;
    save_config(&config)?;

    Ok(())
}

fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn report_session_events(events: &mut broadcast::Receiver<SessionEvent>) {
    while let Ok(event) = events.try_recv() {
        match event {
            SessionEvent::Expired { redirect_to } => {
                debug!(redirect_to = %redirect_to, "session expired");
                eprintln!("Session expired. Run `shelfmark login` to sign in again.");
            }
            other => debug!(event = ?other, "session event"),
        }
    }
}

pub(crate) fn prompt_line(prompt: &str) -> anyhow::Result<String> {
    let mut input = String::new();
    print!("{prompt}");
    io::stdout().flush()?;
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Flag, then `SHELFMARK_PASSWORD`, then an interactive prompt.
pub(crate) fn resolve_password(arg: Option<String>) -> anyhow::Result<String> {
    if let Some(password) = arg.or_else(|| std::env::var(PASSWORD_ENV).ok()) {
        if password.is_empty() {
            anyhow::bail!("password is required");
        }
        return Ok(password);
    }
    prompt_password("Password: ")
}

pub(crate) fn prompt_password(prompt: &str) -> anyhow::Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let password = rpassword::read_password()?;
    if password.trim().is_empty() {
        anyhow::bail!("password is required");
    }
    Ok(password)
}
