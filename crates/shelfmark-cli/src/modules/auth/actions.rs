use serde_json::json;
use shelfmark_core::RegisterRequest;
use tracing::info;

use crate::cli_args::*;
use crate::modules::system::http::print_json;
use crate::modules::system::{CliContext, CommandContext};
use crate::{prompt_line, resolve_password};

pub(crate) async fn handle_register(
    args: RegisterArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let password = resolve_password(args.password)?;
    let payload = RegisterRequest {
        username: args.username,
        email: args.email,
        password,
    };
    let user = ctx.api.register(&payload).await?;
    print_json(&user)?;
    Ok(())
}

pub(crate) async fn handle_login(
    args: LoginArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    let known_username = ctx
        .config
        .contexts
        .get(&ctx.context_name)
        .and_then(|context| context.username.clone());
    let username = match args.username.or(known_username) {
        Some(username) => username,
        None => prompt_line("Username: ")?,
    };
    if username.is_empty() {
        anyhow::bail!("username is required");
    }
    let password = resolve_password(args.password)?;

    ctx.api.login(&username, &password).await?;

    let entry = ctx
        .config
        .contexts
        .entry(ctx.context_name.clone())
        .or_insert_with(|| CliContext {
            addr: ctx.addr.clone(),
            username: None,
        });
    entry.addr = ctx.addr.clone();
    entry.username = Some(username.clone());
    ctx.config.current_context = Some(ctx.context_name.clone());
    info!(context = %ctx.context_name, "stored session tokens");
    println!("Logged in as {username} (context {})", ctx.context_name);
    Ok(())
}

pub(crate) fn handle_logout(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    ctx.api.logout()?;
    println!("Logged out of context {}", ctx.context_name);
    Ok(())
}

pub(crate) fn handle_status(ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    let username = ctx
        .config
        .contexts
        .get(&ctx.context_name)
        .and_then(|context| context.username.clone());
    print_json(&json!({
        "context": ctx.context_name,
        "addr": ctx.addr,
        "username": username,
        "authenticated": ctx.api.is_authenticated()?,
    }))
}
