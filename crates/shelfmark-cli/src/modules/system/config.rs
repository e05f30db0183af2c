use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

use shelfmark_core::DEFAULT_BASE_URL;
use tracing::debug;

use super::types::{CliConfig, CliContext, Target};
use crate::cli_args::{ConfigArgs, ConfigCommand};
use crate::modules::auth::open_session_store;
use crate::DEFAULT_CONTEXT;

pub(crate) fn handle_config_command(
    args: ConfigArgs,
    config: &mut CliConfig,
) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::SetContext(args) => {
            let entry = config
                .contexts
                .entry(args.name.clone())
                .or_insert_with(|| CliContext {
                    addr: DEFAULT_BASE_URL.to_string(),
                    username: None,
                });
            if let Some(addr) = args.addr {
                entry.addr = addr;
            }
            if let Some(username) = args.username {
                entry.username = Some(username);
            }
            config.current_context = Some(args.name);
        }
        ConfigCommand::UseContext(args) => {
            if !config.contexts.contains_key(&args.name) {
                anyhow::bail!("context not found: {}", args.name);
            }
            config.current_context = Some(args.name);
        }
        ConfigCommand::CurrentContext => {
            if let Some(current) = config.current_context.clone() {
                println!("{current}");
            }
        }
        ConfigCommand::GetContexts => {
            let mut names: Vec<&String> = config.contexts.keys().collect();
            names.sort();
            for name in names {
                let marker = if config.current_context.as_ref() == Some(name) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {name}");
            }
        }
        ConfigCommand::RemoveContext(args) => {
            if config.contexts.remove(&args.name).is_none() {
                anyhow::bail!("context not found: {}", args.name);
            }
            if config.current_context.as_deref() == Some(&args.name) {
                config.current_context = None;
            }
            open_session_store(&args.name)?.clear()?;
            debug!(context = %args.name, "removed context and its tokens");
        }
    }
    Ok(())
}

fn shelfmark_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("HOME is not set"))?;
    Ok(Path::new(&home).join(".shelfmark"))
}

fn config_path() -> anyhow::Result<PathBuf> {
    Ok(shelfmark_dir()?.join("config.json"))
}

pub(crate) fn credentials_path() -> anyhow::Result<PathBuf> {
    Ok(shelfmark_dir()?.join("credentials.json"))
}

pub(crate) fn load_config() -> anyhow::Result<CliConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let contents = fs::read_to_string(path)?;
    let config = serde_json::from_str(&contents)?;
    Ok(config)
}

pub(crate) fn save_config(config: &CliConfig) -> anyhow::Result<()> {
    let path = config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(config)?;
    fs::write(path, contents)?;
    Ok(())
}

/// `--context`, then the active context, then `default`. The address comes
/// from `--addr`, then the context, then the built-in default.
pub(crate) fn resolve_target(
    addr_arg: Option<String>,
    context_arg: Option<String>,
    config: &CliConfig,
) -> anyhow::Result<Target> {
    let explicit = context_arg.is_some();
    let name = context_arg
        .or_else(|| config.current_context.clone())
        .unwrap_or_else(|| DEFAULT_CONTEXT.to_string());
    let context = config.contexts.get(&name);
    if explicit && context.is_none() && addr_arg.is_none() {
        anyhow::bail!("context not found: {name} (pass --addr or run `shelfmark config set-context`)");
    }
    let addr = addr_arg
        .or_else(|| context.map(|ctx| ctx.addr.clone()))
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    Ok(Target { name, addr })
}

pub(crate) fn ensure_secure_addr(addr: &str, allow_insecure: bool) -> anyhow::Result<()> {
    if addr.starts_with("http://") && !allow_insecure && !is_loopback(addr) {
        anyhow::bail!("refusing to use http:// without --insecure");
    }
    Ok(())
}

fn is_loopback(addr: &str) -> bool {
    let Ok(url) = reqwest::Url::parse(addr) else {
        return false;
    };
    match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    }
}
