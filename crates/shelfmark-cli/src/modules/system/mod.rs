pub(crate) mod args;
pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod types;

pub(crate) use config::{
    credentials_path, ensure_secure_addr, handle_config_command, load_config, resolve_target,
    save_config,
};
pub(crate) use types::{CliConfig, CliContext, CommandContext, Target};
