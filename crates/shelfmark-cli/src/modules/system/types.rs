use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use shelfmark_client::ApiClient;

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: HashMap<String, CliContext>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CliContext {
    pub addr: String,
    #[serde(default)]
    pub username: Option<String>,
}

/// Context name and API address a command runs against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub name: String,
    pub addr: String,
}

pub struct CommandContext<'a> {
    pub api: &'a ApiClient,
    pub context_name: String,
    pub addr: String,
    pub config: &'a mut CliConfig,
}
