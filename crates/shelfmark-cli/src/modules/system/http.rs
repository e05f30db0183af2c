use std::collections::HashSet;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::Page;
use tracing::debug;

use crate::modules::system::CommandContext;

/// Pretty-prints a JSON body; empty bodies print nothing.
pub(crate) fn print_json_response(response: ApiResponse) -> anyhow::Result<()> {
    if response.is_empty() {
        return Ok(());
    }
    let body: serde_json::Value = response.json()?;
    print_json(&body)
}

pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Follows `next` links until the last page. A link seen twice is an error.
pub(crate) async fn fetch_all_pages<T: DeserializeOwned>(
    ctx: &CommandContext<'_>,
    first: ApiRequest,
) -> anyhow::Result<Vec<T>> {
    let mut items = Vec::new();
    let mut visited = HashSet::new();
    let mut request = first;
    loop {
        let page: Page<T> = ctx.api.send_json(&request).await?;
        let next = page.next().map(str::to_string);
        debug!(total = page.total(), has_next = next.is_some(), "fetched page");
        items.extend(page.into_items());
        let Some(next) = next else {
            return Ok(items);
        };
        if !visited.insert(next.clone()) {
            anyhow::bail!("pagination loop: {next} was already fetched");
        }
        request = ApiRequest::get(next);
    }
}
