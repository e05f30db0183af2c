use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::{endpoints, ListBookRequest, ListRequest};

use crate::modules::system::CommandContext;

pub(crate) async fn list_lists(ctx: &CommandContext<'_>) -> anyhow::Result<ApiResponse> {
    Ok(ctx.api.send(&ApiRequest::get(endpoints::LISTS)).await?)
}

pub(crate) async fn create_list(
    ctx: &CommandContext<'_>,
    payload: &ListRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::LISTS).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn get_list(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::detail(endpoints::LISTS, id));
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn rename_list(
    ctx: &CommandContext<'_>,
    id: i64,
    payload: &ListRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::put(endpoints::detail(endpoints::LISTS, id)).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn delete_list(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<()> {
    ctx.api.delete(&endpoints::detail(endpoints::LISTS, id)).await?;
    Ok(())
}

/// `action` is `add_book` or `remove_book`.
pub(crate) async fn change_membership(
    ctx: &CommandContext<'_>,
    id: i64,
    action: &str,
    payload: &ListBookRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::action(endpoints::LISTS, id, action)).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}
