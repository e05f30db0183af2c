use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::{endpoints, AuthorRequest};

use crate::modules::system::CommandContext;

pub(crate) async fn list_authors(
    ctx: &CommandContext<'_>,
    page: Option<u32>,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::AUTHORS).query_opt("page", page);
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn get_author(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::detail(endpoints::AUTHORS, id));
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn create_author(
    ctx: &CommandContext<'_>,
    payload: &AuthorRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::AUTHORS).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn update_author(
    ctx: &CommandContext<'_>,
    id: i64,
    payload: &AuthorRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::put(endpoints::detail(endpoints::AUTHORS, id)).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn delete_author(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<()> {
    ctx.api.delete(&endpoints::detail(endpoints::AUTHORS, id)).await?;
    Ok(())
}
