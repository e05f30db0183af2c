use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::{endpoints, BookQuery, BookRequest};

use crate::modules::system::CommandContext;

pub(crate) fn list_books_request(query: &BookQuery) -> ApiRequest {
    ApiRequest::get(endpoints::BOOKS)
        .query_opt("author", query.author)
        .query_opt("search", query.search.as_deref())
}

pub(crate) async fn list_books(
    ctx: &CommandContext<'_>,
    query: &BookQuery,
    page: Option<u32>,
) -> anyhow::Result<ApiResponse> {
    let request = list_books_request(query).query_opt("page", page);
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn get_book(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::detail(endpoints::BOOKS, id));
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn create_book(
    ctx: &CommandContext<'_>,
    payload: &BookRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::BOOKS).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn update_book(
    ctx: &CommandContext<'_>,
    id: i64,
    payload: &BookRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::put(endpoints::detail(endpoints::BOOKS, id)).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn delete_book(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<()> {
    ctx.api.delete(&endpoints::detail(endpoints::BOOKS, id)).await?;
    Ok(())
}
