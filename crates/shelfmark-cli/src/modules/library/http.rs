use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::{
    endpoints, AddUserBookRequest, LibraryQuery, ProgressRequest, UpdateUserBookRequest, UserBook,
};

use crate::modules::system::CommandContext;

pub(crate) fn list_library_request(query: &LibraryQuery) -> ApiRequest {
    ApiRequest::get(endpoints::MY_BOOKS)
        .query_opt("status", query.status.map(|status| status.as_str()))
        .query_opt("search", query.search.as_deref())
}

pub(crate) async fn list_library(
    ctx: &CommandContext<'_>,
    query: &LibraryQuery,
    page: Option<u32>,
) -> anyhow::Result<ApiResponse> {
    let request = list_library_request(query).query_opt("page", page);
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn add_to_library(
    ctx: &CommandContext<'_>,
    payload: &AddUserBookRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::MY_BOOKS).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn get_user_book(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<UserBook> {
    Ok(ctx
        .api
        .get_json(&endpoints::detail(endpoints::MY_BOOKS, id))
        .await?)
}

pub(crate) async fn update_user_book(
    ctx: &CommandContext<'_>,
    id: i64,
    payload: &UpdateUserBookRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::patch(endpoints::detail(endpoints::MY_BOOKS, id)).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn remove_from_library(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<()> {
    ctx.api
        .delete(&endpoints::detail(endpoints::MY_BOOKS, id))
        .await?;
    Ok(())
}

pub(crate) async fn update_progress(
    ctx: &CommandContext<'_>,
    id: i64,
    payload: &ProgressRequest,
) -> anyhow::Result<ApiResponse> {
    let path = endpoints::action(endpoints::MY_BOOKS, id, "update_progress");
    let request = ApiRequest::post(path).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn library_stats(ctx: &CommandContext<'_>) -> anyhow::Result<ApiResponse> {
    Ok(ctx
        .api
        .send(&ApiRequest::get(endpoints::MY_BOOKS_STATS))
        .await?)
}
