use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::{endpoints, CreateSessionRequest, SummaryDay};

use crate::modules::system::CommandContext;

pub(crate) async fn list_sessions(
    ctx: &CommandContext<'_>,
    ordering: &str,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::READING_SESSIONS).query("ordering", ordering);
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn create_session(
    ctx: &CommandContext<'_>,
    payload: &CreateSessionRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::READING_SESSIONS).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn delete_session(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<()> {
    ctx.api
        .delete(&endpoints::detail(endpoints::READING_SESSIONS, id))
        .await?;
    Ok(())
}

pub(crate) async fn fetch_summary(
    ctx: &CommandContext<'_>,
    days: u32,
) -> anyhow::Result<Vec<SummaryDay>> {
    let request = ApiRequest::get(endpoints::READING_SESSIONS_SUMMARY).query("days", days);
    Ok(ctx.api.send_json(&request).await?)
}
