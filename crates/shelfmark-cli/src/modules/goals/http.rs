use shelfmark_client::{ApiRequest, ApiResponse};
use shelfmark_core::{endpoints, CreateGoalRequest, GoalQuery, ReadingGoal};

use crate::modules::system::CommandContext;

pub(crate) async fn list_goals(
    ctx: &CommandContext<'_>,
    query: &GoalQuery,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::GOALS)
        .query_opt("period", query.period.map(|period| period.as_str()))
        .query_opt("goal_type", query.goal_type.map(|goal_type| goal_type.as_str()));
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn create_goal(
    ctx: &CommandContext<'_>,
    payload: &CreateGoalRequest,
) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::post(endpoints::GOALS).json(payload)?;
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn get_goal(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<ApiResponse> {
    let request = ApiRequest::get(endpoints::detail(endpoints::GOALS, id));
    Ok(ctx.api.send(&request).await?)
}

pub(crate) async fn delete_goal(ctx: &CommandContext<'_>, id: i64) -> anyhow::Result<()> {
    ctx.api.delete(&endpoints::detail(endpoints::GOALS, id)).await?;
    Ok(())
}

pub(crate) async fn goal_progress(
    ctx: &CommandContext<'_>,
    id: i64,
) -> anyhow::Result<ReadingGoal> {
    let path = endpoints::action(endpoints::GOALS, id, "progress");
    Ok(ctx.api.get_json(&path).await?)
}
