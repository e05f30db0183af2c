use serde_json::json;
use shelfmark_core::{CreateGoalRequest, GoalQuery};

use super::http::{create_goal, delete_goal, get_goal, goal_progress, list_goals};
use crate::cli_args::*;
use crate::modules::system::http::{print_json, print_json_response};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_goal(args: GoalArgs, ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        GoalCommand::List(args) => {
            let query = GoalQuery {
                period: args.period,
                goal_type: args.goal_type,
            };
            let response = list_goals(ctx, &query).await?;
            print_json_response(response)?;
        }
        GoalCommand::Create(args) => {
            let payload = CreateGoalRequest {
                goal_type: args.goal_type,
                period: args.period,
                target: args.target,
                start_date: args.start,
                end_date: args.end,
            };
            payload.validate()?;
            let response = create_goal(ctx, &payload).await?;
            print_json_response(response)?;
        }
        GoalCommand::Get(args) => {
            let response = get_goal(ctx, args.id).await?;
            print_json_response(response)?;
        }
        GoalCommand::Delete(args) => {
            delete_goal(ctx, args.id).await?;
            println!("Goal deleted");
        }
        GoalCommand::Progress(args) => {
            let goal = goal_progress(ctx, args.id).await?;
            print_json(&json!({
                "id": goal.id,
                "goal_type": goal.goal_type,
                "period": goal.period,
                "target": goal.target,
                "current_value": goal.current_value,
                "progress_percentage": goal.progress_percentage,
                "met": goal.is_met(),
            }))?;
        }
    }
    Ok(())
}
