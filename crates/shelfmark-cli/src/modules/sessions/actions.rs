use chrono::Local;
use shelfmark_core::{cumulative_pages, CreateSessionRequest};

use super::http::{create_session, delete_session, fetch_summary, list_sessions};
use crate::cli_args::*;
use crate::modules::system::http::{print_json, print_json_response};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_session(
    args: SessionArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        SessionCommand::List(args) => {
            let response = list_sessions(ctx, &args.ordering).await?;
            print_json_response(response)?;
        }
        SessionCommand::Log(args) => {
            let payload = CreateSessionRequest {
                user_book: args.user_book,
                date: args.date.unwrap_or_else(|| Local::now().date_naive()),
                pages_read: args.pages,
                duration_minutes: args.minutes,
                notes: args.notes,
            };
            payload.validate()?;
            let response = create_session(ctx, &payload).await?;
            print_json_response(response)?;
        }
        SessionCommand::Delete(args) => {
            delete_session(ctx, args.id).await?;
            println!("Reading session deleted");
        }
        SessionCommand::Summary(args) => {
            let summary = fetch_summary(ctx, args.days).await?;
            if args.cumulative {
                print_json(&cumulative_pages(&summary))?;
            } else {
                print_json(&summary)?;
            }
        }
    }
    Ok(())
}
