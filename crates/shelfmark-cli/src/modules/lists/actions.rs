use shelfmark_core::{ActionMessage, ListBookRequest, ListRequest};

use super::http::{change_membership, create_list, delete_list, get_list, list_lists, rename_list};
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_list(args: ListArgs, ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        ListCommand::List => {
            let response = list_lists(ctx).await?;
            print_json_response(response)?;
        }
        ListCommand::Create(args) => {
            let payload = ListRequest::new(&args.name)?;
            let response = create_list(ctx, &payload).await?;
            print_json_response(response)?;
        }
        ListCommand::Get(args) => {
            let response = get_list(ctx, args.id).await?;
            print_json_response(response)?;
        }
        ListCommand::Rename(args) => {
            let payload = ListRequest::new(&args.name)?;
            let response = rename_list(ctx, args.id, &payload).await?;
            print_json_response(response)?;
        }
        ListCommand::Delete(args) => {
            delete_list(ctx, args.id).await?;
            println!("List deleted");
        }
        ListCommand::AddBook(args) => {
            let payload = ListBookRequest {
                book_id: args.user_book,
            };
            let response = change_membership(ctx, args.id, "add_book", &payload).await?;
            let message: ActionMessage = response.json()?;
            println!("{}", message.message);
        }
        ListCommand::RemoveBook(args) => {
            let payload = ListBookRequest {
                book_id: args.user_book,
            };
            let response = change_membership(ctx, args.id, "remove_book", &payload).await?;
            let message: ActionMessage = response.json()?;
            println!("{}", message.message);
        }
    }
    Ok(())
}
