use shelfmark_core::{
    validate_pages_read, AddUserBookRequest, LibraryQuery, LibraryStats, ProgressRequest,
    UpdateUserBookRequest, UserBook,
};
use tracing::debug;

use super::http::{
    add_to_library, get_user_book, library_stats, list_library, list_library_request,
    remove_from_library, update_progress, update_user_book,
};
use crate::cli_args::*;
use crate::modules::system::http::{fetch_all_pages, print_json, print_json_response};
use crate::modules::system::CommandContext;

pub(crate) async fn handle_library(
    args: LibraryArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        LibraryCommand::List(args) => {
            let query = LibraryQuery {
                status: args.status,
                search: args.search,
            };
            if args.all {
                let entries: Vec<UserBook> =
                    fetch_all_pages(ctx, list_library_request(&query)).await?;
                print_json(&entries)?;
            } else {
                let response = list_library(ctx, &query, args.page).await?;
                print_json_response(response)?;
            }
        }
        LibraryCommand::Add(args) => {
            let payload = AddUserBookRequest {
                book_id: args.book_id,
            };
            let response = add_to_library(ctx, &payload).await?;
            print_json_response(response)?;
        }
        LibraryCommand::Get(args) => {
            let entry = get_user_book(ctx, args.id).await?;
            print_json(&entry)?;
        }
        LibraryCommand::Update(args) => {
            let payload = UpdateUserBookRequest {
                comment: args.comment,
                is_favorite: args.favorite,
                rating: args.rating,
            };
            if payload.is_empty() {
                anyhow::bail!("nothing to update (use --comment, --favorite or --rating)");
            }
            payload.validate()?;
            let response = update_user_book(ctx, args.id, &payload).await?;
            print_json_response(response)?;
        }
        LibraryCommand::Remove(args) => {
            remove_from_library(ctx, args.id).await?;
            println!("Book removed from library");
        }
        LibraryCommand::Progress(args) => {
            let entry = get_user_book(ctx, args.id).await?;
            validate_pages_read(args.pages_read, Some(entry.book.total_pages))?;
            debug!(
                id = args.id,
                from = entry.pages_read,
                to = args.pages_read,
                "updating reading progress"
            );
            let payload = ProgressRequest {
                pages_read: args.pages_read,
            };
            let response = update_progress(ctx, args.id, &payload).await?;
            print_json_response(response)?;
        }
        LibraryCommand::Stats => {
            let response = library_stats(ctx).await?;
            let stats: LibraryStats = response.json()?;
            print_json(&stats)?;
        }
    }
    Ok(())
}
