use shelfmark_core::{Book, BookQuery, BookRequest};

use super::http::{
    create_book, delete_book, get_book, list_books, list_books_request, update_book,
};
use crate::cli_args::*;
use crate::modules::system::http::{fetch_all_pages, print_json, print_json_response};
use crate::modules::system::CommandContext;

impl BookWriteArgs {
    fn into_request(self) -> anyhow::Result<BookRequest> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            anyhow::bail!("book title must not be empty");
        }
        Ok(BookRequest {
            title,
            author_id: self.author_id,
            total_pages: self.total_pages,
        })
    }
}

pub(crate) async fn handle_book(args: BookArgs, ctx: &mut CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        BookCommand::List(args) => {
            let query = BookQuery {
                author: args.author,
                search: args.search,
            };
            if args.all {
                let books: Vec<Book> = fetch_all_pages(ctx, list_books_request(&query)).await?;
                print_json(&books)?;
            } else {
                let response = list_books(ctx, &query, args.page).await?;
                print_json_response(response)?;
            }
        }
        BookCommand::Get(args) => {
            let response = get_book(ctx, args.id).await?;
            print_json_response(response)?;
        }
        BookCommand::Create(args) => {
            let response = create_book(ctx, &args.into_request()?).await?;
            print_json_response(response)?;
        }
        BookCommand::Update(args) => {
            let response = update_book(ctx, args.id, &args.book.into_request()?).await?;
            print_json_response(response)?;
        }
        BookCommand::Delete(args) => {
            delete_book(ctx, args.id).await?;
            println!("Book deleted");
        }
    }
    Ok(())
}
