use shelfmark_core::AuthorRequest;

use super::http::{create_author, delete_author, get_author, list_authors, update_author};
use crate::cli_args::*;
use crate::modules::system::http::print_json_response;
use crate::modules::system::CommandContext;

fn author_payload(name: String) -> anyhow::Result<AuthorRequest> {
    let name = name.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("author name must not be empty");
    }
    Ok(AuthorRequest { name })
}

pub(crate) async fn handle_author(
    args: AuthorArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        AuthorCommand::List(args) => {
            let response = list_authors(ctx, args.page).await?;
            print_json_response(response)?;
        }
        AuthorCommand::Get(args) => {
            let response = get_author(ctx, args.id).await?;
            print_json_response(response)?;
        }
        AuthorCommand::Create(args) => {
            let response = create_author(ctx, &author_payload(args.name)?).await?;
            print_json_response(response)?;
        }
        AuthorCommand::Update(args) => {
            let response = update_author(ctx, args.id, &author_payload(args.name)?).await?;
            print_json_response(response)?;
        }
        AuthorCommand::Delete(args) => {
            delete_author(ctx, args.id).await?;
            println!("Author deleted");
        }
    }
    Ok(())
}
