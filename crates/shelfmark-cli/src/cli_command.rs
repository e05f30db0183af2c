use crate::cli_args::*;
use crate::modules::auth::{handle_login, handle_logout, handle_register, handle_status};
use crate::modules::authors::handle_author;
use crate::modules::books::handle_book;
use crate::modules::goals::handle_goal;
use crate::modules::library::handle_library;
use crate::modules::lists::handle_list;
use crate::modules::profile::handle_profile;
use crate::modules::sessions::handle_session;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_command(
    command: Command,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Register(args) => handle_register(args, ctx).await?,
        Command::Login(args) => handle_login(args, ctx).await?,
        Command::Logout => handle_logout(ctx)?,
        Command::Status => handle_status(ctx)?,
        Command::Authors(args) => handle_author(args, ctx).await?,
        Command::Books(args) => handle_book(args, ctx).await?,
        Command::Library(args) => handle_library(args, ctx).await?,
        Command::Sessions(args) => handle_session(args, ctx).await?,
        Command::Goals(args) => handle_goal(args, ctx).await?,
        Command::Lists(args) => handle_list(args, ctx).await?,
        Command::Profile(args) => handle_profile(args, ctx).await?,
        Command::Config(_) => unreachable!(),
    }

    Ok(())
}
