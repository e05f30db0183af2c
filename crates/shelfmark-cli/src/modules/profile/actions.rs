use shelfmark_core::ProfileUpdate;

use super::http::{fetch_profile, update_profile};
use crate::cli_args::*;
use crate::modules::system::http::print_json;
use crate::modules::system::CommandContext;

pub(crate) async fn handle_profile(
    args: ProfileArgs,
    ctx: &mut CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ProfileCommand::Show => {
            let profile = fetch_profile(ctx).await?;
            print_json(&profile)?;
        }
        ProfileCommand::Update(args) => {
            let update = ProfileUpdate {
                bio: args.bio,
                favorite_genre: args.favorite_genre,
                avatar: args.avatar,
            };
            if update.is_empty() {
                anyhow::bail!("nothing to update (use --bio, --favorite-genre or --avatar)");
            }
            let profile = update_profile(ctx, &update).await?;
            print_json(&profile)?;
        }
    }
    Ok(())
}
