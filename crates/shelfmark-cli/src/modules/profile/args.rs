use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProfileArgs {
    #[command(subcommand)]
    pub command: ProfileCommand,
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,
    Update(ProfileUpdateArgs),
}

#[derive(Args)]
pub struct ProfileUpdateArgs {
    #[arg(long)]
    pub bio: Option<String>,
    #[arg(long)]
    pub favorite_genre: Option<String>,
    #[arg(long, help = "Image file to upload as avatar")]
    pub avatar: Option<PathBuf>,
}
