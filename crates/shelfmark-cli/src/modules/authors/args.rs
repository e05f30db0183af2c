use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AuthorArgs {
    #[command(subcommand)]
    pub command: AuthorCommand,
}

#[derive(Subcommand)]
pub enum AuthorCommand {
    List(AuthorListArgs),
    Get(AuthorIdArgs),
    Create(AuthorCreateArgs),
    Update(AuthorUpdateArgs),
    Delete(AuthorIdArgs),
}

#[derive(Args)]
pub struct AuthorListArgs {
    #[arg(long, help = "Page number for paginated servers")]
    pub page: Option<u32>,
}

#[derive(Args)]
pub struct AuthorIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct AuthorCreateArgs {
    #[arg(long)]
    pub name: String,
}

#[derive(Args)]
pub struct AuthorUpdateArgs {
    pub id: i64,
    #[arg(long)]
    pub name: String,
}
