use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ListArgs {
    #[command(subcommand)]
    pub command: ListCommand,
}

#[derive(Subcommand)]
pub enum ListCommand {
    List,
    Create(ListCreateArgs),
    Get(ListIdArgs),
    Rename(ListRenameArgs),
    Delete(ListIdArgs),
    #[command(about = "Add a library entry to a list")]
    AddBook(ListBookArgs),
    #[command(about = "Remove a library entry from a list")]
    RemoveBook(ListBookArgs),
}

#[derive(Args)]
pub struct ListCreateArgs {
    pub name: String,
}

#[derive(Args)]
pub struct ListIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct ListRenameArgs {
    pub id: i64,
    pub name: String,
}

#[derive(Args)]
pub struct ListBookArgs {
    #[arg(help = "List id")]
    pub id: i64,
    #[arg(help = "Library entry id")]
    pub user_book: i64,
}
