use clap::{Args, Subcommand};

#[derive(Args)]
pub struct BookArgs {
    #[command(subcommand)]
    pub command: BookCommand,
}

#[derive(Subcommand)]
pub enum BookCommand {
    List(BookListArgs),
    Get(BookIdArgs),
    Create(BookWriteArgs),
    Update(BookUpdateArgs),
    Delete(BookIdArgs),
}

#[derive(Args)]
pub struct BookListArgs {
    #[arg(long, help = "Only books by this author id")]
    pub author: Option<i64>,
    #[arg(long, help = "Match against title or author name")]
    pub search: Option<String>,
    #[arg(long, conflicts_with = "all")]
    pub page: Option<u32>,
    #[arg(long, help = "Fetch every page")]
    pub all: bool,
}

#[derive(Args)]
pub struct BookIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct BookWriteArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author_id: i64,
    #[arg(long)]
    pub total_pages: u32,
}

#[derive(Args)]
pub struct BookUpdateArgs {
    pub id: i64,
    #[command(flatten)]
    pub book: BookWriteArgs,
}
