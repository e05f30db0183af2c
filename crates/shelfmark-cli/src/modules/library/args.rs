use clap::{Args, Subcommand};
use shelfmark_core::ReadingStatus;

#[derive(Args)]
pub struct LibraryArgs {
    #[command(subcommand)]
    pub command: LibraryCommand,
}

#[derive(Subcommand)]
pub enum LibraryCommand {
    List(LibraryListArgs),
    #[command(about = "Add a catalog book to the library")]
    Add(LibraryAddArgs),
    Get(LibraryIdArgs),
    #[command(about = "Change comment, favorite flag or rating")]
    Update(LibraryUpdateArgs),
    Remove(LibraryIdArgs),
    #[command(about = "Record how many pages have been read")]
    Progress(LibraryProgressArgs),
    Stats,
}

#[derive(Args)]
pub struct LibraryListArgs {
    #[arg(long, help = "non_lu, en_cours or lu (unread, reading, read)")]
    pub status: Option<ReadingStatus>,
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long, conflicts_with = "all")]
    pub page: Option<u32>,
    #[arg(long, help = "Fetch every page")]
    pub all: bool,
}

#[derive(Args)]
pub struct LibraryAddArgs {
    #[arg(help = "Catalog book id")]
    pub book_id: i64,
}

#[derive(Args)]
pub struct LibraryIdArgs {
    #[arg(help = "Library entry id")]
    pub id: i64,
}

#[derive(Args)]
pub struct LibraryUpdateArgs {
    #[arg(help = "Library entry id")]
    pub id: i64,
    #[arg(long)]
    pub comment: Option<String>,
    #[arg(long)]
    pub favorite: Option<bool>,
    #[arg(long, help = "1 to 5")]
    pub rating: Option<u8>,
}

#[derive(Args)]
pub struct LibraryProgressArgs {
    #[arg(help = "Library entry id")]
    pub id: i64,
    #[arg(help = "Total pages read so far")]
    pub pages_read: u32,
}
