use chrono::NaiveDate;
use clap::{Args, Subcommand};
use shelfmark_core::{DEFAULT_SESSION_ORDERING, DEFAULT_SUMMARY_DAYS};

#[derive(Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand)]
pub enum SessionCommand {
    List(SessionListArgs),
    #[command(about = "Record a reading session")]
    Log(SessionLogArgs),
    Delete(SessionIdArgs),
    #[command(about = "Pages read per day")]
    Summary(SessionSummaryArgs),
}

#[derive(Args)]
pub struct SessionListArgs {
    #[arg(long, default_value = DEFAULT_SESSION_ORDERING)]
    pub ordering: String,
}

#[derive(Args)]
pub struct SessionLogArgs {
    #[arg(long, help = "Library entry id")]
    pub user_book: i64,
    #[arg(long)]
    pub pages: u32,
    #[arg(long, help = "YYYY-MM-DD, defaults to today")]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub minutes: Option<u32>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct SessionIdArgs {
    pub id: i64,
}

#[derive(Args)]
pub struct SessionSummaryArgs {
    #[arg(long, default_value_t = DEFAULT_SUMMARY_DAYS)]
    pub days: u32,
    #[arg(long, help = "Add a running total of pages")]
    pub cumulative: bool,
}
