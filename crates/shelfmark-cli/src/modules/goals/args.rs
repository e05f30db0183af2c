use chrono::NaiveDate;
use clap::{Args, Subcommand};
use shelfmark_core::{GoalPeriod, GoalType};

#[derive(Args)]
pub struct GoalArgs {
    #[command(subcommand)]
    pub command: GoalCommand,
}

#[derive(Subcommand)]
pub enum GoalCommand {
    List(GoalListArgs),
    Create(GoalCreateArgs),
    Get(GoalIdArgs),
    Delete(GoalIdArgs),
    #[command(about = "Show current value and percentage of a goal")]
    Progress(GoalIdArgs),
}

#[derive(Args)]
pub struct GoalListArgs {
    #[arg(long, help = "daily, weekly, monthly or yearly")]
    pub period: Option<GoalPeriod>,
    #[arg(long = "type", help = "pages or books")]
    pub goal_type: Option<GoalType>,
}

#[derive(Args)]
pub struct GoalCreateArgs {
    #[arg(long = "type", help = "pages or books")]
    pub goal_type: GoalType,
    #[arg(long, help = "daily, weekly, monthly or yearly")]
    pub period: GoalPeriod,
    #[arg(long)]
    pub target: u32,
    #[arg(long, help = "YYYY-MM-DD")]
    pub start: NaiveDate,
    #[arg(long, help = "YYYY-MM-DD")]
    pub end: NaiveDate,
}

#[derive(Args)]
pub struct GoalIdArgs {
    pub id: i64,
}
