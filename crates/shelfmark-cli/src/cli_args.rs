use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::authors::args::*;
pub use crate::modules::books::args::*;
pub use crate::modules::goals::args::*;
pub use crate::modules::library::args::*;
pub use crate::modules::lists::args::*;
pub use crate::modules::profile::args::*;
pub use crate::modules::sessions::args::*;
pub use crate::modules::system::args::*;

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(about = "Shelfmark reading tracker CLI")]
pub struct Cli {
    #[arg(long, env = "SHELFMARK_ADDR", help = "API base URL, e.g. https://books.example.com/api")]
    pub addr: Option<String>,
    #[arg(long, env = "SHELFMARK_CONTEXT")]
    pub context: Option<String>,
    #[arg(long, default_value_t = 30, help = "Request timeout in seconds")]
    pub timeout: u64,
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, help = "Allow http:// to non-loopback hosts and invalid TLS certificates")]
    pub insecure: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Manage saved contexts")]
    Config(ConfigArgs),
    #[command(about = "Create an account")]
    Register(RegisterArgs),
    #[command(about = "Sign in and store the session tokens")]
    Login(LoginArgs),
    #[command(about = "Forget the stored session tokens")]
    Logout,
    #[command(about = "Show the active context and session state")]
    Status,
    Authors(AuthorArgs),
    Books(BookArgs),
    #[command(about = "Personal library and reading progress")]
    Library(LibraryArgs),
    #[command(about = "Reading sessions")]
    Sessions(SessionArgs),
    #[command(about = "Reading goals")]
    Goals(GoalArgs),
    #[command(about = "Reading lists")]
    Lists(ListArgs),
    Profile(ProfileArgs),
}
