use clap::Args;

#[derive(Args)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, help = "Password (defaults to SHELFMARK_PASSWORD or a prompt)")]
    pub password: Option<String>,
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long, help = "Username (defaults to the context's username)")]
    pub username: Option<String>,
    #[arg(long, help = "Password (defaults to SHELFMARK_PASSWORD or a prompt)")]
    pub password: Option<String>,
}
