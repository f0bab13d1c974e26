use clap::{Args, Subcommand};

/// Authentication commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with email and password.
    Login(AuthLoginArgs),
    /// End the session on the server and forget it locally.
    Logout,
    /// Show the current identity and active farm.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long, env = "MILK_EMAIL")]
    pub email: String,
    #[arg(long, env = "MILK_PASSWORD", hide_env_values = true)]
    pub password: String,
}
