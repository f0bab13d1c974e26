use clap::Subcommand;

/// Administrative commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// List users, one page at a time.
    Users {
        #[arg(long, default_value_t = 0)]
        offset: u32,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Enable or disable a user.
    ToggleUser { id: i64 },
}
