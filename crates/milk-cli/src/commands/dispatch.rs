use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Auth { action } => commands::auth::handle(&action, ctx, flags).await,
        Commands::Farm { action } => commands::farm::handle(&action, ctx, flags).await,
        Commands::Animal { action } => commands::animal::handle(&action, ctx, flags).await,
        Commands::Production { action } => commands::production::handle(&action, ctx, flags).await,
        Commands::Breeding { action } => commands::breeding::handle(&action, ctx, flags).await,
        Commands::Admin { action } => commands::admin::handle(&action, ctx, flags).await,
        Commands::Theme { .. } => {
            anyhow::bail!("theme is handled before the session is opened")
        }
    }
}
