use clap::Subcommand;

use crate::cli::ThemeArg;

/// Theme preference commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ThemeCommands {
    /// Show the effective theme.
    Show {
        /// Theme to assume when none is stored.
        #[arg(long, value_enum, default_value_t)]
        system: ThemeArg,
    },
    /// Store a theme.
    Set {
        #[arg(value_enum)]
        theme: ThemeArg,
    },
    /// Switch between light and dark.
    Toggle {
        #[arg(long, value_enum, default_value_t)]
        system: ThemeArg,
    },
}
