use clap::Subcommand;

use crate::cli::subcommands::{
    AdminCommands, AnimalCommands, AuthCommands, BreedingCommands, FarmCommands,
    ProductionCommands, ThemeCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Log in, log out, or inspect the session.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Farms and the active-farm selection.
    Farm {
        #[command(subcommand)]
        action: FarmCommands,
    },
    /// Animals.
    Animal {
        #[command(subcommand)]
        action: AnimalCommands,
    },
    /// Milk production records.
    Production {
        #[command(subcommand)]
        action: ProductionCommands,
    },
    /// Reproductive events and batches of the active farm.
    Breeding {
        #[command(subcommand)]
        action: BreedingCommands,
    },
    /// User administration (ADMIN and DEVELOPER only).
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// Light/dark theme preference.
    Theme {
        #[command(subcommand)]
        action: ThemeCommands,
    },
}
