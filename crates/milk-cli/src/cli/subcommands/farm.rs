use clap::Subcommand;

/// Farm commands.
#[derive(Clone, Debug, Subcommand)]
pub enum FarmCommands {
    /// List the farms you belong to.
    List,
    /// Show the active farm.
    Active,
    /// Make a farm the active one.
    Select { id: i64 },
    /// Clear the active farm.
    Clear,
    /// Show one farm.
    Show { id: i64 },
    /// Search farms by name.
    Search { name: String },
}
