use clap::Subcommand;

/// Animal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AnimalCommands {
    /// List animals of the active farm (or of --farm).
    List {
        #[arg(long)]
        farm: Option<i64>,
        /// Only animals in this batch.
        #[arg(long, conflicts_with_all = ["category", "status"])]
        batch: Option<i64>,
        #[arg(long, conflicts_with = "status")]
        category: Option<String>,
        /// Reproductive status.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show one animal.
    Show { id: i64 },
}
