use chrono::NaiveDate;
use clap::Subcommand;

/// Milk production commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProductionCommands {
    /// List production records.
    List {
        #[arg(long, conflicts_with_all = ["from", "to"])]
        animal: Option<i64>,
        /// First day (YYYY-MM-DD), inclusive.
        #[arg(long, requires = "to")]
        from: Option<NaiveDate>,
        /// Last day (YYYY-MM-DD), inclusive.
        #[arg(long, requires = "from")]
        to: Option<NaiveDate>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Production totals for one animal.
    Summary { animal_id: i64 },
}
