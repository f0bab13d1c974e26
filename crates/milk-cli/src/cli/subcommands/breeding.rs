use clap::Subcommand;

/// Reproductive records of the active farm.
#[derive(Clone, Debug, Subcommand)]
pub enum BreedingCommands {
    /// Heat detections (cios).
    Heats {
        #[arg(long)]
        animal: Option<i64>,
    },
    /// Coverings and inseminations (coberturas).
    Coverings,
    /// Pregnancy checks (toques).
    Checks,
    Gestations,
    /// Births (partos).
    Births,
    /// Drying-off records (secagens).
    DryOffs,
    Lactations,
    /// Animal batches (lotes).
    Batches,
}
