use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::BreedingCommands;
use crate::commands::shared::api::api;
use crate::commands::shared::gate::{active_farm, require_session};
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

/// Handle `milk breeding <subcommand>`. Everything is scoped to the active farm.
pub async fn handle(
    action: &BreedingCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_session(ctx, screen_path(action))?;
    let farm_id = active_farm(ctx)?.id;
    let client = &ctx.client;
    let limit = effective_limit(None, flags.limit, u32::MAX);

    match action {
        BreedingCommands::Heats { animal: Some(animal_id) } => {
            let heats = api(client.list_heats_by_animal(*animal_id).await, "Erro ao carregar cios")?;
            // The per-animal endpoint is not farm-scoped.
            let heats = heats
                .into_iter()
                .filter(|heat| heat.farm_id == farm_id)
                .collect::<Vec<_>>();
            print(heats, limit, flags)
        }
        BreedingCommands::Heats { animal: None } => {
            print(api(client.list_heats(farm_id).await, "Erro ao carregar cios")?, limit, flags)
        }
        BreedingCommands::Coverings => print(
            api(client.list_coverings(farm_id).await, "Erro ao carregar coberturas")?,
            limit,
            flags,
        ),
        BreedingCommands::Checks => print(
            api(client.list_pregnancy_checks(farm_id).await, "Erro ao carregar toques")?,
            limit,
            flags,
        ),
        BreedingCommands::Gestations => print(
            api(client.list_gestations(farm_id).await, "Erro ao carregar gestações")?,
            limit,
            flags,
        ),
        BreedingCommands::Births => print(
            api(client.list_births(farm_id).await, "Erro ao carregar partos")?,
            limit,
            flags,
        ),
        BreedingCommands::DryOffs => print(
            api(client.list_dry_offs(farm_id).await, "Erro ao carregar secagens")?,
            limit,
            flags,
        ),
        BreedingCommands::Lactations => print(
            api(client.list_lactations(farm_id).await, "Erro ao carregar lactações")?,
            limit,
            flags,
        ),
        BreedingCommands::Batches => print(
            api(client.list_batches(farm_id).await, "Erro ao carregar lotes")?,
            limit,
            flags,
        ),
    }
}

fn print<T: Serialize>(rows: Vec<T>, limit: u32, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&take(rows, limit), flags.format)
}

const fn screen_path(action: &BreedingCommands) -> &'static str {
    match action {
        BreedingCommands::Heats { .. } => "/reproducao/cios",
        BreedingCommands::Coverings => "/reproducao/coberturas",
        BreedingCommands::Checks => "/reproducao/toques",
        BreedingCommands::Gestations => "/reproducao/gestacoes",
        BreedingCommands::Births => "/reproducao/partos",
        BreedingCommands::DryOffs => "/reproducao/secagens",
        BreedingCommands::Lactations => "/reproducao/lactacoes",
        BreedingCommands::Batches => "/lotes",
    }
}

#[cfg(test)]
mod tests {
    use super::screen_path;
    use crate::cli::subcommands::BreedingCommands;

    #[test]
    fn every_screen_has_its_own_path() {
        let actions = [
            BreedingCommands::Heats { animal: None },
            BreedingCommands::Coverings,
            BreedingCommands::Checks,
            BreedingCommands::Gestations,
            BreedingCommands::Births,
            BreedingCommands::DryOffs,
            BreedingCommands::Lactations,
            BreedingCommands::Batches,
        ];
        let mut paths = actions.iter().map(screen_path).collect::<Vec<_>>();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), actions.len());
        assert!(paths.iter().all(|path| path.starts_with('/')));
    }
}
