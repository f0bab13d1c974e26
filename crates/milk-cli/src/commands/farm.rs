use anyhow::Context;
use milk_core::Farm;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::FarmCommands;
use crate::commands::shared::api::api;
use crate::commands::shared::gate::require_session;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

const FARMS_PATH: &str = "/fazendas";

#[derive(Serialize)]
struct FarmRow {
    id: i64,
    nome: String,
    localizacao: Option<String>,
    vacas: i64,
    ativa: bool,
}

impl FarmRow {
    fn new(farm: Farm, active_id: Option<i64>) -> Self {
        Self {
            ativa: active_id == Some(farm.id),
            id: farm.id,
            nome: farm.name,
            localizacao: farm.location,
            vacas: farm.headcount,
        }
    }
}

#[derive(Serialize)]
struct ActiveFarmResponse {
    active: bool,
    farm: Option<Farm>,
}

/// Handle `milk farm <subcommand>`.
pub async fn handle(action: &FarmCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_session(ctx, FARMS_PATH)?;
    let limit = effective_limit(None, flags.limit, u32::MAX);

    match action {
        FarmCommands::List => {
            let farms = api(ctx.client.my_farms().await, "Erro ao carregar fazendas")?;
            output(&rows(farms, ctx, limit), flags.format)
        }
        FarmCommands::Search { name } => {
            let farms = api(ctx.client.search_farms(name).await, "Erro ao buscar fazendas")?;
            output(&rows(farms, ctx, limit), flags.format)
        }
        FarmCommands::Active => {
            let farm = ctx.app.resolver().active_farm();
            output(
                &ActiveFarmResponse {
                    active: farm.is_some(),
                    farm,
                },
                flags.format,
            )
        }
        FarmCommands::Select { id } => {
            let farm = ctx
                .app
                .set_active_farm(Some(&Farm::new(*id, String::new())))
                .await?;
            tracing::debug!(farm_id = *id, "active farm changed");
            output(
                &ActiveFarmResponse {
                    active: farm.is_some(),
                    farm,
                },
                flags.format,
            )
        }
        FarmCommands::Clear => {
            ctx.app.set_active_farm(None).await?;
            output(
                &ActiveFarmResponse {
                    active: false,
                    farm: None,
                },
                flags.format,
            )
        }
        FarmCommands::Show { id } => {
            let farm = api(ctx.client.get_farm(*id).await, "Erro ao carregar fazenda")?
                .with_context(|| format!("farm {id} not found"))?;
            output(&farm, flags.format)
        }
    }
}

fn rows(farms: Vec<Farm>, ctx: &AppContext, limit: u32) -> Vec<FarmRow> {
    let active_id = ctx.app.resolver().active_farm().map(|farm| farm.id);
    take(farms, limit)
        .into_iter()
        .map(|farm| FarmRow::new(farm, active_id))
        .collect()
}

#[cfg(test)]
mod tests {
    use milk_core::Farm;
    use pretty_assertions::assert_eq;

    use super::FarmRow;

    #[test]
    fn row_marks_only_the_active_farm() {
        let mut farm = Farm::new(3, "Boa Vista");
        farm.headcount = 42;
        let row = FarmRow::new(farm.clone(), Some(3));
        assert!(row.ativa);
        assert_eq!(row.vacas, 42);
        assert!(!FarmRow::new(farm.clone(), Some(4)).ativa);
        assert!(!FarmRow::new(farm, None).ativa);
    }
}
