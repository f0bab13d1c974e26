use anyhow::Context;
use milk_core::entities::Animal;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AnimalCommands;
use crate::commands::shared::api::api;
use crate::commands::shared::gate::{active_farm, require_session};
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

const ANIMALS_PATH: &str = "/animais";

#[derive(Serialize)]
struct AnimalRow {
    id: i64,
    identificacao: String,
    raca: Option<String>,
    sexo: Option<&'static str>,
    saude: Option<&'static str>,
    categoria: Option<String>,
    lote_id: Option<i64>,
}

impl From<Animal> for AnimalRow {
    fn from(animal: Animal) -> Self {
        Self {
            id: animal.id,
            identificacao: animal.tag,
            raca: animal.breed,
            sexo: animal.sex.map(|sex| sex.label()),
            saude: animal.health.map(|health| health.as_str()),
            categoria: animal.category,
            lote_id: animal.batch_id,
        }
    }
}

/// Handle `milk animal <subcommand>`.
pub async fn handle(action: &AnimalCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_session(ctx, ANIMALS_PATH)?;

    match action {
        AnimalCommands::List {
            farm,
            batch,
            category,
            status,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, u32::MAX);
            let animals = if let Some(batch_id) = batch {
                ctx.client.list_animals_by_batch(*batch_id).await
            } else {
                let farm_id = match farm {
                    Some(id) => *id,
                    None => active_farm(ctx)?.id,
                };
                match (category, status) {
                    (Some(category), _) => {
                        ctx.client.list_animals_by_category(farm_id, category).await
                    }
                    (None, Some(status)) => {
                        ctx.client
                            .list_animals_by_reproductive_status(farm_id, status)
                            .await
                    }
                    (None, None) => ctx.client.list_animals_by_farm(farm_id).await,
                }
            };
            let animals = api(animals, "Erro ao carregar animais")?;
            let rows = take(animals, limit)
                .into_iter()
                .map(AnimalRow::from)
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        AnimalCommands::Show { id } => {
            let animal = api(ctx.client.get_animal(*id).await, "Erro ao carregar animal")?
                .with_context(|| format!("animal {id} not found"))?;
            output(&animal, flags.format)
        }
    }
}
