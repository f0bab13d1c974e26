use milk_core::entities::{MilkProduction, ProductionSummary};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProductionCommands;
use crate::commands::shared::api::api;
use crate::commands::shared::gate::require_session;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

const PRODUCTION_PATH: &str = "/producao";

#[derive(Serialize)]
struct ProductionRow {
    id: i64,
    animal_id: i64,
    litros: f64,
    data: String,
    qualidade: Option<&'static str>,
}

impl From<MilkProduction> for ProductionRow {
    fn from(record: MilkProduction) -> Self {
        Self {
            id: record.id,
            animal_id: record.animal_id,
            litros: record.quantity,
            data: record.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
            qualidade: record.quality.map(|quality| quality.label()),
        }
    }
}

#[derive(Serialize)]
struct SummaryResponse {
    animal_id: i64,
    #[serde(flatten)]
    summary: ProductionSummary,
}

/// Handle `milk production <subcommand>`.
pub async fn handle(
    action: &ProductionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    require_session(ctx, PRODUCTION_PATH)?;

    match action {
        ProductionCommands::List {
            animal,
            from,
            to,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, u32::MAX);
            let records = match (animal, from, to) {
                (Some(animal_id), _, _) => ctx.client.list_production_by_animal(*animal_id).await,
                (None, Some(start), Some(end)) => {
                    if start > end {
                        anyhow::bail!("--from ({start}) is after --to ({end})");
                    }
                    ctx.client.list_production_by_date_range(*start, *end).await
                }
                _ => ctx.client.list_production().await,
            };
            let records = api(records, "Erro ao carregar produção")?;
            let rows = take(records, limit)
                .into_iter()
                .map(ProductionRow::from)
                .collect::<Vec<_>>();
            output(&rows, flags.format)
        }
        ProductionCommands::Summary { animal_id } => {
            let summary = api(
                ctx.client.production_summary(*animal_id).await,
                "Erro ao carregar resumo de produção",
            )?;
            output(
                &SummaryResponse {
                    animal_id: *animal_id,
                    summary,
                },
                flags.format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use milk_core::entities::MilkProduction;
    use milk_core::enums::MilkQuality;
    use pretty_assertions::assert_eq;

    use super::ProductionRow;

    #[test]
    fn row_shows_quality_label_and_short_date() {
        let record = MilkProduction {
            id: 9,
            animal_id: 4,
            quantity: 18.5,
            recorded_at: Utc.with_ymd_and_hms(2025, 3, 2, 6, 30, 0).unwrap(),
            quality: Some(MilkQuality::new(8).unwrap()),
            created_at: Utc.with_ymd_and_hms(2025, 3, 2, 6, 31, 0).unwrap(),
        };
        let row = ProductionRow::from(record);
        assert_eq!(row.data, "2025-03-02 06:30");
        assert_eq!(row.qualidade, Some("8 - Muito boa"));
    }
}
