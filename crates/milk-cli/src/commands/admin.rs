use milk_core::Role;
use milk_core::entities::User;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::AdminCommands;
use crate::commands::shared::api::api;
use crate::commands::shared::gate::require_admin;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

const ADMIN_USERS_PATH: &str = "/admin/usuarios";

#[derive(Serialize)]
struct UserRow {
    id: i64,
    nome: String,
    email: String,
    perfil: Role,
    ativo: bool,
}

impl From<User> for UserRow {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            nome: user.name,
            email: user.email,
            perfil: user.role,
            ativo: user.enabled,
        }
    }
}

#[derive(Serialize)]
struct UserPageResponse {
    total: i64,
    offset: u32,
    limit: u32,
    users: Vec<UserRow>,
}

/// Handle `milk admin <subcommand>`. Gated on the configured admin roles.
pub async fn handle(action: &AdminCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    require_admin(ctx, ADMIN_USERS_PATH)?;

    match action {
        AdminCommands::Users { offset, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let page = api(
                ctx.client.list_users(limit, *offset).await,
                "Erro ao carregar usuários",
            )?;
            let users = page.users.into_iter().map(UserRow::from).collect::<Vec<_>>();
            // Tables only show the rows; json keeps the paging envelope.
            if flags.format == OutputFormat::Table {
                return output(&users, flags.format);
            }
            output(
                &UserPageResponse {
                    total: page.total,
                    offset: *offset,
                    limit,
                    users,
                },
                flags.format,
            )
        }
        AdminCommands::ToggleUser { id } => {
            let user = api(
                ctx.client.toggle_user_enabled(*id).await,
                "Erro ao alterar status do usuário",
            )?;
            tracing::debug!(user_id = user.id, enabled = user.enabled, "user toggled");
            output(&UserRow::from(user), flags.format)
        }
    }
}
