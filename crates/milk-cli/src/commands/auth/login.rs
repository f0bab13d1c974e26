use milk_core::{Farm, Role};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::auth::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LoginResponse {
    authenticated: bool,
    email: String,
    role: Role,
    name: String,
    active_farm: Option<Farm>,
}

pub async fn handle(args: &AuthLoginArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx
        .app
        .login(args.email.trim(), &args.password)
        .await
        .map_err(|error| {
            let message = error.user_message("Erro ao fazer login");
            anyhow::Error::new(error).context(message)
        })?;

    tracing::debug!(email = %identity.email, role = %identity.role, "logged in");

    output(
        &LoginResponse {
            authenticated: true,
            email: identity.email,
            role: identity.role,
            name: identity.display_name,
            active_farm: ctx.app.resolver().active_farm(),
        },
        flags.format,
    )
}
