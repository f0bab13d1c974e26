use milk_core::{Farm, Role};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    authenticated: bool,
    email: Option<String>,
    role: Option<Role>,
    name: Option<String>,
    active_farm: Option<Farm>,
    api: String,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let identity = ctx.app.session().identity();
    let status = AuthStatusResponse {
        authenticated: identity.is_some(),
        email: identity.as_ref().map(|i| i.email.clone()),
        role: identity.as_ref().map(|i| i.role),
        name: identity.map(|i| i.display_name).filter(|name| !name.is_empty()),
        active_farm: ctx.app.resolver().active_farm(),
        api: ctx.client.origin().to_string(),
    };
    output(&status, flags.format)
}
