use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    logged_out: bool,
    /// Set when the server call failed; the local session and its saved
    /// cookies are gone regardless.
    note: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let note = ctx
        .app
        .logout()
        .await
        .err()
        .map(|error| error.user_message("Erro ao encerrar a sessão no servidor"));

    output(
        &LogoutResponse {
            logged_out: true,
            note,
        },
        flags.format,
    )
}
