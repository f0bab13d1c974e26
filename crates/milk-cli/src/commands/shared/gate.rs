use anyhow::{Context, bail};
use milk_core::{Farm, Identity};
use milk_session::GuardOutcome;
use milk_session::guard::ACCESS_DENIED_TITLE;

use crate::context::AppContext;

/// Authenticated gate for the screen at `path`.
pub fn require_session(ctx: &AppContext, path: &str) -> anyhow::Result<Identity> {
    enforce(ctx.app.guard(path))?;
    ctx.app
        .session()
        .identity()
        .context("session closed while the command was running")
}

/// Role gate with the configured administrative roles.
pub fn require_admin(ctx: &AppContext, path: &str) -> anyhow::Result<Identity> {
    enforce(ctx.app.require_role(path, &ctx.config.general.admin_roles))?;
    ctx.app
        .session()
        .identity()
        .context("session closed while the command was running")
}

/// The active farm, or a hint on how to pick one.
pub fn active_farm(ctx: &AppContext) -> anyhow::Result<Farm> {
    ctx.app
        .resolver()
        .active_farm()
        .context("no active farm; run `milk farm list` then `milk farm select <id>`")
}

fn enforce(outcome: GuardOutcome) -> anyhow::Result<()> {
    match outcome {
        GuardOutcome::Render => Ok(()),
        GuardOutcome::Loading => bail!("session is still loading; try again"),
        GuardOutcome::Redirect { location } => {
            bail!("not logged in; run `milk auth login` (redirect: {location})")
        }
        GuardOutcome::Denied { message } => bail!("{ACCESS_DENIED_TITLE}: {message}"),
    }
}

#[cfg(test)]
mod tests {
    use milk_session::GuardOutcome;

    use super::enforce;

    #[test]
    fn render_passes() {
        assert!(enforce(GuardOutcome::Render).is_ok());
    }

    #[test]
    fn redirect_mentions_login_and_target() {
        let error = enforce(GuardOutcome::Redirect {
            location: "/login?redirect=%2Fanimais".into(),
        })
        .expect_err("redirect must fail");
        let text = error.to_string();
        assert!(text.contains("milk auth login"));
        assert!(text.contains("/login?redirect=%2Fanimais"));
    }

    #[test]
    fn denied_carries_the_message() {
        let error = enforce(GuardOutcome::Denied {
            message: "Apenas usuários com perfil ADMIN podem acessar esta área.".into(),
        })
        .expect_err("denied must fail");
        assert_eq!(
            error.to_string(),
            "Acesso Negado: Apenas usuários com perfil ADMIN podem acessar esta área."
        );
    }

    #[test]
    fn loading_never_renders() {
        assert!(enforce(GuardOutcome::Loading).is_err());
    }
}
