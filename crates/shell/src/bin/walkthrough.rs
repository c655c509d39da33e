//! Scripted session against the shell, logging every snapshot.
//!
//! Takes no arguments. Set `RUST_LOG=debug` to see ignored intents and
//! navigation fallbacks.

use ewaste_auth::{LoginCredentials, Role};
use ewaste_shell::{Dispatch, Intent, ShellConfig, ShellController};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    ewaste_observability::init();

    let config = ShellConfig::from_json_str(r#"{ "submit_delay_ms": 300 }"#)?;
    let mut shell = ShellController::new(&config);
    shell.subscribe(|snapshot| match serde_json::to_string(snapshot) {
        Ok(json) => tracing::info!(snapshot = %json, "shell changed"),
        Err(error) => tracing::warn!(%error, "snapshot not serializable"),
    });

    let _ = shell.on_get_started();

    if let Dispatch::Rejected(error) =
        shell.dispatch(Intent::SubmitLogin(LoginCredentials::new("a@b.com", "")))
    {
        tracing::info!(%error, "first attempt rejected");
    }

    let _ = shell.dispatch(Intent::SelectRole(Role::RecyclingCenter));
    if let Dispatch::Submitted(submission_id) =
        shell.dispatch(Intent::SubmitLogin(LoginCredentials::new("a@b.com", "secret")))
    {
        tracing::info!(%submission_id, "waiting for authentication");
        let _ = shell.resolve_pending().await;
    }

    let _ = shell.dispatch(Intent::ChangeTab("pickups".into()));
    let _ = shell.dispatch(Intent::ChangeTab("bogus".into()));
    let _ = shell.dispatch(Intent::Logout);

    for notice in shell.take_notices() {
        tracing::info!(level = ?notice.level, message = %notice.message, "notice");
    }

    Ok(())
}
