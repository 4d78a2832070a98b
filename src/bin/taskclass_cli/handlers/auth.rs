#![deny(clippy::all, clippy::pedantic)]

use serde_json::json;
use taskclass::infra::api::AuthApi;

use crate::args::AuthAction;
use crate::context::{CliContext, CliError};
use crate::print::print_json;

pub async fn handle(ctx: &CliContext, cmd: AuthAction) -> Result<(), CliError> {
    match cmd {
        AuthAction::Login { email, password } => login(ctx, &email, &password).await,
    }
}

async fn login(ctx: &CliContext, email: &str, password: &str) -> Result<(), CliError> {
    let session = AuthApi::new(ctx.client.clone()).login(email, password).await?;
    let role = session.role().map(taskclass::domain::Role::as_str);
    print_json(&json!({
        "access_token": session.token(),
        "role": role,
    }))?;
    Ok(())
}
