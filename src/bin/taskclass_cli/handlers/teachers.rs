#![deny(clippy::all, clippy::pedantic)]

use taskclass::infra::api::TeachersApi;
use taskclass_api_types::{AccountCreateRequest, AccountUpdateRequest};

use crate::args::AccountAction;
use crate::context::{CliContext, CliError};
use crate::print::print_json;

pub async fn handle(ctx: &CliContext, cmd: AccountAction) -> Result<(), CliError> {
    let api = TeachersApi::new(ctx.client.clone());
    match cmd {
        AccountAction::List { limit, page } => {
            let accounts = api.list(limit, page).await?;
            print_json(&accounts)?;
        }
        AccountAction::Create { email, password } => {
            let teacher = api
                .create(&AccountCreateRequest { email, password })
                .await?;
            print_json(&teacher)?;
        }
        AccountAction::Update { id, email, password } => {
            let teacher = api
                .update(&id, &AccountUpdateRequest { email, password })
                .await?;
            print_json(&teacher)?;
        }
        AccountAction::Delete { id } => {
            api.delete(&id).await?;
            println!("deleted");
        }
    }
    Ok(())
}
