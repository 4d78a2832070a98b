//! Interactive list mode: a terminal front end for the list synchronizer.
#![deny(clippy::all, clippy::pedantic)]

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, BufReader};

use taskclass::application::lists::{ListController, ListOptions, ListSnapshot, ResourceSource};
use taskclass::application::session::Session;
use taskclass::domain::ListEntry;
use taskclass::infra::api::{ApiClient, AuthApi, PostsApi, StudentsApi, TeachersApi};

use crate::args::{BrowseCmd, BrowseResource};
use crate::context::{CliContext, CliError};

pub async fn run(ctx: &CliContext, cmd: BrowseCmd) -> Result<(), CliError> {
    let session = match (&cmd.email, &cmd.password) {
        (Some(email), Some(password)) => {
            AuthApi::new(ctx.client.clone())
                .login(email, password)
                .await?
        }
        _ => Session::anonymous(),
    };

    let client = client_for(&session, ctx);
    let options = ListOptions {
        page_size: ctx.settings.lists.page_size,
        search_quiescence: ctx.settings.lists.search_quiescence(),
    };

    match cmd.resource {
        BrowseResource::Posts => {
            // Delete is withheld from non-admin sessions at the UI level
            // only; the remote independently rejects unauthorized calls.
            let can_delete = session.can_manage_posts();
            browse(PostsApi::new(client), can_delete, options, |post| {
                format!("{}  {}  {}", post.id, post.title, post.snippet(60))
            })
            .await
        }
        BrowseResource::Teachers => {
            require_admin(&session)?;
            browse(TeachersApi::new(client), true, options, |teacher| {
                format!("{}  {}", teacher.id, teacher.email)
            })
            .await
        }
        BrowseResource::Students => {
            require_admin(&session)?;
            browse(StudentsApi::new(client), true, options, |student| {
                format!("{}  {}", student.id, student.email)
            })
            .await
        }
    }
}

fn client_for(session: &Session, ctx: &CliContext) -> ApiClient {
    match session.token() {
        Some(token) => ctx.client.clone().with_token(token),
        None => ctx.client.clone(),
    }
}

fn require_admin(session: &Session) -> Result<(), CliError> {
    if session.can_manage_accounts() {
        return Ok(());
    }
    Err(CliError::InvalidInput(
        "managing accounts requires an admin session (--email/--password)".into(),
    ))
}

async fn browse<S>(
    source: S,
    can_delete: bool,
    options: ListOptions,
    render: fn(&S::Item) -> String,
) -> Result<(), CliError>
where
    S: ResourceSource + 'static,
{
    let quiescence = options.search_quiescence;
    let controller = ListController::new(source, options);
    controller.refresh().await;
    print_page(&controller.snapshot(), render);
    println!("enter = load more, /term = search, / = clear search, d <id> = delete, q = quit");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines
        .next_line()
        .await
        .map_err(|e| CliError::InvalidInput(e.to_string()))?
    {
        let line = line.trim();
        if line == "q" {
            break;
        }

        if line.is_empty() {
            controller.trigger_load_more().await;
        } else if let Some(term) = line.strip_prefix('/') {
            controller.set_search_query(term);
            // Give the quiescence timer room to fire before re-rendering.
            tokio::time::sleep(quiescence + Duration::from_millis(100)).await;
        } else if let Some(id) = line.strip_prefix("d ") {
            if can_delete {
                match controller.request_delete(id.trim()).await {
                    Ok(()) => println!("deleted {id}"),
                    Err(err) => println!("delete failed: {err}"),
                }
            } else {
                println!("delete requires an admin session");
            }
        } else {
            println!("unrecognized input: {line}");
        }

        print_page(&controller.snapshot(), render);
    }

    Ok(())
}

fn print_page<T: ListEntry>(snapshot: &ListSnapshot<T>, render: fn(&T) -> String) {
    if snapshot.is_loading_initial || snapshot.is_loading_more {
        println!("(loading…)");
    }
    if let Some(error) = &snapshot.last_error {
        println!("error: {error}");
    }
    if snapshot.items.is_empty() {
        println!("(no items)");
        return;
    }
    for item in &snapshot.items {
        println!("{}", render(item));
    }
    println!(
        "[page {}, {} item(s) loaded]",
        snapshot.current_page,
        snapshot.items.len()
    );
}
