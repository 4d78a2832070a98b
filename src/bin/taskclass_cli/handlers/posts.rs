#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use taskclass::infra::api::PostsApi;
use taskclass_api_types::{PostCreateRequest, PostUpdateRequest};

use crate::args::PostsAction;
use crate::context::{CliContext, CliError};
use crate::io::{read_opt_value, read_value};
use crate::print::print_json;

pub async fn handle(ctx: &CliContext, cmd: PostsAction) -> Result<(), CliError> {
    let api = PostsApi::new(ctx.client.clone());
    match cmd {
        PostsAction::List { limit, page } => list(&api, limit, page).await,
        PostsAction::Search { search } => search_posts(&api, &search).await,
        PostsAction::Get { id } => get(&api, &id).await,
        PostsAction::Create {
            title,
            body,
            body_file,
            author,
            discipline,
            class_group,
        } => {
            let input = PostCreateInput {
                title,
                body,
                body_file,
                author,
                discipline,
                class_group,
            };
            create(&api, input).await
        }
        PostsAction::Update {
            id,
            title,
            body,
            body_file,
            author,
            discipline,
            class_group,
        } => {
            let input = PostUpdateInput {
                id,
                title,
                body,
                body_file,
                author,
                discipline,
                class_group,
            };
            update(&api, input).await
        }
        PostsAction::Delete { id } => delete(&api, &id).await,
    }
}

struct PostCreateInput {
    title: String,
    body: Option<String>,
    body_file: Option<PathBuf>,
    author: String,
    discipline: Option<String>,
    class_group: Option<String>,
}

struct PostUpdateInput {
    id: String,
    title: Option<String>,
    body: Option<String>,
    body_file: Option<PathBuf>,
    author: Option<String>,
    discipline: Option<String>,
    class_group: Option<String>,
}

async fn list(api: &PostsApi, limit: u32, page: u32) -> Result<(), CliError> {
    let posts = api.list(limit, page).await?;
    print_json(&posts)?;
    Ok(())
}

async fn search_posts(api: &PostsApi, term: &str) -> Result<(), CliError> {
    let posts = api.search(term).await?;
    print_json(&posts)?;
    Ok(())
}

async fn get(api: &PostsApi, id: &str) -> Result<(), CliError> {
    let post = api.find(id).await?;
    print_json(&post)?;
    Ok(())
}

async fn create(api: &PostsApi, input: PostCreateInput) -> Result<(), CliError> {
    let PostCreateInput {
        title,
        body,
        body_file,
        author,
        discipline,
        class_group,
    } = input;

    let body = read_value(body, body_file)?;
    let payload = PostCreateRequest {
        title,
        body,
        author,
        discipline,
        class_group,
    };
    let post = api.create(&payload).await?;
    print_json(&post)?;
    Ok(())
}

async fn update(api: &PostsApi, input: PostUpdateInput) -> Result<(), CliError> {
    let PostUpdateInput {
        id,
        title,
        body,
        body_file,
        author,
        discipline,
        class_group,
    } = input;

    let body = read_opt_value(body, body_file)?;
    let payload = PostUpdateRequest {
        title,
        body,
        author,
        discipline,
        class_group,
    };
    let post = api.update(&id, &payload).await?;
    print_json(&post)?;
    Ok(())
}

async fn delete(api: &PostsApi, id: &str) -> Result<(), CliError> {
    api.delete(id).await?;
    println!("deleted");
    Ok(())
}
