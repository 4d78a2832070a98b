#![deny(clippy::all, clippy::pedantic)]

use std::fs;

use thiserror::Error;

use taskclass::application::lists::SourceError;
use taskclass::config::{self, ConfigError, Settings};
use taskclass::infra::api::{ApiClient, ApiError};
use taskclass::infra::error::InfraError;

use crate::args::Cli;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error("failed to read token file: {0}")]
    TokenFile(std::io::Error),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Resolved settings plus the shared API request context.
#[derive(Clone, Debug)]
pub struct CliContext {
    pub settings: Settings,
    pub client: ApiClient,
}

pub fn build_context(cli: &Cli) -> Result<CliContext, CliError> {
    let mut settings = match &cli.config_file {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    if let Some(url) = &cli.api_url {
        settings.api.base_url.clone_from(url);
    }

    let mut client = ApiClient::new(&settings.api)?;
    if let Some(token) = resolve_token(cli)? {
        client = client.with_token(token);
    }

    Ok(CliContext { settings, client })
}

/// A token file wins over an inline token or the environment.
fn resolve_token(cli: &Cli) -> Result<Option<String>, CliError> {
    if let Some(path) = &cli.token_file {
        let token = fs::read_to_string(path).map_err(CliError::TokenFile)?;
        return Ok(Some(token.trim().to_string()));
    }
    Ok(cli.token.clone())
}
