#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "taskclass-cli", version, about = "TaskClass API command-line client")]
pub struct Cli {
    /// Base URL of the TaskClass API.
    #[arg(long = "api-url", env = "TASKCLASS_API_URL", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Bearer token for privileged calls.
    #[arg(long, env = "TASKCLASS_TOKEN", global = true)]
    pub token: Option<String>,

    /// Read the bearer token from a file instead.
    #[arg(long = "token-file", value_name = "PATH", global = true)]
    pub token_file: Option<PathBuf>,

    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "TASKCLASS_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Authentication operations.
    Auth(AuthCmd),
    /// Manage class activity posts.
    Posts(PostsCmd),
    /// Manage teacher accounts.
    Teachers(TeachersCmd),
    /// Manage student accounts.
    Students(StudentsCmd),
    /// Interactively page through a resource list.
    Browse(BrowseCmd),
}

#[derive(Debug, Args)]
pub struct AuthCmd {
    #[command(subcommand)]
    pub action: AuthAction,
}

#[derive(Debug, Subcommand)]
pub enum AuthAction {
    /// Exchange credentials for an access token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
}

#[derive(Debug, Args)]
pub struct PostsCmd {
    #[command(subcommand)]
    pub action: PostsAction,
}

#[derive(Debug, Subcommand)]
pub enum PostsAction {
    /// List one page of posts.
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Full-text search across posts.
    Search { search: String },
    /// Fetch a single post.
    Get { id: String },
    /// Create a post.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        body: Option<String>,
        #[arg(long = "body-file", value_name = "PATH")]
        body_file: Option<PathBuf>,
        #[arg(long)]
        author: String,
        #[arg(long)]
        discipline: Option<String>,
        #[arg(long = "class-group")]
        class_group: Option<String>,
    },
    /// Update fields of a post.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        body: Option<String>,
        #[arg(long = "body-file", value_name = "PATH")]
        body_file: Option<PathBuf>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        discipline: Option<String>,
        #[arg(long = "class-group")]
        class_group: Option<String>,
    },
    /// Delete a post.
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct TeachersCmd {
    #[command(subcommand)]
    pub action: AccountAction,
}

#[derive(Debug, Args)]
pub struct StudentsCmd {
    #[command(subcommand)]
    pub action: AccountAction,
}

/// Teacher and student accounts share one command shape.
#[derive(Debug, Subcommand)]
pub enum AccountAction {
    /// List one page of accounts.
    List {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Create an account.
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Update an account.
    Update {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// Delete an account.
    Delete { id: String },
}

#[derive(Debug, Args)]
pub struct BrowseCmd {
    /// Which resource list to browse.
    #[arg(value_enum)]
    pub resource: BrowseResource,

    /// Sign in before browsing (enables delete for admin sessions).
    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BrowseResource {
    Posts,
    Teachers,
    Students,
}
