use clap::{Parser, Subcommand};

use stacksync_core::{GitRepository, Intent};

#[derive(Parser)]
#[command(name = "stacksync")]
#[command(about = "Reconcile a Portainer stack against its Git source of truth")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Portainer host URL (e.g. https://portainer.example.com:9443)
    #[arg(long, global = true, env = "STACKSYNC_HOST")]
    pub host: Option<String>,

    /// Portainer API key
    #[arg(long, global = true, env = "STACKSYNC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Id of the target endpoint (execution environment)
    #[arg(long, global = true, env = "STACKSYNC_ENDPOINT_ID")]
    pub endpoint_id: Option<i64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the stacks on the target endpoint
    List,
    /// Create the stack if it does not exist, otherwise redeploy it
    Upsert(UpsertArgs),
    /// Delete the stack
    Delete(DeleteArgs),
}

#[derive(clap::Args)]
pub struct UpsertArgs {
    /// Name of the stack
    #[arg(long, env = "STACKSYNC_STACK_NAME")]
    pub stack_name: String,

    /// Path of the compose file within the source repository
    #[arg(long, env = "STACKSYNC_COMPOSE_FILE_PATH")]
    pub compose_file_path: String,

    /// URL of the Git repository holding the compose specification
    #[arg(long, env = "STACKSYNC_REPO_URL")]
    pub repo_url: String,

    /// Username for the Git repository
    #[arg(long, env = "STACKSYNC_REPO_USERNAME")]
    pub repo_username: Option<String>,

    /// Password or token for the Git repository
    #[arg(long, env = "STACKSYNC_REPO_PASSWORD", hide_env_values = true)]
    pub repo_password: Option<String>,
}

#[derive(clap::Args)]
pub struct DeleteArgs {
    /// Name of the stack
    #[arg(long, env = "STACKSYNC_STACK_NAME")]
    pub stack_name: String,
}

impl Commands {
    /// Builds the immutable per-run intent.
    ///
    /// Credentials are taken as a unit: a username without a password (or the
    /// reverse) counts as no credentials at all, so a partial pair never
    /// reaches the wire.
    pub fn into_intent(self, endpoint_id: i64) -> Intent {
        match self {
            Self::List => Intent::list(endpoint_id),
            Self::Upsert(args) => {
                let mut repository = GitRepository::new(args.repo_url);
                if let (Some(username), Some(password)) = (args.repo_username, args.repo_password)
                {
                    repository = repository.with_auth(username, password);
                }
                Intent::upsert(
                    endpoint_id,
                    args.stack_name,
                    args.compose_file_path,
                    repository,
                )
            }
            Self::Delete(args) => Intent::delete(endpoint_id, args.stack_name),
        }
    }
}
