//! permctl - inspect account-level permission decisions
//!
//! Loads account domains and custom roles from configuration and answers
//! permission questions from the command line.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use missions_permissions::config::{Config, load_requests};
use missions_permissions::utils::logging::init_logging;
use missions_permissions::{
    PermissionAction, PermissionEvaluator, PermissionResource, PermissionedUser, PermissionsError,
    UserType,
};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config/permissions.yaml";

/// Inspect account-level permission decisions
#[derive(Parser, Debug)]
#[command(name = "permctl")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Configuration file (defaults to config/permissions.yaml when present)
    #[arg(short, long, global = true, env = "PERMISSIONS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

/// The user a question is asked about
#[derive(Args, Debug)]
struct UserArgs {
    /// Base user type: account_admin, member, viewer or guest
    #[arg(long)]
    user_type: UserType,

    /// Name of a configured custom role
    #[arg(long)]
    role: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a single action; exits with 1 when denied
    Check {
        #[command(flatten)]
        user: UserArgs,

        /// Resource ID, carried through for resource-scoped callers
        #[arg(long)]
        resource_id: Option<String>,

        /// Action, e.g. create or manage_users
        action: String,

        /// Resource, e.g. board or workspace
        resource: String,
    },
    /// Check every request listed in a JSON or YAML file
    Batch {
        #[command(flatten)]
        user: UserArgs,

        /// File holding a list of `{action, resource, resourceId?}` entries
        #[arg(long)]
        file: PathBuf,
    },
    /// Print the effective permission tree
    Effective {
        #[command(flatten)]
        user: UserArgs,
    },
    /// Print a human-readable capability summary
    Capabilities {
        #[command(flatten)]
        user: UserArgs,
    },
    /// Whether an email address may be invited as a guest
    Guest {
        /// Email address to check
        email: String,
    },
    /// List the configured custom roles
    Roles,
    /// Compare two user types: 1, 0 or -1
    Compare { a: UserType, b: UserType },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref()).await?;
    init_logging(&config.permissions.logging).context("Failed to set up logging")?;

    let evaluator = PermissionEvaluator::from_config(&config.permissions);

    match cli.command {
        Command::Check {
            user,
            resource_id,
            action,
            resource,
        } => {
            let user = resolve_user(&evaluator, &user)?;
            let result = evaluator.can_user(
                &user,
                &PermissionAction::from(action),
                &PermissionResource::from(resource),
                resource_id.as_deref(),
            );
            println!("{}", serde_json::to_string_pretty(&result)?);
            if !result.allowed {
                return Ok(ExitCode::from(1));
            }
        }
        Command::Batch { user, file } => {
            let user = resolve_user(&evaluator, &user)?;
            let requests = load_requests(&file)
                .await
                .with_context(|| format!("Failed to load requests from {}", file.display()))?;
            let results: BTreeMap<_, _> = evaluator
                .can_user_multiple(&user, &requests)
                .into_iter()
                .collect();
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Effective { user } => {
            let user = resolve_user(&evaluator, &user)?;
            let permissions = evaluator.get_effective_account_permissions(&user);
            println!("{}", serde_json::to_string_pretty(&permissions)?);
        }
        Command::Capabilities { user } => {
            let user = resolve_user(&evaluator, &user)?;
            for capability in evaluator.get_user_capabilities_description(&user) {
                println!("{}", capability);
            }
        }
        Command::Guest { email } => {
            let domains = config.permissions.account_domains.as_slice();
            println!("{}", evaluator.can_be_guest(&email, domains));
        }
        Command::Roles => {
            println!(
                "{}",
                serde_json::to_string_pretty(&evaluator.get_all_custom_roles())?
            );
        }
        Command::Compare { a, b } => {
            println!("{}", evaluator.compare_user_types(a, b));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Explicit path, then the default file when it exists, then defaults;
/// environment overrides apply on top of all three
async fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    let config = match path {
        Some(path) => Config::from_file(path).await?,
        None if tokio::fs::try_exists(default_path).await.unwrap_or(false) => {
            Config::from_file(default_path).await?
        }
        None => Config::default(),
    };

    Ok(config.with_env_overrides(|key| std::env::var(key).ok())?)
}

/// Attach the named custom role, if any, to the user
fn resolve_user(
    evaluator: &PermissionEvaluator,
    args: &UserArgs,
) -> anyhow::Result<PermissionedUser> {
    let mut user = PermissionedUser::new(args.user_type);

    if let Some(name) = &args.role {
        let role = evaluator
            .find_custom_role(name)
            .ok_or_else(|| PermissionsError::not_found(format!("Custom role not found: {}", name)))?;
        debug!(role = %role.name, id = %role.id, "Resolved custom role");
        user = user.with_custom_role(role.id);
    }

    Ok(user)
}
