//! The reconciler: turn an intent plus the resolved remote state into exactly
//! one registry mutation (or none, for list), and normalize the result.

use crate::ReconcileResult;
use crate::error::ReconcileError;
use crate::intent::{ActionKind, GitRepository, Intent};
use crate::registry::{CreateFromGitPayload, GitRedeployPayload, MutationStatus, StackRegistry};
use crate::resolver::find_stack;
use crate::stack::{ListFilter, StackSummary};

/// Normalized result of one reconciliation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The `{Id, Name}` projection of every stack on the target endpoint,
    /// in registry response order.
    Listed { stacks: Vec<StackSummary> },
    Created { status: MutationStatus },
    Updated { status: MutationStatus },
    Deleted { status: MutationStatus },
}

impl Outcome {
    /// One-line human-readable summary for the invoking environment.
    pub fn summary(&self) -> String {
        match self {
            Self::Listed { stacks } => format!("Listed {} stack(s)", stacks.len()),
            Self::Created { status } => format!("Create result: {status}"),
            Self::Updated { status } => format!("Update result: {status}"),
            Self::Deleted { status } => format!("Delete result: {status}"),
        }
    }
}

/// Lists the stacks on `endpoint_id`.
///
/// Read-only: never issues a mutation regardless of registry content. The
/// endpoint filter is passed server-side as a hint, but the result is always
/// re-filtered client-side before projection.
///
/// # Errors
///
/// Fails only if the registry read itself fails.
pub async fn list(registry: &dyn StackRegistry, endpoint_id: i64) -> ReconcileResult<Outcome> {
    let stacks = registry
        .list(Some(&ListFilter::endpoint(endpoint_id)))
        .await?;
    let stacks = stacks
        .iter()
        .filter(|s| s.endpoint_id == endpoint_id)
        .map(|s| s.summary())
        .collect();
    Ok(Outcome::Listed { stacks })
}

/// Creates or updates the stack named `stack_name` on `endpoint_id`.
///
/// Resolution decides the path: no existing stack means create from the Git
/// repository, an existing stack means redeploy. An update never re-sends the
/// name, compose file path, or repository URL — the registry already knows
/// the repository binding from creation time.
///
/// # Errors
///
/// `MissingProp` when `stack_name`, the repository URL, or the compose file
/// path is absent (checked in that order, before any network call);
/// `MalformedStack` when the resolved record has no identifier; registry
/// failures propagate as-is.
pub async fn upsert(
    registry: &dyn StackRegistry,
    endpoint_id: i64,
    stack_name: Option<&str>,
    compose_file_path: Option<&str>,
    repository: &GitRepository,
) -> ReconcileResult<Outcome> {
    let Some(stack_name) = stack_name else {
        return Err(ReconcileError::missing_prop("stack-name"));
    };
    let Some(repo_url) = repository.url.as_deref() else {
        return Err(ReconcileError::missing_prop("repo-url"));
    };
    let Some(compose_file_path) = compose_file_path else {
        return Err(ReconcileError::missing_prop("repo-compose-file-path"));
    };

    match find_stack(registry, endpoint_id, stack_name).await? {
        Some(existing) => {
            let Some(stack_id) = existing.id else {
                return Err(ReconcileError::malformed_stack(endpoint_id, stack_name));
            };
            let payload = GitRedeployPayload::new(repository.auth.as_ref());
            let status = registry
                .git_redeploy(stack_id, &payload, endpoint_id)
                .await?;
            Ok(Outcome::Updated { status })
        }
        None => {
            let payload = CreateFromGitPayload::new(
                stack_name,
                compose_file_path,
                repo_url,
                repository.auth.as_ref(),
            );
            let status = registry.create_from_git(endpoint_id, &payload).await?;
            Ok(Outcome::Created { status })
        }
    }
}

/// Deletes the stack named `stack_name` on `endpoint_id`.
///
/// # Errors
///
/// `MissingProp` when `stack_name` is absent; `StackNotFound` when no such
/// stack exists (deleting something that provably does not exist is an
/// error, unlike upsert's create path); `MalformedStack` when the resolved
/// record has no identifier. No mutation is issued in any failure case.
pub async fn delete(
    registry: &dyn StackRegistry,
    endpoint_id: i64,
    stack_name: Option<&str>,
) -> ReconcileResult<Outcome> {
    let Some(stack_name) = stack_name else {
        return Err(ReconcileError::missing_prop("stack-name"));
    };

    match find_stack(registry, endpoint_id, stack_name).await? {
        None => Err(ReconcileError::stack_not_found(endpoint_id, stack_name)),
        Some(existing) => {
            let Some(stack_id) = existing.id else {
                return Err(ReconcileError::malformed_stack(endpoint_id, stack_name));
            };
            let status = registry.delete(stack_id, endpoint_id).await?;
            Ok(Outcome::Deleted { status })
        }
    }
}

/// Dispatches one intent to the matching operation.
///
/// The match is exhaustive over [`ActionKind`], so adding an action without
/// wiring it up here fails to compile.
pub async fn reconcile(
    registry: &dyn StackRegistry,
    intent: &Intent,
) -> ReconcileResult<Outcome> {
    match intent.action {
        ActionKind::List => list(registry, intent.endpoint_id).await,
        ActionKind::Upsert => {
            upsert(
                registry,
                intent.endpoint_id,
                intent.stack_name.as_deref(),
                intent.compose_file_path.as_deref(),
                &intent.repository,
            )
            .await
        }
        ActionKind::Delete => {
            delete(registry, intent.endpoint_id, intent.stack_name.as_deref()).await
        }
    }
}
