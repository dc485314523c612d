//! # stacksync-core
//!
//! Reconciliation core for stacksync: given a validated [`Intent`] and a
//! [`StackRegistry`] capability, decide which remote mutation (none, create,
//! update, delete) to issue and normalize the result into an [`Outcome`].
//!
//! This crate performs no I/O of its own. The registry capability is a trait
//! implemented elsewhere (see `stacksync-client` for the Portainer binding),
//! and all reporting happens at the caller's boundary — the core only returns
//! values.
//!
//! ## Overview
//!
//! The main entry point is [`reconcile`]:
//!
//! ```ignore
//! use stacksync_core::{reconcile, Intent, StackRegistry};
//!
//! async fn run(registry: &dyn StackRegistry, intent: &Intent) -> anyhow::Result<()> {
//!     let outcome = reconcile(registry, intent).await?;
//!     println!("{}", outcome.summary());
//!     Ok(())
//! }
//! ```

mod error;
mod intent;
mod reconciler;
mod registry;
mod resolver;
mod stack;

pub use error::{ReconcileError, RegistryError};
pub use intent::{ActionKind, GitAuth, GitRepository, Intent};
pub use reconciler::{Outcome, delete, list, reconcile, upsert};
pub use registry::{CreateFromGitPayload, GitRedeployPayload, MutationStatus, StackRegistry};
pub use resolver::find_stack;
pub use stack::{ListFilter, Stack, StackSummary};

/// Type alias for a reconciliation result.
pub type ReconcileResult<T> = Result<T, ReconcileError>;

#[cfg(test)]
pub(crate) mod testing;
