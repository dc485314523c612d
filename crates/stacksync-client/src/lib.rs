//! # stacksync-client
//!
//! The Portainer CE binding of the [`StackRegistry`] capability: a thin
//! reqwest client that attaches the static `X-API-Key` header to every call
//! and speaks the `/api/stacks` routes. All retry, recovery, and reporting
//! policy lives with the caller; failures map onto
//! [`RegistryError`](stacksync_core::RegistryError) and propagate unchanged.
//!
//! [`StackRegistry`]: stacksync_core::StackRegistry

mod client;

pub use client::PortainerClient;
