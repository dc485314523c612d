//! Test double for the registry capability: serves a scripted listing and
//! records every call it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::RegistryError;
use crate::registry::{CreateFromGitPayload, GitRedeployPayload, MutationStatus, StackRegistry};
use crate::stack::{ListFilter, Stack};

#[derive(Debug, Clone, PartialEq)]
pub enum MutationCall {
    Create {
        endpoint_id: i64,
        payload: CreateFromGitPayload,
    },
    Redeploy {
        stack_id: i64,
        endpoint_id: i64,
        payload: GitRedeployPayload,
    },
    Delete {
        stack_id: i64,
        endpoint_id: i64,
    },
}

pub struct RecordingRegistry {
    stacks: Vec<Stack>,
    mutation_status: MutationStatus,
    // Consumed by the first list call.
    list_error: Mutex<Option<RegistryError>>,
    list_filters: Mutex<Vec<Option<ListFilter>>>,
    mutations: Mutex<Vec<MutationCall>>,
}

impl RecordingRegistry {
    pub fn with_stacks(stacks: Vec<Stack>) -> Self {
        Self {
            stacks,
            mutation_status: MutationStatus::new(200),
            list_error: Mutex::new(None),
            list_filters: Mutex::new(Vec::new()),
            mutations: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_list(err: RegistryError) -> Self {
        let registry = Self::with_stacks(Vec::new());
        *registry.list_error.lock().unwrap() = Some(err);
        registry
    }

    pub fn list_filters(&self) -> Vec<Option<ListFilter>> {
        self.list_filters.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_filters.lock().unwrap().len()
    }

    pub fn mutations(&self) -> Vec<MutationCall> {
        self.mutations.lock().unwrap().clone()
    }
}

#[async_trait]
impl StackRegistry for RecordingRegistry {
    async fn list(&self, filter: Option<&ListFilter>) -> Result<Vec<Stack>, RegistryError> {
        self.list_filters.lock().unwrap().push(filter.copied());
        if let Some(err) = self.list_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(self.stacks.clone())
    }

    async fn create_from_git(
        &self,
        endpoint_id: i64,
        payload: &CreateFromGitPayload,
    ) -> Result<MutationStatus, RegistryError> {
        self.mutations.lock().unwrap().push(MutationCall::Create {
            endpoint_id,
            payload: payload.clone(),
        });
        Ok(self.mutation_status)
    }

    async fn git_redeploy(
        &self,
        stack_id: i64,
        payload: &GitRedeployPayload,
        endpoint_id: i64,
    ) -> Result<MutationStatus, RegistryError> {
        self.mutations.lock().unwrap().push(MutationCall::Redeploy {
            stack_id,
            endpoint_id,
            payload: payload.clone(),
        });
        Ok(self.mutation_status)
    }

    async fn delete(
        &self,
        stack_id: i64,
        endpoint_id: i64,
    ) -> Result<MutationStatus, RegistryError> {
        self.mutations.lock().unwrap().push(MutationCall::Delete {
            stack_id,
            endpoint_id,
        });
        Ok(self.mutation_status)
    }
}
