use serde::{Deserialize, Serialize};

/// The declarative action verb for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    List,
    Upsert,
    Delete,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Upsert => "upsert",
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credentials for the Git source repository. Present as a unit or not at
/// all; a lone username or password is treated as no credentials upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitAuth {
    pub username: String,
    pub password: String,
}

/// The Git repository the deployed compose specification comes from.
///
/// `url` is optional in the type because only upsert requires it; the
/// reconciler enforces presence where it matters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GitRepository {
    pub url: Option<String>,
    pub auth: Option<GitAuth>,
}

impl GitRepository {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            auth: None,
        }
    }

    pub fn with_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.auth = Some(GitAuth {
            username: username.into(),
            password: password.into(),
        });
        self
    }
}

/// One run's validated, immutable intent.
///
/// Built once from external configuration before the core runs. Fields that
/// only some actions need stay optional here; each operation checks its own
/// preconditions and fails with [`ReconcileError::MissingProp`] before any
/// network call when one is violated.
///
/// [`ReconcileError::MissingProp`]: crate::ReconcileError::MissingProp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Intent {
    pub action: ActionKind,
    pub endpoint_id: i64,
    pub stack_name: Option<String>,
    pub compose_file_path: Option<String>,
    pub repository: GitRepository,
}

impl Intent {
    pub fn list(endpoint_id: i64) -> Self {
        Self {
            action: ActionKind::List,
            endpoint_id,
            stack_name: None,
            compose_file_path: None,
            repository: GitRepository::default(),
        }
    }

    pub fn upsert(
        endpoint_id: i64,
        stack_name: impl Into<String>,
        compose_file_path: impl Into<String>,
        repository: GitRepository,
    ) -> Self {
        Self {
            action: ActionKind::Upsert,
            endpoint_id,
            stack_name: Some(stack_name.into()),
            compose_file_path: Some(compose_file_path.into()),
            repository,
        }
    }

    pub fn delete(endpoint_id: i64, stack_name: impl Into<String>) -> Self {
        Self {
            action: ActionKind::Delete,
            endpoint_id,
            stack_name: Some(stack_name.into()),
            compose_file_path: None,
            repository: GitRepository::default(),
        }
    }
}
