use serde::{Deserialize, Serialize};

/// A stack record as the control plane reports it.
///
/// The registry owns these; the core only ever fetches and inspects them.
/// `id` is optional because the remote has been observed to return records
/// without one — such a record can still be matched by name but can never be
/// the target of a mutation (see [`ReconcileError::MalformedStack`]).
///
/// [`ReconcileError::MalformedStack`]: crate::ReconcileError::MalformedStack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "EndpointId")]
    pub endpoint_id: i64,
}

impl Stack {
    pub fn new(id: Option<i64>, name: impl Into<String>, endpoint_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            endpoint_id,
        }
    }

    /// The `{Id, Name}` projection used for list output.
    pub fn summary(&self) -> StackSummary {
        StackSummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// List-output projection of a [`Stack`].
///
/// `Id` is omitted entirely when the source record carried none, so consumers
/// never see an explicit null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSummary {
    #[serde(rename = "Id", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "Name")]
    pub name: String,
}

/// Server-side list filter, serialized into the registry's `filters`
/// query parameter as `{"EndpointId": n}`.
///
/// Purely a performance hint: filter semantics vary across remote API
/// versions, so every caller re-filters the result client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ListFilter {
    #[serde(rename = "EndpointId")]
    pub endpoint_id: i64,
}

impl ListFilter {
    pub fn endpoint(endpoint_id: i64) -> Self {
        Self { endpoint_id }
    }
}
