//! Stack resolution: map (endpoint, name) to at most one existing stack.

use crate::error::RegistryError;
use crate::registry::StackRegistry;
use crate::stack::{ListFilter, Stack};

/// Finds the stack named `stack_name` on `endpoint_id`, if any.
///
/// Issues exactly one list call, passing the endpoint filter as a server-side
/// hint, then scans the response in order for the first record whose
/// `endpoint_id` and `name` both match exactly. Matching is case-sensitive
/// with no normalization. An empty listing and a listing with no match are
/// the same outcome: `None`.
///
/// If the registry ever held more than one record for the same
/// (endpoint, name) pair the first one in response order wins; the remote is
/// assumed not to produce that state.
///
/// # Errors
///
/// A failing list call propagates as-is. No retries.
pub async fn find_stack(
    registry: &dyn StackRegistry,
    endpoint_id: i64,
    stack_name: &str,
) -> Result<Option<Stack>, RegistryError> {
    let stacks = registry
        .list(Some(&ListFilter::endpoint(endpoint_id)))
        .await?;
    Ok(stacks
        .into_iter()
        .find(|s| s.endpoint_id == endpoint_id && s.name == stack_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingRegistry;

    #[tokio::test]
    async fn finds_exact_match() {
        let registry = RecordingRegistry::with_stacks(vec![
            Stack::new(Some(100), "stack1", 1),
            Stack::new(Some(101), "myStack", 1),
        ]);

        let found = find_stack(&registry, 1, "myStack").await.unwrap();
        assert_eq!(found, Some(Stack::new(Some(101), "myStack", 1)));
    }

    #[tokio::test]
    async fn passes_endpoint_filter_hint() {
        let registry = RecordingRegistry::with_stacks(vec![]);
        find_stack(&registry, 42, "myStack").await.unwrap();
        assert_eq!(registry.list_filters(), vec![Some(ListFilter::endpoint(42))]);
    }

    #[tokio::test]
    async fn no_match_and_empty_list_are_the_same() {
        let empty = RecordingRegistry::with_stacks(vec![]);
        assert_eq!(find_stack(&empty, 1, "myStack").await.unwrap(), None);

        let unrelated = RecordingRegistry::with_stacks(vec![Stack::new(Some(1), "other", 1)]);
        assert_eq!(find_stack(&unrelated, 1, "myStack").await.unwrap(), None);
    }

    #[tokio::test]
    async fn never_matches_across_endpoints() {
        let registry =
            RecordingRegistry::with_stacks(vec![Stack::new(Some(101), "myStack", 2)]);
        assert_eq!(find_stack(&registry, 1, "myStack").await.unwrap(), None);
    }

    #[tokio::test]
    async fn never_matches_partially_or_case_insensitively() {
        let registry = RecordingRegistry::with_stacks(vec![
            Stack::new(Some(1), "myStackLonger", 1),
            Stack::new(Some(2), "mystack", 1),
            Stack::new(Some(3), "myStac", 1),
        ]);
        assert_eq!(find_stack(&registry, 1, "myStack").await.unwrap(), None);
    }

    #[tokio::test]
    async fn first_match_wins_on_duplicates() {
        let registry = RecordingRegistry::with_stacks(vec![
            Stack::new(Some(5), "myStack", 1),
            Stack::new(Some(6), "myStack", 1),
        ]);
        let found = find_stack(&registry, 1, "myStack").await.unwrap();
        assert_eq!(found.and_then(|s| s.id), Some(5));
    }

    #[tokio::test]
    async fn list_failure_propagates() {
        let registry = RecordingRegistry::failing_list(RegistryError::api(503, "unavailable"));
        let err = find_stack(&registry, 1, "myStack").await.unwrap_err();
        assert!(matches!(err, RegistryError::Api { status: 503, .. }));
    }
}
