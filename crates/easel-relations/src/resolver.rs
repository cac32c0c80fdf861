//! Bidirectional relationship resolution over a saved-objects client.

use crate::map::{group_by_kind, RelationshipMap, SavedObjectSummary};
use easel_object::{BulkGetResponse, FindQuery, ObjectError, ObjectKey, SavedObjectsClient};

/// Caller-supplied parameters for [`find_relationships`]
#[derive(Clone, Copy)]
pub struct RelationshipOptions<'a> {
    /// Maximum inbound referrers returned by the search phase
    pub size: usize,
    /// Capability object for store reads
    pub client: &'a dyn SavedObjectsClient,
    /// Kinds considered relevant in both directions
    pub object_types: &'a [String],
}

/// Resolve both directions of the reference relation for one object.
///
/// Fetches the subject, then concurrently batch-fetches its allow-listed
/// outbound references and searches for allow-listed objects referencing
/// it back, capped at `size`. The combined result is grouped by kind,
/// outbound entries first.
///
/// Both reads are joined fail-fast: if either fails, the whole
/// operation fails and no partial map is ever returned.
///
/// # Errors
/// [`ObjectError::NotFound`] when the subject is absent; any transport
/// or permission failure from the underlying client, unchanged.
pub async fn find_relationships(
    kind: &str,
    id: &str,
    options: RelationshipOptions<'_>,
) -> Result<RelationshipMap, ObjectError> {
    let RelationshipOptions {
        size,
        client,
        object_types,
    } = options;

    let subject = client.get(kind, id).await?;
    tracing::debug!(
        kind,
        id,
        references = subject.references.len(),
        size,
        "resolving relationships"
    );

    // Only allow-listed kinds take part, in either direction.
    let outbound_keys: Vec<ObjectKey> = subject
        .references
        .iter()
        .filter(|reference| object_types.iter().any(|allowed| allowed == &reference.kind))
        .map(ObjectKey::from)
        .collect();

    let inbound_query = FindQuery::of_types(object_types.iter().cloned())
        .with_reference(ObjectKey::new(kind, id))
        .with_per_page(size)
        .with_fields(["title"]);

    let (outbound, inbound) = tokio::try_join!(
        async {
            if outbound_keys.is_empty() {
                // Nothing to fetch; skip the call entirely.
                Ok(BulkGetResponse::empty())
            } else {
                client.bulk_get(&outbound_keys).await
            }
        },
        client.find(&inbound_query),
    )?;

    tracing::debug!(
        outbound = outbound.saved_objects.len(),
        inbound = inbound.saved_objects.len(),
        "relationship fetches complete"
    );

    let summaries = outbound
        .saved_objects
        .iter()
        .chain(inbound.saved_objects.iter())
        .map(SavedObjectSummary::from);

    Ok(group_by_kind(summaries))
}
