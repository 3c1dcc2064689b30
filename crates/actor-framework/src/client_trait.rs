//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: read, delete and list come for
//! free on top of a generic `ResourceClient`, with framework errors translated
//! into the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Tag { id: u32 }
/// #[derive(Debug)] struct TagCreate;
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct TagError(String);
///
/// #[async_trait]
/// impl ActorEntity for Tag {
///     type Id = u32; type Create = TagCreate; type Update = (); type Filter = ();
///     type Context = (); type Error = TagError;
///     fn from_create_params(id: u32, _: TagCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
///     fn matches(&self, _: &()) -> bool { true }
///     async fn on_update(&mut self, _: (), _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TagClient { inner: ResourceClient<Tag> }
///
/// impl ActorClient<Tag> for TagClient {
///     type Error = TagError;
///     fn inner(&self) -> &ResourceClient<Tag> { &self.inner }
///     fn map_error(e: FrameworkError) -> TagError { TagError(e.to_string()) }
/// }
///
/// async fn usage(client: TagClient) {
///     // get(), delete() and list() are provided
///     let _ = client.get(1).await;
///     let _ = client.delete(1).await;
///     let _ = client.list((), 0, 10).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Map the failure of a request addressed to `id`. Override to keep the ID in
    /// not-found errors; defaults to [`map_error`](Self::map_error).
    fn map_id_error(_id: &T::Id, e: FrameworkError) -> Self::Error {
        Self::map_error(e)
    }

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        let key = id.clone();
        self.inner()
            .delete(id)
            .await
            .map_err(|e| Self::map_id_error(&key, e))
    }

    /// Fetch one page of entities matching `filter`.
    #[tracing::instrument(skip(self))]
    async fn list(
        &self,
        filter: T::Filter,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .list(filter, offset, limit)
            .await
            .map_err(Self::map_error)
    }
}
