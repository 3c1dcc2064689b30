//! # Generic Messages
//!
//! This module defines the generic message types used for communication between
//! the `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # The CRUD Pattern
/// The variants map directly to the lifecycle of a persistent resource:
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize a new resource.
/// - **Get (Read)**: Fetches the current state of the resource by ID. A missing
///   resource is `Ok(None)`, not an error.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
/// - **Delete**: Removes the resource.
/// - **List**: Returns a page of resources matching [`ActorEntity::Filter`], in ID order.
///
/// Because the enum is generic over `T: ActorEntity`, a "Product Create" payload can
/// never be sent to an actor managing another resource type.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    List {
        filter: T::Filter,
        offset: usize,
        limit: usize,
        respond_to: Response<Vec<T>>,
    },
}
