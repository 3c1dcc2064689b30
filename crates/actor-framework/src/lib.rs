//! # Actor Framework
//!
//! Building blocks for type-safe, resource-oriented actors on Tokio. Each resource
//! type gets one [`ResourceActor`] that owns every entity of that type and serves a
//! fixed vocabulary of requests: Create, Get, Update, Delete and List.
//!
//! ## Why Resource-Oriented Actors?
//!
//! - **Uniform surface**: every resource speaks the same CRUD + List protocol, so the
//!   layers above (use-case clients, HTTP handlers) look the same for every resource.
//! - **Isolated state**: an actor processes its requests one at a time, so its store
//!   needs no `Mutex` even though any number of clients call it concurrently.
//! - **Late binding**: dependencies arrive through `run(context)`, not the constructor.
//!
//! **Further Reading**:
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Domain model, payload types and hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and the entity store
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Note { id: u32, text: String, pinned: bool }
//!
//! #[derive(Debug)] struct NoteCreate { text: String }
//! #[derive(Debug)] struct NoteUpdate { pinned: bool }
//! #[derive(Debug)] struct PinnedOnly(bool);
//! #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
//!
//! #[async_trait]
//! impl ActorEntity for Note {
//!     type Id = u32;
//!     type Create = NoteCreate;
//!     type Update = NoteUpdate;
//!     type Filter = PinnedOnly;
//!     type Context = ();
//!     type Error = NoteError;
//!
//!     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, text: params.text, pinned: false })
//!     }
//!
//!     fn matches(&self, filter: &PinnedOnly) -> bool {
//!         !filter.0 || self.pinned
//!     }
//!
//!     async fn on_update(&mut self, update: NoteUpdate, _ctx: &()) -> Result<(), Self::Error> {
//!         self.pinned = update.pinned;
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Note>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let first = client.create(NoteCreate { text: "milk".into() }).await.unwrap();
//!     client.create(NoteCreate { text: "eggs".into() }).await.unwrap();
//!     client.update(first, NoteUpdate { pinned: true }).await.unwrap();
//!
//!     let pinned = client.list(PinnedOnly(true), 0, 10).await.unwrap();
//!     assert_eq!(pinned.len(), 1);
//!     assert_eq!(pinned[0].text, "milk");
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests are processed **sequentially** within an actor
//! - Clients are cheap clones of a channel sender
//! - The actor stops when the last client is dropped
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, a `ResourceClient` answered from scripted
//! expectations, for testing code that sits on top of a client without running an actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
