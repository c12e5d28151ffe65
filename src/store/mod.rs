//! Remote message store client
//!
//! A thin contract over the `/messages` collection resource: list, create,
//! update and delete. There are no retries; callers turn failures into a
//! notification and a log line.

pub mod error;
pub mod http;
pub mod mock;

pub use error::{StoreError, StoreResult};
pub use http::HttpMessageStore;
pub use mock::{MockMessageStore, StoreCall, StoreOperation};

use crate::board::{Draft, Message, MessageId};
use async_trait::async_trait;

/// Core trait that every message store backend implements
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Fetch the entire collection
    async fn list(&self) -> StoreResult<Vec<Message>>;

    /// Create a message; the server assigns the id
    async fn create(&self, draft: &Draft) -> StoreResult<Message>;

    /// Replace title and body of an existing message
    async fn update(&self, id: &MessageId, draft: &Draft) -> StoreResult<Message>;

    async fn delete(&self, id: &MessageId) -> StoreResult<()>;
}
