//! In-memory message store for tests
//!
//! Behaves like a well-formed backend: numeric ids are assigned on create,
//! unknown ids yield `NotFound`, and blank fields are rejected. Failures and
//! latency can be injected per operation, and every call is recorded.

use crate::board::{Draft, Message, MessageId};
use crate::store::error::{StoreError, StoreResult};
use crate::store::MessageStore;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    List,
    Create,
    Update,
    Delete,
}

/// Record of a call made to the mock store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCall {
    pub operation: StoreOperation,
    pub id: Option<MessageId>,
    pub draft: Option<Draft>,
}

#[derive(Debug, Default)]
struct MockState {
    messages: Vec<Message>,
    next_id: i64,
    calls: Vec<StoreCall>,
    failures: HashMap<StoreOperation, VecDeque<StoreError>>,
    latency: HashMap<StoreOperation, Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct MockMessageStore {
    state: Arc<RwLock<MockState>>,
}

impl MockMessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store. New ids continue after the highest numeric id.
    pub fn with_messages(messages: Vec<Message>) -> Self {
        let next_id = messages
            .iter()
            .filter_map(|m| match m.id {
                MessageId::Number(n) => Some(n),
                MessageId::Text(_) => None,
            })
            .max()
            .unwrap_or(0);

        Self {
            state: Arc::new(RwLock::new(MockState {
                messages,
                next_id,
                ..MockState::default()
            })),
        }
    }

    /// Make the next call of `operation` fail with `error`
    pub async fn fail_next(&self, operation: StoreOperation, error: StoreError) {
        self.state
            .write()
            .await
            .failures
            .entry(operation)
            .or_default()
            .push_back(error);
    }

    /// Delay every call of `operation` by `latency`
    pub async fn set_latency(&self, operation: StoreOperation, latency: Duration) {
        self.state.write().await.latency.insert(operation, latency);
    }

    /// Current server-side contents
    pub async fn snapshot(&self) -> Vec<Message> {
        self.state.read().await.messages.clone()
    }

    pub async fn calls(&self) -> Vec<StoreCall> {
        self.state.read().await.calls.clone()
    }

    pub async fn call_count(&self) -> usize {
        self.state.read().await.calls.len()
    }

    pub async fn clear_calls(&self) {
        self.state.write().await.calls.clear();
    }

    /// Record the call, apply latency, and pop an injected failure if any
    async fn enter(
        &self,
        operation: StoreOperation,
        id: Option<&MessageId>,
        draft: Option<&Draft>,
    ) -> StoreResult<()> {
        let (latency, failure) = {
            let mut state = self.state.write().await;
            state.calls.push(StoreCall {
                operation,
                id: id.cloned(),
                draft: draft.cloned(),
            });
            let failure = state
                .failures
                .get_mut(&operation)
                .and_then(|queue| queue.pop_front());
            (state.latency.get(&operation).copied(), failure)
        };

        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
        match failure {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn check_draft(draft: &Draft) -> StoreResult<()> {
        if draft.title.trim().is_empty() || draft.body.trim().is_empty() {
            return Err(StoreError::validation(422, "title and body are required"));
        }
        Ok(())
    }
}

#[async_trait]
impl MessageStore for MockMessageStore {
    async fn list(&self) -> StoreResult<Vec<Message>> {
        self.enter(StoreOperation::List, None, None).await?;
        Ok(self.snapshot().await)
    }

    async fn create(&self, draft: &Draft) -> StoreResult<Message> {
        self.enter(StoreOperation::Create, None, Some(draft)).await?;
        Self::check_draft(draft)?;

        let mut state = self.state.write().await;
        state.next_id += 1;
        let message = Message::new(state.next_id, draft.title.clone(), draft.body.clone());
        state.messages.push(message.clone());
        Ok(message)
    }

    async fn update(&self, id: &MessageId, draft: &Draft) -> StoreResult<Message> {
        self.enter(StoreOperation::Update, Some(id), Some(draft)).await?;
        Self::check_draft(draft)?;

        let mut state = self.state.write().await;
        let message = state
            .messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| StoreError::not_found(format!("messages/{}", id)))?;
        message.title = draft.title.clone();
        message.body = draft.body.clone();
        Ok(message.clone())
    }

    async fn delete(&self, id: &MessageId) -> StoreResult<()> {
        self.enter(StoreOperation::Delete, Some(id), None).await?;

        let mut state = self.state.write().await;
        let before = state.messages.len();
        state.messages.retain(|m| &m.id != id);
        if state.messages.len() == before {
            return Err(StoreError::not_found(format!("messages/{}", id)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let store = MockMessageStore::with_messages(vec![Message::new(4, "a", "b")]);
        let created = store.create(&Draft::new("t", "b")).await.unwrap();
        assert_eq!(created.id, MessageId::from(5));
        assert_eq!(store.snapshot().await.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_ids_are_not_found() {
        let store = MockMessageStore::new();
        let err = store.delete(&MessageId::from(1)).await.unwrap_err();
        assert_eq!(err, StoreError::not_found("messages/1"));

        let err = store
            .update(&MessageId::from(1), &Draft::new("t", "b"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_injected_failure_is_one_shot() {
        let store = MockMessageStore::new();
        store
            .fail_next(StoreOperation::List, StoreError::network("down"))
            .await;

        assert!(store.list().await.is_err());
        assert!(store.list().await.is_ok());
        assert_eq!(store.call_count().await, 2);
    }

    #[tokio::test]
    async fn test_blank_draft_rejected() {
        let store = MockMessageStore::new();
        let err = store.create(&Draft::new("", "b")).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation { status: 422, .. }));
        assert!(store.snapshot().await.is_empty());
    }

    #[test]
    fn test_calls_are_recorded_in_order() {
        let store = MockMessageStore::with_messages(vec![Message::new(1, "a", "b")]);
        tokio_test::block_on(async {
            store.list().await.unwrap();
            store.delete(&MessageId::from(1)).await.unwrap();
        });

        let calls = tokio_test::block_on(store.calls());
        let operations: Vec<StoreOperation> = calls.iter().map(|c| c.operation).collect();
        assert_eq!(operations, vec![StoreOperation::List, StoreOperation::Delete]);
        assert_eq!(calls[1].id, Some(MessageId::from(1)));
    }
}
