//! Client-side mirror of the remote message collection
//!
//! Every mutation here corresponds to a remote call that already succeeded.
//! Nothing is applied optimistically, so a failed write leaves the
//! collection exactly as it was.

use crate::board::message::{Message, MessageId};
use std::collections::HashSet;

/// Ordered sequence of messages in arrival order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionState {
    messages: Vec<Message>,
}

impl CollectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole collection with a freshly listed one.
    ///
    /// Duplicate ids keep their first occurrence.
    pub fn replace_all(&mut self, messages: Vec<Message>) {
        let mut seen = HashSet::with_capacity(messages.len());
        self.messages = messages
            .into_iter()
            .filter(|message| seen.insert(message.id.clone()))
            .collect();
    }

    /// Add a newly created message at the end.
    ///
    /// If the id is already present the record is replaced in place.
    pub fn append(&mut self, message: Message) {
        match self.position(&message.id) {
            Some(index) => self.messages[index] = message,
            None => self.messages.push(message),
        }
    }

    /// Swap in the server's copy of an updated message. Unknown ids are ignored.
    ///
    /// If the server echoes a different id, the record takes that id and any
    /// other entry already holding it is dropped, so ids stay unique.
    pub fn replace_by_id(&mut self, id: &MessageId, message: Message) -> bool {
        if !self.contains(id) {
            return false;
        }

        if &message.id != id {
            tracing::warn!("Server returned id {} for update of message {}", message.id, id);
            self.messages.retain(|existing| existing.id != message.id);
        }
        match self.position(id) {
            Some(index) => {
                self.messages[index] = message;
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: &MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|message| &message.id != id);
        self.messages.len() != before
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.messages.iter().find(|message| &message.id == id)
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.position(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }

    fn position(&self, id: &MessageId) -> Option<usize> {
        self.messages.iter().position(|message| &message.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CollectionState {
        let mut state = CollectionState::new();
        state.replace_all(vec![
            Message::new(1, "Primer mensaje", "uno"),
            Message::new(2, "Segundo mensaje", "dos"),
        ]);
        state
    }

    #[test]
    fn test_replace_all_keeps_order_and_drops_duplicates() {
        let mut state = CollectionState::new();
        state.replace_all(vec![
            Message::new(3, "c", "c"),
            Message::new(1, "a", "a"),
            Message::new(3, "dup", "dup"),
        ]);

        let titles: Vec<_> = state.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a"]);
    }

    #[test]
    fn test_append_adds_to_end() {
        let mut state = sample();
        state.append(Message::new(3, "Tercero", "tres"));
        assert_eq!(state.len(), 3);
        assert_eq!(state.as_slice()[2].id, MessageId::from(3));
    }

    #[test]
    fn test_append_existing_id_replaces_in_place() {
        let mut state = sample();
        state.append(Message::new(1, "Nuevo", "nuevo"));
        assert_eq!(state.len(), 2);
        assert_eq!(state.as_slice()[0].title, "Nuevo");
    }

    #[test]
    fn test_replace_by_id() {
        let mut state = sample();
        assert!(state.replace_by_id(&MessageId::from(2), Message::new(2, "X", "Y")));
        assert_eq!(state.get(&MessageId::from(2)).unwrap().title, "X");
        assert_eq!(state.as_slice()[1].id, MessageId::from(2));
    }

    #[test]
    fn test_replace_by_unknown_id_is_noop() {
        let mut state = sample();
        let before = state.clone();
        assert!(!state.replace_by_id(&MessageId::from(9), Message::new(9, "X", "Y")));
        assert_eq!(state, before);
    }

    #[test]
    fn test_replace_with_changed_id_keeps_ids_unique() {
        let mut state = sample();
        assert!(state.replace_by_id(&MessageId::from(1), Message::new(2, "Uno", "eco")));

        let ids: Vec<&MessageId> = state.iter().map(|m| &m.id).collect();
        assert_eq!(ids, vec![&MessageId::from(2)]);
        assert_eq!(state.get(&MessageId::from(2)).unwrap().title, "Uno");
    }

    #[test]
    fn test_remove_by_id() {
        let mut state = sample();
        assert!(state.remove_by_id(&MessageId::from(2)));
        assert!(!state.contains(&MessageId::from(2)));
        assert!(!state.remove_by_id(&MessageId::from(2)));
        assert_eq!(state.len(), 1);
    }
}
