//! Derived list view: filter by search term, then slice one page
//!
//! All functions here are pure. The model calls [`derive`] on every render
//! instead of caching results.

use crate::board::message::Message;
use serde::{Deserialize, Serialize};

/// Messages shown per page
pub const PAGE_SIZE: usize = 5;

/// Which fields a search term is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchScope {
    TitleOnly,
    #[default]
    TitleAndBody,
}

/// One page of the filtered collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedView<'a> {
    pub items: Vec<&'a Message>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

impl DerivedView<'_> {
    /// Nothing matched the search term (or the collection is empty)
    pub fn is_no_results(&self) -> bool {
        self.filtered_count == 0
    }
}

/// Case-insensitive substring match of `term` against a message
pub fn matches(message: &Message, term: &str, scope: SearchScope) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    if message.title.to_lowercase().contains(&needle) {
        return true;
    }
    scope == SearchScope::TitleAndBody && message.body.to_lowercase().contains(&needle)
}

/// Keep the messages matching `term`, preserving their order
pub fn filter<'a, I>(messages: I, term: &str, scope: SearchScope) -> Vec<&'a Message>
where
    I: IntoIterator<Item = &'a Message>,
{
    messages
        .into_iter()
        .filter(|message| matches(message, term, scope))
        .collect()
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    count.div_ceil(page_size)
}

/// Slice out 1-based `page`. Pages past the end produce an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let page = page.max(1);
    let start = (page - 1).saturating_mul(page_size).min(items.len());
    let end = page.saturating_mul(page_size).min(items.len());
    &items[start..end]
}

/// Clamp a page number to the last page that has content (1 when empty)
pub fn clamp_page(page: usize, filtered_count: usize, page_size: usize) -> usize {
    let last = total_pages(filtered_count, page_size).max(1);
    page.clamp(1, last)
}

/// Run the filter and page pipeline
pub fn derive<'a>(
    messages: &'a [Message],
    term: &str,
    scope: SearchScope,
    page: usize,
    page_size: usize,
) -> DerivedView<'a> {
    let filtered = filter(messages, term, scope);
    let items = page_slice(&filtered, page, page_size).to_vec();

    DerivedView {
        items,
        page: page.max(1),
        total_pages: total_pages(filtered.len(), page_size),
        filtered_count: filtered.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::message::MessageId;

    fn board(count: i64) -> Vec<Message> {
        (1..=count)
            .map(|i| Message::new(i, format!("Mensaje {}", i), format!("cuerpo {}", i)))
            .collect()
    }

    #[test]
    fn test_search_scenario_keeps_only_matching_title() {
        let messages = vec![
            Message::new(1, "Primer mensaje", "..."),
            Message::new(2, "Segundo mensaje", "..."),
        ];
        let filtered = filter(&messages, "segundo", SearchScope::TitleAndBody);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, MessageId::from(2));
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let messages = board(3);
        assert_eq!(filter(&messages, "", SearchScope::TitleOnly).len(), 3);
    }

    #[test]
    fn test_body_matching_depends_on_scope() {
        let messages = vec![Message::new(1, "Hola", "Contenido secreto")];
        assert!(filter(&messages, "SECRETO", SearchScope::TitleOnly).is_empty());
        assert_eq!(filter(&messages, "SECRETO", SearchScope::TitleAndBody).len(), 1);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let messages = vec![
            Message::new(1, "Rust", "async"),
            Message::new(2, "Go", "rust channels"),
            Message::new(3, "Zig", "comptime"),
        ];
        for scope in [SearchScope::TitleOnly, SearchScope::TitleAndBody] {
            let once = filter(&messages, "rUsT", scope);
            let twice = filter(once.iter().copied(), "rUsT", scope);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_page_slice_boundaries() {
        let items: Vec<usize> = (0..12).collect();
        assert_eq!(page_slice(&items, 1, 5), &[0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&items, 3, 5), &[10, 11]);
        assert!(page_slice(&items, 4, 5).is_empty());
        assert!(page_slice(&items, 100, 5).is_empty());
        assert_eq!(page_slice(&items, 0, 5), page_slice(&items, 1, 5));
    }

    #[test]
    fn test_page_slices_cover_filtered_range_exactly() {
        let items: Vec<usize> = (0..13).collect();
        let pages = total_pages(items.len(), PAGE_SIZE);
        let joined: Vec<usize> = (1..=pages)
            .flat_map(|page| page_slice(&items, page, PAGE_SIZE).to_vec())
            .collect();
        assert_eq!(joined, items);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(4, 7, 5), 2);
        assert_eq!(clamp_page(2, 0, 5), 1);
        assert_eq!(clamp_page(0, 7, 5), 1);
        assert_eq!(clamp_page(1, 7, 5), 1);
    }

    #[test]
    fn test_derive_pipeline() {
        let messages = board(12);
        let view = derive(&messages, "mensaje", SearchScope::TitleOnly, 3, PAGE_SIZE);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.filtered_count, 12);
        let ids: Vec<_> = view.items.iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids, vec![MessageId::from(11), MessageId::from(12)]);
        assert!(!view.is_no_results());
    }

    #[test]
    fn test_derive_signals_no_results() {
        let messages = board(3);
        let view = derive(&messages, "nada", SearchScope::TitleAndBody, 1, PAGE_SIZE);
        assert!(view.is_no_results());
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
    }
}
