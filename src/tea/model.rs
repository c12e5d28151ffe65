/// Board model following TEA pattern
///
/// One cohesive state object for the whole screen. It is only changed by
/// `update`, except for transition tracking which the render loop advances
/// with the wall clock.
use crate::board::view::{self, DerivedView};
use crate::board::{
    CollectionState, FormController, Message, MessageId, NotificationSlot, SearchScope,
    TransitionController, PAGE_SIZE,
};
use crate::config::AppConfig;
use crate::tea::message::Focus;
use std::time::Duration;
use tokio::time::Instant;

/// Tunables copied out of the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSettings {
    pub page_size: usize,
    pub notification_duration: Duration,
    pub enter_duration: Duration,
    pub exit_duration: Duration,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            page_size: PAGE_SIZE,
            notification_duration: crate::board::notification::NOTIFICATION_DURATION,
            enter_duration: crate::board::transition::ENTER_DURATION,
            exit_duration: crate::board::transition::EXIT_DURATION,
        }
    }
}

impl From<&AppConfig> for ModelSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            page_size: PAGE_SIZE,
            notification_duration: config.notification_duration(),
            enter_duration: config.enter_transition(),
            exit_duration: config.exit_transition(),
        }
    }
}

/// Search bar state
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub term: String,
    pub scope: SearchScope,
}

/// UI-specific state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,

    /// Selected row within the current page
    pub selected: usize,

    /// Initial fetch in progress
    pub loading: bool,

    pub should_quit: bool,
}

/// Main board model containing all state
#[derive(Debug, Clone)]
pub struct Model {
    pub collection: CollectionState,
    pub form: FormController,
    pub search: SearchState,
    /// 1-based current page
    pub page: usize,
    pub notification: NotificationSlot,
    pub transitions: TransitionController<MessageId, Message>,
    pub ui: UiState,
    pub settings: ModelSettings,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(ModelSettings::default(), SearchScope::default())
    }
}

impl Model {
    pub fn new(settings: ModelSettings, scope: SearchScope) -> Self {
        Self {
            collection: CollectionState::new(),
            form: FormController::new(),
            search: SearchState {
                term: String::new(),
                scope,
            },
            page: 1,
            notification: NotificationSlot::new(),
            transitions: TransitionController::new(settings.enter_duration, settings.exit_duration),
            ui: UiState::default(),
            settings,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(ModelSettings::from(config), config.search_scope)
    }

    /// Filtered and paged view of the collection
    pub fn view(&self) -> DerivedView<'_> {
        view::derive(
            self.collection.as_slice(),
            &self.search.term,
            self.search.scope,
            self.page,
            self.settings.page_size,
        )
    }

    pub fn filtered_count(&self) -> usize {
        view::filter(self.collection.iter(), &self.search.term, self.search.scope).len()
    }

    pub fn total_pages(&self) -> usize {
        view::total_pages(self.filtered_count(), self.settings.page_size)
    }

    pub fn visible_ids(&self) -> Vec<MessageId> {
        self.view().items.iter().map(|m| m.id.clone()).collect()
    }

    pub fn selected_message(&self) -> Option<&Message> {
        self.view().items.get(self.ui.selected).copied()
    }

    /// Keep page and selection inside the current filtered range
    pub fn clamp_page(&mut self) {
        self.page = view::clamp_page(self.page, self.filtered_count(), self.settings.page_size);
        let visible = self.view().items.len();
        self.ui.selected = self.ui.selected.min(visible.saturating_sub(1));
    }

    /// Edit mode always refers to a message that exists in the collection
    pub fn is_consistent(&self) -> bool {
        self.form
            .editing_id()
            .map_or(true, |id| self.collection.contains(id))
    }

    /// Reconcile transition tracking with the visible page and advance timers
    pub fn sync_transitions(&mut self, now: Instant) {
        let visible: Vec<(MessageId, Message)> = self
            .view()
            .items
            .into_iter()
            .map(|m| (m.id.clone(), m.clone()))
            .collect();
        self.transitions.sync(visible, now);
        self.transitions.tick(now);
    }
}
