//! Message board state: the collection mirror, the derived list view, the
//! compose form, the notification slot and list item transitions.

pub mod collection;
pub mod form;
pub mod message;
pub mod notification;
pub mod transition;
pub mod view;

pub use collection::CollectionState;
pub use form::{DraftError, FormController, FormField, FormMode, SubmitRequest};
pub use message::{Draft, Message, MessageId, BODY_MAX_CHARS, TITLE_MAX_CHARS};
pub use notification::{Notification, NotificationId, NotificationKind, NotificationSlot};
pub use transition::{TrackedItem, TransitionController, TransitionPhase};
pub use view::{DerivedView, SearchScope, PAGE_SIZE};
