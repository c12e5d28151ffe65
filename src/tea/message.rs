/// Central message type for the board following TEA pattern
///
/// User input, store completions and timer expirations all flow through
/// this type so every state change happens inside `update`.
use crate::board::{FormField, Message, MessageId, NotificationId};
use crate::store::StoreResult;

/// Main application message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// System-level messages
    System(SystemMsg),

    /// Compose/edit form messages
    Form(FormMsg),

    /// List, search and pagination messages
    List(ListMsg),

    /// Completions of remote store calls
    Store(StoreMsg),

    /// Notification timer messages
    Notification(NotificationMsg),

    /// Focus movement between panes
    Ui(UiMsg),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMsg {
    /// Fetch the collection for the first time
    Init,

    /// Re-fetch the collection
    Refresh,

    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMsg {
    Input(FormField, char),
    Backspace(FormField),
    Submit,
    StartEdit(MessageId),
    CancelEdit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMsg {
    SearchInput(char),
    SearchBackspace,
    ClearSearch,
    NextPage,
    PrevPage,
    GoToPage(usize),
    SelectNext,
    SelectPrev,
    Delete(MessageId),
}

#[derive(Debug, Clone)]
pub enum StoreMsg {
    Loaded(StoreResult<Vec<Message>>),
    Created(StoreResult<Message>),
    Updated {
        id: MessageId,
        result: StoreResult<Message>,
    },
    Deleted {
        id: MessageId,
        result: StoreResult<()>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotificationMsg {
    /// Display delay for this notification elapsed
    Expired(NotificationId),
}

/// Panes that can hold keyboard focus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    Search,
    #[default]
    List,
    Title,
    Body,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Search => Focus::List,
            Focus::List => Focus::Title,
            Focus::Title => Focus::Body,
            Focus::Body => Focus::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Search => Focus::Body,
            Focus::List => Focus::Search,
            Focus::Title => Focus::List,
            Focus::Body => Focus::Title,
        }
    }

    /// The form field behind this pane, if it is one
    pub fn form_field(self) -> Option<FormField> {
        match self {
            Focus::Title => Some(FormField::Title),
            Focus::Body => Some(FormField::Body),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    FocusNext,
    FocusPrev,
    Focus(Focus),
}

impl From<SystemMsg> for Msg {
    fn from(msg: SystemMsg) -> Self {
        Msg::System(msg)
    }
}

impl From<FormMsg> for Msg {
    fn from(msg: FormMsg) -> Self {
        Msg::Form(msg)
    }
}

impl From<ListMsg> for Msg {
    fn from(msg: ListMsg) -> Self {
        Msg::List(msg)
    }
}

impl From<StoreMsg> for Msg {
    fn from(msg: StoreMsg) -> Self {
        Msg::Store(msg)
    }
}

impl From<UiMsg> for Msg {
    fn from(msg: UiMsg) -> Self {
        Msg::Ui(msg)
    }
}
