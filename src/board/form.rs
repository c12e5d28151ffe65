//! Create/edit form controller
//!
//! Holds the draft being composed and whether it targets a new message or an
//! existing one. Length caps are enforced while typing: input that would push
//! a field past its cap is dropped, so a field can never hold more than
//! [`TITLE_MAX_CHARS`] / [`BODY_MAX_CHARS`] characters.

use crate::board::message::{Draft, Message, MessageId, BODY_MAX_CHARS, TITLE_MAX_CHARS};
use thiserror::Error;

/// Title length at which the remaining-characters counter turns into a warning
pub const TITLE_WARNING_CHARS: usize = 45;

/// Body length at which the remaining-characters counter turns into a warning
pub const BODY_WARNING_CHARS: usize = 260;

/// Reasons a draft cannot be submitted
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("title is required")]
    EmptyTitle,

    #[error("body is required")]
    EmptyBody,

    #[error("a save is already in progress")]
    SubmitInFlight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Body,
}

impl FormField {
    pub fn max_chars(self) -> usize {
        match self {
            FormField::Title => TITLE_MAX_CHARS,
            FormField::Body => BODY_MAX_CHARS,
        }
    }
}

/// Whether submitting creates a new message or updates an existing one
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Creating,
    Editing(MessageId),
}

/// Remote write requested by a submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(Draft),
    Update(MessageId, Draft),
}

#[derive(Debug, Clone, Default)]
pub struct FormController {
    mode: FormMode,
    draft: Draft,
    pending: bool,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Editing(_))
    }

    pub fn editing_id(&self) -> Option<&MessageId> {
        match &self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::Creating => None,
        }
    }

    /// A submit has been sent and its result has not arrived yet
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Load an existing message into the form for editing.
    ///
    /// Ignored while a submit is pending: the form must still match the
    /// request when its result arrives.
    pub fn start_edit(&mut self, message: &Message) -> bool {
        if self.pending {
            return false;
        }
        self.mode = FormMode::Editing(message.id.clone());
        self.draft = Draft::from(message);
        true
    }

    /// Leave edit mode and discard the draft. Ignored while a submit is pending.
    pub fn cancel_edit(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.mode = FormMode::Creating;
        self.draft.clear();
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::Body => &self.draft.body,
        }
    }

    /// Replace a field's value. Values over the cap, and any change while a
    /// submit is pending, are rejected and the field keeps its content.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.pending || value.chars().count() > field.max_chars() {
            return false;
        }
        *self.field_mut(field) = value;
        true
    }

    pub fn set_title(&mut self, value: impl Into<String>) -> bool {
        self.set_field(FormField::Title, value)
    }

    pub fn set_body(&mut self, value: impl Into<String>) -> bool {
        self.set_field(FormField::Body, value)
    }

    /// Append one typed character. Newlines are only accepted in the body.
    pub fn insert_char(&mut self, field: FormField, c: char) -> bool {
        if self.pending || (c == '\n' && field == FormField::Title) {
            return false;
        }
        if self.field(field).chars().count() >= field.max_chars() {
            return false;
        }
        self.field_mut(field).push(c);
        true
    }

    pub fn backspace(&mut self, field: FormField) -> bool {
        !self.pending && self.field_mut(field).pop().is_some()
    }

    pub fn remaining(&self, field: FormField) -> usize {
        field.max_chars().saturating_sub(self.field(field).chars().count())
    }

    pub fn title_remaining(&self) -> usize {
        self.remaining(FormField::Title)
    }

    pub fn body_remaining(&self) -> usize {
        self.remaining(FormField::Body)
    }

    /// The counter for this field should be highlighted
    pub fn near_limit(&self, field: FormField) -> bool {
        let threshold = match field {
            FormField::Title => TITLE_WARNING_CHARS,
            FormField::Body => BODY_WARNING_CHARS,
        };
        self.field(field).chars().count() >= threshold
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.draft.title.trim().is_empty() {
            return Err(DraftError::EmptyTitle);
        }
        if self.draft.body.trim().is_empty() {
            return Err(DraftError::EmptyBody);
        }
        Ok(())
    }

    /// Validate the draft and mark a submit as in flight.
    ///
    /// The draft and mode are left untouched; they are only cleared once the
    /// remote write succeeds.
    pub fn begin_submit(&mut self) -> Result<SubmitRequest, DraftError> {
        if self.pending {
            return Err(DraftError::SubmitInFlight);
        }
        self.validate()?;
        self.pending = true;

        Ok(match &self.mode {
            FormMode::Creating => SubmitRequest::Create(self.draft.clone()),
            FormMode::Editing(id) => SubmitRequest::Update(id.clone(), self.draft.clone()),
        })
    }

    pub fn finish_success(&mut self) {
        self.pending = false;
        self.reset();
    }

    /// Keep draft and mode so the user can retry
    pub fn finish_failure(&mut self) {
        self.pending = false;
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.draft.title,
            FormField::Body => &mut self.draft.body,
        }
    }
}
