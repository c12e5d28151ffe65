/// Update function for TEA pattern
///
/// Central update function that handles all messages and updates the model
/// accordingly. Collection state only changes here, and only when a store
/// completion reports success.
use crate::board::{DraftError, NotificationKind};
use crate::tea::command::StoreCommand;
use crate::tea::message::{FormMsg, Focus, ListMsg, NotificationMsg, StoreMsg, SystemMsg, UiMsg};
use crate::tea::{Command, Model, Msg, UpdateResult};

/// Main update function that processes messages and returns updated model with commands
pub fn update(model: Model, message: Msg) -> UpdateResult<Model> {
    match message {
        Msg::System(msg) => update_system(model, msg),
        Msg::Form(msg) => update_form(model, msg),
        Msg::List(msg) => update_list(model, msg),
        Msg::Store(msg) => update_store(model, msg),
        Msg::Notification(msg) => update_notification(model, msg),
        Msg::Ui(msg) => update_ui(model, msg),
    }
}

/// Show a notification and schedule its clear
fn notify(model: &mut Model, text: impl Into<String>, kind: NotificationKind) -> Command {
    let id = model.notification.show(text, kind);
    Command::schedule(
        model.settings.notification_duration,
        Msg::Notification(NotificationMsg::Expired(id)),
    )
}

fn update_system(mut model: Model, message: SystemMsg) -> UpdateResult<Model> {
    match message {
        SystemMsg::Init | SystemMsg::Refresh => {
            model.ui.loading = true;
            UpdateResult::with_command(model, Command::store(StoreCommand::List))
        }

        SystemMsg::Quit => {
            model.ui.should_quit = true;
            UpdateResult::just_model(model)
        }
    }
}

fn update_form(mut model: Model, message: FormMsg) -> UpdateResult<Model> {
    match message {
        FormMsg::Input(field, c) => {
            if !model.form.insert_char(field, c) {
                tracing::trace!("Rejected input for {:?}: field at capacity or form locked", field);
            }
            UpdateResult::just_model(model)
        }

        FormMsg::Backspace(field) => {
            model.form.backspace(field);
            UpdateResult::just_model(model)
        }

        FormMsg::StartEdit(id) => {
            match model.collection.get(&id).cloned() {
                Some(message) => {
                    if model.form.start_edit(&message) {
                        model.ui.focus = Focus::Title;
                    } else {
                        tracing::debug!("Cannot edit message {}: a submit is pending", id);
                    }
                }
                None => tracing::warn!("Cannot edit message {}: not in collection", id),
            }
            UpdateResult::just_model(model)
        }

        FormMsg::CancelEdit => {
            if !model.form.cancel_edit() {
                tracing::debug!("Ignoring cancel: a submit is pending");
            }
            UpdateResult::just_model(model)
        }

        FormMsg::Submit => match model.form.begin_submit() {
            Ok(request) => {
                tracing::debug!("Submitting {:?}", request);
                UpdateResult::with_command(model, Command::store(StoreCommand::from(request)))
            }
            Err(DraftError::SubmitInFlight) => UpdateResult::just_model(model),
            Err(err) => {
                tracing::warn!("Draft rejected: {}", err);
                let command = notify(
                    &mut model,
                    "Title and body are both required",
                    NotificationKind::Error,
                );
                UpdateResult::with_command(model, command)
            }
        },
    }
}

fn update_list(mut model: Model, message: ListMsg) -> UpdateResult<Model> {
    match message {
        ListMsg::SearchInput(c) => {
            model.search.term.push(c);
            model.page = 1;
            model.ui.selected = 0;
        }

        ListMsg::SearchBackspace => {
            if model.search.term.pop().is_some() {
                model.page = 1;
                model.ui.selected = 0;
            }
        }

        ListMsg::ClearSearch => {
            model.search.term.clear();
            model.page = 1;
            model.ui.selected = 0;
        }

        ListMsg::NextPage => {
            if model.page < model.total_pages() {
                model.page += 1;
                model.ui.selected = 0;
            }
        }

        ListMsg::PrevPage => {
            if model.page > 1 {
                model.page -= 1;
                model.ui.selected = 0;
            }
        }

        ListMsg::GoToPage(page) => {
            if (1..=model.total_pages()).contains(&page) {
                model.page = page;
                model.ui.selected = 0;
            }
        }

        ListMsg::SelectNext => {
            let visible = model.view().items.len();
            if model.ui.selected + 1 < visible {
                model.ui.selected += 1;
            }
        }

        ListMsg::SelectPrev => {
            model.ui.selected = model.ui.selected.saturating_sub(1);
        }

        ListMsg::Delete(id) => {
            tracing::debug!("Deleting message {}", id);
            return UpdateResult::with_command(model, Command::store(StoreCommand::Delete(id)));
        }
    }

    model.clamp_page();
    UpdateResult::just_model(model)
}

fn update_store(mut model: Model, message: StoreMsg) -> UpdateResult<Model> {
    let command = match message {
        StoreMsg::Loaded(Ok(messages)) => {
            tracing::info!("Loaded {} messages", messages.len());
            model.ui.loading = false;
            model.collection.replace_all(messages);
            if let Some(id) = model.form.editing_id().cloned() {
                if !model.collection.contains(&id) {
                    model.form.reset();
                }
            }
            Command::None
        }

        StoreMsg::Loaded(Err(err)) => {
            tracing::error!("Failed to load messages: {}", err);
            model.ui.loading = false;
            notify(&mut model, "Could not load messages", NotificationKind::Error)
        }

        StoreMsg::Created(Ok(message)) => {
            tracing::info!("Created message {}", message.id);
            model.collection.append(message);
            model.form.finish_success();
            notify(&mut model, "Message added", NotificationKind::Success)
        }

        StoreMsg::Created(Err(err)) => {
            tracing::error!("Failed to create message: {}", err);
            model.form.finish_failure();
            notify(&mut model, "Could not save the message", NotificationKind::Error)
        }

        StoreMsg::Updated { id, result: Ok(message) } => {
            tracing::info!("Updated message {}", id);
            if !model.collection.replace_by_id(&id, message) {
                tracing::warn!("Updated message {} is no longer in the collection", id);
            }
            model.form.finish_success();
            notify(&mut model, "Message updated", NotificationKind::Success)
        }

        StoreMsg::Updated { id, result: Err(err) } => {
            tracing::error!("Failed to update message {}: {}", id, err);
            model.form.finish_failure();
            notify(&mut model, "Could not save the message", NotificationKind::Error)
        }

        StoreMsg::Deleted { id, result: Ok(()) } => {
            tracing::info!("Deleted message {}", id);
            model.collection.remove_by_id(&id);
            if model.form.editing_id() == Some(&id) {
                model.form.reset();
            }
            notify(&mut model, "Message deleted", NotificationKind::Success)
        }

        StoreMsg::Deleted { id, result: Err(err) } => {
            tracing::error!("Failed to delete message {}: {}", id, err);
            notify(&mut model, "Could not delete the message", NotificationKind::Error)
        }
    };

    model.clamp_page();
    UpdateResult::new(model, command.flatten())
}

fn update_notification(mut model: Model, message: NotificationMsg) -> UpdateResult<Model> {
    match message {
        NotificationMsg::Expired(id) => {
            if !model.notification.clear(id) {
                tracing::trace!("Ignoring stale notification clear {:?}", id);
            }
        }
    }
    UpdateResult::just_model(model)
}

fn update_ui(mut model: Model, message: UiMsg) -> UpdateResult<Model> {
    model.ui.focus = match message {
        UiMsg::FocusNext => model.ui.focus.next(),
        UiMsg::FocusPrev => model.ui.focus.prev(),
        UiMsg::Focus(focus) => focus,
    };
    UpdateResult::just_model(model)
}
