use crate::board::FormField;
use crate::tea::message::{FormMsg, ListMsg, SystemMsg, UiMsg};
use crate::tea::{Focus, Model, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Translates terminal key events into board messages.
///
/// Which keys mean what depends on the focused pane: text panes consume
/// printable characters, the list pane uses single-letter shortcuts.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to a message, or `None` when the key does nothing
    pub fn handle_key_event(&self, key: KeyEvent, model: &Model) -> Option<Msg> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(SystemMsg::Quit.into()),
                KeyCode::Char('s') if model.ui.focus.form_field().is_some() => {
                    Some(FormMsg::Submit.into())
                }
                KeyCode::Char('r') => Some(SystemMsg::Refresh.into()),
                _ => None,
            };
        }
        match key.code {
            KeyCode::Tab => return Some(UiMsg::FocusNext.into()),
            KeyCode::BackTab => return Some(UiMsg::FocusPrev.into()),
            _ => {}
        }

        match model.ui.focus {
            Focus::Search => self.handle_search_keys(key),
            Focus::List => self.handle_list_keys(key, model),
            Focus::Title => self.handle_form_keys(key, FormField::Title),
            Focus::Body => self.handle_form_keys(key, FormField::Body),
        }
    }

    fn handle_search_keys(&self, key: KeyEvent) -> Option<Msg> {
        match key.code {
            KeyCode::Char(c) => Some(ListMsg::SearchInput(c).into()),
            KeyCode::Backspace => Some(ListMsg::SearchBackspace.into()),
            KeyCode::Esc => Some(ListMsg::ClearSearch.into()),
            KeyCode::Enter | KeyCode::Down => Some(UiMsg::Focus(Focus::List).into()),
            _ => None,
        }
    }

    fn handle_list_keys(&self, key: KeyEvent, model: &Model) -> Option<Msg> {
        let selected = || model.selected_message().map(|m| m.id.clone());

        match key.code {
            KeyCode::Char('q') => Some(SystemMsg::Quit.into()),
            KeyCode::Char('j') | KeyCode::Down => Some(ListMsg::SelectNext.into()),
            KeyCode::Char('k') | KeyCode::Up => Some(ListMsg::SelectPrev.into()),
            KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                Some(ListMsg::NextPage.into())
            }
            KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => {
                Some(ListMsg::PrevPage.into())
            }
            KeyCode::Char(c @ '1'..='9') => {
                let page = c.to_digit(10).map(|d| d as usize)?;
                Some(ListMsg::GoToPage(page).into())
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                selected().map(|id| FormMsg::StartEdit(id).into())
            }
            KeyCode::Char('d') | KeyCode::Delete => selected().map(|id| ListMsg::Delete(id).into()),
            KeyCode::Char('/') => Some(UiMsg::Focus(Focus::Search).into()),
            KeyCode::Char('n') => Some(UiMsg::Focus(Focus::Title).into()),
            KeyCode::Char('r') => Some(SystemMsg::Refresh.into()),
            _ => None,
        }
    }

    fn handle_form_keys(&self, key: KeyEvent, field: FormField) -> Option<Msg> {
        match (key.code, field) {
            (KeyCode::Esc, _) => Some(FormMsg::CancelEdit.into()),
            (KeyCode::Backspace, _) => Some(FormMsg::Backspace(field).into()),
            (KeyCode::Enter, FormField::Title) => Some(UiMsg::Focus(Focus::Body).into()),
            (KeyCode::Enter, FormField::Body) => Some(FormMsg::Input(field, '\n').into()),
            (KeyCode::Char(c), _) => Some(FormMsg::Input(field, c).into()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Message, MessageId};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn focused(focus: Focus) -> Model {
        let mut model = Model::default();
        model.collection.replace_all(vec![
            Message::new(1, "Primer mensaje", "..."),
            Message::new(2, "Segundo mensaje", "..."),
        ]);
        model.ui.focus = focus;
        model
    }

    #[test]
    fn test_ctrl_c_quits_from_any_pane() {
        let handler = EventHandler::new();
        for focus in [Focus::Search, Focus::List, Focus::Title, Focus::Body] {
            let msg = handler.handle_key_event(ctrl('c'), &focused(focus));
            assert!(matches!(msg, Some(Msg::System(SystemMsg::Quit))));
        }
    }

    #[test]
    fn test_q_is_text_outside_the_list() {
        let handler = EventHandler::new();
        let msg = handler.handle_key_event(key(KeyCode::Char('q')), &focused(Focus::List));
        assert!(matches!(msg, Some(Msg::System(SystemMsg::Quit))));

        let msg = handler.handle_key_event(key(KeyCode::Char('q')), &focused(Focus::Title));
        assert!(matches!(
            msg,
            Some(Msg::Form(FormMsg::Input(FormField::Title, 'q')))
        ));

        let msg = handler.handle_key_event(key(KeyCode::Char('q')), &focused(Focus::Search));
        assert!(matches!(msg, Some(Msg::List(ListMsg::SearchInput('q')))));
    }

    #[test]
    fn test_list_actions_target_selected_message() {
        let handler = EventHandler::new();
        let mut model = focused(Focus::List);
        model.ui.selected = 1;

        match handler.handle_key_event(key(KeyCode::Char('d')), &model) {
            Some(Msg::List(ListMsg::Delete(id))) => assert_eq!(id, MessageId::from(2)),
            other => panic!("unexpected message: {:?}", other),
        }
        match handler.handle_key_event(key(KeyCode::Enter), &model) {
            Some(Msg::Form(FormMsg::StartEdit(id))) => assert_eq!(id, MessageId::from(2)),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_list_actions_on_empty_page() {
        let handler = EventHandler::new();
        let model = Model::default();
        assert!(handler.handle_key_event(key(KeyCode::Char('d')), &model).is_none());
        assert!(handler.handle_key_event(key(KeyCode::Char('e')), &model).is_none());
    }

    #[test]
    fn test_enter_in_form_fields() {
        let handler = EventHandler::new();
        let msg = handler.handle_key_event(key(KeyCode::Enter), &focused(Focus::Title));
        assert!(matches!(msg, Some(Msg::Ui(UiMsg::Focus(Focus::Body)))));

        let msg = handler.handle_key_event(key(KeyCode::Enter), &focused(Focus::Body));
        assert!(matches!(
            msg,
            Some(Msg::Form(FormMsg::Input(FormField::Body, '\n')))
        ));
    }

    #[test]
    fn test_submit_only_from_form() {
        let handler = EventHandler::new();
        let msg = handler.handle_key_event(ctrl('s'), &focused(Focus::Body));
        assert!(matches!(msg, Some(Msg::Form(FormMsg::Submit))));
        assert!(handler.handle_key_event(ctrl('s'), &focused(Focus::List)).is_none());
    }

    #[test]
    fn test_tab_cycles_focus() {
        let handler = EventHandler::new();
        let msg = handler.handle_key_event(key(KeyCode::Tab), &focused(Focus::Title));
        assert!(matches!(msg, Some(Msg::Ui(UiMsg::FocusNext))));
        let msg = handler.handle_key_event(key(KeyCode::BackTab), &focused(Focus::Title));
        assert!(matches!(msg, Some(Msg::Ui(UiMsg::FocusPrev))));
    }

    #[test]
    fn test_digits_jump_to_page() {
        let handler = EventHandler::new();
        let msg = handler.handle_key_event(key(KeyCode::Char('3')), &focused(Focus::List));
        assert!(matches!(msg, Some(Msg::List(ListMsg::GoToPage(3)))));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let handler = EventHandler::new();
        let mut event = key(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert!(handler.handle_key_event(event, &focused(Focus::List)).is_none());
    }
}
