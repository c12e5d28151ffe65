use crate::board::{FormField, FormMode};
use crate::tea::Model;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{block::Title, Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Create/edit form: title input, body input and character counters
pub struct ComposeView;

impl ComposeView {
    pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
        let heading = match model.form.mode() {
            FormMode::Creating => " New message ".to_string(),
            FormMode::Editing(id) => format!(" Editing message {} ", id),
        };
        let heading = if model.form.is_pending() {
            format!("{}(saving...) ", heading)
        } else {
            heading
        };

        let form_focused = model.ui.focus.form_field().is_some();
        let block = Block::default()
            .title(heading)
            .borders(Borders::ALL)
            .border_style(theme.border_style(form_focused));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title input
                Constraint::Min(3),    // Body input
            ])
            .split(inner);

        Self::render_field(frame, chunks[0], model, FormField::Title, theme);
        Self::render_field(frame, chunks[1], model, FormField::Body, theme);
    }

    fn render_field(frame: &mut Frame, area: Rect, model: &Model, field: FormField, theme: &Theme) {
        let is_focused = model.ui.focus.form_field() == Some(field);
        let label = match field {
            FormField::Title => " Title ",
            FormField::Body => " Body ",
        };

        let block = Block::default()
            .title(label)
            .title(Self::counter(model, field, theme))
            .borders(Borders::ALL)
            .border_style(theme.border_style(is_focused));

        let value = model.form.field(field);
        let mut text = Text::from(
            value
                .split('\n')
                .map(|line| Line::from(line.to_string()))
                .collect::<Vec<_>>(),
        );
        // Cursor at the end of the focused field
        if is_focused {
            if let Some(last) = text.lines.last_mut() {
                last.spans.push(Span::styled(
                    "|",
                    Style::default()
                        .fg(theme.colors.palette.accent)
                        .add_modifier(Modifier::SLOW_BLINK),
                ));
            }
        }

        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(theme.colors.palette.text_primary))
            .wrap(Wrap { trim: false })
            .block(block);
        frame.render_widget(paragraph, area);
    }

    /// Remaining characters, right-aligned in the field border
    fn counter(model: &Model, field: FormField, theme: &Theme) -> Title<'static> {
        let colors = &theme.colors.board;
        let style = if model.form.near_limit(field) {
            Style::default()
                .fg(colors.counter_warning)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.counter)
        };

        Title::from(Line::from(Span::styled(
            format!(" {} ", model.form.remaining(field)),
            style,
        )))
        .alignment(Alignment::Right)
    }
}
