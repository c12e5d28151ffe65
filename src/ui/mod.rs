pub mod compose;
pub mod message_list;
pub mod search;
pub mod toast;

use crate::tea::{Focus, Model};
use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

pub use compose::ComposeView;
pub use message_list::MessageListView;
pub use search::SearchBarView;
pub use toast::ToastRenderer;

/// Draw the whole board for the current model
pub fn render(frame: &mut Frame, model: &Model, theme: &Theme) {
    let area = frame.size();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.colors.palette.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Header
            Constraint::Length(3),  // Search
            Constraint::Min(6),     // Message cards
            Constraint::Length(1),  // Pagination
            Constraint::Length(10), // Form
            Constraint::Length(1),  // Key hints
        ])
        .split(area);

    render_header(frame, chunks[0], model, theme);
    SearchBarView::render(frame, chunks[1], model, theme);
    MessageListView::render(frame, chunks[2], model, theme);
    MessageListView::render_pagination(frame, chunks[3], model, theme);
    ComposeView::render(frame, chunks[4], model, theme);
    render_help(frame, chunks[5], model, theme);

    ToastRenderer::render(frame, area, model.notification.current(), theme);
}

fn render_header(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let mut spans = vec![Span::styled(" Message Board", theme.header_style())];
    if model.ui.loading {
        spans.push(Span::styled(
            "  loading...",
            Style::default().fg(theme.colors.palette.text_muted),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
    let hints = match model.ui.focus {
        Focus::List => "j/k select  h/l page  e edit  d delete  n new  / search  r refresh  q quit",
        Focus::Search => "type to filter  Esc clear  Enter list  Tab next pane",
        Focus::Title => "Enter body  Ctrl+S save  Esc cancel  Tab next pane",
        Focus::Body => "Enter newline  Ctrl+S save  Esc cancel  Tab next pane",
    };
    let help = Paragraph::new(Span::styled(
        format!(" {}", hints),
        Style::default().fg(theme.colors.palette.text_muted),
    ));
    frame.render_widget(help, area);
}
