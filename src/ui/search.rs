use crate::board::SearchScope;
use crate::tea::{Focus, Model};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{block::Title, Block, Borders, Paragraph},
    Frame,
};

/// Search input with scope hint
pub struct SearchBarView;

impl SearchBarView {
    pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
        let is_focused = model.ui.focus == Focus::Search;
        let scope = match model.search.scope {
            SearchScope::TitleOnly => " title ",
            SearchScope::TitleAndBody => " title + body ",
        };

        let block = Block::default()
            .title(" Search ")
            .title(
                Title::from(Span::styled(
                    scope,
                    Style::default().fg(theme.colors.palette.text_muted),
                ))
                .alignment(Alignment::Right),
            )
            .borders(Borders::ALL)
            .border_style(theme.border_style(is_focused));

        let mut spans = vec![Span::styled(
            model.search.term.clone(),
            Style::default().fg(theme.colors.palette.text_primary),
        )];
        if is_focused {
            spans.push(Span::styled("|", Style::default().fg(theme.colors.palette.accent)));
        } else if model.search.term.is_empty() {
            spans.push(Span::styled(
                "press / to search",
                Style::default().fg(theme.colors.palette.text_muted),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}
