use crate::board::{Message, MessageId, TrackedItem, TransitionPhase};
use crate::tea::{Focus, Model};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use tokio::time::Instant;

/// Card list for the current page plus the page indicator
pub struct MessageListView;

impl MessageListView {
    pub fn render(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
        let view = model.view();
        let title = if model.search.term.is_empty() {
            format!(" Messages ({}) ", model.collection.len())
        } else {
            format!(
                " Messages ({} of {}) ",
                view.filtered_count,
                model.collection.len()
            )
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(theme.border_style(model.ui.focus == Focus::List));

        if view.is_no_results() && model.transitions.items().is_empty() {
            let text = if model.ui.loading {
                "Loading messages..."
            } else if model.search.term.is_empty() {
                "No messages yet"
            } else {
                "No results found"
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(theme.colors.board.no_results))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let selected = model.selected_message().map(|m| m.id.clone());
        let width = area.width.saturating_sub(4) as usize;
        let now = Instant::now();
        let enter_duration = model.transitions.enter_duration();

        let items: Vec<ListItem> = model
            .transitions
            .items()
            .iter()
            .map(|item| {
                // Fresh cards start dimmed for the first half of their entry
                let fading_in = item.phase == TransitionPhase::Entering
                    && item.progress(now, enter_duration) < 0.5;
                Self::card(item, selected.as_ref(), fading_in, width, theme)
            })
            .collect();

        // Select the card so the list scrolls it into view
        let mut state = ListState::default().with_selected(selected.as_ref().and_then(|id| {
            model
                .transitions
                .items()
                .iter()
                .position(|item| &item.key == id)
        }));

        frame.render_stateful_widget(List::new(items).block(block), area, &mut state);
    }

    fn card<'a>(
        item: &'a TrackedItem<MessageId, Message>,
        selected: Option<&MessageId>,
        fading_in: bool,
        width: usize,
        theme: &Theme,
    ) -> ListItem<'a> {
        let colors = &theme.colors.board;
        let is_selected = item.phase != TransitionPhase::Exiting && selected == Some(&item.key);

        let (title_style, body_style) = match item.phase {
            TransitionPhase::Entering => (
                Style::default().fg(colors.card_entering).add_modifier(Modifier::BOLD),
                Style::default().fg(colors.card_entering),
            ),
            TransitionPhase::Exiting => (
                Style::default()
                    .fg(colors.card_exiting)
                    .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
                Style::default().fg(colors.card_exiting).add_modifier(Modifier::DIM),
            ),
            _ => (
                Style::default().fg(colors.card_title).add_modifier(Modifier::BOLD),
                Style::default().fg(colors.card_body),
            ),
        };

        let (title_style, body_style) = if fading_in {
            (
                title_style.add_modifier(Modifier::DIM),
                body_style.add_modifier(Modifier::DIM),
            )
        } else {
            (title_style, body_style)
        };

        let marker = if is_selected { "▸ " } else { "  " };
        let message = &item.value;
        let body = message.body.lines().next().unwrap_or_default();

        let lines = vec![
            Line::from(vec![
                Span::styled(marker, title_style),
                Span::styled(truncate(&message.title, width), title_style),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(truncate(body, width), body_style),
            ]),
        ];

        let card = ListItem::new(lines);
        if is_selected {
            card.style(theme.selected_style())
        } else {
            card
        }
    }

    /// "‹ 1 2 [3] ›" style page indicator, windowed around the current page
    pub fn render_pagination(frame: &mut Frame, area: Rect, model: &Model, theme: &Theme) {
        let total = model.total_pages();
        let colors = &theme.colors.board;
        let inactive = Style::default().fg(colors.page_inactive);

        // Labels are as wide as the largest page number plus two; arrows and ellipses take 8
        let label_width = total.max(1).to_string().len() + 2;
        let slots = (area.width.saturating_sub(8) as usize / label_width).max(1);
        let (first, last) = page_window(model.page, total, slots);

        let mut spans = vec![Span::styled("‹ ", inactive)];
        if first > 1 {
            spans.push(Span::styled("… ", inactive));
        }
        for page in first..=last {
            if page == model.page {
                spans.push(Span::styled(
                    format!("[{}]", page),
                    Style::default()
                        .fg(colors.page_active)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                spans.push(Span::styled(format!(" {} ", page), inactive));
            }
        }
        if last < total {
            spans.push(Span::styled(" …", inactive));
        }
        spans.push(Span::styled(" ›", inactive));

        let pagination = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(pagination, area);
    }
}

/// First and last page to show when at most `slots` labels fit.
/// Returns an empty range (1, 0) when there are no pages.
fn page_window(current: usize, total: usize, slots: usize) -> (usize, usize) {
    if total == 0 {
        return (1, 0);
    }
    let slots = slots.max(1);
    if total <= slots {
        return (1, total);
    }
    let current = current.clamp(1, total);
    let first = current.saturating_sub(slots / 2).max(1);
    let first = first.min(total - slots + 1);
    (first, first + slots - 1)
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 0, 5), (1, 0));
        assert_eq!(page_window(2, 4, 5), (1, 4));
        assert_eq!(page_window(1, 40, 5), (1, 5));
        assert_eq!(page_window(20, 40, 5), (18, 22));
        assert_eq!(page_window(40, 40, 5), (36, 40));
    }

    #[test]
    fn test_pagination_fits_one_row_with_many_pages() {
        let mut model = Model::default();
        model.collection.replace_all(
            (1..=400)
                .map(|i| Message::new(i, format!("m{}", i), "x"))
                .collect(),
        );
        model.page = 40;

        let mut terminal = Terminal::new(TestBackend::new(40, 1)).unwrap();
        terminal
            .draw(|frame| {
                MessageListView::render_pagination(frame, frame.size(), &model, &Theme::default())
            })
            .unwrap();
        let row: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(row.contains("[40]"));
        assert!(row.contains('…'));
        assert!(row.contains('‹'));
        assert!(row.contains('›'));
        assert!(!row.contains(" 80 "));
    }

    #[test]
    fn test_selected_card_scrolls_into_view() {
        let mut model = Model::default();
        model.collection.replace_all(
            (1..=5)
                .map(|i| Message::new(i, format!("Mensaje {}", i), format!("cuerpo {}", i)))
                .collect(),
        );
        model.sync_transitions(Instant::now());
        model.ui.selected = 4;

        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| crate::ui::render(frame, &model, &Theme::default()))
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("Mensaje 5"));
        assert!(screen.contains("▸ Mensaje 5"));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 6), "a lon…");
        assert_eq!(truncate("ñandú", 5), "ñandú");
    }
}
