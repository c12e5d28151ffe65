use crate::board::{Notification, NotificationKind};
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_MAX_WIDTH: u16 = 40;
const TOAST_HEIGHT: u16 = 3;

/// Toast renderer for the notification slot
pub struct ToastRenderer;

impl ToastRenderer {
    /// Render the current notification in the top-right corner
    pub fn render(frame: &mut Frame, area: Rect, notification: Option<&Notification>, theme: &Theme) {
        let Some(notification) = notification else {
            return;
        };

        let toast_area = Self::toast_area(area);
        if toast_area.width < 6 || toast_area.height < TOAST_HEIGHT {
            return;
        }

        // Clear the area first for proper overlay
        frame.render_widget(Clear, toast_area);

        let (accent_color, text_color, bg_color) = Self::colors(notification.kind, theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent_color))
            .style(Style::default().bg(bg_color));

        let inner_area = block.inner(toast_area);
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner_area);

        frame.render_widget(block, toast_area);

        let icon = Paragraph::new(notification.icon())
            .style(Style::default().fg(accent_color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(icon, chunks[0]);

        let text = Paragraph::new(Line::from(Span::styled(
            notification.text.as_str(),
            Style::default().fg(text_color),
        )))
        .wrap(Wrap { trim: true });
        frame.render_widget(text, chunks[1]);
    }

    fn toast_area(area: Rect) -> Rect {
        let width = area.width.saturating_sub(2).min(TOAST_MAX_WIDTH);
        Rect {
            x: area.x + area.width.saturating_sub(width).saturating_sub(1),
            y: area.y + 1,
            width,
            height: TOAST_HEIGHT.min(area.height.saturating_sub(1)),
        }
    }

    /// (accent, text, background) colors for a notification kind
    fn colors(kind: NotificationKind, theme: &Theme) -> (Color, Color, Color) {
        let palette = &theme.colors.palette;
        let accent = match kind {
            NotificationKind::Success => palette.success,
            NotificationKind::Error => palette.error,
        };
        (accent, palette.text_primary, palette.surface)
    }
}
