use ratatui::{prelude::*, widgets::{Block, Borders, Clear, Paragraph}};

use super::super::SetupApp;
use super::draw_lines;
use crate::ui::Layout;

pub fn draw_welcome(frame: &mut Frame, area: Rect, app: &SetupApp) {
    let general = &app.config.general;
    let lines = &app.config.text.welcome;

    let content_width = 64.min(area.width.saturating_sub(4));
    let content_height = (lines.len() as u16 + 8).min(area.height.saturating_sub(2));
    let centered = Layout::centered_box(area, content_width, content_height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" {} {} ", general.title, general.device));

    let inner = block.inner(centered);
    frame.render_widget(Clear, centered);
    frame.render_widget(block, centered);

    if inner.height < 4 {
        return;
    }

    frame.render_widget(
        Paragraph::new(general.subtitle.as_str())
            .style(app.theme.secondary_style())
            .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );

    draw_lines(frame, inner, inner.y + 3, lines, app.theme.style());

    // Start button - centered at bottom
    let button_y = inner.y + inner.height - 2;
    let button_text = "[ Start Setup ]";
    let button_width = button_text.len() as u16;
    let button_x = inner.x + (inner.width.saturating_sub(button_width)) / 2;

    frame.render_widget(
        Paragraph::new(button_text).style(app.theme.button_style(true)),
        Rect::new(button_x, button_y, button_width.min(inner.width), 1),
    );

    let hint = "Press Enter to begin";
    let hint_x = inner.x + (inner.width.saturating_sub(hint.len() as u16)) / 2;
    frame.render_widget(
        Paragraph::new(hint).style(app.theme.muted_style()),
        Rect::new(hint_x, button_y + 1, (hint.len() as u16).min(inner.width), 1),
    );
}
