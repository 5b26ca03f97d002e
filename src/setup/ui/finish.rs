use ratatui::{prelude::*, widgets::{Block, Borders, Clear}};

use super::super::SetupApp;
use super::fields::checkbox;
use super::draw_lines;
use crate::ui::Layout;

pub fn draw_finish(frame: &mut Frame, area: Rect, app: &SetupApp) {
    let record = app.record();
    let server = if record.server_address_value.is_empty() {
        "(not set)"
    } else {
        record.server_address_value.as_str()
    };

    let summary = [
        format!("  Server:   {} ({})", server, record.server_address_kind.label()),
        format!("  Port:     {}", record.port),
        format!("  Password: {}", "*".repeat(record.password.chars().count())),
        format!("  SIM card: {}", checkbox(record.sim_card_installed)),
        format!("  Outside:  {}", checkbox(record.device_located_outside)),
    ];

    let lines = &app.config.text.finish;
    let width = 64.min(area.width.saturating_sub(4));
    let height = (lines.len() + summary.len()) as u16 + 7;
    let centered = Layout::centered_box(area, width, height.min(area.height.saturating_sub(2)));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.secondary_style())
        .title(" Setup Complete! ");

    let inner = block.inner(centered);
    frame.render_widget(Clear, centered);
    frame.render_widget(block, centered);

    let mut y = draw_lines(frame, inner, inner.y + 1, lines, app.theme.style());
    y += 1;
    y = draw_lines(frame, inner, y, &summary, app.theme.secondary_style());
    y += 1;
    draw_lines(
        frame,
        inner,
        y,
        &["r: start over   q: quit".to_string()],
        app.theme.muted_style(),
    );
}
