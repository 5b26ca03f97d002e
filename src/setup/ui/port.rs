use ratatui::prelude::*;

use super::super::form::Field;
use super::super::SetupApp;
use super::fields::draw_text_field;
use super::{draw_button, draw_lines, draw_title};

pub fn draw_port_step(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.height < 8 {
        return;
    }

    let y = draw_title(frame, area, "Server port", app);
    draw_text_field(frame, area, y, Field::Port, app);

    let note = [format!(
        "Sending to {} on port {}",
        display_or(&app.record().server_address_value, "(no server set)"),
        display_or(&app.record().port, "(none)")
    )];
    draw_lines(frame, area, y + 2, &note, app.theme.muted_style());

    draw_button(frame, area, " [Enter] Edit  [l] Next ", app);
}

fn display_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
