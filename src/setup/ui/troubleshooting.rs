use ratatui::prelude::*;

use super::super::SetupApp;
use super::{draw_button, draw_lines, draw_title};

pub fn draw_troubleshooting_step(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.height < 6 {
        return;
    }

    let y = draw_title(frame, area, "If the device does not come online", app);
    let tips: Vec<String> = app
        .config
        .text
        .troubleshooting
        .iter()
        .enumerate()
        .map(|(i, tip)| format!("{}. {}", i + 1, tip))
        .collect();
    draw_lines(frame, area, y, &tips, app.theme.style());

    draw_button(frame, area, " [Enter] Finish  [h] Back to test ", app);
}
