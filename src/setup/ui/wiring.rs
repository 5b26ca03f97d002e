use ratatui::prelude::*;

use super::super::form::Field;
use super::super::SetupApp;
use super::fields::{checkbox, draw_choice};
use super::{draw_button, draw_lines, draw_title};

pub fn draw_wiring_step(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.height < 10 {
        return;
    }

    let mut y = draw_title(frame, area, "Connect the device", app);
    y = draw_lines(frame, area, y, &app.config.text.wiring, app.theme.style());
    y += 1;

    let wiring = app.record().wiring();
    let sim_card = checkbox(wiring.sim_card_installed);
    let outside = checkbox(wiring.device_located_outside);
    draw_choice(frame, area, y, Field::SimCard, sim_card, app);
    draw_choice(frame, area, y + 1, Field::Outside, outside, app);

    draw_button(frame, area, " [l] Next ", app);
}
