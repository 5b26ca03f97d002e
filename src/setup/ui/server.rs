use ratatui::prelude::*;

use super::super::form::Field;
use super::super::record::ServerAddressKind;
use super::super::SetupApp;
use super::fields::{draw_choice, draw_text_field};
use super::{draw_button, draw_lines, draw_title};

pub fn draw_server_step(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.height < 10 || area.width < 30 {
        return;
    }

    let mut y = draw_title(frame, area, "Tracking server", app);

    let kind = app.record().server_address_kind;
    let choice = match kind {
        ServerAddressKind::IpAddress => "(*) IP address  ( ) URL",
        ServerAddressKind::Url => "( ) IP address  (*) URL",
    };
    draw_choice(frame, area, y, Field::AddressKind, choice, app);
    y += 2;

    draw_text_field(frame, area, y, Field::AddressValue, app);
    y += 2;
    draw_text_field(frame, area, y, Field::Password, app);
    y += 2;

    let hint = match kind {
        ServerAddressKind::IpAddress => "Example: 185.12.34.56",
        ServerAddressKind::Url => "Example: gps.example.com",
    };
    draw_lines(frame, area, y, &[hint.to_string()], app.theme.muted_style());

    draw_button(frame, area, " [l] Next ", app);
}
