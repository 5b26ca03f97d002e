use ratatui::{prelude::*, widgets::Paragraph};

use super::super::outcome::ConnectivityOutcome;
use super::super::SetupApp;
use super::{draw_button, draw_lines, draw_title};

pub fn draw_connectivity_step(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.height < 10 {
        return;
    }

    let mut y = draw_title(frame, area, "Is the device online?", app);
    y = draw_lines(frame, area, y, &app.config.text.connectivity, app.theme.style());
    y += 1;

    let record = app.record();
    let target = [format!(
        "Expected server: {} ({}), port {}",
        record.server_address_value,
        record.server_address_kind.label(),
        record.port
    )];
    y = draw_lines(frame, area, y, &target, app.theme.muted_style());
    y += 1;

    let status_style = match app.outcome {
        ConnectivityOutcome::Untested => app.theme.muted_style(),
        ConnectivityOutcome::Passed => app.theme.success_style(),
        ConnectivityOutcome::Failed => app.theme.error_style(),
    };
    if y < area.y + area.height {
        frame.render_widget(
            Paragraph::new(format!("Status: {}", app.outcome.label())).style(status_style),
            Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
        );
    }

    let button = match app.outcome {
        ConnectivityOutcome::Passed => " [Enter] Finish ",
        _ => " [y] Online  [n] Offline  [Enter] Troubleshoot ",
    };
    draw_button(frame, area, button, app);
}
