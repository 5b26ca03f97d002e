mod connectivity;
mod fields;
mod finish;
mod port;
mod server;
mod troubleshooting;
mod welcome;
mod wiring;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};

use super::steps::Step;
use super::SetupApp;
use crate::ui::Layout;
use crate::vim::VimMode;

/// Smallest terminal the wizard layout fits in
const MIN_WIDTH: u16 = 30;
const MIN_HEIGHT: u16 = 15;

/// Main draw function for the setup wizard
pub fn draw(frame: &mut Frame, app: &SetupApp) {
    let area = frame.area();
    frame.render_widget(Clear, area);

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        draw_too_small(frame, area, app);
        return;
    }

    let controller = app.controller();
    let layout = Layout::new(area, controller.shows_progress());

    draw_header(frame, layout.header, app);

    if controller.shows_progress() {
        draw_sidebar(frame, layout.sidebar, app);
        draw_progress(frame, layout.progress, app);
    }

    draw_step(frame, layout.body, app);
    draw_message(frame, layout.message, app);
    draw_status_bar(frame, layout.status, app);

    // Overlays
    if app.confirm_quit {
        draw_confirm_dialog(frame, app);
    }

    if app.show_help {
        draw_help(frame, app);
    }
}

/// One-line notice in place of the wizard; clipped to whatever fits
fn draw_too_small(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.is_empty() {
        return;
    }
    let notice = format!("Terminal too small (need {MIN_WIDTH}x{MIN_HEIGHT})");
    frame.render_widget(
        Paragraph::new(notice)
            .style(app.theme.error_style())
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_step(frame: &mut Frame, area: Rect, app: &SetupApp) {
    match app.current_step() {
        Step::Welcome => welcome::draw_welcome(frame, area, app),
        Step::Wiring => wiring::draw_wiring_step(frame, area, app),
        Step::ServerSetup => server::draw_server_step(frame, area, app),
        Step::PortSetup => port::draw_port_step(frame, area, app),
        Step::ConnectivityTest => connectivity::draw_connectivity_step(frame, area, app),
        Step::Troubleshooting => troubleshooting::draw_troubleshooting_step(frame, area, app),
        Step::Finish => finish::draw_finish(frame, area, app),
    }
}

/// Draw header bar (1 line, no borders)
fn draw_header(frame: &mut Frame, area: Rect, app: &SetupApp) {
    frame.render_widget(Clear, area);

    let general = &app.config.general;
    let title = format!(
        " {} {} (v{}) ",
        general.title,
        general.device,
        env!("CARGO_PKG_VERSION")
    );
    frame.render_widget(
        Paragraph::new(title).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        area,
    );
}

fn draw_sidebar(frame: &mut Frame, area: Rect, app: &SetupApp) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(" Steps ");

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let current = app.current_step();
    for step in Step::ALL {
        let row = step.index() as u16;
        if row >= inner.height {
            break;
        }

        let marker = if step.index() < current.index() { "[x]" } else { "[ ]" };
        let line_text = format!(" {marker} {}. {}", row + 1, step.short_name());

        let style = if step == current {
            app.theme.primary_style().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if step.index() < current.index() {
            app.theme.secondary_style()
        } else {
            app.theme.style()
        };

        frame.render_widget(
            Paragraph::new(line_text).style(style),
            Rect::new(inner.x, inner.y + row, inner.width, 1),
        );
    }
}

/// Step title, "Step i of N" and the progress gauge
fn draw_progress(frame: &mut Frame, area: Rect, app: &SetupApp) {
    let controller = app.controller();
    let step = controller.current_step();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(format!(" {} ", step.title()))
        .title_style(app.theme.primary_style().add_modifier(Modifier::BOLD))
        .title(
            Line::from(format!(
                " Step {} of {} ",
                controller.step_index() + 1,
                controller.total_steps()
            ))
            .right_aligned(),
        );

    let percent = controller.progress_percent();
    let gauge = Gauge::default()
        .block(block)
        .gauge_style(app.theme.gauge_style())
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(format!("{percent:.0}%"));

    frame.render_widget(Clear, area);
    frame.render_widget(gauge, area);
}

fn draw_message(frame: &mut Frame, area: Rect, app: &SetupApp) {
    let Some(msg) = &app.message else {
        return;
    };
    if area.height == 0 {
        return;
    }

    let (title, border_style, text_style) = if msg.is_error {
        (" Error ", app.theme.error_style(), app.theme.error_style())
    } else {
        (" Info ", app.theme.secondary_style(), app.theme.style())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title)
        .title_style(border_style.add_modifier(Modifier::BOLD));

    let content = Line::from(vec![Span::styled(msg.text.as_str(), text_style)]);

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &SetupApp) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(Clear, area);

    let mode_span = Span::styled(
        format!(" {} ", app.vim_mode.display_name()),
        app.theme.mode_style(app.vim_mode),
    );

    let after_mode = if app.vim_mode == VimMode::Command {
        Span::styled(format!(":{}", app.command_buffer.content()), app.theme.style())
    } else {
        Span::styled(app.status_bar.left_hint.clone(), app.theme.muted_style())
    };

    let left_line = Line::from(vec![mode_span, Span::raw(" "), after_mode]);
    frame.render_widget(
        Paragraph::new(left_line),
        Rect::new(area.x, area.y, area.width * 2 / 3, 1),
    );

    let controller = app.controller();
    let right_text = format!(
        "{}/{}  {}",
        controller.step_index() + 1,
        controller.total_steps(),
        app.status_bar.right_hint
    );

    frame.render_widget(
        Paragraph::new(right_text)
            .style(app.theme.muted_style())
            .alignment(Alignment::Right),
        Rect::new(area.x + area.width / 3, area.y, area.width - area.width / 3, 1),
    );
}

fn draw_confirm_dialog(frame: &mut Frame, app: &SetupApp) {
    let width = 44.min(frame.area().width.saturating_sub(4));
    let area = Layout::centered_box(frame.area(), width, 7);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.primary_style())
        .title(" Quit Setup ");

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    frame.render_widget(
        Paragraph::new("Quit without finishing the setup?")
            .style(app.theme.style().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + 1, inner.width, 1),
    );

    let hints = Line::from(vec![
        Span::styled("[", app.theme.style()),
        Span::styled("Y", app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("]es / [", app.theme.style()),
        Span::styled("N", app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Span::styled("]o", app.theme.style()),
    ]);

    frame.render_widget(
        Paragraph::new(hints).alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + 3, inner.width, 1),
    );
}

fn draw_help(frame: &mut Frame, app: &SetupApp) {
    let help_text = [
        "",
        "Navigation:",
        "",
        "  l / Right      Next step",
        "  h / Left       Previous step",
        "  1-7            Jump to step",
        "  j/k, Tab       Move between fields",
        "  Space          Toggle option",
        "  Enter          Edit / toggle / continue",
        "  y / n          Device online / offline (test step)",
        "",
        "Vim Modes:",
        "",
        "  i              Edit text field",
        "  Esc            Return to normal",
        "  :              Command mode",
        "",
        "Commands: :next :back :goto <step> :restart :wq :q",
        "",
        "Press q or Esc to close",
    ];

    let width = 60.min(frame.area().width.saturating_sub(4));
    let height = (help_text.len() as u16 + 2).min(frame.area().height.saturating_sub(2));
    let area = Layout::centered_box(frame.area(), width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.border_style())
        .title(" Help ");

    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    for (i, line) in help_text.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(*line).style(app.theme.style()),
            Rect::new(inner.x, inner.y + i as u16, inner.width, 1),
        );
    }
}

/// Render `lines` one per row starting at `y`; returns the next free row.
pub(crate) fn draw_lines(
    frame: &mut Frame,
    area: Rect,
    mut y: u16,
    lines: &[String],
    style: Style,
) -> u16 {
    for line in lines {
        if y >= area.y + area.height {
            break;
        }
        frame.render_widget(
            Paragraph::new(line.as_str()).style(style),
            Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
        );
        y += 1;
    }
    y
}

/// Bold step heading at the top of the body
pub(crate) fn draw_title(frame: &mut Frame, area: Rect, text: &str, app: &SetupApp) -> u16 {
    let y = area.y + 1;
    frame.render_widget(
        Paragraph::new(text).style(app.theme.primary_style().add_modifier(Modifier::BOLD)),
        Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1),
    );
    y + 2
}

/// Button in the bottom-left corner of the body
pub(crate) fn draw_button(frame: &mut Frame, area: Rect, text: &str, app: &SetupApp) {
    if area.height < 4 {
        return;
    }
    let width = (text.len() as u16).min(area.width.saturating_sub(4));
    frame.render_widget(
        Paragraph::new(text).style(app.theme.button_style(app.vim_mode == VimMode::Normal)),
        Rect::new(area.x + 2, area.y + area.height - 3, width, 1),
    );
}
