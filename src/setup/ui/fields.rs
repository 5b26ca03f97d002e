use ratatui::{prelude::*, widgets::Paragraph};

use super::super::form::Field;
use super::super::SetupApp;
use crate::vim::VimMode;

const LABEL_WIDTH: u16 = 26;

fn label_style(app: &SetupApp, focused: bool) -> Style {
    if focused {
        app.theme.primary_style()
    } else {
        app.theme.style()
    }
}

/// Text field with a vim-style cursor: `|` in insert mode, a block otherwise.
pub fn draw_text_field(frame: &mut Frame, area: Rect, y: u16, field: Field, app: &SetupApp) {
    let Some(buffer) = app.form.buffer(field) else {
        return;
    };
    let focused = app.form.is_focused(field);
    let inserting = focused && app.vim_mode == VimMode::Insert;

    frame.render_widget(
        Paragraph::new(field.label()).style(label_style(app, focused)),
        Rect::new(area.x + 2, y, LABEL_WIDTH.min(area.width.saturating_sub(4)), 1),
    );

    let field_x = area.x + 2 + LABEL_WIDTH;
    let field_width = area.width.saturating_sub(LABEL_WIDTH + 4);
    if field_width == 0 {
        return;
    }
    let field_area = Rect::new(field_x, y, field_width, 1);

    let display = buffer.display('*');
    let cursor = buffer.cursor();

    if inserting {
        let before: String = display.chars().take(cursor).collect();
        let after: String = display.chars().skip(cursor).collect();

        let line = Line::from(vec![
            Span::styled(before, app.theme.style()),
            Span::styled("|", app.theme.primary_style().add_modifier(Modifier::BOLD)),
            Span::styled(after, app.theme.style()),
        ]);
        frame.render_widget(Paragraph::new(line), field_area);
    } else if focused {
        let chars: Vec<char> = display.chars().collect();
        let mut spans: Vec<Span> = chars
            .iter()
            .enumerate()
            .map(|(i, ch)| {
                let style = if i == cursor {
                    app.theme.style().add_modifier(Modifier::REVERSED)
                } else {
                    app.theme.style()
                };
                Span::styled(ch.to_string(), style)
            })
            .collect();
        if cursor >= chars.len() {
            spans.push(Span::styled(" ", app.theme.style().add_modifier(Modifier::REVERSED)));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), field_area);
    } else {
        let shown = if display.is_empty() { "(empty)".to_string() } else { display };
        frame.render_widget(
            Paragraph::new(shown).style(app.theme.muted_style()),
            field_area,
        );
    }
}

/// `[x]`/`[ ]` checkbox or a two-way choice, rendered on one row.
pub fn draw_choice(
    frame: &mut Frame,
    area: Rect,
    y: u16,
    field: Field,
    value: &str,
    app: &SetupApp,
) {
    let focused = app.form.is_focused(field);
    let marker = if focused { ">" } else { " " };

    let line = Line::from(vec![
        Span::styled(format!("{marker} "), app.theme.primary_style()),
        Span::styled(value.to_string(), label_style(app, focused)),
        Span::raw(" "),
        Span::styled(field.label(), label_style(app, focused)),
    ]);
    frame.render_widget(
        Paragraph::new(line),
        Rect::new(area.x + 1, y, area.width.saturating_sub(3), 1),
    );
}

pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}
