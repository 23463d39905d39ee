//! Auth feature view.
//!
//! Pure rendering of the centered sign-in / create-account form.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::state::AuthState;

/// Width of the centered form.
const FORM_WIDTH: u16 = 52;

/// Renders the auth screen.
pub fn render_auth(frame: &mut Frame, auth: &AuthState, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        if auth.register_mode {
            "Create account"
        } else {
            "Sign in"
        },
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for &field in auth.visible_fields() {
        let focused = auth.focus == field;
        let marker = if focused { "> " } else { "  " };
        let value = field_display(auth.field(field), field.is_secret(), focused);
        let label_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<17}", field.label()), label_style),
            Span::raw(value),
        ]));
    }

    lines.push(Line::default());
    if let Some(message) = &auth.message {
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        )));
        lines.push(Line::default());
    }

    let button = if auth.loading {
        Span::styled(
            if auth.register_mode {
                "Registering..."
            } else {
                "Signing in..."
            },
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            if auth.register_mode {
                "[ Enter: Register ]"
            } else {
                "[ Enter: Login ]"
            },
            Style::default().fg(Color::Green),
        )
    };
    lines.push(Line::from(button));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        if auth.register_mode {
            "Already have an account? Ctrl+R to login"
        } else {
            "No account yet? Ctrl+R to register"
        },
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(Span::styled(
        "Tab: next field · Ctrl+C: quit",
        Style::default().fg(Color::DarkGray),
    )));

    let form_area = centered_area(area, FORM_WIDTH, lines.len() as u16 + 2);
    let block = Block::default().borders(Borders::ALL).title(" consulta ");
    let para = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Left);
    frame.render_widget(para, form_area);
}

fn field_display(value: &str, secret: bool, focused: bool) -> String {
    let mut shown = if secret {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };
    if focused {
        shown.push('_');
    }
    shown
}

fn centered_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    )
}
