//! Home screen view.
//!
//! Pure rendering: greeting header, search box, specialization filter row,
//! booking feedback, and the consultation cards.

use consulta_core::catalog::{Consultation, MSG_NO_RESULTS};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::state::CatalogState;

/// Lines a single card occupies, separator included.
const CARD_HEIGHT: usize = 5;

/// Renders the home screen.
pub fn render_home(frame: &mut Frame, catalog: &CatalogState, full_name: &str, area: Rect) {
    let message_height = u16::from(catalog.message.is_some());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(1), // search
            Constraint::Length(1), // filter row
            Constraint::Length(message_height),
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // cards
        ])
        .split(area.inner(ratatui::layout::Margin::new(1, 0)));

    frame.render_widget(header_line(full_name), chunks[0]);
    frame.render_widget(search_line(catalog), chunks[1]);
    frame.render_widget(filter_line(catalog), chunks[2]);
    if let Some(message) = &catalog.message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.clone(),
                Style::default().fg(Color::Yellow),
            )),
            chunks[3],
        );
    }
    render_cards(frame, catalog, chunks[5]);
}

fn header_line(full_name: &str) -> Paragraph<'static> {
    Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Hello, {full_name}"),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  ·  Available consultations  ·  Ctrl+L: logout",
            Style::default().fg(Color::DarkGray),
        ),
    ]))
}

fn search_line(catalog: &CatalogState) -> Paragraph<'static> {
    let style = if catalog.search_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let mut value = catalog.search.clone();
    if catalog.search_focused {
        value.push('_');
    } else if value.is_empty() {
        value = "(/ to search consultations or specialists)".to_string();
    }
    Paragraph::new(Line::from(vec![
        Span::styled("Search: ", style),
        Span::styled(value, style),
    ]))
}

fn filter_line(catalog: &CatalogState) -> Paragraph<'static> {
    let mut spans = vec![Span::styled(
        "Filter (Tab): ",
        Style::default().fg(Color::DarkGray),
    )];
    for (index, option) in catalog.specializations.iter().enumerate() {
        let style = if index == catalog.filter_index {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {option} "), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn render_cards(frame: &mut Frame, catalog: &CatalogState, area: Rect) {
    let filtered = catalog.filtered();
    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                MSG_NO_RESULTS,
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::with_capacity(filtered.len() * CARD_HEIGHT);
    for (index, consultation) in filtered.iter().enumerate() {
        lines.extend(card_lines(catalog, consultation, index == catalog.cursor));
    }

    // Keep the cursor's card in view.
    let cursor_top = catalog.cursor * CARD_HEIGHT;
    let visible = area.height as usize;
    let scroll = (cursor_top + CARD_HEIGHT).saturating_sub(visible).min(cursor_top);

    frame.render_widget(Paragraph::new(lines).scroll((scroll as u16, 0)), area);
}

fn card_lines(
    catalog: &CatalogState,
    consultation: &Consultation,
    selected: bool,
) -> Vec<Line<'static>> {
    let marker = if selected { "> " } else { "  " };
    let title_style = if selected {
        Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!("{marker}{}", consultation.title),
            title_style,
        )),
        Line::from(Span::raw(format!(
            "  {} · {} · ${} · {} min",
            consultation.consultant_name,
            consultation.specialization,
            consultation.price_usd,
            consultation.duration_minutes
        ))),
    ];

    if let Some(booking) = catalog.bookings.get(&consultation.id) {
        lines.push(Line::from(Span::styled(
            format!(
                "  Booked slot: {} · Payment received: ${}",
                booking.selected_slot, booking.paid_amount_usd
            ),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::default());
    } else {
        lines.push(slots_line(catalog, consultation));
        lines.push(book_hint_line(catalog, consultation, selected));
    }
    lines.push(Line::default());
    lines
}

fn slots_line(catalog: &CatalogState, consultation: &Consultation) -> Line<'static> {
    let selected_slot = catalog.selected_slots.get(&consultation.id);
    let mut spans = vec![Span::styled(
        "  Slots (←/→): ",
        Style::default().fg(Color::DarkGray),
    )];
    for slot in &consultation.available_slots {
        let style = if Some(slot) == selected_slot {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {slot} "), style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn book_hint_line(
    catalog: &CatalogState,
    consultation: &Consultation,
    selected: bool,
) -> Line<'static> {
    match catalog.selected_slots.get(&consultation.id) {
        Some(slot) => {
            let hint = if selected {
                format!(
                    "  Selected slot: {slot} · Enter: book and pay ${}",
                    consultation.price_usd
                )
            } else {
                format!("  Selected slot: {slot}")
            };
            Line::from(Span::styled(hint, Style::default().fg(Color::Green)))
        }
        None => Line::from(Span::styled(
            "  Select a time slot to book",
            Style::default().fg(Color::DarkGray),
        )),
    }
}
