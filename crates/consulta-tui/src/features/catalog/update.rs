//! Home screen reducer.
//!
//! Key handling for browsing, slot selection, and booking. Everything here
//! is synchronous; the catalog has no persistence.

use consulta_core::catalog::{
    BookedConsultation, MSG_ALREADY_BOOKED, MSG_SELECT_SLOT, booking_confirmation,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::CatalogState;

/// Handles a key press on the home screen.
pub fn handle_key(catalog: &mut CatalogState, key: KeyEvent) {
    if catalog.search_focused {
        handle_search_key(catalog, key);
        return;
    }

    match key.code {
        KeyCode::Char('/') => {
            catalog.search_focused = true;
        }
        KeyCode::Tab => {
            catalog.filter_index = (catalog.filter_index + 1) % catalog.specializations.len();
            catalog.clamp_cursor();
        }
        KeyCode::BackTab => {
            catalog.filter_index = catalog
                .filter_index
                .checked_sub(1)
                .unwrap_or(catalog.specializations.len() - 1);
            catalog.clamp_cursor();
        }
        KeyCode::Up => {
            catalog.cursor = catalog.cursor.saturating_sub(1);
        }
        KeyCode::Down => {
            let len = catalog.filtered().len();
            if catalog.cursor + 1 < len {
                catalog.cursor += 1;
            }
        }
        KeyCode::Left => cycle_slot(catalog, -1),
        KeyCode::Right => cycle_slot(catalog, 1),
        KeyCode::Enter => book_selected(catalog),
        _ => {}
    }
}

fn handle_search_key(catalog: &mut CatalogState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            catalog.search_focused = false;
        }
        KeyCode::Backspace => {
            catalog.search.pop();
            catalog.clamp_cursor();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            catalog.search.push(c);
            catalog.clamp_cursor();
        }
        _ => {}
    }
}

/// Handles pasted text while the search box is focused.
pub fn handle_paste(catalog: &mut CatalogState, text: &str) {
    if catalog.search_focused {
        catalog.search.push_str(text);
        catalog.clamp_cursor();
    }
}

/// Moves the slot selection of the consultation under the cursor.
///
/// Booked consultations keep their slot; selecting a slot clears the
/// booking message.
fn cycle_slot(catalog: &mut CatalogState, delta: i32) {
    let Some(consultation) = catalog.current() else {
        return;
    };
    let id = consultation.id;
    let slots = consultation.available_slots.clone();
    if slots.is_empty() || catalog.bookings.contains_key(&id) {
        return;
    }

    let current = catalog
        .selected_slots
        .get(&id)
        .and_then(|slot| slots.iter().position(|s| s == slot));
    let next = match current {
        None => {
            if delta > 0 {
                0
            } else {
                slots.len() - 1
            }
        }
        Some(index) => (index as i32 + delta).rem_euclid(slots.len() as i32) as usize,
    };

    catalog.selected_slots.insert(id, slots[next].clone());
    catalog.message = None;
}

/// Books the consultation under the cursor.
///
/// Guards, in order: a slot must be selected, and the consultation must not
/// already be booked. A successful booking records the slot and the price
/// paid.
pub fn book_selected(catalog: &mut CatalogState) {
    let Some(consultation) = catalog.current() else {
        return;
    };
    let id = consultation.id;
    let title = consultation.title.clone();
    let price_usd = consultation.price_usd;

    let Some(slot) = catalog.selected_slots.get(&id).cloned() else {
        catalog.message = Some(MSG_SELECT_SLOT.to_string());
        return;
    };
    if catalog.bookings.contains_key(&id) {
        catalog.message = Some(MSG_ALREADY_BOOKED.to_string());
        return;
    }

    catalog.bookings.insert(
        id,
        BookedConsultation {
            selected_slot: slot.clone(),
            paid_amount_usd: price_usd,
        },
    );
    catalog.message = Some(booking_confirmation(&title, &slot));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn test_booking_requires_selected_slot() {
        let mut catalog = CatalogState::new();

        book_selected(&mut catalog);

        assert!(catalog.bookings.is_empty());
        assert_eq!(catalog.message.as_deref(), Some(MSG_SELECT_SLOT));
    }

    #[test]
    fn test_booking_records_slot_and_price() {
        let mut catalog = CatalogState::new();
        handle_key(&mut catalog, key(KeyCode::Right));
        book_selected(&mut catalog);

        let booking = catalog.bookings.get(&1).expect("booking");
        assert_eq!(booking.selected_slot, "09:00");
        assert_eq!(booking.paid_amount_usd, 35);
        assert_eq!(
            catalog.message.as_deref(),
            Some("Booked and paid: General Health Check Consultation at 09:00.")
        );
    }

    #[test]
    fn test_double_booking_is_rejected() {
        let mut catalog = CatalogState::new();
        handle_key(&mut catalog, key(KeyCode::Right));
        book_selected(&mut catalog);

        book_selected(&mut catalog);

        assert_eq!(catalog.bookings.len(), 1);
        assert_eq!(catalog.message.as_deref(), Some(MSG_ALREADY_BOOKED));
    }

    #[test]
    fn test_slot_selection_clears_message_and_skips_booked() {
        let mut catalog = CatalogState::new();
        handle_key(&mut catalog, key(KeyCode::Right));
        book_selected(&mut catalog);
        assert!(catalog.message.is_some());

        // Booked consultation: selection is frozen, message stays.
        handle_key(&mut catalog, key(KeyCode::Right));
        assert_eq!(catalog.selected_slots.get(&1).map(String::as_str), Some("09:00"));
        assert!(catalog.message.is_some());

        // Another consultation: selecting clears the message.
        handle_key(&mut catalog, key(KeyCode::Down));
        handle_key(&mut catalog, key(KeyCode::Right));
        assert!(catalog.message.is_none());
    }

    #[test]
    fn test_slot_cycling_wraps_both_ways() {
        let mut catalog = CatalogState::new();

        handle_key(&mut catalog, key(KeyCode::Left));
        assert_eq!(catalog.selected_slots.get(&1).map(String::as_str), Some("14:00"));

        handle_key(&mut catalog, key(KeyCode::Right));
        assert_eq!(catalog.selected_slots.get(&1).map(String::as_str), Some("09:00"));
    }

    #[test]
    fn test_search_narrows_and_clamps_cursor() {
        let mut catalog = CatalogState::new();
        for _ in 0..4 {
            handle_key(&mut catalog, key(KeyCode::Down));
        }
        assert_eq!(catalog.cursor, 4);

        handle_key(&mut catalog, key(KeyCode::Char('/')));
        for c in "career".chars() {
            handle_key(&mut catalog, key(KeyCode::Char(c)));
        }
        handle_key(&mut catalog, key(KeyCode::Esc));

        let filtered = catalog.filtered();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 3);
        assert_eq!(catalog.cursor, 0);
    }

    #[test]
    fn test_filter_cycling_wraps() {
        let mut catalog = CatalogState::new();
        assert_eq!(catalog.specialization(), "All");

        handle_key(&mut catalog, key(KeyCode::BackTab));
        assert_eq!(catalog.filter_index, catalog.specializations.len() - 1);

        handle_key(&mut catalog, key(KeyCode::Tab));
        assert_eq!(catalog.specialization(), "All");
    }
}
