//! Root reducer.
//!
//! Pure function of `(state, event)`; side effects come back to the runtime
//! as `UiEffect`s. Input routing follows the session phase: anonymous input
//! goes to the auth form, authenticated input to the catalog.

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::features::{auth, catalog};
use crate::state::AppState;

/// Applies one event to the application state.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(terminal_event) => handle_terminal(app, terminal_event),
        UiEvent::Auth(AuthUiEvent::Completed {
            generation,
            kind,
            outcome,
        }) => {
            auth::update::apply_outcome(&mut app.auth, generation, kind, outcome);
            vec![]
        }
    }
}

fn handle_terminal(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
                return vec![];
            }
            if app.auth.current_user.is_some() {
                if key.code == KeyCode::Char('l')
                    && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    auth::update::logout(&mut app.auth);
                    // Bookings and selections are session-local.
                    app.catalog = catalog::CatalogState::new();
                } else {
                    catalog::update::handle_key(&mut app.catalog, key);
                }
                vec![]
            } else {
                auth::update::handle_key(&mut app.auth, key)
            }
        }
        Event::Paste(text) => {
            if app.auth.current_user.is_some() {
                catalog::update::handle_paste(&mut app.catalog, &text);
            } else {
                auth::update::handle_paste(&mut app.auth, &text);
            }
            vec![]
        }
        _ => vec![],
    }
}

#[cfg(test)]
mod tests {
    use consulta_core::accounts::{Account, AuthOutcome};
    use crossterm::event::KeyEvent;

    use super::*;
    use crate::features::auth::SubmitKind;

    fn ctrl(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn logged_in_state() -> AppState {
        let mut app = AppState::new();
        app.auth.current_user = Some(Account {
            id: 1,
            full_name: "Ann".to_string(),
            email: "ann@test.com".to_string(),
            password: "abcdef".to_string(),
        });
        app
    }

    #[test]
    fn test_ctrl_c_quits_from_any_phase() {
        let mut app = AppState::new();
        update(&mut app, UiEvent::Terminal(ctrl('c')));
        assert!(app.should_quit);

        let mut app = logged_in_state();
        update(&mut app, UiEvent::Terminal(ctrl('c')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_logout_resets_catalog_session() {
        let mut app = logged_in_state();
        app.catalog.selected_slots.insert(1, "09:00".to_string());
        catalog::update::book_selected(&mut app.catalog);
        assert_eq!(app.catalog.bookings.len(), 1);

        update(&mut app, UiEvent::Terminal(ctrl('l')));

        assert_eq!(app.auth.current_user, None);
        assert!(app.catalog.bookings.is_empty());
        assert!(app.catalog.selected_slots.is_empty());
    }

    #[test]
    fn test_keys_route_by_phase() {
        // Anonymous: typing lands in the focused auth field.
        let mut app = AppState::new();
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::from(KeyCode::Char('a')))),
        );
        assert_eq!(app.auth.email, "a");

        // Authenticated: the same key is catalog input, not form input.
        let mut app = logged_in_state();
        app.auth.email = "ann@test.com".to_string();
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::from(KeyCode::Right))),
        );
        assert_eq!(
            app.catalog.selected_slots.get(&1).map(String::as_str),
            Some("09:00")
        );
        assert_eq!(app.auth.email, "ann@test.com");
    }

    #[test]
    fn test_completed_event_reaches_auth_state() {
        let mut app = AppState::new();
        app.auth.email = "ann@test.com".to_string();
        app.auth.password = "abcdef".to_string();
        let effects = update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent::from(KeyCode::Enter))),
        );
        assert_eq!(effects.len(), 1);

        let generation = app.auth.generation;
        update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::Completed {
                generation,
                kind: SubmitKind::Login,
                outcome: AuthOutcome::Success(Account {
                    id: 1,
                    full_name: "Ann".to_string(),
                    email: "ann@test.com".to_string(),
                    password: "abcdef".to_string(),
                }),
            }),
        );

        assert!(app.auth.current_user.is_some());
        assert_eq!(app.auth.message.as_deref(), Some("Welcome back, Ann"));
    }
}
