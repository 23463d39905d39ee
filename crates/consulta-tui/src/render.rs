//! Top-level view dispatch.

use ratatui::Frame;

use crate::features::{auth, catalog};
use crate::state::AppState;

/// Draws the whole frame from the current state.
///
/// The screen follows the session phase: the auth form while anonymous, the
/// consultation catalog once a user is signed in.
pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    match &app.auth.current_user {
        Some(account) => {
            catalog::render::render_home(frame, &app.catalog, &account.full_name, area);
        }
        None => auth::render::render_auth(frame, &app.auth, area),
    }
}
