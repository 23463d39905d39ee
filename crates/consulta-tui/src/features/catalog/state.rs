//! Home screen state.

use std::collections::HashMap;

use consulta_core::catalog::{self, BookedConsultation, Consultation};

/// Home screen state.
///
/// Bookings and slot selections are keyed by consultation id and live for
/// the session only; nothing here is persisted.
pub struct CatalogState {
    /// The catalog being browsed.
    pub consultations: Vec<Consultation>,
    /// Filter options: "All" plus the distinct specializations, sorted.
    pub specializations: Vec<String>,
    /// Search keyword.
    pub search: String,
    /// Whether typed characters go to the search box.
    pub search_focused: bool,
    /// Index of the active specialization filter.
    pub filter_index: usize,
    /// Cursor into the filtered list.
    pub cursor: usize,
    /// Selected time slot per consultation.
    pub selected_slots: HashMap<u32, String>,
    /// Completed bookings per consultation.
    pub bookings: HashMap<u32, BookedConsultation>,
    /// Booking feedback message.
    pub message: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    /// Creates the home screen state over the built-in catalog.
    pub fn new() -> Self {
        let consultations = catalog::sample_consultations();
        let specializations = catalog::specialization_options(&consultations);
        Self {
            consultations,
            specializations,
            search: String::new(),
            search_focused: false,
            filter_index: 0,
            cursor: 0,
            selected_slots: HashMap::new(),
            bookings: HashMap::new(),
            message: None,
        }
    }

    /// The active specialization filter value.
    pub fn specialization(&self) -> &str {
        self.specializations
            .get(self.filter_index)
            .map_or(catalog::ALL_SPECIALIZATIONS, String::as_str)
    }

    /// Consultations matching the current search and filter.
    pub fn filtered(&self) -> Vec<&Consultation> {
        self.consultations
            .iter()
            .filter(|c| catalog::matches_filter(c, &self.search, self.specialization()))
            .collect()
    }

    /// The consultation under the cursor, if any.
    pub fn current(&self) -> Option<&Consultation> {
        self.filtered().into_iter().nth(self.cursor)
    }

    /// Keeps the cursor inside the filtered list after search/filter edits.
    pub fn clamp_cursor(&mut self) {
        let len = self.filtered().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}
