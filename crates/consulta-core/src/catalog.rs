//! Consultation catalog.
//!
//! Static sample data plus the pure browsing/booking rules. Nothing here is
//! persisted; bookings live for the session only.

use serde::{Deserialize, Serialize};

/// Specialization filter value matching every consultation.
pub const ALL_SPECIALIZATIONS: &str = "All";

/// Message shown when booking without a selected slot.
pub const MSG_SELECT_SLOT: &str = "Please select a time slot before booking.";

/// Message shown when booking a consultation twice.
pub const MSG_ALREADY_BOOKED: &str = "This consultation is already booked.";

/// Message shown when search/filter matches nothing.
pub const MSG_NO_RESULTS: &str = "No consultations found for current search/filter";

/// A bookable consultation offer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultation {
    pub id: u32,
    pub title: String,
    pub consultant_name: String,
    pub specialization: String,
    pub price_usd: u32,
    pub duration_minutes: u32,
    pub available_slots: Vec<String>,
}

/// A booking made during this session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookedConsultation {
    pub selected_slot: String,
    pub paid_amount_usd: u32,
}

/// Confirmation message for a completed booking.
pub fn booking_confirmation(title: &str, slot: &str) -> String {
    format!("Booked and paid: {title} at {slot}.")
}

/// Returns true when the consultation matches the keyword and specialization
/// filter.
///
/// The keyword is trimmed and matched case-insensitively against title,
/// consultant name, and specialization; a blank keyword matches everything.
pub fn matches_filter(consultation: &Consultation, keyword: &str, specialization: &str) -> bool {
    let keyword = keyword.trim().to_lowercase();
    let matches_keyword = keyword.is_empty()
        || consultation.title.to_lowercase().contains(&keyword)
        || consultation.consultant_name.to_lowercase().contains(&keyword)
        || consultation.specialization.to_lowercase().contains(&keyword);
    let matches_specialization =
        specialization == ALL_SPECIALIZATIONS || consultation.specialization == specialization;
    matches_keyword && matches_specialization
}

/// Returns the filter options: "All" plus the distinct specializations,
/// sorted.
pub fn specialization_options(consultations: &[Consultation]) -> Vec<String> {
    let mut options: Vec<String> = consultations
        .iter()
        .map(|c| c.specialization.clone())
        .collect();
    options.sort();
    options.dedup();
    options.insert(0, ALL_SPECIALIZATIONS.to_string());
    options
}

/// The built-in consultation catalog.
pub fn sample_consultations() -> Vec<Consultation> {
    fn consultation(
        id: u32,
        title: &str,
        consultant_name: &str,
        specialization: &str,
        price_usd: u32,
        duration_minutes: u32,
        slots: &[&str],
    ) -> Consultation {
        Consultation {
            id,
            title: title.to_string(),
            consultant_name: consultant_name.to_string(),
            specialization: specialization.to_string(),
            price_usd,
            duration_minutes,
            available_slots: slots.iter().map(ToString::to_string).collect(),
        }
    }

    vec![
        consultation(
            1,
            "General Health Check Consultation",
            "Dr. Emily Clark",
            "General Practitioner",
            35,
            30,
            &["09:00", "11:30", "14:00"],
        ),
        consultation(
            2,
            "Nutrition and Meal Planning",
            "Anna Brown",
            "Nutritionist",
            45,
            40,
            &["10:00", "13:00", "16:30"],
        ),
        consultation(
            3,
            "Career Mentoring Session",
            "Michael Lewis",
            "Career Consultant",
            50,
            45,
            &["08:30", "12:30", "18:00"],
        ),
        consultation(
            4,
            "Stress Management Consultation",
            "Dr. Sophie Hall",
            "Psychologist",
            60,
            50,
            &["09:30", "15:00", "19:00"],
        ),
        consultation(
            5,
            "Personal Finance Consultation",
            "John Miller",
            "Financial Advisor",
            55,
            45,
            &["10:30", "14:30", "17:30"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_matches_any_field_case_insensitive() {
        let catalog = sample_consultations();
        let hits: Vec<u32> = catalog
            .iter()
            .filter(|c| matches_filter(c, "  CLARK ", ALL_SPECIALIZATIONS))
            .map(|c| c.id)
            .collect();
        assert_eq!(hits, vec![1]);
    }

    #[test]
    fn test_blank_keyword_matches_everything() {
        let catalog = sample_consultations();
        assert!(
            catalog
                .iter()
                .all(|c| matches_filter(c, "   ", ALL_SPECIALIZATIONS))
        );
    }

    #[test]
    fn test_specialization_filter_is_exact() {
        let catalog = sample_consultations();
        let hits: Vec<u32> = catalog
            .iter()
            .filter(|c| matches_filter(c, "", "Psychologist"))
            .map(|c| c.id)
            .collect();
        assert_eq!(hits, vec![4]);
    }

    #[test]
    fn test_specialization_options_sorted_with_all_first() {
        let options = specialization_options(&sample_consultations());
        assert_eq!(options[0], ALL_SPECIALIZATIONS);
        let mut rest = options[1..].to_vec();
        rest.sort();
        assert_eq!(rest, options[1..].to_vec());
        assert_eq!(options.len(), 6);
    }

    #[test]
    fn test_booking_confirmation_message() {
        assert_eq!(
            booking_confirmation("Career Mentoring Session", "12:30"),
            "Booked and paid: Career Mentoring Session at 12:30."
        );
    }
}
