//! Shared primitive IDs and date helpers.

/// Monotonic question identifier.
pub type QuestionId = u64;

/// Free-text solve date, `dd/mm/yyyy` by convention; empty while unsolved.
pub type SolvedDate = String;

/// `chrono` format used for the "today" default.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Current local date rendered with [`DATE_FORMAT`].
pub fn today() -> SolvedDate {
    chrono::Local::now().format(DATE_FORMAT).to_string()
}
