//! Search inputs, filtering and autocomplete.
//!
//! # Modules
//!
//! - [`filter`]: Substring filter over the composite searchable text
//! - [`suggest`]: Bounded autocomplete suggestions
//!
//! [`SearchFilters`] holds the transient search-bar state owned by the app
//! layer. Both the filter and the suggestion generator are pure functions of
//! `(profiles, term)`, so they are simply re-run whenever the term changes.

pub mod filter;
pub mod suggest;

pub use filter::{filter_indices, filter_profiles, searchable_text};
pub use suggest::{suggest, MAX_SUGGESTIONS, MIN_QUERY_CHARS};

/// Search-bar state: the typed term and the suggestion dropdown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// Text currently in the search bar.
    pub search_term: String,

    /// Whether the suggestion dropdown is showing.
    pub show_suggestions: bool,

    /// Last suggestion picked from the dropdown, if any.
    pub selected_suggestion: Option<String>,
}

impl SearchFilters {
    /// Replaces the term as typed and re-opens the dropdown.
    ///
    /// A typed term supersedes any previously selected suggestion.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.show_suggestions = !self.search_term.trim().is_empty();
        self.selected_suggestion = None;
    }

    /// Appends a typed character.
    pub fn push_char(&mut self, c: char) {
        let mut term = std::mem::take(&mut self.search_term);
        term.push(c);
        self.set_term(term);
    }

    /// Removes the last character of the term.
    pub fn pop_char(&mut self) {
        let mut term = std::mem::take(&mut self.search_term);
        term.pop();
        self.set_term(term);
    }

    /// Accepts `suggestion` as the new term and closes the dropdown.
    pub fn select_suggestion(&mut self, suggestion: impl Into<String>) {
        let suggestion = suggestion.into();
        tracing::debug!(suggestion = %suggestion, "suggestion selected");
        self.search_term.clone_from(&suggestion);
        self.show_suggestions = false;
        self.selected_suggestion = Some(suggestion);
    }

    /// Hides the dropdown without touching the term.
    pub fn hide_suggestions(&mut self) {
        self.show_suggestions = false;
    }

    /// Empties the term and resets the dropdown.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` when the term is blank and every profile is shown.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.search_term.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_opens_the_dropdown() {
        let mut filters = SearchFilters::default();
        filters.push_char('d');
        assert!(filters.show_suggestions);
        filters.pop_char();
        assert!(!filters.show_suggestions);
        assert!(filters.is_blank());
    }

    #[test]
    fn selecting_a_suggestion_sets_term_and_hides_dropdown() {
        let mut filters = SearchFilters::default();
        filters.set_term("dat");
        filters.select_suggestion("Data Scientist");

        assert_eq!(filters.search_term, "Data Scientist");
        assert!(!filters.show_suggestions);
        assert_eq!(filters.selected_suggestion.as_deref(), Some("Data Scientist"));

        filters.push_char('s');
        assert_eq!(filters.selected_suggestion, None);
    }

    #[test]
    fn clear_resets_everything() {
        let mut filters = SearchFilters::default();
        filters.select_suggestion("Datalab");
        filters.clear();
        assert_eq!(filters, SearchFilters::default());
    }
}
