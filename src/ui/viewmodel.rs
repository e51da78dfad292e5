//! View model types representing renderable UI state.
//!
//! View models are created by [`crate::app::AppState::compute_viewmodel`] and
//! consumed by the renderer. They hold display-ready data only: geometry is
//! already in terminal cells and every string is final.
//!
//! # Screen layout (0-indexed rows)
//!
//! ```text
//! 0        header: title, refresh indicator, theme toggle
//! 1..=3    search box
//! 4        result count and the add button
//! 5..      card grid (suggestion dropdown and overlays draw on top)
//! rows-2   border
//! rows-1   footer
//! ```

use crate::feedback::AvatarImage;
use crate::layout::Rect;

pub const HEADER_ROW: usize = 0;
pub const SEARCH_TOP: usize = 1;
pub const SEARCH_HEIGHT: usize = 3;
pub const COUNT_ROW: usize = 4;
/// First row of the suggestion dropdown, drawn over the count row and grid.
pub const SUGGESTIONS_TOP: usize = SEARCH_TOP + SEARCH_HEIGHT;
pub const GRID_TOP: usize = 5;
/// Border plus footer line.
pub const GRID_BOTTOM: usize = 2;

pub const THEME_LIGHT_LABEL: &str = "[ ☀ Light ]";
pub const THEME_DARK_LABEL: &str = "[ ☾ Dark ]";
pub const ADD_BUTTON_LABEL: &str = "[ + Add Profile ]";
pub const SEARCH_PLACEHOLDER: &str = "Search profiles...";

/// Column where a right-aligned label of `label` starts on a `cols`-wide row.
#[must_use]
pub fn right_aligned_start(label: &str, cols: usize) -> usize {
    cols.saturating_sub(label.chars().count() + 1)
}

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    /// "5 profiles" / "1 profile found for \"kim\"".
    pub result_count: String,
    /// Cards inside the scroll window.
    pub cards: Vec<CardItem>,
    /// Shown instead of the grid when no profile matches.
    pub empty_state: Option<EmptyState>,
    pub footer: FooterInfo,
    pub overlay: Option<OverlayView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    /// Toggle button label naming the theme a click switches to.
    pub theme_label: &'static str,
    pub refreshing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
    pub placeholder: &'static str,
    pub focused: bool,
    /// Dropdown entries; empty when the dropdown is closed.
    pub suggestions: Vec<SuggestionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub text: String,
    pub highlighted: bool,
}

/// One profile card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardItem {
    pub rect: Rect,
    /// Columns the card body is pushed left by a swipe.
    pub shift: usize,
    /// Width of the Edit/Delete strip behind the card when fully open.
    pub reveal: usize,
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub initials: String,
    pub avatar: AvatarImage,
    /// Short labels of the non-empty social links.
    pub links: Vec<&'static str>,
    pub is_selected: bool,
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Modal content drawn over the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayView {
    Menu(MenuView),
    Form(FormView),
    Confirm(DialogView),
    Notice(DialogView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuView {
    pub title: String,
    pub rect: Rect,
    pub buttons: Vec<MenuButton>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuButton {
    pub label: &'static str,
    pub icon: &'static str,
    pub col: usize,
    pub row: usize,
    pub highlighted: bool,
    pub destructive: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub title: &'static str,
    pub fields: Vec<FormFieldView>,
    /// Shown after a rejected submit.
    pub banner: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogView {
    pub title: String,
    pub message: String,
    pub hint: &'static str,
    pub destructive: bool,
}
