//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the plugin shows: the
//! profile store, the search inputs, the grid selection and scroll window,
//! per-card gesture state and whichever overlay is open. Device-facing
//! collaborators live in [`UiContext`], built once at start-up and owned here
//! rather than reached through globals.
//!
//! # Derived state
//!
//! `visible` (the filtered indices into the store) and `suggestions` are
//! derived from the store and the search term. Every handler that changes
//! either calls [`AppState::refresh_view`], which recomputes both and clamps
//! the selection; nothing recomputes implicitly.
//!
//! # Example
//!
//! ```rust
//! use profile_deck::app::{AppSettings, AppState, UiContext};
//! use profile_deck::store::ProfileStore;
//!
//! let store = ProfileStore::from_seed()?;
//! let mut state = AppState::new(store, UiContext::default(), AppSettings::default());
//! state.set_terminal_size(24, 80);
//! state.refresh_view();
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.result_count, "5 profiles");
//! # Ok::<(), profile_deck::ProfileDeckError>(())
//! ```

use super::modes::{Direction, InputMode, Overlay};
use crate::domain::{FormField, Profile, ProfileId};
use crate::feedback::{
    HapticKind, Haptics, ImageSource, LoggingHaptics, SchemeOpener, UriImageSource, UrlOpener,
};
use crate::gesture::{LongPressDetector, SwipeController, REVEAL_DISTANCE};
use crate::layout::{CellSize, GridGeometry, Point, Rect, Viewport};
use crate::menu::{MenuAction, MenuHandlers, MenuMargins};
use crate::search::{filter_indices, suggest, SearchFilters};
use crate::store::ProfileStore;
use crate::ui::theme::ThemeState;
use crate::ui::viewmodel::{
    CardItem, DialogView, EmptyState, FooterInfo, FormFieldView, FormView, HeaderInfo, MenuButton,
    MenuView, OverlayView, SearchBarInfo, SuggestionItem, UIViewModel, GRID_BOTTOM, GRID_TOP,
    SEARCH_PLACEHOLDER, THEME_DARK_LABEL, THEME_LIGHT_LABEL,
};
use std::collections::{HashMap, HashSet};

/// Device-facing collaborators and the active theme.
#[derive(Debug)]
pub struct UiContext {
    pub theme: ThemeState,
    pub haptics: Box<dyn Haptics>,
    pub images: Box<dyn ImageSource>,
    pub opener: Box<dyn UrlOpener>,
}

impl Default for UiContext {
    fn default() -> Self {
        Self {
            theme: ThemeState::default(),
            haptics: Box::new(LoggingHaptics::default()),
            images: Box::new(UriImageSource::new()),
            opener: Box::new(SchemeOpener::from_list(crate::DEFAULT_OPEN_SCHEMES)),
        }
    }
}

impl UiContext {
    /// Fires a haptic, fire-and-forget.
    pub fn haptic(&self, kind: HapticKind) {
        self.haptics.trigger(kind);
    }
}

/// Tunables fixed at start-up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppSettings {
    pub cell: CellSize,
    pub menu_margins: MenuMargins,
    /// Simulated refresh duration.
    pub refresh_delay_secs: f64,
    /// Swipe animation distance per frame, in px.
    pub animation_step: f32,
    /// Seconds between swipe animation frames.
    pub frame_secs: f64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cell: CellSize::default(),
            menu_margins: MenuMargins::default(),
            refresh_delay_secs: 1.5,
            animation_step: 40.0,
            frame_secs: 0.05,
        }
    }
}

/// A pressed pointer on a card, awaiting drag, long press or release.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerTrack {
    pub id: ProfileId,
    pub start: Point,
}

/// Central application state container.
#[derive(Debug)]
pub struct AppState {
    pub store: ProfileStore,
    pub filters: SearchFilters,

    /// Suggestions for the current term, recomputed by `refresh_view`.
    pub suggestions: Vec<String>,
    /// Keyboard-highlighted suggestion.
    pub suggestion_cursor: Option<usize>,

    /// Indices into `store.list()` that pass the search filter, in order.
    pub visible: Vec<usize>,
    /// Position of the selected card within `visible`.
    pub selected_index: usize,
    /// First card row in the scroll window.
    pub scroll_row: usize,

    pub input_mode: InputMode,
    pub overlay: Overlay,

    /// Terminal size in cells.
    pub rows: usize,
    pub cols: usize,
    /// Terminal size in logical pixels.
    pub viewport: Viewport,
    pub columns: u8,

    /// Swipe state per card. Missing entries are closed cards.
    pub swipes: HashMap<ProfileId, SwipeController>,
    pub long_press: LongPressDetector,
    pub pointer: Option<PointerTrack>,

    pub refreshing: bool,
    /// Profiles marked from the quick-actions menu, for this session only.
    pub favorites: HashSet<ProfileId>,

    pub settings: AppSettings,
    pub ui: UiContext,
}

impl AppState {
    #[must_use]
    pub fn new(store: ProfileStore, ui: UiContext, settings: AppSettings) -> Self {
        let mut state = Self {
            store,
            filters: SearchFilters::default(),
            suggestions: Vec::new(),
            suggestion_cursor: None,
            visible: Vec::new(),
            selected_index: 0,
            scroll_row: 0,
            input_mode: InputMode::Browse,
            overlay: Overlay::None,
            rows: 0,
            cols: 0,
            viewport: Viewport::default(),
            columns: 1,
            swipes: HashMap::new(),
            long_press: LongPressDetector::new(),
            pointer: None,
            refreshing: false,
            favorites: HashSet::new(),
            settings,
            ui,
        };
        state.refresh_view();
        state
    }

    /// Recomputes the filtered list and suggestions from the store and the
    /// search term, then clamps the selection and scroll window.
    pub fn refresh_view(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_view",
            total = self.store.len(),
            term_len = self.filters.search_term.len()
        )
        .entered();

        let term = self.filters.search_term.as_str();
        self.visible = filter_indices(self.store.list(), term);
        self.suggestions = suggest(self.store.list(), term);

        if self.suggestion_cursor.is_some_and(|c| c >= self.suggestions.len()) {
            self.suggestion_cursor = None;
        }

        self.selected_index = if self.visible.is_empty() {
            0
        } else {
            self.selected_index.min(self.visible.len() - 1)
        };
        self.scroll_row = self.geometry().scroll_to_show(self.selected_index, self.scroll_row);

        tracing::debug!(visible = self.visible.len(), suggestions = self.suggestions.len(), "view refreshed");
    }

    /// Records a terminal size. Returns `true` if the column count changed,
    /// in which case the grid is reset to the top with every card closed.
    pub fn set_terminal_size(&mut self, rows: usize, cols: usize) -> bool {
        self.rows = rows;
        self.cols = cols;
        self.viewport = self.settings.cell.viewport(cols, rows);

        let columns = self.viewport.columns();
        if columns == self.columns {
            self.scroll_row = self.geometry().scroll_to_show(self.selected_index, self.scroll_row);
            return false;
        }

        tracing::debug!(from = self.columns, to = columns, width = self.viewport.width, "column count changed");
        self.columns = columns;
        self.scroll_row = 0;
        self.swipes.clear();
        self.pointer = None;
        self.long_press.release();
        self.scroll_row = self.geometry().scroll_to_show(self.selected_index, 0);
        true
    }

    /// Card grid placement for the current terminal size.
    #[must_use]
    pub fn geometry(&self) -> GridGeometry {
        GridGeometry::new(self.cols, self.rows, self.columns, GRID_TOP, GRID_BOTTOM)
    }

    /// Profiles passing the search filter, in display order.
    pub fn visible_profiles(&self) -> impl Iterator<Item = &Profile> + '_ {
        self.visible.iter().filter_map(|&i| self.store.list().get(i))
    }

    /// The profile at `position` in the filtered list.
    #[must_use]
    pub fn visible_profile(&self, position: usize) -> Option<&Profile> {
        self.visible.get(position).and_then(|&i| self.store.list().get(i))
    }

    #[must_use]
    pub fn selected_profile(&self) -> Option<&Profile> {
        self.visible_profile(self.selected_index)
    }

    /// Position of `id` in the filtered list.
    #[must_use]
    pub fn position_of(&self, id: &ProfileId) -> Option<usize> {
        self.visible_profiles().position(|p| &p.id == id)
    }

    /// Moves the selection one card in `direction`, stopping at the edges.
    pub fn move_selection(&mut self, direction: Direction) {
        if self.visible.is_empty() {
            return;
        }
        let columns = usize::from(self.columns.max(1));
        let last = self.visible.len() - 1;
        let current = self.selected_index;

        self.selected_index = match direction {
            Direction::Left => current.saturating_sub(1),
            Direction::Right => (current + 1).min(last),
            Direction::Up => current.checked_sub(columns).unwrap_or(current),
            Direction::Down => {
                let next = current + columns;
                if next <= last {
                    next
                } else {
                    current
                }
            }
        };
        self.scroll_row = self.geometry().scroll_to_show(self.selected_index, self.scroll_row);
    }

    /// Selects the card at `position` and scrolls it into view.
    pub fn select(&mut self, position: usize) {
        if position < self.visible.len() {
            self.selected_index = position;
            self.scroll_row = self.geometry().scroll_to_show(position, self.scroll_row);
        }
    }

    /// Swipe controller for `id`, created closed on first use.
    pub fn swipe_mut(&mut self, id: &ProfileId) -> &mut SwipeController {
        self.swipes.entry(id.clone()).or_default()
    }

    /// Width in cells of the action strip behind an open card.
    #[must_use]
    pub fn reveal_cols(&self) -> usize {
        self.settings.cell.ceil_cols(REVEAL_DISTANCE)
    }

    #[must_use]
    pub fn swipe_offset(&self, id: &ProfileId) -> f32 {
        self.swipes.get(id).map_or(0.0, SwipeController::offset)
    }

    /// Advances every swipe animation by one frame. Returns `true` while any
    /// card is still moving.
    pub fn advance_animations(&mut self) -> bool {
        let step = self.settings.animation_step;
        let mut moving = false;
        for swipe in self.swipes.values_mut() {
            moving |= swipe.advance(step);
        }
        self.swipes.retain(|_, swipe| swipe.is_dragging() || swipe.is_open() || swipe.is_animating());
        moving
    }

    /// Returns `true` if any card is mid-animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.swipes.values().any(SwipeController::is_animating)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &ProfileId) -> bool {
        self.favorites.contains(id)
    }

    /// Flips the favorite mark on `id`. Returns the new state.
    pub fn toggle_favorite(&mut self, id: &ProfileId) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.clone());
            true
        }
    }

    /// Quick actions available for `profile`: contact entries need a value.
    #[must_use]
    pub fn menu_handlers(profile: &Profile) -> MenuHandlers {
        MenuHandlers {
            call: !profile.phone.trim().is_empty(),
            email: !profile.email.trim().is_empty(),
            ..MenuHandlers::all()
        }
    }

    /// Pixel point at the center of the card at `position`, if on screen.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn card_center(&self, position: usize) -> Option<Point> {
        let rect = self.geometry().card_rect(position, self.scroll_row)?;
        let corner = self.settings.cell.to_point(rect.x, rect.y);
        Some(Point::new(
            corner.x + rect.width as f32 * self.settings.cell.width / 2.0,
            corner.y + rect.height as f32 * self.settings.cell.height / 2.0,
        ))
    }

    /// Header toggle label, naming the theme a click switches to.
    #[must_use]
    pub const fn theme_label(&self) -> &'static str {
        if self.ui.theme.is_dark() {
            THEME_LIGHT_LABEL
        } else {
            THEME_DARK_LABEL
        }
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows = self.rows, cols = self.cols).entered();

        let empty_state = self.visible.is_empty().then(|| self.compute_empty_state());
        let cards = if empty_state.is_some() { Vec::new() } else { self.compute_cards() };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            result_count: self.compute_result_count(),
            cards,
            empty_state,
            footer: self.compute_footer(),
            overlay: self.compute_overlay(),
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            title: " Profiles ".to_string(),
            theme_label: self.theme_label(),
            refreshing: self.refreshing,
        }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let focused = self.input_mode == InputMode::Search;
        let suggestions = if focused && self.filters.show_suggestions {
            self.suggestions
                .iter()
                .enumerate()
                .map(|(i, text)| SuggestionItem {
                    text: text.clone(),
                    highlighted: self.suggestion_cursor == Some(i),
                })
                .collect()
        } else {
            Vec::new()
        };

        SearchBarInfo {
            query: self.filters.search_term.clone(),
            placeholder: SEARCH_PLACEHOLDER,
            focused,
            suggestions,
        }
    }

    fn compute_result_count(&self) -> String {
        let count = self.visible.len();
        let noun = if count == 1 { "profile" } else { "profiles" };
        let term = &self.filters.search_term;
        if term.is_empty() {
            format!("{count} {noun}")
        } else {
            format!("{count} {noun} found for \"{term}\"")
        }
    }

    fn compute_empty_state(&self) -> EmptyState {
        let term = &self.filters.search_term;
        if term.is_empty() {
            EmptyState {
                message: "No profiles yet".to_string(),
                subtitle: "Add your first profile to get started.".to_string(),
            }
        } else {
            EmptyState {
                message: "No profiles found".to_string(),
                subtitle: format!("No profiles match \"{term}\". Try a different search term."),
            }
        }
    }

    fn compute_cards(&self) -> Vec<CardItem> {
        let geometry = self.geometry();
        let cell = self.settings.cell;
        let reveal = self.reveal_cols();

        geometry
            .visible_range(self.scroll_row, self.visible.len())
            .filter_map(|position| {
                let profile = self.visible_profile(position)?;
                let rect = geometry.card_rect(position, self.scroll_row)?;
                let shift = cell.ceil_cols(-self.swipe_offset(&profile.id)).min(rect.width);
                let initials = profile.initials();

                Some(CardItem {
                    rect,
                    shift,
                    reveal: reveal.min(rect.width),
                    name: profile.name.clone(),
                    title: profile.title.clone(),
                    email: profile.email.clone(),
                    phone: profile.phone.clone(),
                    avatar: self.ui.images.resolve(&profile.avatar, &initials),
                    initials,
                    links: profile.social_media.iter().map(|(platform, _)| platform.label()).collect(),
                    is_selected: position == self.selected_index,
                    is_favorite: self.is_favorite(&profile.id),
                })
            })
            .collect()
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.overlay, self.input_mode) {
            (Overlay::Menu(_), _) => "←/→/↑/↓: choose  Enter: run  Esc: close",
            (Overlay::Form(_), _) => "Tab/Shift+Tab: next/prev field  Enter: save  Esc: cancel",
            (Overlay::ConfirmDelete { .. }, _) => "y/Enter: delete  n/Esc: cancel",
            (Overlay::Notice(_), _) => "any key: dismiss",
            (Overlay::None, InputMode::Search) => {
                "Type to filter  ↑/↓: suggestions  Enter: accept  Tab: grid  Esc: clear"
            }
            (Overlay::None, InputMode::Browse) => {
                "hjkl/arrows: move  /: search  Enter: actions  Space: swipe  e: edit  d: delete  f: favorite  a: add  c/m/s: call/email/text  t: theme  r: refresh  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }

    fn compute_overlay(&self) -> Option<OverlayView> {
        match &self.overlay {
            Overlay::None => None,
            Overlay::Menu(menu) => {
                let cell = self.settings.cell;
                let (col, row) = cell.to_cell(menu.origin);
                let rect = Rect {
                    x: col,
                    y: row,
                    width: cell.ceil_cols(menu.width()),
                    height: cell.ceil_rows(menu.height()),
                };
                let buttons = menu
                    .actions
                    .iter()
                    .enumerate()
                    .filter_map(|(index, action)| {
                        let (corner, _, h) = menu.button_origin(index)?;
                        let (col, row) = cell.to_cell(Point::new(corner.x, corner.y + h / 2.0));
                        Some(MenuButton {
                            label: action.label(),
                            icon: action.icon(),
                            col,
                            row,
                            highlighted: index == menu.cursor,
                            destructive: *action == MenuAction::Delete,
                        })
                    })
                    .collect();
                let title = self.store.get(&menu.target).map(|p| p.name.clone()).unwrap_or_default();
                Some(OverlayView::Menu(MenuView { title, rect, buttons }))
            }
            Overlay::Form(form) => Some(OverlayView::Form(FormView {
                title: "Add Profile",
                fields: FormField::ALL
                    .iter()
                    .map(|&field| FormFieldView {
                        label: field.label(),
                        value: form.value(field).to_string(),
                        error: form.errors().get(field),
                        focused: form.focused() == field,
                    })
                    .collect(),
                banner: (!form.errors().is_empty()).then_some("Please fix the errors and try again."),
            })),
            Overlay::ConfirmDelete { name, .. } => Some(OverlayView::Confirm(DialogView {
                title: "Delete Profile".to_string(),
                message: format!("Are you sure you want to delete {name}'s profile?"),
                hint: "[y] Delete   [n] Cancel",
                destructive: true,
            })),
            Overlay::Notice(notice) => Some(OverlayView::Notice(DialogView {
                title: notice.title.clone(),
                message: notice.message.clone(),
                hint: "[Enter] OK",
                destructive: false,
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::{AvatarImage, RecordingHaptics};

    fn state(rows: usize, cols: usize) -> AppState {
        let ui = UiContext {
            haptics: Box::new(RecordingHaptics::new()),
            ..UiContext::default()
        };
        let mut state = AppState::new(ProfileStore::from_seed().unwrap(), ui, AppSettings::default());
        state.set_terminal_size(rows, cols);
        state.refresh_view();
        state
    }

    #[test]
    fn terminal_size_drives_columns() {
        // 8x16 px cells: 80x24 is 640x384, a landscape phone.
        let mut state = state(24, 80);
        assert_eq!(state.columns, 2);

        // 100x60 is 800x960: portrait tablet, still two columns.
        assert!(!state.set_terminal_size(60, 100));
        assert_eq!(state.columns, 2);

        // 160x50 is 1280x800: landscape tablet.
        assert!(state.set_terminal_size(50, 160));
        assert_eq!(state.columns, 3);
        assert!(!state.set_terminal_size(50, 170));
    }

    #[test]
    fn column_change_resets_scroll_and_swipes() {
        let mut state = state(24, 80);
        let id = state.selected_profile().unwrap().id.clone();
        state.swipe_mut(&id).open();
        state.scroll_row = 1;

        assert!(state.set_terminal_size(50, 160));
        assert_eq!(state.scroll_row, 0);
        assert!(state.swipes.is_empty());
    }

    #[test]
    fn search_term_filters_and_counts() {
        let mut state = state(24, 80);
        state.filters.set_term("kim");
        state.refresh_view();

        let vm = state.compute_viewmodel();
        assert_eq!(vm.result_count, "1 profile found for \"kim\"");
        assert_eq!(vm.cards.len(), 1);
        assert_eq!(vm.cards[0].name, "David Kim");
        assert!(vm.cards[0].is_selected);
    }

    #[test]
    fn empty_states_depend_on_term() {
        let mut state = state(24, 80);
        state.filters.set_term("zzzz");
        state.refresh_view();
        let vm = state.compute_viewmodel();
        assert!(vm.cards.is_empty());
        assert_eq!(vm.result_count, "0 profiles found for \"zzzz\"");
        let empty = vm.empty_state.unwrap();
        assert_eq!(empty.message, "No profiles found");
        assert_eq!(empty.subtitle, "No profiles match \"zzzz\". Try a different search term.");

        let mut state = AppState::new(ProfileStore::new(vec![]), UiContext::default(), AppSettings::default());
        state.set_terminal_size(24, 80);
        let empty = state.compute_viewmodel().empty_state.unwrap();
        assert_eq!(empty.message, "No profiles yet");
    }

    #[test]
    fn selection_moves_through_grid_and_clamps() {
        let mut state = state(24, 80);
        assert_eq!(state.columns, 2);

        state.move_selection(Direction::Down);
        assert_eq!(state.selected_index, 2);
        state.move_selection(Direction::Right);
        assert_eq!(state.selected_index, 3);
        state.move_selection(Direction::Down);
        assert_eq!(state.selected_index, 3);
        state.move_selection(Direction::Left);
        state.move_selection(Direction::Down);
        assert_eq!(state.selected_index, 4);
        state.move_selection(Direction::Up);
        state.move_selection(Direction::Up);
        state.move_selection(Direction::Up);
        assert_eq!(state.selected_index, 0);
    }

    #[test]
    fn selection_scrolls_window() {
        // 80x24 leaves 17 grid rows: two 6-line card rows.
        let mut state = state(24, 80);
        state.select(4);
        assert_eq!(state.scroll_row, 1);
        let vm = state.compute_viewmodel();
        assert_eq!(vm.cards.first().map(|c| c.name.as_str()), Some("Emily Rodriguez"));
    }

    #[test]
    fn cards_carry_avatar_links_and_swipe_shift() {
        let mut state = state(24, 80);
        let id = state.selected_profile().unwrap().id.clone();
        state.swipe_mut(&id).open();
        state.swipe_mut(&id).settle();

        let vm = state.compute_viewmodel();
        let card = &vm.cards[0];
        assert_eq!(card.initials, "SJ");
        assert!(matches!(card.avatar, AvatarImage::Remote(_)));
        assert_eq!(card.links, vec!["in", "tw", "gh"]);
        assert_eq!(card.shift, 15);
    }

    #[test]
    fn menu_handlers_skip_missing_contacts() {
        let mut profile = ProfileStore::from_seed().unwrap().list()[0].clone();
        profile.phone = "  ".into();
        let actions = AppState::menu_handlers(&profile).actions();
        assert!(!actions.contains(&MenuAction::Call));
        assert_eq!(actions.len(), 5);
    }
}
