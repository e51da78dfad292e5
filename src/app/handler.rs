//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place [`AppState`] changes in response to
//! input. It returns whether the screen needs redrawing plus the
//! [`Action`]s the plugin runtime must carry out.
//!
//! # Event Types
//!
//! - **Grid**: `Navigate`, `OpenQuickActions`, `ToggleSwipe`, `SwipeAction`
//! - **Search**: `FocusSearch`, `SearchInput`, `SearchBackspace`,
//!   `ClearSearch`, `ExitSearch`, suggestion movement and selection
//! - **Overlays**: menu, add form, delete confirmation and notices
//! - **Pointer**: `PointerDown`/`PointerMove`/`PointerUp`, `SecondaryClick`
//! - **System**: `Resize`, `Tick`, `Refresh`/`RefreshCompleted`,
//!   `SystemThemeChanged`, `ContactFailed`
//!
//! # Example
//!
//! ```rust
//! use profile_deck::app::{handle_event, AppSettings, AppState, Direction, Event, UiContext};
//! use profile_deck::store::ProfileStore;
//!
//! let mut state = AppState::new(ProfileStore::from_seed()?, UiContext::default(), AppSettings::default());
//! handle_event(&mut state, &Event::Resize { rows: 24, cols: 80 })?;
//! let (render, actions) = handle_event(&mut state, &Event::Navigate(Direction::Right))?;
//! assert!(render && actions.is_empty());
//! assert_eq!(state.selected_index, 1);
//! # Ok::<(), profile_deck::ProfileDeckError>(())
//! ```

use super::modes::{Direction, InputMode, Overlay};
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{ProfileForm, ProfileId};
use crate::feedback::{ContactKind, ContactLink, HapticKind, Notice};
use crate::gesture::{SwipeAction, SwipeState};
use crate::layout::Point;
use crate::menu::{MenuAction, QuickActionsMenu, ACTIONS_PER_ROW};
use crate::ui::viewmodel::{
    right_aligned_start, ADD_BUTTON_LABEL, COUNT_ROW, HEADER_ROW, SEARCH_HEIGHT, SEARCH_TOP,
    SUGGESTIONS_TOP,
};

/// Seconds between a card press and the long-press check.
const LONG_PRESS_CHECK_SECS: f64 = 0.5;

/// Events triggered by user input or the plugin runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Moves the card selection one step.
    Navigate(Direction),

    /// Gives the search bar keyboard focus.
    FocusSearch,
    /// Appends a character to the search term.
    SearchInput(char),
    /// Removes the last character of the search term.
    SearchBackspace,
    /// Empties the search term and leaves search mode.
    ClearSearch,
    /// Leaves search mode keeping the term.
    ExitSearch,
    /// Highlights the next suggestion, wrapping.
    NextSuggestion,
    /// Highlights the previous suggestion, wrapping.
    PreviousSuggestion,
    /// Uses the highlighted suggestion, or commits the typed term.
    AcceptSuggestion,
    /// Uses suggestion `n` directly.
    SelectSuggestion(usize),

    /// Opens the quick-actions menu on the selected card.
    OpenQuickActions,
    /// Runs a quick action on the menu's target, or on the selected card
    /// when no menu is open.
    QuickAction(MenuAction),
    /// Moves the menu cursor.
    MenuMove(Direction),
    CloseMenu,

    /// Reveals or hides the selected card's swipe actions.
    ToggleSwipe,
    /// Invokes a revealed swipe action on the selected card.
    SwipeAction(SwipeAction),

    /// Calls, emails or messages the selected profile.
    Contact(ContactKind),
    /// The host could not open a contact URL.
    ContactFailed(ContactLink),

    /// Asks to delete the selected profile.
    RequestDelete,
    ConfirmDelete,
    CancelDelete,

    /// Opens the add-profile form.
    OpenAddForm,
    FormInput(char),
    FormBackspace,
    FormNextField,
    FormPreviousField,
    SubmitForm,
    CancelForm,

    DismissNotice,

    ToggleTheme,
    /// The host's light/dark preference changed.
    SystemThemeChanged { dark: bool },

    /// Starts a simulated refresh.
    Refresh,
    /// The simulated refresh finished.
    RefreshCompleted { ok: bool },

    /// Terminal size in cells.
    Resize { rows: usize, cols: usize },

    /// Left button pressed at a terminal cell; `at_ms` is a monotonic clock.
    PointerDown { col: usize, row: usize, at_ms: i64 },
    /// Pointer moved with the button held.
    PointerMove { col: usize, row: usize },
    PointerUp { col: usize, row: usize },
    /// Right click: an immediate long press.
    SecondaryClick { col: usize, row: usize },

    /// Timer tick for long-press detection and swipe animation.
    Tick { now_ms: i64 },

    /// Hides the plugin pane.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// Returns `(should_render, actions)`. Events that do not apply in the
/// current mode or overlay are ignored and report no render.
///
/// # Errors
///
/// Reserved for collaborator failures; no current event produces one.
#[allow(clippy::too_many_lines, clippy::unnecessary_wraps)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, overlay = state.overlay.kind()).entered();

    match event {
        Event::Navigate(direction) => {
            if !state.overlay.is_none() || state.visible.is_empty() {
                return Ok((false, vec![]));
            }
            let before = state.selected_index;
            state.move_selection(*direction);
            if state.selected_index != before {
                state.ui.haptic(HapticKind::Selection);
            }
            Ok((true, vec![]))
        }

        Event::FocusSearch => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Search;
            state.filters.show_suggestions = !state.filters.is_blank();
            Ok((true, vec![]))
        }
        Event::SearchInput(c) => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.filters.push_char(*c);
            tracing::trace!(term = %state.filters.search_term, "search term updated");
            search_changed(state);
            Ok((true, vec![]))
        }
        Event::SearchBackspace => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            state.filters.pop_char();
            search_changed(state);
            Ok((true, vec![]))
        }
        Event::ClearSearch => {
            tracing::debug!(term = %state.filters.search_term, "search cleared");
            state.filters.clear();
            state.input_mode = InputMode::Browse;
            search_changed(state);
            Ok((true, vec![]))
        }
        Event::ExitSearch => {
            state.input_mode = InputMode::Browse;
            state.filters.hide_suggestions();
            state.suggestion_cursor = None;
            Ok((true, vec![]))
        }
        Event::NextSuggestion | Event::PreviousSuggestion => {
            let count = state.suggestions.len();
            if state.input_mode != InputMode::Search || !state.filters.show_suggestions || count == 0 {
                return Ok((false, vec![]));
            }
            state.suggestion_cursor = Some(match (event, state.suggestion_cursor) {
                (Event::NextSuggestion, Some(i)) => (i + 1) % count,
                (Event::NextSuggestion, None) => 0,
                (_, Some(0) | None) => count - 1,
                (_, Some(i)) => i - 1,
            });
            Ok((true, vec![]))
        }
        Event::AcceptSuggestion => {
            if state.input_mode != InputMode::Search {
                return Ok((false, vec![]));
            }
            match state.suggestion_cursor {
                Some(index) => select_suggestion(state, index),
                None => {
                    state.input_mode = InputMode::Browse;
                    state.filters.hide_suggestions();
                }
            }
            Ok((true, vec![]))
        }
        Event::SelectSuggestion(index) => {
            select_suggestion(state, *index);
            Ok((true, vec![]))
        }

        Event::OpenQuickActions => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_profile().map(|p| p.id.clone()) else {
                return Ok((false, vec![]));
            };
            let anchor = state
                .card_center(state.selected_index)
                .unwrap_or_else(|| Point::new(state.viewport.width / 2.0, state.viewport.height / 2.0));
            open_menu(state, id, anchor);
            Ok((true, vec![]))
        }
        Event::QuickAction(action) => {
            let target = match &state.overlay {
                Overlay::Menu(menu) => Some(menu.target.clone()),
                Overlay::None => state.selected_profile().map(|p| p.id.clone()),
                _ => None,
            };
            let Some(id) = target else {
                return Ok((false, vec![]));
            };
            Ok((true, run_menu_action(state, &id, *action)))
        }
        Event::MenuMove(direction) => {
            let Overlay::Menu(menu) = &mut state.overlay else {
                return Ok((false, vec![]));
            };
            #[allow(clippy::cast_possible_wrap)]
            let row = ACTIONS_PER_ROW as isize;
            menu.move_cursor(match direction {
                Direction::Left => -1,
                Direction::Right => 1,
                Direction::Up => -row,
                Direction::Down => row,
            });
            Ok((true, vec![]))
        }
        Event::CloseMenu => {
            if !matches!(state.overlay, Overlay::Menu(_)) {
                return Ok((false, vec![]));
            }
            state.overlay = Overlay::None;
            tracing::debug!("quick actions closed");
            Ok((true, vec![]))
        }

        Event::ToggleSwipe => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_profile().map(|p| p.id.clone()) else {
                return Ok((false, vec![]));
            };
            let swipe = state.swipe_mut(&id);
            if swipe.is_open() {
                swipe.close();
            } else {
                swipe.open();
            }
            Ok((true, animate(state)))
        }
        Event::SwipeAction(action) => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_profile().map(|p| p.id.clone()) else {
                return Ok((false, vec![]));
            };
            Ok(run_swipe_action(state, &id, *action))
        }

        Event::Contact(kind) => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_profile().map(|p| p.id.clone()) else {
                return Ok((false, vec![]));
            };
            Ok((true, contact(state, &id, *kind)))
        }
        Event::ContactFailed(link) => {
            tracing::warn!(url = %link.url(), "host failed to open contact link");
            state.overlay = Overlay::Notice(Notice::open_failed(link));
            Ok((true, vec![]))
        }

        Event::RequestDelete => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            let Some(id) = state.selected_profile().map(|p| p.id.clone()) else {
                return Ok((false, vec![]));
            };
            request_delete(state, &id);
            Ok((true, vec![]))
        }
        Event::ConfirmDelete => {
            let Overlay::ConfirmDelete { id, .. } = std::mem::take(&mut state.overlay) else {
                return Ok((false, vec![]));
            };
            if state.store.remove(&id).is_some() {
                state.swipes.remove(&id);
                state.favorites.remove(&id);
                state.refresh_view();
                state.ui.haptic(HapticKind::Success);
            }
            Ok((true, vec![]))
        }
        Event::CancelDelete => {
            let Overlay::ConfirmDelete { id, .. } = std::mem::take(&mut state.overlay) else {
                return Ok((false, vec![]));
            };
            tracing::debug!(profile = %id, "delete cancelled");
            if let Some(swipe) = state.swipes.get_mut(&id) {
                swipe.close();
            }
            Ok((true, animate(state)))
        }

        Event::OpenAddForm => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            state.input_mode = InputMode::Browse;
            state.filters.hide_suggestions();
            state.overlay = Overlay::Form(ProfileForm::new());
            Ok((true, vec![]))
        }
        Event::FormInput(_) | Event::FormBackspace | Event::FormNextField | Event::FormPreviousField => {
            let Overlay::Form(form) = &mut state.overlay else {
                return Ok((false, vec![]));
            };
            match event {
                Event::FormInput(c) => form.push_char(*c),
                Event::FormBackspace => form.pop_char(),
                Event::FormNextField => form.focus_next(),
                _ => form.focus_previous(),
            }
            Ok((true, vec![]))
        }
        Event::SubmitForm => {
            let Overlay::Form(form) = &mut state.overlay else {
                return Ok((false, vec![]));
            };
            match form.submit() {
                Ok(draft) => {
                    let id = state.store.add(draft).id.clone();
                    state.overlay = Overlay::None;
                    state.refresh_view();
                    if let Some(position) = state.position_of(&id) {
                        state.select(position);
                    }
                    state.ui.haptic(HapticKind::Success);
                }
                Err(errors) => {
                    tracing::debug!(%errors, "add profile rejected");
                    state.ui.haptic(HapticKind::Error);
                }
            }
            Ok((true, vec![]))
        }
        Event::CancelForm => {
            if !matches!(state.overlay, Overlay::Form(_)) {
                return Ok((false, vec![]));
            }
            state.overlay = Overlay::None;
            Ok((true, vec![]))
        }

        Event::DismissNotice => {
            if !matches!(state.overlay, Overlay::Notice(_)) {
                return Ok((false, vec![]));
            }
            state.overlay = Overlay::None;
            Ok((true, vec![]))
        }

        Event::ToggleTheme => {
            state.ui.theme.toggle();
            Ok((true, vec![]))
        }
        Event::SystemThemeChanged { dark } => Ok((state.ui.theme.system_changed(*dark), vec![])),

        Event::Refresh => {
            if state.refreshing {
                tracing::debug!("refresh already in progress");
                return Ok((false, vec![]));
            }
            state.refreshing = true;
            state.ui.haptic(HapticKind::Light);
            Ok((
                true,
                vec![Action::ScheduleRefresh {
                    seconds: state.settings.refresh_delay_secs,
                }],
            ))
        }
        Event::RefreshCompleted { ok } => {
            if !state.refreshing {
                return Ok((false, vec![]));
            }
            state.refreshing = false;
            if *ok {
                state.ui.haptic(HapticKind::Success);
                tracing::debug!("refresh completed");
            } else {
                tracing::warn!("refresh failed");
            }
            Ok((true, vec![]))
        }

        Event::Resize { rows, cols } => {
            state.set_terminal_size(*rows, *cols);
            let viewport = state.viewport;
            if let Overlay::Menu(menu) = &mut state.overlay {
                menu.reposition(viewport);
            }
            Ok((true, vec![]))
        }

        Event::PointerDown { col, row, at_ms } => Ok(pointer_down(state, *col, *row, *at_ms)),
        Event::PointerMove { col, row } => Ok(pointer_move(state, *col, *row)),
        Event::PointerUp { col, row } => Ok(pointer_up(state, *col, *row)),
        Event::SecondaryClick { col, row } => {
            if !state.overlay.is_none() {
                return Ok((false, vec![]));
            }
            let geometry = state.geometry();
            let Some(position) = geometry.hit_test(*col, *row, state.scroll_row, state.visible.len()) else {
                return Ok((false, vec![]));
            };
            let Some(id) = state.visible_profile(position).map(|p| p.id.clone()) else {
                return Ok((false, vec![]));
            };
            state.select(position);
            let anchor = cell_point(state, *col, *row);
            open_menu(state, id, anchor);
            Ok((true, vec![]))
        }

        Event::Tick { now_ms } => Ok(tick(state, *now_ms)),

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Resets the selection after the search term changed.
fn search_changed(state: &mut AppState) {
    state.suggestion_cursor = None;
    state.selected_index = 0;
    state.scroll_row = 0;
    state.refresh_view();
}

fn select_suggestion(state: &mut AppState, index: usize) {
    let Some(text) = state.suggestions.get(index).cloned() else {
        return;
    };
    tracing::debug!(suggestion = %text, "suggestion selected");
    state.filters.select_suggestion(text);
    state.input_mode = InputMode::Browse;
    search_changed(state);
}

fn open_menu(state: &mut AppState, id: ProfileId, anchor: Point) {
    let Some(profile) = state.store.get(&id) else {
        return;
    };
    let handlers = AppState::menu_handlers(profile);
    state.pointer = None;
    state.long_press.release();
    state.input_mode = InputMode::Browse;
    state.filters.hide_suggestions();
    state.overlay = Overlay::Menu(QuickActionsMenu::open(
        id,
        anchor,
        handlers,
        state.viewport,
        state.settings.menu_margins,
    ));
    state.ui.haptic(HapticKind::Light);
}

fn run_menu_action(state: &mut AppState, id: &ProfileId, action: MenuAction) -> Vec<Action> {
    if let Overlay::Menu(menu) = &state.overlay {
        if !menu.actions.contains(&action) {
            return vec![];
        }
        state.overlay = Overlay::None;
    }
    let Some(profile) = state.store.get(id) else {
        return vec![];
    };
    tracing::debug!(profile = %id, action = action.label(), "quick action");
    state.ui.haptic(HapticKind::Success);

    match action {
        MenuAction::Edit => {
            state.overlay = Overlay::Notice(Notice::edit(profile));
            vec![]
        }
        MenuAction::Share => {
            state.overlay = Overlay::Notice(Notice::share(profile));
            vec![]
        }
        MenuAction::Call => contact(state, id, ContactKind::Call),
        MenuAction::Email => contact(state, id, ContactKind::Email),
        MenuAction::Favorite => {
            let favorite = state.toggle_favorite(id);
            tracing::debug!(profile = %id, favorite, "favorite toggled");
            vec![]
        }
        MenuAction::Delete => {
            request_delete(state, id);
            vec![]
        }
    }
}

fn run_swipe_action(state: &mut AppState, id: &ProfileId, action: SwipeAction) -> (bool, Vec<Action>) {
    if state.swipe_mut(id).invoke(action).is_none() {
        return (false, vec![]);
    }
    tracing::debug!(profile = %id, action = action.label(), "swipe action");
    match action {
        SwipeAction::Edit => {
            if let Some(profile) = state.store.get(id) {
                state.overlay = Overlay::Notice(Notice::edit(profile));
            }
        }
        SwipeAction::Delete => request_delete(state, id),
    }
    (true, animate(state))
}

fn request_delete(state: &mut AppState, id: &ProfileId) {
    let Some(profile) = state.store.get(id) else {
        return;
    };
    tracing::debug!(profile = %id, "delete requested");
    state.overlay = Overlay::ConfirmDelete {
        id: id.clone(),
        name: profile.name.clone(),
    };
}

fn contact(state: &mut AppState, id: &ProfileId, kind: ContactKind) -> Vec<Action> {
    let Some(profile) = state.store.get(id) else {
        return vec![];
    };
    let value = match kind {
        ContactKind::Call | ContactKind::Message => &profile.phone,
        ContactKind::Email => &profile.email,
    };
    let link = ContactLink::new(kind, value.trim());

    if !link.value.is_empty() && state.ui.opener.can_open(&link.url()) {
        tracing::debug!(url = %link.url(), "opening contact link");
        return vec![Action::OpenUrl(link)];
    }

    tracing::warn!(url = %link.url(), "contact action not supported");
    state.overlay = Overlay::Notice(Notice::unsupported(&link));
    vec![]
}

/// Schedules the next animation frame if any card is moving.
fn animate(state: &AppState) -> Vec<Action> {
    if state.is_animating() {
        vec![Action::ScheduleTick {
            seconds: state.settings.frame_secs,
        }]
    } else {
        vec![]
    }
}

/// Logical pixel point at the center of cell (`col`, `row`).
fn cell_point(state: &AppState, col: usize, row: usize) -> Point {
    let cell = state.settings.cell;
    let corner = cell.to_point(col, row);
    Point::new(corner.x + cell.width / 2.0, corner.y + cell.height / 2.0)
}

fn pointer_down(state: &mut AppState, col: usize, row: usize, at_ms: i64) -> (bool, Vec<Action>) {
    let point = cell_point(state, col, row);

    match &state.overlay {
        Overlay::Menu(menu) => {
            if !menu.contains(point) {
                state.overlay = Overlay::None;
                return (true, vec![]);
            }
            let target = menu.target.clone();
            return match menu.action_at(point) {
                Some(action) => (true, run_menu_action(state, &target, action)),
                None => (false, vec![]),
            };
        }
        Overlay::Notice(_) => {
            state.overlay = Overlay::None;
            return (true, vec![]);
        }
        Overlay::Form(_) | Overlay::ConfirmDelete { .. } => return (false, vec![]),
        Overlay::None => {}
    }

    let dropdown = if state.input_mode == InputMode::Search && state.filters.show_suggestions {
        state.suggestions.len()
    } else {
        0
    };
    if row >= SUGGESTIONS_TOP && row < SUGGESTIONS_TOP + dropdown {
        select_suggestion(state, row - SUGGESTIONS_TOP);
        return (true, vec![]);
    }

    if row == HEADER_ROW {
        if col >= right_aligned_start(state.theme_label(), state.cols) {
            state.ui.theme.toggle();
            return (true, vec![]);
        }
        return (false, vec![]);
    }
    if (SEARCH_TOP..SEARCH_TOP + SEARCH_HEIGHT).contains(&row) {
        state.input_mode = InputMode::Search;
        state.filters.show_suggestions = !state.filters.is_blank();
        return (true, vec![]);
    }
    if row == COUNT_ROW && col >= right_aligned_start(ADD_BUTTON_LABEL, state.cols) {
        state.input_mode = InputMode::Browse;
        state.filters.hide_suggestions();
        state.overlay = Overlay::Form(ProfileForm::new());
        return (true, vec![]);
    }

    let geometry = state.geometry();
    let Some(position) = geometry.hit_test(col, row, state.scroll_row, state.visible.len()) else {
        if state.input_mode == InputMode::Search {
            state.input_mode = InputMode::Browse;
            state.filters.hide_suggestions();
            return (true, vec![]);
        }
        return (false, vec![]);
    };
    let Some(id) = state.visible_profile(position).map(|p| p.id.clone()) else {
        return (false, vec![]);
    };

    if state.input_mode == InputMode::Search {
        state.input_mode = InputMode::Browse;
        state.filters.hide_suggestions();
    }
    state.select(position);

    // The revealed strip sits at the card's right edge: Edit, then Delete.
    if state.swipes.get(&id).is_some_and(|s| s.is_open()) {
        if let Some(rect) = geometry.card_rect(position, state.scroll_row) {
            let strip = state.reveal_cols().min(rect.width);
            let strip_start = rect.x + rect.width - strip;
            if col >= strip_start {
                let action = if col < strip_start + strip / 2 {
                    SwipeAction::Edit
                } else {
                    SwipeAction::Delete
                };
                return run_swipe_action(state, &id, action);
            }
        }
    }

    state.pointer = Some(super::state::PointerTrack { id, start: point });
    state.long_press.press(point, at_ms);
    (
        true,
        vec![Action::ScheduleTick {
            seconds: LONG_PRESS_CHECK_SECS,
        }],
    )
}

fn pointer_move(state: &mut AppState, col: usize, row: usize) -> (bool, Vec<Action>) {
    let Some(track) = state.pointer.clone() else {
        return (false, vec![]);
    };
    let point = cell_point(state, col, row);
    state.long_press.move_to(point);

    let (dx, dy) = (point.x - track.start.x, point.y - track.start.y);
    let swipe = state.swipe_mut(&track.id);
    let changed = swipe.drag(dx, dy);
    if swipe.is_dragging() {
        state.long_press.release();
    }
    (changed, vec![])
}

fn pointer_up(state: &mut AppState, col: usize, row: usize) -> (bool, Vec<Action>) {
    state.long_press.release();
    let Some(track) = state.pointer.take() else {
        return (false, vec![]);
    };
    let point = cell_point(state, col, row);
    let width = state.viewport.width;

    let swipe = state.swipe_mut(&track.id);
    if !swipe.is_dragging() {
        return (false, vec![]);
    }
    let settled = swipe.release(point.x - track.start.x, width);
    tracing::debug!(profile = %track.id, state = ?settled, "card swipe settled");
    if settled == SwipeState::Open {
        state.ui.haptic(HapticKind::Light);
    }
    (true, animate(state))
}

fn tick(state: &mut AppState, now_ms: i64) -> (bool, Vec<Action>) {
    let mut render = false;
    let mut actions = vec![];

    if let Some(origin) = state.long_press.poll(now_ms) {
        if let Some(id) = state.pointer.take().map(|track| track.id) {
            if let Some(swipe) = state.swipes.get_mut(&id) {
                swipe.cancel();
            }
            open_menu(state, id, origin);
            render = true;
        }
    } else if state.long_press.is_pending() {
        actions.push(Action::ScheduleTick {
            seconds: state.settings.frame_secs,
        });
    }

    let moved = state.swipes.values().any(|s| s.is_animating());
    if moved {
        render = true;
        if state.advance_animations() && actions.is_empty() {
            actions.push(Action::ScheduleTick {
                seconds: state.settings.frame_secs,
            });
        }
    }

    (render, actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AppSettings, UiContext};
    use crate::feedback::RecordingHaptics;
    use crate::store::ProfileStore;

    fn setup() -> (AppState, RecordingHaptics) {
        let haptics = RecordingHaptics::new();
        let ui = UiContext {
            haptics: Box::new(haptics.clone()),
            ..UiContext::default()
        };
        let mut state = AppState::new(ProfileStore::from_seed().unwrap(), ui, AppSettings::default());
        handle_event(&mut state, &Event::Resize { rows: 24, cols: 80 }).unwrap();
        (state, haptics)
    }

    fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
        handle_event(state, &event).unwrap()
    }

    #[test]
    fn typing_filters_and_suggests() {
        let (mut state, _) = setup();
        send(&mut state, Event::FocusSearch);
        for c in "data".chars() {
            send(&mut state, Event::SearchInput(c));
        }
        assert_eq!(state.visible.len(), 1);
        assert_eq!(state.suggestions, vec!["Data Scientist", "Datalab", "Data"]);
        assert!(state.filters.show_suggestions);

        send(&mut state, Event::NextSuggestion);
        send(&mut state, Event::NextSuggestion);
        assert_eq!(state.suggestion_cursor, Some(1));
        send(&mut state, Event::AcceptSuggestion);
        assert_eq!(state.filters.search_term, "Datalab");
        assert_eq!(state.filters.selected_suggestion.as_deref(), Some("Datalab"));
        assert!(!state.filters.show_suggestions);
        assert_eq!(state.input_mode, InputMode::Browse);
    }

    #[test]
    fn previous_suggestion_wraps_to_last() {
        let (mut state, _) = setup();
        send(&mut state, Event::FocusSearch);
        send(&mut state, Event::SearchInput('d'));
        send(&mut state, Event::SearchInput('a'));
        let last = state.suggestions.len() - 1;
        send(&mut state, Event::PreviousSuggestion);
        assert_eq!(state.suggestion_cursor, Some(last));
    }

    #[test]
    fn clear_search_restores_everything() {
        let (mut state, _) = setup();
        send(&mut state, Event::FocusSearch);
        send(&mut state, Event::SearchInput('z'));
        send(&mut state, Event::SearchInput('z'));
        assert!(state.visible.is_empty());

        send(&mut state, Event::ClearSearch);
        assert_eq!(state.visible.len(), 5);
        assert_eq!(state.input_mode, InputMode::Browse);
        assert!(state.filters.selected_suggestion.is_none());
    }

    #[test]
    fn search_keys_ignored_while_browsing() {
        let (mut state, _) = setup();
        assert_eq!(send(&mut state, Event::SearchInput('x')), (false, vec![]));
        assert!(state.filters.search_term.is_empty());
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let (mut state, haptics) = setup();
        send(&mut state, Event::RequestDelete);
        assert!(matches!(state.overlay, Overlay::ConfirmDelete { ref name, .. } if name == "Sarah Johnson"));
        assert_eq!(state.store.len(), 5);

        send(&mut state, Event::CancelDelete);
        assert!(state.overlay.is_none());
        assert_eq!(state.store.len(), 5);

        send(&mut state, Event::RequestDelete);
        send(&mut state, Event::ConfirmDelete);
        assert_eq!(state.store.len(), 4);
        assert_eq!(state.selected_profile().unwrap().name, "Michael Chen");
        assert_eq!(haptics.played(), vec![HapticKind::Success]);
    }

    #[test]
    fn menu_delete_closes_menu_then_asks() {
        let (mut state, haptics) = setup();
        send(&mut state, Event::OpenQuickActions);
        assert!(matches!(state.overlay, Overlay::Menu(_)));

        send(&mut state, Event::QuickAction(MenuAction::Delete));
        assert!(matches!(state.overlay, Overlay::ConfirmDelete { .. }));
        assert_eq!(haptics.played(), vec![HapticKind::Light, HapticKind::Success]);
    }

    #[test]
    fn menu_cursor_moves_by_rows() {
        let (mut state, _) = setup();
        send(&mut state, Event::OpenQuickActions);
        send(&mut state, Event::MenuMove(Direction::Down));
        send(&mut state, Event::MenuMove(Direction::Right));
        let Overlay::Menu(menu) = &state.overlay else {
            panic!("menu should be open");
        };
        assert_eq!(menu.highlighted(), Some(MenuAction::Share));
    }

    #[test]
    fn favorite_toggles_and_shows_on_card() {
        let (mut state, _) = setup();
        send(&mut state, Event::QuickAction(MenuAction::Favorite));
        assert!(state.compute_viewmodel().cards[0].is_favorite);
        send(&mut state, Event::QuickAction(MenuAction::Favorite));
        assert!(!state.compute_viewmodel().cards[0].is_favorite);
    }

    #[test]
    fn contact_opens_allowed_schemes_only() {
        let (mut state, _) = setup();
        let (_, actions) = send(&mut state, Event::Contact(ContactKind::Email));
        assert_eq!(
            actions,
            vec![Action::OpenUrl(ContactLink::new(ContactKind::Email, "sarah.johnson@techcorp.com"))]
        );

        let (_, actions) = send(&mut state, Event::Contact(ContactKind::Call));
        assert!(actions.is_empty());
        let Overlay::Notice(notice) = &state.overlay else {
            panic!("expected a notice");
        };
        assert_eq!(notice.title, "Action not supported");
        assert_eq!(notice.message, "Cannot call +1 (555) 123-4567 on this device");
    }

    #[test]
    fn contact_failure_shows_error_notice() {
        let (mut state, _) = setup();
        let link = ContactLink::new(ContactKind::Email, "a@b.io");
        send(&mut state, Event::ContactFailed(link));
        assert!(matches!(state.overlay, Overlay::Notice(ref n) if n.title == "Error"));
        send(&mut state, Event::DismissNotice);
        assert!(state.overlay.is_none());
    }

    #[test]
    fn add_form_rejects_then_accepts() {
        let (mut state, haptics) = setup();
        send(&mut state, Event::OpenAddForm);
        send(&mut state, Event::SubmitForm);
        let Overlay::Form(form) = &state.overlay else {
            panic!("form should stay open");
        };
        assert_eq!(form.errors().get(crate::domain::FormField::Name), Some("Name is required"));
        assert_eq!(haptics.played(), vec![HapticKind::Error]);

        let values = [
            "Grace Hopper",
            "Rear Admiral",
            "grace@navy.mil",
            "+1 555 0100",
            "Compiler pioneer",
            "https://example.com/grace.jpg",
        ];
        for value in values {
            for c in value.chars() {
                send(&mut state, Event::FormInput(c));
            }
            send(&mut state, Event::FormNextField);
        }
        send(&mut state, Event::SubmitForm);

        assert!(state.overlay.is_none());
        assert_eq!(state.store.len(), 6);
        assert_eq!(state.store.list()[0].name, "Grace Hopper");
        assert_eq!(state.selected_index, 0);
        assert_eq!(haptics.played().last(), Some(&HapticKind::Success));
    }

    #[test]
    fn cancel_form_leaves_store_alone() {
        let (mut state, _) = setup();
        send(&mut state, Event::OpenAddForm);
        send(&mut state, Event::FormInput('x'));
        send(&mut state, Event::CancelForm);
        assert!(state.overlay.is_none());
        assert_eq!(state.store.len(), 5);
    }

    #[test]
    fn refresh_is_single_flight() {
        let (mut state, haptics) = setup();
        let (_, actions) = send(&mut state, Event::Refresh);
        assert_eq!(actions, vec![Action::ScheduleRefresh { seconds: 1.5 }]);
        assert!(state.refreshing);
        assert_eq!(send(&mut state, Event::Refresh), (false, vec![]));

        send(&mut state, Event::RefreshCompleted { ok: false });
        assert!(!state.refreshing);
        assert_eq!(haptics.played(), vec![HapticKind::Light]);

        send(&mut state, Event::Refresh);
        send(&mut state, Event::RefreshCompleted { ok: true });
        assert_eq!(haptics.played().last(), Some(&HapticKind::Success));
    }

    #[test]
    fn keyboard_swipe_reveals_and_invokes() {
        let (mut state, _) = setup();
        let (_, actions) = send(&mut state, Event::ToggleSwipe);
        assert_eq!(actions, vec![Action::ScheduleTick { seconds: 0.05 }]);

        // Closed cards have nothing to invoke.
        let id = state.selected_profile().unwrap().id.clone();
        assert!(state.swipes[&id].is_open());
        send(&mut state, Event::SwipeAction(SwipeAction::Edit));
        assert!(matches!(state.overlay, Overlay::Notice(ref n) if n.title == "Edit Profile"));
        assert!(!state.swipes[&id].is_open());
    }

    #[test]
    fn ticks_run_animation_to_rest() {
        let (mut state, _) = setup();
        send(&mut state, Event::ToggleSwipe);
        let mut frames = 0;
        loop {
            let (_, actions) = send(&mut state, Event::Tick { now_ms: 0 });
            frames += 1;
            if actions.is_empty() {
                break;
            }
        }
        // 120 px at 40 px per frame.
        assert_eq!(frames, 3);
        let id = state.selected_profile().unwrap().id.clone();
        assert_eq!(state.swipe_offset(&id), -120.0);
    }

    #[test]
    fn drag_left_opens_card() {
        let (mut state, haptics) = setup();
        // First card spans cols 0..39 on rows 5..11; 640 px wide viewport.
        send(&mut state, Event::PointerDown { col: 30, row: 7, at_ms: 0 });
        send(&mut state, Event::PointerMove { col: 20, row: 7 });
        send(&mut state, Event::PointerMove { col: 5, row: 7 });
        let (render, actions) = send(&mut state, Event::PointerUp { col: 5, row: 7 });

        // dx = -200 px is beyond 25% of 640.
        assert!(render);
        assert!(!actions.is_empty());
        let id = state.visible_profile(0).unwrap().id.clone();
        assert!(state.swipes[&id].is_open());
        assert!(!state.long_press.is_pending());
        assert_eq!(haptics.played(), vec![HapticKind::Light]);
    }

    #[test]
    fn short_drag_snaps_back() {
        let (mut state, _) = setup();
        send(&mut state, Event::PointerDown { col: 30, row: 7, at_ms: 0 });
        send(&mut state, Event::PointerMove { col: 22, row: 7 });
        send(&mut state, Event::PointerUp { col: 22, row: 7 });
        let id = state.visible_profile(0).unwrap().id.clone();
        assert!(!state.swipes[&id].is_open());
    }

    #[test]
    fn held_press_opens_menu_at_press_point() {
        let (mut state, haptics) = setup();
        let (_, actions) = send(&mut state, Event::PointerDown { col: 10, row: 7, at_ms: 1_000 });
        assert_eq!(actions, vec![Action::ScheduleTick { seconds: 0.5 }]);

        let (render, _) = send(&mut state, Event::Tick { now_ms: 1_200 });
        assert!(!render);
        send(&mut state, Event::Tick { now_ms: 1_500 });

        let Overlay::Menu(menu) = &state.overlay else {
            panic!("menu should be open");
        };
        assert_eq!(menu.anchor, Point::new(84.0, 120.0));
        assert_eq!(haptics.played(), vec![HapticKind::Light]);
    }

    #[test]
    fn released_press_never_opens_menu() {
        let (mut state, _) = setup();
        send(&mut state, Event::PointerDown { col: 10, row: 7, at_ms: 0 });
        send(&mut state, Event::PointerUp { col: 10, row: 7 });
        send(&mut state, Event::Tick { now_ms: 600 });
        assert!(state.overlay.is_none());
    }

    #[test]
    fn clicking_outside_menu_closes_it() {
        let (mut state, _) = setup();
        send(&mut state, Event::SecondaryClick { col: 10, row: 7 });
        assert!(matches!(state.overlay, Overlay::Menu(_)));
        send(&mut state, Event::PointerDown { col: 79, row: 23, at_ms: 0 });
        assert!(state.overlay.is_none());
        assert_eq!(state.store.len(), 5);
    }

    #[test]
    fn clicking_open_strip_runs_delete() {
        let (mut state, _) = setup();
        send(&mut state, Event::ToggleSwipe);
        // Strip is the last 15 columns of a 39-wide card: Edit 24..31, Delete 31..39.
        send(&mut state, Event::PointerDown { col: 36, row: 7, at_ms: 0 });
        assert!(matches!(state.overlay, Overlay::ConfirmDelete { .. }));
    }

    #[test]
    fn resize_to_new_column_count_closes_swipes() {
        let (mut state, _) = setup();
        send(&mut state, Event::ToggleSwipe);
        send(&mut state, Event::Resize { rows: 50, cols: 160 });
        assert_eq!(state.columns, 3);
        assert!(state.swipes.is_empty());
    }

    #[test]
    fn theme_follows_system_until_toggled() {
        let (mut state, _) = setup();
        assert_eq!(send(&mut state, Event::SystemThemeChanged { dark: true }), (true, vec![]));
        send(&mut state, Event::ToggleTheme);
        assert!(!state.ui.theme.is_dark());
        assert_eq!(send(&mut state, Event::SystemThemeChanged { dark: true }), (false, vec![]));
    }

    #[test]
    fn close_focus_hides_pane() {
        let (mut state, _) = setup();
        assert_eq!(send(&mut state, Event::CloseFocus), (false, vec![Action::CloseFocus]));
    }
}
