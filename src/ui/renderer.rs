//! Top-level rendering coordinator.
//!
//! Rendering is two steps: [`AppState::compute_viewmodel`] turns state into
//! a [`UIViewModel`], then the components paint it into a
//! [`Screen`] that is printed in one write.

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Screen;
use crate::ui::viewmodel::UIViewModel;
use crate::ui::theme::Theme;

/// Renders the plugin UI to stdout using the state's terminal size.
pub fn render(state: &AppState) {
    print!("{}", render_to_string(state));
}

/// Renders a frame to an ANSI string without printing it.
#[must_use]
pub fn render_to_string(state: &AppState) -> String {
    let _span = tracing::trace_span!("render", rows = state.rows, cols = state.cols).entered();
    let viewmodel = state.compute_viewmodel();
    render_viewmodel(&viewmodel, state.ui.theme.active(), state.rows, state.cols)
}

/// Paints `vm` for a `rows` x `cols` terminal.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, rows: usize, cols: usize) -> String {
    let mut screen = Screen::new();
    if rows == 0 || cols == 0 {
        return screen.into_string();
    }
    components::render_layout(&mut screen, vm, theme, rows, cols);
    screen.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, AppSettings, Event, UiContext};
    use crate::store::ProfileStore;

    fn visible(frame: &str) -> String {
        let ansi = regex::Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap();
        ansi.replace_all(frame, "").into_owned()
    }

    fn state() -> AppState {
        let mut state = AppState::new(ProfileStore::from_seed().unwrap(), UiContext::default(), AppSettings::default());
        handle_event(&mut state, &Event::Resize { rows: 24, cols: 80 }).unwrap();
        state
    }

    #[test]
    fn frame_shows_chrome_and_cards() {
        let text = visible(&render_to_string(&state()));
        assert!(text.contains("Profiles"));
        assert!(text.contains("[ ☾ Dark ]"));
        assert!(text.contains("Search profiles..."));
        assert!(text.contains("5 profiles"));
        assert!(text.contains("[ + Add Profile ]"));
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("Michael Chen"));
    }

    #[test]
    fn empty_search_shows_empty_state() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "qqq".chars() {
            handle_event(&mut state, &Event::SearchInput(c)).unwrap();
        }
        let text = visible(&render_to_string(&state));
        assert!(text.contains("No profiles found"));
        assert!(text.contains("0 profiles found for \"qqq\""));
        assert!(!text.contains("Sarah Johnson"));
    }

    #[test]
    fn suggestions_draw_over_grid() {
        let mut state = state();
        handle_event(&mut state, &Event::FocusSearch).unwrap();
        for c in "eng".chars() {
            handle_event(&mut state, &Event::SearchInput(c)).unwrap();
        }
        let text = visible(&render_to_string(&state));
        assert!(text.contains("⌕ Senior Software Engineer"));
    }

    #[test]
    fn zero_size_renders_nothing() {
        let state = AppState::new(ProfileStore::default(), UiContext::default(), AppSettings::default());
        assert!(render_to_string(&state).is_empty());
    }
}
