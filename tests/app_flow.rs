//! End-to-end flows through `handle_event` and the renderer.

use profile_deck::app::{AppSettings, AppState, Direction, UiContext};
use profile_deck::feedback::{HapticKind, RecordingHaptics};
use profile_deck::gesture::SwipeAction;
use profile_deck::store::ProfileStore;
use profile_deck::ui::render_to_string;
use profile_deck::{handle_event, Action, Event, InputMode, Overlay};

fn setup(rows: usize, cols: usize) -> (AppState, RecordingHaptics) {
    let haptics = RecordingHaptics::new();
    let ui = UiContext {
        haptics: Box::new(haptics.clone()),
        ..UiContext::default()
    };
    let mut state = AppState::new(ProfileStore::from_seed().unwrap(), ui, AppSettings::default());
    handle_event(&mut state, &Event::Resize { rows, cols }).unwrap();
    (state, haptics)
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn type_text(state: &mut AppState, text: &str, wrap: fn(char) -> Event) {
    for c in text.chars() {
        send(state, wrap(c));
    }
}

fn screen_text(state: &AppState) -> String {
    let ansi = regex::Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap();
    ansi.replace_all(&render_to_string(state), "").into_owned()
}

#[test]
fn added_profile_is_listed_first_and_searchable() {
    let (mut state, haptics) = setup(24, 80);

    send(&mut state, Event::OpenAddForm);
    let fields = [
        "Ada Lovelace",
        "Analyst",
        "ada@engine.org",
        "+44 20 0000",
        "Writes programs",
        "https://example.com/ada.jpg",
    ];
    for value in fields {
        type_text(&mut state, value, Event::FormInput);
        send(&mut state, Event::FormNextField);
    }
    send(&mut state, Event::SubmitForm);

    assert!(state.overlay.is_none());
    assert_eq!(state.store.len(), 6);
    assert_eq!(state.selected_profile().unwrap().name, "Ada Lovelace");
    assert_eq!(haptics.played(), vec![HapticKind::Success]);

    send(&mut state, Event::FocusSearch);
    type_text(&mut state, "ada", Event::SearchInput);
    assert_eq!(state.input_mode, InputMode::Search);

    let text = screen_text(&state);
    assert!(text.contains("1 profile found for \"ada\""));
    assert!(text.contains("Ada Lovelace"));
    assert!(!text.contains("Sarah Johnson"));
}

#[test]
fn rejected_form_keeps_overlay_and_reports_errors() {
    let (mut state, haptics) = setup(24, 80);

    send(&mut state, Event::OpenAddForm);
    type_text(&mut state, "Nameless", Event::FormInput);
    send(&mut state, Event::SubmitForm);

    assert!(matches!(state.overlay, Overlay::Form(_)));
    assert_eq!(state.store.len(), 5);
    assert_eq!(haptics.played(), vec![HapticKind::Error]);

    let text = screen_text(&state);
    assert!(text.contains("Please fix the errors and try again."));
    assert!(text.contains("Title is required"));

    send(&mut state, Event::CancelForm);
    assert!(state.overlay.is_none());
}

#[test]
fn swipe_reveal_then_delete_with_confirmation() {
    let (mut state, haptics) = setup(24, 80);

    send(&mut state, Event::ToggleSwipe);
    while !send(&mut state, Event::Tick { now_ms: 0 }).1.is_empty() {}
    assert!(screen_text(&state).contains("Delete"));

    send(&mut state, Event::SwipeAction(SwipeAction::Delete));
    assert!(matches!(state.overlay, Overlay::ConfirmDelete { .. }));
    let text = screen_text(&state);
    assert!(text.contains("Delete Profile"));
    assert!(text.contains("delete Sarah Johnson's"));

    send(&mut state, Event::ConfirmDelete);
    assert!(state.overlay.is_none());
    assert_eq!(state.store.len(), 4);
    assert!(state.store.list().iter().all(|p| p.name != "Sarah Johnson"));
    assert_eq!(haptics.played().last(), Some(&HapticKind::Success));
    assert!(!screen_text(&state).contains("Sarah Johnson"));
}

#[test]
fn refresh_runs_once_until_completed() {
    let (mut state, haptics) = setup(24, 80);

    let (render, actions) = send(&mut state, Event::Refresh);
    assert!(render);
    assert_eq!(actions, vec![Action::ScheduleRefresh { seconds: 1.5 }]);
    assert!(screen_text(&state).contains("Refreshing"));

    assert_eq!(send(&mut state, Event::Refresh), (false, vec![]));

    send(&mut state, Event::RefreshCompleted { ok: true });
    assert!(!state.refreshing);
    assert!(!screen_text(&state).contains("Refreshing"));
    assert_eq!(haptics.played(), vec![HapticKind::Light, HapticKind::Success]);
}

#[test]
fn columns_follow_pane_size() {
    let (mut state, _) = setup(24, 80);
    assert_eq!(state.columns, 2);

    send(&mut state, Event::Resize { rows: 60, cols: 200 });
    assert_eq!(state.columns, 3);

    send(&mut state, Event::Resize { rows: 60, cols: 40 });
    assert_eq!(state.columns, 1);

    send(&mut state, Event::Navigate(Direction::Down));
    assert_eq!(state.selected_profile().unwrap().name, "Michael Chen");
}
