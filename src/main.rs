//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the profile-deck library and the Zellij
//! plugin system: it translates Zellij key, mouse, timer and command events
//! into library [`Event`]s and carries out the returned [`Action`]s.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for Key, Mouse, Timer and `RunCommandResult` events
//! 3. **Update**: Map events, delegate to `handle_event`, execute actions
//! 4. **Render**: Sync the pane size, then call the library renderer
//!
//! # Timers
//!
//! Zellij has a single `set_timeout` primitive. Every `Timer` event is turned
//! into a `Tick` carrying the wall clock in milliseconds; when the simulated
//! refresh deadline has passed it also completes the refresh.
//!
//! # Keybindings
//!
//! Browsing the grid:
//! - `h`/`j`/`k`/`l`, arrows: Move selection
//! - `/`: Search
//! - `Enter`: Quick actions menu
//! - `Space`: Reveal/hide swipe actions
//! - `e` / `d`: Edit / delete (the revealed swipe action when open)
//! - `f`: Toggle favorite
//! - `a`: Add profile
//! - `c` / `m` / `s`: Call / email / message
//! - `t`: Toggle theme
//! - `r`: Refresh
//! - `q`: Close plugin
//!
//! In search:
//! - Characters: Type
//! - `Down`/`Up`: Highlight suggestion
//! - `Enter`: Accept suggestion
//! - `Tab`: Back to the grid, keeping the term
//! - `Esc`: Clear search
//!
//! # Pipes
//!
//! `zellij pipe --name system_theme -- dark` (or `light`) reports a host color
//! scheme change.

#![allow(clippy::multiple_crate_versions)]

use std::collections::{BTreeMap, HashMap};
use zellij_tile::prelude::*;

use profile_deck::app::Direction;
use profile_deck::feedback::{ContactKind, ContactLink};
use profile_deck::gesture::{SwipeAction, SwipeController};
use profile_deck::menu::MenuAction;
use profile_deck::store::ProfileStore;
use profile_deck::{handle_event, Action, AppSettings, AppState, Config, Event, InputMode, Overlay, UiContext};

register_plugin!(State);

/// Context key tagging `xdg-open` commands with the URL they opened.
const OPEN_URL_CONTEXT: &str = "open_url";

/// Pipe name for host color scheme changes.
const SYSTEM_THEME_PIPE: &str = "system_theme";

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific bookkeeping: the
/// pending refresh deadline and the URLs handed to the host.
struct State {
    app: AppState,

    /// Wall-clock time the simulated refresh completes.
    refresh_deadline_ms: Option<i64>,

    /// Contact links awaiting their `xdg-open` result, by URL.
    pending_links: HashMap<String, ContactLink>,
}

impl Default for State {
    fn default() -> Self {
        let app = profile_deck::initialize(&Config::default()).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load seed profiles");
            AppState::new(ProfileStore::default(), UiContext::default(), AppSettings::default())
        });
        Self {
            app,
            refresh_deadline_ms: None,
            pending_links: HashMap::new(),
        }
    }
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// # Permissions
    ///
    /// Requests `RunCommands` to hand contact URLs to `xdg-open`.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        profile_deck::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!(config = ?config, "parsed configuration");
        match profile_deck::initialize(&config) {
            Ok(app) => self.app = app,
            Err(e) => tracing::warn!(error = %e, "initialization failed, starting empty"),
        }

        request_permission(&[PermissionType::RunCommands]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::Timer,
            EventType::RunCommandResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let span = tracing::debug_span!("plugin_update_event", event_type = %Self::get_event_name(&event));
        let _guard = span.entered();

        let events = match event {
            zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key).into_iter().collect(),
            zellij_tile::prelude::Event::Mouse(mouse) => self.map_mouse_event(mouse).into_iter().collect(),
            zellij_tile::prelude::Event::Timer(_elapsed) => self.map_timer_event(),
            zellij_tile::prelude::Event::RunCommandResult(exit_code, _stdout, stderr, context) => {
                self.map_command_result_event(exit_code, &stderr, &context).into_iter().collect()
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                if matches!(status, PermissionStatus::Denied) {
                    tracing::warn!("run-commands permission denied - contact links will not open");
                }
                Vec::new()
            }
            _ => Vec::new(),
        };

        events.iter().fold(false, |render, event| self.dispatch(event) || render)
    }

    /// Handles `zellij pipe` messages.
    fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
        if pipe_message.name != SYSTEM_THEME_PIPE {
            return false;
        }
        let dark = match pipe_message.payload.as_deref().map(str::trim) {
            Some("dark") => true,
            Some("light") => false,
            other => {
                tracing::debug!(payload = ?other, "ignoring system theme payload");
                return false;
            }
        };
        self.dispatch(&Event::SystemThemeChanged { dark })
    }

    fn render(&mut self, rows: usize, cols: usize) {
        if rows != self.app.rows || cols != self.app.cols {
            self.dispatch(&Event::Resize { rows, cols });
        }
        profile_deck::ui::render(&self.app);
    }
}

impl State {
    /// Runs one library event and executes its actions. Returns whether to
    /// re-render.
    fn dispatch(&mut self, event: &Event) -> bool {
        match handle_event(&mut self.app, event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled successfully");
                for action in actions {
                    self.execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(mouse) => format!("Mouse({mouse:?})"),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::RunCommandResult(..) => "RunCommandResult".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn selected_swipe_open(&self) -> bool {
        self.app
            .selected_profile()
            .and_then(|p| self.app.swipes.get(&p.id))
            .is_some_and(SwipeController::is_open)
    }

    /// Maps keyboard events to application events, by overlay then mode.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");
        let shift = key.has_modifiers(&[KeyModifier::Shift]);

        match &self.app.overlay {
            Overlay::Notice(_) => return Some(Event::DismissNotice),
            Overlay::ConfirmDelete { .. } => {
                return match key.bare_key {
                    BareKey::Char('y' | 'Y') | BareKey::Enter => Some(Event::ConfirmDelete),
                    BareKey::Char('n' | 'N') | BareKey::Esc => Some(Event::CancelDelete),
                    _ => None,
                };
            }
            Overlay::Menu(menu) => {
                return match key.bare_key {
                    BareKey::Left | BareKey::Char('h') => Some(Event::MenuMove(Direction::Left)),
                    BareKey::Right | BareKey::Char('l') => Some(Event::MenuMove(Direction::Right)),
                    BareKey::Up | BareKey::Char('k') => Some(Event::MenuMove(Direction::Up)),
                    BareKey::Down | BareKey::Char('j') => Some(Event::MenuMove(Direction::Down)),
                    BareKey::Enter => menu.highlighted().map(Event::QuickAction),
                    BareKey::Esc | BareKey::Char('q') => Some(Event::CloseMenu),
                    _ => None,
                };
            }
            Overlay::Form(_) => {
                return match key.bare_key {
                    BareKey::Tab if shift => Some(Event::FormPreviousField),
                    BareKey::Tab | BareKey::Down => Some(Event::FormNextField),
                    BareKey::Up => Some(Event::FormPreviousField),
                    BareKey::Enter => Some(Event::SubmitForm),
                    BareKey::Esc => Some(Event::CancelForm),
                    BareKey::Backspace => Some(Event::FormBackspace),
                    BareKey::Char(c) => Some(Event::FormInput(c)),
                    _ => None,
                };
            }
            Overlay::None => {}
        }

        if self.app.input_mode == InputMode::Search {
            return match key.bare_key {
                BareKey::Down => Some(Event::NextSuggestion),
                BareKey::Up => Some(Event::PreviousSuggestion),
                BareKey::Enter => Some(Event::AcceptSuggestion),
                BareKey::Tab => Some(Event::ExitSearch),
                BareKey::Esc => Some(Event::ClearSearch),
                BareKey::Backspace => Some(Event::SearchBackspace),
                BareKey::Char(c) => Some(Event::SearchInput(c)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Left | BareKey::Char('h') => Event::Navigate(Direction::Left),
            BareKey::Right | BareKey::Char('l') => Event::Navigate(Direction::Right),
            BareKey::Up | BareKey::Char('k') => Event::Navigate(Direction::Up),
            BareKey::Down | BareKey::Char('j') => Event::Navigate(Direction::Down),
            BareKey::Char('/') => Event::FocusSearch,
            BareKey::Enter => Event::OpenQuickActions,
            BareKey::Char(' ') => Event::ToggleSwipe,
            BareKey::Char('e') if self.selected_swipe_open() => Event::SwipeAction(SwipeAction::Edit),
            BareKey::Char('e') => Event::QuickAction(MenuAction::Edit),
            BareKey::Char('d') if self.selected_swipe_open() => Event::SwipeAction(SwipeAction::Delete),
            BareKey::Char('d') => Event::RequestDelete,
            BareKey::Char('f') => Event::QuickAction(MenuAction::Favorite),
            BareKey::Char('a') => Event::OpenAddForm,
            BareKey::Char('c') => Event::Contact(ContactKind::Call),
            BareKey::Char('m') => Event::Contact(ContactKind::Email),
            BareKey::Char('s') => Event::Contact(ContactKind::Message),
            BareKey::Char('t') => Event::ToggleTheme,
            BareKey::Char('r') => Event::Refresh,
            BareKey::Esc if !self.app.filters.search_term.is_empty() => Event::ClearSearch,
            BareKey::Char('q') => Event::CloseFocus,
            _ => return None,
        })
    }

    /// Maps mouse events to pointer events. Zellij reports 0-indexed pane
    /// lines, which may be negative above the pane.
    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let cell = |line: isize, col: usize| usize::try_from(line).ok().map(|row| (col, row));
        match mouse {
            Mouse::LeftClick(line, col) => cell(line, col).map(|(col, row)| Event::PointerDown {
                col,
                row,
                at_ms: now_ms(),
            }),
            Mouse::Hold(line, col) => cell(line, col).map(|(col, row)| Event::PointerMove { col, row }),
            Mouse::Release(line, col) => cell(line, col).map(|(col, row)| Event::PointerUp { col, row }),
            Mouse::RightClick(line, col) => cell(line, col).map(|(col, row)| Event::SecondaryClick { col, row }),
            Mouse::ScrollUp(_) if self.app.overlay.is_none() => Some(Event::Navigate(Direction::Up)),
            Mouse::ScrollDown(_) if self.app.overlay.is_none() => Some(Event::Navigate(Direction::Down)),
            _ => None,
        }
    }

    /// Completes a due refresh, then ticks.
    fn map_timer_event(&mut self) -> Vec<Event> {
        let now = now_ms();
        let mut events = Vec::with_capacity(2);
        if self.refresh_deadline_ms.is_some_and(|deadline| now >= deadline) {
            self.refresh_deadline_ms = None;
            events.push(Event::RefreshCompleted { ok: true });
        }
        events.push(Event::Tick { now_ms: now });
        events
    }

    /// Reports a failed `xdg-open` back as `ContactFailed`.
    fn map_command_result_event(
        &mut self,
        exit_code: Option<i32>,
        stderr: &[u8],
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let url = context.get(OPEN_URL_CONTEXT)?;
        let link = self.pending_links.remove(url)?;
        if exit_code == Some(0) {
            tracing::debug!(url = %url, "contact link opened");
            return None;
        }
        tracing::debug!(url = %url, exit_code = ?exit_code, stderr = %String::from_utf8_lossy(stderr), "open command failed");
        Some(Event::ContactFailed(link))
    }

    /// Translates library actions to Zellij API calls.
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::ScheduleRefresh { seconds } => {
                #[allow(clippy::cast_possible_truncation)]
                let delay_ms = (seconds * 1000.0) as i64;
                self.refresh_deadline_ms = Some(now_ms() + delay_ms);
                set_timeout(seconds);
            }
            Action::ScheduleTick { seconds } => set_timeout(seconds),
            Action::OpenUrl(link) => {
                let url = link.url();
                tracing::debug!(url = %url, "opening contact link");
                let mut context = BTreeMap::new();
                context.insert(OPEN_URL_CONTEXT.to_string(), url.clone());
                run_command(&["xdg-open", &url], context);
                self.pending_links.insert(url, link);
            }
        }
    }
}
