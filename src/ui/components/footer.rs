//! Footer component renderer.
//!
//! This module renders the footer help bar with centered keybinding hints.

use crate::ui::helpers::{self, Screen};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Hints are centered and dimmed; text wider than the terminal is truncated
/// so it never wraps. Returns the next row.
pub fn render_footer(screen: &mut Screen, row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    screen.position_cursor(row, 1);
    screen.push(&Theme::fg(&theme.colors.text_tertiary));
    screen.push(&helpers::center(&footer.keybindings, cols));
    screen.push(Theme::reset());
    row + 1
}
