//! Modal overlays: quick-actions menu, add-profile form, confirmation and
//! notice dialogs.
//!
//! Overlays draw last, on top of the grid. Each one paints an opaque box so
//! nothing underneath shows through.

use crate::ui::helpers::{self, Screen};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DialogView, FormView, MenuView, OverlayView};

/// Widest a centered dialog gets, in cells.
const DIALOG_MAX_WIDTH: usize = 56;

/// Widest the form gets, in cells.
const FORM_MAX_WIDTH: usize = 64;

/// Label column width inside the form.
const FORM_LABEL_WIDTH: usize = 14;

pub fn render_overlay(screen: &mut Screen, overlay: &OverlayView, theme: &Theme, rows: usize, cols: usize) {
    match overlay {
        OverlayView::Menu(menu) => render_menu(screen, menu, theme, cols),
        OverlayView::Form(form) => render_form(screen, form, theme, rows, cols),
        OverlayView::Confirm(dialog) | OverlayView::Notice(dialog) => render_dialog(screen, dialog, theme, rows, cols),
    }
}

/// Paints an empty bordered box with `title` set into its top edge.
///
/// `top`/`left` are 1-indexed.
#[allow(clippy::too_many_arguments)]
fn draw_box(screen: &mut Screen, top: usize, left: usize, width: usize, height: usize, title: &str, border: &str, theme: &Theme) {
    let inner = width.saturating_sub(2);
    let body = Theme::bg(&theme.colors.card);
    let style = format!("{body}{border}");

    let title = helpers::truncate(title, inner.saturating_sub(2));
    let title = if title.is_empty() { String::new() } else { format!(" {title} ") };
    let rule = inner.saturating_sub(helpers::width(&title) + 1);

    screen.position_cursor(top, left);
    screen.push(&style);
    screen.push("╭─");
    screen.push(Theme::bold());
    screen.push(&title);
    screen.push(Theme::reset());
    screen.styled(&style, &format!("{}╮", "─".repeat(rule)));

    for row in 1..height.saturating_sub(1) {
        screen.position_cursor(top + row, left);
        screen.styled(&style, &format!("│{}│", " ".repeat(inner)));
    }

    screen.position_cursor(top + height.saturating_sub(1), left);
    screen.styled(&style, &format!("╰{}╯", "─".repeat(inner)));
}

fn render_menu(screen: &mut Screen, menu: &MenuView, theme: &Theme, cols: usize) {
    let colors = &theme.colors;
    let rect = menu.rect;
    let width = rect.width.min(cols.saturating_sub(rect.x));
    draw_box(
        screen,
        rect.y + 1,
        rect.x + 1,
        width,
        rect.height.max(3),
        &menu.title,
        &Theme::fg(&colors.border),
        theme,
    );

    let button_width = width.saturating_sub(4) / 2;
    for button in &menu.buttons {
        let fg = if button.destructive { &colors.danger } else { &colors.text_primary };
        let style = if button.highlighted {
            format!("{}{}{}", Theme::bold(), Theme::bg(&colors.primary), Theme::fg(&colors.background))
        } else {
            format!("{}{}", Theme::bg(&colors.card), Theme::fg(fg))
        };
        screen.position_cursor(button.row + 1, button.col + 1);
        screen.styled(&style, &helpers::center(&format!("{} {}", button.icon, button.label), button_width));
    }
}

fn render_form(screen: &mut Screen, form: &FormView, theme: &Theme, rows: usize, cols: usize) {
    let colors = &theme.colors;
    let width = cols.saturating_sub(4).min(FORM_MAX_WIDTH);
    let inner = width.saturating_sub(4);
    let value_width = inner.saturating_sub(FORM_LABEL_WIDTH + 1);

    let error_lines = form.fields.iter().filter(|f| f.error.is_some()).count();
    let banner_lines = usize::from(form.banner.is_some()) * 2;
    let height = (form.fields.len() + error_lines + banner_lines + 4).min(rows.saturating_sub(2));
    let top = (rows.saturating_sub(height) / 2).max(1);
    let left = (cols.saturating_sub(width) / 2) + 1;

    draw_box(screen, top, left, width, height, form.title, &Theme::fg(&colors.primary), theme);

    let body = Theme::bg(&colors.card);
    let last_row = top + height.saturating_sub(2);
    let mut row = top + 2;

    if let Some(banner) = form.banner {
        if row <= last_row {
            screen.position_cursor(row, left + 2);
            screen.styled(&format!("{body}{}", Theme::fg(&colors.danger)), &helpers::fit(banner, inner));
        }
        row += 2;
    }

    for field in &form.fields {
        if row > last_row {
            break;
        }
        let label_style = if field.focused {
            format!("{body}{}{}", Theme::bold(), Theme::fg(&colors.primary))
        } else {
            format!("{body}{}", Theme::fg(&colors.text_secondary))
        };
        let value_style = if field.focused {
            format!("{}{}", Theme::bg(&colors.background_secondary), Theme::fg(&colors.text_primary))
        } else {
            format!("{body}{}", Theme::fg(&colors.text_primary))
        };
        let cursor = if field.focused { "▏" } else { "" };

        screen.position_cursor(row, left + 2);
        screen.styled(&label_style, &helpers::fit(field.label, FORM_LABEL_WIDTH));
        screen.styled(&body, " ");
        screen.styled(&value_style, &helpers::fit(&format!("{}{cursor}", field.value), value_width));
        row += 1;

        if let Some(error) = field.error {
            if row <= last_row {
                screen.position_cursor(row, left + 2 + FORM_LABEL_WIDTH + 1);
                screen.styled(&format!("{body}{}", Theme::fg(&colors.danger)), &helpers::fit(error, value_width));
            }
            row += 1;
        }
    }
}

fn render_dialog(screen: &mut Screen, dialog: &DialogView, theme: &Theme, rows: usize, cols: usize) {
    let colors = &theme.colors;
    let width = cols.saturating_sub(4).min(DIALOG_MAX_WIDTH);
    let inner = width.saturating_sub(4);
    let lines = helpers::wrap(&dialog.message, inner);
    let height = lines.len() + 5;
    let top = (rows.saturating_sub(height) / 2).max(1);
    let left = (cols.saturating_sub(width) / 2) + 1;
    let border = Theme::fg(if dialog.destructive { &colors.danger } else { &colors.primary });

    draw_box(screen, top, left, width, height, &dialog.title, &border, theme);

    let body = Theme::bg(&colors.card);
    for (offset, line) in lines.iter().enumerate() {
        screen.position_cursor(top + 2 + offset, left + 2);
        screen.styled(&format!("{body}{}", Theme::fg(&colors.text_primary)), &helpers::fit(line, inner));
    }

    screen.position_cursor(top + height.saturating_sub(2), left + 2);
    screen.styled(&format!("{body}{}", Theme::fg(&colors.text_tertiary)), &helpers::center(dialog.hint, inner));
}
