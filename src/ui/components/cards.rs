//! Profile card grid renderer.
//!
//! Each card is a 6-line box:
//!
//! ```text
//! ╭─────────────────────────────────────╮
//! │  SJ  Sarah Johnson                 ★│
//! │ Senior Software Engineer            │
//! │ ✉ sarah.johnson@techcorp.com        │
//! │ ☎ +1 (555) 123-4567        in tw gh │
//! ╰─────────────────────────────────────╯
//! ```
//!
//! A swiped card is drawn `shift` columns to the left, clipped at its own
//! left edge, with the Edit/Delete strip showing through on the right.

use crate::feedback::AvatarImage;
use crate::gesture::SwipeAction;
use crate::ui::helpers::{self, Screen};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::CardItem;

/// A line of styled runs, so a card can be clipped cell by cell.
#[derive(Debug, Default)]
struct Line {
    runs: Vec<(String, String)>,
}

impl Line {
    fn push(&mut self, style: impl Into<String>, text: impl Into<String>) {
        self.runs.push((style.into(), text.into()));
    }

    /// Drops the first `cells` cells.
    fn skip(self, mut cells: usize) -> Self {
        let mut runs = Vec::with_capacity(self.runs.len());
        for (style, text) in self.runs {
            let len = helpers::width(&text);
            if cells >= len {
                cells -= len;
                continue;
            }
            runs.push((style, text.chars().skip(cells).collect()));
            cells = 0;
        }
        Self { runs }
    }

    /// Truncates to at most `cells` cells.
    fn fit(mut self, cells: usize) -> Self {
        let total: usize = self.runs.iter().map(|(_, t)| helpers::width(t)).sum();
        if total > cells {
            let mut keep = cells;
            self.runs.retain_mut(|(_, text)| {
                let len = helpers::width(text);
                if keep == 0 {
                    return false;
                }
                if len > keep {
                    *text = text.chars().take(keep).collect();
                }
                keep = keep.saturating_sub(len);
                true
            });
        }
        self
    }

    fn append(&mut self, other: Self) {
        self.runs.extend(other.runs);
    }

    fn write(&self, screen: &mut Screen) {
        for (style, text) in &self.runs {
            screen.styled(style, text);
        }
    }
}

/// Renders every card in the scroll window.
pub fn render_cards(screen: &mut Screen, cards: &[CardItem], theme: &Theme) {
    for card in cards {
        render_card(screen, card, theme);
    }
}

fn render_card(screen: &mut Screen, card: &CardItem, theme: &Theme) {
    let lines = card_lines(card, theme);
    let shift = card.shift.min(card.rect.width);
    let reveal = card.reveal.max(shift);

    for (offset, line) in lines.into_iter().enumerate() {
        let mut line = line.skip(shift);
        if shift > 0 {
            line.append(strip_line(offset, reveal, theme).skip(reveal - shift));
        }
        // Rects are 0-indexed; the screen is 1-indexed.
        screen.position_cursor(card.rect.y + offset + 1, card.rect.x + 1);
        line.write(screen);
    }
}

fn card_lines(card: &CardItem, theme: &Theme) -> Vec<Line> {
    let colors = &theme.colors;
    let inner = card.rect.width.saturating_sub(2);
    let body = Theme::bg(&colors.card);
    let border = if card.is_selected {
        format!("{}{}{body}", Theme::bold(), Theme::fg(&colors.primary))
    } else {
        format!("{}{body}", Theme::fg(&colors.border))
    };
    let text = |color: &str| format!("{body}{}", Theme::fg(color));

    let framed = |content: Line| {
        let mut line = Line::default();
        line.push(border.clone(), "│");
        line.append(content);
        line.push(border.clone(), "│");
        line
    };

    let mut top = Line::default();
    top.push(border.clone(), format!("╭{}╮", "─".repeat(inner)));

    let mut name = Line::default();
    let avatar_style = match card.avatar {
        AvatarImage::Remote(_) => format!("{}{}", Theme::bg(&colors.primary), Theme::fg(&colors.background)),
        AvatarImage::Placeholder { .. } => {
            format!("{}{}", Theme::bg(&colors.border), Theme::fg(&colors.text_secondary))
        }
    };
    name.push(text(&colors.text_primary), " ");
    name.push(avatar_style, format!(" {} ", helpers::fit(&card.initials, 2)));
    name.push(text(&colors.text_primary), " ");
    name.push(
        format!("{}{}", Theme::bold(), text(&colors.text_primary)),
        helpers::fit(&card.name, inner.saturating_sub(7)),
    );
    name.push(text(&colors.warning), if card.is_favorite { "★" } else { " " });
    let name = framed(name).fit(inner + 2);

    let mut title = Line::default();
    title.push(text(&colors.text_secondary), format!(" {}", helpers::fit(&card.title, inner.saturating_sub(1))));

    let mut email = Line::default();
    email.push(text(&colors.secondary), format!(" ✉ {}", helpers::fit(&card.email, inner.saturating_sub(3))));

    let links = card.links.join(" ");
    let links_width = helpers::width(&links);
    let phone_width = inner.saturating_sub(4 + links_width);
    let mut phone = Line::default();
    if phone_width >= 8 {
        phone.push(text(&colors.success), format!(" ☎ {}", helpers::fit(&card.phone, phone_width)));
        phone.push(text(&colors.text_tertiary), format!("{links} "));
    } else {
        phone.push(text(&colors.success), format!(" ☎ {}", helpers::fit(&card.phone, inner.saturating_sub(3))));
    }

    let mut bottom = Line::default();
    bottom.push(border.clone(), format!("╰{}╯", "─".repeat(inner)));

    vec![
        top,
        name,
        framed(title).fit(inner + 2),
        framed(email).fit(inner + 2),
        framed(phone).fit(inner + 2),
        bottom,
    ]
}

/// Row `offset` of the action strip, `reveal` cells wide: Edit on the left
/// half, Delete on the right.
fn strip_line(offset: usize, reveal: usize, theme: &Theme) -> Line {
    let edit_width = reveal / 2;
    let delete_width = reveal - edit_width;
    let label_row = offset == 2;
    let label = |action: SwipeAction, cells: usize| {
        if label_row {
            helpers::center(action.label(), cells)
        } else {
            " ".repeat(cells)
        }
    };

    let mut line = Line::default();
    line.push(
        format!("{}{}{}", Theme::bold(), Theme::bg(&theme.colors.primary), Theme::fg(&theme.colors.background)),
        label(SwipeAction::Edit, edit_width),
    );
    line.push(
        format!("{}{}{}", Theme::bold(), Theme::bg(&theme.colors.danger), Theme::fg(&theme.colors.background)),
        label(SwipeAction::Delete, delete_width),
    );
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Rect;

    fn visible(screen: &Screen) -> String {
        let ansi = regex::Regex::new(r"\x1b\[[0-9;]*[A-Za-z]").unwrap();
        ansi.replace_all(screen.as_str(), "").into_owned()
    }

    fn card(shift: usize) -> CardItem {
        CardItem {
            rect: Rect { x: 0, y: 5, width: 39, height: 6 },
            shift,
            reveal: 15,
            name: "Sarah Johnson".into(),
            title: "Senior Software Engineer".into(),
            email: "sarah.johnson@techcorp.com".into(),
            phone: "+1 (555) 123-4567".into(),
            initials: "SJ".into(),
            avatar: AvatarImage::Placeholder { initials: "SJ".into() },
            links: vec!["in", "tw", "gh"],
            is_selected: true,
            is_favorite: true,
        }
    }

    #[test]
    fn lines_fill_the_card_width() {
        let theme = Theme::light();
        for line in card_lines(&card(0), &theme) {
            let width: usize = line.runs.iter().map(|(_, t)| helpers::width(t)).sum();
            assert_eq!(width, 39);
        }
    }

    #[test]
    fn card_shows_profile_fields() {
        let mut screen = Screen::new();
        render_cards(&mut screen, &[card(0)], &Theme::light());
        let text = visible(&screen);
        assert!(text.contains("Sarah Johnson"));
        assert!(text.contains("★"));
        assert!(text.contains("✉ sarah.johnson@techcorp.com"));
        assert!(text.contains("in tw gh"));
        assert!(!text.contains("Delete"));
    }

    #[test]
    fn open_card_reveals_strip() {
        let mut screen = Screen::new();
        render_cards(&mut screen, &[card(15)], &Theme::light());
        let text = visible(&screen);
        assert!(text.contains("Edit"));
        assert!(text.contains("Delete"));
        assert!(!text.contains("Sarah Johnson"));
    }

    #[test]
    fn skip_clips_across_runs() {
        let mut line = Line::default();
        line.push("", "abc");
        line.push("", "def");
        let clipped = line.skip(4);
        assert_eq!(clipped.runs, vec![(String::new(), "ef".to_string())]);
    }
}
