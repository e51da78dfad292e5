//! Shared rendering utilities.
//!
//! Components draw into a [`Screen`], an ANSI output buffer addressed by
//! 1-indexed rows and columns. The renderer prints the finished buffer in
//! one go, which also lets tests inspect a frame without a terminal.
//!
//! Widths are counted in `char`s; every glyph the plugin draws is a single
//! terminal cell wide.

use crate::ui::theme::Theme;

/// ANSI output buffer for one frame.
#[derive(Debug, Default, Clone)]
pub struct Screen {
    out: String,
}

impl Screen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Positions the cursor at a specific row and column.
    ///
    /// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
    pub fn position_cursor(&mut self, row: usize, col: usize) {
        self.out.push_str(&format!("\u{1b}[{row};{col}H"));
    }

    pub fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    /// Writes `count` spaces.
    pub fn pad(&mut self, count: usize) {
        self.out.extend(std::iter::repeat(' ').take(count));
    }

    /// Writes `text` styled with `style`, then resets.
    pub fn styled(&mut self, style: &str, text: &str) {
        self.out.push_str(style);
        self.out.push_str(text);
        self.out.push_str(Theme::reset());
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.out
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.out
    }
}

/// Number of terminal cells `text` occupies.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` cells, marking the cut with `…`.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// Left-aligns `text` in exactly `cells` cells, truncating if needed.
#[must_use]
pub fn fit(text: &str, cells: usize) -> String {
    let mut fitted = truncate(text, cells);
    let used = width(&fitted);
    fitted.extend(std::iter::repeat(' ').take(cells - used));
    fitted
}

/// Centers `text` in `cells` cells.
#[must_use]
pub fn center(text: &str, cells: usize) -> String {
    let text = truncate(text, cells);
    let left = (cells - width(&text)) / 2;
    fit(&format!("{}{text}", " ".repeat(left)), cells)
}

/// Greedy word wrap to lines of at most `max` cells. Words longer than a
/// line are truncated.
#[must_use]
pub fn wrap(text: &str, max: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split_whitespace() {
        let word = truncate(word, max);
        if !line.is_empty() && width(&line) + 1 + width(&word) > max {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(&word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_marks_cut() {
        assert_eq!(truncate("Sarah Johnson", 8), "Sarah J…");
        assert_eq!(truncate("short", 8), "short");
        assert_eq!(truncate("anything", 0), "");
    }

    #[test]
    fn fit_and_center_fill_width() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abc…");
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(width(&center("★ Favorite", 20)), 20);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(
            wrap("Are you sure you want to delete this?", 16),
            vec!["Are you sure you", "want to delete", "this?"]
        );
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn screen_collects_escape_sequences() {
        let mut screen = Screen::new();
        screen.position_cursor(2, 5);
        screen.push("hi");
        assert_eq!(screen.as_str(), "\u{1b}[2;5Hhi");
    }
}
