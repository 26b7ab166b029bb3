//! Shared rendering utilities.
//!
//! Text measurement and highlighting helpers used by several components.
//! Everything works on character indices, never byte indices, so titles with
//! accented letters truncate and highlight correctly.

use crate::ui::theme::{ColorTokens, Theme};

/// Moves the cursor to a 1-indexed `row` and `col`.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Escape sequence for the base style: body text over the background token.
#[must_use]
pub fn base_style(tokens: ColorTokens) -> String {
    format!("{}{}", Theme::fg_rgb(tokens.text()), Theme::bg_rgb(tokens.light))
}

/// Prints `text` with `ranges` in the match highlight colors.
///
/// `restore` is re-emitted after every highlighted section so the caller's
/// style (base or selection) continues afterwards.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start.max(current_pos)..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}{restore}", Theme::reset());

        current_pos = current_pos.max(end);
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Case-insensitive, non-overlapping occurrences of `query` in `text`, as
/// `(start, end)` character ranges.
///
/// # Example
///
/// ```rust
/// use zbooks::ui::helpers::substring_ranges;
///
/// assert_eq!(substring_ranges("The Fellowship of the Ring", "the"), vec![(0, 3), (18, 21)]);
/// assert!(substring_ranges("Dune", "").is_empty());
/// ```
#[must_use]
pub fn substring_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let haystack: Vec<char> = text.to_lowercase().chars().collect();
    let needle: Vec<char> = query.to_lowercase().chars().collect();
    // Source character index of every lowercased character.
    let owner: Vec<usize> = text
        .chars()
        .enumerate()
        .flat_map(|(i, c)| std::iter::repeat(i).take(c.to_lowercase().count()))
        .collect();

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    if needle.is_empty() {
        return ranges;
    }

    let mut i = 0;
    while i + needle.len() <= haystack.len() {
        if haystack[i..i + needle.len()] != needle[..] {
            i += 1;
            continue;
        }
        if let (Some(&start), Some(&last)) = (owner.get(i), owner.get(i + needle.len() - 1)) {
            let disjoint = ranges.last().map_or(true, |&(_, end)| start >= end);
            if disjoint {
                ranges.push((start, last + 1));
            }
        }
        i += needle.len();
    }
    ranges
}

/// Shortens `text` to at most `max` characters, ending in `...` when cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Greedy word wrap to `width` characters. Words longer than a line are
/// split.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let needed = if line_len == 0 { word.len() } else { line_len + 1 + word.len() };
        if needed > width {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
        }
        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.extend(word.iter());
        line_len += word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
    lines
}

/// Width of the title column in the preview list for a `cols`-wide pane.
#[must_use]
pub const fn title_column_width(cols: usize) -> usize {
    cols.saturating_sub(4) * 3 / 5
}

/// Pads `text` with spaces to `width` characters.
#[must_use]
pub fn pad(text: &str, width: usize) -> String {
    let count = text.chars().count();
    format!("{text}{}", " ".repeat(width.saturating_sub(count)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_ranges_are_case_insensitive_and_disjoint() {
        assert_eq!(substring_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert_eq!(substring_ranges("Élan élan", "ÉLAN"), vec![(0, 4), (5, 9)]);
        assert!(substring_ranges("Dune", "dunes").is_empty());
    }

    #[test]
    fn substring_ranges_follow_multi_char_lowercase() {
        assert_eq!(substring_ranges("İstanbul Nights", "İST"), vec![(0, 3)]);
        assert_eq!(substring_ranges("İstanbul Nights", "i\u{307}st"), vec![(0, 3)]);
        assert_eq!(substring_ranges("İstanbul Nights", "nights"), vec![(9, 15)]);
        assert!(substring_ranges("İstanbul", "ist").is_empty());
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("Dune", 10), "Dune");
        assert_eq!(truncate("Brave New World", 8), "Brave...");
        assert_eq!(truncate("Karamazov", 2), "Ka");
        assert_eq!(truncate("Ångström", 7), "Ångs...");
    }

    #[test]
    fn wrap_text_breaks_on_words() {
        assert_eq!(
            wrap_text("a wizard of earthsea", 10),
            vec!["a wizard", "of", "earthsea"]
        );
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert!(wrap_text("   ", 5).is_empty());
    }

    #[test]
    fn pad_fills_to_width() {
        assert_eq!(pad("ab", 4), "ab  ");
        assert_eq!(pad("abcdef", 4), "abcdef");
    }
}
