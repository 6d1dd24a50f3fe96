//! Small line-building helpers shared by widgets.

use super::styles::Theme;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// A blank line.
pub fn empty_line() -> Line<'static> {
    Line::from("")
}

/// `Label: value` with the label styled by the theme.
pub fn key_value_line<'a>(label: &'a str, value: impl Into<String>, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.label),
        Span::raw(value.into()),
    ])
}

/// `key description` hint pair for the status bar and pager.
pub fn key_hint<'a>(key: &'a str, description: &'a str, theme: &Theme) -> Vec<Span<'a>> {
    vec![
        Span::styled(key, theme.key),
        Span::styled(format!(" {description}"), theme.muted),
    ]
}

/// Cut `text` to at most `max_width` display columns, marking the cut
/// with an ellipsis.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    let width: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if width <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_leaves_short_text_alone() {
        assert_eq!(truncate_to_width("Rick", 10), "Rick");
        assert_eq!(truncate_to_width("Rick", 4), "Rick");
    }

    #[test]
    fn truncate_marks_cut_with_ellipsis() {
        assert_eq!(truncate_to_width("Abradolf Lincler", 8), "Abradol…");
    }

    #[test]
    fn truncate_counts_wide_characters_as_two_columns() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_to_width("日本語", 5), "日本…");
    }

    #[test]
    fn truncate_to_zero_is_empty() {
        assert_eq!(truncate_to_width("Rick", 0), "");
    }

    #[test]
    fn key_value_line_joins_label_and_value() {
        let line = key_value_line("Status", "Alive", &Theme::default());
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Status: Alive");
    }
}
