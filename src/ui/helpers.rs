use ratatui::layout::Rect;

/// Repeat a short ASCII motif until it fills the requested width.
pub(crate) fn repeat_pattern_row(row: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if row.is_empty() {
        return " ".repeat(width);
    }
    let repeat_count = width / row.len() + 2;
    let mut repeated = row.repeat(repeat_count);
    repeated.truncate(width);
    repeated
}

/// Truncate to `max_width` characters, ending with "…" when something was cut.
pub(crate) fn truncate_str(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width == 0 {
        String::new()
    } else {
        let mut result: String = s.chars().take(max_width - 1).collect();
        result.push('…');
        result
    }
}

/// Center `text` (truncated if needed) inside a field of `width` characters.
pub(crate) fn center_in(text: &str, width: usize) -> String {
    let text = truncate_str(text, width);
    let len = text.chars().count();
    let padding = width.saturating_sub(len);
    let left = padding / 2;
    let right = padding - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Last path segment of a URI without its query string, e.g. the file name of a
/// poster image.
pub(crate) fn uri_file_name(uri: &str) -> &str {
    let without_query = uri.split(['?', '#']).next().unwrap_or(uri);
    without_query
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(without_query)
}

/// Rectangle directly below `anchor`, as wide as the anchor and at most
/// `height` rows tall, clipped to `bounds`.
pub(crate) fn dropdown_rect(anchor: Rect, height: u16, bounds: Rect) -> Rect {
    let y = anchor.y.saturating_add(anchor.height);
    let bottom = bounds.y.saturating_add(bounds.height);
    let available = bottom.saturating_sub(y);
    Rect {
        x: anchor.x,
        y: y.min(bottom),
        width: anchor.width,
        height: height.min(available),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_fills_width() {
        assert_eq!(repeat_pattern_row("ab", 5), "ababa");
        assert_eq!(repeat_pattern_row("", 3), "   ");
        assert_eq!(repeat_pattern_row("ab", 0), "");
    }

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate_str("Interstellar", 20), "Interstellar");
        assert_eq!(truncate_str("Interstellar", 6), "Inter…");
        assert_eq!(truncate_str("Interstellar", 0), "");
    }

    #[test]
    fn centering_pads_both_sides() {
        assert_eq!(center_in("ab", 6), "  ab  ");
        assert_eq!(center_in("abc", 6), " abc  ");
        assert_eq!(center_in("abcdef", 4), "abc…");
    }

    #[test]
    fn file_name_strips_query() {
        assert_eq!(
            uri_file_name("https://image.tmdb.org/t/p/w600/oYuLEt3z.jpg"),
            "oYuLEt3z.jpg"
        );
        assert_eq!(
            uri_file_name("https://placehold.co/300x450/333/FFF?text=Not+Found"),
            "FFF"
        );
    }

    #[test]
    fn dropdown_is_clipped_to_bounds() {
        let bounds = Rect::new(0, 0, 80, 20);
        let anchor = Rect::new(40, 2, 30, 3);
        assert_eq!(dropdown_rect(anchor, 8, bounds), Rect::new(40, 5, 30, 8));
        assert_eq!(dropdown_rect(anchor, 40, bounds).height, 15);
    }
}
