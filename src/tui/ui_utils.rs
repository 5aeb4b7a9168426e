use ratatui::{
    style::Style,
    text::{Line, Span},
};

/// Estimate the number of wrapped lines `text` occupies at `width` columns
pub fn estimate_wrapped_lines(text: &str, width: usize) -> u16 {
    if width == 0 {
        return 0;
    }
    let mut total_lines = 0u16;
    for line in text.split('\n') {
        let line_width = line.chars().count();
        let wrapped = if line_width == 0 {
            1 // Empty line still takes 1 line
        } else {
            line_width.div_ceil(width) as u16
        };
        total_lines = total_lines.saturating_add(wrapped);
    }
    total_lines
}

/// The last characters of `value` that fit in `width` columns, leaving
/// one column for the cursor.
pub fn visible_tail(value: &str, width: usize) -> &str {
    let room = width.saturating_sub(1);
    let count = value.chars().count();
    if count <= room {
        return value;
    }
    let skip = count - room;
    match value.char_indices().nth(skip) {
        Some((idx, _)) => &value[idx..],
        None => "",
    }
}

/// Lines for an input field: the value, a placeholder when empty and
/// unfocused, and a cursor block when focused.
pub fn input_lines<'a>(
    value: &'a str,
    placeholder: &'a str,
    focused: bool,
    value_style: Style,
    placeholder_style: Style,
    cursor_style: Style,
) -> Vec<Line<'a>> {
    if value.is_empty() && !focused {
        return vec![Line::from(Span::styled(placeholder, placeholder_style))];
    }

    let mut lines: Vec<Line> = value
        .split('\n')
        .map(|l| Line::from(Span::styled(l, value_style)))
        .collect();
    if focused {
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("█", cursor_style));
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estimate_wrapped_lines() {
        assert_eq!(estimate_wrapped_lines("", 10), 1);
        assert_eq!(estimate_wrapped_lines("abcdefghij", 10), 1);
        assert_eq!(estimate_wrapped_lines("abcdefghijk", 10), 2);
        assert_eq!(estimate_wrapped_lines("a\n\nb", 10), 3);
        assert_eq!(estimate_wrapped_lines("abc", 0), 0);
    }

    #[test]
    fn test_visible_tail() {
        assert_eq!(visible_tail("short", 10), "short");
        assert_eq!(visible_tail("abcdefghij", 5), "ghij");
        assert_eq!(visible_tail("ééééé", 3), "éé");
        assert_eq!(visible_tail("abc", 0), "");
    }

    #[test]
    fn test_input_lines_placeholder_only_when_unfocused() {
        let s = Style::default();
        let lines = input_lines("", "Brief summary", false, s, s, s);
        assert_eq!(lines[0].to_string(), "Brief summary");

        let lines = input_lines("", "Brief summary", true, s, s, s);
        assert_eq!(lines[0].to_string(), "█");
    }

    #[test]
    fn test_input_lines_multiline_cursor_on_last_line() {
        let s = Style::default();
        let lines = input_lines("one\ntwo", "", true, s, s, s);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to_string(), "one");
        assert_eq!(lines[1].to_string(), "two█");
    }
}
