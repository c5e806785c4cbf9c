//! Text utilities for line boundaries and bounded context snippets.

/// Returns the byte offset of the start of the line containing `offset`.
#[must_use]
pub fn find_line_start(content: &str, offset: usize) -> usize {
    content[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Returns the byte offset of the next newline after `offset`, or the end
/// of `content` if there is no trailing newline.
#[must_use]
pub fn find_line_end(content: &str, offset: usize) -> usize {
    content[offset..].find('\n').map_or(content.len(), |i| offset + i)
}

/// Extracts a display snippet of at most `max_chars` characters from `line`.
///
/// Short lines are returned whole. A line longer than `max_chars` is cut to
/// a window centred on `match_offset` (a byte offset into `line`), with a
/// `…` marker at each trimmed end, so the match always stays visible even
/// on pathological single-line (e.g. minified) input.
#[must_use]
pub fn snippet_around(line: &str, match_offset: usize, max_chars: usize) -> String {
    let total_chars = line.chars().count();
    if total_chars <= max_chars {
        return line.to_string();
    }

    let match_char = line[..match_offset.min(line.len())].chars().count();
    let start_char = match_char
        .saturating_sub(max_chars / 2)
        .min(total_chars - max_chars);
    let end_char = start_char + max_chars;

    let start_byte = byte_offset_of_char(line, start_char);
    let end_byte = byte_offset_of_char(line, end_char);

    let mut snippet = String::with_capacity(end_byte - start_byte + 6);
    if start_char > 0 {
        snippet.push('…');
    }
    snippet.push_str(&line[start_byte..end_byte]);
    if end_char < total_chars {
        snippet.push('…');
    }
    snippet
}

fn byte_offset_of_char(line: &str, char_idx: usize) -> usize {
    line.char_indices().nth(char_idx).map_or(line.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_line_start_at_beginning_returns_zero() {
        assert_eq!(find_line_start("hello", 0), 0);
        assert_eq!(find_line_start("hello", 3), 0);
    }

    #[test]
    fn find_line_start_on_second_line_returns_position_after_newline() {
        let content = "line1\nline2";
        assert_eq!(find_line_start(content, 6), 6);
        assert_eq!(find_line_start(content, 8), 6);
    }

    #[test]
    fn find_line_start_at_newline_returns_start_of_current_line() {
        let content = "line1\nline2";
        assert_eq!(find_line_start(content, 5), 0);
    }

    #[test]
    fn find_line_start_handles_empty_line() {
        let content = "line1\n\nline3";
        assert_eq!(find_line_start(content, 6), 6);
        assert_eq!(find_line_start(content, 7), 7);
    }

    #[test]
    fn find_line_end_on_single_line_returns_content_length() {
        let content = "hello";
        assert_eq!(find_line_end(content, 0), 5);
        assert_eq!(find_line_end(content, 3), 5);
    }

    #[test]
    fn find_line_end_on_first_line_stops_at_newline() {
        let content = "line1\nline2";
        assert_eq!(find_line_end(content, 0), 5);
        assert_eq!(find_line_end(content, 3), 5);
    }

    #[test]
    fn find_line_end_on_last_line_without_trailing_newline() {
        let content = "line1\nline2";
        assert_eq!(find_line_end(content, 6), 11);
    }

    #[test]
    fn find_line_start_and_end_handle_empty_content() {
        assert_eq!(find_line_start("", 0), 0);
        assert_eq!(find_line_end("", 0), 0);
    }

    #[test]
    fn snippet_returns_short_line_unchanged() {
        assert_eq!(snippet_around("var x = eval(y);", 8, 200), "var x = eval(y);");
    }

    #[test]
    fn snippet_returns_line_at_exactly_max_chars_unchanged() {
        let line = "a".repeat(20);
        assert_eq!(snippet_around(&line, 0, 20), line);
    }

    #[test]
    fn snippet_truncates_long_line_with_trailing_ellipsis() {
        let line = format!("eval(x);{}", " ".repeat(300));
        let snippet = snippet_around(&line, 0, 20);
        assert!(snippet.starts_with("eval(x);"));
        assert!(snippet.ends_with('…'));
        assert_eq!(snippet.chars().count(), 21);
    }

    #[test]
    fn snippet_keeps_match_visible_deep_in_long_line() {
        let line = format!("{}eval(x);{}", "a".repeat(300), "b".repeat(300));
        let snippet = snippet_around(&line, 300, 40);
        assert!(snippet.contains("eval(x);"));
        assert!(snippet.starts_with('…'));
        assert!(snippet.ends_with('…'));
    }

    #[test]
    fn snippet_at_end_of_long_line_has_leading_ellipsis_only() {
        let line = format!("{}eval(x)", "a".repeat(300));
        let snippet = snippet_around(&line, 300, 40);
        assert!(snippet.starts_with('…'));
        assert!(snippet.ends_with("eval(x)"));
    }

    #[test]
    fn snippet_window_is_bounded() {
        let line = "x".repeat(1000);
        let snippet = snippet_around(&line, 500, 200);
        // window plus at most two ellipsis markers
        assert!(snippet.chars().count() <= 202);
    }

    #[test]
    fn snippet_handles_multibyte_characters() {
        let line = format!("{}évaluation{}", "é".repeat(150), "à".repeat(150));
        let snippet = snippet_around(&line, 300, 40);
        assert!(snippet.contains("évaluation"));
        assert!(snippet.chars().count() <= 42);
    }
}
