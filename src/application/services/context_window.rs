/// Truncates to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Splits `text` into consecutive windows of `window_chars` characters and
/// keeps the first `max_windows` non-blank ones.
pub fn split_windows(text: &str, window_chars: usize, max_windows: usize) -> Vec<&str> {
    if window_chars == 0 || max_windows == 0 {
        return Vec::new();
    }

    let mut windows = Vec::with_capacity(max_windows);
    let mut rest = text;

    while !rest.is_empty() && windows.len() < max_windows {
        let window = truncate_chars(rest, window_chars);
        rest = &rest[window.len()..];

        let trimmed = window.trim();
        if !trimmed.is_empty() {
            windows.push(trimmed);
        }
    }

    windows
}
