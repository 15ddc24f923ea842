pub const fn scroll_offset(
    total_lines: usize,
    max_visible_lines: usize,
    cursor_line: usize,
) -> usize {
    if total_lines <= max_visible_lines {
        return 0;
    }

    if cursor_line >= max_visible_lines {
        return cursor_line.saturating_sub(max_visible_lines) + 1;
    }

    cursor_line
}

#[cfg(test)]
mod tests {
    use super::scroll_offset;

    #[test]
    fn everything_fits() {
        assert_eq!(scroll_offset(5, 10, 4), 0);
    }

    #[test]
    fn cursor_past_the_window_scrolls() {
        assert_eq!(scroll_offset(20, 10, 9), 9);
        assert_eq!(scroll_offset(20, 10, 10), 1);
        assert_eq!(scroll_offset(20, 10, 19), 10);
    }
}
