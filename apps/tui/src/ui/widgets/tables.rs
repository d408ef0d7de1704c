pub const fn scroll_offset(
    total_rows: usize,
    max_visible_rows: usize,
    selected_index: usize,
) -> usize {
    if total_rows <= max_visible_rows {
        return 0;
    }

    if selected_index >= max_visible_rows {
        return selected_index.saturating_sub(max_visible_rows) + 1;
    }

    selected_index
}

/// Offset that keeps the last row on screen, so new entries are always visible.
pub const fn tail_offset(total_rows: usize, max_visible_rows: usize) -> usize {
    scroll_offset(total_rows, max_visible_rows, total_rows.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_scroll_when_rows_fit() {
        assert_eq!(tail_offset(0, 5), 0);
        assert_eq!(tail_offset(5, 5), 0);
    }

    #[test]
    fn test_tail_offset_shows_newest_rows() {
        assert_eq!(tail_offset(8, 5), 3);
        assert_eq!(tail_offset(6, 1), 5);
    }
}
