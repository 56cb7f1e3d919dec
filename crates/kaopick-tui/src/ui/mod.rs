//! UI widget modules for the TUI frontend.
//!
//! Each sub-module renders a single UI component using ratatui.

pub mod picker;
pub mod popup;
pub mod statusbar;

/// Computes the visible window `(start, end)` for a list of `total` items
/// so that `selected` is always in view within `max_visible` lines.
pub fn visible_window(selected: usize, total: usize, max_visible: usize) -> (usize, usize) {
    if total <= max_visible {
        return (0, total);
    }
    let half = max_visible / 2;
    let start = if selected <= half {
        0
    } else if selected + half >= total {
        total.saturating_sub(max_visible)
    } else {
        selected - half
    };
    let end = (start + max_visible).min(total);
    (start, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_is_fully_visible() {
        assert_eq!(visible_window(3, 5, 10), (0, 5));
    }

    #[test]
    fn window_starts_at_top_near_beginning() {
        assert_eq!(visible_window(2, 100, 10), (0, 10));
    }

    #[test]
    fn window_centers_on_selection() {
        assert_eq!(visible_window(50, 100, 10), (45, 55));
    }

    #[test]
    fn window_sticks_to_bottom_near_end() {
        assert_eq!(visible_window(98, 100, 10), (90, 100));
    }

    #[test]
    fn zero_height_shows_nothing() {
        let (start, end) = visible_window(5, 20, 0);
        assert_eq!(start, end);
    }
}
