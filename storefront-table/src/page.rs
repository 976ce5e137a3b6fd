//! Page arithmetic.

use std::ops::Range;

/// Number of pages for `filtered` rows. Never less than one, so an empty
/// result still has a page to show its empty state on.
pub fn page_count(filtered: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 1;
    }
    filtered.div_ceil(page_size).max(1)
}

/// Clamp a page index into `[0, count - 1]`.
pub fn clamp_page(page: usize, count: usize) -> usize {
    page.min(count.saturating_sub(1))
}

/// Positions within the filtered sequence shown on `page`.
pub fn page_bounds(page: usize, page_size: usize, filtered: usize) -> Range<usize> {
    let start = page.saturating_mul(page_size).min(filtered);
    let end = start.saturating_add(page_size).min(filtered);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_has_a_floor_of_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(1, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
    }

    #[test]
    fn bounds_stop_at_the_end() {
        assert_eq!(page_bounds(0, 10, 25), 0..10);
        assert_eq!(page_bounds(2, 10, 25), 20..25);
        assert_eq!(page_bounds(3, 10, 25), 25..25);
        assert_eq!(page_bounds(0, 10, 0), 0..0);
    }

    #[test]
    fn clamp_to_last_page() {
        assert_eq!(clamp_page(5, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(4, 0), 0);
    }
}
