//! Page math for the listing grid.

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// Number of pages needed to show `total` rows, zero when there are none.
#[must_use]
pub fn total_pages(total: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    u32::try_from(total.div_ceil(u64::from(per_page))).unwrap_or(u32::MAX)
}

/// Rows to skip before `page` (1-based).
#[must_use]
pub fn offset(page: u32, per_page: u32) -> u64 {
    u64::from(page.saturating_sub(1)) * u64::from(per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 12), 3);
    }

    #[test]
    fn total_pages_with_zero_per_page_is_zero() {
        assert_eq!(total_pages(42, 0), 0);
    }

    #[test]
    fn offset_is_zero_on_first_page() {
        assert_eq!(offset(1, 10), 0);
        assert_eq!(offset(3, 12), 24);
    }

    #[test]
    fn offset_treats_page_zero_as_first() {
        assert_eq!(offset(0, 10), 0);
    }
}
