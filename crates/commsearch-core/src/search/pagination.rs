//! Pure pagination arithmetic.

/// One page of a flat result list, plus the derived display values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The contiguous slice visible on this page. Empty when the page is
    /// past the end of the list.
    pub visible: &'a [T],
    /// Total number of pages: `ceil(len / page_size)`, zero for an empty
    /// list.
    pub page_count: usize,
    /// Index of the first visible item (clamped to the list length).
    pub first_index: usize,
    /// Index one past the last visible item.
    pub last_index: usize,
}

/// Slices `items` into its `page`-th window of `page_size` items.
///
/// Pages are 1-based. The window is clamped to the list bounds, so a page
/// past the end yields an empty slice rather than an error, and page 0 is
/// treated as page 1 so the 1-based contract cannot underflow. A zero
/// `page_size` yields an empty page with a page count of zero.
///
/// Pure: same inputs, same output, no hidden state.
#[must_use]
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_count = if page_size == 0 {
        0
    } else {
        items.len().div_ceil(page_size)
    };
    let start = page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(items.len());
    let end = start.saturating_add(page_size).min(items.len());

    Page {
        visible: &items[start..end],
        page_count,
        first_index: start,
        last_index: end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twenty_five_items_make_three_pages() {
        let items: Vec<usize> = (0..25).collect();

        let page = paginate(&items, 1, 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.visible, (0..10).collect::<Vec<_>>());

        let page = paginate(&items, 3, 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.visible, (20..25).collect::<Vec<_>>());
        assert_eq!(page.first_index, 20);
        assert_eq!(page.last_index, 25);
    }

    #[test]
    fn empty_list_has_zero_pages_and_empty_first_page() {
        let items: Vec<usize> = Vec::new();
        let page = paginate(&items, 1, 10);
        assert_eq!(page.page_count, 0);
        assert!(page.visible.is_empty());
        assert_eq!(page.first_index, 0);
        assert_eq!(page.last_index, 0);
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, 7, 10);
        assert_eq!(page.page_count, 3);
        assert!(page.visible.is_empty());
        assert_eq!(page.first_index, 25);
        assert_eq!(page.last_index, 25);
    }

    #[test]
    fn page_zero_behaves_like_page_one() {
        let items: Vec<usize> = (0..25).collect();
        assert_eq!(paginate(&items, 0, 10), paginate(&items, 1, 10));
    }

    #[test]
    fn zero_page_size_yields_an_empty_page() {
        let items: Vec<usize> = (0..25).collect();
        let page = paginate(&items, 1, 0);
        assert_eq!(page.page_count, 0);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn paginate_is_idempotent() {
        let items: Vec<usize> = (0..42).collect();
        assert_eq!(paginate(&items, 2, 10), paginate(&items, 2, 10));
    }

    proptest! {
        #[test]
        fn page_count_is_the_ceiling_division(n in 0usize..500, page in 1usize..64) {
            let items: Vec<usize> = (0..n).collect();
            let result = paginate(&items, page, 10);
            prop_assert_eq!(result.page_count, n.div_ceil(10));
            prop_assert_eq!(result.page_count == 0, n == 0);
        }

        #[test]
        fn visible_is_the_clamped_window(n in 0usize..500, page in 1usize..64) {
            let items: Vec<usize> = (0..n).collect();
            let result = paginate(&items, page, 10);
            let start = ((page - 1) * 10).min(n);
            let end = (page * 10).min(n);
            prop_assert_eq!(result.visible, &items[start..end]);
            prop_assert_eq!(result.first_index, start);
            prop_assert_eq!(result.last_index, end);
            if (page - 1) * 10 >= n {
                prop_assert!(result.visible.is_empty());
            }
        }
    }
}
