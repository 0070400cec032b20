//! Pure pagination helpers: page count, page slices, and the visible
//! page-number window. No shared state; safe to call on every render.

/// How many pages to show on each side of the current page.
pub const WINDOW_RADIUS: usize = 2;

/// One token in the page-control strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(usize),
    /// A collapsed run of omitted page numbers.
    Ellipsis,
}

/// Ceiling division; zero pages iff the list is empty.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    debug_assert!(items_per_page > 0);
    total_items.div_ceil(items_per_page)
}

/// The contiguous sub-slice for a 1-based `page`, clipped to the list
/// bounds. Empty when the start index is past the end.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    debug_assert!(page > 0 && items_per_page > 0);
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = (start + items_per_page).min(items.len());
    &items[start..end]
}

/// Computes the page tokens shown in the control strip.
///
/// The window always covers `current_page` plus `radius` pages on each
/// side. Runs of two or more omitted pages collapse into an ellipsis
/// between the boundary page (1 or `total_pages`) and the window; a gap
/// of a single page is shown outright, never collapsed.
pub fn compute_window(current_page: usize, total_pages: usize, radius: usize) -> Vec<PageToken> {
    if total_pages == 0 {
        return Vec::new();
    }
    let lower = current_page.saturating_sub(radius).max(1);
    let upper = (current_page + radius).min(total_pages);

    let mut tokens = Vec::with_capacity(upper.saturating_sub(lower) + 5);
    if lower > 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
    } else if lower == 2 {
        tokens.push(PageToken::Page(1));
    }
    tokens.extend((lower..=upper).map(PageToken::Page));
    if upper + 1 < total_pages {
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total_pages));
    } else if upper + 1 == total_pages {
        tokens.push(PageToken::Page(total_pages));
    }
    tokens
}

/// Resolves a page-change request. Requests outside `[1, total_pages]`
/// are rejected and leave the current page unchanged.
pub fn resolve_page_request(current_page: usize, requested: usize, total_pages: usize) -> usize {
    if requested == 0 || requested > total_pages {
        current_page
    } else {
        requested
    }
}

#[cfg(test)]
mod tests {
    use super::{
        compute_window, page_slice, resolve_page_request, total_pages, PageToken, WINDOW_RADIUS,
    };

    fn pages(tokens: &[PageToken]) -> Vec<usize> {
        tokens
            .iter()
            .filter_map(|token| match token {
                PageToken::Page(n) => Some(*n),
                PageToken::Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(1, 6), 1);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn page_slice_covers_scenario_thirteen_items() {
        let items: Vec<usize> = (0..13).collect();
        assert_eq!(page_slice(&items, 1, 6), &(0..6).collect::<Vec<_>>()[..]);
        assert_eq!(page_slice(&items, 2, 6), &(6..12).collect::<Vec<_>>()[..]);
        assert_eq!(page_slice(&items, 3, 6), &[12]);
        assert_eq!(page_slice(&items, 4, 6), &[] as &[usize]);
    }

    #[test]
    fn page_slices_reconstruct_the_list() {
        for (total_items, per_page) in [(13usize, 6usize), (12, 6), (1, 6), (25, 4), (6, 6)] {
            let items: Vec<usize> = (0..total_items).collect();
            let total = total_pages(total_items, per_page);
            let mut rebuilt = Vec::new();
            for page in 1..=total {
                let slice = page_slice(&items, page, per_page);
                assert!(!slice.is_empty());
                assert!(slice.len() <= per_page);
                if page < total {
                    assert_eq!(slice.len(), per_page);
                }
                rebuilt.extend_from_slice(slice);
            }
            assert_eq!(rebuilt, items);
        }
    }

    #[test]
    fn window_middle_of_many_pages() {
        let window = compute_window(5, 10, WINDOW_RADIUS);
        assert_eq!(
            window,
            vec![
                PageToken::Page(1),
                PageToken::Ellipsis,
                PageToken::Page(3),
                PageToken::Page(4),
                PageToken::Page(5),
                PageToken::Page(6),
                PageToken::Page(7),
                PageToken::Ellipsis,
                PageToken::Page(10),
            ]
        );
    }

    #[test]
    fn window_without_ellipses_when_everything_fits() {
        let window = compute_window(2, 3, WINDOW_RADIUS);
        assert_eq!(
            window,
            vec![PageToken::Page(1), PageToken::Page(2), PageToken::Page(3)]
        );
    }

    #[test]
    fn single_page_gap_is_shown_not_collapsed() {
        // Lower bound lands exactly on 2: page 1 appears without an ellipsis.
        let window = compute_window(4, 10, WINDOW_RADIUS);
        assert_eq!(pages(&window), vec![1, 2, 3, 4, 5, 6, 10]);
        let ellipses = window
            .iter()
            .filter(|t| matches!(t, PageToken::Ellipsis))
            .count();
        assert_eq!(ellipses, 1);

        // Symmetric case at the upper end.
        let window = compute_window(7, 10, WINDOW_RADIUS);
        assert_eq!(pages(&window), vec![1, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn degenerate_window_sizes() {
        assert!(compute_window(1, 0, WINDOW_RADIUS).is_empty());
        assert_eq!(compute_window(1, 1, WINDOW_RADIUS), vec![PageToken::Page(1)]);
        assert_eq!(
            compute_window(1, 2, WINDOW_RADIUS),
            vec![PageToken::Page(1), PageToken::Page(2)]
        );
    }

    #[test]
    fn window_pages_are_strictly_increasing_and_bounded() {
        for total in 0..=20usize {
            for current in 1..=total.max(1) {
                let window = compute_window(current, total, WINDOW_RADIUS);
                let nums = pages(&window);
                if total > 0 {
                    assert!(nums.contains(&current), "missing current {current} of {total}");
                }
                assert!(nums.windows(2).all(|pair| pair[0] < pair[1]));
                assert!(nums.iter().all(|&n| n >= 1 && n <= total));
                let ellipses = window
                    .iter()
                    .filter(|t| matches!(t, PageToken::Ellipsis))
                    .count();
                assert!(ellipses <= 2);
            }
        }
    }

    #[test]
    fn out_of_range_requests_keep_the_current_page() {
        assert_eq!(resolve_page_request(2, 0, 3), 2);
        assert_eq!(resolve_page_request(2, 4, 3), 2);
        assert_eq!(resolve_page_request(2, 3, 3), 3);
        assert_eq!(resolve_page_request(2, 1, 3), 1);
        assert_eq!(resolve_page_request(1, 1, 0), 1);
    }
}
