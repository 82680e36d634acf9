use serde::Serialize;

use crate::collection::CollectionView;

/// Page links for the pagination bar. `None` marks an ellipsis.
///
/// Page one, the last page, the current page and its neighbours are always
/// present. The leading ellipsis appears only when `current_page > 3`, the
/// trailing one only when `current_page < total_pages - 2`.
fn get_pages(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    let last_page = total_pages.max(1);
    let current_page = current_page.clamp(1, last_page);

    let mut pages = vec![Some(1)];
    if last_page == 1 {
        return pages;
    }

    if current_page > 3 {
        pages.push(None);
    }

    let mid_start = current_page.saturating_sub(1).max(2);
    let mid_end = (current_page + 1).min(last_page - 1);
    pages.extend((mid_start..=mid_end).map(Some));

    if current_page + 2 < last_page {
        pages.push(None);
    }
    pages.push(Some(last_page));

    pages
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
}

impl<T> Paginated<T> {
    pub fn new(
        items: Vec<T>,
        current_page: usize,
        total_pages: usize,
        total_items: usize,
        per_page: usize,
    ) -> Self {
        let current_page = if current_page == 0 { 1 } else { current_page };

        let pages = get_pages(total_pages, current_page);

        Self {
            items,
            pages,
            page: current_page,
            total_pages: total_pages.max(1),
            total_items,
            per_page,
        }
    }

    /// Converts every item, keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Paginated<U>
    where
        F: FnMut(T) -> U,
    {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            pages: self.pages,
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            per_page: self.per_page,
        }
    }
}

impl<T: Clone> From<CollectionView<'_, T>> for Paginated<T> {
    fn from(view: CollectionView<'_, T>) -> Self {
        Paginated::new(
            view.items.into_iter().cloned().collect(),
            view.current_page,
            view.total_pages,
            view.filtered_count,
            view.items_per_page,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_has_no_ellipsis() {
        assert_eq!(get_pages(1, 1), vec![Some(1)]);
        assert_eq!(get_pages(0, 1), vec![Some(1)]);
    }

    #[test]
    fn small_page_counts_show_every_page() {
        assert_eq!(get_pages(2, 1), vec![Some(1), Some(2)]);
        assert_eq!(get_pages(3, 2), vec![Some(1), Some(2), Some(3)]);
        assert_eq!(
            get_pages(5, 3),
            vec![Some(1), Some(2), Some(3), Some(4), Some(5)]
        );
    }

    #[test]
    fn leading_ellipsis_only_after_page_three() {
        assert_eq!(
            get_pages(10, 3),
            vec![Some(1), Some(2), Some(3), Some(4), None, Some(10)]
        );
        assert_eq!(
            get_pages(10, 4),
            vec![Some(1), None, Some(3), Some(4), Some(5), None, Some(10)]
        );
    }

    #[test]
    fn trailing_ellipsis_only_before_last_two_pages() {
        assert_eq!(
            get_pages(10, 8),
            vec![Some(1), None, Some(7), Some(8), Some(9), Some(10)]
        );
        assert_eq!(
            get_pages(10, 7),
            vec![Some(1), None, Some(6), Some(7), Some(8), None, Some(10)]
        );
    }

    #[test]
    fn edges_of_a_long_range() {
        assert_eq!(get_pages(10, 1), vec![Some(1), Some(2), None, Some(10)]);
        assert_eq!(get_pages(10, 10), vec![Some(1), None, Some(9), Some(10)]);
    }

    #[test]
    fn paginated_treats_page_zero_as_first() {
        let paginated = Paginated::new(vec![1, 2, 3], 0, 4, 31, 10);
        assert_eq!(paginated.page, 1);
        assert_eq!(paginated.pages, vec![Some(1), Some(2), None, Some(4)]);

        let doubled = paginated.map(|n| n * 2);
        assert_eq!(doubled.items, vec![2, 4, 6]);
        assert_eq!(doubled.total_items, 31);
    }
}
