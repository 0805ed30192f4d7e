//! Derived-state helpers for sortable, paginated tables.
//!
//! Render-free versions of the logic every dashboard table repeats: sort the
//! rows on the clicked column, slice out the current page, and track which
//! column/direction is active. Pages are 1-based, matching the pager UI.

use std::cmp::Ordering;

/// Sort direction of the active table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    /// Tables open sorted by the largest values first.
    #[default]
    Descending,
}

impl SortDirection {
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Stable-sort rows by a key selector.
///
/// Incomparable keys (NaN metrics) compare equal, so they keep their relative
/// input position instead of poisoning the sort.
pub fn sort_rows<T, K, F>(rows: &mut [T], key: F, direction: SortDirection)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    rows.sort_by(|a, b| {
        let ord = key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

/// Number of pages needed for `len` rows; a table always has at least one
/// (possibly empty) page.
pub fn page_count(len: usize, per_page: usize) -> usize {
    if per_page == 0 || len == 0 {
        return 1;
    }
    len.div_ceil(per_page)
}

/// The rows of one page. `page` is 1-based and clamped into range.
pub fn page_slice<T>(rows: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 || rows.is_empty() {
        return &[];
    }
    let page = page.clamp(1, page_count(rows.len(), per_page));
    let start = (page - 1) * per_page;
    let end = (start + per_page).min(rows.len());
    &rows[start..end]
}

/// Sort + pagination state of one table, generic over the column identifier.
///
/// Clicking the active column flips its direction; clicking another column
/// activates it descending (the dashboard's default for numeric columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableView<S> {
    pub sort_field: S,
    pub direction: SortDirection,
    pub page: usize,
    pub per_page: usize,
}

impl<S: PartialEq + Copy> TableView<S> {
    pub fn new(sort_field: S, per_page: usize) -> Self {
        Self {
            sort_field,
            direction: SortDirection::Descending,
            page: 1,
            per_page,
        }
    }

    pub fn toggle_sort(&mut self, field: S) {
        if self.sort_field == field {
            self.direction = self.direction.toggle();
        } else {
            self.sort_field = field;
            self.direction = SortDirection::Descending;
        }
    }

    /// Move to a page, ignoring out-of-range requests.
    pub fn set_page(&mut self, page: usize, row_count: usize) {
        if page >= 1 && page <= page_count(row_count, self.per_page) {
            self.page = page;
        }
    }

    /// Sorted rows of the current page.
    pub fn apply<'a, T, K, F>(&self, rows: &'a mut [T], key: F) -> &'a [T]
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        sort_rows(rows, key, self.direction);
        page_slice(rows, self.page, self.per_page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Column {
        Tvl,
        Volume,
    }

    #[test]
    fn test_sort_rows_descending_default() {
        let mut rows = vec![1.0, 5.0, 3.0];
        sort_rows(&mut rows, |v| *v, SortDirection::Descending);
        assert_eq!(rows, vec![5.0, 3.0, 1.0]);
        sort_rows(&mut rows, |v| *v, SortDirection::Ascending);
        assert_eq!(rows, vec![1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_sort_rows_nan_keeps_position() {
        let mut rows = vec![2.0, f64::NAN, 1.0];
        sort_rows(&mut rows, |v| *v, SortDirection::Ascending);
        // NaN compares equal to its neighbors; the sort must not panic.
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
        assert_eq!(page_count(25, 10), 3);
        assert_eq!(page_count(5, 0), 1);
    }

    #[test]
    fn test_page_slice_bounds() {
        let rows: Vec<u32> = (0..25).collect();
        assert_eq!(page_slice(&rows, 1, 10), (0..10).collect::<Vec<_>>());
        assert_eq!(page_slice(&rows, 3, 10), (20..25).collect::<Vec<_>>());
        // out-of-range pages clamp
        assert_eq!(page_slice(&rows, 99, 10), (20..25).collect::<Vec<_>>());
        assert_eq!(page_slice(&rows, 0, 10), (0..10).collect::<Vec<_>>());
        assert!(page_slice(&rows, 1, 0).is_empty());
    }

    #[test]
    fn test_toggle_sort_semantics() {
        let mut view = TableView::new(Column::Tvl, 10);
        assert_eq!(view.direction, SortDirection::Descending);

        // re-click flips
        view.toggle_sort(Column::Tvl);
        assert_eq!(view.direction, SortDirection::Ascending);

        // new column resets to descending
        view.toggle_sort(Column::Volume);
        assert_eq!(view.sort_field, Column::Volume);
        assert_eq!(view.direction, SortDirection::Descending);
    }

    #[test]
    fn test_set_page_ignores_out_of_range() {
        let mut view = TableView::new(Column::Tvl, 10);
        view.set_page(3, 25);
        assert_eq!(view.page, 3);
        view.set_page(4, 25);
        assert_eq!(view.page, 3);
        view.set_page(0, 25);
        assert_eq!(view.page, 3);
    }

    #[test]
    fn test_apply_sorts_and_slices() {
        let mut view = TableView::new(Column::Volume, 2);
        let mut rows = vec![10.0, 40.0, 20.0, 30.0];
        let page = view.apply(&mut rows, |v| *v).to_vec();
        assert_eq!(page, vec![40.0, 30.0]);
        view.set_page(2, 4);
        let page = view.apply(&mut rows, |v| *v).to_vec();
        assert_eq!(page, vec![20.0, 10.0]);
    }
}
