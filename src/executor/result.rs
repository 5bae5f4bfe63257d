//! Result types for query execution

use std::sync::Arc;

use serde::Serialize;

use crate::dataset::Record;
use crate::query::Page;

/// One page of search results
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResult {
    /// Records in result order
    pub data: Vec<Arc<Record>>,
    /// Matching records before pagination
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PaginatedResult {
    /// Cuts `[offset, offset + limit)` out of the fully refined and sorted
    /// sequence, clipped to its length.
    pub fn paginate(mut records: Vec<Arc<Record>>, page: Page) -> Self {
        let total = records.len();
        let limit = page.limit();
        let offset = page.offset();

        let start = offset.min(total);
        let end = offset.saturating_add(limit).min(total);
        records.truncate(end);
        let data = records.split_off(start);

        Self {
            data,
            total,
            limit,
            offset,
            has_next: offset.saturating_add(limit) < total,
            has_previous: offset > 0,
        }
    }

    /// An empty page that still echoes the requested window
    pub fn empty(page: Page) -> Self {
        Self::paginate(Vec::new(), page)
    }

    /// Returns true if no records are on this page
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of records on this page
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Record>> {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::DatasetKind;
    use serde_json::json;

    fn records(n: usize) -> Vec<Arc<Record>> {
        (0..n)
            .map(|i| {
                Arc::new(
                    Record::from_raw(DatasetKind::Airports, i, json!({"iataCode": format!("A{i}")}))
                        .unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn test_middle_page() {
        let page = PaginatedResult::paginate(records(10), Page::clamped(Some(3), Some(3)));
        assert_eq!(page.len(), 3);
        assert_eq!(page.total, 10);
        assert_eq!(page.data[0].code(), Some("A3"));
        assert!(page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_last_partial_page() {
        let page = PaginatedResult::paginate(records(10), Page::clamped(Some(4), Some(8)));
        assert_eq!(page.len(), 2);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_offset_beyond_total() {
        let page = PaginatedResult::paginate(records(5), Page::clamped(Some(10), Some(50)));
        assert!(page.is_empty());
        assert_eq!(page.total, 5);
        assert!(!page.has_next);
        assert!(page.has_previous);
    }

    #[test]
    fn test_exact_fit_has_no_next() {
        let page = PaginatedResult::paginate(records(10), Page::clamped(Some(5), Some(5)));
        assert_eq!(page.len(), 5);
        assert!(!page.has_next);
    }

    #[test]
    fn test_empty_serializes_camel_case() {
        let page = PaginatedResult::empty(Page::default());
        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [],
                "total": 0,
                "limit": 100,
                "offset": 0,
                "hasNext": false,
                "hasPrevious": false
            })
        );
    }
}
