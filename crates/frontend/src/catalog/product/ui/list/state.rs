use contracts::catalog::{Pagination, ProductQuery, SubCategory};
use leptos::prelude::*;

/// Filter and pagination state for the products list. Pages are 1-based;
/// every filter change snaps back to the first page.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListState {
    pub search: String,
    pub category_id: String,
    pub sub_category_id: String,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub pages: usize,
    pub is_loaded: bool,
}

impl Default for ProductListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category_id: String::new(),
            sub_category_id: String::new(),
            page: 1,
            limit: 10,
            total: 0,
            pages: 0,
            is_loaded: false,
        }
    }
}

impl ProductListState {
    pub fn set_search(&mut self, search: String) {
        self.search = search;
        self.page = 1;
    }

    /// Changing the category invalidates the sub-category filter.
    pub fn set_category(&mut self, category_id: String) {
        self.category_id = category_id;
        self.sub_category_id.clear();
        self.page = 1;
    }

    pub fn set_sub_category(&mut self, sub_category_id: String) {
        self.sub_category_id = sub_category_id;
        self.page = 1;
    }

    /// Out-of-range targets are ignored.
    pub fn set_page(&mut self, page: usize) {
        if page >= 1 && page <= self.pages {
            self.page = page;
        }
    }

    /// Adopt the totals the server reported for the current query.
    pub fn apply(&mut self, pagination: &Pagination) {
        self.page = pagination.page;
        self.limit = pagination.limit;
        self.total = pagination.total;
        self.pages = pagination.pages;
        self.is_loaded = true;
    }

    pub fn query(&self) -> ProductQuery {
        ProductQuery {
            search: self.search.clone(),
            category_id: self.category_id.clone(),
            sub_category_id: self.sub_category_id.clone(),
            page: self.page,
            limit: self.limit,
        }
    }
}

/// Sub-categories offered in the filter select. With no category chosen
/// the full set is shown.
pub fn sub_categories_for(all: &[SubCategory], category_id: &str) -> Vec<SubCategory> {
    if category_id.is_empty() {
        return all.to_vec();
    }
    all.iter()
        .filter(|s| s.category.id == category_id)
        .cloned()
        .collect()
}

/// Monotonic fetch ticket. Responses that arrive after a newer fetch
/// started are dropped instead of overwriting fresher data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FetchSeq {
    latest: u64,
}

impl FetchSeq {
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

pub fn create_state() -> RwSignal<ProductListState> {
    RwSignal::new(ProductListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::catalog::CategoryRef;

    fn sub(id: &str, name: &str, category_id: &str) -> SubCategory {
        SubCategory {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            category: CategoryRef {
                id: category_id.to_string(),
                name: "cat".to_string(),
            },
        }
    }

    #[test]
    fn filters_reset_page() {
        let mut state = ProductListState::default();
        state.apply(&Pagination {
            page: 3,
            limit: 10,
            total: 42,
            pages: 5,
        });
        assert_eq!(state.page, 3);

        state.set_search("phone".to_string());
        assert_eq!(state.page, 1);

        state.set_page(4);
        state.set_category("c1".to_string());
        assert_eq!(state.page, 1);

        state.set_page(2);
        state.set_sub_category("s1".to_string());
        assert_eq!(state.page, 1);
    }

    #[test]
    fn category_change_clears_sub_category() {
        let mut state = ProductListState::default();
        state.set_category("c1".to_string());
        state.set_sub_category("s1".to_string());
        state.set_category("c2".to_string());
        assert_eq!(state.category_id, "c2");
        assert!(state.sub_category_id.is_empty());
    }

    #[test]
    fn set_page_ignores_out_of_range() {
        let mut state = ProductListState::default();
        state.apply(&Pagination {
            page: 1,
            limit: 10,
            total: 25,
            pages: 3,
        });

        state.set_page(0);
        assert_eq!(state.page, 1);
        state.set_page(4);
        assert_eq!(state.page, 1);
        state.set_page(3);
        assert_eq!(state.page, 3);
    }

    #[test]
    fn set_page_is_noop_before_first_load() {
        let mut state = ProductListState::default();
        state.set_page(2);
        assert_eq!(state.page, 1);
        assert!(!state.is_loaded);
    }

    #[test]
    fn query_mirrors_filters() {
        let mut state = ProductListState::default();
        state.set_search("mac".to_string());
        state.set_category("c1".to_string());
        let q = state.query();
        assert_eq!(q.search, "mac");
        assert_eq!(q.category_id, "c1");
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
    }

    #[test]
    fn sub_categories_follow_selected_category() {
        let all = vec![sub("s1", "a", "c1"), sub("s2", "b", "c2"), sub("s3", "c", "c1")];
        assert_eq!(sub_categories_for(&all, "").len(), 3);

        let filtered = sub_categories_for(&all, "c1");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|s| s.category.id == "c1"));
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut seq = FetchSeq::default();
        let first = seq.next();
        let second = seq.next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
