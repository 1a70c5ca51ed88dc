//! Browser-free state behind paginated tables.
//!
//! Pages are 1-based here and 0-based on the wire. Every fetch is stamped
//! with a token; only the completion carrying the newest token may touch
//! the list, so a slow response can never overwrite a newer one.

use payloads::{Page, QueryParams};

pub const DEFAULT_PAGE_SIZE: u32 = 10;

pub const PAGE_SIZE_CHOICES: [u32; 5] = [5, 10, 50, 500, 1000];

/// One request issued by a [`PaginatedList`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageFetch {
    pub token: u64,
    /// Requested 1-based page.
    pub page: u32,
    /// Full wire query, including `page` and `size`.
    pub query: QueryParams,
}

#[derive(Debug, PartialEq)]
pub enum FetchOutcome<E> {
    Applied,
    /// The list is left exactly as it was before the request.
    Failed(E),
    /// A newer request was issued after this one; the response is dropped.
    Superseded,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedList<T> {
    data: Vec<T>,
    current_page: u32,
    total_pages: u32,
    total_items: u64,
    page_size: u32,
    default_filters: QueryParams,
    active_filters: QueryParams,
    latest_token: u64,
    pending: Option<u64>,
}

impl<T> PaginatedList<T> {
    pub fn new(page_size: u32, default_filters: QueryParams) -> Self {
        Self {
            data: Vec::new(),
            current_page: 1,
            total_pages: 1,
            total_items: 0,
            page_size,
            default_filters,
            active_filters: QueryParams::new(),
            latest_token: 0,
            pending: None,
        }
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Filters sent with the last request, on top of the defaults.
    pub fn active_filters(&self) -> &QueryParams {
        &self.active_filters
    }

    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a request for `page`.
    ///
    /// `Some(filters)` replaces the filters used by the previous request;
    /// `None` reuses them. Either way they are overlaid on the defaults
    /// given at construction. A `size` filter overrides the page size for
    /// this request only.
    pub fn begin_fetch(&mut self, page: u32, filters: Option<QueryParams>) -> PageFetch {
        let page = page.max(1);
        if let Some(filters) = filters {
            self.active_filters = filters;
        }

        let query = QueryParams::new()
            .with("page", page - 1)
            .with("size", self.page_size)
            .merged(&self.default_filters)
            .merged(&self.active_filters);

        self.latest_token += 1;
        self.pending = Some(self.latest_token);

        PageFetch {
            token: self.latest_token,
            page,
            query,
        }
    }

    /// Change the page size and restart from page 1 with only the default
    /// filters. Filters from earlier requests are dropped.
    pub fn begin_page_size_change(&mut self, size: u32) -> PageFetch {
        self.page_size = size;
        self.begin_fetch(1, Some(QueryParams::new()))
    }

    pub fn complete<E>(
        &mut self,
        fetch: &PageFetch,
        result: Result<Page<T>, E>,
    ) -> FetchOutcome<E> {
        if fetch.token != self.latest_token {
            return FetchOutcome::Superseded;
        }
        self.pending = None;

        match result {
            Ok(page) => {
                self.data = page.content;
                self.current_page = fetch.page;
                self.total_pages = page.total_pages;
                self.total_items = page.total_elements;
                FetchOutcome::Applied
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

/// What the pagination controls should show for a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    pub current_page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(current_page: u32, total_pages: u32) -> Self {
        Self {
            current_page,
            total_pages,
        }
    }

    pub fn previous_disabled(&self) -> bool {
        self.current_page <= 1
    }

    pub fn next_disabled(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// `current / total`, never showing a zero denominator.
    pub fn indicator(&self) -> String {
        format!("{} / {}", self.current_page, self.total_pages.max(1))
    }
}

/// Thousands grouped with `.`, as in pt-BR.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::QueryValue;

    fn page_of(items: std::ops::RangeInclusive<u32>, pages: u32, total: u64) -> Page<u32> {
        Page::new(items.collect(), pages, total)
    }

    #[test]
    fn page_index_is_zero_based_on_the_wire() {
        let mut list = PaginatedList::<u32>::new(10, QueryParams::new());
        for page in [1, 2, 7] {
            let fetch = list.begin_fetch(page, None);
            assert_eq!(fetch.query.get("page"), Some(&QueryValue::Int(page as i64 - 1)));
        }
    }

    #[test]
    fn first_page_of_farmers() {
        let mut list = PaginatedList::new(DEFAULT_PAGE_SIZE, QueryParams::new());
        let fetch = list.begin_fetch(1, None);
        assert_eq!(fetch.query.to_query_string(), "page=0&size=10");
        assert!(list.is_loading());

        let outcome = list.complete::<()>(&fetch, Ok(page_of(1..=10, 5, 47)));

        assert_eq!(outcome, FetchOutcome::Applied);
        assert_eq!(list.current_page(), 1);
        assert_eq!(list.total_pages(), 5);
        assert_eq!(list.total_items(), 47);
        assert_eq!(list.data(), (1..=10).collect::<Vec<_>>().as_slice());
        assert!(!list.is_loading());
    }

    #[test]
    fn failure_keeps_previous_state() {
        let mut list = PaginatedList::new(10, QueryParams::new());
        let first = list.begin_fetch(2, None);
        list.complete::<()>(&first, Ok(page_of(11..=20, 5, 47)));

        let second = list.begin_fetch(3, None);
        let outcome = list.complete(&second, Err("boom"));

        assert_eq!(outcome, FetchOutcome::Failed("boom"));
        assert_eq!(list.current_page(), 2);
        assert_eq!(list.data()[0], 11);
        assert!(!list.is_loading());
    }

    #[test]
    fn stale_response_is_discarded() {
        let mut list = PaginatedList::new(10, QueryParams::new());
        let slow = list.begin_fetch(1, Some(QueryParams::new().with("search", "ab")));
        let fast = list.begin_fetch(1, Some(QueryParams::new().with("search", "abc")));

        assert_eq!(
            list.complete::<()>(&fast, Ok(page_of(1..=1, 1, 1))),
            FetchOutcome::Applied
        );
        assert_eq!(
            list.complete::<()>(&slow, Ok(page_of(5..=9, 1, 5))),
            FetchOutcome::Superseded
        );
        assert_eq!(list.data(), &[1]);
    }

    #[test]
    fn loading_stays_set_until_latest_completes() {
        let mut list = PaginatedList::new(10, QueryParams::new());
        let old = list.begin_fetch(1, None);
        let _new = list.begin_fetch(2, None);
        list.complete::<()>(&old, Ok(page_of(1..=1, 1, 1)));
        assert!(list.is_loading());
    }

    #[test]
    fn filters_overlay_defaults_and_persist() {
        let defaults = QueryParams::new().with("typeId", 1);
        let mut list = PaginatedList::<u32>::new(10, defaults);

        let fetch = list.begin_fetch(1, Some(QueryParams::new().with("search", "maria")));
        assert_eq!(
            fetch.query.to_query_string(),
            "page=0&size=10&typeId=1&search=maria"
        );

        let next = list.begin_fetch(2, None);
        assert_eq!(
            next.query.to_query_string(),
            "page=1&size=10&typeId=1&search=maria"
        );

        let cleared = list.begin_fetch(1, Some(QueryParams::new().with("typeId", None::<i64>)));
        assert_eq!(cleared.query.to_query_string(), "page=0&size=10");
    }

    #[test]
    fn page_size_change_resets_to_first_page_and_default_filters() {
        let defaults = QueryParams::new().with("typeId", 2);
        let mut list = PaginatedList::<u32>::new(10, defaults);
        let fetch = list.begin_fetch(4, Some(QueryParams::new().with("search", "joão")));
        list.complete::<()>(&fetch, Ok(page_of(1..=10, 9, 90)));

        let resize = list.begin_page_size_change(50);

        assert_eq!(resize.page, 1);
        assert_eq!(resize.query.to_query_string(), "page=0&size=50&typeId=2");
        assert_eq!(list.page_size(), 50);
        assert!(list.active_filters().is_empty());
    }

    #[test]
    fn requested_page_is_not_clamped_to_total() {
        let mut list = PaginatedList::<u32>::new(10, QueryParams::new());
        let fetch = list.begin_fetch(9, None);
        list.complete::<()>(&fetch, Ok(Page::new(vec![], 5, 47)));
        assert_eq!(list.current_page(), 9);
    }

    #[test]
    fn pager_boundaries() {
        let first = Pager::new(1, 5);
        assert!(first.previous_disabled());
        assert!(!first.next_disabled());

        let last = Pager::new(5, 5);
        assert!(!last.previous_disabled());
        assert!(last.next_disabled());

        let empty = Pager::new(1, 0);
        assert_eq!(empty.indicator(), "1 / 1");
        assert!(empty.next_disabled());
    }

    #[test]
    fn counts_use_dot_grouping() {
        assert_eq!(format_count(5), "5");
        assert_eq!(format_count(500), "500");
        assert_eq!(format_count(1000), "1.000");
        assert_eq!(format_count(1234567), "1.234.567");
    }
}
