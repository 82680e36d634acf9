//! Client-side filtering and pagination over in-memory record collections.
//!
//! Every list screen owns one [`FilteredCollection`]: the full set of records,
//! the filter values typed or selected by the user and the current page. The
//! visible page is recomputed from those three inputs on demand, and
//! [`compute_view`] exposes the same computation as a pure function.

use std::fmt::Display;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Page size used when a screen does not configure its own.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// A record that can be shown in a filtered list screen.
pub trait Filterable {
    /// Status enum matched by the status drop-down.
    type Status: PartialEq;

    /// Text fields searched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Current status of the record.
    fn status(&self) -> &Self::Status;

    /// Instant compared against the date range filter.
    fn timestamp(&self) -> NaiveDateTime;
}

/// Status drop-down value. `All` is the "all" sentinel and matches everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusFilter<S> {
    All,
    Only(S),
}

impl<S> Default for StatusFilter<S> {
    fn default() -> Self {
        StatusFilter::All
    }
}

impl<S: PartialEq> StatusFilter<S> {
    pub fn matches(&self, status: &S) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => expected == status,
        }
    }
}

impl<S: FromStr> StatusFilter<S> {
    /// Parses a raw drop-down value. Blank, `all` and unknown values select `All`.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return StatusFilter::All;
        };
        if raw.eq_ignore_ascii_case("all") {
            return StatusFilter::All;
        }
        raw.parse().map(StatusFilter::Only).unwrap_or_default()
    }
}

impl<S: Display> StatusFilter<S> {
    /// Key echoed back into the drop-down.
    pub fn key(&self) -> String {
        match self {
            StatusFilter::All => "all".to_string(),
            StatusFilter::Only(status) => status.to_string(),
        }
    }
}

/// Inclusive calendar-day range. A missing bound is unbounded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// First instant of the start day.
    pub fn lower_bound(&self) -> Option<NaiveDateTime> {
        self.start.map(|day| day.and_time(NaiveTime::MIN))
    }

    /// Last instant of the end day, so that a same-day range is inclusive.
    pub fn upper_bound(&self) -> Option<NaiveDateTime> {
        self.end
            .and_then(|day| day.and_hms_nano_opt(23, 59, 59, 999_999_999))
    }

    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.lower_bound().is_none_or(|lower| timestamp >= lower)
            && self.upper_bound().is_none_or(|upper| timestamp <= upper)
    }
}

/// Filter values of one list screen. All active predicates are ANDed.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState<S> {
    pub search: String,
    pub status: StatusFilter<S>,
    pub date_range: DateRange,
}

impl<S> Default for FilterState<S> {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            date_range: DateRange::default(),
        }
    }
}

impl<S: PartialEq> FilterState<S> {
    /// Returns true when `item` passes every active predicate.
    pub fn matches<T>(&self, item: &T) -> bool
    where
        T: Filterable<Status = S>,
    {
        let needle = self.search.trim().to_lowercase();
        let text_ok = needle.is_empty()
            || item
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle));

        text_ok
            && self.status.matches(item.status())
            && self.date_range.contains(item.timestamp())
    }
}

/// A single filter field change.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate<S> {
    Search(String),
    Status(StatusFilter<S>),
    DateRange(DateRange),
    DateStart(Option<NaiveDate>),
    DateEnd(Option<NaiveDate>),
}

/// Current page (1-based) and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub items_per_page: usize,
}

impl PageState {
    /// First page with the given size. A zero size falls back to the default.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            current_page: 1,
            items_per_page: if items_per_page == 0 {
                DEFAULT_ITEMS_PER_PAGE
            } else {
                items_per_page
            },
        }
    }

    fn offset(&self) -> usize {
        (self.current_page - 1) * self.items_per_page
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_ITEMS_PER_PAGE)
    }
}

/// Number of pages needed to show `count` items. Never less than one.
pub fn total_pages(count: usize, items_per_page: usize) -> usize {
    count.div_ceil(items_per_page.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Returns the records passing `filter`, in source order.
pub fn filter_items<'a, T: Filterable>(
    items: &'a [T],
    filter: &FilterState<T::Status>,
) -> Vec<&'a T> {
    items.iter().filter(|item| filter.matches(*item)).collect()
}

/// The derived state of a list screen for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionView<'a, T> {
    /// Records on the current page, at most `items_per_page` of them.
    pub items: Vec<&'a T>,
    pub current_page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub items_per_page: usize,
}

/// Filters `items` and slices out the requested page.
///
/// The page in `page` is clamped into range, so any input produces a valid
/// view.
pub fn compute_view<'a, T: Filterable>(
    items: &'a [T],
    filter: &FilterState<T::Status>,
    page: &PageState,
) -> CollectionView<'a, T> {
    let filtered = filter_items(items, filter);
    let filtered_count = filtered.len();
    let items_per_page = page.items_per_page.max(1);
    let total_pages = total_pages(filtered_count, items_per_page);
    let page = PageState {
        current_page: clamp_page(page.current_page, total_pages),
        items_per_page,
    };

    let items = filtered
        .into_iter()
        .skip(page.offset())
        .take(items_per_page)
        .collect();

    CollectionView {
        items,
        current_page: page.current_page,
        total_pages,
        filtered_count,
        items_per_page,
    }
}

/// Records of one list screen together with its filter and page state.
pub struct FilteredCollection<T: Filterable> {
    items: Vec<T>,
    filter: FilterState<T::Status>,
    page: PageState,
}

impl<T: Filterable> FilteredCollection<T> {
    pub fn new(items: Vec<T>, items_per_page: usize) -> Self {
        Self {
            items,
            filter: FilterState::default(),
            page: PageState::new(items_per_page),
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filter(&self) -> &FilterState<T::Status> {
        &self.filter
    }

    pub fn page(&self) -> PageState {
        self.page
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.page.items_per_page
    }

    /// Applies one filter change and returns to the first page.
    pub fn set_filter(&mut self, update: FilterUpdate<T::Status>) {
        match update {
            FilterUpdate::Search(search) => self.filter.search = search,
            FilterUpdate::Status(status) => self.filter.status = status,
            FilterUpdate::DateRange(range) => self.filter.date_range = range,
            FilterUpdate::DateStart(start) => self.filter.date_range.start = start,
            FilterUpdate::DateEnd(end) => self.filter.date_range.end = end,
        }
        self.page.current_page = 1;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.set_filter(FilterUpdate::Search(search.into()));
    }

    pub fn set_status(&mut self, status: StatusFilter<T::Status>) {
        self.set_filter(FilterUpdate::Status(status));
    }

    pub fn set_date_range(&mut self, range: DateRange) {
        self.set_filter(FilterUpdate::DateRange(range));
    }

    pub fn set_date_start(&mut self, start: Option<NaiveDate>) {
        self.set_filter(FilterUpdate::DateStart(start));
    }

    pub fn set_date_end(&mut self, end: Option<NaiveDate>) {
        self.set_filter(FilterUpdate::DateEnd(end));
    }

    /// Moves to page `page`, clamped into `[1, total_pages]`.
    pub fn set_page(&mut self, page: usize) {
        self.page.current_page = clamp_page(page, self.total_pages());
    }

    /// Changes the page size and clamps the current page. Zero is ignored.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        if items_per_page == 0 {
            return;
        }
        self.page.items_per_page = items_per_page;
        self.page.current_page = clamp_page(self.page.current_page, self.total_pages());
    }

    /// Swaps the source collection, keeping the filters.
    pub fn replace_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.page.current_page = clamp_page(self.page.current_page, self.total_pages());
    }

    pub fn filtered(&self) -> Vec<&T> {
        filter_items(&self.items, &self.filter)
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered_count(), self.page.items_per_page)
    }

    pub fn view(&self) -> CollectionView<'_, T> {
        compute_view(&self.items, &self.filter, &self.page)
    }
}
